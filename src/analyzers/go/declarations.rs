//! Extraction of top-level function declarations and their parameter shapes.

use super::parser::{first_named_child, node_line, node_text};
use crate::core::{FunctionDeclaration, Parameter, SourceTree, TypeShape};
use tree_sitter::Node;

/// All top-level `func` declarations of a file, in source order.
///
/// Methods are not included: a method value cannot be referenced as
/// `pkg.Name` from another package. Declarations swallowed by an `ERROR`
/// node during recovery are not direct children of the root and are skipped.
pub fn extract_functions(tree: &SourceTree) -> Vec<FunctionDeclaration> {
    let root = tree.tree.root_node();
    let mut cursor = root.walk();
    let functions = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() == "function_declaration")
        .filter_map(|node| function_from_node(&node, &tree.source))
        .collect();
    functions
}

fn function_from_node(node: &Node, source: &str) -> Option<FunctionDeclaration> {
    let name = node.child_by_field_name("name")?;
    let parameters = node
        .child_by_field_name("parameters")
        .map(|list| extract_parameters(&list, source))
        .unwrap_or_default();

    Some(FunctionDeclaration {
        name: node_text(&name, source).to_string(),
        line: node_line(node),
        parameters,
        is_generic: node.child_by_field_name("type_parameters").is_some(),
        has_errors: node.has_error(),
    })
}

/// Flatten a `parameter_list` so that `a, b T` yields two parameters.
fn extract_parameters(list: &Node, source: &str) -> Vec<Parameter> {
    let mut parameters = Vec::new();
    let mut cursor = list.walk();

    for decl in list.named_children(&mut cursor) {
        let shape = match decl.kind() {
            "parameter_declaration" => decl
                .child_by_field_name("type")
                .and_then(|ty| shape_of(&ty, source)),
            // `...T` is not interchangeable with `[]T` in a function type.
            "variadic_parameter_declaration" => None,
            _ => continue,
        };

        let mut name_cursor = decl.walk();
        let names: Vec<String> = decl
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| node_text(&n, source).to_string())
            .collect();

        if names.is_empty() {
            parameters.push(Parameter { name: None, shape });
        } else {
            parameters.extend(names.into_iter().map(|name| Parameter {
                name: Some(name),
                shape: shape.clone(),
            }));
        }
    }

    parameters
}

/// Structural shape of a type node, or `None` for types outside the
/// `Named | Pointer | Sequence` vocabulary.
pub fn shape_of(node: &Node, source: &str) -> Option<TypeShape> {
    match node.kind() {
        "type_identifier" => Some(TypeShape::named(node_text(node, source))),
        "qualified_type" => {
            let package = node.child_by_field_name("package")?;
            let name = node.child_by_field_name("name")?;
            Some(TypeShape::qualified(
                node_text(&package, source),
                node_text(&name, source),
            ))
        }
        "pointer_type" => {
            let inner = first_named_child(node)?;
            shape_of(&inner, source).map(TypeShape::pointer)
        }
        "slice_type" => {
            let element = node.child_by_field_name("element")?;
            shape_of(&element, source).map(TypeShape::sequence)
        }
        "parenthesized_type" => {
            let inner = first_named_child(node)?;
            shape_of(&inner, source)
        }
        _ => None,
    }
}
