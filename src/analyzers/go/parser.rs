//! Tree-sitter parser integration for Go
//!
//! Provides parsing using the tree-sitter-go grammar.

use crate::core::SourceTree;
use crate::errors::ScanError;
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

/// Get the tree-sitter language for Go
fn get_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go source code into a tree-sitter AST
pub fn parse_source(content: &str, path: &Path) -> Result<SourceTree, ScanError> {
    let mut parser = Parser::new();
    parser.set_language(&get_language())?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| ScanError::Parse {
            path: path.to_path_buf(),
        })?;

    Ok(SourceTree {
        tree,
        source: content.to_string(),
        path: path.to_path_buf(),
    })
}

/// Read and parse a Go file from disk
pub fn parse_file(path: &Path) -> Result<SourceTree, ScanError> {
    let content = crate::io::read_file(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&content, path)
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

/// First named child that is not a comment
pub fn first_named_child<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    child
}

/// Locate the first syntax error in a tree, depth-first
pub fn first_error<'t>(node: &Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children.iter().find_map(|child| first_error(child))
}

/// Turn the first syntax error of a tree into a located [`ScanError`]
pub fn syntax_error(tree: &SourceTree) -> Option<ScanError> {
    let root = tree.tree.root_node();
    first_error(&root).map(|node| ScanError::Syntax {
        path: tree.path.clone(),
        line: node_line(&node),
        column: node_column(&node),
    })
}

/// Declared package name from the file's `package` clause
pub fn package_name(tree: &SourceTree) -> Option<String> {
    let root = tree.tree.root_node();
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_clause")?;
    let mut clause_cursor = clause.walk();
    let ident = clause
        .named_children(&mut clause_cursor)
        .find(|child| child.kind() == "package_identifier")?;
    Some(node_text(&ident, &tree.source).to_string())
}
