use crate::core::shape::TypeShape;
use std::path::PathBuf;

/// One parsed Go source file.
#[derive(Clone, Debug)]
pub struct SourceTree {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}

impl SourceTree {
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// A top-level `func` declaration extracted from a [`SourceTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub line: usize,
    /// One entry per declared parameter; `a, b T` yields two entries.
    pub parameters: Vec<Parameter>,
    pub is_generic: bool,
    pub has_errors: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: Option<String>,
    /// `None` when the declared type has no structural shape (maps, arrays, variadics, ...).
    pub shape: Option<TypeShape>,
}

impl FunctionDeclaration {
    /// Go exports identifiers that start with an upper-case letter.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }

    pub fn shapes(&self) -> Vec<Option<TypeShape>> {
        self.parameters.iter().map(|p| p.shape.clone()).collect()
    }
}
