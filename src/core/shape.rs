//! Structural descriptors for parameter types.
//!
//! A [`TypeShape`] captures only the parts of a declared Go type that the
//! signature matcher cares about: named identifiers (optionally qualified by a
//! package alias), pointers and slices. Anything else has no shape.

use std::fmt;

/// Recursive structural descriptor of a parameter type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// `Name` or `qualifier.Name`
    Named {
        qualifier: Option<String>,
        name: String,
    },
    /// `*T`
    Pointer(Box<TypeShape>),
    /// `[]T`
    Sequence(Box<TypeShape>),
}

impl TypeShape {
    /// An unqualified identifier such as `ProcessContext`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            qualifier: None,
            name: name.into(),
        }
    }

    /// A package-qualified identifier such as `flow.ProcessContext`.
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeShape) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn sequence(inner: TypeShape) -> Self {
        Self::Sequence(Box::new(inner))
    }

    /// Node-by-node comparison of an actual shape against `self` as the pattern.
    ///
    /// Pointers only match pointers and sequences only match sequences, so
    /// nesting depth must agree exactly. Named shapes compare the literal
    /// identifier and the qualifier; an unqualified pattern does not match a
    /// qualified identifier and vice versa.
    pub fn matches(&self, actual: &TypeShape) -> bool {
        match (self, actual) {
            (Self::Pointer(expected), Self::Pointer(inner)) => expected.matches(inner),
            (Self::Sequence(expected), Self::Sequence(inner)) => expected.matches(inner),
            (
                Self::Named {
                    qualifier: expected_qualifier,
                    name: expected_name,
                },
                Self::Named { qualifier, name },
            ) => expected_name == name && expected_qualifier == qualifier,
            _ => false,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named {
                qualifier: Some(qualifier),
                name,
            } => write!(f, "{}.{}", qualifier, name),
            Self::Named {
                qualifier: None,
                name,
            } => write!(f, "{}", name),
            Self::Pointer(inner) => write!(f, "*{}", inner),
            Self::Sequence(inner) => write!(f, "[]{}", inner),
        }
    }
}
