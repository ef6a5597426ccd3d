//! Two-argument handler signature matching.

use crate::core::{FunctionDeclaration, TypeShape};

pub const FLOW_PACKAGE: &str = "flow";
pub const CONTEXT_TYPE: &str = "ProcessContext";
pub const INPUT_TYPE: &str = "DefinedInput";

/// Expected `(context, input)` parameter pattern of a registrable handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub context: TypeShape,
    pub input: TypeShape,
}

impl Signature {
    pub fn new(context: TypeShape, input: TypeShape) -> Self {
        Self { context, input }
    }

    /// `(*flow.ProcessContext, []flow.DefinedInput)`
    pub fn flow() -> Self {
        Self::new(
            TypeShape::pointer(TypeShape::qualified(FLOW_PACKAGE, CONTEXT_TYPE)),
            TypeShape::sequence(TypeShape::qualified(FLOW_PACKAGE, INPUT_TYPE)),
        )
    }

    /// Whether a parameter list has exactly the expected two shapes, in order.
    ///
    /// Any other arity, or a parameter without a shape, is simply not a match.
    pub fn matches(&self, params: &[Option<TypeShape>]) -> bool {
        match params {
            [Some(first), Some(second)] => {
                self.context.matches(first) && self.input.matches(second)
            }
            _ => false,
        }
    }

    /// Only exported, non-generic functions can be referenced as `pkg.Name`
    /// from the generated package. Declarations containing syntax errors are
    /// never trusted.
    pub fn matches_declaration(&self, decl: &FunctionDeclaration) -> bool {
        decl.is_exported() && !decl.is_generic && !decl.has_errors && self.matches(&decl.shapes())
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::flow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn context() -> TypeShape {
        TypeShape::pointer(TypeShape::qualified("flow", "ProcessContext"))
    }

    fn input() -> TypeShape {
        TypeShape::sequence(TypeShape::qualified("flow", "DefinedInput"))
    }

    #[test]
    fn test_matches_expected_pair() {
        assert!(Signature::flow().matches(&[Some(context()), Some(input())]));
    }

    #[test]
    fn test_order_matters() {
        assert!(!Signature::flow().matches(&[Some(input()), Some(context())]));
    }

    #[test]
    fn test_arity_must_be_two() {
        let signature = Signature::flow();
        assert!(!signature.matches(&[]));
        assert!(!signature.matches(&[Some(context())]));
        assert!(!signature.matches(&[Some(context()), Some(input()), Some(input())]));
    }

    #[test]
    fn test_depth_mismatch_rejected() {
        let signature = Signature::flow();
        assert!(!signature.matches(&[Some(TypeShape::pointer(context())), Some(input())]));
        assert!(!signature.matches(&[Some(context()), Some(TypeShape::sequence(input()))]));
    }

    #[test]
    fn test_unqualified_names_rejected() {
        let signature = Signature::flow();
        let bare_context = TypeShape::pointer(TypeShape::named("ProcessContext"));
        assert!(!signature.matches(&[Some(bare_context), Some(input())]));
    }

    #[test]
    fn test_shapeless_parameter_rejected() {
        assert!(!Signature::flow().matches(&[Some(context()), None]));
    }

    #[test]
    fn test_generic_and_erroneous_declarations_rejected() {
        let mut decl = FunctionDeclaration {
            name: "Handle".into(),
            line: 1,
            parameters: vec![
                crate::core::Parameter {
                    name: Some("ctx".into()),
                    shape: Some(context()),
                },
                crate::core::Parameter {
                    name: Some("in".into()),
                    shape: Some(input()),
                },
            ],
            is_generic: false,
            has_errors: false,
        };
        let signature = Signature::flow();
        assert!(signature.matches_declaration(&decl));

        decl.is_generic = true;
        assert!(!signature.matches_declaration(&decl));

        decl.is_generic = false;
        decl.has_errors = true;
        assert!(!signature.matches_declaration(&decl));

        decl.has_errors = false;
        decl.name = "handle".into();
        assert!(!signature.matches_declaration(&decl));
    }

    fn arb_shape() -> impl Strategy<Value = TypeShape> {
        let leaf = prop_oneof![
            "[A-Za-z]{1,12}".prop_map(|n| TypeShape::named(n)),
            ("[a-z]{1,6}", "[A-Za-z]{1,12}")
                .prop_map(|(q, n)| TypeShape::qualified(q, n)),
            Just(TypeShape::qualified("flow", "ProcessContext")),
            Just(TypeShape::qualified("flow", "DefinedInput")),
        ];
        leaf.prop_recursive(4, 16, 1, |inner| {
            prop_oneof![
                inner.clone().prop_map(TypeShape::pointer),
                inner.prop_map(TypeShape::sequence),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_only_exact_pair_matches(first in arb_shape(), second in arb_shape()) {
            let expected = first == context() && second == input();
            prop_assert_eq!(
                Signature::flow().matches(&[Some(first), Some(second)]),
                expected
            );
        }

        #[test]
        fn prop_shape_matches_itself(shape in arb_shape()) {
            prop_assert!(shape.matches(&shape));
        }
    }
}
