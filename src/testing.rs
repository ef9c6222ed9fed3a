//! Testing utilities for code that validates with Typo
//!
//! Assertion macros for chains and results, plus (with the `proptest`
//! feature) `Arbitrary` implementations for [`Value`](crate::Value) and
//! [`Mode`](crate::Mode).
//!
//! # Examples
//!
//! ```rust
//! use typo::prelude::*;
//! use typo::{assert_fails, assert_invalid_argument, assert_passes};
//!
//! assert_passes!(Typo::new(3).number().gt(0));
//! assert_fails!(TypoAll::new([1, -1]).unwrap().gt(0));
//! assert_invalid_argument!(is::empty(&Value::from(5)));
//! ```

/// Assert that a chain currently passes.
///
/// Panics with the chain's subject if it does not.
///
/// # Example
///
/// ```rust
/// use typo::prelude::*;
/// use typo::assert_passes;
///
/// assert_passes!(Typo::new("abc").string().not_empty().unwrap());
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($chain:expr) => {{
        let chain = $chain;
        if !$crate::Chain::end(&chain) {
            panic!(
                "Expected chain to pass, got failure for subject: {:?}",
                $crate::Chain::subject(&chain)
            );
        }
    }};
}

/// Assert that a chain currently fails.
///
/// # Example
///
/// ```rust
/// use typo::prelude::*;
/// use typo::assert_fails;
///
/// assert_fails!(Typo::new(1).string());
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($chain:expr) => {{
        let chain = $chain;
        if $crate::Chain::end(&chain) {
            panic!(
                "Expected chain to fail, got pass for subject: {:?}",
                $crate::Chain::subject(&chain)
            );
        }
    }};
}

/// Assert that a result is an `InvalidArgument` error.
///
/// # Example
///
/// ```rust
/// use typo::prelude::*;
/// use typo::assert_invalid_argument;
///
/// assert_invalid_argument!(TypoAll::new(5));
/// ```
#[macro_export]
macro_rules! assert_invalid_argument {
    ($result:expr) => {
        match $result {
            Err($crate::TypoError::InvalidArgument { .. }) => {}
            Err(other) => panic!("Expected InvalidArgument, got error: {:?}", other),
            Ok(v) => panic!("Expected InvalidArgument, got Ok: {:?}", v),
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Mode, Object, Value};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Primitives at the leaves, arrays and plain objects up to three levels
    /// deep.
    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            (-1000i32..1000).prop_map(Value::from),
            "[a-z0-9 ]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|entries| {
                    let object = entries
                        .into_iter()
                        .fold(Object::new(), |object, (key, value)| object.with(key, value));
                    Value::object(object)
                }),
            ]
        })
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Mode {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Mode::All), Just(Mode::Any)].boxed()
    }
}
