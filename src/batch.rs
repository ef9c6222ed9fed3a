//! Batch chains over array-like collections
//!
//! [`TypoAll`] applies every chained test to each element of a collection.
//! Each element keeps its own pass state, folded by the mode; after every test
//! the chain-level state absorbs "no element state is false". An empty
//! collection contributes the mode's identity instead, so an empty
//! [`Mode::Any`] batch never passes.
//!
//! [`check_all`] is the one-shot form, and [`all`] holds one such function per
//! test.
//!
//! # Example
//!
//! ```rust
//! use typo::prelude::*;
//!
//! assert!(TypoAll::new([1, 2, 3]).unwrap().gt(0).end());
//! assert!(!TypoAll::new([1, -2, 3]).unwrap().gt(0).end());
//!
//! assert_eq!(typo::all::number(&Value::from([1, 2])), Ok(true));
//! assert!(TypoAll::new(5).is_err());
//! ```

use crate::chain::Chain;
use crate::invert::{normalize, Arg};
use crate::registry::Test;
use crate::{predicates, Mode, TypoError, Value};

/// A chain over every element of an array-like subject.
#[derive(Clone, Debug)]
pub struct TypoAll {
    subject: Value,
    elements: Vec<Value>,
    mode: Mode,
    pass: bool,
    passing: Vec<bool>,
    negate_next: bool,
}

impl TypoAll {
    /// Start a conjunctive batch chain.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `items` is array-like.
    pub fn new(items: impl Into<Value>) -> Result<Self, TypoError> {
        Self::with_mode(items, Mode::All)
    }

    /// Start a batch chain with an explicit mode.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `items` is array-like with a length small
    /// enough to hold per-element state for.
    pub fn with_mode(items: impl Into<Value>, mode: Mode) -> Result<Self, TypoError> {
        let subject = items.into();
        let Some(elements) = subject.elements() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = subject.type_name(), "batch chain rejected subject");
            return Err(TypoError::invalid_argument(format!(
                "batch chains expect an array-like argument, got {}",
                subject.type_name()
            )));
        };
        let elements = elements?;
        Ok(TypoAll {
            passing: vec![mode.identity(); elements.len()],
            subject,
            elements,
            mode,
            pass: mode.identity(),
            negate_next: false,
        })
    }

    /// Start a batch chain with a mode given by name.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an unknown mode or a non-array-like subject.
    pub fn parse(items: impl Into<Value>, mode: &str) -> Result<Self, TypoError> {
        Self::with_mode(items, mode.parse()?)
    }

    /// Per-element pass states, parallel to the collection.
    pub fn passing(&self) -> &[bool] {
        &self.passing
    }

    /// The elements under test.
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    fn absorb(&mut self) {
        let aggregate = if self.passing.is_empty() {
            self.mode.identity()
        } else {
            self.passing.iter().all(|p| *p)
        };
        self.pass = self.mode.combine(self.pass, aggregate);
        #[cfg(feature = "tracing")]
        tracing::trace!(aggregate, pass = self.pass, "batch test recorded");
    }
}

impl Chain for TypoAll {
    fn subject(&self) -> &Value {
        &self.subject
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn not(mut self) -> Self {
        self.negate_next = true;
        self
    }

    fn record<F>(mut self, mut test: F) -> Self
    where
        F: FnMut(&Value) -> bool,
    {
        let invert = std::mem::take(&mut self.negate_next);
        let mode = self.mode;
        for (element, state) in self.elements.iter().zip(self.passing.iter_mut()) {
            *state = mode.combine(*state, test(element) != invert);
        }
        self.absorb();
        self
    }

    fn try_record<F>(mut self, mut test: F) -> Result<Self, TypoError>
    where
        F: FnMut(&Value) -> Result<bool, TypoError>,
    {
        let invert = std::mem::take(&mut self.negate_next);
        let mode = self.mode;
        for (element, state) in self.elements.iter().zip(self.passing.iter_mut()) {
            *state = mode.combine(*state, test(element)? != invert);
        }
        self.absorb();
        Ok(self)
    }

    /// Always fails: defaults only make sense for a single value.
    fn with_default(self, _default: impl Into<Value>) -> Result<Self, TypoError> {
        Err(TypoError::UnsupportedOperation {
            operation: "with_default",
            reason: "default values only apply to single-value chains",
        })
    }

    fn end(&self) -> bool {
        self.pass
    }

    fn settle(self) -> Option<Value> {
        if self.pass {
            Some(self.subject)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(mode = %self.mode, passing = ?self.passing, "batch chain failed");
            None
        }
    }
}

/// Shorthand for [`TypoAll::new`].
///
/// # Errors
///
/// `InvalidArgument` unless `items` is array-like.
pub fn typo_all(items: impl Into<Value>) -> Result<TypoAll, TypoError> {
    TypoAll::new(items)
}

/// Run `test` over every element of `items` and combine the results by
/// `mode`.
///
/// Each element's result is negated first when `args` holds an
/// [`INVERTER`](crate::INVERTER), then the results are folded left to right.
/// A subject that is not array-like is accepted only if it is an empty keyed
/// structure, in which case the result is the mode's identity.
///
/// # Errors
///
/// `InvalidArgument` for a non-empty, non-array-like subject, or whatever the
/// test raises for an element.
///
/// ```rust
/// use typo::{check_all, Arg, Mode, Test, Value, INVERTER};
///
/// let items = Value::from([1, 2, 3]);
/// assert_eq!(check_all(Test::Gt, &items, &[Arg::from(0)], Mode::All), Ok(true));
/// assert_eq!(check_all(Test::Gt, &items, &[Arg::from(2)], Mode::Any), Ok(true));
/// assert_eq!(check_all(Test::Gt, &items, &[Arg::from(2), INVERTER], Mode::All), Ok(false));
/// ```
pub fn check_all(test: Test, items: &Value, args: &[Arg], mode: Mode) -> Result<bool, TypoError> {
    let Some(elements) = items.elements() else {
        if predicates::not_empty(items)? {
            return Err(TypoError::invalid_argument(format!(
                "batch tests must be given an array-like, got {}",
                items.type_name()
            )));
        }
        return Ok(mode.identity());
    };
    let elements = elements?;
    let call = normalize(args);
    let predicate = test.predicate();
    let mut pass = mode.identity();
    for element in &elements {
        let outcome = call.outcome(predicate.call(element, &call.args)?);
        pass = mode.combine(pass, outcome);
    }
    Ok(pass)
}

pub mod all {
    //! Batch-static tests
    //!
    //! One function per test and synonym, applied to every element of an
    //! array-like and combined conjunctively.
    //!
    //! ```rust
    //! use typo::{all, Value};
    //!
    //! let scores = Value::from([3, 9, 4]);
    //! assert_eq!(all::int(&scores), Ok(true));
    //! assert_eq!(all::lt(&scores, 10), Ok(true));
    //! assert_eq!(all::greater(&scores, 3), Ok(false));
    //! assert!(all::number(&Value::from(7)).is_err());
    //! ```

    use super::check_all;
    use crate::invert::Arg;
    use crate::registry::{with_tests, Test};
    use crate::{Mode, TypoError, Value};

    macro_rules! batch_static {
        (@fn unary $variant:ident $name:ident) => {
            #[doc = concat!("`", stringify!($name), "` for every element.")]
            pub fn $name(items: &Value) -> Result<bool, TypoError> {
                check_all(Test::$variant, items, &[], Mode::All)
            }
        };
        (@fn try_unary $variant:ident $name:ident) => {
            batch_static!(@fn unary $variant $name);
        };
        (@fn binary $variant:ident $name:ident) => {
            #[doc = concat!("`", stringify!($name), "` against `arg` for every element.")]
            pub fn $name(items: &Value, arg: impl Into<Value>) -> Result<bool, TypoError> {
                check_all(Test::$variant, items, &[Arg::Value(arg.into())], Mode::All)
            }
        };
        (@fn try_binary $variant:ident $name:ident) => {
            batch_static!(@fn binary $variant $name);
        };
        ($( $variant:ident => $kind:ident $name:ident [$($alias:ident),*]; )*) => {
            $(
                batch_static!(@fn $kind $variant $name);
                $( pub use self::$name as $alias; )*
            )*
        };
    }

    with_tests!(batch_static);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainExt;
    use crate::{Object, INVERTER};

    #[test]
    fn test_requires_array_like() {
        assert!(TypoAll::new(5).unwrap_err().is_invalid_argument());
        assert!(TypoAll::new(Value::object(Object::new())).is_err());
        assert!(TypoAll::new("abc").is_ok());
        assert!(TypoAll::new(Value::object(Object::new().with("length", 1))).is_ok());
    }

    #[test]
    fn test_rejects_unallocatable_length() {
        let huge = Value::object(Object::new().with("length", 1e300));
        assert!(TypoAll::new(huge.clone()).unwrap_err().is_invalid_argument());
        assert!(check_all(Test::Number, &huge, &[], Mode::All)
            .unwrap_err()
            .is_invalid_argument());
        assert!(!crate::is::contains(&huge, &Value::from(1)));
    }

    #[test]
    fn test_fractional_length_visits_partial_index() {
        let items = Value::object(
            Object::new()
                .with("length", 2.5)
                .with("0", 1)
                .with("1", 2)
                .with("2", 3),
        );
        assert_eq!(TypoAll::new(items).unwrap().number().passing(), &[true, true, true]);
    }

    #[test]
    fn test_all_elements_pass() {
        assert!(TypoAll::new([1, 2, 3]).unwrap().gt(0).end());
        assert!(!TypoAll::new([1, -2, 3]).unwrap().gt(0).end());
    }

    #[test]
    fn test_per_element_states() {
        let chain = TypoAll::new([1, -2, 3]).unwrap().gt(0);
        assert_eq!(chain.passing(), &[true, false, true]);
    }

    #[test]
    fn test_any_mode() {
        let chain = TypoAll::with_mode([1, -2, 3], Mode::Any).unwrap().gt(0);
        assert!(!chain.end());
        assert_eq!(chain.passing(), &[true, false, true]);
        assert!(TypoAll::with_mode([1, 2], Mode::Any).unwrap().gt(0).end());
        assert!(!TypoAll::with_mode([-1, -2], Mode::Any).unwrap().gt(0).end());
    }

    #[test]
    fn test_any_mode_passes_when_each_element_meets_some_test() {
        let chain = TypoAll::with_mode([1, -2, 3], Mode::Any).unwrap().gt(0).lt(0);
        assert_eq!(chain.passing(), &[true, true, true]);
        assert!(chain.end());
    }

    #[test]
    fn test_empty_collection() {
        let empty = Value::from(Vec::<Value>::new());
        assert!(TypoAll::new(empty.clone()).unwrap().gt(0).end());
        assert!(!TypoAll::parse(empty, "any").unwrap().gt(0).end());
    }

    #[test]
    fn test_element_states_accumulate_across_tests() {
        let chain = TypoAll::new([1, 20]).unwrap().gt(0).lt(10);
        assert_eq!(chain.passing(), &[true, false]);
        assert!(!chain.end());
    }

    #[test]
    fn test_not_applies_to_every_element() {
        assert!(TypoAll::new(["a", "b"]).unwrap().not().number().end());
    }

    #[test]
    fn test_default_is_unsupported() {
        let err = TypoAll::new([1]).unwrap().with_default(5).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_or_returns_collection() {
        let items = Value::from([1, 2]);
        let chain = TypoAll::new(items.clone()).unwrap().number();
        assert_eq!(chain.or(), Ok(items));
        let chain = TypoAll::new([1, 2]).unwrap().string();
        assert_eq!(chain.or(), Err(TypoError::ChainFailed));
    }

    #[test]
    fn test_fallible_element_error() {
        let items = Value::array([Value::from([1]), Value::from(2)]);
        assert!(TypoAll::new(items).unwrap().empty().is_err());
    }

    #[test]
    fn test_check_all_tolerates_empty_keyed_structure() {
        let empty_object = Value::object(Object::new());
        assert_eq!(check_all(Test::Number, &empty_object, &[], Mode::All), Ok(true));
        assert_eq!(check_all(Test::Number, &empty_object, &[], Mode::Any), Ok(false));
    }

    #[test]
    fn test_check_all_rejects_bearing_non_array_like() {
        let object = Value::object(Object::new().with("a", 1));
        let err = check_all(Test::Number, &object, &[], Mode::All).unwrap_err();
        assert!(err.to_string().contains("array-like"));
        assert!(check_all(Test::Number, &Value::from(5), &[], Mode::All).is_err());
    }

    #[test]
    fn test_check_all_inverts_each_element_before_combining() {
        let items = Value::from([1, 5]);
        assert_eq!(
            check_all(Test::Gt, &items, &[Arg::from(2), INVERTER], Mode::Any),
            Ok(true)
        );
        assert_eq!(
            check_all(Test::Gt, &items, &[Arg::from(0), INVERTER], Mode::Any),
            Ok(false)
        );
    }

    #[test]
    fn test_check_all_evaluates_left_to_right() {
        use std::sync::{Arc, Mutex};

        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let record = Value::function(move |v| {
            log.lock().unwrap().push(v.clone());
            true
        });
        let items = Value::from([3, 1, 2]);
        assert_eq!(all::test(&items, record), Ok(true));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Value::from(3), Value::from(1), Value::from(2)]
        );
    }

    #[test]
    fn test_all_synonyms() {
        let items = Value::from([2, 4]);
        assert_eq!(all::num(&items), all::number(&items));
        assert_eq!(all::greater(&items, 1), Ok(true));
        assert_eq!(all::bearing(&Value::array([Value::from([1])])), Ok(true));
    }
}
