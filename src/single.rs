//! Single-value chains
//!
//! A [`Typo`] wraps one value and folds the result of every chained test into
//! one pass state, using its [`Mode`]. Terminals turn that state into a
//! boolean ([`end`](Chain::end)) or into the value itself
//! ([`or`](Chain::or) and friends).
//!
//! # Example
//!
//! ```rust
//! use typo::prelude::*;
//!
//! // Conjunctive (default): every test must pass
//! assert!(Typo::new(4).number().gt(-1).end());
//!
//! // Disjunctive: any test may pass
//! let id = Typo::with_mode("abc", Mode::Any).number().string();
//! assert!(id.end());
//!
//! // Absent values fall back to the registered default
//! let port = Typo::new(None::<u16>).number().with_default(8080).unwrap().or();
//! assert_eq!(port, Ok(Value::from(8080)));
//! ```

use crate::chain::Chain;
use crate::{Mode, TypoError, Value};

/// A chain over one subject value.
#[derive(Clone, Debug)]
pub struct Typo {
    subject: Value,
    default: Option<Value>,
    mode: Mode,
    pass: bool,
    negate_next: bool,
}

impl Typo {
    /// Start a conjunctive chain.
    pub fn new(subject: impl Into<Value>) -> Self {
        Self::with_mode(subject, Mode::All)
    }

    /// Start a chain with an explicit mode.
    pub fn with_mode(subject: impl Into<Value>, mode: Mode) -> Self {
        Typo {
            subject: subject.into(),
            default: None,
            mode,
            pass: mode.identity(),
            negate_next: false,
        }
    }

    /// Start a chain with a mode given by name (`and`, `all`, `or`, `any`).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for any other spelling.
    pub fn parse(subject: impl Into<Value>, mode: &str) -> Result<Self, TypoError> {
        Ok(Self::with_mode(subject, mode.parse()?))
    }

    /// The registered default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn take_negation(&mut self) -> bool {
        std::mem::take(&mut self.negate_next)
    }
}

impl Chain for Typo {
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
        let invert = self.take_negation();
        let outcome = test(&self.subject) != invert;
        self.pass = self.mode.combine(self.pass, outcome);
        #[cfg(feature = "tracing")]
        tracing::trace!(subject = %self.subject, outcome, pass = self.pass, "test recorded");
        self
    }

    fn try_record<F>(mut self, mut test: F) -> Result<Self, TypoError>
    where
        F: FnMut(&Value) -> Result<bool, TypoError>,
    {
        let invert = self.take_negation();
        let outcome = test(&self.subject)? != invert;
        self.pass = self.mode.combine(self.pass, outcome);
        #[cfg(feature = "tracing")]
        tracing::trace!(subject = %self.subject, outcome, pass = self.pass, "test recorded");
        Ok(self)
    }

    /// An absent default is the same as no default.
    fn with_default(mut self, default: impl Into<Value>) -> Result<Self, TypoError> {
        self.default = Some(default.into()).filter(|d| !d.is_undefined());
        Ok(self)
    }

    fn end(&self) -> bool {
        self.pass
    }

    /// The default wins over the pass state, but only for an absent subject.
    fn settle(self) -> Option<Value> {
        match self.default {
            Some(default) if self.subject.is_undefined() => Some(default),
            _ if self.pass => Some(self.subject),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(subject = %self.subject, mode = %self.mode, "chain failed");
                None
            }
        }
    }
}

/// Shorthand for [`Typo::new`].
pub fn typo(subject: impl Into<Value>) -> Typo {
    Typo::new(subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainExt;

    #[test]
    fn test_all_mode_is_conjunction() {
        assert!(Typo::new(5).end());
        assert!(Typo::new(5).number().gt(0).end());
        assert!(!Typo::new(5).number().gt(10).end());
        assert!(!Typo::new(5).gt(10).number().end());
    }

    #[test]
    fn test_any_mode_is_disjunction() {
        assert!(!Typo::with_mode(5, Mode::Any).end());
        assert!(Typo::with_mode(5, Mode::Any).string().number().end());
        assert!(!Typo::with_mode(5, Mode::Any).string().array().end());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(Typo::parse(1, "or").unwrap().mode(), Mode::Any);
        assert_eq!(Typo::parse(1, "and").unwrap().mode(), Mode::All);
        assert!(Typo::parse(1, "maybe").is_err());
    }

    #[test]
    fn test_not_negates_next_test_only() {
        assert!(Typo::new("s").not().number().string().end());
        assert!(!Typo::new("s").not().string().end());
    }

    #[test]
    fn test_not_is_idempotent() {
        assert!(!Typo::new("s").not().not().string().end());
    }

    #[test]
    fn test_end_is_idempotent() {
        let chain = Typo::new(1).gt(5);
        assert_eq!(chain.end(), chain.end());
        assert!(!chain.end());
    }

    #[test]
    fn test_or_returns_subject_on_pass() {
        assert_eq!(Typo::new("ok").string().or(), Ok(Value::from("ok")));
    }

    #[test]
    fn test_or_without_fallback_fails() {
        assert_eq!(Typo::new(1).string().or(), Err(TypoError::ChainFailed));
    }

    #[test]
    fn test_or_value_substitutes() {
        assert_eq!(Typo::new(1).string().or_value("x"), Value::from("x"));
        assert_eq!(Typo::new("y").string().or_value("x"), Value::from("y"));
    }

    #[test]
    fn test_or_err_returns_error_verbatim() {
        #[derive(Debug, PartialEq)]
        struct Custom(&'static str);

        assert_eq!(Typo::new(1).string().or_err(Custom("bad")), Err(Custom("bad")));
        assert_eq!(Typo::new("s").string().or_err(Custom("bad")), Ok(Value::from("s")));
    }

    #[test]
    fn test_default_applies_to_absent_subject() {
        let chain = Typo::new(Value::Undefined).with_default(5).unwrap();
        assert_eq!(chain.default_value(), Some(&Value::from(5)));
        assert_eq!(chain.or(), Ok(Value::from(5)));
    }

    #[test]
    fn test_default_takes_precedence_over_pass_state() {
        let value = Typo::new(Value::Undefined)
            .defined()
            .with_default(5)
            .unwrap()
            .or_value(9);
        assert_eq!(value, Value::from(5));
    }

    #[test]
    fn test_default_ignored_for_null() {
        let chain = Typo::new(Value::Null).with_default(5).unwrap();
        assert!(chain.clone().or().is_ok());
        let err = chain.set().or().unwrap_err();
        assert!(err.is_chain_failure());
    }

    #[test]
    fn test_default_ignored_for_failing_present_subject() {
        let value = Typo::new(3).with_default(5).unwrap().string().or_value(7);
        assert_eq!(value, Value::from(7));
    }

    #[test]
    fn test_undefined_default_is_no_default() {
        let chain = Typo::new(Value::Undefined)
            .with_default(Value::Undefined)
            .unwrap();
        assert!(chain.default_value().is_none());
    }

    #[test]
    fn test_failing_fallible_test_drops_chain() {
        let result = Typo::new(3).number().empty();
        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_custom_test() {
        let even = Value::function(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
        assert!(Typo::new(4).test(even.clone()).unwrap().end());
        assert!(!Typo::new(3).test(even).unwrap().end());
        assert!(Typo::new(3).test(1).is_err());
    }

    #[test]
    fn test_typo_shorthand() {
        assert!(typo("x").string().end());
    }
}
