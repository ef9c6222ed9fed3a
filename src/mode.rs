//! Combination modes for chains
//!
//! A chain folds every test result into one running boolean. [`Mode::All`]
//! folds with logical AND starting from `true`; [`Mode::Any`] folds with
//! logical OR starting from `false`.
//!
//! # Example
//!
//! ```rust
//! use typo::Mode;
//!
//! let mode: Mode = "any".parse().unwrap();
//! assert_eq!(mode, Mode::Any);
//! assert!(!mode.identity());
//! assert!(mode.fold([false, true, false]));
//! assert!(Mode::All.fold(std::iter::empty()));
//! ```

use crate::TypoError;
use std::fmt;
use std::str::FromStr;

/// How a chain combines successive test results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Conjunction: every test must pass.
    #[default]
    All,
    /// Disjunction: at least one test must pass.
    Any,
}

impl Mode {
    /// The starting pass state: `true` for `All`, `false` for `Any`.
    #[inline]
    pub fn identity(self) -> bool {
        match self {
            Mode::All => true,
            Mode::Any => false,
        }
    }

    /// Fold one result into an accumulated state.
    #[inline]
    pub fn combine(self, acc: bool, outcome: bool) -> bool {
        match self {
            Mode::All => acc && outcome,
            Mode::Any => acc || outcome,
        }
    }

    /// Fold a sequence of results, starting from the identity.
    ///
    /// Every item is consumed, so side effects in the iterator run in order.
    pub fn fold<I>(self, outcomes: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        outcomes
            .into_iter()
            .fold(self.identity(), |acc, outcome| self.combine(acc, outcome))
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Any => "any",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TypoError;

    /// Accepts `and`, `all`, `&&` for [`Mode::All`] and `or`, `any`, `||`
    /// for [`Mode::Any`], ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" | "all" | "&&" => Ok(Mode::All),
            "or" | "any" | "||" => Ok(Mode::Any),
            other => Err(TypoError::invalid_argument(format!(
                "unknown combination mode `{}` (expected and/all/or/any)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spellings() {
        for s in ["and", "all", "ALL", " And ", "&&"] {
            assert_eq!(s.parse::<Mode>(), Ok(Mode::All), "{}", s);
        }
        for s in ["or", "any", "Any", "||"] {
            assert_eq!(s.parse::<Mode>(), Ok(Mode::Any), "{}", s);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "xor".parse::<Mode>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("xor"));
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(Mode::default(), Mode::All);
    }

    #[test]
    fn test_identity_and_combine() {
        assert!(Mode::All.identity());
        assert!(!Mode::Any.identity());
        assert!(!Mode::All.combine(true, false));
        assert!(Mode::Any.combine(false, true));
        assert!(!Mode::Any.combine(false, false));
    }

    #[test]
    fn test_fold_empty_is_identity() {
        assert!(Mode::All.fold(Vec::new()));
        assert!(!Mode::Any.fold(Vec::new()));
    }

    #[test]
    fn test_fold_consumes_every_item() {
        let mut seen = 0;
        let result = Mode::All.fold([false, true, true].into_iter().inspect(|_| seen += 1));
        assert!(!result);
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [Mode::All, Mode::Any] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }
}
