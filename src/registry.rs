//! The predicate table
//!
//! [`with_tests!`] is the single list of every test: its [`Test`] variant,
//! its kind, its canonical name and its synonyms. Each call surface (static
//! functions, batch-static functions, chain methods, batch-chain methods) is
//! generated by handing a callback macro to it, so adding a test means adding
//! one line here.
//!
//! # Example
//!
//! ```rust
//! use typo::{registry, Test, Value};
//!
//! assert_eq!(Test::from_name("plainObject"), Some(Test::PlainObject));
//! assert_eq!(Test::from_name("greater"), Some(Test::Gt));
//!
//! let gt = registry()["gt"];
//! assert_eq!(gt.call(&Value::from(3), &[Value::from(2)]), Ok(true));
//! ```

use crate::{predicates, TypoError, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// Invoke `$callback!` with the full test table.
///
/// Entry grammar: `Variant => kind name [synonyms];` where `kind` is one of
/// `unary`, `try_unary`, `binary`, `try_binary`.
macro_rules! with_tests {
    ($callback:ident) => {
        $callback! {
            Defined => unary defined [def];
            Undefined => unary undefined [undef];
            Null => unary null [nul];
            Set => unary set [];
            Unset => unary unset [];
            Truthy => unary truthy [];
            Falsey => unary falsey [];
            Boolean => unary boolean [bool];
            Number => unary number [num];
            Integer => unary integer [int];
            String => unary string [str];
            Object => unary object [obj];
            PlainObject => unary plain_object [plob];
            Function => unary function [func];
            Array => unary array [arr];
            ArrayLike => unary array_like [arrlike];
            RegExp => unary reg_exp [regex];
            Empty => try_unary empty [];
            NotEmpty => try_unary not_empty [bearing];
            Is => binary is [];
            Isnt => binary isnt [];
            Gt => binary gt [greater];
            Lt => binary lt [less];
            Gte => binary gte [greater_or_equal];
            Lte => binary lte [less_or_equal];
            Has => binary has [];
            Contains => binary contains [];
            Test => try_binary test [];
        }
    };
}

pub(crate) use with_tests;

/// A predicate body, typed by its kind.
#[derive(Clone, Copy, Debug)]
pub enum Predicate {
    /// `(subject) -> bool`
    Unary(fn(&Value) -> bool),
    /// `(subject) -> Result<bool>`
    TryUnary(fn(&Value) -> Result<bool, TypoError>),
    /// `(subject, argument) -> bool`
    Binary(fn(&Value, &Value) -> bool),
    /// `(subject, argument) -> Result<bool>`
    TryBinary(fn(&Value, &Value) -> Result<bool, TypoError>),
}

static UNDEFINED: Value = Value::Undefined;

impl Predicate {
    /// Call with a subject and a list of plain arguments.
    ///
    /// A missing argument reads as `Undefined`; extra arguments are ignored.
    pub fn call(&self, subject: &Value, args: &[Value]) -> Result<bool, TypoError> {
        let arg = args.first().unwrap_or(&UNDEFINED);
        match self {
            Predicate::Unary(f) => Ok(f(subject)),
            Predicate::TryUnary(f) => f(subject),
            Predicate::Binary(f) => Ok(f(subject, arg)),
            Predicate::TryBinary(f) => f(subject, arg),
        }
    }

    /// Number of arguments besides the subject.
    pub fn arity(&self) -> usize {
        match self {
            Predicate::Unary(_) | Predicate::TryUnary(_) => 0,
            Predicate::Binary(_) | Predicate::TryBinary(_) => 1,
        }
    }

    /// Returns `true` when the predicate can reject its input with an error.
    pub fn is_fallible(&self) -> bool {
        matches!(self, Predicate::TryUnary(_) | Predicate::TryBinary(_))
    }
}

macro_rules! define_tests {
    (@predicate unary $name:ident) => { Predicate::Unary(predicates::$name) };
    (@predicate try_unary $name:ident) => { Predicate::TryUnary(predicates::$name) };
    (@predicate binary $name:ident) => { Predicate::Binary(predicates::$name) };
    (@predicate try_binary $name:ident) => { Predicate::TryBinary(predicates::$name) };
    ($( $variant:ident => $kind:ident $name:ident [$($alias:ident),*]; )*) => {
        /// Identity of one test in the table.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Test {
            $(
                #[doc = concat!("The `", stringify!($name), "` test.")]
                $variant,
            )*
        }

        impl Test {
            /// Every test, in table order.
            pub const ALL: &'static [Test] = &[$(Test::$variant),*];

            /// Canonical name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Test::$variant => stringify!($name),)*
                }
            }

            /// Synonyms bound to the same predicate.
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Test::$variant => &[$(stringify!($alias)),*],)*
                }
            }

            /// The predicate body.
            pub fn predicate(self) -> Predicate {
                match self {
                    $(Test::$variant => define_tests!(@predicate $kind $name),)*
                }
            }
        }
    };
}

with_tests!(define_tests);

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl Test {
    /// Resolve a canonical name or synonym.
    ///
    /// Matching ignores case and underscores, so `notEmpty`, `not_empty` and
    /// `NOTEMPTY` are the same test.
    pub fn from_name(name: &str) -> Option<Test> {
        let wanted = fold_name(name);
        Test::ALL.iter().copied().find(|test| {
            fold_name(test.name()) == wanted
                || test.aliases().iter().any(|alias| fold_name(alias) == wanted)
        })
    }

    /// Run this test on a subject with plain arguments.
    pub fn call(self, subject: &Value, args: &[Value]) -> Result<bool, TypoError> {
        self.predicate().call(subject, args)
    }
}

impl FromStr for Test {
    type Err = TypoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Test::from_name(s)
            .ok_or_else(|| TypoError::invalid_argument(format!("unknown test `{}`", s)))
    }
}

/// Read access to the name-to-predicate table, synonyms included.
///
/// Built once on first use and immutable afterwards.
pub fn registry() -> &'static BTreeMap<&'static str, Predicate> {
    static REGISTRY: OnceLock<BTreeMap<&'static str, Predicate>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        Test::ALL
            .iter()
            .flat_map(|test| {
                std::iter::once(test.name())
                    .chain(test.aliases().iter().copied())
                    .map(move |name| (name, test.predicate()))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Test::ALL
            .iter()
            .flat_map(|t| std::iter::once(t.name()).chain(t.aliases().iter().copied()))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(registry().len(), total);
    }

    #[test]
    fn test_from_name_resolves_synonyms() {
        assert_eq!(Test::from_name("def"), Some(Test::Defined));
        assert_eq!(Test::from_name("bearing"), Some(Test::NotEmpty));
        assert_eq!(Test::from_name("notEmpty"), Some(Test::NotEmpty));
        assert_eq!(Test::from_name("regExp"), Some(Test::RegExp));
        assert_eq!(Test::from_name("greaterOrEqual"), Some(Test::Gte));
        assert_eq!(Test::from_name("lessOrEqual"), Some(Test::Lte));
        assert_eq!(Test::from_name("nope"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<Test>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_synonyms_share_predicate() {
        let table = registry();
        let five = Value::from(5);
        let four = [Value::from(4)];
        for (name, alias) in [("gt", "greater"), ("lte", "less_or_equal")] {
            assert_eq!(
                table[name].call(&five, &four),
                table[alias].call(&five, &four)
            );
        }
    }

    #[test]
    fn test_missing_argument_is_undefined() {
        assert_eq!(Test::Is.call(&Value::Undefined, &[]), Ok(true));
        assert_eq!(Test::Is.call(&Value::Null, &[]), Ok(false));
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let args = [Value::from(1), Value::from(100)];
        assert_eq!(Test::Gt.call(&Value::from(2), &args), Ok(true));
    }

    #[test]
    fn test_arity_and_fallibility() {
        assert_eq!(Test::Number.predicate().arity(), 0);
        assert_eq!(Test::Contains.predicate().arity(), 1);
        assert!(Test::Empty.predicate().is_fallible());
        assert!(Test::Test.predicate().is_fallible());
        assert!(!Test::Has.predicate().is_fallible());
    }
}
