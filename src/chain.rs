//! Chain trait and the generated chain-method surface
//!
//! [`Chain`] is what a single-value chain ([`Typo`](crate::Typo)) and a batch
//! chain ([`TypoAll`](crate::TypoAll)) have in common: how a test result is
//! recorded, and how the chain is finally resolved. [`ChainExt`] adds one
//! method per test and synonym on top of `record`/`try_record`, so both chain
//! kinds get the whole table for free.
//!
//! # Example
//!
//! ```rust
//! use typo::prelude::*;
//!
//! let age = Typo::new(36).number().int().gte(0).lt(150);
//! assert!(age.end());
//! assert_eq!(age.or(), Ok(Value::from(36)));
//!
//! let name = Typo::new(Value::Null).string().or_value("anonymous");
//! assert_eq!(name, Value::from("anonymous"));
//! ```

use crate::invert::{normalize, Arg};
use crate::registry::{with_tests, Test};
use crate::{predicates, Mode, TypoError, Value};

/// Shared behaviour of single-value and batch chains.
pub trait Chain: Sized {
    /// The value (or collection) under test.
    fn subject(&self) -> &Value;

    /// The combination mode, fixed at construction.
    fn mode(&self) -> Mode;

    /// Negate the next recorded test.
    ///
    /// Calling it several times before one test still negates once.
    fn not(self) -> Self;

    /// Record an infallible test result.
    fn record<F>(self, test: F) -> Self
    where
        F: FnMut(&Value) -> bool;

    /// Record a test that may reject its input.
    ///
    /// On error the chain is consumed and the error returned.
    fn try_record<F>(self, test: F) -> Result<Self, TypoError>
    where
        F: FnMut(&Value) -> Result<bool, TypoError>;

    /// Register a fallback returned by the `or*` terminals when the subject is
    /// absent.
    fn with_default(self, default: impl Into<Value>) -> Result<Self, TypoError>;

    /// The current pass state. Reading it does not change the chain.
    fn end(&self) -> bool;

    /// Collapse the chain: `Some(value)` when it passes (or a default
    /// applies), `None` when it fails.
    fn settle(self) -> Option<Value>;

    /// Run a test chosen at runtime.
    ///
    /// Any [`INVERTER`](crate::INVERTER) among `args` negates this call.
    fn apply(self, test: Test, args: &[Arg]) -> Result<Self, TypoError> {
        let call = normalize(args);
        #[cfg(feature = "tracing")]
        tracing::trace!(test = test.name(), invert = call.invert, "applying test");
        let chain = if call.invert { self.not() } else { self };
        let predicate = test.predicate();
        chain.try_record(|x| predicate.call(x, &call.args))
    }

    /// Alias for [`end`](Chain::end).
    fn e(&self) -> bool {
        self.end()
    }

    /// The subject if the chain passes.
    ///
    /// # Errors
    ///
    /// [`TypoError::ChainFailed`] when the chain fails.
    fn or(self) -> Result<Value, TypoError> {
        self.settle().ok_or(TypoError::ChainFailed)
    }

    /// Alias for [`or`](Chain::or).
    fn o(self) -> Result<Value, TypoError> {
        self.or()
    }

    /// The subject if the chain passes, otherwise `fallback`.
    fn or_value(self, fallback: impl Into<Value>) -> Value {
        self.settle().unwrap_or_else(|| fallback.into())
    }

    /// The subject if the chain passes, otherwise `Err(error)` unchanged.
    fn or_err<E>(self, error: E) -> Result<Value, E> {
        self.settle().ok_or(error)
    }
}

macro_rules! chain_methods {
    (@method unary $name:ident $method:ident) => {
        #[doc = concat!("Record the `", stringify!($name), "` test.")]
        fn $method(self) -> Self {
            self.record(predicates::$name)
        }
    };
    (@method try_unary $name:ident $method:ident) => {
        #[doc = concat!("Record the `", stringify!($name), "` test.")]
        fn $method(self) -> Result<Self, TypoError> {
            self.try_record(predicates::$name)
        }
    };
    (@method binary $name:ident $method:ident) => {
        #[doc = concat!("Record the `", stringify!($name), "` test against `arg`.")]
        fn $method(self, arg: impl Into<Value>) -> Self {
            let arg = arg.into();
            self.record(|x| predicates::$name(x, &arg))
        }
    };
    (@method try_binary $name:ident $method:ident) => {
        #[doc = concat!("Record the `", stringify!($name), "` test against `arg`.")]
        fn $method(self, arg: impl Into<Value>) -> Result<Self, TypoError> {
            let arg = arg.into();
            self.try_record(|x| predicates::$name(x, &arg))
        }
    };
    ($( $variant:ident => $kind:ident $name:ident [$($alias:ident),*]; )*) => {
        /// One chain method per test and synonym.
        ///
        /// Infallible tests return the chain; tests that can reject their
        /// input (`empty`, `not_empty`, `test`) return a `Result`.
        pub trait ChainExt: Chain {
            $(
                chain_methods!(@method $kind $name $name);
                $( chain_methods!(@method $kind $name $alias); )*
            )*
        }
    };
}

with_tests!(chain_methods);

impl<C: Chain> ChainExt for C {}
