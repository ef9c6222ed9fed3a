//! # Typo
//!
//! > *"Check yourself before you wreck yourself"*
//!
//! Chainable type checking and argument validation for dynamic values.
//!
//! ## Three ways to call a test
//!
//! Every test in the table (`number`, `gt`, `empty`, `has`, ...) is available
//! as:
//!
//! - a **standalone function** in [`is`], e.g. `is::number(&v)`;
//! - a **chain method** on [`Typo`], folding results across the chain;
//! - a **batch** form over every element of an array-like, as the
//!   [`all`] functions or as methods on [`TypoAll`].
//!
//! ## Quick Example
//!
//! ```rust
//! use typo::prelude::*;
//!
//! // Standalone
//! assert!(is::integer(&Value::from(4)));
//!
//! // Chained, resolved to a boolean
//! assert!(Typo::new(4).number().gt(-1).end());
//!
//! // Chained, resolved to the value or a fallback
//! let retries = Typo::new(-3).int().gte(0).or_value(3);
//! assert_eq!(retries, Value::from(3));
//!
//! // Batch
//! assert!(TypoAll::new([1, 2, 3]).unwrap().number().gt(0).end());
//!
//! // Negation
//! assert!(Typo::new("4").not().number().end());
//! assert_eq!(check(Test::Number, &Value::from("4"), &[INVERTER]), Ok(true));
//! ```
//!
//! ## Combination modes
//!
//! Chains default to [`Mode::All`] (every test must pass). [`Mode::Any`]
//! passes as soon as one test passes:
//!
//! ```rust
//! use typo::prelude::*;
//!
//! let id = Typo::parse("u-17", "any").unwrap().number().string();
//! assert!(id.end());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod batch;
pub mod chain;
pub mod error;
pub mod invert;
pub mod is;
pub mod mode;
mod predicates;
pub mod registry;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod single;
pub mod testing;
pub mod value;

// Re-exports
pub use batch::{all, check_all, typo_all, TypoAll};
pub use chain::{Chain, ChainExt};
pub use error::TypoError;
pub use invert::{normalize, Arg, Invocation, INV, INVERTER};
pub use is::check;
pub use mode::Mode;
pub use registry::{registry, Predicate, Test};
pub use single::{typo, Typo};
pub use value::{Function, Object, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch::{all, check_all, typo_all, TypoAll};
    pub use crate::chain::{Chain, ChainExt};
    pub use crate::error::TypoError;
    pub use crate::invert::{Arg, INV, INVERTER};
    pub use crate::is::{self, check};
    pub use crate::mode::Mode;
    pub use crate::registry::Test;
    pub use crate::single::{typo, Typo};
    pub use crate::value::{Function, Object, Value};
}
