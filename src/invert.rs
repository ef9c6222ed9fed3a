//! Invocation arguments and the inversion marker
//!
//! Generic entry points such as [`check`](crate::check) and
//! [`Chain::apply`](crate::Chain::apply) take a list of [`Arg`]s. Any
//! [`INVERTER`] among them negates that call's result. The marker is its own
//! enum variant, so no ordinary value can ever be mistaken for it.
//!
//! ```rust
//! use typo::{normalize, Arg, INVERTER};
//!
//! let call = normalize(&[Arg::from(1), INVERTER, Arg::from("x")]);
//! assert!(call.invert);
//! assert_eq!(call.args.len(), 2);
//! ```

use crate::{Function, Object, Value};

/// One argument of a test invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// An ordinary argument.
    Value(Value),
    /// Negate the result of this invocation.
    Invert,
}

/// The inversion marker.
pub const INVERTER: Arg = Arg::Invert;

/// Short alias for [`INVERTER`].
pub const INV: Arg = INVERTER;

impl Arg {
    /// Wrap an ordinary value.
    pub fn value(value: impl Into<Value>) -> Self {
        Arg::Value(value.into())
    }

    /// Returns `true` for the inversion marker.
    pub fn is_inverter(&self) -> bool {
        matches!(self, Arg::Invert)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

macro_rules! arg_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Value(Value::from(value))
                }
            }
        )*
    };
}

arg_from!(bool, f64, f32, i32, i64, u32, u64, usize, &str, String, Object, Function);

/// A normalized invocation: the plain arguments in their original order and
/// whether the result must be negated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Invocation {
    /// Arguments with every marker removed.
    pub args: Vec<Value>,
    /// `true` if at least one marker was present.
    pub invert: bool,
}

impl Invocation {
    /// Apply the invert flag to a raw result.
    #[inline]
    pub fn outcome(&self, raw: bool) -> bool {
        raw != self.invert
    }
}

/// Split markers from values.
///
/// The flag is set, not toggled: two markers negate exactly once.
pub fn normalize(args: &[Arg]) -> Invocation {
    args.iter().fold(Invocation::default(), |mut call, arg| {
        match arg {
            Arg::Value(value) => call.args.push(value.clone()),
            Arg::Invert => call.invert = true,
        }
        call
    })
}
