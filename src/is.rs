//! Standalone tests
//!
//! Every test as a plain function on a single value, under its canonical
//! name and every synonym. Use [`check`] when the test is chosen at runtime
//! or the result should be negated with [`INVERTER`](crate::INVERTER).
//!
//! # Example
//!
//! ```rust
//! use typo::{is, Arg, Test, Value, INVERTER};
//!
//! assert!(is::number(&Value::from(4)));
//! assert!(is::num(&Value::from(4)));
//! assert!(is::gt(&Value::from(4), &Value::from(3)));
//! assert!(is::empty(&Value::from("")).unwrap());
//!
//! assert_eq!(is::check(Test::Number, &Value::from("4"), &[INVERTER]), Ok(true));
//! assert_eq!(is::check(Test::Gt, &Value::from(4), &[Arg::from(3)]), Ok(true));
//! ```

use crate::invert::{normalize, Arg};
use crate::registry::{with_tests, Test};
use crate::{TypoError, Value};

pub use crate::predicates::{
    array, array_like, boolean, contains, defined, empty, falsey, function, gt, gte, has, integer,
    is, isnt, lt, lte, not_empty, null, number, object, plain_object, reg_exp, set, string, test,
    truthy, undefined, unset,
};

macro_rules! static_synonyms {
    ($( $variant:ident => $kind:ident $name:ident [$($alias:ident),*]; )*) => {
        $( $( pub use crate::predicates::$name as $alias; )* )*
    };
}

with_tests!(static_synonyms);

/// Run `test` on `subject`, negating the result if any argument is the
/// inversion marker.
///
/// # Errors
///
/// Whatever the test itself raises, for example `InvalidArgument` from
/// [`empty`] on a number.
pub fn check(test: Test, subject: &Value, args: &[Arg]) -> Result<bool, TypoError> {
    let call = normalize(args);
    let raw = test.call(subject, &call.args)?;
    Ok(call.outcome(raw))
}
