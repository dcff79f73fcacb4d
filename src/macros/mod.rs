//! Shorthand for building [`Error`](crate::Error) values.
//!
//! [`macro@crate::e`] takes its facets in function-call style, in any order:
//!
//! - `op(expr)`: operation label
//! - `kind(expr)`: kind flags, may repeat
//! - `code(expr)`: error code
//! - `msg("format {}", args)` or `msg(expr)`: message fragment
//! - `cause(expr)`: wrapped error
//! - `maybe_cause(expr)`: wrapped `Option` of an error; `None` makes the whole
//!   expression evaluate to `None`
//! - `nil()`: evaluate to `None`
//!
//! The macro evaluates to `Error`, or to `Option<Error>` once `maybe_cause`
//! or `nil` is used. Supplying a facet twice panics.
//!
//! # Examples
//!
//! ```
//! use error_trail::{classify, e, ErrorCode, ErrorKind, Op};
//!
//! const OP: Op = Op::new("db.findUser");
//!
//! let id = 7;
//! let err = e!(op(OP), kind(ErrorKind::CLIENT), code(ErrorCode::NOT_FOUND), msg("user not found: {}", id));
//! assert_eq!(classify::client_msg(&err), "user not found: 7");
//!
//! let wrapped = e!(op("svc.buffUser"), cause(err));
//! assert_eq!(classify::code(&wrapped), ErrorCode::NOT_FOUND);
//!
//! let nothing: Option<std::io::Error> = None;
//! assert!(e!(msg("unused"), maybe_cause(nothing)).is_none());
//! ```

#[macro_export]
macro_rules! e {
    () => {
        $crate::Error::builder().build()
    };

    (
        $($field:ident($($arg:tt)*)),+ $(,)?
    ) => {{
        let builder = $crate::Error::builder();
        $(
            let builder = $crate::__e_field!(builder, $field, $($arg)*);
        )+
        builder.build()
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __e_field {
    ($builder:ident, op, $op:expr $(,)?) => {
        $builder.op($op)
    };

    ($builder:ident, kind, $kind:expr $(,)?) => {
        $builder.kind($kind)
    };

    ($builder:ident, code, $code:expr $(,)?) => {
        $builder.code($code)
    };

    // Format string with arguments
    ($builder:ident, msg, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $builder.msg(format!($fmt $(, $arg)*))
    };

    ($builder:ident, msg, $msg:expr $(,)?) => {
        $builder.msg($msg)
    };

    ($builder:ident, cause, $cause:expr $(,)?) => {
        $builder.cause($cause)
    };

    ($builder:ident, maybe_cause, $cause:expr $(,)?) => {
        $builder.maybe_cause($cause)
    };

    ($builder:ident, nil $(,)?) => {
        $builder.nil()
    };
}
