//! Tracing integration for error-trail.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["tracing"] }
//! ```

use std::error::Error as StdError;

use tracing::Span;

use crate::classify;
use crate::types::Op;

/// Emits one `ERROR` event describing `err`.
///
/// The event carries the chain's operation labels, kind, code, client
/// message and compact trace as fields; the message is the error's display.
///
/// ```
/// use error_trail::tracing_ext::record_error;
/// use error_trail::{Error, ErrorKind, Op};
///
/// let err = Error::builder().op(Op::new("svc.save")).kind(ErrorKind::CLIENT).msg("name taken").build();
/// record_error(&err);
/// ```
pub fn record_error(err: &(dyn StdError + 'static)) {
    let ops = classify::ops(err)
        .iter()
        .map(Op::as_str)
        .collect::<Vec<_>>()
        .join(" <- ");
    let trace = classify::trace(err).map(|trace| trace.to_string()).unwrap_or_default();

    tracing::error!(
        ops = %ops,
        kind = %classify::kind(err),
        code = %classify::code(err),
        client_msg = classify::client_msg(err),
        trace = %trace,
        "{}",
        err
    );
}

/// Operation label named after the current span, if one is entered.
///
/// ```
/// use error_trail::tracing_ext::current_span_op;
///
/// assert!(current_span_op().is_none());
/// ```
pub fn current_span_op() -> Option<Op> {
    let span = Span::current();
    let name = span.metadata()?.name();
    Some(Op::new(name))
}
