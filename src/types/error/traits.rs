use super::Error;
use std::error::Error as StdError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Renders the message chain.
///
/// A node contributes its own fragment; the cause's rendering follows after
/// `": "` when both are non-empty. A node without a fragment renders exactly
/// as its cause.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = match &self.cause {
            Some(cause) => cause.to_string(),
            None => return f.write_str(&self.msg),
        };
        match (self.msg.is_empty(), cause.is_empty()) {
            (true, _) => f.write_str(&cause),
            (false, true) => f.write_str(&self.msg),
            (false, false) => write!(f, "{}: {}", self.msg, cause),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Error");
        if let Some(op) = &self.op {
            s.field("op", op);
        }
        if !self.kind.is_empty() {
            s.field("kind", &format_args!("{}", self.kind));
        }
        if !self.code.is_unexpected() {
            s.field("code", &format_args!("{}", self.code));
        }
        if !self.msg.is_empty() {
            s.field("msg", &self.msg);
        }
        if let Some(cause) = &self.cause {
            s.field("cause", cause);
        }
        if let Some(stack) = &self.stack {
            s.field("stack", stack);
        }
        s.finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source_dyn()
    }
}

/// Serializes one node as a structured log record.
///
/// `cause` is the rendered message of the cause chain, `stack` the text form
/// of the node's own trace.
#[cfg(feature = "serde")]
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Error", 6)?;
        state.serialize_field("op", &self.op)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("msg", &self.msg)?;
        state.serialize_field("cause", &self.cause.as_ref().map(|cause| cause.to_string()))?;
        state.serialize_field("stack", &self.stack)?;
        state.end()
    }
}
