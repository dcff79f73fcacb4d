use super::{basename, short_name, Located, StackTrace};
use std::fmt;

/// Rendering style of a [`StackTrace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceStyle {
    /// `basename:line` per frame, space-joined inside brackets.
    #[default]
    Compact,
    /// Qualified name, then `\n\t` and `file:line`; one block per line.
    Verbose,
    /// Bare function names, space-joined inside brackets.
    Names,
    /// `name file:line` per line, `unknown` for unresolvable frames.
    Text,
}

/// Display adapter returned by [`StackTrace::display`].
pub struct DisplayTrace<'a> {
    trace: &'a StackTrace,
    style: TraceStyle,
}

impl<'a> DisplayTrace<'a> {
    pub(crate) fn new(trace: &'a StackTrace, style: TraceStyle) -> Self {
        Self { trace, style }
    }
}

impl fmt::Display for DisplayTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bracketed = matches!(self.style, TraceStyle::Compact | TraceStyle::Names);
        let separator = if bracketed { " " } else { "\n" };

        if bracketed {
            f.write_str("[")?;
        }
        for (i, frame) in self.trace.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            let located = Located::of(frame);
            match self.style {
                TraceStyle::Compact => write!(f, "{}:{}", basename(&located.file), located.line)?,
                TraceStyle::Verbose => {
                    write!(f, "{}\n\t{}:{}", located.name, located.file, located.line)?
                },
                TraceStyle::Names => f.write_str(short_name(&located.name))?,
                TraceStyle::Text => f.write_str(&located.text())?,
            }
        }
        if bracketed {
            f.write_str("]")?;
        }
        Ok(())
    }
}
