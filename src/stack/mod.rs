//! Call stack capture and rendering.
//!
//! A [`StackTrace`] is an ordered list of [`StackFrame`]s, innermost (most
//! recent) first, holding at most [`MAX_DEPTH`] frames. Capture is cheap: only
//! instruction pointers are recorded. Names, files and lines are computed when
//! a frame is formatted, through the installed [`Symbolicator`].
//!
//! # Formats
//!
//! | Format | Output |
//! |--------|--------|
//! | `{}` | `[main.rs:12 lib.rs:40]` |
//! | `{:#}` | `app::main\n\t/src/main.rs:12` per frame, newline-joined |
//! | [`TraceStyle::Names`] | `[main run]` |
//! | [`TraceStyle::Text`] | `app::main /src/main.rs:12` per line |
//!
//! # Examples
//!
//! ```
//! use error_trail::stack::{StackTrace, TraceStyle};
//!
//! let trace = StackTrace::capture();
//! let compact = trace.to_string();
//! assert!(compact.starts_with('[') && compact.ends_with(']'));
//!
//! let lines = trace.to_lines();
//! assert_eq!(lines.len(), trace.len());
//! let _names = trace.display(TraceStyle::Names).to_string();
//! ```

mod format;
mod symbolicator;

use std::fmt;

pub use format::{DisplayTrace, TraceStyle};
pub use symbolicator::{
    install_symbolicator, symbolicator, BacktraceSymbolicator, FrameInfo, Symbolicator,
};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Maximum number of frames kept in a captured trace.
pub const MAX_DEPTH: usize = 32;

/// Placeholder rendered for anything that cannot be resolved.
pub const UNKNOWN: &str = "unknown";

/// One frame of a [`StackTrace`]: an opaque instruction pointer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackFrame {
    ip: usize,
}

impl StackFrame {
    /// Wraps a raw instruction pointer. Zero never resolves.
    #[inline]
    pub const fn from_ip(ip: usize) -> Self {
        Self { ip }
    }

    #[inline]
    pub const fn ip(self) -> usize {
        self.ip
    }

    /// Resolves the frame with the installed symbolicator.
    #[inline]
    pub fn resolve(&self) -> Option<FrameInfo> {
        self.resolve_with(symbolicator())
    }

    /// Resolves the frame with an explicit symbolicator.
    #[inline]
    pub fn resolve_with(&self, symbolicator: &dyn Symbolicator) -> Option<FrameInfo> {
        symbolicator.resolve(self.ip)
    }

    /// Qualified function name, or `"unknown"`.
    pub fn name(&self) -> String {
        self.resolve().map_or_else(|| UNKNOWN.to_string(), |info| info.name)
    }

    /// Source file path, or `"unknown"`.
    pub fn file(&self) -> String {
        self.resolve()
            .and_then(|info| info.file)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Source line, or `0`.
    pub fn line(&self) -> u32 {
        self.resolve().and_then(|info| info.line).unwrap_or(0)
    }

    /// Function name with its module path removed.
    pub fn short_name(&self) -> String {
        let name = self.name();
        short_name(&name).to_string()
    }

    /// Single-line `"<name> <file>:<line>"` form used for structured output.
    ///
    /// An unresolvable frame renders as `"unknown"` alone.
    pub fn to_text(&self) -> String {
        Located::of(self).text()
    }
}

/// Compact `file.rs:12` with `{}`, `name\n\tpath/file.rs:12` with `{:#}`.
impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let located = Located::of(self);
        if f.alternate() {
            write!(f, "{}\n\t{}:{}", located.name, located.file, located.line)
        } else {
            write!(f, "{}:{}", basename(&located.file), located.line)
        }
    }
}

impl fmt::Debug for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackFrame")
            .field("ip", &format_args!("{:#x}", self.ip))
            .field("at", &format_args!("{}", self))
            .finish()
    }
}

#[cfg(feature = "serde")]
impl Serialize for StackFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

/// Captured call stack, innermost frame first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// Captures the current call stack. Frame 0 is the caller of `capture`.
    #[inline(never)]
    pub fn capture() -> Self {
        capture_from(&[Self::capture as fn() -> Self as usize])
    }

    #[inline]
    pub fn from_frames(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }

    #[inline]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, StackFrame> {
        self.frames.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns a display adapter rendering the trace in `style`.
    #[inline]
    pub fn display(&self, style: TraceStyle) -> DisplayTrace<'_> {
        DisplayTrace::new(self, style)
    }

    /// One [`StackFrame::to_text`] line per frame.
    pub fn to_lines(&self) -> Vec<String> {
        self.frames.iter().map(StackFrame::to_text).collect()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a StackFrame;
    type IntoIter = std::slice::Iter<'a, StackFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() { TraceStyle::Verbose } else { TraceStyle::Compact };
        fmt::Display::fmt(&self.display(style), f)
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.frames).finish()
    }
}

#[cfg(feature = "serde")]
impl Serialize for StackTrace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.frames)
    }
}

/// Walks the stack from the caller of this function.
///
/// Frames up to and including this function belong to the unwinder and are
/// dropped. Leading frames of the functions whose start addresses are listed
/// in `plumbing` are dropped as well, so the trace begins at the first frame
/// outside them. A listed function whose call was compiled as a tail call has
/// no frame and is simply not met. Listed functions must be
/// `#[inline(never)]` and must not be `#[track_caller]`, whose reified
/// address is a shim. If this function's own frame cannot be recognised, the
/// raw walk is kept.
#[inline(never)]
pub(crate) fn capture_from(plumbing: &[usize]) -> StackTrace {
    let marker = capture_from as fn(&[usize]) -> StackTrace as usize;
    let mut frames = Vec::with_capacity(MAX_DEPTH);
    let mut raw = Vec::new();
    let mut found = false;
    let mut leading = true;

    backtrace::trace(|frame| {
        let address = frame.symbol_address() as usize;
        if !found {
            if address == marker {
                found = true;
            } else if raw.len() < MAX_DEPTH {
                raw.push(StackFrame::from_ip(frame.ip() as usize));
            }
            return true;
        }
        if leading && plumbing.contains(&address) {
            return true;
        }
        leading = false;
        frames.push(StackFrame::from_ip(frame.ip() as usize));
        frames.len() < MAX_DEPTH
    });

    if found {
        StackTrace { frames }
    } else {
        StackTrace { frames: raw }
    }
}

/// Resolved (or placeholder) location of a frame.
struct Located {
    resolved: bool,
    name: String,
    file: String,
    line: u32,
}

impl Located {
    fn of(frame: &StackFrame) -> Self {
        match frame.resolve() {
            Some(info) => Self {
                resolved: true,
                name: info.name,
                file: info.file.unwrap_or_else(|| UNKNOWN.to_string()),
                line: info.line.unwrap_or(0),
            },
            None => Self {
                resolved: false,
                name: UNKNOWN.to_string(),
                file: UNKNOWN.to_string(),
                line: 0,
            },
        }
    }

    fn text(&self) -> String {
        if !self.resolved {
            return UNKNOWN.to_string();
        }
        format!("{} {}:{}", self.name, self.file, self.line)
    }
}

fn basename(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Strips the module path, generic arguments and closure suffixes.
pub(crate) fn short_name(name: &str) -> &str {
    let mut name = match name.find("::<") {
        Some(idx) => &name[..idx],
        None => name,
    };
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    match name.rfind("::") {
        Some(idx) => &name[idx + 2..],
        None => name,
    }
}
