//! Resolution of captured instruction pointers into readable locations.
//!
//! Capturing a trace only stores raw addresses. Turning them into function
//! names and source positions is deferred to a [`Symbolicator`], invoked when
//! a frame is formatted. The default implementation reads debug information
//! through the `backtrace` crate; a process-wide replacement may be installed
//! once with [`install_symbolicator`].

use std::ffi::c_void;
use std::sync::OnceLock;

/// Human-readable location of one stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameInfo {
    /// Qualified function name, without the symbol hash.
    pub name: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

/// Maps an opaque instruction pointer to a [`FrameInfo`].
///
/// Implementations return `None` when the address cannot be resolved; callers
/// then render the frame with the `"unknown"` placeholder.
pub trait Symbolicator: Send + Sync {
    fn resolve(&self, ip: usize) -> Option<FrameInfo>;
}

/// Symbolicator backed by [`backtrace::resolve`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceSymbolicator;

impl Symbolicator for BacktraceSymbolicator {
    fn resolve(&self, ip: usize) -> Option<FrameInfo> {
        if ip == 0 {
            return None;
        }
        let mut info = None;
        // Captured addresses are return addresses; step back into the call
        // instruction so the reported line is the call site.
        backtrace::resolve(ip.wrapping_sub(1) as *mut c_void, |symbol| {
            if info.is_some() {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };
            info = Some(FrameInfo {
                name: format!("{:#}", name),
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        });
        info
    }
}

static INSTALLED: OnceLock<Box<dyn Symbolicator>> = OnceLock::new();

/// Installs the process-wide symbolicator used when formatting frames.
///
/// Only the first installation takes effect; returns `false` if one was
/// already installed.
pub fn install_symbolicator<S>(symbolicator: S) -> bool
where
    S: Symbolicator + 'static,
{
    INSTALLED.set(Box::new(symbolicator)).is_ok()
}

/// Returns the installed symbolicator, or the `backtrace`-based default.
pub fn symbolicator() -> &'static dyn Symbolicator {
    match INSTALLED.get() {
        Some(installed) => installed.as_ref(),
        None => &BacktraceSymbolicator,
    }
}
