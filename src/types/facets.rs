//! Classification facets attached to an [`Error`](crate::Error).
//!
//! - [`Op`] names the logical operation an error originated in.
//! - [`ErrorKind`] is a bit set of coarse, orthogonal classes; several may apply.
//! - [`ErrorCode`] is a single fine-grained category; exactly one applies.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ErrorCode, ErrorKind, Op};
//!
//! const OP: Op = Op::new("db.findUser");
//!
//! let kind = ErrorKind::SERVER | ErrorKind::TRANSIENT;
//! assert!(kind.contains(ErrorKind::TRANSIENT));
//! assert!(!kind.intersects(ErrorKind::CLIENT));
//! assert_eq!(kind.to_string(), "server|transient");
//!
//! assert_eq!(ErrorCode::default(), ErrorCode::UNEXPECTED);
//! assert_eq!(ErrorCode::NOT_FOUND.to_string(), "not_found");
//! assert_eq!(OP.as_str(), "db.findUser");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operation during which an error occurred.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Op(Cow<'static, str>);

impl Op {
    /// Creates a label from a static string, usable in `const` items.
    #[inline]
    pub const fn new(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for Op {
    #[inline]
    fn from(label: &'static str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Op {
    #[inline]
    fn from(label: String) -> Self {
        Self(Cow::Owned(label))
    }
}

impl AsRef<str> for Op {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Op {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Op {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bit set of coarse error classes.
///
/// The zero value means "unclassified". Flags combine with `|`, and an error
/// may carry several at once (for example both [`SERVER`](Self::SERVER) and
/// [`TRANSIENT`](Self::TRANSIENT)). Applications may define additional flags
/// with [`from_bits`](Self::from_bits), preferably above the predefined bits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorKind(u32);

const KIND_NAMES: [(ErrorKind, &str); 3] = [
    (ErrorKind::CLIENT, "client"),
    (ErrorKind::SERVER, "server"),
    (ErrorKind::TRANSIENT, "transient"),
];

impl ErrorKind {
    /// Caused by the client; its message may be shown to the client.
    pub const CLIENT: Self = Self(1 << 0);
    /// Caused by the server side.
    pub const SERVER: Self = Self(1 << 1);
    /// Temporary condition that may go away by itself.
    pub const TRANSIENT: Self = Self(1 << 2);

    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if at least one flag of `other` is set in `self`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if every flag of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ErrorKind {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ErrorKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ErrorKind {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("unclassified");
        }
        let mut rest = self.0;
        let mut first = true;
        for (flag, name) in KIND_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                rest &= !flag.0;
                first = false;
            }
        }
        if rest != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{:#x}", rest)?;
        }
        Ok(())
    }
}

/// Fine-grained error category.
///
/// Codes are mutually exclusive. The zero value is [`UNEXPECTED`](Self::UNEXPECTED),
/// which doubles as "not set". The predefined codes cover common cases;
/// applications are expected to define codes relevant to their own domain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ErrorCode(u32);

impl ErrorCode {
    pub const UNEXPECTED: Self = Self(0);
    pub const INVALID: Self = Self(1);
    pub const IO: Self = Self(2);
    pub const DEADLOCK: Self = Self(3);
    pub const PERMISSION: Self = Self(4);
    pub const ALREADY_EXISTS: Self = Self(5);
    pub const NOT_FOUND: Self = Self(6);

    #[inline]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` for the zero value, which is also "not set".
    #[inline]
    pub const fn is_unexpected(self) -> bool {
        self.0 == 0
    }

    /// Name of a predefined code.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("unexpected"),
            1 => Some("invalid"),
            2 => Some("io"),
            3 => Some("deadlock"),
            4 => Some("permission"),
            5 => Some("already_exists"),
            6 => Some("not_found"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "code({})", self.0),
        }
    }
}
