//! Buffer Module
//!
//! Bounded little-endian integer access over a fixed-size save buffer.
//!
//! ## Responsibilities
//! - Own the raw save bytes (never resized after construction)
//! - Read and write unsigned 1, 2 and 4 byte integers
//! - Reject any access that would run past the end of the buffer
//!
//! ## Layout
//! ```text
//! offset ─┐
//!         ▼
//! ┌──────┬──────┬──────┬──────┐
//! │ b0   │ b1   │ b2   │ b3   │   value = b0 | b1<<8 | b2<<16 | b3<<24
//! └──────┴──────┴──────┴──────┘
//!  ◄──────── width ──────────►
//! ```

mod accessor;

pub use accessor::SaveBuffer;

use crate::error::{Result, SaveError};

/// Byte width of an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Width {
    One = 1,
    Two = 2,
    Four = 4,
}

impl Width {
    /// Number of bytes covered by this width
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Largest value representable in this width
    pub const fn max_value(self) -> u32 {
        match self {
            Width::One => u8::MAX as u32,
            Width::Two => u16::MAX as u32,
            Width::Four => u32::MAX,
        }
    }
}

impl TryFrom<usize> for Width {
    type Error = SaveError;

    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            1 => Ok(Width::One),
            2 => Ok(Width::Two),
            4 => Ok(Width::Four),
            other => Err(SaveError::UnsupportedWidth(other)),
        }
    }
}
