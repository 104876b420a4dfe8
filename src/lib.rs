//! # ds2save
//!
//! Save-file codec for Devil Survivor 2 Record Breaker:
//! - Bounds-checked little-endian integer access over the raw save bytes
//! - Named fields, including per-party-member fields at a fixed stride
//! - Magic-signature validation on load
//! - Value clamping on write, verbatim export for persistence
//!
//! ## Architecture Overview
//!
//! ```text
//!   ┌──────────────┐                           ┌──────────────┐
//!   │  ByteSource  │                           │   ByteSink   │
//!   │ (file read)  │                           │ (file write) │
//!   └──────┬───────┘                           └──────▲───────┘
//!          │ name + bytes                             │ export()
//! ┌────────▼──────────────────────────────────────────┴────────┐
//! │                        SaveModel                            │
//! │              (load / get / set / export)                    │
//! └───────┬───────────────────┬────────────────────┬───────────┘
//!         │                   │                    │
//!         ▼                   ▼                    ▼
//!  ┌─────────────┐     ┌─────────────┐      ┌─────────────┐
//!  │   format    │     │  Registry   │      │ SaveBuffer  │
//!  │ (magic ok?) │     │ (name→loc)  │      │ (LE ints)   │
//!  └─────────────┘     └─────────────┘      └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod buffer;
pub mod schema;
pub mod format;
pub mod model;
pub mod session;
pub mod io;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SaveError, Result};
pub use config::Config;
pub use buffer::{SaveBuffer, Width};
pub use model::SaveModel;
pub use session::{Session, SharedSave};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ds2save
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
