//! Schema Module
//!
//! Declarative registry mapping field names (plus a member index for
//! repeating groups) to offset, width and maximum legal value.
//!
//! ## Field Kinds
//! - `Simple`  - one fixed location, addressed by name only
//! - `Indexed` - repeats per group member at a fixed stride,
//!               addressed by name and member index
//!
//! ## Built-in DS2 Layout
//! ```text
//! 0x000  magic "Devi"                        (4)
//! 0x07C  party member 0 ── EXP(2) STR MAG VIT AGI HP(2) MP(2) ... MOVE@0x9F
//! 0x0A0  party member 1    (+0x24)
//! 0x0C4  party member 2    (+0x48)
//! 0x0E8  party member 3    (+0x6C)
//! 0x6C4  Macca                               (4)
//! ```

mod field;
mod layout;
mod registry;

pub use field::{FieldDescriptor, FieldGroup, FieldKind, ResolvedField};
pub use layout::{ds2_registry, MACCA, PARTY, PARTY_MEMBERS, PARTY_SIZE, PARTY_STRIDE};
pub use registry::Registry;
