//! Devil Survivor 2 Record Breaker save layout

use std::sync::OnceLock;

use super::{FieldDescriptor, FieldGroup, Registry};
use crate::buffer::Width;

/// Party group name
pub const PARTY: &str = "Party";

/// Byte distance between consecutive party members
pub const PARTY_STRIDE: usize = 0x24;

/// Party member labels, in slot order
pub const PARTY_MEMBERS: [&str; 4] = ["First", "Second", "Third", "Fourth"];

/// Number of party slots
pub const PARTY_SIZE: usize = PARTY_MEMBERS.len();

const STAT_MAX: u32 = 0x28;
const HP_MAX: u32 = 0x3E7;

/// Currency
pub const MACCA: FieldDescriptor = FieldDescriptor::new("Macca", 0x6C4, Width::Four, u32::MAX);

const PARTY_FIELDS: [FieldDescriptor; 8] = [
    FieldDescriptor::new("EXP", 0x7C, Width::Two, 0xFFFF),
    FieldDescriptor::new("HP", 0x82, Width::Two, HP_MAX),
    FieldDescriptor::new("MP", 0x84, Width::Two, HP_MAX),
    FieldDescriptor::new("STR", 0x7E, Width::One, STAT_MAX),
    FieldDescriptor::new("MAG", 0x7F, Width::One, STAT_MAX),
    FieldDescriptor::new("VIT", 0x80, Width::One, STAT_MAX),
    FieldDescriptor::new("AGI", 0x81, Width::One, STAT_MAX),
    FieldDescriptor::new("MOVE", 0x9F, Width::One, STAT_MAX),
];

static DS2: OnceLock<Registry> = OnceLock::new();

/// The process-wide DS2 registry, built on first use
pub fn ds2_registry() -> &'static Registry {
    DS2.get_or_init(|| {
        let party = FieldGroup {
            name: PARTY,
            stride: PARTY_STRIDE,
            labels: &PARTY_MEMBERS,
            fields: PARTY_FIELDS.to_vec(),
        };
        Registry::new(vec![MACCA], vec![party]).unwrap_or_else(|e| {
            // Fixed tables; a failure here is a bug in this file.
            panic!("built-in DS2 layout is inconsistent: {e}")
        })
    })
}
