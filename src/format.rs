//! Format Validator
//!
//! Recognizes a DS2 save by its leading magic bytes.

/// Signature every DS2 save starts with ("Devi")
pub const MAGIC: [u8; 4] = [0x44, 0x65, 0x76, 0x69];

/// True iff `buffer` starts with [`MAGIC`]
pub fn is_valid(buffer: &[u8]) -> bool {
    buffer.starts_with(&MAGIC)
}
