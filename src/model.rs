//! Save Model
//!
//! Facade over the buffer, the registry and the format validator.
//!
//! ## Responsibilities
//! - Gate construction on the magic signature (no partially loaded state)
//! - Resolve named field access through the registry
//! - Clamp written values into `[0, max]` instead of rejecting them
//! - Hand the bytes back verbatim for persistence
//!
//! Structural problems (unknown name, bad index, access past the end) are
//! errors. Out-of-domain values are not: they are clamped silently.

use serde::Serialize;

use crate::buffer::SaveBuffer;
use crate::error::{Result, SaveError};
use crate::format;
use crate::schema::{ds2_registry, Registry};

/// A loaded save: one name, one buffer
#[derive(Debug, Clone)]
pub struct SaveModel {
    /// File name the save was loaded from (reused on export)
    name: String,

    buffer: SaveBuffer,

    registry: &'static Registry,
}

impl SaveModel {
    /// Load a DS2 save using the built-in layout
    pub fn load(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::load_with(name, bytes, ds2_registry())
    }

    /// Load a save against a specific registry
    pub fn load_with(
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        registry: &'static Registry,
    ) -> Result<Self> {
        let name = name.into();
        let bytes = bytes.into();

        if !format::is_valid(&bytes) {
            tracing::warn!("Rejected {}: missing DS2 signature ({} bytes)", name, bytes.len());
            return Err(SaveError::InvalidFormat(format!(
                "{} is not a Devil Survivor 2 RB save",
                name
            )));
        }

        tracing::debug!("Loaded {} ({} bytes)", name, bytes.len());

        Ok(Self {
            name,
            buffer: SaveBuffer::new(bytes),
            registry,
        })
    }

    /// Read a field. `index` selects the member for grouped fields.
    pub fn get(&self, field: &str, index: Option<usize>) -> Result<u32> {
        let loc = self.registry.resolve(field, index)?;
        self.buffer.get_width(loc.offset, loc.width)
    }

    /// Write a field, clamping `value` into `[0, max]`
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, field: &str, value: i64, index: Option<usize>) -> Result<u32> {
        let loc = self.registry.resolve(field, index)?;
        let stored = clamp_value(value, loc.max);

        if i64::from(stored) != value {
            tracing::debug!("{}: clamped {} to {}", field, value, stored);
        }

        self.buffer.set_width(loc.offset, loc.width, stored.into())?;
        tracing::trace!(
            "{}[{:?}] = {} at 0x{:X}",
            field,
            index,
            stored,
            loc.offset
        );

        Ok(stored)
    }

    /// Write a field from caller text
    ///
    /// The leading integer of the text is used (see [`parse_input`]); text with
    /// no leading digits stores `0`. Numbers are clamped as in [`SaveModel::set`].
    pub fn set_input(&mut self, field: &str, text: &str, index: Option<usize>) -> Result<u32> {
        let loc = self.registry.resolve(field, index)?;
        let value = parse_input(text, loc.max);
        self.set(field, value.into(), index)
    }

    /// Write a field from caller text, rejecting anything outside `[0, max]`
    ///
    /// Unlike [`SaveModel::set_input`], nothing is clamped or truncated.
    pub fn set_strict(&mut self, field: &str, text: &str, index: Option<usize>) -> Result<u32> {
        let loc = self.registry.resolve(field, index)?;
        let value = parse_strict(text, loc.max).ok_or_else(|| {
            SaveError::InvalidInput(format!("{}: allowed values: [0; {}]", field, loc.max))
        })?;
        self.set(field, value.into(), index)
    }

    /// Current buffer contents, verbatim
    pub fn export(&self) -> &[u8] {
        tracing::debug!("Exporting {} ({} bytes)", self.name, self.buffer.len());
        self.buffer.as_bytes()
    }

    /// Read every registered field
    pub fn snapshot(&self) -> Result<Snapshot> {
        let mut fields = Vec::with_capacity(self.registry.simple_fields().len());
        for desc in self.registry.simple_fields() {
            fields.push(FieldValue {
                name: desc.name,
                value: self.get(desc.name, None)?,
                max: desc.max,
            });
        }

        let mut groups = Vec::with_capacity(self.registry.groups().len());
        for group in self.registry.groups() {
            let mut members = Vec::with_capacity(group.labels.len());
            for (index, label) in group.labels.iter().enumerate() {
                let mut values = Vec::with_capacity(group.fields.len());
                for desc in &group.fields {
                    values.push(FieldValue {
                        name: desc.name,
                        value: self.get(desc.name, Some(index))?,
                        max: desc.max,
                    });
                }
                members.push(MemberSnapshot {
                    index,
                    label: *label,
                    fields: values,
                });
            }
            groups.push(GroupSnapshot {
                name: group.name,
                members,
            });
        }

        Ok(Snapshot {
            name: self.name.clone(),
            size: self.buffer.len(),
            fields,
            groups,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw buffer (no clamping, no schema)
    pub fn buffer(&self) -> &SaveBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut SaveBuffer {
        &mut self.buffer
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_inner()
    }
}

/// Clamp a caller value into `[0, max]`
pub fn clamp_value(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

/// Lenient text parse with leading-integer semantics
///
/// Leading whitespace and an optional sign are skipped, then the leading
/// digit run is taken ("12abc" → 12, "3.7" → 3). No digits → 0. The result
/// is clamped into `[0, max]`; a digit run too long for `i64` saturates.
pub fn parse_input(text: &str, max: u32) -> u32 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() || negative {
        return 0;
    }

    // only overflow can fail on a pure digit run
    digits
        .parse::<i64>()
        .map_or(max, |value| clamp_value(value, max))
}

/// Strict text parse: `None` unless the text is a number within `[0, max]`
pub fn parse_strict(text: &str, max: u32) -> Option<u32> {
    let value = text.trim().parse::<i64>().ok()?;
    if (0..=i64::from(max)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Every registered field of a save, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub name: String,
    pub size: usize,
    pub fields: Vec<FieldValue>,
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub name: &'static str,
    pub value: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSnapshot {
    pub name: &'static str,
    pub members: Vec<MemberSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSnapshot {
    pub index: usize,
    pub label: &'static str,
    pub fields: Vec<FieldValue>,
}
