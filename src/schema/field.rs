//! Field descriptors and groups

use std::ops::Range;

use crate::buffer::Width;

/// A single named integer field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// Byte offset (for grouped fields: the offset of member 0)
    pub offset: usize,
    pub width: Width,
    /// Largest value the field may hold
    pub max: u32,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, offset: usize, width: Width, max: u32) -> Self {
        Self {
            name,
            offset,
            width,
            max,
        }
    }
}

/// Fields repeating once per group member at a fixed stride
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub name: &'static str,
    /// Byte distance between consecutive members
    pub stride: usize,
    /// Display label per member; its length is the member count
    pub labels: &'static [&'static str],
    pub fields: Vec<FieldDescriptor>,
}

impl FieldGroup {
    /// Valid member indices
    pub fn members(&self) -> Range<usize> {
        0..self.labels.len()
    }

    /// Label for a member index
    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.labels.get(index).copied()
    }

    /// Look up one of the group's fields by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// How a registered name is addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Simple {
        offset: usize,
        width: Width,
        max: u32,
    },
    Indexed {
        base_offset: usize,
        width: Width,
        max: u32,
        stride: usize,
        members: Range<usize>,
    },
}

impl FieldKind {
    /// Compute the concrete location for an optional member index
    ///
    /// Returns `None` when the index does not fit the kind: present for a
    /// simple field, missing, out of range or overflowing for an indexed one.
    pub fn locate(&self, index: Option<usize>) -> Option<ResolvedField> {
        match (self, index) {
            (FieldKind::Simple { offset, width, max }, None) => Some(ResolvedField {
                offset: *offset,
                width: *width,
                max: *max,
            }),
            (
                FieldKind::Indexed {
                    base_offset,
                    width,
                    max,
                    stride,
                    members,
                },
                Some(i),
            ) if members.contains(&i) => {
                let offset = i
                    .checked_mul(*stride)
                    .and_then(|d| base_offset.checked_add(d))?;
                Some(ResolvedField {
                    offset,
                    width: *width,
                    max: *max,
                })
            }
            _ => None,
        }
    }
}

/// Concrete location of a field in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedField {
    pub offset: usize,
    pub width: Width,
    pub max: u32,
}
