//! Field registry
//!
//! Read-only name → location table. Simple fields and group fields share one
//! namespace; group names live in a separate one.

use std::collections::HashMap;

use super::{FieldDescriptor, FieldGroup, FieldKind, ResolvedField};
use crate::error::{Result, SaveError};

/// Immutable field table
#[derive(Debug, Clone)]
pub struct Registry {
    /// Simple fields in declaration order
    simple: Vec<FieldDescriptor>,

    /// Groups in declaration order
    groups: Vec<FieldGroup>,

    /// Field name → how to address it
    kinds: HashMap<&'static str, FieldKind>,

    /// Grouped field name → index into `groups`
    owners: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry, rejecting duplicate names and impossible maxima
    pub fn new(simple: Vec<FieldDescriptor>, groups: Vec<FieldGroup>) -> Result<Self> {
        let mut kinds = HashMap::new();
        let mut owners = HashMap::new();

        for desc in &simple {
            check_max(desc)?;
            let kind = FieldKind::Simple {
                offset: desc.offset,
                width: desc.width,
                max: desc.max,
            };
            if kinds.insert(desc.name, kind).is_some() {
                return Err(SaveError::Schema(format!("duplicate field {}", desc.name)));
            }
        }

        for (group_idx, group) in groups.iter().enumerate() {
            if group.labels.is_empty() {
                return Err(SaveError::Schema(format!("group {} has no members", group.name)));
            }
            if groups[..group_idx].iter().any(|g| g.name == group.name) {
                return Err(SaveError::Schema(format!("duplicate group {}", group.name)));
            }

            for desc in &group.fields {
                check_max(desc)?;
                check_span(group, desc)?;
                let kind = FieldKind::Indexed {
                    base_offset: desc.offset,
                    width: desc.width,
                    max: desc.max,
                    stride: group.stride,
                    members: group.members(),
                };
                if kinds.insert(desc.name, kind).is_some() {
                    return Err(SaveError::Schema(format!("duplicate field {}", desc.name)));
                }
                owners.insert(desc.name, group_idx);
            }
        }

        Ok(Self {
            simple,
            groups,
            kinds,
            owners,
        })
    }

    /// Resolve a field name (and member index, for grouped fields) to a location
    pub fn resolve(&self, name: &str, index: Option<usize>) -> Result<ResolvedField> {
        let kind = self
            .kinds
            .get(name)
            .ok_or_else(|| SaveError::UnknownField(name.to_string()))?;

        kind.locate(index)
            .ok_or_else(|| SaveError::IndexOutOfGroupRange {
                field: name.to_string(),
                index,
            })
    }

    /// How a field is addressed, if registered
    pub fn kind(&self, name: &str) -> Option<&FieldKind> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Look up a group by its own name
    pub fn group(&self, name: &str) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// The group a field belongs to, if it is grouped
    pub fn group_of(&self, field: &str) -> Option<&FieldGroup> {
        self.owners.get(field).map(|&i| &self.groups[i])
    }

    pub fn simple_fields(&self) -> &[FieldDescriptor] {
        &self.simple
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    /// Total number of registered field names
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// The last member's bytes must be addressable without overflow
fn check_span(group: &FieldGroup, desc: &FieldDescriptor) -> Result<()> {
    let last = group.labels.len() - 1;
    last.checked_mul(group.stride)
        .and_then(|d| desc.offset.checked_add(d))
        .and_then(|o| o.checked_add(desc.width.bytes()))
        .map(|_| ())
        .ok_or_else(|| {
            SaveError::Schema(format!(
                "group {}: field {} overflows at member {}",
                group.name, desc.name, last
            ))
        })
}

fn check_max(desc: &FieldDescriptor) -> Result<()> {
    if desc.max > desc.width.max_value() {
        return Err(SaveError::Schema(format!(
            "field {}: max {} does not fit in {} byte(s)",
            desc.name,
            desc.max,
            desc.width.bytes()
        )));
    }
    Ok(())
}
