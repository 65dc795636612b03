//! # Data-type descriptors
//!
//! A `DType` is a polymorphic descriptor for a variable's type: a bit
//! vector, a reference to another type, an array, a struct/union, an enum,
//! or a class/interface reference. Descriptors live in a `TypeTable` arena
//! and are shared across vertices by `DTypeId` (an integer handle), never
//! by reference-counted pointer.
//!
//! Construction is two-phase to support forward references within the
//! type table: `TypeTable::reserve` allocates a stub per id in pass one,
//! `TypeTable::resolve` patches each descriptor's sub-descriptor ids in
//! pass two.

use std::collections::BTreeMap;
use std::fmt;

/// An integer handle into a `TypeTable`. Cheap to copy, stable for the
/// lifetime of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DTypeId(pub u32);

/// Inclusive bit range, `left` is the MSB side as written in the source
/// document (may be less than `right` for descending ranges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub left: i64,
    pub right: i64,
}

impl Range {
    #[must_use]
    pub fn len(&self) -> usize {
        self.left.abs_diff(self.right) as usize + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A struct/union member: a name paired with its own descriptor.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub dtype: DTypeId,
}

/// The kind-specific payload of a `DType`.
#[derive(Debug, Clone)]
pub enum DTypeKind {
    /// A scalar or vector of bits, e.g. `logic [3:0]`.
    Basic { range: Option<Range> },
    /// A named reference resolved lazily to another descriptor.
    Ref { target: DTypeId },
    /// A fixed-size dimension wrapped around an element type.
    Array {
        range: Range,
        packed: bool,
        element: DTypeId,
    },
    /// A packed or unpacked structure of members.
    Struct { packed: bool, members: Vec<Member> },
    /// A packed or unpacked union of members.
    Union { packed: bool, members: Vec<Member> },
    /// An enumeration with an underlying representation type.
    Enum {
        underlying: Option<DTypeId>,
        items: Vec<String>,
    },
    /// The empty type, used for void functions.
    Void,
    /// A reference to a class type (opaque; width is always 0).
    ClassRef,
    /// A reference to an interface type (opaque; width is always 0).
    InterfaceRef,
}

/// A single entry in the type table.
#[derive(Debug, Clone)]
pub struct DType {
    pub id: DTypeId,
    pub name: Option<String>,
    pub location: String,
    pub kind: DTypeKind,
}

impl DType {
    /// Compute the bit width of this descriptor, following `Ref` and
    /// `Enum` indirections through `table`. Returns 0 for unresolved or
    /// inherently width-less descriptors (unpacked arrays, void, class and
    /// interface references).
    #[must_use]
    pub fn width(&self, table: &TypeTable) -> usize {
        match &self.kind {
            DTypeKind::Basic { range } => range.map_or(1, Range::len),
            DTypeKind::Ref { target } => table.get(*target).map_or(0, |d| d.width(table)),
            DTypeKind::Array {
                range,
                packed,
                element,
            } => {
                if *packed {
                    range.len() * table.get(*element).map_or(0, |d| d.width(table))
                } else {
                    0
                }
            }
            DTypeKind::Struct { members, .. } => members
                .iter()
                .map(|m| table.get(m.dtype).map_or(0, |d| d.width(table)))
                .sum(),
            DTypeKind::Union { members, .. } => members
                .iter()
                .map(|m| table.get(m.dtype).map_or(0, |d| d.width(table)))
                .max()
                .unwrap_or(0),
            DTypeKind::Enum { underlying, .. } => underlying
                .and_then(|id| table.get(id))
                .map_or(1, |d| d.width(table)),
            DTypeKind::Void | DTypeKind::ClassRef | DTypeKind::InterfaceRef => 0,
        }
    }

    /// Render the canonical textual form of this descriptor used in
    /// reports, e.g. `"[3:0] logic"` or `"packed struct"`.
    #[must_use]
    pub fn to_display_string(&self, table: &TypeTable) -> String {
        match &self.kind {
            DTypeKind::Basic { range } => match range {
                Some(r) => format!("[{}:{}] logic", r.left, r.right),
                None => "logic".to_string(),
            },
            DTypeKind::Ref { target } => table
                .get(*target)
                .map_or_else(|| "<unresolved>".to_string(), |d| d.to_display_string(table)),
            DTypeKind::Array {
                range,
                packed,
                element,
            } => {
                let inner = table
                    .get(*element)
                    .map_or_else(|| "<unresolved>".to_string(), |d| d.to_display_string(table));
                let dim = format!("[{}:{}]", range.left, range.right);
                if *packed {
                    format!("{dim} {inner}")
                } else {
                    format!("{inner} {dim}")
                }
            }
            DTypeKind::Struct { packed, .. } => {
                if *packed {
                    "packed struct".to_string()
                } else {
                    "unpacked struct".to_string()
                }
            }
            DTypeKind::Union { packed, .. } => {
                if *packed {
                    "packed union".to_string()
                } else {
                    "unpacked union".to_string()
                }
            }
            DTypeKind::Enum { .. } => "enum".to_string(),
            DTypeKind::Void => "void".to_string(),
            DTypeKind::ClassRef => "class".to_string(),
            DTypeKind::InterfaceRef => "interface".to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.left, self.right)
    }
}

/// The arena owning every `DType` in a netlist, keyed by the id the AST
/// document assigned in its type table.
#[derive(Debug, Default)]
pub struct TypeTable {
    entries: BTreeMap<DTypeId, DType>,
}

impl TypeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass one: allocate a stub descriptor for `id` so that later
    /// `DTypeId` references constructed during ingest are always valid to
    /// look up, even before their own kind is known.
    pub fn reserve(&mut self, id: DTypeId, name: Option<String>, kind: DTypeKind) {
        self.reserve_at(id, name, String::new(), kind);
    }

    /// Like [`Self::reserve`] but also records the source location ingest
    /// read the type node from.
    pub fn reserve_at(&mut self, id: DTypeId, name: Option<String>, location: String, kind: DTypeKind) {
        self.entries.insert(
            id,
            DType {
                id,
                name,
                location,
                kind,
            },
        );
    }

    /// Pass two: replace a previously reserved descriptor's kind once its
    /// sub-descriptor ids are known.
    pub fn resolve(&mut self, id: DTypeId, kind: DTypeKind) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.kind = kind;
        }
    }

    #[must_use]
    pub fn get(&self, id: DTypeId) -> Option<&DType> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&DType> {
        self.entries.values().find(|d| d.name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DType> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_vector_width() {
        let mut table = TypeTable::new();
        table.reserve(
            DTypeId(0),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 3, right: 0 }),
            },
        );
        assert_eq!(table.get(DTypeId(0)).expect("present").width(&table), 4);
    }

    #[test]
    fn basic_scalar_width_is_one() {
        let mut table = TypeTable::new();
        table.reserve(DTypeId(0), None, DTypeKind::Basic { range: None });
        assert_eq!(table.get(DTypeId(0)).expect("present").width(&table), 1);
    }

    #[test]
    fn ref_forwards_width() {
        let mut table = TypeTable::new();
        table.reserve(
            DTypeId(0),
            Some("word_t".to_string()),
            DTypeKind::Basic {
                range: Some(Range { left: 31, right: 0 }),
            },
        );
        table.reserve(DTypeId(1), None, DTypeKind::Ref { target: DTypeId(0) });
        assert_eq!(table.get(DTypeId(1)).expect("present").width(&table), 32);
    }

    #[test]
    fn unresolved_ref_has_zero_width() {
        let mut table = TypeTable::new();
        table.reserve(DTypeId(0), None, DTypeKind::Ref { target: DTypeId(99) });
        assert_eq!(table.get(DTypeId(0)).expect("present").width(&table), 0);
    }

    #[test]
    fn two_phase_forward_reference_resolves() {
        let mut table = TypeTable::new();
        // Pass one: reserve both ids with placeholder kinds, id 1 refers
        // forward to id 2 which has not been described yet.
        table.reserve(DTypeId(1), None, DTypeKind::Void);
        table.reserve(DTypeId(2), None, DTypeKind::Void);
        // Pass two: resolve both kinds now that every id has a slot.
        table.resolve(DTypeId(1), DTypeKind::Ref { target: DTypeId(2) });
        table.resolve(
            DTypeId(2),
            DTypeKind::Basic {
                range: Some(Range { left: 7, right: 0 }),
            },
        );
        assert_eq!(table.get(DTypeId(1)).expect("present").width(&table), 8);
    }

    #[test]
    fn struct_width_is_sum_of_members() {
        let mut table = TypeTable::new();
        table.reserve(
            DTypeId(0),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 7, right: 0 }),
            },
        );
        table.reserve(
            DTypeId(1),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 3, right: 0 }),
            },
        );
        table.reserve(
            DTypeId(2),
            Some("pkt_t".to_string()),
            DTypeKind::Struct {
                packed: true,
                members: vec![
                    Member {
                        name: "a".to_string(),
                        dtype: DTypeId(0),
                    },
                    Member {
                        name: "b".to_string(),
                        dtype: DTypeId(1),
                    },
                ],
            },
        );
        assert_eq!(table.get(DTypeId(2)).expect("present").width(&table), 12);
    }

    #[test]
    fn union_width_is_max_of_members() {
        let mut table = TypeTable::new();
        table.reserve(
            DTypeId(0),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 7, right: 0 }),
            },
        );
        table.reserve(
            DTypeId(1),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 31, right: 0 }),
            },
        );
        table.reserve(
            DTypeId(2),
            None,
            DTypeKind::Union {
                packed: true,
                members: vec![
                    Member {
                        name: "byte".to_string(),
                        dtype: DTypeId(0),
                    },
                    Member {
                        name: "word".to_string(),
                        dtype: DTypeId(1),
                    },
                ],
            },
        );
        assert_eq!(table.get(DTypeId(2)).expect("present").width(&table), 32);
    }

    #[test]
    fn packed_array_multiplies_element_width() {
        let mut table = TypeTable::new();
        table.reserve(
            DTypeId(0),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 7, right: 0 }),
            },
        );
        table.reserve(
            DTypeId(1),
            None,
            DTypeKind::Array {
                range: Range { left: 3, right: 0 },
                packed: true,
                element: DTypeId(0),
            },
        );
        assert_eq!(table.get(DTypeId(1)).expect("present").width(&table), 32);
    }

    #[test]
    fn unpacked_array_width_is_zero() {
        let mut table = TypeTable::new();
        table.reserve(
            DTypeId(0),
            None,
            DTypeKind::Basic {
                range: Some(Range { left: 7, right: 0 }),
            },
        );
        table.reserve(
            DTypeId(1),
            None,
            DTypeKind::Array {
                range: Range { left: 3, right: 0 },
                packed: false,
                element: DTypeId(0),
            },
        );
        assert_eq!(table.get(DTypeId(1)).expect("present").width(&table), 0);
    }

    #[test]
    fn void_and_class_ref_have_zero_width() {
        let mut table = TypeTable::new();
        table.reserve(DTypeId(0), None, DTypeKind::Void);
        table.reserve(DTypeId(1), None, DTypeKind::ClassRef);
        assert_eq!(table.get(DTypeId(0)).expect("present").width(&table), 0);
        assert_eq!(table.get(DTypeId(1)).expect("present").width(&table), 0);
    }
}
