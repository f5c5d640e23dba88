//! Ordered field records.
//!
//! Dissectors accumulate fields into a [`RecordBuilder`] while reading and
//! freeze it into a [`FieldRecord`] only once the whole header decoded. A
//! failed decode drops the builder, so callers never observe a partially
//! populated record.

use smallvec::SmallVec;

use super::FieldValue;

/// Field entry: (field_name, value).
/// Field names are always static strings (protocol-defined).
pub type FieldEntry<'data> = (&'static str, FieldValue<'data>);

/// Inline capacity. OSPF headers carry 8 top-level fields plus the
/// `next_protocol`/`next_layer` slots; body records stay below this too.
type Entries<'data> = SmallVec<[FieldEntry<'data>; 12]>;

/// Iterator over field names, returned by [`FieldRecord::keys`].
pub type Keys<'r, 'data> =
    std::iter::Map<std::slice::Iter<'r, FieldEntry<'data>>, fn(&FieldEntry<'data>) -> &'static str>;

fn entry_key<'data>(entry: &FieldEntry<'data>) -> &'static str {
    entry.0
}

/// Immutable, ordered mapping from field name to decoded value.
#[derive(Debug, Clone, Default)]
pub struct FieldRecord<'data> {
    fields: Entries<'data>,
}

impl<'data> FieldRecord<'data> {
    /// Get a field value by name (linear search, but N is small).
    pub fn get(&self, name: &str) -> Option<&FieldValue<'data>> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Follow a path of nested record names, e.g. `["auth", "seq"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&FieldValue<'data>> {
        let (last, parents) = path.split_last()?;
        let mut record = self;
        for name in parents {
            record = record.get(name)?.as_record()?;
        }
        record.get(last)
    }

    /// Check whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over entries in decode order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry<'data>> {
        self.fields.iter()
    }

    /// Field names in decode order.
    pub fn keys(&self) -> Keys<'_, 'data> {
        self.fields
            .iter()
            .map(entry_key as fn(&FieldEntry<'data>) -> &'static str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reopen the record for extension.
    ///
    /// Consumes the record, so no other holder can observe the change.
    /// LayerChain uses this to attach the next-layer slot.
    pub fn into_builder(self) -> RecordBuilder<'data> {
        RecordBuilder {
            fields: self.fields,
        }
    }

    /// Convert to an owned record (for keeping past the buffer's lifetime).
    pub fn to_owned(&self) -> FieldRecord<'static> {
        FieldRecord {
            fields: self.fields.iter().map(|(k, v)| (*k, v.to_owned())).collect(),
        }
    }
}

impl<'data> std::fmt::Display for FieldRecord<'data> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

// Order-sensitive: two records are equal only if fields appear in the same order.
impl<'a, 'b> PartialEq<FieldRecord<'b>> for FieldRecord<'a> {
    fn eq(&self, other: &FieldRecord<'b>) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(other.fields.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl<'data> IntoIterator for FieldRecord<'data> {
    type Item = FieldEntry<'data>;
    type IntoIter = smallvec::IntoIter<[FieldEntry<'data>; 12]>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Mutable staging area for a record under construction.
#[derive(Debug, Default)]
pub struct RecordBuilder<'data> {
    fields: Entries<'data>,
}

impl<'data> RecordBuilder<'data> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value (updates existing or appends).
    ///
    /// Updating keeps the field's original position.
    pub fn push(&mut self, name: &'static str, value: FieldValue<'data>) -> &mut Self {
        if let Some(entry) = self.fields.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.fields.push((name, value));
        }
        self
    }

    /// Look at a staged value.
    pub fn get(&self, name: &str) -> Option<&FieldValue<'data>> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Freeze into an immutable record.
    pub fn finish(self) -> FieldRecord<'data> {
        FieldRecord {
            fields: self.fields,
        }
    }
}
