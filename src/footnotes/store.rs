//! Ordered record store
//!
//! Backing sequence for a `<w:footnotes>` part. Records are kept in a `Vec`
//! whose order is the document order of the `w:footnote` children.
//!
//! # Invariant
//!
//! `store[i].id < store[i + 1].id` for every adjacent pair. The store itself
//! does NOT enforce this: positional mutation and both insertion primitives
//! trust the caller. `Footnotes::add` is the only writer and restores the
//! invariant before releasing the store.

use crate::oxml::{BlockContent, Element, OxmlError, OxmlResult};

use super::errors::{FootnoteError, FootnoteResult};
use super::record::{footnote_id_attr, Record, RecordKey};

/// Ordered sequence of footnote records keyed by integer id
#[derive(Debug, Default)]
pub struct FootnoteStore {
    records: Vec<Record>,
    /// Next identity to hand out; keys are never reused
    next_key: u64,
}

impl FootnoteStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record carrying `id`, if any
    pub fn get_by_id(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Record at the tail
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Record at `position`
    pub fn get(&self, position: usize) -> FootnoteResult<&Record> {
        self.records
            .get(position)
            .ok_or(FootnoteError::OutOfRange {
                position,
                len: self.records.len(),
            })
    }

    /// Overwrite the id of the record at `position`.
    ///
    /// Does not reorder and does not check uniqueness.
    pub fn set_id(&mut self, position: usize, new_id: i64) -> FootnoteResult<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(position)
            .ok_or(FootnoteError::OutOfRange { position, len })?;
        record.set_id(new_id);
        Ok(())
    }

    /// Construct a record with `id` and append it at the tail.
    ///
    /// The caller guarantees `id` sorts after the current last record.
    pub fn append_new(&mut self, id: i64) -> &Record {
        let record = self.new_record(id, BlockContent::new());
        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    /// Construct a record with `id` and insert it immediately before the
    /// record currently at `position`.
    ///
    /// The caller guarantees the new record is correctly ordered relative to
    /// its neighbours once the call returns.
    pub fn insert_before(&mut self, position: usize, id: i64) -> FootnoteResult<&Record> {
        if position >= self.records.len() {
            return Err(FootnoteError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }
        let record = self.new_record(id, BlockContent::new());
        self.records.insert(position, record);
        Ok(&self.records[position])
    }

    /// Current position of the record with identity `key`
    pub fn position_of(&self, key: RecordKey) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }

    /// Record with identity `key`
    pub fn record(&self, key: RecordKey) -> Option<&Record> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Mutable record with identity `key`
    pub fn record_mut(&mut self, key: RecordKey) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.key() == key)
    }

    /// Records in store order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Ids in store order
    pub fn ids(&self) -> Vec<i64> {
        self.records.iter().map(Record::id).collect()
    }

    /// True if ids are strictly ascending (hence unique)
    pub fn is_ordered(&self) -> bool {
        self.records.windows(2).all(|pair| pair[0].id() < pair[1].id())
    }

    fn new_record(&mut self, id: i64, content: BlockContent) -> Record {
        let key = RecordKey::new(self.next_key);
        self.next_key += 1;
        Record::new(key, id, content)
    }

    // Element tree conversion

    /// Load records from a `<w:footnotes>` element.
    ///
    /// Every `w:footnote` child must carry a decimal `w:id`; ids must already
    /// be strictly ascending in document order.
    pub fn from_element(footnotes: &Element) -> OxmlResult<Self> {
        if !footnotes.is("w:footnotes") {
            return Err(OxmlError::UnexpectedElement {
                expected: "w:footnotes".to_string(),
                found: footnotes.prefixed_tag(),
            });
        }

        let id_attr = footnote_id_attr();
        let mut store = Self::new();
        for footnote in footnotes.xpath("w:footnote") {
            let id = id_attr.get(footnote)?;
            if let Some(last) = store.last() {
                if id <= last.id() {
                    return Err(OxmlError::InvalidStructure(format!(
                        "footnote id {} follows id {}; ids must be strictly ascending",
                        id,
                        last.id()
                    )));
                }
            }
            let content = BlockContent::from_items(footnote.child_elements().cloned().collect());
            let record = store.new_record(id, content);
            store.records.push(record);
        }

        Ok(store)
    }

    /// Render as a `<w:footnotes>` element in store order
    pub fn to_element(&self) -> Element {
        let mut footnotes = Element::new("w:footnotes");
        for record in &self.records {
            footnotes.append(record.to_element());
        }
        footnotes
    }
}
