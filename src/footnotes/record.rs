//! Footnote record
//!
//! A record pairs a mutable reference id with the footnote body. Identity is
//! carried separately by [`RecordKey`], which never changes after creation:
//! renumbering rewrites `id` in place and leaves the key alone.

use crate::oxml::{BlockContent, Element, RequiredAttribute, StDecimalNumber};

/// Stable identity of a record within its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(u64);

impl RecordKey {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// `w:id` on `w:footnote`
pub(crate) fn footnote_id_attr() -> RequiredAttribute<StDecimalNumber> {
    RequiredAttribute::new("w:id")
}

/// A single footnote entry
#[derive(Debug, Clone)]
pub struct Record {
    key: RecordKey,
    id: i64,
    content: BlockContent,
}

impl Record {
    pub(crate) fn new(key: RecordKey, id: i64, content: BlockContent) -> Self {
        Self { key, id, content }
    }

    #[inline]
    pub fn key(&self) -> RecordKey {
        self.key
    }

    /// Reference id, matching `w:id` of the in-text `w:footnoteReference`
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut BlockContent {
        &mut self.content
    }

    /// Render as `<w:footnote w:id="…">` with the body as children
    pub fn to_element(&self) -> Element {
        let mut footnote = Element::new("w:footnote");
        footnote_id_attr().set(&mut footnote, &self.id);
        for item in self.content.items() {
            footnote.append(item.clone());
        }
        footnote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_element_carries_id_and_body() {
        let mut content = BlockContent::new();
        content.add_paragraph("See chapter 2.", None);
        let record = Record::new(RecordKey::new(0), 4, content);

        let e = record.to_element();
        assert!(e.is("w:footnote"));
        assert_eq!(e.get("w:id"), Some("4"));
        assert_eq!(e.xpath("w:p").len(), 1);
        assert_eq!(e.text(), "See chapter 2.");
    }

    #[test]
    fn test_set_id_keeps_key() {
        let mut record = Record::new(RecordKey::new(9), 1, BlockContent::new());
        record.set_id(2);
        assert_eq!(record.id(), 2);
        assert_eq!(record.key(), RecordKey::new(9));
    }
}
