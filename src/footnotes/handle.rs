//! Footnote handle
//!
//! A handle names a record by identity and reaches it through a weak
//! back-reference to the owning collection's store. It never keeps the store
//! alive; once the collection is dropped every accessor returns `None`.

use std::fmt;
use std::sync::{PoisonError, RwLock, Weak};

use crate::oxml::{build_hyperlink, BlockContent, HyperlinkOptions, RelateTo};

use super::record::{Record, RecordKey};
use super::store::FootnoteStore;

/// Non-owning reference to a single footnote
#[derive(Clone)]
pub struct Footnote {
    key: RecordKey,
    store: Weak<RwLock<FootnoteStore>>,
}

impl Footnote {
    pub(crate) fn new(key: RecordKey, store: Weak<RwLock<FootnoteStore>>) -> Self {
        Self { key, store }
    }

    /// Identity of the underlying record
    pub fn key(&self) -> RecordKey {
        self.key
    }

    /// True while the owning collection is alive
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Current reference id; reflects any shift since the handle was taken
    pub fn id(&self) -> Option<i64> {
        self.with_record(Record::id)
    }

    /// Body text, paragraphs joined by line feeds
    pub fn text(&self) -> Option<String> {
        self.with_record(|r| r.content().text())
    }

    /// Text of each paragraph in the body
    pub fn paragraphs(&self) -> Option<Vec<String>> {
        self.with_record(|r| r.content().paragraphs().map(|p| p.text()).collect())
    }

    /// Copy of the body's block items
    pub fn content(&self) -> Option<BlockContent> {
        self.with_record(|r| r.content().clone())
    }

    /// Append a paragraph to the body. Returns false if detached.
    pub fn add_paragraph(&self, text: &str, style: Option<&str>) -> bool {
        self.with_record_mut(|r| {
            r.content_mut().add_paragraph(text, style);
        })
        .is_some()
    }

    /// Append a hyperlink to the body's last paragraph, creating the
    /// paragraph if the body is empty. Returns false if detached.
    ///
    /// The relationship for an external `url` is created on `part` even when
    /// the handle turns out to be detached.
    pub fn add_hyperlink<P: RelateTo + ?Sized>(
        &self,
        part: &mut P,
        url: &str,
        options: &HyperlinkOptions,
    ) -> bool {
        if !self.is_attached() {
            return false;
        }
        let hyperlink = build_hyperlink(part, url, options);
        self.with_record_mut(move |r| {
            r.content_mut().last_paragraph_mut().append(hyperlink);
        })
        .is_some()
    }

    fn with_record<R>(&self, f: impl FnOnce(&Record) -> R) -> Option<R> {
        let store = self.store.upgrade()?;
        let guard = store.read().unwrap_or_else(PoisonError::into_inner);
        guard.record(self.key).map(f)
    }

    fn with_record_mut<R>(&self, f: impl FnOnce(&mut Record) -> R) -> Option<R> {
        let store = self.store.upgrade()?;
        let mut guard = store.write().unwrap_or_else(PoisonError::into_inner);
        guard.record_mut(self.key).map(f)
    }
}

/// Two handles are equal iff they reference the same physical record,
/// regardless of the id it currently carries.
impl PartialEq for Footnote {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Weak::ptr_eq(&self.store, &other.store)
    }
}

impl Eq for Footnote {}

impl fmt::Debug for Footnote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Footnote")
            .field("key", &self.key)
            .field("id", &self.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::footnotes::Footnotes;
    use crate::oxml::{HyperlinkOptions, Relationships};

    #[test]
    fn test_equality_is_identity_not_id() {
        let footnotes = Footnotes::new();
        let a = footnotes.add(1).unwrap();
        let again = footnotes.lookup(1).unwrap();
        assert_eq!(a, again);

        let other = Footnotes::new();
        let b = other.add(1).unwrap();
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_detached_after_collection_dropped() {
        let footnote = {
            let footnotes = Footnotes::new();
            footnotes.add(1).unwrap()
        };
        assert!(!footnote.is_attached());
        assert_eq!(footnote.id(), None);
        assert!(!footnote.add_paragraph("late", None));
    }

    #[test]
    fn test_content_read_write_through() {
        let footnotes = Footnotes::new();
        let footnote = footnotes.add(1).unwrap();
        assert!(footnote.add_paragraph("First.", Some("FootnoteText")));
        assert!(footnote.add_paragraph("Second.", None));

        let same = footnotes.lookup(1).unwrap();
        assert_eq!(same.text().as_deref(), Some("First.\nSecond."));
        assert_eq!(
            same.paragraphs(),
            Some(vec!["First.".to_string(), "Second.".to_string()])
        );
    }

    #[test]
    fn test_content_follows_shifted_record() {
        let footnotes = Footnotes::new();
        footnotes.add(1).unwrap().add_paragraph("original", None);
        footnotes.add(1).unwrap();

        assert_eq!(footnotes.lookup(2).unwrap().text().as_deref(), Some("original"));
        assert_eq!(footnotes.lookup(1).unwrap().text().as_deref(), Some(""));
    }

    #[test]
    fn test_add_hyperlink_to_body() {
        let footnotes = Footnotes::new();
        let mut rels = Relationships::new();
        let footnote = footnotes.add(1).unwrap();
        footnote.add_paragraph("See ", None);

        let options = HyperlinkOptions::default().with_text("the docs");
        assert!(footnote.add_hyperlink(&mut rels, "https://example.com/docs", &options));

        assert_eq!(footnote.text().as_deref(), Some("See the docs"));
        assert_eq!(rels.len(), 1);
        let content = footnote.content().unwrap();
        assert_eq!(content.paragraphs().count(), 1);
    }
}
