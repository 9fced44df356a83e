//! Footnote collection
//!
//! Invariant-enforcing controller over a [`FootnoteStore`]. All writes go
//! through [`Footnotes::add`], which keeps ids strictly ascending in store
//! order by shifting colliding and following ids upward.
//!
//! # Locking
//!
//! The store sits behind one `RwLock` per collection. `add` holds the write
//! lock for the whole insertion, so a reader never sees the transient
//! duplicate ids that exist between two shifts.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::oxml::{Element, OxmlResult};

use super::errors::{FootnoteError, FootnoteResult};
use super::handle::Footnote;
use super::record::RecordKey;
use super::store::FootnoteStore;

/// How `add` placed a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Appended after the last record; nothing shifted
    Appended,
    /// Inserted into a gap between existing ids; nothing shifted
    Gap,
    /// Took the id of an existing record; that record and all following
    /// ones were shifted up by one
    Collision { shifted: usize },
}

/// Ordered, renumbering collection of footnotes for one document
#[derive(Debug)]
pub struct Footnotes {
    store: Arc<RwLock<FootnoteStore>>,
    metrics: Arc<MetricsRegistry>,
}

impl Default for Footnotes {
    fn default() -> Self {
        Self::new()
    }
}

impl Footnotes {
    /// Creates an empty collection with its own metrics registry
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(MetricsRegistry::new()))
    }

    /// Creates an empty collection reporting into `metrics`
    pub fn with_metrics(metrics: Arc<MetricsRegistry>) -> Self {
        Self::from_store(FootnoteStore::new(), metrics)
    }

    fn from_store(store: FootnoteStore, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            metrics,
        }
    }

    /// Load a collection from a `<w:footnotes>` element
    pub fn from_element(footnotes: &Element) -> OxmlResult<Self> {
        let store = FootnoteStore::from_element(footnotes)?;
        let count = store.len().to_string();
        log_event_with_fields(Event::FootnotesLoaded, &[("count", &count)]);
        Ok(Self::from_store(store, Arc::new(MetricsRegistry::new())))
    }

    /// Render the collection as a `<w:footnotes>` element
    pub fn to_element(&self) -> Element {
        self.read().to_element()
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    fn read(&self) -> RwLockReadGuard<'_, FootnoteStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FootnoteStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle(&self, key: RecordKey) -> Footnote {
        Footnote::new(key, Arc::downgrade(&self.store))
    }

    /// Footnote carrying `reference_id`.
    ///
    /// Fails with `NotFound` if no record has that id.
    pub fn lookup(&self, reference_id: i64) -> FootnoteResult<Footnote> {
        let key = self.read().get_by_id(reference_id).map(|r| r.key());
        self.metrics.record_lookup(key.is_some());

        match key {
            Some(key) => Ok(self.handle(key)),
            None => {
                log_event_with_fields(
                    Event::FootnoteLookupMiss,
                    &[("id", &reference_id.to_string())],
                );
                Err(FootnoteError::NotFound(reference_id))
            }
        }
    }

    /// Number of footnotes
    pub fn count(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Ids in store order (always ascending)
    pub fn ids(&self) -> Vec<i64> {
        self.read().ids()
    }

    /// Handles to every footnote in store order
    pub fn footnotes(&self) -> Vec<Footnote> {
        let keys: Vec<RecordKey> = self.read().iter().map(|r| r.key()).collect();
        keys.into_iter().map(|key| self.handle(key)).collect()
    }

    /// Create a footnote with id `reference_id`.
    ///
    /// The new record lands where ascending id order puts it. If a record
    /// already carries `reference_id`, that record and every record after it
    /// are shifted up by one; shifted records keep their identity, so
    /// existing handles follow them to their new ids.
    ///
    /// Fails with `IdOverflow`, leaving the collection unchanged, when the
    /// shift would have to move the record holding `i64::MAX`. The positional
    /// primitives used here only fail on a store whose ordering invariant was
    /// already broken.
    pub fn add(&self, reference_id: i64) -> FootnoteResult<Footnote> {
        let (key, placement) = {
            let mut store = self.write();
            place(&mut store, reference_id)?
        };

        let id = reference_id.to_string();
        match placement {
            Placement::Appended => {
                self.metrics.increment_fast_path_appends();
                log_event_with_fields(Event::FootnoteAppend, &[("id", &id)]);
            }
            Placement::Gap => {
                self.metrics.increment_gap_inserts();
                log_event_with_fields(Event::FootnoteInsert, &[("id", &id)]);
            }
            Placement::Collision { shifted } => {
                self.metrics.record_collision_insert(shifted as u64);
                log_event_with_fields(
                    Event::FootnoteShift,
                    &[("id", &id), ("shifted", &shifted.to_string())],
                );
            }
        }

        Ok(self.handle(key))
    }
}

/// Insert a record for `reference_id`, restoring ascending order.
fn place(store: &mut FootnoteStore, reference_id: i64) -> FootnoteResult<(RecordKey, Placement)> {
    // Fast path: nothing at or above the requested id.
    let last_id = store.last().map(|r| r.id());
    if last_id.map_or(true, |last| reference_id > last) {
        return Ok((store.append_new(reference_id).key(), Placement::Appended));
    }

    // Scan from the tail for the first record not above the requested id.
    // Records before it are below `reference_id` by the ordering invariant.
    let mut boundary = store.len();
    while boundary > 0 && store.get(boundary - 1)?.id() > reference_id {
        boundary -= 1;
    }

    let collides = boundary > 0 && store.get(boundary - 1)?.id() == reference_id;
    if !collides {
        // Gap: the following ids already leave room.
        let key = store.insert_before(boundary, reference_id)?.key();
        return Ok((key, Placement::Gap));
    }

    // Collision: bump the tail down to the colliding slot, then put the new
    // record in front of the bumped one. The tail holds the largest id, so
    // checking it once covers every shift.
    if last_id == Some(i64::MAX) {
        return Err(FootnoteError::IdOverflow(reference_id));
    }
    let slot = boundary - 1;
    for position in (slot..store.len()).rev() {
        let current_id = store.get(position)?.id();
        store.set_id(position, current_id + 1)?;
    }
    let shifted = store.len() - slot;
    let key = store.insert_before(slot, reference_id)?.key();

    Ok((key, Placement::Collision { shifted }))
}
