//! Footnote collection subsystem
//!
//! Footnotes are kept in a single ordered store per document, keyed by the
//! integer reference id that in-text `w:footnoteReference` markers carry.
//!
//! # Invariants
//!
//! - Ids are strictly ascending in store order, hence unique
//! - Every `add` grows the store by exactly one record
//! - A record's identity survives renumbering; handles track identity, not id
//!
//! # Components
//!
//! - [`FootnoteStore`]: ordered backing sequence with positional primitives
//! - [`Footnotes`]: the controller that enforces the invariants
//! - [`Footnote`]: non-owning handle used for equality and content access

mod collection;
mod errors;
mod handle;
mod record;
mod store;

pub use collection::Footnotes;
pub use errors::{FootnoteError, FootnoteResult};
pub use handle::Footnote;
pub use record::{Record, RecordKey};
pub use store::FootnoteStore;
