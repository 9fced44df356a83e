//! footnotes - ordered, renumbering footnote collection
//!
//! Keeps the `w:footnote` entries of a WordprocessingML document in ascending
//! reference-id order, renumbering on collision, over a minimal element tree.

pub mod cli;
pub mod footnotes;
pub mod observability;
pub mod oxml;
