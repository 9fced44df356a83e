//! Observable events
//!
//! Events are explicit and typed; each maps to one stable log name.

use std::fmt;

use super::logger::Severity;

/// Observable events in the footnote collection and its CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Collection
    /// New record appended at the tail without shifting
    FootnoteAppend,
    /// New record inserted into a gap without shifting
    FootnoteInsert,
    /// New record inserted at a colliding id; following records shifted
    FootnoteShift,
    /// Lookup of an absent reference id
    FootnoteLookupMiss,
    /// Collection loaded from an element tree
    FootnotesLoaded,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Session
    /// Session begins reading requests
    SessionBegin,
    /// Session reached end of input
    SessionComplete,
    /// Request could not be parsed or executed
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::FootnoteAppend => "FOOTNOTE_APPEND",
            Event::FootnoteInsert => "FOOTNOTE_INSERT",
            Event::FootnoteShift => "FOOTNOTE_SHIFT",
            Event::FootnoteLookupMiss => "FOOTNOTE_LOOKUP_MISS",
            Event::FootnotesLoaded => "FOOTNOTES_LOADED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SessionBegin => "SESSION_BEGIN",
            Event::SessionComplete => "SESSION_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::FootnoteAppend
            | Event::FootnoteInsert
            | Event::FootnoteShift
            | Event::FootnoteLookupMiss => Severity::Trace,
            Event::RequestRejected => Severity::Warn,
            Event::FootnotesLoaded
            | Event::ConfigLoaded
            | Event::SessionBegin
            | Event::SessionComplete => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::FootnoteAppend,
            Event::FootnoteInsert,
            Event::FootnoteShift,
            Event::FootnoteLookupMiss,
            Event::FootnotesLoaded,
            Event::ConfigLoaded,
            Event::SessionBegin,
            Event::SessionComplete,
            Event::RequestRejected,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_per_operation_events_are_trace() {
        assert_eq!(Event::FootnoteShift.severity(), Severity::Trace);
        assert_eq!(Event::RequestRejected.severity(), Severity::Warn);
        assert_eq!(Event::ConfigLoaded.severity(), Severity::Info);
    }
}
