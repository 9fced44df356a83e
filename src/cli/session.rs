//! Request session
//!
//! One session owns one collection and one relationship table for its
//! lifetime. Requests are JSON objects tagged by `op`:
//!
//! - `{"op":"add","id":3,"text":"..."}`
//! - `{"op":"lookup","id":3}`
//! - `{"op":"count"}`
//! - `{"op":"list"}`
//! - `{"op":"link","id":3,"url":"https://...","text":"...","tooltip":"...","anchor":"..."}`
//! - `{"op":"stats"}`

use serde::Deserialize;
use serde_json::{json, Value};

use crate::footnotes::{Footnote, FootnoteError, Footnotes};
use crate::observability::{log_event_with_fields, Event};
use crate::oxml::{HyperlinkOptions, Relationships};

use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{error_envelope, ok_envelope};

/// A single session request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Create a footnote at `id`, optionally with one paragraph of text
    Add {
        id: i64,
        #[serde(default)]
        text: Option<String>,
    },
    /// Fetch one footnote
    Lookup { id: i64 },
    /// Number of footnotes
    Count,
    /// All footnotes in order
    List,
    /// Append a hyperlink to a footnote's last paragraph
    Link {
        id: i64,
        url: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        tooltip: Option<String>,
        #[serde(default)]
        anchor: Option<String>,
    },
    /// Metrics snapshot
    Stats,
}

/// Session state
pub struct Session {
    config: Config,
    footnotes: Footnotes,
    relationships: Relationships,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            footnotes: Footnotes::new(),
            relationships: Relationships::new(),
        }
    }

    pub fn footnotes(&self) -> &Footnotes {
        &self.footnotes
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Handle one raw request line and return the response envelope
    pub fn handle_line(&mut self, line: &str) -> Value {
        let result = serde_json::from_str::<Request>(line)
            .map_err(|e| CliError::invalid_request(e.to_string()))
            .and_then(|request| self.handle(request));

        match result {
            Ok(data) => ok_envelope(data),
            Err(e) => {
                log_event_with_fields(
                    Event::RequestRejected,
                    &[("code", e.code_str()), ("reason", e.message())],
                );
                error_envelope(e.code_str(), e.message())
            }
        }
    }

    /// Execute a parsed request
    pub fn handle(&mut self, request: Request) -> CliResult<Value> {
        match request {
            Request::Add { id, text } => {
                let footnote = self.footnotes.add(id)?;
                if let Some(text) = text {
                    footnote.add_paragraph(&text, None);
                }
                Ok(json!({
                    "id": footnote.id(),
                    "ids": self.footnotes.ids(),
                }))
            }
            Request::Lookup { id } => {
                let footnote = self.footnotes.lookup(id)?;
                Ok(describe(&footnote))
            }
            Request::Count => Ok(json!({ "count": self.footnotes.count() })),
            Request::List => Ok(Value::Array(
                self.footnotes.footnotes().iter().map(describe).collect(),
            )),
            Request::Link {
                id,
                url,
                text,
                tooltip,
                anchor,
            } => {
                let internal = anchor.as_deref().map_or(false, |a| !a.is_empty());
                if !internal && url.is_empty() {
                    return Err(CliError::invalid_request(
                        "link requires a non-empty url or anchor",
                    ));
                }
                let footnote = self.footnotes.lookup(id)?;
                let options = HyperlinkOptions {
                    text,
                    tooltip,
                    anchor,
                    ..self.config.hyperlink_options()
                };
                if !footnote.add_hyperlink(&mut self.relationships, &url, &options) {
                    return Err(FootnoteError::NotFound(id).into());
                }
                Ok(json!({
                    "id": footnote.id(),
                    "text": footnote.text(),
                    "relationships": self.relationships.len(),
                }))
            }
            Request::Stats => Ok(serde_json::to_value(self.footnotes.metrics().snapshot())?),
        }
    }
}

fn describe(footnote: &Footnote) -> Value {
    json!({
        "id": footnote.id(),
        "text": footnote.text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn test_add_reports_ids() {
        let mut s = session();
        s.handle_line(r#"{"op":"add","id":1}"#);
        s.handle_line(r#"{"op":"add","id":2}"#);
        let response = s.handle_line(r#"{"op":"add","id":1,"text":"new first"}"#);

        assert_eq!(response["status"], "ok");
        assert_eq!(response["data"]["id"], 1);
        assert_eq!(response["data"]["ids"], json!([1, 2, 3]));
    }

    #[test]
    fn test_lookup_missing_is_error_envelope() {
        let mut s = session();
        let response = s.handle_line(r#"{"op":"lookup","id":7}"#);
        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "FTN_NOT_FOUND");
    }

    #[test]
    fn test_invalid_request() {
        let mut s = session();
        for line in [r#"{"op":"delete","id":1}"#, "not json", r#"{"op":"add"}"#] {
            let response = s.handle_line(line);
            assert_eq!(response["code"], "FTN_CLI_INVALID_REQUEST", "line: {}", line);
        }
    }

    #[test]
    fn test_list_in_order() {
        let mut s = session();
        s.handle_line(r#"{"op":"add","id":5,"text":"five"}"#);
        s.handle_line(r#"{"op":"add","id":2,"text":"two"}"#);

        let response = s.handle_line(r#"{"op":"list"}"#);
        assert_eq!(
            response["data"],
            json!([{"id": 2, "text": "two"}, {"id": 5, "text": "five"}])
        );
    }

    #[test]
    fn test_link_uses_relationships() {
        let mut s = session();
        s.handle_line(r#"{"op":"add","id":1,"text":"See "}"#);
        let response =
            s.handle_line(r#"{"op":"link","id":1,"url":"https://example.com","text":"here"}"#);

        assert_eq!(response["data"]["text"], "See here");
        assert_eq!(response["data"]["relationships"], 1);
        assert_eq!(s.relationships().get("rId1").unwrap().target, "https://example.com");
    }

    #[test]
    fn test_anchored_link_creates_no_relationship() {
        let mut s = session();
        s.handle_line(r#"{"op":"add","id":1}"#);
        let response = s.handle_line(r#"{"op":"link","id":1,"url":"","anchor":"intro"}"#);

        assert_eq!(response["data"]["text"], "intro");
        assert!(s.relationships().is_empty());
    }

    #[test]
    fn test_link_without_target_is_rejected() {
        let mut s = session();
        s.handle_line(r#"{"op":"add","id":1,"text":"See"}"#);

        for line in [
            r#"{"op":"link","id":1,"url":""}"#,
            r#"{"op":"link","id":1,"url":"","anchor":""}"#,
        ] {
            let response = s.handle_line(line);
            assert_eq!(response["code"], "FTN_CLI_INVALID_REQUEST", "line: {}", line);
        }
        assert!(s.relationships().is_empty());
        assert_eq!(s.footnotes().lookup(1).unwrap().text().as_deref(), Some("See"));
    }

    #[test]
    fn test_stats_and_count() {
        let mut s = session();
        s.handle_line(r#"{"op":"add","id":1}"#);
        s.handle_line(r#"{"op":"add","id":1}"#);

        assert_eq!(s.handle_line(r#"{"op":"count"}"#)["data"]["count"], 2);
        let stats = s.handle_line(r#"{"op":"stats"}"#);
        assert_eq!(stats["data"]["footnotes_added"], 2);
        assert_eq!(stats["data"]["records_shifted"], 1);
    }
}
