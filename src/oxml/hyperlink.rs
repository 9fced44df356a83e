//! `<w:hyperlink>` element view and builder

use super::element::Element;
use super::errors::OxmlResult;
use super::relationships::{reltype, RelateTo};
use super::simpletypes::{OptionalAttribute, StOnOff, XsdString};

/// Default hyperlink run color (hex RGB, no leading `#`)
pub const DEFAULT_COLOR: &str = "0000FF";

/// Read-only view over a `<w:hyperlink>` element.
///
/// Hyperlink text lives in one or more `w:r` children. External links carry
/// an `r:id`; internal links carry a `w:anchor` naming a bookmark.
#[derive(Debug, Clone, Copy)]
pub struct Hyperlink<'a> {
    element: &'a Element,
}

impl<'a> Hyperlink<'a> {
    /// Wrap an element; `None` if it is not a `w:hyperlink`
    pub fn new(element: &'a Element) -> Option<Self> {
        element.is("w:hyperlink").then_some(Self { element })
    }

    /// Relationship id of an external target
    pub fn r_id(&self) -> OxmlResult<Option<String>> {
        OptionalAttribute::<XsdString>::new("r:id").get(self.element)
    }

    /// Bookmark name of an internal target
    pub fn anchor(&self) -> OxmlResult<Option<String>> {
        OptionalAttribute::<XsdString>::new("w:anchor").get(self.element)
    }

    /// Whether the target is added to the viewed-hyperlink history (default true)
    pub fn history(&self) -> OxmlResult<bool> {
        OptionalAttribute::<StOnOff>::with_default("w:history", true)
            .get(self.element)
            .map(|v| v.unwrap_or(true))
    }

    /// `w:r` children in document order
    pub fn runs(&self) -> Vec<&'a Element> {
        self.element.xpath("w:r")
    }

    /// All `w:lastRenderedPageBreak` descendants of this hyperlink's runs
    pub fn last_rendered_page_breaks(&self) -> Vec<&'a Element> {
        self.element.xpath("./w:r/w:lastRenderedPageBreak")
    }

    /// Text of the hyperlink, the concatenation of its runs' text
    pub fn text(&self) -> String {
        self.runs().iter().map(|r| r.text()).collect()
    }
}

/// Options for [`build_hyperlink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkOptions {
    /// Visible text; defaults to the anchor or URL
    pub text: Option<String>,
    /// Hover text; empty is treated as absent
    pub tooltip: Option<String>,
    /// Run color; `None` or empty omits `w:color`
    pub color: Option<String>,
    pub underline: bool,
    /// Internal bookmark target; when set and non-empty no relationship is created
    pub anchor: Option<String>,
}

impl Default for HyperlinkOptions {
    fn default() -> Self {
        Self {
            text: None,
            tooltip: None,
            color: Some(DEFAULT_COLOR.to_string()),
            underline: true,
            anchor: None,
        }
    }
}

impl HyperlinkOptions {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }
}

/// Build a `w:hyperlink` element holding a single styled run.
///
/// External links are related to `part` as a hyperlink relationship and
/// referenced by `r:id`. Anchored links point at a bookmark instead and leave
/// `part` untouched. An empty anchor or tooltip counts as absent.
pub fn build_hyperlink<P: RelateTo + ?Sized>(
    part: &mut P,
    url: &str,
    options: &HyperlinkOptions,
) -> Element {
    let mut hyperlink = Element::new("w:hyperlink");

    let anchor = options.anchor.as_deref().filter(|a| !a.is_empty());
    let visible_text = match anchor {
        Some(anchor) => {
            hyperlink.set("w:anchor", anchor);
            options.text.clone().unwrap_or_else(|| anchor.to_string())
        }
        None => {
            let r_id = part.relate_to(url, reltype::HYPERLINK, true);
            hyperlink.set("r:id", r_id);
            options.text.clone().unwrap_or_else(|| url.to_string())
        }
    };
    if let Some(tooltip) = options.tooltip.as_deref().filter(|t| !t.is_empty()) {
        hyperlink.set("w:tooltip", tooltip);
    }

    let mut r_pr = Element::new("w:rPr");
    if let Some(color) = options.color.as_deref().filter(|c| !c.is_empty()) {
        r_pr.append(Element::new("w:color").with_attr("w:val", color.trim_start_matches('#')));
    }
    let underline = if options.underline { "single" } else { "none" };
    r_pr.append(Element::new("w:u").with_attr("w:val", underline));
    r_pr.append(Element::new("w:rStyle").with_attr("w:val", "Hyperlink"));

    let mut t = Element::new("w:t").with_attr("xml:space", "preserve");
    t.append_text(visible_text);

    let r = hyperlink.append(Element::new("w:r"));
    r.append(r_pr);
    r.append(t);

    hyperlink
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oxml::Relationships;

    #[test]
    fn test_view_rejects_other_elements() {
        assert!(Hyperlink::new(&Element::new("w:r")).is_none());
    }

    #[test]
    fn test_history_defaults_to_true() {
        let mut e = Element::new("w:hyperlink");
        assert!(Hyperlink::new(&e).unwrap().history().unwrap());
        e.set("w:history", "0");
        assert!(!Hyperlink::new(&e).unwrap().history().unwrap());
    }

    #[test]
    fn test_text_concatenates_runs() {
        let mut e = Element::new("w:hyperlink");
        for part in ["foo", "bar"] {
            e.append(Element::new("w:r"))
                .append(Element::new("w:t"))
                .append_text(part);
        }
        e.append(Element::new("w:r"))
            .append(Element::new("w:lastRenderedPageBreak"));

        let link = Hyperlink::new(&e).unwrap();
        assert_eq!(link.text(), "foobar");
        assert_eq!(link.runs().len(), 3);
        assert_eq!(link.last_rendered_page_breaks().len(), 1);
    }

    #[test]
    fn test_build_strips_hash_from_color() {
        let mut rels = Relationships::new();
        let options = HyperlinkOptions {
            color: Some("#FF0000".into()),
            ..Default::default()
        };
        let e = build_hyperlink(&mut rels, "https://example.com", &options);
        assert_eq!(e.xpath("w:r/w:rPr/w:color")[0].get("w:val"), Some("FF0000"));
    }

    #[test]
    fn test_empty_anchor_builds_external_link() {
        let mut rels = Relationships::new();
        let options = HyperlinkOptions::default().with_anchor("").with_tooltip("");
        let e = build_hyperlink(&mut rels, "https://example.com", &options);

        assert_eq!(e.get("w:anchor"), None);
        assert_eq!(e.get("w:tooltip"), None);
        assert_eq!(e.get("r:id"), Some("rId1"));
        assert_eq!(Hyperlink::new(&e).unwrap().text(), "https://example.com");
    }

    #[test]
    fn test_build_without_color() {
        let mut rels = Relationships::new();
        let options = HyperlinkOptions {
            color: None,
            underline: false,
            ..Default::default()
        };
        let e = build_hyperlink(&mut rels, "https://example.com", &options);
        assert!(e.xpath("w:r/w:rPr/w:color").is_empty());
        assert_eq!(e.xpath("w:r/w:rPr/w:u")[0].get("w:val"), Some("none"));
    }
}
