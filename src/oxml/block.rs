//! Block-level content container
//!
//! Footnote bodies hold block items (`w:p`, `w:tbl`) in document order.

use super::element::Element;

/// Ordered block items owned by a story such as a footnote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockContent {
    items: Vec<Element>,
}

impl BlockContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing block items
    pub fn from_items(items: Vec<Element>) -> Self {
        Self { items }
    }

    /// Block items in document order
    pub fn items(&self) -> &[Element] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an arbitrary block item
    pub fn push(&mut self, item: Element) -> &mut Element {
        self.items.push(item);
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Append a paragraph holding `text` in a single run.
    ///
    /// Empty text produces a paragraph without runs.
    pub fn add_paragraph(&mut self, text: &str, style: Option<&str>) -> &mut Element {
        let mut p = Element::new("w:p");
        if let Some(style) = style {
            p.append(Element::new("w:pPr"))
                .append(Element::new("w:pStyle").with_attr("w:val", style));
        }
        if !text.is_empty() {
            let t = p.append(Element::new("w:r")).append(Element::new("w:t"));
            if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
                t.set("xml:space", "preserve");
            }
            t.append_text(text);
        }
        self.push(p)
    }

    /// Paragraph elements in document order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Element> {
        self.items.iter().filter(|e| e.is("w:p"))
    }

    /// Last paragraph, created empty if the container has none
    pub fn last_paragraph_mut(&mut self) -> &mut Element {
        match self.items.iter().rposition(|e| e.is("w:p")) {
            Some(index) => &mut self.items[index],
            None => self.add_paragraph("", None),
        }
    }

    /// Paragraph texts joined by line feeds
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(Element::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_paragraph_with_style() {
        let mut content = BlockContent::new();
        let p = content.add_paragraph("Footnote body.", Some("FootnoteText"));
        assert_eq!(p.xpath("w:pPr/w:pStyle")[0].get("w:val"), Some("FootnoteText"));
        assert_eq!(content.text(), "Footnote body.");
    }

    #[test]
    fn test_whitespace_is_preserved_explicitly() {
        let mut content = BlockContent::new();
        content.add_paragraph(" padded", None);
        let t = content.items()[0].xpath(".//w:t");
        assert_eq!(t[0].get("xml:space"), Some("preserve"));
    }

    #[test]
    fn test_text_joins_paragraphs() {
        let mut content = BlockContent::new();
        content.add_paragraph("first", None);
        content.push(Element::new("w:tbl"));
        content.add_paragraph("second", None);
        assert_eq!(content.paragraphs().count(), 2);
        assert_eq!(content.text(), "first\nsecond");
    }

    #[test]
    fn test_last_paragraph_created_on_demand() {
        let mut content = BlockContent::new();
        assert!(content.is_empty());
        content.last_paragraph_mut().append(Element::new("w:r"));
        assert_eq!(content.items().len(), 1);

        content.last_paragraph_mut();
        assert_eq!(content.items().len(), 1);
    }
}
