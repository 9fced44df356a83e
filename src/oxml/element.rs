//! In-memory element tree
//!
//! A deliberately small tree: a tag, an ordered attribute map and a list of
//! child nodes. Names are held in Clark notation; every public method accepts
//! prefixed names (`w:p`) and converts them with [`qn`].

use std::collections::BTreeMap;

use super::ns::{local_name, prefixed, qn};

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Character data
    Text(String),
}

/// A single element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element, e.g. `Element::new("w:p")`
    pub fn new(tag: &str) -> Self {
        Self {
            tag: qn(tag),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set`]
    pub fn with_attr(mut self, attr: &str, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    /// Tag in Clark notation
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Tag in prefixed form (`w:p`)
    pub fn prefixed_tag(&self) -> String {
        prefixed(&self.tag)
    }

    /// Local part of the tag
    pub fn local_name(&self) -> &str {
        local_name(&self.tag)
    }

    /// True if this element has the given (prefixed) tag
    pub fn is(&self, tag: &str) -> bool {
        self.tag == qn(tag)
    }

    // Attributes

    /// Raw attribute value
    pub fn get(&self, attr: &str) -> Option<&str> {
        self.attrs.get(&qn(attr)).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set(&mut self, attr: &str, value: impl Into<String>) {
        self.attrs.insert(qn(attr), value.into());
    }

    /// Remove an attribute, returning its previous value
    pub fn remove(&mut self, attr: &str) -> Option<String> {
        self.attrs.remove(&qn(attr))
    }

    // Children

    /// Append a child element and return a mutable reference to it
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(Node::Element(child));
        match self.children.last_mut() {
            Some(Node::Element(element)) => element,
            _ => unreachable!("last child was just pushed as an element"),
        }
    }

    /// Append character data
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Child elements in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given tag
    pub fn first_child(&self, tag: &str) -> Option<&Element> {
        let tag = qn(tag);
        self.child_elements().find(|e| e.tag == tag)
    }

    // Queries

    /// Evaluate a relative path query.
    ///
    /// Supported syntax: `/`-separated steps of prefixed tag names or `*`,
    /// an optional leading `./`, `.` for the current element and `//` for a
    /// descendant step. Results are returned in document order.
    ///
    /// ```ignore
    /// hyperlink.xpath("./w:r/w:lastRenderedPageBreak");
    /// paragraph.xpath(".//w:t");
    /// ```
    pub fn xpath(&self, path: &str) -> Vec<&Element> {
        let path = path.strip_prefix("./").unwrap_or(path);
        let mut current: Vec<&Element> = vec![self];
        let mut descendant = false;

        for step in path.split('/') {
            match step {
                "" => {
                    descendant = true;
                    continue;
                }
                "." => continue,
                _ => {}
            }

            let step_tag = (step != "*").then(|| qn(step));
            let matches = |e: &Element| step_tag.as_ref().map_or(true, |t| &e.tag == t);

            let mut next = Vec::new();
            for element in &current {
                if descendant {
                    element.collect_descendants(&matches, &mut next);
                } else {
                    next.extend(element.child_elements().filter(|c| matches(*c)));
                }
            }
            current = next;
            descendant = false;
        }

        current
    }

    fn collect_descendants<'a, F>(&'a self, matches: &F, out: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        for child in self.child_elements() {
            if matches(child) {
                out.push(child);
            }
            child.collect_descendants(matches, out);
        }
    }

    /// Rendered text of this element.
    ///
    /// `w:t` yields its character data, `w:tab` a tab, `w:br`/`w:cr` a line
    /// feed and `w:noBreakHyphen` a hyphen. Property elements contribute
    /// nothing; any other element renders as the concatenation of its
    /// children.
    pub fn text(&self) -> String {
        match self.local_name() {
            "t" => self
                .children
                .iter()
                .filter_map(|node| match node {
                    Node::Text(s) => Some(s.as_str()),
                    Node::Element(_) => None,
                })
                .collect(),
            "tab" => "\t".to_string(),
            "br" | "cr" => "\n".to_string(),
            "noBreakHyphen" => "-".to_string(),
            "rPr" | "pPr" | "tblPr" => String::new(),
            _ => self.child_elements().map(Element::text).collect(),
        }
    }
}
