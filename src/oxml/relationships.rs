//! Relationship-id resolution for external targets
//!
//! Hyperlinks to external URLs do not carry the URL inline; they carry an
//! `r:id` that the owning part resolves through its relationship table.

/// Relationship type URIs
pub mod reltype {
    pub const HYPERLINK: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
}

/// Anything that can hand out relationship ids for a target
pub trait RelateTo {
    /// Return the rId relating this part to `target`, creating the
    /// relationship if it does not exist yet.
    fn relate_to(&mut self, target: &str, reltype: &str, is_external: bool) -> String;
}

/// A single relationship entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub r_id: String,
    pub reltype: String,
    pub target: String,
    pub is_external: bool,
}

/// In-memory relationship table for one part
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Look up a relationship by rId
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Lowest `rId{n}` (n >= 1) not already in use
    fn next_r_id(&self) -> String {
        (1..)
            .map(|n| format!("rId{}", n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_default()
    }
}

impl RelateTo for Relationships {
    fn relate_to(&mut self, target: &str, reltype: &str, is_external: bool) -> String {
        if let Some(existing) = self
            .rels
            .iter()
            .find(|rel| rel.target == target && rel.reltype == reltype && rel.is_external == is_external)
        {
            return existing.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target: target.to_string(),
            is_external,
        });
        r_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_targets_get_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.relate_to("https://a.example", reltype::HYPERLINK, true), "rId1");
        assert_eq!(rels.relate_to("https://b.example", reltype::HYPERLINK, true), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_same_target_reuses_id() {
        let mut rels = Relationships::new();
        let first = rels.relate_to("https://a.example", reltype::HYPERLINK, true);
        let second = rels.relate_to("https://a.example", reltype::HYPERLINK, true);
        assert_eq!(first, second);
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn test_external_flag_distinguishes_relationships() {
        let mut rels = Relationships::new();
        let external = rels.relate_to("target", reltype::HYPERLINK, true);
        let internal = rels.relate_to("target", reltype::HYPERLINK, false);
        assert_ne!(external, internal);

        let rel = rels.get(&external).unwrap();
        assert!(rel.is_external);
        assert_eq!(rel.target, "target");
    }
}
