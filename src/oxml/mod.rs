//! Element tree substrate
//!
//! The minimal slice of a WordprocessingML element tree that the footnote
//! collection builds on:
//!
//! - Construct child elements by tag and append them to a parent
//! - Read and write attributes by qualified name
//! - Path-style queries returning descendants in document order
//! - Typed attribute accessors with optional/required/default semantics
//!
//! Hyperlink elements and relationship ids live here as well, since footnote
//! bodies commonly carry links.

mod block;
mod element;
mod errors;
mod hyperlink;
pub mod ns;
mod relationships;
mod simpletypes;

pub use block::BlockContent;
pub use element::{Element, Node};
pub use errors::{OxmlError, OxmlResult};
pub use hyperlink::{build_hyperlink, Hyperlink, HyperlinkOptions, DEFAULT_COLOR};
pub use ns::qn;
pub use relationships::{reltype, RelateTo, Relationship, Relationships};
pub use simpletypes::{
    OptionalAttribute, RequiredAttribute, SimpleType, StDecimalNumber, StOnOff, XsdString,
};
