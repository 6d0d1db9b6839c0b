pub mod document;
pub mod tree;

pub use document::{
    AttrSpec, Child, Document, DocumentBuilder, ElementBuilder, NodeId, NodeSpec, attr, cdata,
    comment, doc, doctype, elem, pi, text,
};
pub use tree::{DomTree, NodeType, SourcePos, XML_NAMESPACE_URI};
