use std::fmt::Debug;
use std::hash::Hash;

/// Namespace name the `xml` prefix is bound to by definition.
pub const XML_NAMESPACE_URI: &str = "http://www.w3.org/XML/1998/namespace";

/// Provider-level node typing.
///
/// Deliberately wider than the node-model's kind set: `CData` and
/// `DocumentType` exist in the tree but have no kind of their own on the
/// model side (CDATA sections are text nodes there, doctype nodes are
/// rejected as unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    Element,
    Attribute,
    Text,
    CData,
    Comment,
    ProcessingInstruction,
    DocumentType,
}

/// Position of a node in the serialized source the tree was built from,
/// 1-based. Only meaningful for trees that record positions at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Read-only protocol a tree provider exposes to the node model.
///
/// Implementations own the tree; `Node` is a cheap copyable handle into it.
/// All accessors are structural reads with no side effects. Handles stay
/// valid for the lifetime of the tree; passing a handle that does not belong
/// to this tree to any accessor other than [`DomTree::contains`] is a
/// precondition violation.
pub trait DomTree {
    type Node: Copy + Eq + Hash + Debug;

    /// The document node, the topmost node of the tree.
    fn document(&self) -> Self::Node;

    /// Whether `node` is a live handle into this tree. This is the check
    /// the node model uses to reject foreign or stale indices.
    fn contains(&self, node: Self::Node) -> bool;

    fn node_type(&self, node: Self::Node) -> NodeType;

    /// Parent of `node`; the owning element for attribute nodes, `None` for
    /// the document node.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;
    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Child nodes in document order. Attribute nodes are not children.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Attribute nodes in source declaration order; empty for non-elements.
    fn attributes(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Raw node name as written in the source: possibly prefixed for
    /// elements and attributes (`p:item`, `xmlns:p`), the target for
    /// processing instructions, empty for document/text/cdata/comment nodes.
    fn node_name(&self, node: Self::Node) -> &str;

    /// Explicit namespace prefix, when the tree was built with resolved
    /// names; empty otherwise.
    fn prefix(&self, node: Self::Node) -> &str;

    /// Explicit local name, when the tree was built with resolved names;
    /// empty otherwise.
    fn local_name(&self, node: Self::Node) -> &str;

    /// Explicit namespace URI, when the tree was built with resolved names;
    /// empty otherwise.
    fn namespace_uri(&self, node: Self::Node) -> &str;

    /// Character content: text/CDATA data, comment text, processing
    /// instruction data, attribute value; empty for the rest.
    fn node_value(&self, node: Self::Node) -> &str;

    /// Source position recorded at build time, if any.
    fn source_position(&self, node: Self::Node) -> Option<SourcePos>;

    /// First element in document order carrying the given id, per the tree's
    /// notion of identifier attributes.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}
