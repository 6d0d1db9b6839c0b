//! Arena-backed in-memory XML document implementing [`DomTree`].
//!
//! Focus:
//! - Ergonomic builder for quick tree creation in tests and prototypes
//! - Cheap copyable [`NodeId`] handles tagged with the owning document's id,
//!   so handles from another document are detectable in O(1)
//! - Nodes stored in depth-first pre-order, attributes before children
//!
//! Example:
//! ```
//! use xylo_dom::{DomTree, NodeType, attr, doc, elem, text};
//!
//! // <root id="r"><child>Hello</child></root>
//! let document = doc()
//!     .child(
//!         elem("root")
//!             .attr(attr("id", "r"))
//!             .child(elem("child").child(text("Hello"))),
//!     )
//!     .build();
//!
//! let root = document.document_element().unwrap();
//! assert_eq!(document.node_type(root), NodeType::Element);
//! assert_eq!(document.node_name(root), "root");
//! assert_eq!(document.attributes(root).len(), 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use compact_str::CompactString;

use crate::tree::{DomTree, NodeType, SourcePos, XML_NAMESPACE_URI};

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a node in a [`Document`] arena.
///
/// Carries the owning document's id so that [`Document::contains`] can tell
/// a foreign handle apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    doc: u64,
    index: u32,
}

#[derive(Debug, Clone)]
struct NodeData {
    node_type: NodeType,
    /// Raw name as written: possibly prefixed for elements/attributes,
    /// the target for processing instructions.
    name: CompactString,
    /// Resolved name parts, set only when the builder was given them.
    prefix: CompactString,
    local_name: CompactString,
    namespace_uri: CompactString,
    /// Character content per node type.
    value: CompactString,
    position: Option<SourcePos>,
    parent: Option<u32>,
    children: Vec<u32>,
    attributes: Vec<u32>,
}

impl NodeData {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            name: CompactString::default(),
            prefix: CompactString::default(),
            local_name: CompactString::default(),
            namespace_uri: CompactString::default(),
            value: CompactString::default(),
            position: None,
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

/// Immutable in-memory XML tree. Built once through [`DocumentBuilder`];
/// afterwards only read.
#[derive(Debug)]
pub struct Document {
    id: u64,
    nodes: Vec<NodeData>,
}

impl Document {
    fn data(&self, node: NodeId) -> &NodeData {
        debug_assert_eq!(node.doc, self.id, "handle from another document");
        &self.nodes[node.index as usize]
    }

    fn handle(&self, index: u32) -> NodeId {
        NodeId { doc: self.id, index }
    }

    /// The document element, the outermost element of the tree.
    pub fn document_element(&self) -> Option<NodeId> {
        self.nodes[0]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c as usize].node_type == NodeType::Element)
            .map(|c| self.handle(c))
    }

    /// Total number of nodes, the document node included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in document order (pre-order, attributes before children).
    pub fn all_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| self.handle(i as u32))
    }

    fn is_id_attribute(&self, attr: &NodeData) -> bool {
        let (prefix, local) = if attr.local_name.is_empty() {
            match attr.name.split_once(':') {
                Some((p, l)) => (p, l),
                None => ("", attr.name.as_str()),
            }
        } else {
            (attr.prefix.as_str(), attr.local_name.as_str())
        };
        if local != "id" {
            return false;
        }
        let is_plain_id = prefix.is_empty() && attr.namespace_uri.is_empty();
        let is_xml_id = prefix == "xml" || attr.namespace_uri.as_str() == XML_NAMESPACE_URI;
        is_plain_id || is_xml_id
    }
}

impl DomTree for Document {
    type Node = NodeId;

    fn document(&self) -> NodeId {
        self.handle(0)
    }

    fn contains(&self, node: NodeId) -> bool {
        node.doc == self.id && (node.index as usize) < self.nodes.len()
    }

    fn node_type(&self, node: NodeId) -> NodeType {
        self.data(node).node_type
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent.map(|p| self.handle(p))
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).children.first().map(|&c| self.handle(c))
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.data(node).parent?;
        let siblings = &self.nodes[parent as usize].children;
        let at = siblings.iter().position(|&c| c == node.index)?;
        siblings.get(at + 1).map(|&c| self.handle(c))
    }

    fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.data(node).parent?;
        let siblings = &self.nodes[parent as usize].children;
        let at = siblings.iter().position(|&c| c == node.index)?;
        at.checked_sub(1).map(|i| self.handle(siblings[i]))
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.data(node).children.iter().map(|&c| self.handle(c)).collect()
    }

    fn attributes(&self, node: NodeId) -> Vec<NodeId> {
        self.data(node).attributes.iter().map(|&a| self.handle(a)).collect()
    }

    fn node_name(&self, node: NodeId) -> &str {
        &self.data(node).name
    }

    fn prefix(&self, node: NodeId) -> &str {
        &self.data(node).prefix
    }

    fn local_name(&self, node: NodeId) -> &str {
        &self.data(node).local_name
    }

    fn namespace_uri(&self, node: NodeId) -> &str {
        &self.data(node).namespace_uri
    }

    fn node_value(&self, node: NodeId) -> &str {
        &self.data(node).value
    }

    fn source_position(&self, node: NodeId) -> Option<SourcePos> {
        self.data(node).position
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        for (index, data) in self.nodes.iter().enumerate() {
            if data.node_type != NodeType::Element {
                continue;
            }
            let hit = data.attributes.iter().any(|&a| {
                let attr = &self.nodes[a as usize];
                self.is_id_attribute(attr) && attr.value.as_str() == id
            });
            if hit {
                return Some(self.handle(index as u32));
            }
        }
        None
    }
}

/// Leaf node under construction: text, CDATA, comment, processing
/// instruction or doctype.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    data: NodeData,
}

impl NodeSpec {
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.data.position = Some(SourcePos::new(line, column));
        self
    }
}

/// Attribute under construction.
#[derive(Debug, Clone)]
pub struct AttrSpec {
    data: NodeData,
}

impl AttrSpec {
    /// Attach resolved name parts, as a namespace-aware parser would.
    pub fn resolved(mut self, prefix: &str, local_name: &str, namespace_uri: &str) -> Self {
        self.data.prefix = prefix.into();
        self.data.local_name = local_name.into();
        self.data.namespace_uri = namespace_uri.into();
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.data.position = Some(SourcePos::new(line, column));
        self
    }
}

/// Element under construction.
#[derive(Debug)]
pub struct ElementBuilder {
    data: NodeData,
    attrs: Vec<AttrSpec>,
    children: Vec<Child>,
}

impl ElementBuilder {
    pub fn attr(mut self, attr: AttrSpec) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Attach resolved name parts, as a namespace-aware parser would.
    pub fn resolved(mut self, prefix: &str, local_name: &str, namespace_uri: &str) -> Self {
        self.data.prefix = prefix.into();
        self.data.local_name = local_name.into();
        self.data.namespace_uri = namespace_uri.into();
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.data.position = Some(SourcePos::new(line, column));
        self
    }
}

/// Either a finished leaf or a nested element builder.
#[derive(Debug)]
pub enum Child {
    Element(ElementBuilder),
    Leaf(NodeSpec),
}

impl From<ElementBuilder> for Child {
    fn from(b: ElementBuilder) -> Self {
        Child::Element(b)
    }
}

impl From<NodeSpec> for Child {
    fn from(s: NodeSpec) -> Self {
        Child::Leaf(s)
    }
}

/// Builder for a whole [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    children: Vec<Child>,
}

impl DocumentBuilder {
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn build(self) -> Document {
        let mut document = Document {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            nodes: vec![NodeData::new(NodeType::Document)],
        };
        for child in self.children {
            push_child(&mut document.nodes, 0, child);
        }
        document
    }
}

fn push_child(nodes: &mut Vec<NodeData>, parent: u32, child: Child) -> u32 {
    match child {
        Child::Leaf(spec) => {
            let index = push_node(nodes, parent, spec.data);
            nodes[parent as usize].children.push(index);
            index
        }
        Child::Element(builder) => {
            let ElementBuilder { data, attrs, children } = builder;
            let index = push_node(nodes, parent, data);
            nodes[parent as usize].children.push(index);
            for attr in attrs {
                let a = push_node(nodes, index, attr.data);
                nodes[index as usize].attributes.push(a);
            }
            for nested in children {
                push_child(nodes, index, nested);
            }
            index
        }
    }
}

fn push_node(nodes: &mut Vec<NodeData>, parent: u32, mut data: NodeData) -> u32 {
    let index = nodes.len() as u32;
    data.parent = Some(parent);
    nodes.push(data);
    index
}

/// Start building a document.
pub fn doc() -> DocumentBuilder {
    DocumentBuilder::default()
}

/// Element with a raw, possibly prefixed name.
pub fn elem(name: &str) -> ElementBuilder {
    let mut data = NodeData::new(NodeType::Element);
    data.name = name.into();
    ElementBuilder { data, attrs: Vec::new(), children: Vec::new() }
}

/// Attribute with a raw, possibly prefixed name.
pub fn attr(name: &str, value: &str) -> AttrSpec {
    let mut data = NodeData::new(NodeType::Attribute);
    data.name = name.into();
    data.value = value.into();
    AttrSpec { data }
}

pub fn text(value: &str) -> NodeSpec {
    let mut data = NodeData::new(NodeType::Text);
    data.value = value.into();
    NodeSpec { data }
}

pub fn cdata(value: &str) -> NodeSpec {
    let mut data = NodeData::new(NodeType::CData);
    data.value = value.into();
    NodeSpec { data }
}

pub fn comment(value: &str) -> NodeSpec {
    let mut data = NodeData::new(NodeType::Comment);
    data.value = value.into();
    NodeSpec { data }
}

pub fn pi(target: &str, data_value: &str) -> NodeSpec {
    let mut data = NodeData::new(NodeType::ProcessingInstruction);
    data.name = target.into();
    data.value = data_value.into();
    NodeSpec { data }
}

pub fn doctype(name: &str) -> NodeSpec {
    let mut data = NodeData::new(NodeType::DocumentType);
    data.name = name.into();
    NodeSpec { data }
}
