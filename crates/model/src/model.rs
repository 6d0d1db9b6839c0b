//! The node model proper: construction, the index codec, kind
//! classification, simple-axis navigation and the documented capability
//! gaps.

use std::sync::Arc;

use tracing::{debug, trace, warn};
use xylo_dom::{DomTree, NodeType};

use crate::error::ModelError;
use crate::index::NodeIndex;
use crate::name::NamePool;

/// Node kinds of the query engine's data model.
///
/// A closed set: every node the model accepts classifies as exactly one of
/// these, and provider node types outside the set are rejected rather than
/// mapped to a near-miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

/// Single-step navigation directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleAxis {
    Parent,
    FirstChild,
    NextSibling,
    PreviousSibling,
}

/// Read-only node model over a [`DomTree`] provider.
///
/// Presents the provider's tree to a query engine as opaque node indices
/// plus the operations of the engine's node-model protocol. Purely a
/// projection: it never creates, mutates or destroys nodes. All state is
/// fixed at construction, so a model is freely shareable across concurrent
/// readers of an unchanging tree.
pub struct XmlNodeModel<T: DomTree> {
    pool: NamePool,
    tree: Arc<T>,
    source_ordered: bool,
}

impl<T: DomTree> XmlNodeModel<T> {
    pub fn new(pool: NamePool, tree: Arc<T>) -> Self {
        debug!("node model created");
        Self { pool, tree, source_ordered: false }
    }

    /// Enable the source-position document-order fast path. Only valid for
    /// trees built directly from serialized source text and never mutated
    /// afterwards; positions must then reflect document order.
    pub fn with_source_order(mut self, source_ordered: bool) -> Self {
        self.source_ordered = source_ordered;
        self
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn pool(&self) -> &NamePool {
        &self.pool
    }

    pub(crate) fn source_ordered(&self) -> bool {
        self.source_ordered
    }

    /// Encode a provider node as an engine-facing index. `None` encodes as
    /// the empty index. Encoding is a pure bijection for nodes of this
    /// model's tree; handing in a node of a different tree is a
    /// precondition violation (the resulting index will fail to decode).
    pub fn index(&self, node: Option<T::Node>) -> NodeIndex<T::Node> {
        NodeIndex::new(node)
    }

    /// Decode an index back to the provider node it was made from.
    ///
    /// Fails fast with [`ModelError::InvalidIndex`] for the empty index and
    /// for any index that does not refer to a live node of this tree —
    /// foreign and stale indices are rejected, never dereferenced.
    pub fn node(&self, index: NodeIndex<T::Node>) -> Result<T::Node, ModelError> {
        match index.get() {
            Some(&node) if self.tree.contains(node) => Ok(node),
            _ => Err(ModelError::InvalidIndex),
        }
    }

    /// Kind of the node behind `index`.
    pub fn kind(&self, index: NodeIndex<T::Node>) -> Result<NodeKind, ModelError> {
        let node = self.node(index)?;
        match self.tree.node_type(node) {
            NodeType::Document => Ok(NodeKind::Document),
            NodeType::Element => Ok(NodeKind::Element),
            NodeType::Attribute => Ok(NodeKind::Attribute),
            // CDATA sections are text nodes in the engine's data model.
            NodeType::Text | NodeType::CData => Ok(NodeKind::Text),
            NodeType::Comment => Ok(NodeKind::Comment),
            NodeType::ProcessingInstruction => Ok(NodeKind::ProcessingInstruction),
            other @ NodeType::DocumentType => {
                warn!(node_type = ?other, "node type outside the model's kind set");
                Err(ModelError::UnsupportedKind(other))
            }
        }
    }

    /// One step along a simple axis. Steps with no target (parent of the
    /// root, first child of a leaf, siblings at either end) yield the empty
    /// index, never an error.
    pub fn step(
        &self,
        axis: SimpleAxis,
        origin: NodeIndex<T::Node>,
    ) -> Result<NodeIndex<T::Node>, ModelError> {
        let node = self.node(origin)?;
        let target = match axis {
            SimpleAxis::Parent => self.tree.parent(node),
            SimpleAxis::FirstChild => self.tree.first_child(node),
            SimpleAxis::NextSibling => self.tree.next_sibling(node),
            SimpleAxis::PreviousSibling => self.tree.previous_sibling(node),
        };
        Ok(self.index(target))
    }

    /// An element's attributes in source declaration order; empty for
    /// elements without attributes and for non-element nodes.
    pub fn attributes(
        &self,
        element: NodeIndex<T::Node>,
    ) -> Result<Vec<NodeIndex<T::Node>>, ModelError> {
        let node = self.node(element)?;
        Ok(self.tree.attributes(node).into_iter().map(|a| self.index(Some(a))).collect())
    }

    /// Topmost ancestor of the node: the document node for nodes of a
    /// complete tree.
    pub fn root(&self, index: NodeIndex<T::Node>) -> Result<NodeIndex<T::Node>, ModelError> {
        let mut node = self.node(index)?;
        while let Some(parent) = self.tree.parent(node) {
            node = parent;
        }
        Ok(self.index(Some(node)))
    }

    /// Position of the node among its parent's children, `None` for nodes
    /// that are not children (the document node, attribute nodes).
    pub fn child_index(&self, index: NodeIndex<T::Node>) -> Result<Option<usize>, ModelError> {
        let node = self.node(index)?;
        let Some(parent) = self.tree.parent(node) else {
            return Ok(None);
        };
        Ok(self.tree.children(parent).iter().position(|&c| c == node))
    }

    /// Ancestor-or-self chain of the node, root first.
    pub fn ancestor_path(
        &self,
        index: NodeIndex<T::Node>,
    ) -> Result<Vec<NodeIndex<T::Node>>, ModelError> {
        let node = self.node(index)?;
        Ok(self.path_from_root(node).into_iter().map(|n| self.index(Some(n))).collect())
    }

    /// First element carrying the given id, per the provider's notion of
    /// identifier attributes; the empty index when there is none.
    pub fn element_by_id(&self, id: &str) -> NodeIndex<T::Node> {
        let found = self.tree.element_by_id(id);
        if found.is_none() {
            trace!(id, "no element with this id");
        }
        self.index(found)
    }

    /// Base URI resolution is not provided by this model; permanently
    /// `None` for every node. A documented capability gap, not an error.
    pub fn base_uri(&self, index: NodeIndex<T::Node>) -> Result<Option<String>, ModelError> {
        self.node(index)?;
        Ok(None)
    }

    /// Document URI resolution is not provided by this model; permanently
    /// `None` for every node. A documented capability gap, not an error.
    pub fn document_uri(&self, index: NodeIndex<T::Node>) -> Result<Option<String>, ModelError> {
        self.node(index)?;
        Ok(None)
    }

    /// IDREF lookup is not provided by this model; permanently empty. A
    /// documented capability gap, not an error.
    pub fn nodes_by_idref(&self, _idref: &str) -> Vec<NodeIndex<T::Node>> {
        Vec::new()
    }
}
