use thiserror::Error;
use xylo_dom::NodeType;

/// Errors surfaced by the node model.
///
/// Everything else about the model is total: absent axis targets, missing
/// ids, unset URIs and empty scopes are expressed structurally (empty index,
/// empty sequence, `None`), never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The index is empty, was produced against another tree, or refers to a
    /// node that no longer exists.
    #[error("index does not refer to a live node of this tree")]
    InvalidIndex,
    /// The two nodes have no common root; document order is undefined
    /// between unrelated trees.
    #[error("nodes belong to different trees; document order is undefined")]
    DistinctTrees,
    /// The provider exposed a node type that has no kind in the node model.
    #[error("node type {0:?} has no node-model kind")]
    UnsupportedKind(NodeType),
}
