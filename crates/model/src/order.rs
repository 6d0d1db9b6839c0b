//! Document-order comparison.

use core::cmp::Ordering;

use smallvec::SmallVec;
use xylo_dom::DomTree;

use crate::error::ModelError;
use crate::index::NodeIndex;
use crate::model::XmlNodeModel;

/// Relative position of two nodes in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentOrder {
    Precedes,
    Is,
    Follows,
}

impl DocumentOrder {
    pub fn as_ordering(self) -> Ordering {
        match self {
            DocumentOrder::Precedes => Ordering::Less,
            DocumentOrder::Is => Ordering::Equal,
            DocumentOrder::Follows => Ordering::Greater,
        }
    }
}

impl From<Ordering> for DocumentOrder {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => DocumentOrder::Precedes,
            Ordering::Equal => DocumentOrder::Is,
            Ordering::Greater => DocumentOrder::Follows,
        }
    }
}

impl<T: DomTree> XmlNodeModel<T> {
    /// Relative document order of the nodes behind `a` and `b`.
    ///
    /// Identity compares as [`DocumentOrder::Is`]. When the model was built
    /// with `with_source_order` and both nodes carry a source position, the
    /// (line, column) keys decide directly. Otherwise the order is derived
    /// from the two root paths: an ancestor precedes its descendants, and
    /// nodes on diverging paths order by which diverging child the common
    /// ancestor reaches first (attributes before child nodes, both in
    /// declaration order). Nodes with different roots have no defined order
    /// and fail with [`ModelError::DistinctTrees`].
    pub fn compare_order(
        &self,
        a: NodeIndex<T::Node>,
        b: NodeIndex<T::Node>,
    ) -> Result<DocumentOrder, ModelError> {
        let na = self.node(a)?;
        let nb = self.node(b)?;

        if na == nb {
            return Ok(DocumentOrder::Is);
        }

        if self.source_ordered() {
            let tree = self.tree();
            if let (Some(pa), Some(pb)) = (tree.source_position(na), tree.source_position(nb)) {
                return Ok(pa.cmp(&pb).into());
            }
        }

        let path_a = self.path_from_root(na);
        let path_b = self.path_from_root(nb);
        if path_a[0] != path_b[0] {
            return Err(ModelError::DistinctTrees);
        }

        let shared = path_a.len().min(path_b.len());
        let mut diverge = 1;
        while diverge < shared && path_a[diverge] == path_b[diverge] {
            diverge += 1;
        }

        if diverge == shared {
            // One path is a prefix of the other: the shorter node is a
            // strict ancestor of the longer one and precedes it.
            return Ok(if path_a.len() < path_b.len() {
                DocumentOrder::Precedes
            } else {
                DocumentOrder::Follows
            });
        }

        let tree = self.tree();
        let ancestor = path_a[diverge - 1];
        let siblings = tree.attributes(ancestor).into_iter().chain(tree.children(ancestor));
        for sibling in siblings {
            if sibling == path_a[diverge] {
                return Ok(DocumentOrder::Precedes);
            }
            if sibling == path_b[diverge] {
                return Ok(DocumentOrder::Follows);
            }
        }

        // Unreachable for providers whose parent and child views agree.
        Ok(DocumentOrder::Is)
    }

    /// Ancestor-or-self chain as provider handles, root first.
    pub(crate) fn path_from_root(&self, node: T::Node) -> SmallVec<[T::Node; 16]> {
        let mut path = SmallVec::new();
        let mut current = Some(node);
        while let Some(n) = current {
            path.push(n);
            current = self.tree().parent(n);
        }
        path.reverse();
        path
    }
}
