//! String and typed values.

use xylo_dom::{DomTree, NodeType};

use crate::error::ModelError;
use crate::index::NodeIndex;
use crate::model::XmlNodeModel;

impl<T: DomTree> XmlNodeModel<T> {
    /// String value of the node behind `ni`.
    ///
    /// Character-carrying kinds yield their content directly; an element
    /// yields the concatenation, in document order, of the character content
    /// of every descendant text node (CDATA included); a document yields the
    /// string value of its document element.
    pub fn string_value(&self, ni: NodeIndex<T::Node>) -> Result<String, ModelError> {
        let node = self.node(ni)?;
        let tree = self.tree();
        let value = match tree.node_type(node) {
            NodeType::ProcessingInstruction
            | NodeType::Text
            | NodeType::CData
            | NodeType::Comment
            | NodeType::Attribute => tree.node_value(node).to_string(),
            NodeType::Element => self.descendant_text(node),
            NodeType::Document => tree
                .children(node)
                .into_iter()
                .find(|&c| tree.node_type(c) == NodeType::Element)
                .map(|root| self.descendant_text(root))
                .unwrap_or_default(),
            NodeType::DocumentType => String::new(),
        };
        Ok(value)
    }

    /// Typed value of the node. This model produces untyped atomics only:
    /// the typed value is the string value, and schema-aware typing is left
    /// to an external type system.
    pub fn typed_value(&self, ni: NodeIndex<T::Node>) -> Result<String, ModelError> {
        self.string_value(ni)
    }

    fn descendant_text(&self, element: T::Node) -> String {
        fn walk<T: DomTree>(tree: &T, node: T::Node, out: &mut String) {
            match tree.node_type(node) {
                NodeType::Text | NodeType::CData => out.push_str(tree.node_value(node)),
                _ => {
                    for child in tree.children(node) {
                        walk(tree, child, out);
                    }
                }
            }
        }
        let mut out = String::new();
        walk(self.tree(), element, &mut out);
        out
    }
}
