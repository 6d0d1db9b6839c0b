//! Namespace scopes: the bindings visible at a node.

use smallvec::SmallVec;
use string_cache::DefaultAtom;
use xylo_dom::DomTree;

use crate::error::ModelError;
use crate::index::NodeIndex;
use crate::model::XmlNodeModel;
use crate::name::{NamePool, XML_NAMESPACE_URI};

/// One namespace declaration: prefix and the URI it is bound to. The empty
/// prefix is the default namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceBinding {
    prefix: DefaultAtom,
    uri: DefaultAtom,
}

impl NamespaceBinding {
    pub fn new(pool: &NamePool, prefix: &str, uri: &str) -> Self {
        Self { prefix: pool.intern(prefix), uri: pool.intern(uri) }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Bindings in scope at a node, nearest declaration first.
pub type NamespaceScope = SmallVec<[NamespaceBinding; 8]>;

impl<T: DomTree> XmlNodeModel<T> {
    /// Namespace bindings in scope at the node behind `ni`.
    ///
    /// Walks from the node up to the root collecting `xmlns` / `xmlns:P`
    /// attribute declarations. The first binding seen for a prefix wins;
    /// declarations for the same prefix further out are shadowed. The `xml`
    /// prefix is bound by definition, so when no ancestor declares it the
    /// fixed binding is appended last. An `xmlns=""` un-declaration is kept
    /// as a binding with an empty URI.
    pub fn namespace_bindings(
        &self,
        ni: NodeIndex<T::Node>,
    ) -> Result<NamespaceScope, ModelError> {
        let tree = self.tree();
        let mut scope = NamespaceScope::new();
        let mut xml_declared = false;

        let mut current = Some(self.node(ni)?);
        while let Some(node) = current {
            for attr in tree.attributes(node) {
                let name = tree.node_name(attr);
                let prefix = if name == "xmlns" { "" } else {
                    match name.strip_prefix("xmlns:") {
                        Some(p) => p,
                        None => continue,
                    }
                };
                if scope.iter().any(|b: &NamespaceBinding| b.prefix() == prefix) {
                    // Shadowed by a nearer declaration.
                    continue;
                }
                scope.push(NamespaceBinding::new(self.pool(), prefix, tree.node_value(attr)));
                if prefix == "xml" {
                    xml_declared = true;
                }
            }
            current = tree.parent(node);
        }

        // The prefix xml is by definition bound to
        // http://www.w3.org/XML/1998/namespace; it may, but need not, be
        // declared (Namespaces in XML 1.0, "Declaring Namespaces").
        if !xml_declared {
            scope.push(NamespaceBinding::new(self.pool(), "xml", XML_NAMESPACE_URI));
        }

        Ok(scope)
    }
}
