//! Qualified names and the interning pool behind them.

use std::hash::{Hash, Hasher};

use string_cache::DefaultAtom;
use xylo_dom::{DomTree, NodeType};

use crate::error::ModelError;
use crate::index::NodeIndex;
use crate::model::XmlNodeModel;

pub use xylo_dom::XML_NAMESPACE_URI;

/// Handle to the name interner.
///
/// Passed explicitly into the model at construction and threaded through
/// every name the model produces. The handle forwards to the process-wide
/// atom table, so pools are interchangeable and trivially cheap to clone;
/// what matters is that interning is an explicit dependency of the model,
/// not ambient machinery inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePool;

impl NamePool {
    pub fn new() -> Self {
        Self
    }

    pub fn intern(&self, s: &str) -> DefaultAtom {
        DefaultAtom::from(s)
    }

    pub fn qname(&self, prefix: &str, local_name: &str, namespace_uri: &str) -> QName {
        QName {
            prefix: self.intern(prefix),
            local_name: self.intern(local_name),
            namespace_uri: self.intern(namespace_uri),
        }
    }
}

/// Qualified name of a node: local name, namespace URI and prefix.
///
/// Equality and hashing consider only the (local name, namespace URI) pair;
/// the prefix is a display and lookup artifact with no bearing on name
/// identity.
#[derive(Debug, Clone)]
pub struct QName {
    prefix: DefaultAtom,
    local_name: DefaultAtom,
    namespace_uri: DefaultAtom,
}

impl QName {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn namespace_uri(&self) -> &str {
        &self.namespace_uri
    }

    /// Clark notation: `{namespace-uri}local-name`, or the bare local name
    /// when there is no namespace.
    pub fn clark(&self) -> String {
        if self.namespace_uri.is_empty() {
            self.local_name.to_string()
        } else {
            format!("{{{}}}{}", self.namespace_uri, self.local_name)
        }
    }
}

impl PartialEq for QName {
    fn eq(&self, other: &Self) -> bool {
        self.local_name == other.local_name && self.namespace_uri == other.namespace_uri
    }
}

impl Eq for QName {}

impl Hash for QName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_name.hash(state);
        self.namespace_uri.hash(state);
    }
}

impl<T: DomTree> XmlNodeModel<T> {
    /// Qualified name of the node behind `ni`.
    ///
    /// Elements and attributes with a provider-resolved namespace URI are
    /// returned as-is. Otherwise the prefix is taken from the provider's
    /// explicit prefix field or split off the raw name, and — except for
    /// unprefixed attributes, which never live in a namespace — resolved
    /// against the namespace scope at the node. An unresolvable prefix
    /// falls back to the empty namespace URI while keeping the derived
    /// local name and prefix.
    pub fn name(&self, ni: NodeIndex<T::Node>) -> Result<QName, ModelError> {
        let node = self.node(ni)?;
        let tree = self.tree();
        let node_type = tree.node_type(node);

        if !matches!(node_type, NodeType::Element | NodeType::Attribute) {
            return Ok(self.pool().qname("", tree.node_name(node), ""));
        }

        let explicit_uri = tree.namespace_uri(node);
        if !explicit_uri.is_empty() {
            return Ok(self.pool().qname(tree.prefix(node), tree.local_name(node), explicit_uri));
        }

        let raw = tree.node_name(node);
        let (raw_prefix, raw_local) = match raw.split_once(':') {
            Some((p, l)) => (p, l),
            None => ("", raw),
        };
        let explicit_prefix = tree.prefix(node);
        let prefix = if explicit_prefix.is_empty() { raw_prefix } else { explicit_prefix };
        let explicit_local = tree.local_name(node);
        let local = if explicit_local.is_empty() { raw_local } else { explicit_local };

        // The namespace name for an unprefixed attribute name always has no
        // value (Namespaces in XML 1.0, "Namespace Defaulting").
        if node_type == NodeType::Attribute && prefix.is_empty() {
            return Ok(self.pool().qname("", local, ""));
        }

        let scope = self.namespace_bindings(ni)?;
        if let Some(binding) = scope.iter().find(|b| b.prefix() == prefix) {
            return Ok(self.pool().qname(prefix, local, binding.uri()));
        }

        Ok(self.pool().qname(prefix, local, ""))
    }
}
