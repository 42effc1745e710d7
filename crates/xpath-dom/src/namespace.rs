//! Synthesized namespace nodes.
//!
//! DOM-style trees represent namespace declarations as `xmlns` attributes and
//! have no node for "namespace in scope on this element". XPath does, so the
//! namespace axis builds a [`NamespaceNode`] per in-scope prefix, pointing back
//! at the element the axis was evaluated on.
//!
//! ```
//! use platynui_xpath_dom::simple_node::{elem, xmlns};
//! use platynui_xpath_dom::{DomNode, NamespaceNode, Node, NodeKind};
//!
//! let root = elem("root").attr(xmlns("foo", "http://foo/")).build();
//! let decl = root.attributes()[0].clone();
//! let ns = NamespaceNode::from_attribute(Some(root.clone()), &decl);
//!
//! assert_eq!(ns.node_name(), "foo");
//! assert_eq!(ns.node_value().as_deref(), Some("http://foo/"));
//! assert_eq!(ns.kind(), NodeKind::Namespace);
//! assert!(ns.set_node_value("x").is_err());
//! ```

use core::fmt;
use core::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};
use std::hash::DefaultHasher;

use compact_str::CompactString;

use crate::consts::XMLNS_PREFIX;
use crate::error::DomError;
use crate::model::{DomNode, Node, NodeKind, UserData};
use crate::node_list::EmptyNodeList;

/// Derive the declared prefix from the qualified name of a declaration
/// attribute. `xmlns` is the default namespace (""), `xmlns:p` declares `p`.
/// Any other name is taken verbatim, for hosts that report the local name of
/// declaration attributes instead of the qualified one.
pub fn declared_prefix(attribute_name: &str) -> &str {
    if attribute_name == XMLNS_PREFIX {
        ""
    } else if let Some(prefix) = attribute_name.strip_prefix("xmlns:") {
        prefix
    } else {
        attribute_name
    }
}

/// A read-only XPath namespace node: `(parent, prefix, uri)`.
///
/// `parent` is the element that was queried, not necessarily the one holding
/// the declaration. It is a shared handle into the host tree; the node is not
/// part of the parent's children or attributes.
#[derive(Clone, PartialEq, Eq)]
pub struct NamespaceNode<N> {
    parent: Option<N>,
    prefix: CompactString,
    uri: CompactString,
}

impl<N: DomNode> NamespaceNode<N> {
    pub fn new(parent: Option<N>, prefix: impl Into<CompactString>, uri: impl Into<CompactString>) -> Self {
        Self { parent, prefix: prefix.into(), uri: uri.into() }
    }

    /// Build from an `xmlns` / `xmlns:p` attribute; the URI is the attribute value.
    pub fn from_attribute(parent: Option<N>, attribute: &N) -> Self {
        let name = attribute.node_name();
        let uri = attribute.node_value().unwrap_or_default();
        Self::new(parent, declared_prefix(&name), uri)
    }

    /// Declared prefix, "" for the default namespace.
    pub fn ns_prefix(&self) -> &str {
        &self.prefix
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn parent(&self) -> Option<&N> {
        self.parent.as_ref()
    }

    pub fn is_default(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Sum of the component hashes; an absent parent contributes zero.
    pub fn hash_code(&self) -> u64 {
        let parent = self.parent.as_ref().map_or(0, component_hash);
        parent.wrapping_add(component_hash(&self.prefix)).wrapping_add(component_hash(&self.uri))
    }
}

fn component_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}

impl<N: DomNode> Hash for NamespaceNode<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<N: fmt::Debug> fmt::Debug for NamespaceNode<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespaceNode")
            .field("prefix", &self.prefix)
            .field("uri", &self.uri)
            .field("parent", &self.parent)
            .finish()
    }
}

impl<N> fmt::Display for NamespaceNode<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "xmlns=\"{}\"", self.uri)
        } else {
            write!(f, "xmlns:{}=\"{}\"", self.prefix, self.uri)
        }
    }
}

impl<N: DomNode> Node for NamespaceNode<N> {
    type Ref = N;
    type ChildList = EmptyNodeList<N>;

    fn node_name(&self) -> String {
        self.prefix.to_string()
    }

    fn node_value(&self) -> Option<String> {
        Some(self.uri.to_string())
    }

    fn set_node_value(&self, _value: &str) -> Result<(), DomError> {
        Err(DomError::NoModificationAllowed)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Namespace
    }

    fn parent_node(&self) -> Option<N> {
        self.parent.clone()
    }

    fn child_nodes(&self) -> Self::ChildList {
        EmptyNodeList::new()
    }

    fn first_child(&self) -> Option<N> {
        None
    }

    fn last_child(&self) -> Option<N> {
        None
    }

    fn previous_sibling(&self) -> Option<N> {
        None
    }

    fn next_sibling(&self) -> Option<N> {
        None
    }

    fn attributes(&self) -> Option<Vec<N>> {
        None
    }

    fn owner_document(&self) -> Option<N> {
        self.parent.as_ref().and_then(DomNode::owner_document)
    }

    fn insert_before(&self, _new_child: &N, _ref_child: Option<&N>) -> Result<N, DomError> {
        Err(DomError::NoModificationAllowed)
    }

    fn replace_child(&self, _new_child: &N, _old_child: &N) -> Result<N, DomError> {
        Err(DomError::NoModificationAllowed)
    }

    fn remove_child(&self, _old_child: &N) -> Result<N, DomError> {
        Err(DomError::NoModificationAllowed)
    }

    fn append_child(&self, _new_child: &N) -> Result<N, DomError> {
        Err(DomError::NoModificationAllowed)
    }

    fn has_child_nodes(&self) -> bool {
        false
    }

    /// `deep` is ignored: namespace nodes have no descendants.
    fn clone_node(&self, _deep: bool) -> Self {
        Self::new(self.parent.clone(), self.prefix.clone(), self.uri.clone())
    }

    fn normalize(&self) {}

    fn is_supported(&self, _feature: &str, _version: &str) -> bool {
        false
    }

    // Declarations are not themselves namespace-qualified.
    fn namespace_uri(&self) -> Option<String> {
        None
    }

    fn prefix(&self) -> Option<String> {
        None
    }

    fn set_prefix(&self, _prefix: &str) -> Result<(), DomError> {
        Err(DomError::NoModificationAllowed)
    }

    /// XPath names a namespace node by its prefix.
    fn local_name(&self) -> Option<String> {
        Some(self.prefix.to_string())
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn base_uri(&self) -> Result<Option<String>, DomError> {
        Err(DomError::unsupported("base_uri"))
    }

    fn compare_document_position(&self, _other: &N) -> Result<u16, DomError> {
        Err(DomError::unsupported("compare_document_position"))
    }

    fn text_content(&self) -> Option<String> {
        Some(self.uri.to_string())
    }

    fn set_text_content(&self, _text: &str) -> Result<(), DomError> {
        Err(DomError::NoModificationAllowed)
    }

    /// Structurally equal and attached to the very same parent object.
    fn is_same_node(&self, other: &Self) -> bool {
        self.is_equal_node(other)
            && match (&self.parent, &other.parent) {
                (Some(a), Some(b)) => a.is_same_node(b),
                (None, None) => true,
                _ => false,
            }
    }

    /// Compares prefix and URI only; the parent is not consulted.
    fn is_equal_node(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.uri == other.uri
    }

    fn lookup_prefix(&self, _namespace_uri: &str) -> Result<Option<String>, DomError> {
        Err(DomError::unsupported("lookup_prefix"))
    }

    fn is_default_namespace(&self, _namespace_uri: &str) -> Result<bool, DomError> {
        Err(DomError::unsupported("is_default_namespace"))
    }

    fn lookup_namespace_uri(&self, _prefix: Option<&str>) -> Result<Option<String>, DomError> {
        Err(DomError::unsupported("lookup_namespace_uri"))
    }

    fn feature(&self, _feature: &str, _version: &str) -> Option<UserData> {
        None
    }

    fn set_user_data(&self, _key: &str, _data: Option<UserData>) -> Result<Option<UserData>, DomError> {
        Err(DomError::unsupported("set_user_data"))
    }

    fn user_data(&self, _key: &str) -> Result<Option<UserData>, DomError> {
        Err(DomError::unsupported("user_data"))
    }
}
