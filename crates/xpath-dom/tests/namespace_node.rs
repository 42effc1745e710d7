use std::collections::HashSet;
use std::sync::Arc;

use platynui_xpath_dom::simple_node::SimpleNode;
use platynui_xpath_dom::{DomError, DomNode, NAMESPACE_NODE, NamespaceNode, Node, NodeKind, attr, elem, simple_doc, xmlns};
use rstest::{fixture, rstest};

struct Tree {
    document: SimpleNode,
    root: SimpleNode,
    other: SimpleNode,
}

#[fixture]
fn tree() -> Tree {
    let document = simple_doc()
        .child(
            elem("root")
                .attr(xmlns("", "http://example.org/"))
                .attr(xmlns("foo", "http://foo/"))
                .attr(attr("id", "r"))
                .child(elem("other")),
        )
        .build();
    let root = document.children()[0].clone();
    let other = root.children()[0].clone();
    Tree { document, root, other }
}

fn ns(parent: &SimpleNode) -> NamespaceNode<SimpleNode> {
    NamespaceNode::new(Some(parent.clone()), "ns", "http://ns/")
}

#[rstest]
fn default_namespace_from_declaration(tree: Tree) {
    let decl = tree.root.attributes()[0].clone();
    let n = NamespaceNode::from_attribute(Some(tree.root.clone()), &decl);
    assert_eq!(n.ns_prefix(), "");
    assert!(n.is_default());
    assert_eq!(n.uri(), "http://example.org/");
    assert_eq!(n.kind(), NodeKind::Namespace);
    assert_eq!(n.node_type(), NAMESPACE_NODE);
    assert_eq!(n.parent_node(), Some(tree.root.clone()));
}

#[rstest]
fn prefixed_namespace_from_declaration(tree: Tree) {
    let decl = tree.root.attributes()[1].clone();
    let n = NamespaceNode::from_attribute(Some(tree.root.clone()), &decl);
    assert_eq!(n.ns_prefix(), "foo");
    assert_eq!(n.uri(), "http://foo/");
}

#[rstest]
fn declaration_reported_by_local_name(tree: Tree) {
    let decl = SimpleNode::attribute_ns("foo", "http://www.w3.org/2000/xmlns/", "http://foo/");
    let n = NamespaceNode::from_attribute(Some(tree.root.clone()), &decl);
    assert_eq!(n.ns_prefix(), "foo");
    assert_eq!(n.uri(), "http://foo/");
}

#[rstest]
fn mutations_are_rejected(tree: Tree) {
    let n = ns(&tree.root);
    let before = n.clone();
    let child = tree.other.clone();

    assert_eq!(n.set_node_value("x"), Err(DomError::NoModificationAllowed));
    assert_eq!(n.set_prefix("p"), Err(DomError::NoModificationAllowed));
    assert_eq!(n.set_text_content("t"), Err(DomError::NoModificationAllowed));
    assert_eq!(n.append_child(&child), Err(DomError::NoModificationAllowed));
    assert_eq!(n.remove_child(&child), Err(DomError::NoModificationAllowed));
    assert_eq!(n.insert_before(&child, Some(&child)), Err(DomError::NoModificationAllowed));
    assert_eq!(n.insert_before(&child, None), Err(DomError::NoModificationAllowed));
    assert_eq!(n.replace_child(&child, &child), Err(DomError::NoModificationAllowed));

    assert_eq!(n, before);
    assert_eq!(n.ns_prefix(), "ns");
    assert_eq!(n.uri(), "http://ns/");
    assert_eq!(n.parent_node(), Some(tree.root.clone()));
}

#[rstest]
fn modification_error_message() {
    let err = DomError::NoModificationAllowed;
    assert_eq!(err.to_string(), "Namespace node may not be modified");
    assert_eq!(err.dom_code(), Some(7));
}

#[rstest]
fn late_addition_accessors_are_unsupported(tree: Tree) {
    let n = ns(&tree.root);
    let unsupported = |r: Result<(), DomError>| matches!(r, Err(DomError::Unsupported(_)));

    assert!(unsupported(n.base_uri().map(drop)));
    assert!(unsupported(n.compare_document_position(&tree.other).map(drop)));
    assert!(unsupported(n.lookup_prefix("http://ns/").map(drop)));
    assert!(unsupported(n.lookup_namespace_uri(Some("ns")).map(drop)));
    assert!(unsupported(n.lookup_namespace_uri(None).map(drop)));
    assert!(unsupported(n.is_default_namespace("http://ns/").map(drop)));
    assert!(unsupported(n.user_data("k").map(drop)));
    let data: Arc<dyn std::any::Any + Send + Sync> = Arc::new(1u8);
    assert!(unsupported(n.set_user_data("k", Some(data)).map(drop)));
    assert_eq!(n.base_uri().unwrap_err().dom_code(), None);
}

#[rstest]
fn feature_queries_answer_no(tree: Tree) {
    let n = ns(&tree.root);
    for (feature, version) in [("Core", "2.0"), ("XML", "1.0"), ("", ""), ("Events", "3.0")] {
        assert!(!n.is_supported(feature, version));
        assert!(n.feature(feature, version).is_none());
    }
}

#[rstest]
fn equal_nodes_hash_equally(tree: Tree) {
    let a = ns(&tree.root);
    let b = ns(&tree.root);
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());

    let set: HashSet<_> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[rstest]
#[case::parent(Some("other"), "ns", "http://ns/")]
#[case::no_parent(None, "ns", "http://ns/")]
#[case::prefix(Some("root"), "nx", "http://ns/")]
#[case::uri(Some("root"), "ns", "http://nx/")]
fn changing_a_component_breaks_equality(
    tree: Tree,
    #[case] parent: Option<&str>,
    #[case] prefix: &str,
    #[case] uri: &str,
) {
    let parent = parent.map(|p| if p == "root" { tree.root.clone() } else { tree.other.clone() });
    let changed = NamespaceNode::new(parent, prefix, uri);
    assert_ne!(changed, ns(&tree.root));
    assert_ne!(ns(&tree.root), changed);
}

#[rstest]
fn equality_is_an_equivalence(tree: Tree) {
    let a = ns(&tree.root);
    let b = a.clone_node(false);
    let c = b.clone_node(true);
    assert_eq!(a, a);
    assert_eq!(a == b, b == a);
    assert!(a == b && b == c && a == c);
}

#[rstest]
#[case(true)]
#[case(false)]
fn clone_is_equal_and_shares_the_parent(tree: Tree, #[case] deep: bool) {
    let n = ns(&tree.root);
    let m = n.clone_node(deep);
    assert_eq!(m, n);
    let (pm, pn) = (m.parent_node().unwrap(), n.parent_node().unwrap());
    assert!(pm.is_same_node(&pn));
}

#[rstest]
fn structure_is_degenerate(tree: Tree) {
    let n = ns(&tree.root);
    assert!(!n.has_child_nodes());
    assert_eq!(n.child_nodes().len(), 0);
    assert!(n.child_nodes().is_empty());
    assert!(n.attributes().is_none());
    assert!(!n.has_attributes());
    assert!(n.first_child().is_none());
    assert!(n.last_child().is_none());
    assert!(n.previous_sibling().is_none());
    assert!(n.next_sibling().is_none());
    n.normalize();
    assert_eq!(n, ns(&tree.root));
}

#[rstest]
#[case("", "http://example.org/")]
#[case("foo", "http://foo/")]
#[case("ns", "")]
fn name_and_value_accessors(tree: Tree, #[case] prefix: &str, #[case] uri: &str) {
    let n = NamespaceNode::new(Some(tree.root.clone()), prefix, uri);
    assert_eq!(n.node_name(), prefix);
    assert_eq!(n.local_name().as_deref(), Some(prefix));
    assert_eq!(n.node_value().as_deref(), Some(uri));
    assert_eq!(n.text_content().as_deref(), Some(uri));
    assert!(n.namespace_uri().is_none());
    assert!(n.prefix().is_none());
}

#[rstest]
fn owner_document_comes_from_parent(tree: Tree) {
    assert_eq!(ns(&tree.root).owner_document(), Some(tree.document.clone()));
    assert_eq!(ns(&tree.other).owner_document(), Some(tree.document.clone()));

    let orphan: NamespaceNode<SimpleNode> = NamespaceNode::new(None, "ns", "http://ns/");
    assert!(orphan.owner_document().is_none());
    assert!(orphan.parent_node().is_none());

    let detached = elem("loose").build();
    assert!(ns(&detached).owner_document().is_none());
}

#[rstest]
fn same_node_requires_the_same_parent_object(tree: Tree) {
    let a = ns(&tree.root);
    assert!(a.is_same_node(&a.clone_node(true)));
    assert!(!a.is_same_node(&ns(&tree.other)));
    assert!(!a.is_same_node(&NamespaceNode::new(Some(tree.root.clone()), "ns", "http://other/")));

    let orphan_a: NamespaceNode<SimpleNode> = NamespaceNode::new(None, "ns", "http://ns/");
    let orphan_b: NamespaceNode<SimpleNode> = NamespaceNode::new(None, "ns", "http://ns/");
    assert!(orphan_a.is_same_node(&orphan_b));
    assert!(!orphan_a.is_same_node(&a));
}

#[rstest]
fn equal_node_ignores_the_parent(tree: Tree) {
    let a = ns(&tree.root);
    let b = ns(&tree.other);
    assert!(a.is_equal_node(&b));
    assert_ne!(a, b);
}

#[rstest]
fn display_renders_the_declaration(tree: Tree) {
    let default = NamespaceNode::new(Some(tree.root.clone()), "", "http://example.org/");
    assert_eq!(default.to_string(), r#"xmlns="http://example.org/""#);
    assert_eq!(ns(&tree.root).to_string(), r#"xmlns:ns="http://ns/""#);
}

#[rstest]
fn namespace_node_is_not_listed_by_its_parent(tree: Tree) {
    let n = ns(&tree.root);
    let parent = n.parent_node().unwrap();
    assert_eq!(parent.attributes().len(), 3);
    assert!(parent.children().iter().all(|c| c.kind() != NodeKind::Namespace));
}

#[rstest]
fn shared_reads_across_threads(tree: Tree) {
    let n = ns(&tree.root);
    let document = tree.document.clone();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(n.node_name(), "ns");
                assert_eq!(n.owner_document(), Some(document.clone()));
                assert_eq!(n.hash_code(), n.clone_node(true).hash_code());
            });
        }
    });
}
