use std::sync::Arc;

use xylo_dom::{Document, DomTree, attr, doc, elem, text};
use xylo_model::{ModelError, NamePool, NodeIndex, SimpleAxis, XmlNodeModel};

fn model_of(document: Document) -> XmlNodeModel<Document> {
    XmlNodeModel::new(NamePool::new(), Arc::new(document))
}

#[test]
fn parent_of_the_document_node_is_empty() {
    let model = model_of(doc().child(elem("r")).build());
    let document = model.index(Some(model.tree().document()));
    assert!(model.step(SimpleAxis::Parent, document).unwrap().is_empty());
}

#[test]
fn first_child_of_an_empty_element_is_empty() {
    let model = model_of(doc().child(elem("r")).build());
    let root = model.index(Some(model.tree().document_element().unwrap()));
    assert!(model.step(SimpleAxis::FirstChild, root).unwrap().is_empty());
}

#[test]
fn sibling_steps_walk_children_in_order() {
    let model =
        model_of(doc().child(elem("r").child(elem("a")).child(elem("b")).child(elem("c"))).build());
    let root = model.index(Some(model.tree().document_element().unwrap()));

    let a = model.step(SimpleAxis::FirstChild, root).unwrap();
    let b = model.step(SimpleAxis::NextSibling, a).unwrap();
    let c = model.step(SimpleAxis::NextSibling, b).unwrap();
    assert_eq!(model.name(a).unwrap().local_name(), "a");
    assert_eq!(model.name(b).unwrap().local_name(), "b");
    assert_eq!(model.name(c).unwrap().local_name(), "c");

    assert!(model.step(SimpleAxis::NextSibling, c).unwrap().is_empty());
    assert_eq!(model.step(SimpleAxis::PreviousSibling, c).unwrap(), b);
    assert!(model.step(SimpleAxis::PreviousSibling, a).unwrap().is_empty());
    assert_eq!(model.step(SimpleAxis::Parent, b).unwrap(), root);
}

#[test]
fn attributes_preserve_declaration_order() {
    let model = model_of(doc().child(elem("e").attr(attr("b", "1")).attr(attr("a", "2"))).build());
    let element = model.index(Some(model.tree().document_element().unwrap()));
    let attrs = model.attributes(element).unwrap();
    let names: Vec<String> =
        attrs.iter().map(|&a| model.name(a).unwrap().local_name().to_owned()).collect();
    assert_eq!(names, ["b", "a"]);
}

#[test]
fn attributes_of_a_non_element_are_empty() {
    let model = model_of(doc().child(elem("r").child(text("t"))).build());
    let root = model.index(Some(model.tree().document_element().unwrap()));
    let t = model.step(SimpleAxis::FirstChild, root).unwrap();
    assert!(model.attributes(t).unwrap().is_empty());
}

#[test]
fn root_ascends_to_the_document_node() {
    let model = model_of(
        doc().child(elem("r").attr(attr("a", "1")).child(elem("c").child(text("x")))).build(),
    );
    let document = model.index(Some(model.tree().document()));
    let root = model.index(Some(model.tree().document_element().unwrap()));
    let c = model.step(SimpleAxis::FirstChild, root).unwrap();
    let x = model.step(SimpleAxis::FirstChild, c).unwrap();
    let a = model.attributes(root).unwrap()[0];

    for index in [document, root, c, x, a] {
        assert_eq!(model.root(index).unwrap(), document);
    }
}

#[test]
fn child_index_reports_position_among_children() {
    let model = model_of(
        doc().child(elem("r").attr(attr("a", "1")).child(elem("x")).child(elem("y"))).build(),
    );
    let root = model.index(Some(model.tree().document_element().unwrap()));
    let x = model.step(SimpleAxis::FirstChild, root).unwrap();
    let y = model.step(SimpleAxis::NextSibling, x).unwrap();
    let a = model.attributes(root).unwrap()[0];
    let document = model.index(Some(model.tree().document()));

    assert_eq!(model.child_index(x).unwrap(), Some(0));
    assert_eq!(model.child_index(y).unwrap(), Some(1));
    assert_eq!(model.child_index(root).unwrap(), Some(0));
    assert_eq!(model.child_index(document).unwrap(), None);
    // Attribute nodes are not children of their element.
    assert_eq!(model.child_index(a).unwrap(), None);
}

#[test]
fn ancestor_path_runs_root_first() {
    let model = model_of(doc().child(elem("r").child(elem("c").child(text("x")))).build());
    let document = model.index(Some(model.tree().document()));
    let root = model.index(Some(model.tree().document_element().unwrap()));
    let c = model.step(SimpleAxis::FirstChild, root).unwrap();
    let x = model.step(SimpleAxis::FirstChild, c).unwrap();

    assert_eq!(model.ancestor_path(x).unwrap(), vec![document, root, c, x]);
    assert_eq!(model.ancestor_path(document).unwrap(), vec![document]);
}

#[test]
fn stepping_from_an_invalid_index_fails() {
    let model = model_of(doc().child(elem("r")).build());
    assert_eq!(
        model.step(SimpleAxis::Parent, NodeIndex::empty()),
        Err(ModelError::InvalidIndex)
    );
}
