use std::sync::Arc;

use xylo_dom::{Document, DomTree, NodeType, attr, cdata, comment, doc, doctype, elem, pi, text};
use xylo_model::{ModelError, NamePool, NodeKind, SimpleAxis, XmlNodeModel};

fn model_of(document: Document) -> XmlNodeModel<Document> {
    XmlNodeModel::new(NamePool::new(), Arc::new(document))
}

#[test]
fn each_node_classifies_as_its_kind() {
    let model = model_of(
        doc()
            .child(
                elem("root")
                    .attr(attr("a", "1"))
                    .child(text("t"))
                    .child(comment("c"))
                    .child(pi("target", "data")),
            )
            .build(),
    );
    let document = model.index(Some(model.tree().document()));
    let root = model.index(Some(model.tree().document_element().unwrap()));
    let a = model.attributes(root).unwrap()[0];
    let t = model.step(SimpleAxis::FirstChild, root).unwrap();
    let c = model.step(SimpleAxis::NextSibling, t).unwrap();
    let p = model.step(SimpleAxis::NextSibling, c).unwrap();

    assert_eq!(model.kind(document).unwrap(), NodeKind::Document);
    assert_eq!(model.kind(root).unwrap(), NodeKind::Element);
    assert_eq!(model.kind(a).unwrap(), NodeKind::Attribute);
    assert_eq!(model.kind(t).unwrap(), NodeKind::Text);
    assert_eq!(model.kind(c).unwrap(), NodeKind::Comment);
    assert_eq!(model.kind(p).unwrap(), NodeKind::ProcessingInstruction);
}

#[test]
fn cdata_classifies_as_text() {
    let model = model_of(doc().child(elem("r").child(cdata("raw"))).build());
    let root = model.index(Some(model.tree().document_element().unwrap()));
    let section = model.step(SimpleAxis::FirstChild, root).unwrap();
    assert_eq!(model.kind(section).unwrap(), NodeKind::Text);
}

#[test]
fn doctype_is_not_defaulted_to_a_valid_kind() {
    let model = model_of(doc().child(doctype("html")).child(elem("html")).build());
    let document = model.index(Some(model.tree().document()));
    let dt = model.step(SimpleAxis::FirstChild, document).unwrap();
    assert_eq!(model.kind(dt), Err(ModelError::UnsupportedKind(NodeType::DocumentType)));
}
