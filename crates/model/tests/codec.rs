use std::collections::HashSet;
use std::sync::Arc;

use xylo_dom::{Document, DomTree, attr, comment, doc, elem, pi, text};
use xylo_model::{ModelError, NamePool, NodeIndex, XmlNodeModel};

fn sample() -> Document {
    doc()
        .child(comment("header"))
        .child(
            elem("root")
                .attr(attr("a", "1"))
                .child(elem("child").child(text("payload")))
                .child(pi("target", "data")),
        )
        .build()
}

fn model_of(document: Document) -> XmlNodeModel<Document> {
    XmlNodeModel::new(NamePool::new(), Arc::new(document))
}

#[test]
fn every_node_round_trips_and_indices_are_distinct() {
    let model = model_of(sample());
    let nodes: Vec<_> = model.tree().all_nodes().collect();
    let mut seen = HashSet::new();
    for node in nodes {
        let index = model.index(Some(node));
        assert!(!index.is_empty());
        assert_eq!(model.node(index).unwrap(), node);
        assert!(seen.insert(index), "two nodes shared an index");
    }
}

#[test]
fn encoding_no_node_yields_the_empty_index() {
    let model = model_of(sample());
    let index = model.index(None);
    assert!(index.is_empty());
    assert_eq!(index, NodeIndex::empty());
}

#[test]
fn decoding_the_empty_index_fails() {
    let model = model_of(sample());
    assert_eq!(model.node(NodeIndex::empty()), Err(ModelError::InvalidIndex));
}

#[test]
fn decoding_an_index_of_another_tree_fails() {
    let model = model_of(sample());
    let other = model_of(sample());
    let foreign = other.index(Some(other.tree().document()));
    assert_eq!(model.node(foreign), Err(ModelError::InvalidIndex));
    assert_eq!(model.kind(foreign), Err(ModelError::InvalidIndex));
    assert_eq!(model.string_value(foreign), Err(ModelError::InvalidIndex));
}
