use std::sync::Arc;

use xylo_dom::{attr, doc, elem, text};
use xylo_model::{NamePool, SimpleAxis, XmlNodeModel};

fn main() {
    // <catalog xmlns:p="urn:products">
    //   <p:item id="first">Widget</p:item>
    //   <p:item id="second">Gadget</p:item>
    // </catalog>
    let document = doc()
        .child(
            elem("catalog")
                .attr(attr("xmlns:p", "urn:products"))
                .child(elem("p:item").attr(attr("id", "first")).child(text("Widget")))
                .child(elem("p:item").attr(attr("id", "second")).child(text("Gadget"))),
        )
        .build();

    let model = XmlNodeModel::new(NamePool::new(), Arc::new(document));

    let first = model.element_by_id("first");
    let second = model.element_by_id("second");

    let name = model.name(first).unwrap();
    println!("name:   {} (prefix {:?})", name.clark(), name.prefix());
    println!("value:  {:?}", model.string_value(first).unwrap());
    println!("order:  {:?}", model.compare_order(first, second).unwrap());

    let parent = model.step(SimpleAxis::Parent, first).unwrap();
    println!("scope at parent:");
    for binding in model.namespace_bindings(parent).unwrap() {
        println!("  {:?} -> {:?}", binding.prefix(), binding.uri());
    }
}
