#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use std::sync::Once;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Node};

static LOG_INIT: Once = Once::new();

pub fn init_logging() {
	//TODO: Fail on Warning or Error.
	LOG_INIT.call_once(tracing_wasm::set_as_global_default);
}

pub fn document() -> Document {
	window().unwrap().document().unwrap()
}

/// A fresh `<div>` attached to the page body, holding `markup`.
pub fn live(markup: &str) -> Element {
	init_logging();
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(markup);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

/// A detached `<div>` holding `markup`.
pub fn candidate(markup: &str) -> Element {
	let container = document().create_element("div").unwrap();
	container.set_inner_html(markup);
	container
}

pub fn children(parent: &Node) -> Vec<Node> {
	let child_nodes = parent.child_nodes();
	(0..child_nodes.length()).map(|i| child_nodes.get(i).unwrap()).collect()
}

pub fn child(parent: &Node, i: usize) -> Node {
	children(parent).remove(i)
}

pub fn element(node: &Node) -> &Element {
	node.dyn_ref::<Element>().expect("Expected an element.")
}

/// The `key` attribute of each child element, in order.
pub fn keys(parent: &Node) -> Vec<String> {
	children(parent).iter().filter_map(|node| node.dyn_ref::<Element>()).map(|element| element.get_attribute("key").unwrap_or_default()).collect()
}

/// Every node below `parent`, depth first.
pub fn descendants(parent: &Node) -> Vec<Node> {
	let mut nodes = Vec::new();
	for child in children(parent) {
		nodes.push(child.clone());
		nodes.extend(descendants(&child));
	}
	nodes
}
