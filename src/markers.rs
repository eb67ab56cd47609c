use crate::Config;
use js_sys::WeakSet;
use wasm_bindgen::JsCast;

/// Side table of nodes that another component instance manages exclusively.
///
/// Entries are held weakly, so nodes dropped from the page by their owner don't leak through here.
///
/// The reconciler never patches, replaces or removes an owned node or anything below it,
/// though a keyed owned node may be moved to follow its key.
#[derive(Debug, Clone)]
pub struct Markers {
	owned: WeakSet,
}

impl Default for Markers {
	fn default() -> Self {
		Self::new()
	}
}

impl Markers {
	#[must_use]
	pub fn new() -> Self {
		Self { owned: WeakSet::new() }
	}

	pub fn mark_owned(&self, node: &web_sys::Node) {
		self.owned.add(node.unchecked_ref());
	}

	/// Returns whether the node was marked.
	pub fn unmark_owned(&self, node: &web_sys::Node) -> bool {
		self.owned.delete(node.unchecked_ref())
	}

	#[must_use]
	pub fn is_owned(&self, node: &web_sys::Node) -> bool {
		self.owned.has(node.unchecked_ref())
	}

	/// Whether `node` is an element carrying the preserved-injection attribute.
	#[must_use]
	pub fn is_preserved(&self, config: &Config, node: &web_sys::Node) -> bool {
		node.dyn_ref::<web_sys::Element>().map_or(false, |element| element.has_attribute(&config.preserve_attribute))
	}

	/// Nodes that survive even when the candidate tree doesn't mention them.
	#[must_use]
	pub fn is_protected(&self, config: &Config, node: &web_sys::Node) -> bool {
		self.is_owned(node) || self.is_preserved(config, node)
	}
}
