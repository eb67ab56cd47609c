use crate::{classify::identity_key, Config};
use core::ops::Range;
use hashbrown::HashMap;
use tracing::trace;
use wasm_bindgen::JsCast;

/// Identity key to live node, for one run of siblings.
pub type KeyMap = HashMap<String, web_sys::Node>;

/// Indexes every keyed element in `children[range]`.
///
/// Text, comments and unkeyed elements are skipped.
/// When a key occurs more than once, the later sibling wins and earlier ones are only reachable by position,
/// which for keyed elements means not at all: they end up removed once the run is reconciled.
///
/// A `range` reaching past `children` is clamped.
#[must_use]
pub fn build_key_map(config: &Config, children: &[web_sys::Node], range: Range<usize>) -> KeyMap {
	build_key_index(config, children, range).into_iter().map(|(key, i)| (key, children[i].clone())).collect()
}

/// Like [`build_key_map`], but maps to positions in `children`.
pub(crate) fn build_key_index(config: &Config, children: &[web_sys::Node], range: Range<usize>) -> HashMap<String, usize> {
	let mut index = HashMap::new();
	for (i, child) in children.iter().enumerate().take(range.end).skip(range.start) {
		let element = match child.dyn_ref::<web_sys::Element>() {
			Some(element) => element,
			None => continue,
		};
		if let Some(key) = identity_key(config, element) {
			if let Some(shadowed) = index.insert(key, i) {
				trace!(shadowed, "Duplicate key, later sibling wins.");
			}
		}
	}
	index
}
