use crate::Config;
use tracing::warn;
use wasm_bindgen::JsCast;

/// The node kinds the reconciler knows how to patch in place.
///
/// Anything else the DOM may contain (doctype, processing instruction, CDATA) classifies as [`None`](`Option::None`)
/// and is never compatible with anything.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
	Element(&'a web_sys::Element),
	Text(&'a web_sys::Text),
	Comment(&'a web_sys::Comment),
}

impl<'a> NodeKind<'a> {
	#[must_use]
	pub fn of(node: &'a web_sys::Node) -> Option<Self> {
		match node.node_type() {
			web_sys::Node::ELEMENT_NODE => Some(Self::Element(node.unchecked_ref())),
			web_sys::Node::TEXT_NODE => Some(Self::Text(node.unchecked_ref())),
			web_sys::Node::COMMENT_NODE => Some(Self::Comment(node.unchecked_ref())),
			_ => None,
		}
	}
}

/// Reads the identity key of `element`, treating absence and the empty string alike.
#[must_use]
pub fn identity_key(config: &Config, element: &web_sys::Element) -> Option<String> {
	normalize_key(element.get_attribute(&config.key_attribute))
}

/// Keys are opaque: no trimming, no case folding. Only the empty string is dropped.
pub(crate) fn normalize_key(value: Option<String>) -> Option<String> {
	value.filter(|key| !key.is_empty())
}

/// Whether `live` may be patched in place to become `candidate`.
#[must_use]
pub fn is_same_node(config: &Config, live: Option<&web_sys::Node>, candidate: Option<&web_sys::Node>) -> bool {
	let (live, candidate) = match (live, candidate) {
		(Some(live), Some(candidate)) => (live, candidate),
		_ => return false,
	};

	match (NodeKind::of(live), NodeKind::of(candidate)) {
		(Some(NodeKind::Text(_)), Some(NodeKind::Text(_))) | (Some(NodeKind::Comment(_)), Some(NodeKind::Comment(_))) => true,
		(Some(NodeKind::Element(live)), Some(NodeKind::Element(candidate))) => is_same_element(config, live, candidate),
		_ => false,
	}
}

fn is_same_element(config: &Config, live: &web_sys::Element, candidate: &web_sys::Element) -> bool {
	let (live_tag, candidate_tag) = (live.tag_name(), candidate.tag_name());
	if live_tag != candidate_tag {
		if live_tag.eq_ignore_ascii_case(&candidate_tag) {
			warn!(
				"Element tag names differ only in casing: {:?} -> {:?}\n\
				The live element will be recreated. Foreign (SVG, MathML) tags are case-sensitive.",
				live_tag, candidate_tag
			)
		}
		return false;
	}

	identity_key(config, live) == identity_key(config, candidate)
}

#[cfg(test)]
mod tests {
	use super::normalize_key;

	#[test]
	fn empty_key_is_unkeyed() {
		assert_eq!(normalize_key(None), None);
		assert_eq!(normalize_key(Some(String::new())), None);
	}

	#[test]
	fn keys_are_opaque() {
		assert_eq!(normalize_key(Some(" A ".to_owned())).as_deref(), Some(" A "));
		assert_ne!(normalize_key(Some("a".to_owned())), normalize_key(Some("A".to_owned())));
	}
}
