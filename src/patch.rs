use crate::{
	attributes::sync_attributes,
	classify::NodeKind,
	diff::clone_candidate,
	error::{Operation, Result},
	Error, Reconciler,
};
use tracing::{instrument, trace, warn};

impl Reconciler {
	/// Patches `live` one node deep to look like `candidate`, then recurses into element children.
	///
	/// Owned subtrees are left alone entirely.
	/// Should the kinds not line up (which [`is_same_node`](`crate::is_same_node`) rules out for [`diff`](`Reconciler::diff`)),
	/// `live` is replaced by a clone of `candidate`.
	///
	/// # Errors
	///
	/// Iff the DOM throws, or nesting exceeds an explicitly set [`Config::depth_limit`](`crate::Config::depth_limit`).
	#[instrument(skip(self), err)]
	pub fn patch_node(&self, live: &web_sys::Node, candidate: &web_sys::Node) -> Result<()> {
		self.patch_node_at(live, candidate, self.config().depth_limit)
	}

	pub(crate) fn patch_node_at(&self, live: &web_sys::Node, candidate: &web_sys::Node, depth_limit: Option<usize>) -> Result<()> {
		if self.markers().is_owned(live) {
			trace!("Owned subtree. Not touching it.");
			return Ok(());
		}

		match (NodeKind::of(live), NodeKind::of(candidate)) {
			(Some(NodeKind::Text(live)), Some(NodeKind::Text(candidate))) => {
				update_character_data(live, candidate);
				Ok(())
			}
			(Some(NodeKind::Comment(live)), Some(NodeKind::Comment(candidate))) => {
				update_character_data(live, candidate);
				Ok(())
			}
			(Some(NodeKind::Element(live)), Some(NodeKind::Element(candidate))) => {
				sync_attributes(self.config(), live, candidate)?;
				self.diff_children(live, candidate, depth_limit.map(|depth_limit| depth_limit.saturating_sub(1)))
			}
			_ => {
				warn!(?live, ?candidate, "Patching mismatched node kinds. Replacing.");
				let parent = match live.parent_node() {
					Some(parent) => parent,
					None => {
						warn!("Mismatched live node has no parent. Leaving it be.");
						return Ok(());
					}
				};
				let clone = clone_candidate(candidate)?;
				parent.replace_child(&clone, live).map_err(Error::host(Operation::ReplaceNode))?;
				Ok(())
			}
		}
	}
}

fn update_character_data(live: &web_sys::CharacterData, candidate: &web_sys::CharacterData) {
	let data = candidate.data();
	if live.data() == data {
		return;
	}
	if cfg!(feature = "dangerous-logging") {
		trace!(from = %live.data(), to = %data, "Updating character data");
	} else {
		trace!(len = data.len(), "Updating character data");
	}
	live.set_data(&data)
}
