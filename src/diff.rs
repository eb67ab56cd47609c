use crate::{
	classify::{identity_key, is_same_node},
	error::{Operation, Result},
	key_map::build_key_index,
	scratch::ScratchPool,
	Config, Error, Markers,
};
use tracing::{error, instrument, trace, trace_span};
use wasm_bindgen::JsCast;

/// Reconciles live DOM children against candidate children, reusing live nodes wherever they are compatible.
///
/// A `Reconciler` holds no state that changes during a reconciliation apart from its idle scratch roots,
/// so it's fine for host callbacks triggered by a patch (property setters, mutation-driven scripts)
/// to call back into the same instance, on overlapping or disjoint subtrees.
///
/// # Guarantees
///
/// - A live child that is matched to a candidate child stays the same node instance.
/// - Afterwards, the live children mirror the candidate children in order, except that protected nodes
///   (see [`Markers`]) the candidate doesn't mention are kept where they were.
/// - Declared attributes mirror the candidate, except for event-binding and marker attributes.
#[derive(Debug, Default)]
pub struct Reconciler {
	config: Config,
	markers: Markers,
	scratch: ScratchPool,
}

impl Reconciler {
	#[must_use]
	pub fn new(config: Config) -> Self {
		Self {
			config,
			markers: Markers::new(),
			scratch: ScratchPool::new(),
		}
	}

	#[must_use]
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// The owned-subtree side table consulted by this instance.
	#[must_use]
	pub fn markers(&self) -> &Markers {
		&self.markers
	}

	/// Scratch roots used by [`patch_dom`](`Reconciler::patch_dom`).
	#[must_use]
	pub fn scratch_pool(&self) -> &ScratchPool {
		&self.scratch
	}

	/// Mutates `live_parent`'s children to match `candidate_parent`'s.
	///
	/// `candidate_parent` is only read. Nodes that have to be created are deep clones of candidate nodes.
	///
	/// # Errors
	///
	/// Iff the DOM throws during a mutation, or nesting exceeds an explicitly set [`Config::depth_limit`].
	/// The live tree is left partially patched in that case.
	#[instrument(skip(self), err)]
	pub fn diff(&self, live_parent: &web_sys::Node, candidate_parent: &web_sys::Node) -> Result<()> {
		self.diff_children(live_parent, candidate_parent, self.config.depth_limit)
	}

	#[allow(clippy::too_many_lines)]
	pub(crate) fn diff_children(&self, live_parent: &web_sys::Node, candidate_parent: &web_sys::Node, depth_limit: Option<usize>) -> Result<()> {
		if !live_parent.has_child_nodes() && !candidate_parent.has_child_nodes() {
			return Ok(());
		}
		if depth_limit == Some(0) {
			error!("Depth limit reached");
			return Err(Error::DepthLimit {
				limit: self.config.depth_limit.unwrap_or_default(),
			});
		}

		// Snapshot in original order. Nodes placed by the walk go in front of the cursor in the DOM,
		// so the snapshot itself never shifts.
		let live = child_list(live_parent);
		let candidates = child_list(candidate_parent);
		let mut taken = vec![false; live.len()];
		// Reused nodes may come from anywhere in the run, not just ahead of the cursor.
		let mut keyed = build_key_index(&self.config, &live, 0..live.len());
		trace!(live = live.len(), candidates = candidates.len(), keyed = keyed.len(), "Diffing children");

		let mut i = 0;
		for (j, candidate) in candidates.iter().enumerate() {
			let span = trace_span!("Reconciling child", i, j);
			let _enter = span.enter();

			let key = candidate.dyn_ref::<web_sys::Element>().and_then(|element| identity_key(&self.config, element));

			'live_at: loop {
				while taken.get(i) == Some(&true) {
					i += 1;
				}
				let live_at = live.get(i);

				if let Some(live_at) = live_at {
					// Earlier duplicates of a key are unreachable, even positionally.
					let is_key_winner = key.as_ref().map_or(true, |key| keyed.get(key) == Some(&i));
					if is_key_winner && is_same_node(&self.config, Some(live_at), Some(candidate)) {
						trace!("Patching in place");
						if let Some(key) = &key {
							keyed.remove(key);
						}
						taken[i] = true;
						self.patch_node_at(live_at, candidate, depth_limit)?;
						break 'live_at;
					}
				}

				// Also consulted once the live children are exhausted, as stepped-over protected nodes may still be claimed by key.
				if let Some(key) = &key {
					let from = keyed.get(key).copied().filter(|&from| is_same_node(&self.config, Some(&live[from]), Some(candidate)));
					if let Some(from) = from {
						trace!(from, "Moving keyed node");
						keyed.remove(key);
						taken[from] = true;
						let reusable = &live[from];
						live_parent.insert_before(reusable, live_at).map_err(Error::host(Operation::InsertNode))?;
						self.patch_node_at(reusable, candidate, depth_limit)?;
						break 'live_at;
					}
				}

				match live_at {
					Some(live_at) if self.markers.is_protected(&self.config, live_at) => {
						trace!("Stepping over protected node");
						i += 1;
						continue 'live_at;
					}
					Some(live_at) => {
						// `live_at` is re-evaluated against the next candidate.
						trace!("Inserting clone");
						let clone = clone_candidate(candidate)?;
						live_parent.insert_before(&clone, Some(live_at)).map_err(Error::host(Operation::InsertNode))?;
					}
					None => {
						trace!("Live children exhausted. Appending.");
						let clone = clone_candidate(candidate)?;
						live_parent.append_child(&clone).map_err(Error::host(Operation::InsertNode))?;
					}
				}
				break 'live_at;
			}
		}

		for (extra, _) in live.iter().zip(taken).skip(i).filter(|(_, taken)| !taken) {
			if self.markers.is_protected(&self.config, extra) {
				trace!(?extra, "Keeping protected node");
				continue;
			}
			trace!("Removing extra node");
			live_parent.remove_child(extra).map_err(Error::host(Operation::RemoveNode))?;
		}
		Ok(())
	}
}

fn child_list(parent: &web_sys::Node) -> Vec<web_sys::Node> {
	let child_nodes = parent.child_nodes();
	(0..child_nodes.length()).filter_map(|i| child_nodes.get(i)).collect()
}

pub(crate) fn clone_candidate(candidate: &web_sys::Node) -> Result<web_sys::Node> {
	candidate.clone_node_with_deep(true).map_err(Error::host(Operation::CloneNode))
}
