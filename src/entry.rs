use crate::{error::Result, Error, Reconciler};
use tracing::{instrument, trace};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};

impl Reconciler {
	/// Parses `markup` into a scratch root and reconciles `container`'s children against it.
	///
	/// All effects are observed on `container`. The parsed candidate tree is discarded afterwards.
	///
	/// # Errors
	///
	/// Iff `container` has no owner document, the DOM throws during reconciliation,
	/// or the markup nests deeper than an explicitly set [`Config::depth_limit`](`crate::Config::depth_limit`).
	#[instrument(skip(self, markup), fields(markup.len = markup.len()), err)]
	pub fn patch_dom(&self, container: &web_sys::Element, markup: &str) -> Result<()> {
		let document = container.owner_document().ok_or(Error::InvalidArgument {
			argument: "container",
			expected: "an element owned by a document",
		})?;

		let scratch = self.scratch_pool().take(&document)?;
		let candidate = scratch.parse(markup);
		trace!(candidates = candidate.child_nodes().length(), "Parsed markup");
		self.diff(container, &candidate)
	}
}

thread_local! {
	static DEFAULT: Reconciler = Reconciler::default();
}

/// Runs `f` with this thread's default [`Reconciler`], the one behind the JavaScript exports.
///
/// Calls may nest.
pub fn with_default<R>(f: impl FnOnce(&Reconciler) -> R) -> R {
	DEFAULT.with(f)
}

/// `patchDOM(container, markup)` for JavaScript callers, using the default [`Reconciler`].
///
/// # Errors
///
/// Throws before touching anything if `container` isn't an `Element` or `markup` isn't a string,
/// and rethrows (with context) whatever the DOM throws during reconciliation.
#[wasm_bindgen(js_name = patchDOM)]
pub fn patch_dom_js(container: &JsValue, markup: &JsValue) -> core::result::Result<(), JsValue> {
	let container = container.dyn_ref::<web_sys::Element>().ok_or(Error::InvalidArgument {
		argument: "container",
		expected: "an Element",
	})?;
	let markup = markup.as_string().ok_or(Error::InvalidArgument {
		argument: "markup",
		expected: "a string",
	})?;
	with_default(|reconciler| reconciler.patch_dom(container, &markup)).map_err(Into::into)
}

/// `diff(liveParent, candidateParent)` for JavaScript callers, using the default [`Reconciler`].
///
/// # Errors
///
/// Throws before touching anything if either argument isn't a `Node`,
/// and rethrows (with context) whatever the DOM throws during reconciliation.
#[wasm_bindgen(js_name = diff)]
pub fn diff_js(live_parent: &JsValue, candidate_parent: &JsValue) -> core::result::Result<(), JsValue> {
	let live_parent = live_parent.dyn_ref::<web_sys::Node>().ok_or(Error::InvalidArgument {
		argument: "liveParent",
		expected: "a Node",
	})?;
	let candidate_parent = candidate_parent.dyn_ref::<web_sys::Node>().ok_or(Error::InvalidArgument {
		argument: "candidateParent",
		expected: "a Node",
	})?;
	with_default(|reconciler| reconciler.diff(live_parent, candidate_parent)).map_err(Into::into)
}

/// Flags `node` as managed by another component instance, for the default [`Reconciler`].
#[wasm_bindgen(js_name = markOwned)]
pub fn mark_owned_js(node: &web_sys::Node) {
	with_default(|reconciler| reconciler.markers().mark_owned(node))
}

/// Reverses [`mark_owned_js`]. Returns whether `node` was flagged.
#[wasm_bindgen(js_name = unmarkOwned)]
pub fn unmark_owned_js(node: &web_sys::Node) -> bool {
	with_default(|reconciler| reconciler.markers().unmark_owned(node))
}
