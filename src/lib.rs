//! Reconciles a live DOM subtree against freshly parsed markup.
//!
//! Live nodes are patched in place wherever the candidate tree allows it, so focus, scroll position,
//! user-entered form state and externally managed subtrees survive a re-render.
//!
//! Entry points are [`Reconciler::patch_dom`] (markup in, mutations out) and the lower-level [`Reconciler::diff`].
//! JavaScript callers get `patchDOM`, `diff`, `markOwned` and `unmarkOwned` through `wasm-bindgen`.

#![doc(html_root_url = "https://docs.rs/markup-dom/0.1.0")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod attributes;
mod classify;
mod config;
mod diff;
mod entry;
mod error;
mod key_map;
mod markers;
mod patch;
mod scratch;

pub use attributes::sync_attributes;
pub use classify::{identity_key, is_same_node, NodeKind};
pub use config::Config;
pub use diff::Reconciler;
pub use entry::{diff_js, mark_owned_js, patch_dom_js, unmark_owned_js, with_default};
pub use error::{Error, Operation, Result};
pub use key_map::{build_key_map, KeyMap};
pub use markers::Markers;
pub use scratch::{ScratchPool, ScratchRoot};
