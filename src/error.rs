use core::fmt::{self, Display, Formatter};
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can stop a reconciliation.
///
/// Missing matches, absent nodes and duplicate keys are resolved by policy and never show up here.
/// A [`Host`](`Error::Host`) error may leave the live tree partially patched; there is no rollback.
#[derive(Debug, Error)]
pub enum Error {
	/// An entry point argument had the wrong type, or a container had no owner document. Raised before any mutation.
	#[error("invalid argument `{argument}`: expected {expected}")]
	InvalidArgument { argument: &'static str, expected: &'static str },

	/// The DOM threw while the reconciler was mutating or reading it.
	#[error("failed to {operation}: {cause:?}")]
	Host { operation: Operation, cause: JsValue },

	/// Nesting exceeded a [`Config::depth_limit`](`crate::Config::depth_limit`) set by the caller.
	#[error("depth limit of {limit} reached")]
	DepthLimit { limit: usize },
}

impl Error {
	pub(crate) fn host(operation: Operation) -> impl FnOnce(JsValue) -> Self {
		move |cause| Self::Host { operation, cause }
	}
}

impl From<Error> for JsValue {
	fn from(error: Error) -> Self {
		js_sys::Error::new(&error.to_string()).into()
	}
}

/// Which host-tree operation an [`Error::Host`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
	SetAttribute(String),
	RemoveAttribute(String),
	InsertNode,
	RemoveNode,
	ReplaceNode,
	CloneNode,
	CreateScratchRoot,
}

impl Display for Operation {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Operation::SetAttribute(name) => write!(f, "set attribute {:?}", name),
			Operation::RemoveAttribute(name) => write!(f, "remove attribute {:?}", name),
			Operation::InsertNode => f.write_str("insert node"),
			Operation::RemoveNode => f.write_str("remove node"),
			Operation::ReplaceNode => f.write_str("replace node"),
			Operation::CloneNode => f.write_str("clone candidate node"),
			Operation::CreateScratchRoot => f.write_str("create scratch root"),
		}
	}
}
