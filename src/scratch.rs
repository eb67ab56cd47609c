use crate::{
	error::{Operation, Result},
	Error,
};
use core::cell::RefCell;
use tracing::trace;
use wasm_bindgen::JsCast;

/// Idle `<template>` roots that candidate markup is parsed into.
///
/// The pool is only borrowed for the instant a root is taken or returned,
/// so nested reconciliations simply take (or create) another root.
#[derive(Debug, Default)]
pub struct ScratchPool(RefCell<Vec<web_sys::HtmlTemplateElement>>);

impl ScratchPool {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Takes an idle root, or creates one in `document` if there is none.
	///
	/// # Errors
	///
	/// Iff `document` can't create a `<template>` element.
	pub fn take(&self, document: &web_sys::Document) -> Result<ScratchRoot<'_>> {
		let idle = self.0.borrow_mut().pop();
		let template = match idle {
			Some(template) => template,
			None => {
				trace!("Creating scratch root.");
				document
					.create_element("template")
					.map_err(Error::host(Operation::CreateScratchRoot))?
					.dyn_into::<web_sys::HtmlTemplateElement>()
					.map_err(|element| Error::host(Operation::CreateScratchRoot)(element.into()))?
			}
		};
		Ok(ScratchRoot { pool: self, template })
	}

	/// How many roots are currently waiting for reuse.
	#[must_use]
	pub fn idle(&self) -> usize {
		self.0.borrow().len()
	}
}

/// A scratch root on loan from a [`ScratchPool`]. Cleared again and returned on drop.
#[derive(Debug)]
pub struct ScratchRoot<'a> {
	pool: &'a ScratchPool,
	template: web_sys::HtmlTemplateElement,
}

impl ScratchRoot<'_> {
	/// Parses `markup` as the root's only content and returns it as detached candidate tree.
	///
	/// The root is cleared before each parse, so no nodes can leak between uses.
	/// Note that clearing only after each use would NOT be enough,
	/// as a root could be re-referenced after an abort via re-entry from JS.
	#[must_use]
	pub fn parse(&self, markup: &str) -> web_sys::DocumentFragment {
		self.clear();
		self.template.set_inner_html(markup);
		self.template.content()
	}

	fn clear(&self) {
		self.template.set_inner_html("")
	}
}

impl Drop for ScratchRoot<'_> {
	fn drop(&mut self) {
		self.clear();
		self.pool.0.borrow_mut().push(self.template.clone());
	}
}
