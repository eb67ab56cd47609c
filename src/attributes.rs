use crate::{
	error::{Operation, Result},
	Config, Error,
};
use tracing::{instrument, trace};
use wasm_bindgen::JsCast;

/// A declared attribute, detached from its [`web_sys::Attr`] so that the live map can change underneath.
#[derive(Debug, Clone)]
struct Declared {
	namespace: Option<String>,
	local_name: String,
	name: String,
	value: String,
}

fn declared_attributes(element: &web_sys::Element) -> Vec<Declared> {
	let attributes = element.attributes();
	(0..attributes.length())
		.filter_map(|i| attributes.item(i))
		.map(|attribute| Declared {
			namespace: attribute.namespace_uri(),
			local_name: attribute.local_name(),
			name: attribute.name(),
			value: attribute.value(),
		})
		.collect()
}

/// Makes `live`'s declared attributes equal `candidate`'s, then repairs form-control properties
/// that may have drifted away from them.
///
/// Event-binding attributes and marker attributes are neither written nor removed.
///
/// # Errors
///
/// Iff the DOM refuses an attribute write or removal.
#[instrument(skip(config), err)]
pub fn sync_attributes(config: &Config, live: &web_sys::Element, candidate: &web_sys::Element) -> Result<()> {
	let wanted = declared_attributes(candidate);
	let present = declared_attributes(live);

	for attribute in &wanted {
		if config.is_untouchable(&attribute.name) {
			continue;
		}
		let namespace = attribute.namespace.as_deref();
		if live.get_attribute_ns(namespace, &attribute.local_name).as_deref() == Some(attribute.value.as_str()) {
			continue;
		}

		if cfg!(feature = "dangerous-logging") {
			trace!(name = %attribute.name, value = %attribute.value, "Setting attribute");
		} else {
			trace!(name = %attribute.name, "Setting attribute");
		}
		match namespace {
			None => live.set_attribute(&attribute.name, &attribute.value),
			Some(namespace) => live.set_attribute_ns(Some(namespace), &attribute.name, &attribute.value),
		}
		.map_err(Error::host(Operation::SetAttribute(attribute.name.clone())))?;
	}

	for attribute in &present {
		if config.is_untouchable(&attribute.name) {
			continue;
		}
		let namespace = attribute.namespace.as_deref();
		if candidate.has_attribute_ns(namespace, &attribute.local_name) {
			continue;
		}

		trace!(name = %attribute.name, "Removing attribute");
		match namespace {
			None => live.remove_attribute(&attribute.name),
			Some(namespace) => live.remove_attribute_ns(Some(namespace), &attribute.local_name),
		}
		.map_err(Error::host(Operation::RemoveAttribute(attribute.name.clone())))?;
	}

	repair_properties(live, candidate);
	Ok(())
}

/// How an `<input>`'s live state relates to its declared attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueMode {
	/// The `value` property diverges from the `value` attribute once edited.
	Value,
	/// The `checked` property diverges from the `checked` attribute once toggled.
	Checkedness,
	/// The `value` property reflects the attribute (or a file list); nothing can drift.
	Reflected,
}

impl ValueMode {
	/// `input_type` is the normalized `type` property, so unknown types already read as `"text"`.
	pub(crate) fn of(input_type: &str) -> Self {
		match input_type {
			"checkbox" | "radio" => Self::Checkedness,
			"hidden" | "submit" | "reset" | "button" | "image" | "file" => Self::Reflected,
			_ => Self::Value,
		}
	}
}

/// Forces live properties of stateful form controls to what `candidate` declares.
///
/// Compares against the live *property*, so this also catches drift where the attribute never changed.
fn repair_properties(live: &web_sys::Element, candidate: &web_sys::Element) {
	if let Some(input) = live.dyn_ref::<web_sys::HtmlInputElement>() {
		match ValueMode::of(&input.type_()) {
			ValueMode::Checkedness => {
				let checked = candidate.has_attribute("checked");
				if input.checked() != checked {
					trace!(checked, "Repairing `checked` property");
					input.set_checked(checked)
				}
			}
			ValueMode::Value => {
				let value = candidate.get_attribute("value").unwrap_or_default();
				if input.value() != value {
					trace!("Repairing `value` property");
					input.set_value(&value)
				}
			}
			ValueMode::Reflected => (),
		}
	} else if let Some(text_area) = live.dyn_ref::<web_sys::HtmlTextAreaElement>() {
		let value = candidate.text_content().unwrap_or_default();
		if text_area.value() != value {
			trace!("Repairing `<textarea>` value");
			text_area.set_value(&value)
		}
	} else if let Some(option) = live.dyn_ref::<web_sys::HtmlOptionElement>() {
		let selected = candidate.has_attribute("selected");
		if option.selected() != selected {
			trace!(selected, "Repairing `selected` property");
			option.set_selected(selected)
		}
	}
}
