use std::borrow::Cow;

/// Names and limits the [`Reconciler`](`crate::Reconciler`) agrees on with its collaborators.
///
/// The defaults match the conventions of the surrounding component runtime:
///
/// | setting | default |
/// |---|---|
/// | [`key_attribute`](`Config::key_attribute`) | `key` |
/// | [`preserve_attribute`](`Config::preserve_attribute`) | `data-style-scope` |
/// | [`event_sigil`](`Config::event_sigil`) | `@` |
/// | [`depth_limit`](`Config::depth_limit`) | none |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Attribute carrying an element's identity key. Empty values count as unkeyed.
	pub key_attribute: Cow<'static, str>,
	/// Attribute set by the style injector on nodes that must outlive any candidate tree.
	pub preserve_attribute: Cow<'static, str>,
	/// Prefix of attribute names owned by the event subsystem.
	pub event_sigil: char,
	/// How many element levels below the diffed parent may be entered, if limited at all.
	///
	/// Any nesting the host can parse is reconciled by default.
	pub depth_limit: Option<usize>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			key_attribute: Cow::Borrowed("key"),
			preserve_attribute: Cow::Borrowed("data-style-scope"),
			event_sigil: '@',
			depth_limit: None,
		}
	}
}

impl Config {
	#[must_use]
	pub fn with_key_attribute(mut self, key_attribute: impl Into<Cow<'static, str>>) -> Self {
		self.key_attribute = key_attribute.into();
		self
	}

	#[must_use]
	pub fn with_preserve_attribute(mut self, preserve_attribute: impl Into<Cow<'static, str>>) -> Self {
		self.preserve_attribute = preserve_attribute.into();
		self
	}

	#[must_use]
	pub fn with_event_sigil(mut self, event_sigil: char) -> Self {
		self.event_sigil = event_sigil;
		self
	}

	/// Opts into failing with [`Error::DepthLimit`](`crate::Error::DepthLimit`) beyond `depth_limit` element levels.
	#[must_use]
	pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
		self.depth_limit = Some(depth_limit);
		self
	}

	/// Whether `name` belongs to the event subsystem and must be left alone.
	#[must_use]
	pub fn is_event_binding(&self, name: &str) -> bool {
		name.starts_with(self.event_sigil)
	}

	/// Whether `name` is a marker attribute the reconciler neither writes nor removes.
	#[must_use]
	pub fn is_marker(&self, name: &str) -> bool {
		name == self.preserve_attribute
	}

	/// Attributes neither read, written nor removed during synchronization.
	#[must_use]
	pub fn is_untouchable(&self, name: &str) -> bool {
		self.is_event_binding(name) || self.is_marker(name)
	}
}
