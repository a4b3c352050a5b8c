//! Directive compilation
//!
//! A host template engine hands each directive the raw, unevaluated source of
//! its two arguments, e.g. `'title', user.title`. Compilation happens once per
//! template: the attribute-specifier fragment is inspected *textually* for
//! modifier markers, split from the data expression, and turned into a
//! [`CompiledAttribute`]. The data expression stays unevaluated; the host
//! evaluates it on every render and feeds the result to
//! [`CompiledAttribute::render`].
//!
//! Modifier grammar on the attribute specifier:
//!
//! - trailing `='` or `="` → forced value (`attr('title=', v)` renders even
//!   falsy values)
//! - leading `'!` or `"!` → negation (`aria('!hidden', v)` inverts the
//!   boolean literal)
//!
//! The marker checks include the quote character, so an unquoted specifier
//! can never carry a modifier and is taken verbatim as the attribute name.

use tracing::trace;

use crate::classify::classify_aria;
use crate::error::{DirectiveError, DirectiveResult, Modifier};
use crate::render::{emit, render_attr, render_attr_forced, render_flag, render_neat};
use crate::value::AttributeValue;

/// The closed set of attribute directives.
///
/// `Flag`/`Bool` and `Attr`/`Enum` are aliases with identical semantics; both
/// names exist so templates written against either revision of the directive
/// set keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
	/// Bare flag attribute: `disabled`.
	Flag,
	/// Alias of [`Directive::Flag`].
	Bool,
	/// General attribute: `title="..."`, bare on `true`.
	Attr,
	/// Alias of [`Directive::Attr`].
	Enum,
	/// `data-` prefixed attribute.
	Data,
	/// `aria-` prefixed attribute, always valued, supports negation.
	Aria,
	/// Valued whenever present, including `false` and `0`.
	Neat,
}

impl Directive {
	/// Every directive, in registration order.
	pub const ALL: [Directive; 7] = [
		Directive::Flag,
		Directive::Bool,
		Directive::Attr,
		Directive::Enum,
		Directive::Data,
		Directive::Aria,
		Directive::Neat,
	];

	/// Look up a directive by its registered name.
	///
	/// # Examples
	///
	/// ```
	/// use tera_html_attributes::Directive;
	///
	/// assert_eq!(Directive::from_name("data"), Some(Directive::Data));
	/// assert_eq!(Directive::from_name("unknown"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"flag" => Some(Self::Flag),
			"bool" => Some(Self::Bool),
			"attr" => Some(Self::Attr),
			"enum" => Some(Self::Enum),
			"data" => Some(Self::Data),
			"aria" => Some(Self::Aria),
			"neat" => Some(Self::Neat),
			_ => None,
		}
	}

	/// The name the directive is registered under.
	pub fn name(self) -> &'static str {
		match self {
			Self::Flag => "flag",
			Self::Bool => "bool",
			Self::Attr => "attr",
			Self::Enum => "enum",
			Self::Data => "data",
			Self::Aria => "aria",
			Self::Neat => "neat",
		}
	}

	/// Prefix applied to the attribute name.
	pub fn prefix(self) -> &'static str {
		match self {
			Self::Data => "data-",
			Self::Aria => "aria-",
			_ => "",
		}
	}

	fn allows_forced(self) -> bool {
		matches!(self, Self::Attr | Self::Enum | Self::Data)
	}

	fn allows_negation(self) -> bool {
		matches!(self, Self::Aria)
	}

	/// Compile the raw two-part argument text into a [`CompiledAttribute`].
	///
	/// Splits on the first comma (the data expression may itself contain
	/// commas), trims both parts, and inspects the attribute fragment for
	/// modifier markers.
	///
	/// # Errors
	///
	/// [`DirectiveError::InvalidArity`] when the text does not split into two
	/// non-empty parts; [`DirectiveError::UnsupportedModifier`] when the
	/// family rejects a detected marker.
	///
	/// # Examples
	///
	/// ```
	/// use tera_html_attributes::Directive;
	///
	/// let compiled = Directive::Data.compile("'id', item.id").unwrap();
	/// assert_eq!(compiled.name(), "data-id");
	/// assert_eq!(compiled.value_expr(), "item.id");
	/// assert_eq!(compiled.render(&123.into()), r#"data-id="123""#);
	///
	/// let error = Directive::Bool.compile("'disabled'").unwrap_err();
	/// assert_eq!(
	///     error.to_string(),
	///     "The @bool directive requires exactly 2 parameters."
	/// );
	/// ```
	pub fn compile(self, raw_args: &str) -> DirectiveResult<CompiledAttribute> {
		let (attribute, data) = raw_args
			.split_once(',')
			.ok_or(DirectiveError::InvalidArity {
				directive: self.name(),
			})?;
		let attribute = attribute.trim();
		let data = data.trim();

		if attribute.is_empty() || data.is_empty() {
			return Err(DirectiveError::InvalidArity {
				directive: self.name(),
			});
		}

		let forced = attribute.ends_with("='") || attribute.ends_with("=\"");
		let negated = attribute.starts_with("'!") || attribute.starts_with("\"!");

		if forced && !self.allows_forced() {
			return Err(DirectiveError::UnsupportedModifier {
				directive: self.name(),
				modifier: Modifier::ForcedValue,
			});
		}
		if negated && !self.allows_negation() {
			return Err(DirectiveError::UnsupportedModifier {
				directive: self.name(),
				modifier: Modifier::Negation,
			});
		}

		let mut name = match unquote(attribute) {
			Some(inner) => inner,
			// Unquoted specifier: no markers possible, name taken verbatim.
			None => attribute,
		};
		if negated {
			name = name.strip_prefix('!').unwrap_or(name);
		}
		if forced {
			name = name.strip_suffix('=').unwrap_or(name);
		}
		let name = format!("{}{}", self.prefix(), name);

		trace!(
			directive = self.name(),
			attribute = %name,
			forced,
			negated,
			"compiled attribute directive"
		);

		Ok(CompiledAttribute {
			directive: self,
			name,
			value_expr: data.to_string(),
			forced,
			negated,
		})
	}
}

/// Strip a matching pair of surrounding quotes from a source fragment.
fn unquote(fragment: &str) -> Option<&str> {
	let mut chars = fragment.chars();
	let first = chars.next()?;
	let last = chars.next_back()?;
	if first == last && (first == '\'' || first == '"') {
		Some(&fragment[1..fragment.len() - 1])
	} else {
		None
	}
}

/// A directive compiled against its static argument text.
///
/// The attribute name and modifiers are fixed per compiled template; only the
/// data value varies per render. The host engine keeps the compiled attribute
/// around, evaluates [`value_expr`](Self::value_expr) with the current render
/// context, and calls [`render`](Self::render) with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledAttribute {
	directive: Directive,
	name: String,
	value_expr: String,
	forced: bool,
	negated: bool,
}

impl CompiledAttribute {
	/// The directive this attribute was compiled by.
	pub fn directive(&self) -> Directive {
		self.directive
	}

	/// The resolved attribute name, markers stripped and prefix applied.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The verbatim, unevaluated data-expression source.
	pub fn value_expr(&self) -> &str {
		&self.value_expr
	}

	/// Whether the forced-value marker was present.
	pub fn is_forced(&self) -> bool {
		self.forced
	}

	/// Whether the negation marker was present.
	pub fn is_negated(&self) -> bool {
		self.negated
	}

	/// Render the attribute fragment for one evaluated value.
	///
	/// Never fails; classification is total over the scalar value kinds.
	///
	/// # Examples
	///
	/// ```
	/// use tera_html_attributes::{AttributeValue, Directive};
	///
	/// let compiled = Directive::Aria.compile("'hidden', hidden").unwrap();
	/// assert_eq!(compiled.render(&true.into()), r#"aria-hidden="true""#);
	/// assert_eq!(compiled.render(&AttributeValue::Null), "");
	/// ```
	pub fn render(&self, value: &AttributeValue) -> String {
		match self.directive {
			Directive::Flag | Directive::Bool => render_flag(&self.name, value),
			Directive::Attr | Directive::Enum | Directive::Data => {
				if self.forced {
					render_attr_forced(&self.name, value)
				} else {
					render_attr(&self.name, value)
				}
			}
			// The stored name already carries the aria- prefix.
			Directive::Aria => emit(&self.name, classify_aria(value, self.negated)),
			Directive::Neat => render_neat(&self.name, value),
		}
	}
}
