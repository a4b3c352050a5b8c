//! Attribute rendering
//!
//! One render function per directive family, each a pure function of the
//! attribute name and a dynamic value. These are the deferred half of the
//! compile/render split: a template is compiled once, then these run on every
//! render with fresh data.

use crate::classify::{
	Disposition, classify_aria, classify_forced, classify_neat, classify_plain,
};
use crate::escaping::escape_attr;
use crate::value::AttributeValue;

/// Turn a classified disposition into the final fragment.
pub(crate) fn emit(name: &str, disposition: Disposition) -> String {
	match disposition {
		Disposition::Suppress => String::new(),
		Disposition::Bare => name.to_string(),
		Disposition::Valued(value) => format!("{}=\"{}\"", name, escape_attr(&value)),
	}
}

/// Render a bare flag attribute (`flag` / `bool` families).
///
/// Any truthy value yields the attribute name alone; the PHP falsy set
/// (`null`, `false`, `0`, `"0"`, blank strings) yields nothing.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::render_flag;
///
/// assert_eq!(render_flag("disabled", &true.into()), "disabled");
/// assert_eq!(render_flag("disabled", &"bar".into()), "disabled");
/// assert_eq!(render_flag("disabled", &false.into()), "");
/// assert_eq!(render_flag("disabled", &"0".into()), "");
/// ```
pub fn render_flag(attribute: &str, value: &AttributeValue) -> String {
	match classify_plain(value) {
		Disposition::Suppress => String::new(),
		// A flag never carries a value; truthy means the name alone.
		Disposition::Bare | Disposition::Valued(_) => attribute.to_string(),
	}
}

/// Render a general attribute (`attr` / `enum` families, no modifier).
///
/// `true` renders bare, falsy values suppress, anything else renders
/// `name="escaped-value"`.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::render_attr;
///
/// assert_eq!(render_attr("title", &"test".into()), r#"title="test""#);
/// assert_eq!(render_attr("title", &true.into()), "title");
/// assert_eq!(render_attr("title", &"".into()), "");
/// ```
pub fn render_attr(attribute: &str, value: &AttributeValue) -> String {
	emit(attribute, classify_plain(value))
}

/// Render a general attribute in forced-value mode (`attr('name=', ...)`).
///
/// Suppresses only on `Null`; booleans spell out `"true"`/`"false"`, empty and
/// whitespace-only strings are preserved verbatim inside the quotes.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, render_attr_forced};
///
/// assert_eq!(render_attr_forced("foo", &false.into()), r#"foo="false""#);
/// assert_eq!(render_attr_forced("foo", &0.into()), r#"foo="0""#);
/// assert_eq!(render_attr_forced("foo", &"   ".into()), r#"foo="   ""#);
/// assert_eq!(render_attr_forced("foo", &AttributeValue::Null), "");
/// ```
pub fn render_attr_forced(attribute: &str, value: &AttributeValue) -> String {
	emit(attribute, classify_forced(value))
}

/// Render a `data-` attribute; the prefix is applied here, so pass `"id"` to
/// get `data-id="..."`.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::render_data;
///
/// assert_eq!(render_data("id", &123.into()), r#"data-id="123""#);
/// assert_eq!(render_data("id", &true.into()), "data-id");
/// assert_eq!(render_data("id", &"".into()), "");
/// ```
pub fn render_data(attribute: &str, value: &AttributeValue) -> String {
	render_attr(&format!("data-{attribute}"), value)
}

/// Render a `data-` attribute in forced-value mode.
pub fn render_data_forced(attribute: &str, value: &AttributeValue) -> String {
	render_attr_forced(&format!("data-{attribute}"), value)
}

/// Render an `aria-` attribute; pass `"hidden"` to get `aria-hidden="..."`.
///
/// Booleans always render as `"true"`/`"false"` literals and blank strings
/// suppress, since aria attributes must never be bare or empty.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, render_aria};
///
/// assert_eq!(render_aria("hidden", &true.into()), r#"aria-hidden="true""#);
/// assert_eq!(render_aria("hidden", &false.into()), r#"aria-hidden="false""#);
/// assert_eq!(render_aria("label", &"Close".into()), r#"aria-label="Close""#);
/// assert_eq!(render_aria("label", &AttributeValue::Null), "");
/// ```
pub fn render_aria(attribute: &str, value: &AttributeValue) -> String {
	emit(&format!("aria-{attribute}"), classify_aria(value, false))
}

/// Render an `aria-` attribute with negated boolean literals
/// (`aria('!hidden', ...)`).
///
/// # Examples
///
/// ```
/// use tera_html_attributes::render_aria_negated;
///
/// assert_eq!(render_aria_negated("hidden", &true.into()), r#"aria-hidden="false""#);
/// assert_eq!(render_aria_negated("hidden", &false.into()), r#"aria-hidden="true""#);
/// ```
pub fn render_aria_negated(attribute: &str, value: &AttributeValue) -> String {
	emit(&format!("aria-{attribute}"), classify_aria(value, true))
}

/// Render a `neat` attribute: valued whenever a value is present, suppressed
/// only for `Null` and blank strings.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, render_neat};
///
/// assert_eq!(render_neat("foo", &false.into()), r#"foo="false""#);
/// assert_eq!(render_neat("foo", &0.into()), r#"foo="0""#);
/// assert_eq!(render_neat("foo", &AttributeValue::Null), "");
/// ```
pub fn render_neat(attribute: &str, value: &AttributeValue) -> String {
	emit(attribute, classify_neat(value))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_valued_output_is_escaped() {
		assert_eq!(
			render_attr("foo", &"<script>alert('xss')</script>".into()),
			r#"foo="&lt;script&gt;alert(&#039;xss&#039;)&lt;/script&gt;""#
		);
	}

	#[test]
	fn test_flag_never_carries_a_value() {
		assert_eq!(
			render_flag("disabled", &"<script>alert('xss')</script>".into()),
			"disabled"
		);
	}

	#[test]
	fn test_prefixes() {
		assert_eq!(render_data("id", &"x".into()), r#"data-id="x""#);
		assert_eq!(render_data_forced("id", &false.into()), r#"data-id="false""#);
		assert_eq!(render_aria("foo", &8.into()), r#"aria-foo="8""#);
	}

	#[test]
	fn test_rendering_is_idempotent() {
		let value: AttributeValue = "same".into();
		assert_eq!(render_attr("foo", &value), render_attr("foo", &value));
	}
}
