//! Tera functions for the attribute directives
//!
//! Tera has no directive hook like Blade's, so each family is exposed as a
//! template function taking `name` and `value` keyword arguments:
//!
//! ```tera
//! <input type="checkbox" {{ flag(name="checked", value=checked) }} />
//! <div {{ attr(name="title", value=title) }} {{ data(name="id", value=id) }}>
//! <button {{ aria(name="hidden", value=hidden) }}>...</button>
//! ```
//!
//! Modifier markers ride inside the `name` argument, which arrives as an
//! already-evaluated string: a trailing `=` forces (`name="title="`) and a
//! leading `!` negates (`name="!hidden"`). Unsupported markers and non-scalar
//! values are reported as `tera::Error`s.
//!
//! The emitted fragment is pre-escaped, so pipe it through `| safe` in
//! HTML-autoescaped templates.

use std::collections::HashMap;

use tera::{Result as TeraResult, Tera, Value};

use crate::directive::Directive;
use crate::error::{DirectiveError, Modifier};
use crate::escaping::escape_attr_filter;
use crate::render::{
	render_aria, render_aria_negated, render_attr, render_attr_forced, render_flag, render_neat,
};
use crate::value::AttributeValue;

/// Register every directive function (and the `escape_attr` filter) on a
/// `Tera` instance.
///
/// # Examples
///
/// ```
/// use tera::{Context, Tera};
/// use tera_html_attributes::register_functions;
///
/// let mut tera = Tera::default();
/// register_functions(&mut tera);
/// tera.add_raw_template("t", r#"<div {{ data(name="id", value=id) }}>"#)
///     .unwrap();
///
/// let mut context = Context::new();
/// context.insert("id", &123);
///
/// let result = tera.render("t", &context).unwrap();
/// assert_eq!(result, r#"<div data-id="123">"#);
/// ```
pub fn register_functions(tera: &mut Tera) {
	tera.register_function("flag", flag);
	tera.register_function("bool", bool_fn);
	tera.register_function("attr", attr);
	tera.register_function("enum", enum_fn);
	tera.register_function("data", data);
	tera.register_function("aria", aria);
	tera.register_function("neat", neat);
	tera.register_filter("escape_attr", escape_attr_filter);
}

/// `{{ flag(name="disabled", value=...) }}`
pub fn flag(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Flag, args)
}

/// `{{ bool(name="disabled", value=...) }}` — alias of [`flag`].
pub fn bool_fn(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Bool, args)
}

/// `{{ attr(name="title", value=...) }}`
pub fn attr(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Attr, args)
}

/// `{{ enum(name="size", value=...) }}` — alias of [`attr`].
pub fn enum_fn(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Enum, args)
}

/// `{{ data(name="id", value=...) }}` — emits `data-id="..."`.
pub fn data(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Data, args)
}

/// `{{ aria(name="hidden", value=...) }}` — emits `aria-hidden="..."`.
pub fn aria(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Aria, args)
}

/// `{{ neat(name="alt", value=...) }}`
pub fn neat(args: &HashMap<String, Value>) -> TeraResult<Value> {
	call_directive(Directive::Neat, args)
}

fn call_directive(directive: Directive, args: &HashMap<String, Value>) -> TeraResult<Value> {
	let name = args.get("name").and_then(Value::as_str).ok_or_else(|| {
		tera::Error::msg(format!(
			"the {} function requires a string `name` argument",
			directive.name()
		))
	})?;
	let value = args.get("value").ok_or_else(|| {
		tera::Error::msg(format!(
			"the {} function requires a `value` argument",
			directive.name()
		))
	})?;
	let value = AttributeValue::from_tera(value)?;

	// The name argument is an evaluated string, so the markers appear without
	// the quotes the compile-time grammar carries.
	let forced = name.ends_with('=');
	let negated = name.starts_with('!');

	if forced && !matches!(directive, Directive::Attr | Directive::Enum | Directive::Data) {
		return Err(modifier_error(directive, Modifier::ForcedValue));
	}
	if negated && !matches!(directive, Directive::Aria) {
		return Err(modifier_error(directive, Modifier::Negation));
	}

	let mut name = name;
	if negated {
		name = name.strip_prefix('!').unwrap_or(name);
	}
	if forced {
		name = name.strip_suffix('=').unwrap_or(name);
	}

	let rendered = match directive {
		Directive::Flag | Directive::Bool => render_flag(name, &value),
		Directive::Attr | Directive::Enum => {
			if forced {
				render_attr_forced(name, &value)
			} else {
				render_attr(name, &value)
			}
		}
		Directive::Data => {
			if forced {
				render_attr_forced(&format!("data-{name}"), &value)
			} else {
				render_attr(&format!("data-{name}"), &value)
			}
		}
		Directive::Aria => {
			if negated {
				render_aria_negated(name, &value)
			} else {
				render_aria(name, &value)
			}
		}
		Directive::Neat => render_neat(name, &value),
	};

	Ok(Value::String(rendered))
}

fn modifier_error(directive: Directive, modifier: Modifier) -> tera::Error {
	tera::Error::msg(
		DirectiveError::UnsupportedModifier {
			directive: directive.name(),
			modifier,
		}
		.to_string(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn args(name: &str, value: Value) -> HashMap<String, Value> {
		let mut args = HashMap::new();
		args.insert("name".to_string(), json!(name));
		args.insert("value".to_string(), value);
		args
	}

	#[test]
	fn test_flag_function() {
		assert_eq!(
			flag(&args("disabled", json!(true))).unwrap(),
			json!("disabled")
		);
		assert_eq!(flag(&args("disabled", json!(false))).unwrap(), json!(""));
	}

	#[test]
	fn test_attr_forced_marker_in_name() {
		assert_eq!(
			attr(&args("foo=", json!(false))).unwrap(),
			json!(r#"foo="false""#)
		);
		assert_eq!(attr(&args("foo", json!(false))).unwrap(), json!(""));
	}

	#[test]
	fn test_aria_negation_marker_in_name() {
		assert_eq!(
			aria(&args("!hidden", json!(true))).unwrap(),
			json!(r#"aria-hidden="false""#)
		);
	}

	#[test]
	fn test_unsupported_markers_error() {
		let error = bool_fn(&args("!foo", json!(true))).unwrap_err();
		assert!(
			error
				.to_string()
				.contains("The @bool directive does not support negation.")
		);

		let error = neat(&args("foo=", json!(1))).unwrap_err();
		assert!(
			error
				.to_string()
				.contains("The @neat directive does not support forced values.")
		);
	}

	#[test]
	fn test_missing_arguments_error() {
		let mut only_name = HashMap::new();
		only_name.insert("name".to_string(), json!("foo"));
		assert!(attr(&only_name).is_err());
		assert!(attr(&HashMap::new()).is_err());
	}

	#[test]
	fn test_non_scalar_value_errors() {
		assert!(data(&args("id", json!([1, 2, 3]))).is_err());
	}
}
