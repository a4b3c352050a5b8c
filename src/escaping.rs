//! HTML attribute escaping
//!
//! Attribute values are always emitted inside double quotes, so every value
//! passes through [`escape_attr`] before rendering. The entity set matches
//! what Laravel's `e()` produces with `ENT_QUOTES`:
//!
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#039;`

use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

/// Escape HTML special characters for use inside a quoted attribute value.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::escape_attr;
///
/// assert_eq!(
///     escape_attr("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#039;xss&#039;)&lt;/script&gt;"
/// );
/// assert_eq!(escape_attr(r#"say "hi" & wave"#), "say &quot;hi&quot; &amp; wave");
/// assert_eq!(escape_attr("plain"), "plain");
/// ```
pub fn escape_attr(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#039;"),
			_ => out.push(c),
		}
	}
	out
}

/// Tera filter form of [`escape_attr`].
///
/// # Example
/// ```tera
/// <div title="{{ user_input | escape_attr }}">
/// ```
pub fn escape_attr_filter(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	let s = value
		.as_str()
		.ok_or_else(|| tera::Error::msg("escape_attr filter requires a string"))?;
	Ok(Value::String(escape_attr(s)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_attr() {
		assert_eq!(
			escape_attr("<script>alert('xss')</script>"),
			"&lt;script&gt;alert(&#039;xss&#039;)&lt;/script&gt;"
		);
		assert_eq!(escape_attr("Hello & goodbye"), "Hello &amp; goodbye");
		assert_eq!(
			escape_attr(r#"<a href="test">link</a>"#),
			"&lt;a href=&quot;test&quot;&gt;link&lt;/a&gt;"
		);
		assert_eq!(escape_attr("normal text"), "normal text");
	}

	#[test]
	fn test_escape_attr_does_not_double_escape_input_ampersands() {
		// Every source ampersand is escaped exactly once, even when it
		// already looks like an entity.
		assert_eq!(escape_attr("&amp;"), "&amp;amp;");
	}

	#[test]
	fn test_escape_attr_filter() {
		let args = HashMap::new();
		assert_eq!(
			escape_attr_filter(&Value::String("<div>".to_string()), &args).unwrap(),
			Value::String("&lt;div&gt;".to_string())
		);
		assert!(escape_attr_filter(&Value::Bool(true), &args).is_err());
	}
}
