//! Dynamic attribute values
//!
//! The renderer classifies a small union of scalar values the way PHP's loose
//! typing does: `null`, booleans, integers, floats and strings each have a
//! well-defined string cast and truthiness. Collections have no meaning for a
//! single HTML attribute and are rejected at the template-engine boundary,
//! never inside the classifier.

use tera::Value;

/// A dynamic value supplied to an attribute directive at render time.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::AttributeValue;
///
/// let value: AttributeValue = "hello".into();
/// assert_eq!(value, AttributeValue::Str("hello".to_string()));
///
/// let absent: AttributeValue = Option::<i64>::None.into();
/// assert_eq!(absent, AttributeValue::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
	/// Absent value; always suppresses the attribute.
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
}

impl AttributeValue {
	/// Convert a `tera::Value` into an attribute value.
	///
	/// Arrays, objects and non-finite numbers are not meaningful as attribute
	/// values and produce an error; this keeps the classifier itself total.
	///
	/// # Examples
	///
	/// ```
	/// use tera_html_attributes::AttributeValue;
	/// use serde_json::json;
	///
	/// assert_eq!(
	///     AttributeValue::from_tera(&json!(42)).unwrap(),
	///     AttributeValue::Int(42)
	/// );
	/// assert_eq!(
	///     AttributeValue::from_tera(&json!(null)).unwrap(),
	///     AttributeValue::Null
	/// );
	/// assert!(AttributeValue::from_tera(&json!([1, 2])).is_err());
	/// ```
	pub fn from_tera(value: &Value) -> tera::Result<Self> {
		match value {
			Value::Null => Ok(Self::Null),
			Value::Bool(b) => Ok(Self::Bool(*b)),
			Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Ok(Self::Int(i))
				} else if let Some(f) = n.as_f64() {
					Ok(Self::Float(f))
				} else {
					Err(tera::Error::msg(format!(
						"attribute value {n} cannot be represented as an integer or float"
					)))
				}
			}
			Value::String(s) => Ok(Self::Str(s.clone())),
			Value::Array(_) | Value::Object(_) => Err(tera::Error::msg(
				"attribute value must be a string, number, boolean, or null",
			)),
		}
	}

	/// PHP-style string cast for non-boolean scalars.
	///
	/// Integers and floats stringify the way PHP casts them (`1.0` → `"1"`,
	/// `1.5` → `"1.5"`); strings pass through unchanged. `Null` casts to the
	/// empty string and booleans to `"1"`/`""`, though every classifier
	/// branches on those variants before reaching a string check.
	pub(crate) fn cast_string(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Bool(true) => "1".to_string(),
			Self::Bool(false) => String::new(),
			Self::Int(i) => i.to_string(),
			Self::Float(f) => f.to_string(),
			Self::Str(s) => s.clone(),
		}
	}

	/// Stringification used where a boolean renders as a value: `"true"` and
	/// `"false"` instead of PHP's `"1"`/`""` cast.
	pub(crate) fn literal_string(&self) -> String {
		match self {
			Self::Bool(b) => if *b { "true" } else { "false" }.to_string(),
			other => other.cast_string(),
		}
	}
}

impl From<bool> for AttributeValue {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<i64> for AttributeValue {
	fn from(i: i64) -> Self {
		Self::Int(i)
	}
}

impl From<i32> for AttributeValue {
	fn from(i: i32) -> Self {
		Self::Int(i64::from(i))
	}
}

impl From<f64> for AttributeValue {
	fn from(f: f64) -> Self {
		Self::Float(f)
	}
}

impl From<&str> for AttributeValue {
	fn from(s: &str) -> Self {
		Self::Str(s.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(s: String) -> Self {
		Self::Str(s)
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_from_tera_scalars() {
		assert_eq!(
			AttributeValue::from_tera(&json!("abc")).unwrap(),
			AttributeValue::Str("abc".to_string())
		);
		assert_eq!(
			AttributeValue::from_tera(&json!(true)).unwrap(),
			AttributeValue::Bool(true)
		);
		assert_eq!(
			AttributeValue::from_tera(&json!(-7)).unwrap(),
			AttributeValue::Int(-7)
		);
		assert_eq!(
			AttributeValue::from_tera(&json!(2.5)).unwrap(),
			AttributeValue::Float(2.5)
		);
		assert_eq!(
			AttributeValue::from_tera(&json!(null)).unwrap(),
			AttributeValue::Null
		);
	}

	#[test]
	fn test_from_tera_rejects_collections() {
		assert!(AttributeValue::from_tera(&json!([1])).is_err());
		assert!(AttributeValue::from_tera(&json!({"a": 1})).is_err());
	}

	#[test]
	fn test_cast_string_matches_php_casts() {
		assert_eq!(AttributeValue::Int(0).cast_string(), "0");
		assert_eq!(AttributeValue::Int(123).cast_string(), "123");
		assert_eq!(AttributeValue::Float(1.0).cast_string(), "1");
		assert_eq!(AttributeValue::Float(1.5).cast_string(), "1.5");
		assert_eq!(AttributeValue::Bool(true).cast_string(), "1");
		assert_eq!(AttributeValue::Bool(false).cast_string(), "");
		assert_eq!(AttributeValue::Null.cast_string(), "");
	}

	#[test]
	fn test_literal_string_spells_out_booleans() {
		assert_eq!(AttributeValue::Bool(true).literal_string(), "true");
		assert_eq!(AttributeValue::Bool(false).literal_string(), "false");
		assert_eq!(AttributeValue::Int(8).literal_string(), "8");
	}

	#[test]
	fn test_option_conversion() {
		let some: AttributeValue = Some(3i64).into();
		assert_eq!(some, AttributeValue::Int(3));

		let none: AttributeValue = Option::<&str>::None.into();
		assert_eq!(none, AttributeValue::Null);
	}
}
