//! Value classification
//!
//! Every directive family reduces to the same question: given a dynamic value,
//! should the attribute be suppressed, rendered bare (`disabled`), or rendered
//! with a value (`title="..."`)? The four classifier variants below encode the
//! PHP loose-truthiness rules explicitly, since the host language's native
//! truthiness differs (`"0"` is truthy in Rust terms, falsy in PHP's).

use crate::value::AttributeValue;

/// Outcome of classifying a value for one directive family.
///
/// The `Valued` payload is the raw stringified value; HTML escaping is applied
/// exactly once, when the final fragment is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
	/// Render nothing.
	Suppress,
	/// Render the attribute name only, e.g. `disabled`.
	Bare,
	/// Render `name="value"` with the payload escaped.
	Valued(String),
}

/// Classifier for the plain families (`flag`, `bool`, `attr`, `enum`, `data`).
///
/// Reproduces PHP's falsy set: `null`, `false`, `0`, `"0"`, the empty string
/// and whitespace-only strings all suppress. `true` renders bare; everything
/// else carries its stringified value.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, Disposition, classify_plain};
///
/// assert_eq!(classify_plain(&AttributeValue::Null), Disposition::Suppress);
/// assert_eq!(classify_plain(&AttributeValue::Int(0)), Disposition::Suppress);
/// assert_eq!(classify_plain(&true.into()), Disposition::Bare);
/// assert_eq!(
///     classify_plain(&"test".into()),
///     Disposition::Valued("test".to_string())
/// );
/// ```
pub fn classify_plain(value: &AttributeValue) -> Disposition {
	match value {
		AttributeValue::Null | AttributeValue::Bool(false) => Disposition::Suppress,
		AttributeValue::Bool(true) => Disposition::Bare,
		other => {
			let s = other.cast_string();
			// PHP's '0' check is exact, not trimmed: " 0 " still renders.
			if s == "0" || s.trim().is_empty() {
				Disposition::Suppress
			} else {
				Disposition::Valued(s)
			}
		}
	}
}

/// Classifier for forced-value mode (`attr`/`enum`/`data` with a trailing `=`
/// marker).
///
/// Only true absence suppresses; `false`, `0` and even the empty string render
/// with their literal form, whitespace preserved.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, Disposition, classify_forced};
///
/// assert_eq!(
///     classify_forced(&false.into()),
///     Disposition::Valued("false".to_string())
/// );
/// assert_eq!(
///     classify_forced(&"   ".into()),
///     Disposition::Valued("   ".to_string())
/// );
/// assert_eq!(classify_forced(&AttributeValue::Null), Disposition::Suppress);
/// ```
pub fn classify_forced(value: &AttributeValue) -> Disposition {
	match value {
		AttributeValue::Null => Disposition::Suppress,
		other => Disposition::Valued(other.literal_string()),
	}
}

/// Classifier for the `aria` family.
///
/// Aria attributes must never be bare and never carry empty values: booleans
/// always render as `"true"`/`"false"` literals, blank strings suppress. With
/// `negated`, the boolean literal is inverted; non-boolean values are
/// unaffected by negation.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, Disposition, classify_aria};
///
/// assert_eq!(
///     classify_aria(&false.into(), false),
///     Disposition::Valued("false".to_string())
/// );
/// assert_eq!(
///     classify_aria(&false.into(), true),
///     Disposition::Valued("true".to_string())
/// );
/// assert_eq!(classify_aria(&"".into(), false), Disposition::Suppress);
/// ```
pub fn classify_aria(value: &AttributeValue, negated: bool) -> Disposition {
	match value {
		AttributeValue::Null => Disposition::Suppress,
		AttributeValue::Bool(b) => {
			let literal = if *b != negated { "true" } else { "false" };
			Disposition::Valued(literal.to_string())
		}
		other => {
			let s = other.cast_string();
			if s.trim().is_empty() {
				Disposition::Suppress
			} else {
				Disposition::Valued(s)
			}
		}
	}
}

/// Classifier for the `neat` family.
///
/// Neat renders anything present, including `false` and `0`, as a valued
/// attribute; only `null` and blank strings suppress.
///
/// # Examples
///
/// ```
/// use tera_html_attributes::{AttributeValue, Disposition, classify_neat};
///
/// assert_eq!(
///     classify_neat(&false.into()),
///     Disposition::Valued("false".to_string())
/// );
/// assert_eq!(
///     classify_neat(&0.into()),
///     Disposition::Valued("0".to_string())
/// );
/// assert_eq!(classify_neat(&"   ".into()), Disposition::Suppress);
/// ```
pub fn classify_neat(value: &AttributeValue) -> Disposition {
	match value {
		AttributeValue::Null => Disposition::Suppress,
		other => {
			let s = other.literal_string();
			if s.trim().is_empty() {
				Disposition::Suppress
			} else {
				Disposition::Valued(s)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(AttributeValue::Null)]
	#[case(AttributeValue::Bool(false))]
	#[case(AttributeValue::Int(0))]
	#[case(AttributeValue::Float(0.0))]
	#[case(AttributeValue::Str("0".to_string()))]
	#[case(AttributeValue::Str(String::new()))]
	#[case(AttributeValue::Str("   ".to_string()))]
	fn test_plain_suppresses_php_falsy(#[case] value: AttributeValue) {
		assert_eq!(classify_plain(&value), Disposition::Suppress);
	}

	#[rstest]
	#[case(AttributeValue::Int(1), "1")]
	#[case(AttributeValue::Int(9), "9")]
	#[case(AttributeValue::Str("bar".to_string()), "bar")]
	#[case(AttributeValue::Str(" 0 ".to_string()), " 0 ")]
	#[case(AttributeValue::Float(1.5), "1.5")]
	fn test_plain_valued(#[case] value: AttributeValue, #[case] expected: &str) {
		assert_eq!(
			classify_plain(&value),
			Disposition::Valued(expected.to_string())
		);
	}

	#[test]
	fn test_plain_true_is_bare() {
		assert_eq!(classify_plain(&AttributeValue::Bool(true)), Disposition::Bare);
	}

	#[rstest]
	#[case(AttributeValue::Bool(true), "true")]
	#[case(AttributeValue::Bool(false), "false")]
	#[case(AttributeValue::Int(0), "0")]
	#[case(AttributeValue::Str(String::new()), "")]
	#[case(AttributeValue::Str("   ".to_string()), "   ")]
	fn test_forced_always_valued(#[case] value: AttributeValue, #[case] expected: &str) {
		assert_eq!(
			classify_forced(&value),
			Disposition::Valued(expected.to_string())
		);
	}

	#[test]
	fn test_forced_suppresses_only_null() {
		assert_eq!(classify_forced(&AttributeValue::Null), Disposition::Suppress);
	}

	#[test]
	fn test_aria_booleans_are_always_valued() {
		assert_eq!(
			classify_aria(&AttributeValue::Bool(true), false),
			Disposition::Valued("true".to_string())
		);
		assert_eq!(
			classify_aria(&AttributeValue::Bool(false), false),
			Disposition::Valued("false".to_string())
		);
	}

	#[test]
	fn test_aria_negation_inverts_boolean_literal_only() {
		assert_eq!(
			classify_aria(&AttributeValue::Bool(true), true),
			Disposition::Valued("false".to_string())
		);
		assert_eq!(
			classify_aria(&AttributeValue::Str("menu".to_string()), true),
			Disposition::Valued("menu".to_string())
		);
		assert_eq!(classify_aria(&AttributeValue::Null, true), Disposition::Suppress);
	}

	#[rstest]
	#[case(AttributeValue::Str(String::new()))]
	#[case(AttributeValue::Str("   ".to_string()))]
	#[case(AttributeValue::Null)]
	fn test_aria_suppresses_blank(#[case] value: AttributeValue) {
		assert_eq!(classify_aria(&value, false), Disposition::Suppress);
	}

	#[test]
	fn test_neat_renders_falsy_scalars() {
		assert_eq!(
			classify_neat(&AttributeValue::Bool(false)),
			Disposition::Valued("false".to_string())
		);
		assert_eq!(
			classify_neat(&AttributeValue::Int(0)),
			Disposition::Valued("0".to_string())
		);
		assert_eq!(
			classify_neat(&AttributeValue::Str("0".to_string())),
			Disposition::Valued("0".to_string())
		);
	}

	#[test]
	fn test_neat_suppresses_null_and_blank() {
		assert_eq!(classify_neat(&AttributeValue::Null), Disposition::Suppress);
		assert_eq!(
			classify_neat(&AttributeValue::Str(String::new())),
			Disposition::Suppress
		);
		assert_eq!(
			classify_neat(&AttributeValue::Str("\t\n".to_string())),
			Disposition::Suppress
		);
	}
}
