//! Error types for directive compilation.
//!
//! Both errors are compile-stage only: rendering is total over the scalar
//! value kinds and never fails.

use thiserror::Error;

/// A syntactic modifier on an attribute specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
	/// Trailing `=` marker: always render a value, even for falsy input.
	ForcedValue,
	/// Leading `!` marker: invert the boolean literal.
	Negation,
}

impl Modifier {
	fn describe(self) -> &'static str {
		match self {
			Self::ForcedValue => "forced values",
			Self::Negation => "negation",
		}
	}
}

/// Errors raised while compiling a directive's raw argument text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
	/// The argument text did not split into exactly two non-empty parts.
	#[error("The @{directive} directive requires exactly 2 parameters.")]
	InvalidArity {
		/// Name of the offending directive.
		directive: &'static str,
	},

	/// The attribute specifier carried a modifier this family rejects.
	#[error("The @{directive} directive does not support {}.", .modifier.describe())]
	UnsupportedModifier {
		/// Name of the offending directive.
		directive: &'static str,
		/// The rejected modifier.
		modifier: Modifier,
	},
}

/// Result type alias for directive compilation.
pub type DirectiveResult<T> = Result<T, DirectiveError>;
