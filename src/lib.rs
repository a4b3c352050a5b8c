//! # Tera HTML Attributes
//!
//! Conditional HTML attribute helpers for [Tera] templates, ported from the
//! Blade `@flag` / `@attr` / `@data` / `@aria` directive family.
//!
//! Each helper takes an attribute name and a dynamic value and emits either
//! nothing, a bare attribute (`disabled`), or `name="escaped-value"`,
//! according to PHP-style truthiness rules:
//!
//! - `null`, `false`, `0`, `"0"` and blank strings suppress the attribute
//!   (plain families)
//! - `true` renders the bare name
//! - forced mode (`name=`) renders every non-null value, even `false` and `""`
//! - `aria` attributes always carry `"true"`/`"false"` literals and never
//!   render empty
//!
//! ## Example
//!
//! ```rust
//! use tera::{Context, Tera};
//! use tera_html_attributes::register_functions;
//!
//! let mut tera = Tera::default();
//! register_functions(&mut tera);
//! tera.add_raw_template(
//!     "checkbox",
//!     r#"<input type="checkbox" {{ flag(name="checked", value=checked) }} />"#,
//! )
//! .unwrap();
//!
//! let mut context = Context::new();
//! context.insert("checked", &true);
//! assert_eq!(
//!     tera.render("checkbox", &context).unwrap(),
//!     r#"<input type="checkbox" checked />"#
//! );
//!
//! context.insert("checked", &false);
//! assert_eq!(
//!     tera.render("checkbox", &context).unwrap(),
//!     r#"<input type="checkbox"  />"#
//! );
//! ```
//!
//! For host engines with a Blade-like compile step, [`Directive::compile`]
//! inspects the raw two-part argument source once per template and yields a
//! [`CompiledAttribute`] whose [`render`](CompiledAttribute::render) runs per
//! request with the evaluated value.
//!
//! [Tera]: https://keats.github.io/tera/

pub mod classify;
pub mod directive;
pub mod error;
pub mod escaping;
pub mod functions;
pub mod render;
pub mod value;

pub use classify::{Disposition, classify_aria, classify_forced, classify_neat, classify_plain};
pub use directive::{CompiledAttribute, Directive};
pub use error::{DirectiveError, DirectiveResult, Modifier};
pub use escaping::{escape_attr, escape_attr_filter};
pub use functions::{aria, attr, bool_fn, data, enum_fn, flag, neat, register_functions};
pub use render::{
	render_aria, render_aria_negated, render_attr, render_attr_forced, render_data,
	render_data_forced, render_flag, render_neat,
};
pub use value::AttributeValue;

#[cfg(test)]
mod tests;
