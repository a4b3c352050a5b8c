//! Directive-level test suites
//!
//! One module per concern: the render decision tables for every directive
//! family, and end-to-end rendering through a real Tera instance.
