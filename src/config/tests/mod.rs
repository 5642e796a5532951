//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `precedence`: Layer precedence and output choice tests
//! - `field_resolution`: Input source, output path and output mode tests
//! - `loading`: Environment and command-line loading tests
//! - `validation`: Configuration consistency validation tests

mod precedence;
