//! CLI command implementations

pub mod estimate;
pub mod inspect;
pub mod json_output;
pub mod synth;
pub mod validate;
