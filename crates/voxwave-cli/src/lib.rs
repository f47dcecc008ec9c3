//! voxwave CLI library.
//!
//! This crate provides the core functionality for the voxwave CLI: loading
//! requests, logging setup, and the command implementations.

pub mod commands;
pub mod input;
pub mod logging;
