//! CLI command handlers for `coursefees`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod forms;
pub mod navigate;
pub mod quote;
pub mod session;
