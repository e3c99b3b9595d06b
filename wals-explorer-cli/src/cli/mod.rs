// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for WALS Explorer
//!
//! Argument parsing, one handler per subcommand, and table/JSON/CSV output.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::run;
