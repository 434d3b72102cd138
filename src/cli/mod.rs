//! Command-line interface definitions for the `qingcloud` binary.
//!
//! This module centralises the clap parser structures so both the main binary
//! and the build script can reuse them when generating the manual page.

use clap::Parser;

/// Top-level CLI for the `qingcloud` binary.
#[derive(Debug, Parser)]
#[command(
    name = "qingcloud",
    about = "Call QingCloud IaaS actions from the command line",
    arg_required_else_help = true
)]
pub(crate) enum Cli {
    /// List every action the client can call.
    #[command(name = "actions", about = "List every action the client can call")]
    Actions,
    /// Call one action and print its JSON output.
    #[command(name = "call", about = "Call one action and print its JSON output")]
    Call(CallCommand),
}

/// Arguments for the `qingcloud call` subcommand.
#[derive(Debug, Parser)]
pub(crate) struct CallCommand {
    /// Action name as printed by `qingcloud actions`, e.g. `DescribeInstances`.
    #[arg(value_name = "ACTION")]
    pub(crate) action: String,
    /// Zone to run the action in, e.g. `pek3a`.
    #[arg(long, env = "QINGCLOUD_ZONE", value_name = "ZONE")]
    pub(crate) zone: String,
    /// Action input as a JSON object. Omit to use the input defaults.
    ///
    /// Field names match the API parameters; lists are JSON arrays and are
    /// flattened to `name.N` on the wire.
    #[arg(long, value_name = "JSON")]
    pub(crate) input: Option<String>,
}
