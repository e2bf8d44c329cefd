//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("classid")
        .about("Inspect the standard class id registry")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(list_command())
        .subcommand(lookup_command())
        .subcommand(arrays_command())
}

/// List every predefined class id and the primitive array table.
pub fn list_command() -> Command {
    Command::new("list")
        .about("List predefined class ids")
        .after_help(
            r#"EXAMPLES:
  classid list                 # constants and array table
  classid list --json          # pretty JSON
  classid list --json --compact"#,
        )
        .arg(json_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Resolve one name against the registry.
pub fn lookup_command() -> Command {
    Command::new("lookup")
        .about("Resolve a class name and show its registry relations")
        .override_usage(
            "\
  classid lookup <NAME>
  classid lookup <NAME> --reflect
  classid lookup <PACKAGE/NAME>",
        )
        .after_help(
            r#"EXAMPLES:
  classid lookup Int                       # kotlin/Int and its IntArray
  classid lookup UShortArray               # array -> element
  classid lookup KProperty --reflect       # kotlin/reflect/KProperty
  classid lookup kotlin/collections/List   # full class id"#,
        )
        .arg(name_arg())
        .arg(reflect_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Show the element -> array table.
pub fn arrays_command() -> Command {
    Command::new("arrays")
        .about("Show primitive element and array class pairs")
        .arg(color_arg())
}
