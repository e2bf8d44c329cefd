//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Class name or full class id (positional).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .value_name("NAME")
        .required(true)
        .help("Short class name (`Int`) or full class id (`kotlin/reflect/KProperty`)")
}

/// Place a short name under the reflection package (--reflect).
pub fn reflect_arg() -> Arg {
    Arg::new("reflect")
        .long("reflect")
        .action(ArgAction::SetTrue)
        .help("Resolve a short name under the reflection package")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON instead of text")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .requires("json")
        .help("Output compact JSON (default: pretty)")
}
