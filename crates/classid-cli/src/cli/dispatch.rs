//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch → command handlers

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::arrays::ArraysArgs;
use crate::commands::list::ListArgs;
use crate::commands::lookup::LookupArgs;

pub struct ListParams {
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            json: p.json,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LookupParams {
    pub name: String,
    pub reflect: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl LookupParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            reflect: m.get_flag("reflect"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<LookupParams> for LookupArgs {
    fn from(p: LookupParams) -> Self {
        Self {
            name: p.name,
            reflect: p.reflect,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ArraysParams {
    pub color: ColorChoice,
}

impl ArraysParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            color: parse_color(m),
        }
    }
}

impl From<ArraysParams> for ArraysArgs {
    fn from(p: ArraysParams) -> Self {
        Self {
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
