//! `classid lookup`: resolve a name and report its registry relations.

use std::fmt::Write as _;

use classid_core::{ClassId, ClassIdParseError, Colors, NameError};
use classid_std::{StandardClassIds, try_by_name, try_reflect_by_name};
use serde::Serialize;

pub struct LookupArgs {
    pub name: String,
    pub reflect: bool,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid class name: {0}")]
    Name(#[from] NameError),
    #[error(transparent)]
    ClassId(#[from] ClassIdParseError),
}

/// What the registry knows about one class id.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub id: ClassId,
    pub constant: Option<&'static str>,
    pub array: Option<&'a ClassId>,
    pub element: Option<&'a ClassId>,
}

impl<'a> LookupReport<'a> {
    pub fn new(id: ClassId, ids: &'a StandardClassIds) -> Self {
        Self {
            constant: ids.label_of(&id),
            array: ids.array_of(&id),
            element: ids.element_of(&id),
            id,
        }
    }

    pub fn render(&self, colors: Colors) -> String {
        let c = colors;
        let mut out = String::new();
        writeln!(out, "{}", c.class_id(&self.id)).unwrap();

        let constant = self.constant.unwrap_or("-");
        writeln!(out, "  {}constant:{} {constant}", c.dim, c.reset).unwrap();
        if let Some(array) = self.array {
            writeln!(out, "  {}array:{}    {}", c.dim, c.reset, c.class_id(array)).unwrap();
        }
        if let Some(element) = self.element {
            writeln!(out, "  {}element:{}  {}", c.dim, c.reset, c.class_id(element)).unwrap();
        }
        out
    }
}

/// Full class ids (`pkg/Name`) are parsed as-is; short names are placed
/// under the base or reflection package.
pub fn resolve(name: &str, reflect: bool) -> Result<ClassId, LookupError> {
    if name.contains('/') {
        return Ok(ClassId::from_string(name)?);
    }
    let id = if reflect {
        try_reflect_by_name(name)?
    } else {
        try_by_name(name)?
    };
    Ok(id)
}

pub fn run(args: LookupArgs) {
    let id = match resolve(&args.name, args.reflect) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let report = LookupReport::new(id, StandardClassIds::get());
    if !args.json {
        print!("{}", report.render(Colors::new(args.color)));
        return;
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
