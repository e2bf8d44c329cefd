use classid_core::Colors;
use classid_std::{RegistryView, StandardClassIds, dump};

pub struct ListArgs {
    pub json: bool,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: ListArgs) {
    let ids = StandardClassIds::get();

    if !args.json {
        print!("{}", dump(ids, Colors::new(args.color)));
        return;
    }

    let view = RegistryView::new(ids);
    let rendered = if args.compact {
        serde_json::to_string(&view)
    } else {
        serde_json::to_string_pretty(&view)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
