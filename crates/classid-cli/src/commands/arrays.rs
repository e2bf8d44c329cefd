use classid_core::Colors;
use classid_std::{StandardClassIds, dump_arrays};

pub struct ArraysArgs {
    pub color: bool,
}

pub fn run(args: ArraysArgs) {
    let colors = Colors::new(args.color);
    print!("{}", dump_arrays(StandardClassIds::get(), colors));
}
