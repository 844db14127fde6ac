//! Fixture verifying `#[auto_options(crate = "...")]` works with a rename via
//! `use ... as`.

use auto_options as opts;
use opts::AutoOptions;

/// Generated code must reach every type through `opts` rather than
/// `auto_options`.
#[derive(AutoOptions)]
#[auto_options(crate = "opts")]
struct AliasedOptions {
    #[auto_options(default_path = "out")]
    pub output: std::path::PathBuf,
    #[auto_options(default = Some(3))]
    pub depth: Option<u8>,
}

fn main() {
    let result = AliasedOptions::options();
    let _: opts::AutoOptionsResult<Vec<opts::OptionDescriptor>> = result;
}
