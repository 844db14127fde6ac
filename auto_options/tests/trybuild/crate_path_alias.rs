use auto_options::AutoOptions;

/// Verifies that `#[auto_options(crate = "auto_options")]` is accepted and
/// the generated code compiles with the real crate name as the alias.
#[derive(AutoOptions)]
#[auto_options(crate = "auto_options")]
struct CratePathOptions {
    #[auto_options(alias = "-n")]
    pub name: String,
    pub count: u32,
}

fn main() {
    let result = CratePathOptions::options();
    let _: auto_options::AutoOptionsResult<Vec<auto_options::OptionDescriptor>> = result;
}
