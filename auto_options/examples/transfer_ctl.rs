//! Example CLI whose options are derived from annotated structs.
//!
//! `transfer_ctl describe` prints the derived descriptors as JSON;
//! `transfer_ctl fetch` parses them with `clap`.

use std::io::{self, Write};
use std::path::PathBuf;

use auto_options::{AutoOptions, CommandExt, NamingConfig};
use clap::{ArgMatches, Command, ValueEnum};

/// Options shared by every subcommand.
#[derive(AutoOptions)]
struct GlobalOptions {
    /// Print progress while transferring.
    #[auto_options(alias = "-v")]
    pub verbose: bool,
}

/// Compression applied to transferred data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Compression {
    None,
    Fast,
    Best,
}

/// Options of the `fetch` subcommand.
#[derive(AutoOptions)]
struct FetchOptions {
    /// Remote address to fetch from.
    pub url: String,
    /// Retry budget for failed requests.
    #[auto_options(alias = "-r", default = 3)]
    pub max_retry_count: u32,
    /// Directory receiving the downloaded files.
    #[auto_options(alias = "-o", default_path = "downloads")]
    pub output_dir: PathBuf,
    /// Compression requested from the server.
    #[auto_options(value_enum, default = Compression::Fast)]
    pub compression: Compression,
}

fn command() -> Result<Command, auto_options::AutoOptionsError> {
    Command::new("transfer_ctl")
        .subcommand_required(true)
        .subcommand(Command::new("describe").about("Print the derived option descriptors"))
        .subcommand(
            Command::new("fetch")
                .about("Fetch a remote resource")
                .add_options::<FetchOptions>()?,
        )
        .add_global_options::<GlobalOptions>()
}

fn describe(stdout: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let options = FetchOptions::options_with(&NamingConfig::default())?;
    serde_json::to_writer_pretty(&mut *stdout, &options)?;
    writeln!(stdout)?;
    Ok(())
}

fn fetch(matches: &ArgMatches, stdout: &mut impl Write) -> io::Result<()> {
    let url = matches.get_one::<String>("url").map_or("<none>", String::as_str);
    let retries = matches.get_one::<u64>("max_retry_count").copied().unwrap_or_default();
    let output = matches
        .get_one::<PathBuf>("output_dir")
        .map_or_else(|| "<none>".into(), |path| path.display().to_string());
    let compression = matches
        .get_one::<String>("compression")
        .map_or("<none>", String::as_str);
    if matches.get_one::<bool>("verbose").copied().unwrap_or(false) {
        writeln!(stdout, "fetching with {retries} retries")?;
    }
    writeln!(stdout, "{url} -> {output} ({compression})")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = command()?.get_matches();
    let mut stdout = io::stdout().lock();
    match matches.subcommand() {
        Some(("describe", _)) => describe(&mut stdout),
        Some(("fetch", fetch_matches)) => Ok(fetch(fetch_matches, &mut stdout)?),
        Some((name, _)) => Err(format!("unknown subcommand {name}").into()),
        None => Ok(()),
    }
}
