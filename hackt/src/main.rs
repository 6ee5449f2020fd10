//! hackt CLI - drives the Jack-to-HACK toolchain from the command line.
//!
//! Takes exactly one positional argument: a `.jack`/`.vm`/`.asm` file, a
//! comma- or space-separated list of same-kind files, or a directory. No
//! subcommands, no flags - verbosity comes from `HACKT_VERBOSE` and the
//! one optional setting `hackt.toml` can carry comes from that file, not
//! the command line.

mod config;
mod error;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::Result;
use hackc_drv::Session;

/// Compile, translate, and assemble Jack sources into HACK machine code.
#[derive(Parser, Debug)]
#[command(name = "hackt")]
#[command(author = "Hack Toolchain Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Jack-to-HACK compiler toolchain", long_about = None)]
struct Cli {
    /// File, comma-separated file list, or directory to process. Empty
    /// scans the current directory.
    #[arg(default_value = "")]
    input: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let working_dir = std::env::current_dir()?;
    let config = Config::load(&working_dir)?;

    let drv_config = hackc_drv::Config {
        input: cli.input,
        working_dir,
        emit_token_xml: config.emit_token_xml,
    };

    Session::new(drv_config).run()?;
    Ok(())
}

/// Initialize logging. Verbosity comes from `HACKT_VERBOSE`, not a flag,
/// since spec.md's CLI surface has no flags to spend on it.
fn init_logging() {
    let verbose = std::env::var("HACKT_VERBOSE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
