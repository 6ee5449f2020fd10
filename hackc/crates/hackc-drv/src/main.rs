//! Thin binary front door for `hackc-drv`. `hackt` is the richer,
//! `clap`-derived CLI; this binary exists for driving the pipeline
//! directly with a single positional argument and nothing else.

use hackc_drv::{Config, Session};

fn main() {
    tracing_subscriber::fmt::init();

    let input = std::env::args().nth(1).unwrap_or_default();
    let config = Config::new(input);

    if let Err(e) = Session::new(config).run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
