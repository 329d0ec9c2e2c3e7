use std::fs;

use clap::Parser;
use schemer::{Config, cli::Args, get_result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Respects RUST_LOG, silent by default.
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();
    let config = Config::from_args(&args);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match get_result(&script, &config) {
        Ok(Some(value)) if args.pipe_mode => println!("{value}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
