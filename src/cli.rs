use clap::Parser;

use crate::config::{DEFAULT_MAX_DEPTH, DEFAULT_TOLERANCE};

/// schemer evaluates the Scheme subset of the first textbook chapter in
/// applicative order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Tells schemer to look at a file instead of a script.
    #[arg(short, long)]
    pub file: bool,

    /// Pipe mode automatically prints out the last value produced by the
    /// script.
    #[arg(short, long)]
    pub pipe_mode: bool,

    /// Tolerance used by the prelude's Newton's method procedures.
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Maximum nesting depth of compound procedure applications.
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Start from the built-ins only, without the chapter's procedures.
    #[arg(long)]
    pub no_prelude: bool,

    pub contents: String,
}
