//! # Command-line arguments
//!
//! A flat `clap`-derive struct mirroring the flag set the front-end has
//! always exposed. No subcommands: which query runs is decided by which
//! flags are present, dispatched in `commands::run`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "netlist-paths")]
#[command(about = "Query structural paths through a flattened hardware netlist", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input netlist XML file(s). Exactly one is required unless
    /// `--compile` is given, in which case every file is a Verilog/SystemVerilog
    /// source handed to the front-end compiler.
    pub input: Vec<PathBuf>,

    /// Name of the path start point.
    #[arg(long)]
    pub from: Option<String>,

    /// Name of the path finish point.
    #[arg(long)]
    pub to: Option<String>,

    /// An interior through-point the path must cross, repeatable, in order.
    #[arg(long)]
    pub through: Vec<String>,

    /// A point the path must not cross, repeatable.
    #[arg(long)]
    pub avoid: Vec<String>,

    /// Report every path between the resolved points rather than one.
    #[arg(long)]
    pub allpaths: bool,

    /// List start points only (implies a restricted name listing).
    #[arg(long)]
    pub startpoints: bool,

    /// List finish points only.
    #[arg(long)]
    pub endpoints: bool,

    /// Report every path fanning out from `--from`.
    #[arg(long)]
    pub fanout: bool,

    /// Report every path fanning in to `--to`.
    #[arg(long)]
    pub fanin: bool,

    /// Include logic vertices (not just variables) in path reports.
    #[arg(long)]
    pub reportlogic: bool,

    /// Include source file/line information in path reports.
    #[arg(long)]
    pub filenames: bool,

    /// Cross register boundaries during traversal instead of stopping at them.
    #[arg(long)]
    pub traverse_registers: bool,

    /// Use wildcard (`*`/`?`) name matching instead of exact matching.
    #[arg(long)]
    pub wildcard: bool,

    /// Use regular-expression name matching instead of exact matching.
    #[arg(long)]
    pub regex: bool,

    /// Do not fail on an ambiguous name match; use the first candidate.
    #[arg(long)]
    pub match_any: bool,

    /// Run the external front-end compiler to produce the netlist XML
    /// instead of reading a pre-generated XML file.
    #[arg(long)]
    pub compile: bool,

    /// Front-end include path, repeatable, compile mode only.
    #[arg(short = 'I', long = "include")]
    pub include: Vec<PathBuf>,

    /// Front-end preprocessor define, repeatable, compile mode only.
    #[arg(short = 'D', long = "define")]
    pub define: Vec<String>,

    /// Write a Graphviz dotfile of the whole graph instead of running a query.
    #[arg(long)]
    pub dotfile: bool,

    /// List every name matching `--from` (or every name, if unset) instead
    /// of running a path query.
    #[arg(long)]
    pub dumpnames: bool,

    /// Destination for `--dotfile`/`--compile` output; defaults to
    /// `a.dot`/`a.xml` respectively.
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Increase log verbosity to info/debug.
    #[arg(short, long)]
    pub verbose: bool,

    /// Increase log verbosity to trace.
    #[arg(short, long)]
    pub debug: bool,
}
