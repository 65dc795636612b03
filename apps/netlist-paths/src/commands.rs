//! # Command dispatch
//!
//! Translates parsed [`Cli`] flags into an `Options`/`Waypoints` pair and
//! exactly one query-façade call, then prints a human-readable report.
//! Report formatting follows the name-listing and path-report conventions
//! of the front-end's historical output: a 4-column name table and a
//! numbered, blank-line-separated path list.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use netlist_paths_core::{self as core, Error, Graph, MatchMode, Options, Path, VertexId, Waypoints};
use tracing::info;

use crate::cli::Cli;
use crate::frontend;

/// Run the command described by `cli` and return the process exit code.
pub fn run(cli: &Cli) -> Result<i32, Error> {
    if cli.compile {
        let outfile = cli
            .outfile
            .clone()
            .unwrap_or_else(|| PathBuf::from("a.xml"));
        frontend::compile(&cli.input, &cli.include, &cli.define, &outfile)?;
        info!(path = %outfile.display(), "wrote compiled netlist XML");
        return Ok(0);
    }

    let Some(input) = cli.input.first() else {
        return Err(Error::InvalidDocument(
            "an input netlist XML file is required".to_string(),
        ));
    };
    let xml = std::fs::read_to_string(input).map_err(Error::from)?;
    let mut graph = core::ingest(&xml)?;
    core::normalize(&mut graph);

    let options = build_options(cli);

    if cli.dotfile {
        let outfile = cli.outfile.clone().unwrap_or_else(|| PathBuf::from("a.dot"));
        let file = File::create(&outfile).map_err(Error::from)?;
        let mut writer = BufWriter::new(file);
        core::dotfile::write_dot(&graph, &mut writer).map_err(Error::from)?;
        info!(path = %outfile.display(), "wrote dotfile");
        return Ok(0);
    }

    if cli.dumpnames {
        let pattern = cli.from.clone().unwrap_or_else(|| default_dumpnames_pattern(&options));
        let ids = core::query::named_vertices(&graph, &pattern, &options)?;
        print_names(&graph, &ids);
        return Ok(0);
    }

    if cli.startpoints || cli.endpoints {
        let pattern = "*".to_string();
        let wildcard_options = Options {
            match_mode: MatchMode::Wildcard,
            ..options
        };
        let restrict = |v: &core::Vertex| {
            if cli.startpoints {
                v.is_start_point(options.restrict_start_points)
            } else {
                v.is_finish_point(options.restrict_finish_points)
            }
        };
        let mut ids = graph.vertices_matching(&pattern, &wildcard_options, restrict)?;
        ids.sort_by_key(|id| id.0);
        print_names(&graph, &ids);
        return Ok(0);
    }

    if cli.fanout || cli.fanin {
        let name = cli
            .from
            .as_ref()
            .filter(|_| cli.fanout)
            .or(cli.to.as_ref())
            .ok_or_else(|| Error::InvalidDocument("--fanout/--fanin require --from/--to".to_string()))?;
        let avoid = resolve_avoid(&graph, &cli.avoid, &options)?;
        let paths = if cli.fanout {
            let start = graph.resolve_one(name, &options, |v| v.is_start_point(options.restrict_start_points))?;
            core::query::fan_out(&graph, start, &avoid, &options)
        } else {
            let finish = graph.resolve_one(name, &options, |v| v.is_finish_point(options.restrict_finish_points))?;
            core::query::fan_in(&graph, finish, &avoid, &options)
        };
        print_path_report(&graph, &paths, cli);
        return Ok(if paths.is_empty() { 1 } else { 0 });
    }

    let from = cli
        .from
        .clone()
        .ok_or_else(|| Error::InvalidDocument("--from is required".to_string()))?;
    let to = cli
        .to
        .clone()
        .ok_or_else(|| Error::InvalidDocument("--to is required".to_string()))?;

    let mut waypoints = Waypoints::start_finish(from, to);
    for through in &cli.through {
        waypoints.add_through(through.clone());
    }
    for avoid in &cli.avoid {
        waypoints.add_avoid(avoid.clone());
    }

    let resolved = core::query::resolve_waypoints(&graph, &waypoints, &options)?;
    let avoid = core::query::resolve_avoid(&graph, &waypoints, &options)?;

    if cli.allpaths {
        let paths = core::query::all_paths(&graph, &resolved, &avoid, &options);
        print_path_report(&graph, &paths, cli);
        Ok(if paths.is_empty() { 1 } else { 0 })
    } else {
        let path = core::query::any_path(&graph, &resolved, &avoid, &options);
        let found = !path.is_empty();
        print_path_report(&graph, std::slice::from_ref(&path), cli);
        Ok(i32::from(!found))
    }
}

fn build_options(cli: &Cli) -> Options {
    let match_mode = if cli.regex {
        MatchMode::Regex
    } else if cli.wildcard {
        MatchMode::Wildcard
    } else {
        MatchMode::Exact
    };
    Options::builder()
        .match_mode(match_mode)
        .traverse_registers(cli.traverse_registers)
        .match_any(cli.match_any)
        .build()
}

fn default_dumpnames_pattern(options: &Options) -> String {
    match options.match_mode {
        MatchMode::Exact => String::new(),
        _ => "*".to_string(),
    }
}

fn resolve_avoid(graph: &Graph, names: &[String], options: &Options) -> Result<BTreeSet<VertexId>, Error> {
    let mut out = BTreeSet::new();
    for name in names {
        out.insert(graph.resolve_one(name, options, |_| true)?);
    }
    Ok(out)
}

/// Five-column aligned table: Name / Type / DType / Direction / Location.
fn print_names(graph: &Graph, ids: &[VertexId]) {
    let width = ids
        .iter()
        .filter_map(|id| graph.vertex(*id))
        .map(|v| v.name.len())
        .max()
        .unwrap_or(4);
    println!(
        "{:width$}  {:<12}  {:<20}  {:<8}  {}",
        "Name", "Type", "DType", "Direction", "Location", width = width
    );
    for id in ids {
        let Some(v) = graph.vertex(*id) else { continue };
        let dtype = v
            .dtype
            .and_then(|d| graph.types().get(d))
            .map(|d| d.to_display_string(graph.types()))
            .unwrap_or_default();
        println!(
            "{:width$}  {:<12}  {:<20}  {:<8}  {}",
            v.name,
            format!("{:?}", v.kind),
            dtype,
            format!("{:?}", v.direction),
            v.location,
            width = width
        );
    }
}

/// Numbered, blank-line-separated path list with a trailing summary,
/// matching the front-end's historical report shape.
fn print_path_report(graph: &Graph, paths: &[Path], cli: &Cli) {
    for (i, path) in paths.iter().enumerate() {
        println!("Path {}", i + 1);
        for &id in path.vertices() {
            let Some(v) = graph.vertex(id) else { continue };
            if v.can_ignore() {
                continue;
            }
            if !cli.reportlogic && !v.is_variable() {
                continue;
            }
            let label = if cli.filenames {
                format!("  {} ({})", v.name, v.location)
            } else {
                format!("  {}", v.name)
            };
            println!("{label}");
        }
        println!();
    }
    println!("Found {} path(s)", paths.iter().filter(|p| !p.is_empty()).count());
}
