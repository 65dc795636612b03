//! # Query façade
//!
//! The public, stable surface over a normalized [`Graph`]: name resolution
//! for waypoints, path enumeration, and fan-in/fan-out. Everything here
//! takes an explicit [`Options`] rather than reading ambient state, so two
//! callers can run independent queries over the same graph concurrently.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::Graph;
use crate::options::Options;
use crate::path::Path;
use crate::vertex::{Vertex, VertexId};
use crate::waypoints::Waypoints;

/// The kind of query a caller asked for, carried alongside its resolved
/// waypoint/avoid vertex ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    AnyPath,
    AllPaths,
    FanOut,
    FanIn,
}

/// A fully resolved query ready to run against a [`Graph`].
#[derive(Debug, Clone)]
pub struct Query {
    pub kind: QueryType,
    pub waypoints: Vec<VertexId>,
    pub avoid: BTreeSet<VertexId>,
}

impl Query {
    #[must_use]
    pub fn new(kind: QueryType, waypoints: Vec<VertexId>, avoid: BTreeSet<VertexId>) -> Self {
        Self {
            kind,
            waypoints,
            avoid,
        }
    }
}

fn start_accept(options: &Options) -> impl Fn(&Vertex) -> bool + '_ {
    move |v: &Vertex| v.is_start_point(options.restrict_start_points)
}

fn finish_accept(options: &Options) -> impl Fn(&Vertex) -> bool + '_ {
    move |v: &Vertex| v.is_finish_point(options.restrict_finish_points)
}

fn mid_accept(options: &Options) -> impl Fn(&Vertex) -> bool + '_ {
    move |v: &Vertex| v.is_mid_point(options.traverse_registers)
}

/// Resolve a [`Waypoints`] bundle's names to vertex ids, applying the
/// start/finish/mid predicate appropriate to each position.
pub fn resolve_waypoints(
    graph: &Graph,
    waypoints: &Waypoints,
    options: &Options,
) -> Result<Vec<VertexId>> {
    let mut out = Vec::new();
    let through = waypoints.all_through();
    for (i, name) in through.iter().enumerate() {
        let id = if i == 0 {
            graph.resolve_one(name, options, start_accept(options))?
        } else if i == through.len() - 1 {
            graph.resolve_one(name, options, finish_accept(options))?
        } else {
            graph.resolve_one(name, options, mid_accept(options))?
        };
        out.push(id);
    }
    Ok(out)
}

/// Resolve the avoid-name set to vertex ids, with no positional predicate.
pub fn resolve_avoid(graph: &Graph, waypoints: &Waypoints, options: &Options) -> Result<BTreeSet<VertexId>> {
    let mut out = BTreeSet::new();
    for name in waypoints.avoid_names() {
        let id = graph.resolve_one(name, options, |_| true)?;
        out.insert(id);
    }
    Ok(out)
}

/// One path between the resolved waypoints, or an empty path if none
/// exists. "No path" is not an error — callers distinguish it by checking
/// `Path::is_empty`.
pub fn any_path(graph: &Graph, waypoints: &[VertexId], avoid: &BTreeSet<VertexId>, options: &Options) -> Path {
    graph.get_any_point_to_point(waypoints, avoid, options)
}

/// Every path between the resolved waypoints. Empty if none exist.
pub fn all_paths(graph: &Graph, waypoints: &[VertexId], avoid: &BTreeSet<VertexId>, options: &Options) -> Vec<Path> {
    graph.get_all_point_to_point(waypoints, avoid, options)
}

/// Whether any path exists between the resolved waypoints: `¬any_path(..).is_empty()`.
pub fn path_exists(graph: &Graph, waypoints: &[VertexId], avoid: &BTreeSet<VertexId>, options: &Options) -> bool {
    !any_path(graph, waypoints, avoid, options).is_empty()
}

/// All simple paths from `start` to every reachable finish point.
pub fn fan_out(graph: &Graph, start: VertexId, avoid: &BTreeSet<VertexId>, options: &Options) -> Vec<Path> {
    graph.get_all_fan_out(start, avoid, options)
}

/// All simple paths from every reachable start point to `finish`.
pub fn fan_in(graph: &Graph, finish: VertexId, avoid: &BTreeSet<VertexId>, options: &Options) -> Vec<Path> {
    graph.get_all_fan_in(finish, avoid, options)
}

/// Every non-deleted variable vertex whose name matches `pattern`, sorted
/// ascending by id, for `--dumpnames`-style listings.
pub fn named_vertices(graph: &Graph, pattern: &str, options: &Options) -> Result<Vec<VertexId>> {
    let mut ids = graph.vertices_matching(pattern, options, |v| !v.can_ignore())?;
    ids.sort_by_key(|id| id.0);
    Ok(ids)
}
