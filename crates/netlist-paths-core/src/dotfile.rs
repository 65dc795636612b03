//! # Dotfile writer
//!
//! Renders a [`Graph`] as a Graphviz `digraph` so it can be piped through
//! `dot`/`xdot` for visual inspection. Pure formatting: callers choose
//! where the bytes go.

use std::io::{self, Write};

use crate::graph::Graph;

/// Write `graph` as a Graphviz digraph to `out`. Deleted vertices are
/// skipped; a synthetic `through_register` edge is labelled so it is
/// visually distinguishable from a combinational one.
pub fn write_dot(graph: &Graph, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "digraph netlist {{")?;
    for v in graph.vertices_iter().filter(|v| !v.deleted) {
        writeln!(
            out,
            "  {} [label=\"{}\", type=\"{:?}\"];",
            v.id.0,
            escape(&v.name),
            v.kind
        )?;
    }
    for edge in graph.edges_iter() {
        let endpoints_live = graph.vertex(edge.src).is_some_and(|v| !v.deleted)
            && graph.vertex(edge.dst).is_some_and(|v| !v.deleted);
        if !endpoints_live {
            continue;
        }
        if edge.through_register {
            writeln!(out, "  {} -> {} [label=\"reg\"];", edge.src.0, edge.dst.0)?;
        } else {
            writeln!(out, "  {} -> {};", edge.src.0, edge.dst.0)?;
        }
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn escape(name: &str) -> String {
    name.replace('"', "\\\"")
}
