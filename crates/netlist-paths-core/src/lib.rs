//! # netlist-paths-core
//!
//! A static analyzer for hardware netlists: given a flattened,
//! Verilator-style XML AST document, builds a directed graph of variables
//! and logic statements and answers combinational-path queries over it —
//! any path, all paths, fan-in, and fan-out — constrained by optional
//! through-points and avoid-points.
//!
//! ## Layout
//!
//! - [`dtype`] — the type-table arena (`DTypeId` handles into a
//!   `TypeTable`), replacing the source format's inheritance-based type
//!   hierarchy with an enum and a two-phase reserve/resolve API.
//! - [`vertex`] — vertex/edge kinds and the boolean predicates ("is this a
//!   start point", "can this be ignored") that drive traversal.
//! - [`graph`] — the `Graph` itself: construction, name resolution,
//!   register splitting, and the DFS-based traversal primitives.
//! - [`ingest`] — translates an XML AST document into a raw `Graph`.
//! - [`transform`] — the normalization pipeline a raw graph runs through
//!   once before it is queried.
//! - [`query`] — the public façade: waypoint resolution and path/fan-in/
//!   fan-out queries.
//! - [`matcher`] — exact/wildcard/regex name matching.
//! - [`options`] — the explicit, immutable `Options` value threaded
//!   through every call instead of process-wide configuration.
//! - [`waypoints`] — the unresolved start/finish/through/avoid name bundle
//!   a caller builds before resolving it against a graph.
//! - [`path`] — the `Path` result type.
//! - [`dotfile`] — Graphviz digraph rendering.
//! - [`error`] — the closed `Error` enum every fallible operation returns.

pub mod dotfile;
pub mod dtype;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod matcher;
pub mod options;
pub mod path;
pub mod query;
pub mod transform;
pub mod vertex;
pub mod waypoints;

pub use dtype::{DType, DTypeId, DTypeKind, Member, Range, TypeTable};
pub use error::{Error, Result};
pub use graph::Graph;
pub use ingest::ingest;
pub use options::{MatchMode, Options, OptionsBuilder};
pub use path::Path;
pub use query::{Query, QueryType};
pub use transform::normalize;
pub use vertex::{AstKind, Direction, Edge, Vertex, VertexId};
pub use waypoints::Waypoints;
