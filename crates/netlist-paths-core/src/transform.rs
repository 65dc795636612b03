//! # Transform
//!
//! The normalization pipeline a raw, freshly ingested [`Graph`] must run
//! through exactly once before it is queried: register-alias propagation,
//! register splitting, var-alias kind propagation, then a structural
//! sanity pass.

use tracing::debug;

use crate::graph::Graph;

/// Run the full transform pipeline in the required order. `propagate_registers`
/// must run before `split_reg_vertices` (it still sees the unsplit register
/// vertex's out-edges), and `update_var_aliases` must run after (it inspects
/// the `SRC_REG`/`DST_REG` kinds the split assigns).
pub fn normalize(graph: &mut Graph) {
    debug!("propagating register markings");
    graph.propagate_registers();
    debug!("splitting register vertices at read/write boundary");
    graph.split_reg_vertices();
    debug!("propagating register-alias kinds");
    graph.update_var_aliases();
    graph.check_graph();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::{AstKind, Direction};

    #[test]
    fn normalize_splits_every_driven_register() {
        let mut g = Graph::new();
        let clk = g.add_var_vertex(AstKind::Var, Direction::Input, "1,1,1,1,1", None, "top.clk", false, None, true);
        let reg = g.add_var_vertex(AstKind::Var, Direction::None, "1,1,1,1,1", None, "top.q", false, None, false);
        let out = g.add_var_vertex(AstKind::Var, Direction::Output, "1,1,1,1,1", None, "top.out", false, None, true);
        g.set_vertex_dst_reg(reg);
        let always = g.add_logic_vertex(AstKind::Always, "1,1,1,1,1");
        g.add_edge(clk, always, false);
        g.add_edge(always, reg, false);
        let assign = g.add_logic_vertex(AstKind::Assign, "1,1,1,1,1");
        g.add_edge(reg, assign, false);
        g.add_edge(assign, out, false);

        normalize(&mut g);

        let reg_vertex = g.vertex(reg).expect("still present");
        assert_eq!(reg_vertex.kind, AstKind::DstReg);
        assert!(g.node_count() > 5, "splitting should add a SRC_REG half");
    }
}
