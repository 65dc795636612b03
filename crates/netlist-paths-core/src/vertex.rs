//! # Vertex / Edge
//!
//! Pure value types for the netlist graph: node identity, the closed set
//! of AST-derived kinds a node may carry, and the classification
//! predicates every query and transform relies on.

use crate::dtype::DTypeId;

/// Stable identity for a vertex, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

/// Port / register direction, as declared in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Input,
    Output,
    Inout,
}

/// The closed set of AST node kinds a vertex may represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstKind {
    Var,
    Logic,
    Always,
    Assign,
    AssignDly,
    AssignAlias,
    AssignW,
    SrcReg,
    DstReg,
    SrcRegAlias,
    DstRegAlias,
    Port,
    If,
    Case,
    CFunc,
    While,
    Initial,
    Instance,
    SenGate,
    ReadMem,
    JumpBlock,
    Sformatf,
}

impl AstKind {
    /// A vertex is a *variable* iff its kind is one of these; all other
    /// kinds are *logic*.
    #[must_use]
    pub fn is_variable(self) -> bool {
        matches!(
            self,
            AstKind::Var
                | AstKind::Port
                | AstKind::SrcReg
                | AstKind::DstReg
                | AstKind::SrcRegAlias
                | AstKind::DstRegAlias
        )
    }
}

/// Prefixes the front-end compiler uses for synthesized names that should
/// never surface in a query result.
pub const SYNTHESIZED_NAME_PREFIXES: &[&str] = &["__Vdly", "__Vcell", "__Vconc", "__Vfunc"];

/// A node in the netlist graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: VertexId,
    pub kind: AstKind,
    pub direction: Direction,
    pub location: String,
    pub dtype: Option<DTypeId>,
    pub name: String,
    pub is_param: bool,
    pub param_value: Option<String>,
    pub is_public: bool,
    pub top: bool,
    pub deleted: bool,
}

impl Vertex {
    #[must_use]
    pub fn new_logic(id: VertexId, kind: AstKind, location: String) -> Self {
        Self {
            id,
            kind,
            direction: Direction::None,
            location,
            dtype: None,
            name: String::new(),
            is_param: false,
            param_value: None,
            is_public: false,
            top: false,
            deleted: false,
        }
    }

    #[must_use]
    pub fn new_var(
        id: VertexId,
        kind: AstKind,
        direction: Direction,
        location: String,
        dtype: Option<DTypeId>,
        name: String,
        is_param: bool,
        param_value: Option<String>,
        is_public: bool,
    ) -> Self {
        let top = !name.contains('.');
        Self {
            id,
            kind,
            direction,
            location,
            dtype,
            name,
            is_param,
            param_value,
            is_public,
            top,
            deleted: false,
        }
    }

    #[must_use]
    pub fn is_variable(&self) -> bool {
        self.kind.is_variable()
    }

    #[must_use]
    pub fn is_reg(&self) -> bool {
        matches!(self.kind, AstKind::SrcReg | AstKind::DstReg)
    }

    #[must_use]
    pub fn is_reg_alias(&self) -> bool {
        matches!(self.kind, AstKind::SrcRegAlias | AstKind::DstRegAlias)
    }

    #[must_use]
    pub fn is_port(&self) -> bool {
        self.kind == AstKind::Port
            || (self.top && self.is_reg() && self.direction == Direction::Output)
    }

    #[must_use]
    pub fn is_net(&self) -> bool {
        self.is_variable() && !self.is_port() && !self.is_reg() && !self.is_param
    }

    #[must_use]
    pub fn can_ignore(&self) -> bool {
        SYNTHESIZED_NAME_PREFIXES
            .iter()
            .any(|prefix| self.name.contains(prefix))
    }

    #[must_use]
    pub fn is_comb_start(&self) -> bool {
        matches!(self.kind, AstKind::SrcReg | AstKind::SrcRegAlias)
            || (self.top && matches!(self.direction, Direction::Input | Direction::Inout))
    }

    #[must_use]
    pub fn is_comb_finish(&self) -> bool {
        matches!(self.kind, AstKind::DstReg | AstKind::DstRegAlias)
            || (self.top && matches!(self.direction, Direction::Output | Direction::Inout))
    }

    /// Whether this vertex may serve as a path start, given whether the
    /// query restricts starts to comb-start vertices (register-restricted
    /// mode) or allows any non-destination, non-synthesized vertex.
    #[must_use]
    pub fn is_start_point(&self, restrict_to_registers: bool) -> bool {
        if restrict_to_registers {
            self.is_comb_start()
        } else {
            !matches!(self.kind, AstKind::DstReg | AstKind::DstRegAlias)
                && !self.can_ignore()
                && !self.deleted
        }
    }

    /// Symmetric counterpart of `is_start_point` for path finishes.
    #[must_use]
    pub fn is_finish_point(&self, restrict_to_registers: bool) -> bool {
        if restrict_to_registers {
            self.is_comb_finish()
        } else {
            !matches!(self.kind, AstKind::SrcReg | AstKind::SrcRegAlias)
                && !self.can_ignore()
                && !self.deleted
        }
    }

    /// Whether this vertex may serve as an interior (through or avoid)
    /// waypoint. `traverse_registers` widens eligibility to any named
    /// vertex, matching the wider set of valid through-points when
    /// register boundaries are being crossed.
    #[must_use]
    pub fn is_mid_point(&self, traverse_registers: bool) -> bool {
        if traverse_registers {
            !self.name.is_empty()
        } else {
            !self.is_comb_start() && !self.is_comb_finish() && !self.can_ignore() && !self.deleted
        }
    }

    /// Total order over (name, kind-discriminant, direction, deleted),
    /// used to produce stable listings.
    #[must_use]
    pub fn compare_key(&self) -> (&str, u8, u8, bool) {
        (&self.name, self.kind as u8, self.direction as u8, self.deleted)
    }
}

/// A directed connection between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: VertexId,
    pub dst: VertexId,
    pub through_register: bool,
}

impl Edge {
    #[must_use]
    pub fn new(src: VertexId, dst: VertexId, through_register: bool) -> Self {
        Self {
            src,
            dst,
            through_register,
        }
    }
}
