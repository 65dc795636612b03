//! # Ingest
//!
//! Translates a Verilator-style flattened XML AST document into a raw
//! [`Graph`]. The XML is first materialized into a small in-memory
//! [`AstNode`] tree (so forward-reference lookahead and repeated child
//! iteration during type-table resolution are cheap), then walked by a
//! recursive-descent visitor driven by a dispatch table keyed on tag name.
//!
//! Two explicit stacks carry context through the walk: `logic_parents` (the
//! enclosing logic vertex, if any) and `scope_parents`. Two booleans,
//! `is_delayed_assign` and `is_l_value`, track the kind of assignment and
//! which side of it is currently being visited.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

use crate::dtype::{DTypeId, DTypeKind, Member, Range};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::vertex::{AstKind, Direction};

/// A materialized XML element: tag name, attributes, and children in
/// document order. Text nodes are dropped — every fact ingest needs is
/// carried in attributes.
#[derive(Debug, Clone)]
struct AstNode {
    tag: String,
    attrs: HashMap<String, String>,
    children: Vec<AstNode>,
}

impl AstNode {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn required_attr(&self, name: &str) -> Result<&str> {
        self.attr(name).ok_or_else(|| {
            Error::InvalidDocument(format!("<{}> missing required attribute {name:?}", self.tag))
        })
    }

    fn find_child(&self, tag: &str) -> Option<&AstNode> {
        self.children.iter().find(|c| c.tag == tag)
    }
}

/// Parse a buffer of XML text into an `AstNode` tree rooted at the document
/// element.
fn parse_document(xml: &str) -> Result<AstNode> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<AstNode> = Vec::new();
    let mut root: Option<AstNode> = None;

    loop {
        match reader
            .read_event()
            .map_err(|e| Error::InvalidDocument(format!("XML parse error: {e}")))?
        {
            Event::Eof => break,
            Event::Start(e) => {
                stack.push(read_node(&e, false, &reader)?);
            }
            Event::Empty(e) => {
                let node = read_node(&e, true, &reader)?;
                push_or_root(&mut stack, &mut root, node);
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    Error::InvalidDocument("unbalanced XML closing tag".to_string())
                })?;
                push_or_root(&mut stack, &mut root, node);
            }
            _ => {}
        }
    }

    root.ok_or_else(|| Error::InvalidDocument("empty XML document".to_string()))
}

fn push_or_root(stack: &mut Vec<AstNode>, root: &mut Option<AstNode>, node: AstNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        *root = Some(node);
    }
}

fn read_node(
    e: &quick_xml::events::BytesStart,
    _empty: bool,
    reader: &Reader<&[u8]>,
) -> Result<AstNode> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = HashMap::new();
    for a in e.attributes() {
        let a = a.map_err(|e| Error::InvalidDocument(format!("bad attribute: {e}")))?;
        let key = String::from_utf8_lossy(a.key.as_ref()).into_owned();
        let value = a
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| Error::InvalidDocument(format!("bad attribute value: {e}")))?
            .into_owned();
        attrs.insert(key, value);
    }
    Ok(AstNode {
        tag,
        attrs,
        children: Vec::new(),
    })
}

/// A scope tracking which canonical variable names are visible within it.
#[derive(Debug, Default)]
struct Scope {
    vars: HashMap<String, crate::vertex::VertexId>,
}

/// Stateful visitor translating an `AstNode` document into a [`Graph`].
struct Ingest {
    graph: Graph,
    scope_parents: Vec<Scope>,
    current_scope: Option<Scope>,
    logic_parents: Vec<Option<crate::vertex::VertexId>>,
    current_logic: Option<crate::vertex::VertexId>,
    is_delayed_assign: bool,
    is_l_value: bool,
    top_name: Option<String>,
    /// Canonical name -> vertex, visible across every scope (the document
    /// is flattened, so there is exactly one level of var scoping).
    vars: HashMap<String, crate::vertex::VertexId>,
    dtype_ids: HashMap<String, DTypeId>,
    next_dtype_id: u32,
}

/// Ingest a Verilator-style XML AST document into a fresh, raw `Graph`.
/// The graph is not yet normalized — callers must run
/// [`crate::transform::normalize`] before querying it.
pub fn ingest(xml: &str) -> Result<Graph> {
    let doc = parse_document(xml)?;
    if doc.tag != "verilator_xml" {
        return Err(Error::InvalidDocument(format!(
            "expected root element <verilator_xml>, found <{}>",
            doc.tag
        )));
    }

    let mut ingest = Ingest {
        graph: Graph::new(),
        scope_parents: Vec::new(),
        current_scope: None,
        logic_parents: Vec::new(),
        current_logic: None,
        is_delayed_assign: false,
        is_l_value: false,
        top_name: None,
        vars: HashMap::new(),
        dtype_ids: HashMap::new(),
        next_dtype_id: 0,
    };

    let netlist = doc
        .find_child("netlist")
        .ok_or_else(|| Error::InvalidDocument("missing <netlist> element".to_string()))?;

    let type_table = netlist
        .find_child("typetable")
        .ok_or_else(|| Error::InvalidDocument("missing <typetable> element".to_string()))?;

    // Pass one: reserve a stub per id so every later `DTypeId` reference is
    // valid to construct, even before its own kind is resolved.
    for node in &type_table.children {
        ingest.reserve_dtype(node)?;
    }
    // Pass two: patch sub-descriptor references now that every id exists.
    for node in &type_table.children {
        ingest.resolve_dtype(node)?;
    }
    debug!(count = type_table.children.len(), "type table entries");

    let modules: Vec<&AstNode> = netlist.children.iter().filter(|n| n.tag == "module").collect();
    let interfaces = netlist.children.iter().filter(|n| n.tag == "iface").count();

    if modules.len() == 1 && interfaces == 0 {
        ingest.visit_module(modules[0])?;
    } else {
        return Err(Error::Unsupported(format!(
            "netlist is not flat: {} modules, {interfaces} interfaces",
            modules.len()
        )));
    }

    Ok(ingest.graph)
}

impl Ingest {
    // -------------------------------------------------------------------
    // Type table
    // -------------------------------------------------------------------

    fn dtype_id(&mut self, raw_id: &str) -> DTypeId {
        if let Some(&id) = self.dtype_ids.get(raw_id) {
            return id;
        }
        let id = DTypeId(self.next_dtype_id);
        self.next_dtype_id += 1;
        self.dtype_ids.insert(raw_id.to_string(), id);
        id
    }

    fn reserve_dtype(&mut self, node: &AstNode) -> Result<()> {
        let Some(raw_id) = node.attr("id") else {
            return Ok(());
        };
        let id = self.dtype_id(raw_id);
        let name = node.attr("name").map(str::to_string);
        let location = node.attr("loc").unwrap_or_default().to_string();
        let stub = match node.tag.as_str() {
            "basicdtype" => DTypeKind::Basic {
                range: basic_range(node)?,
            },
            "voiddtype" => DTypeKind::Void,
            "classrefdtype" => DTypeKind::ClassRef,
            "ifacerefdtype" => DTypeKind::InterfaceRef,
            _ => DTypeKind::Void,
        };
        self.graph.types_mut().reserve_at(id, name, location, stub);
        Ok(())
    }

    fn resolve_dtype(&mut self, node: &AstNode) -> Result<()> {
        let Some(raw_id) = node.attr("id") else {
            return Ok(());
        };
        let id = self.dtype_id(raw_id);
        match node.tag.as_str() {
            "basicdtype" | "voiddtype" | "classrefdtype" => {
                // Already fully resolved in pass one.
            }
            "refdtype" => {
                let sub = node.required_attr("sub_dtype_id")?;
                let target = self.dtype_id(sub);
                self.graph.types_mut().resolve(id, DTypeKind::Ref { target });
            }
            "packarraydtype" | "unpackarraydtype" => {
                let sub = node.required_attr("sub_dtype_id")?;
                let element = self.dtype_id(sub);
                let range_node = node.children.first().ok_or_else(|| {
                    Error::InvalidDocument(format!("<{}> expects one range child", node.tag))
                })?;
                let range = visit_range(range_node)?;
                self.graph.types_mut().resolve(
                    id,
                    DTypeKind::Array {
                        range,
                        packed: node.tag == "packarraydtype",
                        element,
                    },
                );
            }
            "structdtype" | "uniondtype" => {
                let members = self.visit_members(node)?;
                let packed = node.attr("packed").is_some_and(|v| v != "false");
                let kind = if node.tag == "structdtype" {
                    DTypeKind::Struct { packed, members }
                } else {
                    DTypeKind::Union { packed, members }
                };
                self.graph.types_mut().resolve(id, kind);
            }
            "enumdtype" => {
                let sub = node.attr("sub_dtype_id").map(|s| self.dtype_id(s));
                let items = node
                    .children
                    .iter()
                    .filter(|c| c.tag == "enumitem")
                    .map(|c| c.required_attr("name").map(str::to_string))
                    .collect::<Result<Vec<_>>>()?;
                self.graph.types_mut().resolve(
                    id,
                    DTypeKind::Enum {
                        underlying: sub,
                        items,
                    },
                );
            }
            "ifacerefdtype" => {}
            other => {
                warn!(tag = other, "unrecognised type table node");
            }
        }
        Ok(())
    }

    fn visit_members(&mut self, node: &AstNode) -> Result<Vec<Member>> {
        node.children
            .iter()
            .filter(|c| c.tag == "memberdtype")
            .map(|c| {
                let name = c.required_attr("name")?.to_string();
                let sub = c.required_attr("sub_dtype_id")?;
                Ok(Member {
                    name,
                    dtype: self.dtype_id(sub),
                })
            })
            .collect()
    }

    // -------------------------------------------------------------------
    // Scopes, naming
    // -------------------------------------------------------------------

    fn enter_scope(&mut self) {
        self.scope_parents.push(self.current_scope.take().unwrap_or_default());
        self.current_scope = Some(Scope::default());
    }

    fn exit_scope(&mut self) {
        self.current_scope = self.scope_parents.pop();
    }

    /// Qualify a bare reference name with the inferred top prefix, mirroring
    /// the document's own convention that a directly declared top-level
    /// port keeps its bare name while every other variable is already
    /// written with its full hierarchy path (e.g. `m.a`). Only used as a
    /// fallback when an exact-name lookup misses.
    fn add_top_prefix(&self, name: &str) -> Option<String> {
        let top = self.top_name.as_ref()?;
        if name.starts_with(top.as_str()) {
            None
        } else {
            Some(format!("{top}.{name}"))
        }
    }

    /// Infer (and cross-check) the top hierarchy prefix from the first
    /// dotted, non-synthesized name declared directly in the module scope.
    fn maybe_set_top_name(&mut self, name: &str) -> Result<()> {
        if !self.scope_parents.is_empty() {
            return Ok(());
        }
        let Some(pos) = name.find('.') else {
            return Ok(());
        };
        if name.starts_with("__V") {
            return Ok(());
        }
        let prefix = &name[..pos];
        match &self.top_name {
            None => {
                debug!(top = prefix, "inferred top module name");
                self.top_name = Some(prefix.to_string());
            }
            Some(top) if top != prefix => {
                return Err(Error::InvalidDocument(format!(
                    "name {name:?} does not share inferred top prefix {top:?}"
                )));
            }
            Some(_) => {}
        }
        Ok(())
    }

    fn lookup_var(&self, name: &str) -> Option<crate::vertex::VertexId> {
        self.vars.get(name).copied().or_else(|| {
            let extended = self.add_top_prefix(name)?;
            self.vars.get(&extended).copied()
        })
    }

    // -------------------------------------------------------------------
    // Statement / variable visitors
    // -------------------------------------------------------------------

    fn new_var(&mut self, node: &AstNode) -> Result<()> {
        let name = node.required_attr("name")?.to_string();
        let location = node.attr("loc").unwrap_or_default().to_string();
        let dtype_id_raw = node.attr("dtype_id");
        let dtype = dtype_id_raw.map(|raw| self.dtype_id(raw));
        let direction = match node.attr("dir") {
            Some(d) => parse_direction(d),
            None => Direction::None,
        };

        let (is_param, param_value) = match node.find_child("const") {
            Some(const_node) if node.attr("param").is_some() => (
                true,
                Some(const_node.attr("name").unwrap_or_default().to_string()),
            ),
            _ => (false, None),
        };
        let is_public = node.attr("public").is_some();

        self.maybe_set_top_name(&name)?;

        let kind = if direction == Direction::None {
            AstKind::Var
        } else {
            AstKind::Port
        };

        let vertex = self.graph.add_var_vertex(
            kind,
            direction,
            location,
            dtype,
            name.clone(),
            is_param,
            param_value,
            is_public,
        );

        if let std::collections::hash_map::Entry::Vacant(e) = self.vars.entry(name.clone()) {
            e.insert(vertex);
            if let Some(scope) = &mut self.current_scope {
                scope.vars.insert(name.clone(), vertex);
            }
        } else {
            debug!(name = %name, "variable already exists in scope");
        }

        // Reconcile the flattened and original port views: an `origName`
        // matching a public port gets bidirectional edges and inherits the
        // public side's direction.
        if let Some(orig_name) = node.attr("origName") {
            if let Some(&public_vertex) = self.vars.get(orig_name) {
                let is_port = self
                    .graph
                    .vertex(public_vertex)
                    .is_some_and(crate::vertex::Vertex::is_port);
                if public_vertex != vertex && is_port && !is_param {
                    self.graph.add_edge(public_vertex, vertex, false);
                    self.graph.add_edge(vertex, public_vertex, false);
                    self.graph.add_port_alias(public_vertex, vertex);
                    if let Some(dir) = self.graph.vertex(public_vertex).map(|v| v.direction) {
                        self.graph.set_vertex_direction(vertex, dir);
                    }
                }
            }
        }

        Ok(())
    }

    fn new_statement(&mut self, node: &AstNode, kind: AstKind) -> Result<()> {
        if self.current_scope.is_none() {
            return Ok(());
        }
        let location = node.attr("loc").unwrap_or_default().to_string();
        self.logic_parents.push(self.current_logic);
        let vertex = self.graph.add_logic_vertex(kind, location);
        if let Some(parent) = self.logic_parents.last().copied().flatten() {
            self.graph.add_edge(parent, vertex, false);
        }
        self.current_logic = Some(vertex);

        let is_assign = matches!(
            kind,
            AstKind::Assign | AstKind::AssignAlias | AstKind::AssignDly | AstKind::AssignW
        );
        if is_assign {
            if node.children.len() != 2 {
                return Err(Error::InvalidDocument(format!(
                    "assign statement at {:?} has {} children, expected 2",
                    node.attr("loc"),
                    node.children.len()
                )));
            }
            let was_delayed = self.is_delayed_assign;
            if kind == AstKind::AssignDly {
                self.is_delayed_assign = true;
            }
            self.is_l_value = false;
            self.visit(&node.children[0])?;
            self.is_l_value = true;
            self.visit(&node.children[1])?;
            self.is_l_value = false;
            self.is_delayed_assign = was_delayed;
        } else {
            for child in &node.children {
                self.visit(child)?;
            }
        }

        self.current_logic = self.logic_parents.pop().flatten();
        Ok(())
    }

    fn new_var_ref(&mut self, node: &AstNode) -> Result<()> {
        if self.current_scope.is_none() {
            return Ok(());
        }
        let name = node.required_attr("name")?;
        let Some(current_logic) = self.current_logic else {
            return Err(Error::InvalidDocument(format!(
                "var {name} referenced outside a logic block"
            )));
        };
        let Some(var_vertex) = self.lookup_var(name) else {
            warn!(name, "var reference did not resolve to a vertex");
            return Ok(());
        };

        if self.is_l_value {
            self.graph.add_edge(current_logic, var_vertex, false);
            if self.is_delayed_assign {
                self.graph.set_vertex_dst_reg(var_vertex);
            }
        } else {
            self.graph.add_edge(var_vertex, current_logic, false);
        }

        for child in &node.children {
            self.visit(child)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------

    fn visit_module(&mut self, node: &AstNode) -> Result<()> {
        for child in &node.children {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit(&mut self, node: &AstNode) -> Result<()> {
        match node.tag.as_str() {
            "scope" | "topscope" => {
                self.enter_scope();
                for child in &node.children {
                    self.visit(child)?;
                }
                self.exit_scope();
            }
            "var" | "varscope" => self.new_var(node)?,
            "varref" => self.new_var_ref(node)?,
            "always" | "alwayspublic" => self.new_statement(node, AstKind::Always)?,
            "initial" => self.new_statement(node, AstKind::Initial)?,
            "assign" | "assignw" | "contassign" => self.new_statement(node, AstKind::Assign)?,
            "assignalias" => self.new_statement(node, AstKind::AssignAlias)?,
            "assigndly" => self.new_statement(node, AstKind::AssignDly)?,
            "if" => self.new_statement(node, AstKind::If)?,
            "case" => self.new_statement(node, AstKind::Case)?,
            "while" => self.new_statement(node, AstKind::While)?,
            "instance" => self.new_statement(node, AstKind::Instance)?,
            "sengate" => self.new_statement(node, AstKind::SenGate)?,
            "readmem" => self.new_statement(node, AstKind::ReadMem)?,
            "jumpblock" => self.new_statement(node, AstKind::JumpBlock)?,
            "cfunc" | "cstmt" | "cmethodcall" => self.new_statement(node, AstKind::CFunc)?,
            "intfref" => {
                // Interfaces are not supported in flattened netlists: walk
                // children without treating this as a var reference.
                for child in &node.children {
                    self.visit(child)?;
                }
            }
            // Pure structural / expression nodes: contribute no vertex or
            // edge, just recurse so nested varrefs are still found.
            "caseitem" | "cnew" | "add" | "sub" | "mul" | "muls" | "and" | "or" | "xor" | "not"
            | "eq" | "neq" | "eqwild" | "lt" | "lte" | "gt" | "gte" | "lts" | "ltes" | "gts"
            | "gtes" | "shiftl" | "shiftr" | "shiftls" | "shiftrs" | "cond" | "concat" | "sel"
            | "arraysel" | "extend" | "extends" | "negate" | "redand" | "redor" | "redxor"
            | "replicate" | "powsu" | "comment" | "text" | "const" | "jumpgo" | "jumplabel"
            | "sentree" | "senitem" => {
                for child in &node.children {
                    self.visit(child)?;
                }
            }
            other => {
                warn!(tag = other, "unrecognised AST node, visiting children");
                for child in &node.children {
                    self.visit(child)?;
                }
            }
        }
        Ok(())
    }
}

fn parse_direction(raw: &str) -> Direction {
    match raw {
        "input" => Direction::Input,
        "output" => Direction::Output,
        "inout" => Direction::Inout,
        _ => Direction::None,
    }
}

fn basic_range(node: &AstNode) -> Result<Option<Range>> {
    match (node.attr("left"), node.attr("right")) {
        (Some(left), Some(right)) => {
            let left = parse_i64(left, node)?;
            let right = parse_i64(right, node)?;
            Ok(Some(Range { left, right }))
        }
        _ => Ok(None),
    }
}

fn parse_i64(value: &str, node: &AstNode) -> Result<i64> {
    value
        .parse()
        .map_err(|_| Error::InvalidDocument(format!("<{}> has non-numeric bound {value:?}", node.tag)))
}

fn visit_range(node: &AstNode) -> Result<Range> {
    if node.tag != "range" || node.children.len() != 2 {
        return Err(Error::InvalidDocument(
            "<range> expects exactly two <const> children".to_string(),
        ));
    }
    // The source document orders range children [end, start]; the last
    // child is the start (MSB) bound.
    let end = visit_const(&node.children[0])?;
    let start = visit_const(&node.children[1])?;
    Ok(Range {
        left: start,
        right: end,
    })
}

/// Parse a `<const>` node's `name` attribute: plain decimal, `'h` hex, or
/// `'sh` signed-hex.
fn visit_const(node: &AstNode) -> Result<i64> {
    let raw = node.required_attr("name")?;
    if let Some(pos) = raw.rfind("'sh") {
        return i64::from_str_radix(&raw[pos + 3..], 16)
            .map_err(|_| Error::InvalidDocument(format!("malformed signed-hex constant {raw:?}")));
    }
    if let Some(pos) = raw.rfind("'h") {
        return i64::from_str_radix(&raw[pos + 2..], 16)
            .map_err(|_| Error::InvalidDocument(format!("malformed hex constant {raw:?}")));
    }
    raw.parse()
        .map_err(|_| Error::InvalidDocument(format!("malformed decimal constant {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const S1_XML: &str = r#"
<verilator_xml>
  <files>
    <file id="1" filename="m.sv" language="1800-2017"/>
  </files>
  <netlist>
    <typetable>
      <basicdtype id="1" name="logic" loc="1,1,1,1,1"/>
    </typetable>
    <module name="TOP" loc="1,1,1,1,1">
      <topscope loc="1,1,1,1,1">
        <var name="in" dir="input" dtype_id="1" loc="1,1,1,1,1"/>
        <var name="out" dir="output" dtype_id="1" loc="1,1,1,1,1"/>
        <var name="m.a" dtype_id="1" loc="1,1,1,1,1"/>
        <var name="m.b" dtype_id="1" loc="1,1,1,1,1"/>
        <assign loc="1,1,1,1,1">
          <varref name="in" loc="1,1,1,1,1"/>
          <varref name="m.a" loc="1,1,1,1,1"/>
        </assign>
        <assign loc="1,1,1,1,1">
          <varref name="m.a" loc="1,1,1,1,1"/>
          <varref name="m.b" loc="1,1,1,1,1"/>
        </assign>
        <assign loc="1,1,1,1,1">
          <varref name="m.b" loc="1,1,1,1,1"/>
          <varref name="out" loc="1,1,1,1,1"/>
        </assign>
      </topscope>
    </module>
  </netlist>
</verilator_xml>
"#;

    #[test]
    fn ingests_a_combinational_chain() {
        let graph = ingest(S1_XML).expect("ingest succeeds");
        assert_eq!(graph.node_count(), 7); // 4 vars + 3 assigns
        assert_eq!(graph.edge_count(), 6);
        let input = graph.vertices_iter().find(|v| v.name == "in").expect("in");
        assert!(input.top);
        let nested = graph.vertices_iter().find(|v| v.name == "m.a").expect("m.a");
        assert!(!nested.top);
    }

    #[test]
    fn unbalanced_module_count_is_unsupported() {
        let xml = r#"
<verilator_xml>
  <netlist>
    <typetable/>
  </netlist>
</verilator_xml>
"#;
        let err = ingest(xml).expect_err("no modules should be unsupported");
        assert!(matches!(err, Error::Unsupported(_)));
    }

    #[test]
    fn two_phase_type_table_resolves_forward_reference() {
        let xml = r#"
<verilator_xml>
  <netlist>
    <typetable>
      <refdtype id="1" name="word_t" sub_dtype_id="2" loc="1,1,1,1,1"/>
      <basicdtype id="2" name="logic" left="31" right="0" loc="1,1,1,1,1"/>
    </typetable>
    <module name="TOP" loc="1,1,1,1,1">
      <topscope loc="1,1,1,1,1">
        <var name="in" dir="input" dtype_id="1" loc="1,1,1,1,1"/>
      </topscope>
    </module>
  </netlist>
</verilator_xml>
"#;
        let graph = ingest(xml).expect("ingest succeeds");
        let v = graph.vertices_iter().find(|v| v.name == "in").expect("var");
        let dtype = v.dtype.expect("dtype assigned");
        assert_eq!(graph.types().get(dtype).expect("present").width(graph.types()), 32);
    }

    #[test]
    fn malformed_assign_child_count_is_invalid_document() {
        let xml = r#"
<verilator_xml>
  <netlist>
    <typetable/>
    <module name="TOP" loc="1,1,1,1,1">
      <topscope loc="1,1,1,1,1">
        <var name="m.a" dtype_id="1" loc="1,1,1,1,1"/>
        <assign loc="1,1,1,1,1">
          <varref name="m.a" loc="1,1,1,1,1"/>
        </assign>
      </topscope>
    </module>
  </netlist>
</verilator_xml>
"#;
        let err = ingest(xml).expect_err("wrong child count should fail");
        assert!(matches!(err, Error::InvalidDocument(_)));
    }
}
