//! CLI smoke tests driving the compiled binary end to end against an
//! S1-shaped fixture: dotfile vertex/edge counts, a successful path
//! report, and the exit-1 path for a disconnected pair.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

const S1_XML: &str = r#"
<verilator_xml>
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
        <var name="unreached" dtype_id="1" loc="1,1,1,1,1"/>
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

fn write_fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(S1_XML.as_bytes()).expect("write fixture");
    file
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_netlist-paths"))
}

#[test]
fn dotfile_vertex_and_edge_counts_match_the_graph() {
    let fixture = write_fixture();
    let dotfile = NamedTempFile::new().expect("create temp dotfile");

    let status = binary()
        .arg(fixture.path())
        .arg("--dotfile")
        .arg("--outfile")
        .arg(dotfile.path())
        .status()
        .expect("run binary");
    assert!(status.success());

    let contents = std::fs::read_to_string(dotfile.path()).expect("read dotfile");
    assert!(contents.starts_with("digraph netlist"));
    // 5 vars + 3 assigns = 8 vertex lines.
    assert_eq!(contents.matches("[label=").count(), 8);
    // in->a, a->b, b->out assigns each carry two edges (var->logic, logic->var) = 6.
    assert_eq!(contents.lines().filter(|l| l.contains("->") && !l.contains("label=")).count(), 6);
}

#[test]
fn from_to_path_exits_zero_and_prints_a_report() {
    let fixture = write_fixture();
    let output = binary()
        .arg(fixture.path())
        .arg("--from")
        .arg("in")
        .arg("--to")
        .arg("out")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("in"));
    assert!(stdout.contains("m.a"));
    assert!(stdout.contains("m.b"));
    assert!(stdout.contains("out"));
    assert!(stdout.contains("Found 1 path(s)"));
}

#[test]
fn disconnected_pair_exits_nonzero() {
    let fixture = write_fixture();
    let output = binary()
        .arg(fixture.path())
        .arg("--from")
        .arg("in")
        .arg("--to")
        .arg("unreached")
        .output()
        .expect("run binary");
    assert!(!output.status.success());
}
