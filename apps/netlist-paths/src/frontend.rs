//! # Front-end runner
//!
//! Invokes the external AST-producing compiler as a subprocess. This
//! module owns the exact flag set the front-end has always required for
//! compatibility; it contains no parsing logic of its own.

use std::path::{Path, PathBuf};
use std::process::Command;

use netlist_paths_core::Error;
use tracing::debug;

/// Run the front-end compiler over `sources`, producing a flattened XML
/// AST document at `xml_output`. Returns `Error::Io` if the subprocess
/// cannot be started or exits non-zero.
pub fn compile(
    sources: &[PathBuf],
    includes: &[PathBuf],
    defines: &[String],
    xml_output: &Path,
) -> Result<(), Error> {
    let mut cmd = Command::new("verilator");
    cmd.arg("+1800-2012ext+.sv")
        .arg("--bbox-sys")
        .arg("--bbox-unsup")
        .arg("--xml-only")
        .arg("--flatten")
        .arg("--error-limit")
        .arg("10000")
        .arg("--xml-output")
        .arg(xml_output);

    for include in includes {
        cmd.arg(format!("+incdir+{}", include.display()));
    }
    for define in defines {
        cmd.arg(format!("-D{define}"));
    }
    for source in sources {
        cmd.arg(source);
    }

    debug!(?cmd, "invoking front-end compiler");
    let status = cmd.status().map_err(|e| Error::Io(e.to_string()))?;
    if !status.success() {
        return Err(Error::Io(format!(
            "front-end compiler exited with status {status}"
        )));
    }
    Ok(())
}
