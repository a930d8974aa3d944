//! CLI command definitions

use clap::Parser;
use sweep_domain::DEFAULT_EXEC_FOLDER;

/// CLI arguments for solver-sweep
#[derive(Parser, Debug)]
#[command(name = "solver-sweep")]
#[command(author, version, about = "Parameter-sweep benchmark driver for the QR-algorithm solver")]
#[command(long_about = r#"
Runs the QR-algorithm solver once for every combination of input matrix and
thread level, one run at a time, stopping at the first failure.

Each run is announced before it starts:
  Exec samples=<s> threads=<t> iterations=<i> file=<matrix>

The solver is looked up as <root>/<exec-folder>/qr_algo and the matrices in
<root>/data. <root> is the nearest directory above the solver-sweep binary that
holds a data/ directory or a sweep.toml (a build in <root>/target/release/
finds <root>); if there is none, the workspace the binary was built from is
used. An optional <root>/sweep.toml overrides the sweep sequences.

Example:
  solver-sweep
  solver-sweep --exec-folder cmake-build-debug
"#)]
pub struct Cli {
    /// Directory (relative to the execution root) containing the solver binary
    #[arg(long = "exec-folder", value_name = "DIR", default_value = DEFAULT_EXEC_FOLDER)]
    pub exec_folder: String,
}
