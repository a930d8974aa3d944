//! Process-backed solver launcher
//!
//! Runs the solver as a child process and waits for it. The child inherits
//! the harness's stdout and stderr, so whatever the solver prints appears
//! directly after the progress line that announced it.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;
use sweep_application::ports::solver_launcher::{LaunchError, SolverLauncher};
use sweep_domain::{InvocationDescriptor, SolverExit};
use tracing::debug;

#[cfg(target_os = "linux")]
use std::os::unix::process::CommandExt;

/// [`SolverLauncher`] that spawns the real executable
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSolverLauncher;

impl ProcessSolverLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &InvocationDescriptor) -> Command {
        let mut cmd = Command::new(&invocation.executable);
        cmd.args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Linux: request kernel to send SIGTERM to the solver when the harness
        // dies, so an interrupted sweep leaves no orphaned run behind.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        cmd
    }
}

impl SolverLauncher for ProcessSolverLauncher {
    fn launch(&self, invocation: &InvocationDescriptor) -> Result<SolverExit, LaunchError> {
        let start = Instant::now();

        let mut child = Self::command(invocation)
            .spawn()
            .map_err(|e| spawn_error(&invocation.executable, e))?;

        debug!("Spawned solver (pid {})", child.id());

        let status = child.wait().map_err(|source| LaunchError::Io {
            path: invocation.executable.clone(),
            source,
        })?;

        let exit = exit_from_status(status);
        debug!(
            "Solver (pid {}) finished with {} after {:.2?}",
            child.id(),
            exit,
            start.elapsed()
        );
        Ok(exit)
    }
}

fn spawn_error(path: &Path, error: io::Error) -> LaunchError {
    let path = path.to_path_buf();
    match error.kind() {
        io::ErrorKind::NotFound => LaunchError::NotFound { path },
        io::ErrorKind::PermissionDenied => LaunchError::NotExecutable { path },
        _ => LaunchError::Io {
            path,
            source: error,
        },
    }
}

fn exit_from_status(status: ExitStatus) -> SolverExit {
    #[cfg(unix)]
    let signal = {
        use std::os::unix::process::ExitStatusExt;
        status.signal()
    };
    #[cfg(not(unix))]
    let signal = None;

    SolverExit {
        code: status.code(),
        signal,
    }
}
