//! Run Sweep use case
//!
//! Enumerates every (parameter triple, thread level) combination and runs the
//! external solver once for each, strictly one after another.
//!
//! # Flow
//!
//! 1. **Plan** - Pair the configured sequences and cross them with the thread
//!    levels ([`SweepConfig::plan`])
//! 2. **Check inputs** - If an [`InputProbe`] is attached, verify every input
//!    matrix before anything is launched
//! 3. **Describe, then execute** - For each combination, notify progress with
//!    the resolved invocation, then run the solver and wait for it
//! 4. **Fail fast** - The first launch error or non-zero exit ends the sweep
//!
//! There is no retry, timeout or cancellation: each run is waited on for as
//! long as it takes.

use crate::config::SweepConfig;
use crate::ports::input_probe::InputProbe;
use crate::ports::progress::{NoProgress, SweepProgressNotifier};
use crate::ports::solver_launcher::{LaunchError, SolverLauncher};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use sweep_domain::{DomainError, ExecutionLayout, InvocationDescriptor, SolverExit, SweepPlan};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a sweep
///
/// Every variant aborts the remainder of the sweep.
#[derive(Error, Debug)]
pub enum RunSweepError {
    /// The sweep could not be enumerated. Nothing was launched.
    #[error("Invalid sweep configuration: {0}")]
    Config(#[from] DomainError),

    /// An input matrix is missing. Nothing was launched.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The solver process could not be started.
    #[error("Run {ordinal}/{total} could not be launched: {invocation}")]
    Launch {
        ordinal: usize,
        total: usize,
        invocation: InvocationDescriptor,
        #[source]
        source: LaunchError,
    },

    /// The solver ran and reported failure.
    #[error("Run {ordinal}/{total} failed with {exit}: {invocation}")]
    SolverFailed {
        ordinal: usize,
        total: usize,
        invocation: InvocationDescriptor,
        exit: SolverExit,
    },
}

impl RunSweepError {
    /// Whether the error was detected before any solver process started
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            RunSweepError::Config(_) | RunSweepError::MissingInput(_)
        )
    }

    /// 1-based position of the run that failed, if a run was attempted
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            RunSweepError::Launch { ordinal, .. } | RunSweepError::SolverFailed { ordinal, .. } => {
                Some(*ordinal)
            }
            _ => None,
        }
    }
}

/// Input for the RunSweep use case
#[derive(Debug, Clone)]
pub struct RunSweepInput {
    /// Sequences to enumerate
    pub config: SweepConfig,
    /// Where the solver and the input matrices live
    pub layout: ExecutionLayout,
}

impl RunSweepInput {
    pub fn new(config: SweepConfig, layout: ExecutionLayout) -> Self {
        Self { config, layout }
    }
}

/// Output of a completed sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSweepOutput {
    /// Number of solver runs, all of which succeeded
    pub invocations: usize,
    /// Wall-clock time for the whole sweep
    pub elapsed: Duration,
}

/// Use case for running a parameter sweep against the solver
pub struct RunSweepUseCase<L: SolverLauncher + 'static> {
    launcher: Arc<L>,
    input_probe: Option<Arc<dyn InputProbe>>,
}

impl<L: SolverLauncher + 'static> RunSweepUseCase<L> {
    pub fn new(launcher: Arc<L>) -> Self {
        Self {
            launcher,
            input_probe: None,
        }
    }

    /// Verify every input matrix exists before the first launch
    pub fn with_input_probe(mut self, probe: Arc<dyn InputProbe>) -> Self {
        self.input_probe = Some(probe);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, input: RunSweepInput) -> Result<RunSweepOutput, RunSweepError> {
        self.execute_with_progress(input, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        input: RunSweepInput,
        progress: &dyn SweepProgressNotifier,
    ) -> Result<RunSweepOutput, RunSweepError> {
        let plan = input.config.plan()?;
        let total = plan.len();

        if !input.config.spec().is_aligned() {
            warn!(
                "Sweep sequences differ in length ({} files, {} samples, {} iterations); truncating to {} triples",
                input.config.files.len(),
                input.config.samples.len(),
                input.config.iterations.len(),
                plan.triple_count()
            );
        }

        info!(
            "Starting sweep: {} triples x {} thread levels = {} runs",
            plan.triple_count(),
            plan.thread_count(),
            total
        );

        self.check_inputs(&plan, &input.layout)?;

        progress.on_sweep_start(total);
        let started = Instant::now();

        for combination in &plan {
            let invocation = input.layout.describe(combination);

            progress.on_invocation_start(combination, total, &invocation);
            debug!("Launching run {}/{}: {}", combination.ordinal, total, invocation);

            let run_started = Instant::now();
            let exit = match self.launcher.launch(&invocation) {
                Ok(exit) => exit,
                Err(source) => {
                    warn!(
                        "Run {}/{} could not be launched: {}",
                        combination.ordinal, total, source
                    );
                    return Err(RunSweepError::Launch {
                        ordinal: combination.ordinal,
                        total,
                        invocation,
                        source,
                    });
                }
            };
            let elapsed = run_started.elapsed();

            progress.on_invocation_complete(combination, &exit, elapsed);

            if !exit.success() {
                warn!(
                    "Run {}/{} failed with {}; aborting sweep",
                    combination.ordinal, total, exit
                );
                return Err(RunSweepError::SolverFailed {
                    ordinal: combination.ordinal,
                    total,
                    invocation,
                    exit,
                });
            }

            debug!(
                "Run {}/{} finished in {:.2?}",
                combination.ordinal, total, elapsed
            );
        }

        let elapsed = started.elapsed();
        progress.on_sweep_complete(total, elapsed);
        info!("Sweep complete: {} runs in {:.2?}", total, elapsed);

        Ok(RunSweepOutput {
            invocations: total,
            elapsed,
        })
    }

    fn check_inputs(
        &self,
        plan: &SweepPlan,
        layout: &ExecutionLayout,
    ) -> Result<(), RunSweepError> {
        let Some(probe) = &self.input_probe else {
            return Ok(());
        };

        for file in plan.input_files() {
            let path = layout.input_path(file);
            if !probe.exists(&path) {
                return Err(RunSweepError::MissingInput(path));
            }
        }

        debug!("All {} input files present", plan.input_files().len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::Mutex;
    use sweep_domain::{Combination, PairingPolicy};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Described(usize),
        Launched(Vec<String>),
    }

    type EventLog = Arc<Mutex<Vec<Event>>>;

    enum Behavior {
        Succeed,
        FailAt(usize, i32),
        MissingAt(usize),
    }

    /// Mock launcher that records every argument list it is given
    struct RecordingLauncher {
        events: EventLog,
        behavior: Behavior,
        calls: Mutex<usize>,
    }

    impl RecordingLauncher {
        fn new(events: EventLog, behavior: Behavior) -> Self {
            Self {
                events,
                behavior,
                calls: Mutex::new(0),
            }
        }
    }

    impl SolverLauncher for RecordingLauncher {
        fn launch(&self, invocation: &InvocationDescriptor) -> Result<SolverExit, LaunchError> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                *calls
            };

            match self.behavior {
                Behavior::MissingAt(n) if n == call => {
                    return Err(LaunchError::NotFound {
                        path: invocation.executable.clone(),
                    });
                }
                _ => {}
            }

            let args = invocation
                .args()
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            self.events.lock().unwrap().push(Event::Launched(args));

            match self.behavior {
                Behavior::FailAt(n, code) if n == call => Ok(SolverExit::from_code(code)),
                _ => Ok(SolverExit::from_code(0)),
            }
        }
    }

    /// Tracking progress notifier that shares the launcher's event log
    struct TrackingProgress {
        events: EventLog,
        completed: Mutex<Vec<(usize, SolverExit)>>,
        sweep_total: Mutex<Option<usize>>,
        finished: Mutex<bool>,
    }

    impl TrackingProgress {
        fn new(events: EventLog) -> Self {
            Self {
                events,
                completed: Mutex::new(Vec::new()),
                sweep_total: Mutex::new(None),
                finished: Mutex::new(false),
            }
        }
    }

    impl SweepProgressNotifier for TrackingProgress {
        fn on_sweep_start(&self, total: usize) {
            *self.sweep_total.lock().unwrap() = Some(total);
        }

        fn on_invocation_start(
            &self,
            combination: &Combination,
            _total: usize,
            _invocation: &InvocationDescriptor,
        ) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Described(combination.ordinal));
        }

        fn on_invocation_complete(
            &self,
            combination: &Combination,
            exit: &SolverExit,
            _elapsed: Duration,
        ) {
            self.completed
                .lock()
                .unwrap()
                .push((combination.ordinal, *exit));
        }

        fn on_sweep_complete(&self, _total: usize, _elapsed: Duration) {
            *self.finished.lock().unwrap() = true;
        }
    }

    /// Probe that reports only the listed paths as present
    struct FixedProbe {
        present: HashSet<PathBuf>,
    }

    impl InputProbe for FixedProbe {
        fn exists(&self, path: &Path) -> bool {
            self.present.contains(path)
        }
    }

    fn input() -> RunSweepInput {
        RunSweepInput::new(
            SweepConfig::default(),
            ExecutionLayout::with_defaults("/bench").unwrap(),
        )
    }

    fn launched(events: &EventLog) -> Vec<Vec<String>> {
        events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Event::Launched(args) => Some(args.clone()),
                Event::Described(_) => None,
            })
            .collect()
    }

    fn args(s: &str, t: &str, i: &str, file: &str) -> Vec<String> {
        vec![
            s.to_string(),
            t.to_string(),
            i.to_string(),
            format!("/bench/data/{}", file),
        ]
    }

    #[test]
    fn test_all_combinations_run_in_order() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::Succeed));
        let use_case = RunSweepUseCase::new(launcher);

        let output = use_case.execute(input()).unwrap();

        assert_eq!(output.invocations, 12);
        let runs = launched(&events);
        assert_eq!(runs.len(), 12);
        assert_eq!(runs[0], args("20", "32", "10", "a_500.mtx"));
        assert_eq!(runs[5], args("20", "1", "10", "a_500.mtx"));
        assert_eq!(runs[6], args("5", "32", "15", "a_2500.mtx"));
        assert_eq!(runs[11], args("5", "1", "15", "a_2500.mtx"));

        let threads: Vec<&str> = runs[..6].iter().map(|a| a[1].as_str()).collect();
        assert_eq!(threads, vec!["32", "16", "8", "4", "2", "1"]);
    }

    #[test]
    fn test_executable_path_comes_from_layout() {
        struct PathCheck(Mutex<Vec<PathBuf>>);
        impl SolverLauncher for PathCheck {
            fn launch(
                &self,
                invocation: &InvocationDescriptor,
            ) -> Result<SolverExit, LaunchError> {
                self.0.lock().unwrap().push(invocation.executable.clone());
                Ok(SolverExit::from_code(0))
            }
        }

        let launcher = Arc::new(PathCheck(Mutex::new(Vec::new())));
        let use_case = RunSweepUseCase::new(launcher.clone());
        let layout = ExecutionLayout::new("/bench", "build", "data", "qr_algo").unwrap();

        use_case
            .execute(RunSweepInput::new(SweepConfig::default(), layout))
            .unwrap();

        let paths = launcher.0.lock().unwrap();
        assert_eq!(paths.len(), 12);
        assert!(paths.iter().all(|p| p == Path::new("/bench/build/qr_algo")));
    }

    #[test]
    fn test_progress_precedes_each_launch() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::Succeed));
        let progress = TrackingProgress::new(events.clone());

        RunSweepUseCase::new(launcher)
            .execute_with_progress(input(), &progress)
            .unwrap();

        let log = events.lock().unwrap();
        assert_eq!(log.len(), 24);
        for (i, pair) in log.chunks(2).enumerate() {
            assert_eq!(pair[0], Event::Described(i + 1));
            assert!(matches!(pair[1], Event::Launched(_)));
        }
        assert_eq!(*progress.sweep_total.lock().unwrap(), Some(12));
        assert!(*progress.finished.lock().unwrap());
        assert_eq!(progress.completed.lock().unwrap().len(), 12);
    }

    #[test]
    fn test_solver_failure_halts_sweep() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::FailAt(3, 2)));
        let progress = TrackingProgress::new(events.clone());

        let err = RunSweepUseCase::new(launcher)
            .execute_with_progress(input(), &progress)
            .unwrap_err();

        match &err {
            RunSweepError::SolverFailed {
                ordinal,
                total,
                invocation,
                exit,
            } => {
                assert_eq!(*ordinal, 3);
                assert_eq!(*total, 12);
                assert_eq!(invocation.threads, 8);
                assert_eq!(*exit, SolverExit::from_code(2));
            }
            other => panic!("expected SolverFailed, got {:?}", other),
        }
        assert_eq!(err.ordinal(), Some(3));
        assert!(!err.is_preflight());
        assert_eq!(launched(&events).len(), 3);
        assert!(!*progress.finished.lock().unwrap());
        assert_eq!(
            progress.completed.lock().unwrap().last(),
            Some(&(3, SolverExit::from_code(2)))
        );
    }

    #[test]
    fn test_launch_error_is_distinct_from_solver_failure() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::MissingAt(1)));
        let progress = TrackingProgress::new(events.clone());

        let err = RunSweepUseCase::new(launcher)
            .execute_with_progress(input(), &progress)
            .unwrap_err();

        assert!(matches!(
            err,
            RunSweepError::Launch {
                ordinal: 1,
                source: LaunchError::NotFound { .. },
                ..
            }
        ));
        // described, but never launched
        assert_eq!(*events.lock().unwrap(), vec![Event::Described(1)]);
        assert!(progress.completed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_strict_mismatch_launches_nothing() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::Succeed));
        let mut input = input();
        input.config = input.config.with_triples(
            vec!["a_500.mtx".to_string(), "a_2500.mtx".to_string()],
            vec![20],
            vec![10, 15],
        );

        let err = RunSweepUseCase::new(launcher).execute(input).unwrap_err();

        assert!(matches!(err, RunSweepError::Config(ref e) if e.is_length_mismatch()));
        assert!(err.is_preflight());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_truncate_sweeps_shortest_length() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::Succeed));
        let mut input = input();
        input.config = input
            .config
            .with_triples(
                vec![
                    "a_500.mtx".to_string(),
                    "a_2500.mtx".to_string(),
                    "a_5000.mtx".to_string(),
                ],
                vec![20, 5],
                vec![10, 15, 20],
            )
            .with_pairing(PairingPolicy::Truncate);

        let output = RunSweepUseCase::new(launcher).execute(input).unwrap();

        assert_eq!(output.invocations, 12);
        assert!(
            launched(&events)
                .iter()
                .all(|a| !a[3].ends_with("a_5000.mtx"))
        );
    }

    #[test]
    fn test_missing_input_detected_before_any_launch() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::Succeed));
        let probe = Arc::new(FixedProbe {
            present: [PathBuf::from("/bench/data/a_500.mtx")].into_iter().collect(),
        });

        let err = RunSweepUseCase::new(launcher)
            .with_input_probe(probe)
            .execute(input())
            .unwrap_err();

        match err {
            RunSweepError::MissingInput(path) => {
                assert_eq!(path, PathBuf::from("/bench/data/a_2500.mtx"))
            }
            other => panic!("expected MissingInput, got {:?}", other),
        }
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_probe_with_all_inputs_present_runs_sweep() {
        let events: EventLog = Arc::default();
        let launcher = Arc::new(RecordingLauncher::new(events.clone(), Behavior::Succeed));
        let probe = Arc::new(FixedProbe {
            present: [
                PathBuf::from("/bench/data/a_500.mtx"),
                PathBuf::from("/bench/data/a_2500.mtx"),
            ]
            .into_iter()
            .collect(),
        });

        let output = RunSweepUseCase::new(launcher)
            .with_input_probe(probe)
            .execute(input())
            .unwrap();

        assert_eq!(output.invocations, 12);
    }

    #[test]
    fn test_error_display_names_the_run() {
        let err = RunSweepError::SolverFailed {
            ordinal: 7,
            total: 12,
            invocation: InvocationDescriptor {
                executable: PathBuf::from("/bench/cmake-build-release/qr_algo"),
                samples: 5,
                threads: 32,
                iterations: 15,
                input: PathBuf::from("/bench/data/a_2500.mtx"),
            },
            exit: SolverExit::from_code(1),
        };

        assert_eq!(
            err.to_string(),
            "Run 7/12 failed with exit code 1: /bench/cmake-build-release/qr_algo 5 32 15 /bench/data/a_2500.mtx"
        );
    }
}
