//! Before/after bleaching decay study
//!
//! A study is a list of compound runs, each tagged with the treatment it
//! belongs to. All runs share the same initial concentration and time grid,
//! so they are integrated together as the species of one
//! [`FirstOrderDecay`] scenario and split back into labelled series.
//!
//! # Example
//!
//! ```rust
//! use decay_rs::study::{Study, StudyConfig, Treatment};
//!
//! let result = Study::new(StudyConfig::default()).run()?;
//!
//! assert_eq!(result.series().len(), 6);
//! assert_eq!(result.panel(Treatment::Before).len(), 3);
//! # Ok::<(), String>(())
//! ```

use std::fmt;

use log::{debug, info};

use crate::models::{Compound, FirstOrderDecay};
use crate::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};

// =================================================================================================
// Treatment
// =================================================================================================

/// Which side of the bleaching step a run describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treatment {
    /// Compounds in the bleaching bath
    Before,

    /// Residues left in the water after bleaching
    After,
}

impl Treatment {
    /// Both treatments, in panel order
    pub const ALL: [Treatment; 2] = [Treatment::Before, Treatment::After];

    /// Panel title
    pub fn title(self) -> &'static str {
        match self {
            Treatment::Before => "Decay before bleaching",
            Treatment::After => "Decay after bleaching",
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Treatment::Before => f.write_str("before"),
            Treatment::After => f.write_str("after"),
        }
    }
}

// =================================================================================================
// Configuration
// =================================================================================================

/// One compound in one treatment
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundRun {
    /// Legend label
    pub label: String,

    /// Treatment panel
    pub treatment: Treatment,

    /// Rate constant `k` (1/s)
    pub rate_constant: f64,
}

impl CompoundRun {
    /// Create a run
    pub fn new(label: impl Into<String>, treatment: Treatment, rate_constant: f64) -> Self {
        Self {
            label: label.into(),
            treatment,
            rate_constant,
        }
    }
}

/// Parameters of a study
///
/// `Default` holds the reference bleaching parameters: hydrogen peroxide,
/// chlorine and EDTA before bleaching, and their slower residues after,
/// all from `C₀ = 1.0 mol/L` with `dt = 0.1 s` up to `t_max = 100 s`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    /// Initial concentration shared by every run (mol/L)
    pub initial_concentration: f64,

    /// Integration step (s)
    pub time_step: f64,

    /// Exclusive end of simulated time (s)
    pub horizon: f64,

    /// Runs, in legend order within each treatment
    pub runs: Vec<CompoundRun>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            initial_concentration: 1.0,
            time_step: 0.1,
            horizon: 100.0,
            runs: vec![
                CompoundRun::new("H₂O₂", Treatment::Before, 0.05),
                CompoundRun::new("Chlorine", Treatment::Before, 0.02),
                CompoundRun::new("EDTA", Treatment::Before, 0.005),
                CompoundRun::new("H₂O₂ residue", Treatment::After, 0.03),
                CompoundRun::new("Chlorine residue", Treatment::After, 0.015),
                CompoundRun::new("EDTA residue", Treatment::After, 0.002),
            ],
        }
    }
}

impl StudyConfig {
    /// Solver configuration shared by all runs
    pub fn solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration::new(self.time_step, self.horizon)
    }

    /// Builder pattern: add a run
    pub fn with_run(mut self, run: CompoundRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Check the study can be integrated
    ///
    /// Rate constants and the initial concentration are not checked.
    pub fn validate(&self) -> Result<(), String> {
        if self.runs.is_empty() {
            return Err("Study has no compound runs".to_string());
        }
        self.solver_configuration().validate()
    }
}

// =================================================================================================
// Results
// =================================================================================================

/// Concentration trace of one run
#[derive(Debug, Clone, PartialEq)]
pub struct DecaySeries {
    /// Legend label
    pub label: String,

    /// Treatment panel
    pub treatment: Treatment,

    /// Rate constant `k` (1/s)
    pub rate_constant: f64,

    /// Initial concentration (mol/L), not part of the trace
    pub initial_concentration: f64,

    /// Time grid
    pub time_points: Vec<f64>,

    /// Concentration after the update at each time point
    pub concentrations: Vec<f64>,
}

impl DecaySeries {
    /// Number of points
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// True for an empty grid
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Last concentration, or the initial one for an empty trace
    pub fn final_concentration(&self) -> f64 {
        self.concentrations
            .last()
            .copied()
            .unwrap_or(self.initial_concentration)
    }

    /// Time of the last point
    pub fn final_time(&self) -> f64 {
        self.time_points.last().copied().unwrap_or(0.0)
    }

    /// Half-life `ln 2 / k`
    pub fn half_life(&self) -> f64 {
        self.compound().half_life()
    }

    /// Exact concentration after the same number of updates
    ///
    /// The trace value at `times[i]` has been updated `i + 1` times, so it
    /// is compared with `C₀·exp(-k·(times[i] + dt))`.
    pub fn analytical_final(&self, time_step: f64) -> f64 {
        let elapsed = self.len() as f64 * time_step;
        self.compound().analytical(self.initial_concentration, elapsed)
    }

    fn compound(&self) -> Compound {
        Compound::new(self.label.clone(), self.rate_constant)
    }
}

/// All series of a study
#[derive(Debug, Clone, PartialEq)]
pub struct StudyResult {
    time_step: f64,
    series: Vec<DecaySeries>,
}

impl StudyResult {
    /// Series in configuration order
    pub fn series(&self) -> &[DecaySeries] {
        &self.series
    }

    /// Step used for the integration
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Series of one treatment, in configuration order
    pub fn panel(&self, treatment: Treatment) -> Vec<&DecaySeries> {
        self.series
            .iter()
            .filter(|s| s.treatment == treatment)
            .collect()
    }

    /// Series ending with the highest concentration
    pub fn slowest(&self) -> Option<&DecaySeries> {
        self.series
            .iter()
            .max_by(|a, b| a.final_concentration().total_cmp(&b.final_concentration()))
    }

    /// Series ending with the lowest concentration
    pub fn fastest(&self) -> Option<&DecaySeries> {
        self.series
            .iter()
            .min_by(|a, b| a.final_concentration().total_cmp(&b.final_concentration()))
    }
}

// =================================================================================================
// Study
// =================================================================================================

/// Runner for a [`StudyConfig`]
#[derive(Debug, Clone)]
pub struct Study {
    config: StudyConfig,
}

impl Study {
    /// Create a study
    pub fn new(config: StudyConfig) -> Self {
        Self { config }
    }

    /// Configuration
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Integrate every run
    ///
    /// All runs become species of a single scenario, integrated in one
    /// forward Euler pass. Species do not interact, so each trace is
    /// identical to a separate single-compound integration.
    pub fn run(&self) -> Result<StudyResult, String> {
        self.config.validate()?;

        let compounds = self
            .config
            .runs
            .iter()
            .map(|run| Compound::new(run.label.clone(), run.rate_constant))
            .collect();
        let model = FirstOrderDecay::new(compounds, self.config.initial_concentration);
        let scenario = Scenario::new(Box::new(model));

        info!(
            "integrating {} runs from C0 = {} mol/L, dt = {} s, t_max = {} s",
            self.config.runs.len(),
            self.config.initial_concentration,
            self.config.time_step,
            self.config.horizon
        );

        let result = EulerSolver::new().solve(&scenario, &self.config.solver_configuration())?;
        let traces = result.traces();

        let series = self
            .config
            .runs
            .iter()
            .zip(traces)
            .map(|(run, concentrations)| {
                debug!(
                    "{} ({}): k = {}, {} points",
                    run.label,
                    run.treatment,
                    run.rate_constant,
                    concentrations.len()
                );
                DecaySeries {
                    label: run.label.clone(),
                    treatment: run.treatment,
                    rate_constant: run.rate_constant,
                    initial_concentration: self.config.initial_concentration,
                    time_points: result.time_points.clone(),
                    concentrations,
                }
            })
            .collect();

        Ok(StudyResult {
            time_step: self.config.time_step,
            series,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
