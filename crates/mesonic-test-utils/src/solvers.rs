//! Mock propagator solvers.
//!
//! - [`SeededSolver`]: deterministic random propagators keyed on the
//!   request, with call recording.
//! - [`FailingSolver`]: fails deterministically after N calls.

use crate::random_propagator;
use mesonic_core::{
    LatticeShape, Propagator, PropagatorSolver, SmearingParameters, SolveError, SolveRequest,
    Verbosity,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One solve as seen by a [`SeededSolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedSolve {
    pub mass: f64,
    pub source_smearing: Option<SmearingParameters>,
    pub verbosity: Verbosity,
    pub spacing: f64,
}

/// Returns a seeded random propagator for every request.
///
/// The seed mixes the mass with the source smearing, so a smeared and an
/// unsmeared solve at the same mass differ, while repeated identical
/// requests return identical propagators.
pub struct SeededSolver {
    shape: LatticeShape,
    calls: AtomicUsize,
    smeared_calls: AtomicUsize,
    log: Mutex<Vec<RecordedSolve>>,
}

impl SeededSolver {
    pub fn new(shape: LatticeShape) -> Self {
        Self {
            shape,
            calls: AtomicUsize::new(0),
            smeared_calls: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// Total number of solves.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Number of solves with source smearing.
    pub fn smeared_calls(&self) -> usize {
        self.smeared_calls.load(Ordering::Relaxed)
    }

    /// Number of solves without source smearing.
    pub fn plain_calls(&self) -> usize {
        self.calls() - self.smeared_calls()
    }

    /// Every solve so far, in call order.
    pub fn recorded(&self) -> Vec<RecordedSolve> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Solves recorded for one mass.
    pub fn calls_for_mass(&self, mass: f64) -> usize {
        self.recorded().iter().filter(|r| r.mass == mass).count()
    }

    /// The propagator this solver returns for `(mass, source_smearing)`.
    pub fn expected(&self, mass: f64, source_smearing: Option<SmearingParameters>) -> Propagator {
        random_propagator(self.shape, seed_for(mass, source_smearing))
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.smeared_calls.store(0, Ordering::Relaxed);
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }
}

fn seed_for(mass: f64, source_smearing: Option<SmearingParameters>) -> u64 {
    let mut seed = mass.to_bits();
    if let Some(params) = source_smearing {
        seed ^= 0x5EED_0000_0000_0000 ^ u64::from(params.iterations());
        seed = seed.rotate_left(17) ^ params.parameter().to_bits();
    }
    seed
}

impl PropagatorSolver for SeededSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Propagator, SolveError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if request.source_smearing.is_some() {
            self.smeared_calls.fetch_add(1, Ordering::Relaxed);
        }
        if let Ok(mut log) = self.log.lock() {
            log.push(RecordedSolve {
                mass: request.mass,
                source_smearing: request.source_smearing,
                verbosity: request.config.verbosity,
                spacing: request.config.spacing,
            });
        }
        Ok(self.expected(request.mass, request.source_smearing))
    }
}

/// Succeeds `succeed_count` times, then fails every call.
pub struct FailingSolver {
    inner: SeededSolver,
    succeed_count: usize,
}

impl FailingSolver {
    pub fn new(shape: LatticeShape, succeed_count: usize) -> Self {
        Self {
            inner: SeededSolver::new(shape),
            succeed_count,
        }
    }

    /// How many times `solve()` has been called.
    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

impl PropagatorSolver for FailingSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Propagator, SolveError> {
        let prop = self.inner.solve(request)?;
        if self.inner.calls() > self.succeed_count {
            return Err(SolveError::Failed {
                reason: format!("solver did not converge for mass {}", request.mass),
            });
        }
        Ok(prop)
    }
}
