//! Measure all 4096 correlators of one mass pair on a 4³×8 lattice.
//!
//! Uses the seeded mock solver in place of a Dirac inversion, the periodic
//! Jacobi kernel, and the gamma-trace contractor. Set `RUST_LOG=debug` to
//! see per-variant and per-pair progress.
//!
//! ```text
//! cargo run -p mesonic --example correlators_4c8
//! ```

use mesonic::prelude::*;
use mesonic_test_utils::SeededSolver;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let shape = LatticeShape::cubic(4, 8)?;
    let pipeline = CorrelatorPipeline::new(
        SeededSolver::new(shape),
        JacobiKernel::periodic(),
        GammaTraceContractor::new(),
        MeasurementConfig::default(),
    );

    let smearing = SmearingParameters::new(2, 0.4)?;
    let set = pipeline.compute_correlator_set(0.4, 0.03, smearing)?;

    println!("{} correlators on {shape}", set.len());
    let pion = InterpolatorChannel::new(Gamma::G5, Gamma::G5);
    for labels in set.labels() {
        if let Some(corr) = set.get(pion, labels) {
            let head: Vec<String> = corr.iter().take(3).map(|v| format!("{:.4e}", v.re)).collect();
            println!("  {pion} {labels}: [{}, ...]", head.join(", "));
        }
    }
    Ok(())
}
