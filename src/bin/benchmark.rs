//! Performance benchmark comparing serial and parallel frontier evaluation

use std::time::Instant;
use life_arena::domain::{Algorithm, BoundingBox, Mode, PlayerId, SimulationEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_engine(size: i32, mode: Mode, algorithm: Algorithm) -> SimulationEngine {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut engine = SimulationEngine::new().with_algorithm(algorithm);
    engine.set_mode(mode);
    let region = BoundingBox::centered(size, size);
    let seeded = match mode {
        Mode::Classic => engine.seed_random(&mut rng, region, 0.5, None),
        Mode::Competitive(_) => engine
            .seed_random(&mut rng, region, 0.5, Some(PlayerId::First))
            .and_then(|_| engine.seed_random(&mut rng, region, 0.5, Some(PlayerId::Second))),
    };
    if let Err(err) = seeded {
        tracing::error!(%err, "seeding failed");
    }
    engine
}

/// Average milliseconds per generation
fn benchmark(size: i32, mode: Mode, algorithm: Algorithm, iterations: u32) -> f64 {
    let mut engine = seeded_engine(size, mode, algorithm);
    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    life_arena::init_logging();
    println!("=== Sparse Life Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;
    let modes = [("classic", Mode::Classic), ("versus", Mode::Competitive(PlayerId::First))];

    println!("{:>10} {:>8} {:>12} {:>12} {:>10}", "Size", "Mode", "Sparse", "Sparse+Par", "Speedup");
    println!("{:-<56}", "");

    for size in sizes {
        for (label, mode) in modes {
            let serial_ms = benchmark(size, mode, Algorithm::Sparse, iterations);
            let parallel_ms = benchmark(size, mode, Algorithm::SparseParallel, iterations);
            println!(
                "{:>10} {:>8} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                label,
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
    }
}
