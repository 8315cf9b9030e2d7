//! Throughput of serial vs rayon-parallel stepping

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use toroidal_life::{Simulation, domain::random_seed};

fn random_simulation(size: i64) -> Simulation {
    let mut rng = StdRng::seed_from_u64(0x11fe);
    let seed = random_seed(size, size, 0.3, &mut rng);
    match Simulation::new(size, size, seed) {
        Ok(sim) => sim,
        Err(err) => panic!("benchmark grid {size}x{size}: {err}"),
    }
}

fn benchmark(size: i64, iterations: u32, parallel: bool) -> f64 {
    let mut sim = random_simulation(size);

    let start = Instant::now();
    for _ in 0..iterations {
        if parallel {
            sim.step_parallel();
        } else {
            sim.step();
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [20, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>14}", "Size", "Serial", "Parallel", "Speedup", "Cells/s (par)");
    println!("{:-<62}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, false);
        let parallel_ms = benchmark(size, iterations, true);
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x {:>13.1}M",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells / (parallel_ms / 1000.0) / 1_000_000.0,
        );
    }
}
