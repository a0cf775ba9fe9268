//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use life_screen::domain::{Algorithm, ConwayLife, Seed};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let seed = Seed::Random { density: 0.3, seed: 42 };
    let mut life = match ConwayLife::conway(size, size, &seed) {
        Ok(life) => life.with_algorithm(algorithm),
        Err(err) => {
            eprintln!("cannot seed {size}x{size} grid: {err}");
            return f64::NAN;
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        life.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("Game of Life step benchmark (ms per generation)");
    println!("{:>10} {:>12} {:>12} {:>9}", "Size", "Serial", "Parallel", "Speedup");

    for &size in &[100, 500, 1000, 2000] {
        let iterations = if size >= 1000 { 10 } else { 50 };
        let serial = benchmark(Algorithm::Serial, size, iterations);
        let parallel = benchmark(Algorithm::Parallel, size, iterations);
        println!(
            "{:>10} {:>12.3} {:>12.3} {:>8.1}x",
            format!("{size}x{size}"),
            serial,
            parallel,
            serial / parallel
        );
    }
}
