//! Throughput benchmark for the single-pass update scan.

use std::time::Instant;

use falling_sand::domain::{Grid, Particle};
use rand::Rng;

/// Fill roughly `fill` of the grid with an even sand/water mix.
fn scatter_fill(grid: &mut Grid, fill: f64) {
    let mut rng = rand::rng();
    let (w, h) = grid.dimensions();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if rng.random_bool(fill) {
                let p = if rng.random_bool(0.5) {
                    Particle::sand()
                } else {
                    Particle::water()
                };
                grid.spawn(p, x, y);
            }
        }
    }
}

fn benchmark_step(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size).expect("benchmark sizes are valid");
    scatter_fill(&mut grid, 0.3);
    let mut frame = vec![0u32; size * size];

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step(&mut frame);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Falling Sand Step Benchmark ===\n");

    let sizes = [128, 256, 512, 1024, 2048];
    let iterations = 100;

    println!("{:>12} {:>12} {:>14}", "Size", "ms/step", "Mcells/s");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_step(size, iterations);
        let throughput = (size * size) as f64 / (ms / 1000.0) / 1_000_000.0;
        println!("{:>12} {:>12.3} {:>14.1}", format!("{size}x{size}"), ms, throughput);
    }
}
