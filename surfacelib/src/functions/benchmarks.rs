use std::f64::consts::{E, PI};

// Benchmark landscapes used to visualize optimizer runs. Each accepts any dimension
// and does not validate its input domain.

/// Griewank function.
///
/// Note: the product accumulator starts at 0.0, so the product term is always 0 and the
/// result reduces to `sum(x_i^2 / 4000) + 1`. The textbook version starts the product at 1.0.
pub fn griewank(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut product = 0.0;
    for (i, xi) in x.iter().enumerate() {
        sum += xi * xi / 4000.0;
        product *= xi.cos() / ((i + 1) as f64).sqrt();
    }
    sum - product + 1.0
}

pub const ACKLEY_A: f64 = 20.0;
pub const ACKLEY_B: f64 = 0.2;
pub const ACKLEY_C: f64 = 2.0 * PI;

pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let square_mean = x.iter().map(|xi| xi * xi).sum::<f64>() / n;
    let cos_mean = x.iter().map(|xi| (ACKLEY_C * xi).cos()).sum::<f64>() / n;

    -ACKLEY_A * (-ACKLEY_B * square_mean.sqrt()).exp() - cos_mean.exp() + ACKLEY_A + E
}

pub const SCHWEFEL_CONSTANT: f64 = 418.9829;

// Global minimum near x_i = 420.9687 in every dimension.
pub fn schwefel(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum();
    SCHWEFEL_CONSTANT * x.len() as f64 - sum
}
