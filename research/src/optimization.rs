use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use surfacelib::util::OptimizerSettings;

const MINIMUM_SPEED: f64 = 0.01;
const TARGET_FITNESS: f64 = 0.0001;

// Fraction of the search range used as the initial particle speed
const INITIAL_SPEED: f64 = 0.05;

// State of the swarm after an iteration, handed to the observer
pub struct SwarmState<'a, const N: usize> {
    pub iteration: usize,
    pub particles: &'a [[f64; N]],
    pub fitnesses: &'a [f64],
    pub best_position: [f64; N],
    pub best_fitness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult<const N: usize> {
    pub best_position: [f64; N],
    pub best_fitness: f64,
    pub iterations: usize,
}

// Particle swarm optimizer for an n-dimensional function, constrained to [min, max] in every dimension.
// The observer sees the initial swarm (iteration 0) and the swarm after every iteration.
pub fn optimize<const N: usize>(
    bounds: (f64, f64),
    fitness: impl Fn([f64; N]) -> f64,
    settings: &OptimizerSettings,
    mut observe: impl FnMut(&SwarmState<'_, N>),
) -> OptimizationResult<N> {
    let (min, max) = bounds;
    let speed = (max - min) * INITIAL_SPEED;
    let mut rng = SmallRng::seed_from_u64(settings.seed);

    // Scatter the particles uniformly over the search space
    let mut particles: Vec<[f64; N]> = vec![[0.0; N]; settings.particles];
    for particle in &mut particles {
        for value in particle.iter_mut() {
            *value = min + (max - min) * rng.gen::<f64>();
        }
    }
    let mut fitnesses: Vec<f64> = particles.iter().map(|p| fitness(*p)).collect();

    // Local best positions start where the particles start
    let mut local_best_positions = particles.clone();
    let mut local_best_fitnesses = fitnesses.clone();

    let mut global_best_position = [0.0; N];
    let mut global_best_fitness = f64::INFINITY;
    for (position, &value) in particles.iter().zip(fitnesses.iter()) {
        if value < global_best_fitness {
            global_best_position = *position;
            global_best_fitness = value;
        }
    }

    // Random direction, magnitude of `speed`
    let mut velocities = vec![[0.0; N]; settings.particles];
    for velocity in &mut velocities {
        for value in velocity.iter_mut() {
            *value = rng.gen::<f64>() - 0.5;
        }

        let magnitude = (velocity.iter().map(|x| x.powi(2)).sum::<f64>()).sqrt();
        if magnitude > 0.0 {
            for value in velocity.iter_mut() {
                *value *= speed / magnitude;
            }
        }
    }

    observe(&SwarmState {
        iteration: 0,
        particles: &particles,
        fitnesses: &fitnesses,
        best_position: global_best_position,
        best_fitness: global_best_fitness,
    });

    let mut iteration = 0;
    while iteration < settings.iterations && global_best_fitness > TARGET_FITNESS {
        iteration += 1;
        for i in 0..particles.len() {
            // Move the particle, staying inside the search space
            for j in 0..N {
                particles[i][j] = (particles[i][j] + velocities[i][j]).clamp(min, max);
            }

            let current_fitness = fitness(particles[i]);
            fitnesses[i] = current_fitness;

            if current_fitness < local_best_fitnesses[i] {
                local_best_positions[i] = particles[i];
                local_best_fitnesses[i] = current_fitness;
            }

            if current_fitness < global_best_fitness {
                global_best_position = particles[i];
                global_best_fitness = current_fitness;
            }

            // velocity = inertia * velocity + cognitive * r1 * (local_best - position) + social * r2 * (global_best - position)
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();
            for j in 0..N {
                velocities[i][j] = settings.inertia * velocities[i][j]
                    + settings.cognitive * r1 * (local_best_positions[i][j] - particles[i][j])
                    + settings.social * r2 * (global_best_position[j] - particles[i][j]);
            }

            // Magnitude of velocity cannot be less than MINIMUM_SPEED
            let magnitude = (velocities[i].iter().map(|x| x.powi(2)).sum::<f64>()).sqrt();
            if magnitude > 0.0 && magnitude < MINIMUM_SPEED {
                for j in 0..N {
                    velocities[i][j] *= MINIMUM_SPEED / magnitude;
                }
            }
        }

        log::debug!(
            "Iteration {}: global best position: {:?}, fitness: {}",
            iteration,
            global_best_position,
            global_best_fitness
        );

        observe(&SwarmState {
            iteration,
            particles: &particles,
            fitnesses: &fitnesses,
            best_position: global_best_position,
            best_fitness: global_best_fitness,
        });
    }

    log::info!("Optimization finished in {} iterations", iteration);

    OptimizationResult {
        best_position: global_best_position,
        best_fitness: global_best_fitness,
        iterations: iteration,
    }
}
