use std::fs::File;
use std::path::Path;

use surfacelib::trajectory::{Snapshot, Trajectory};

use crate::optimization::SwarmState;

#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub iteration: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub best_x: f64,
    pub best_y: f64,
}

// Collects a 2D swarm run as a trajectory of (x, y, fitness) points plus a convergence history
#[derive(Debug, Default)]
pub struct SwarmRecorder {
    snapshots: Vec<Snapshot>,
    history: Vec<IterationRecord>,
}

impl SwarmRecorder {
    pub fn new() -> Self {
        SwarmRecorder::default()
    }

    pub fn observe(&mut self, state: &SwarmState<'_, 2>) {
        let points = state
            .particles
            .iter()
            .zip(state.fitnesses.iter())
            .map(|(p, &fitness)| (p[0], p[1], fitness));
        self.snapshots.push(Snapshot::from_points(points));

        let mean_fitness = if state.fitnesses.is_empty() {
            0.0
        } else {
            state.fitnesses.iter().sum::<f64>() / state.fitnesses.len() as f64
        };

        self.history.push(IterationRecord {
            iteration: state.iteration,
            best_fitness: state.best_fitness,
            mean_fitness,
            best_x: state.best_position[0],
            best_y: state.best_position[1],
        });
    }

    pub fn history(&self) -> &[IterationRecord] {
        &self.history
    }

    pub fn trajectory(&self) -> Trajectory {
        Trajectory::from_snapshots(self.snapshots.clone())
    }

    fn generate_headers(&self) -> Vec<&'static str> {
        vec!["iteration", "best_fitness", "mean_fitness", "best_x", "best_y"]
    }

    pub fn save_report<P: AsRef<Path>>(&self, output: P) -> anyhow::Result<()> {
        let file = File::create(output.as_ref())?;
        let mut writer = csv::Writer::from_writer(file);

        // Write the headers to the top of the file
        writer.write_record(self.generate_headers())?;

        for record in self.history.iter() {
            writer.write_record(&[
                record.iteration.to_string(),
                record.best_fitness.to_string(),
                record.mean_fitness.to_string(),
                record.best_x.to_string(),
                record.best_y.to_string(),
            ])?;
        }

        writer.flush()?;
        log::info!("Saved convergence report to {}", output.as_ref().display());
        Ok(())
    }
}
