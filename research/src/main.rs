mod optimization;
mod recording;

use anyhow::Context;
use chrono::Utc;
use std::env;
use std::path::{Path, PathBuf};
use surfacelib::functions::SurfaceFunction;
use surfacelib::{logging, trajectory, util};

use recording::SwarmRecorder;

fn default_output_path(function: SurfaceFunction) -> PathBuf {
    PathBuf::from(format!(
        "data/{}-{}.pts",
        function,
        Utc::now().format("%Y%m%d-%H%M%S")
    ))
}

fn report_path(output: &Path) -> PathBuf {
    output.with_extension("csv")
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let program = args.first().map(String::as_str).unwrap_or("research");
        println!("Usage: {} <functionName> [outputPath]", program);
        return Ok(());
    }

    let function: SurfaceFunction = args[1].parse()?;
    let output = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(function));

    logging::configure_logger("logs/research.log")?;
    let settings = util::read_settings().context("Failed to read settings")?;

    let preset = function.preset();
    log::info!(
        "Running {} particles for up to {} iterations on {} over [{}, {}]...",
        settings.optimizer.particles,
        settings.optimizer.iterations,
        function,
        preset.min,
        preset.max
    );

    let mut recorder = SwarmRecorder::new();
    let result = optimization::optimize(
        (preset.min, preset.max),
        |p: [f64; 2]| function.evaluate(&p),
        &settings.optimizer,
        |state| recorder.observe(state),
    );
    log::info!(
        "Best position: {:?}, fitness: {}",
        result.best_position,
        result.best_fitness
    );

    trajectory::write_trajectory(&output, &recorder.trajectory())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    recorder.save_report(report_path(&output))?;

    println!("Result: {:?}", result.best_position);
    println!("Animate with: visualizer {} {}", output.display(), function);
    Ok(())
}
