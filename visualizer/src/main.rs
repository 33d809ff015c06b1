use anyhow::Context;
use std::env;
use std::path::PathBuf;
use surfacelib::animation;
use surfacelib::functions::SurfaceFunction;
use surfacelib::{logging, util};

#[derive(Debug, PartialEq)]
struct Invocation {
    points: PathBuf,
    function: String,
}

// Returns None when the points file or the function name is missing.
fn parse_args(args: &[String]) -> Option<Invocation> {
    match args {
        [_, points, function, ..] => Some(Invocation {
            points: PathBuf::from(points),
            function: function.clone(),
        }),
        _ => None,
    }
}

fn usage(program: &str) -> String {
    let functions: Vec<&str> = SurfaceFunction::ALL.iter().map(|f| f.name()).collect();
    format!(
        "Usage: {} <pointsFilePath> <functionName>\nAvailable functions: {}",
        program,
        functions.join(", ")
    )
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let invocation = match parse_args(&args) {
        Some(invocation) => invocation,
        None => {
            let program = args.first().map(String::as_str).unwrap_or("visualizer");
            println!("{}", usage(program));
            return Ok(());
        }
    };

    // Functions must be "registered" in SurfaceFunction to be used
    let function: SurfaceFunction = invocation.function.parse()?;

    logging::configure_logger("logs/visualizer.log")?;
    let settings = util::read_settings().context("Failed to read settings")?;

    let frames = animation::animate_file(function, &invocation.points, &settings.animation)
        .with_context(|| format!("Failed to animate {}", invocation.points.display()))?;

    log::info!(
        "Done, {} frames written to {} ({} ms per frame).",
        frames,
        settings.animation.output,
        settings.animation.frame_delay_ms
    );
    Ok(())
}
