use std::path::Path;

use crate::functions::{Preset, SurfaceFunction};
use crate::surface::{self, SurfaceError, SurfaceGrid};
use crate::trajectory::{self, LoadError, Snapshot};
use crate::util::AnimationSettings;

pub mod animator;
pub use animator::*;

pub mod canvas;
pub use canvas::*;

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("trajectory has no snapshots to animate")]
    EmptyTrajectory,
}

// Everything a canvas needs to draw one frame.
pub struct Frame<'a> {
    pub index: usize,
    pub title: &'a str,
    pub bounds: &'a Preset,
    pub surface: &'a SurfaceGrid,
    pub points: &'a Snapshot,
}

// Render target owned by an `Animator`. Each call produces one frame; the pause between
// frames is the canvas' concern.
pub trait Canvas {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<(), AnimationError>;
}

// Animates a point file over a benchmark surface and writes the result as a GIF.
// Returns the number of frames rendered.
pub fn animate_file<P: AsRef<Path>>(
    function: SurfaceFunction,
    points: P,
    settings: &AnimationSettings,
) -> Result<usize, AnimationError> {
    log::info!("Sampling {} surface...", function);
    let surface = surface::sample_preset(function)?;

    let trajectory = trajectory::load_trajectory(points)?;
    if trajectory.is_empty() {
        return Err(AnimationError::EmptyTrajectory);
    }

    let canvas = GifCanvas::create(
        &settings.output,
        (settings.width, settings.height),
        settings.frame_delay_ms,
    )?;
    let mut animator = Animator::with_surface(canvas, function, function.preset(), surface);
    let frames = animator.play(&trajectory)?;

    log::info!("Saved {} frames to {}", frames, settings.output);
    Ok(frames)
}
