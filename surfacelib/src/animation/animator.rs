use crate::animation::{AnimationError, Canvas, Frame};
use crate::functions::{Preset, SurfaceFunction};
use crate::surface::{self, SurfaceGrid};
use crate::trajectory::{Snapshot, Trajectory};

// Owns the canvas and the sampled surface. The surface is sampled once; every frame
// redraws it underneath the current scatter.
pub struct Animator<C: Canvas> {
    canvas: C,
    function: SurfaceFunction,
    bounds: Preset,
    surface: SurfaceGrid,
    scatter: Snapshot,
    frames_rendered: usize,
}

impl<C: Canvas> Animator<C> {
    pub fn new(canvas: C, function: SurfaceFunction) -> Result<Self, AnimationError> {
        let surface = surface::sample_preset(function)?;
        Ok(Animator::with_surface(canvas, function, function.preset(), surface))
    }

    pub fn with_surface(
        canvas: C,
        function: SurfaceFunction,
        bounds: Preset,
        surface: SurfaceGrid,
    ) -> Self {
        Animator {
            canvas,
            function,
            bounds,
            surface,
            scatter: Snapshot::new(),
            frames_rendered: 0,
        }
    }

    pub fn surface(&self) -> &SurfaceGrid {
        &self.surface
    }

    pub fn scatter(&self) -> &Snapshot {
        &self.scatter
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    // Replaces the scatter coordinates and renders the next frame.
    pub fn update(&mut self, snapshot: &Snapshot) -> Result<(), AnimationError> {
        self.scatter.clone_from(snapshot);

        let index = self.frames_rendered;
        let title = format!("{} - iteration {}", self.function, index);
        let frame = Frame {
            index,
            title: &title,
            bounds: &self.bounds,
            surface: &self.surface,
            points: &self.scatter,
        };
        self.canvas.draw_frame(&frame)?;

        self.frames_rendered += 1;
        log::debug!("Rendered frame {} with {} points", index, snapshot.len());
        Ok(())
    }

    // First snapshot becomes the initial scatter, each following one is a new frame.
    pub fn play(&mut self, trajectory: &Trajectory) -> Result<usize, AnimationError> {
        let first = trajectory.first().ok_or(AnimationError::EmptyTrajectory)?;
        let start = self.frames_rendered;

        log::info!(
            "Animating {} iterations over the {} surface...",
            trajectory.len(),
            self.function
        );
        self.update(first)?;
        for snapshot in trajectory.iter().skip(1) {
            self.update(snapshot)?;
        }

        Ok(self.frames_rendered - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct RecordedFrame {
        index: usize,
        title: String,
        surface_cells: usize,
        points: Vec<(f64, f64, f64)>,
    }

    #[derive(Default)]
    struct RecordingCanvas {
        frames: Vec<RecordedFrame>,
        fail_at: Option<usize>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<(), AnimationError> {
            if self.fail_at == Some(frame.index) {
                return Err(AnimationError::Drawing("canvas closed".to_string()));
            }
            self.frames.push(RecordedFrame {
                index: frame.index,
                title: frame.title.to_string(),
                surface_cells: frame.surface.rows() * frame.surface.cols(),
                points: frame.points.points().collect(),
            });
            Ok(())
        }
    }

    fn trajectory() -> Trajectory {
        Trajectory::from_snapshots(vec![
            Snapshot::from_points(vec![(1.0, 2.0, 3.0)]),
            Snapshot::from_points(vec![(4.0, 5.0, 6.0), (7.0, 8.0, 9.0)]),
            Snapshot::from_points(vec![(0.0, 0.0, 1.0)]),
        ])
    }

    fn small_animator(canvas: RecordingCanvas) -> Animator<RecordingCanvas> {
        let function = SurfaceFunction::Griewank;
        let surface = surface::sample(-1.0, 1.0, 0.5, |x| function.evaluate(x)).unwrap();
        Animator::with_surface(canvas, function, function.preset(), surface)
    }

    #[test]
    fn one_frame_per_snapshot_in_order() {
        let mut animator = small_animator(RecordingCanvas::default());
        let frames = animator.play(&trajectory()).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(animator.frames_rendered(), 3);

        let canvas = animator.into_canvas();
        let titles: Vec<&str> = canvas.frames.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["griewank - iteration 0", "griewank - iteration 1", "griewank - iteration 2"]
        );
        assert_eq!(canvas.frames[1].points, vec![(4.0, 5.0, 6.0), (7.0, 8.0, 9.0)]);
        assert!(canvas.frames.iter().all(|f| f.surface_cells == 16));
    }

    #[test]
    fn update_replaces_the_scatter() {
        let mut animator = small_animator(RecordingCanvas::default());
        animator.update(&Snapshot::from_points(vec![(1.0, 1.0, 1.0), (2.0, 2.0, 2.0)])).unwrap();
        animator.update(&Snapshot::from_points(vec![(3.0, 3.0, 3.0)])).unwrap();

        assert_eq!(animator.scatter().len(), 1);
        assert_eq!(animator.scatter().point(0), Some((3.0, 3.0, 3.0)));
        assert_eq!(animator.canvas().frames.len(), 2);
    }

    #[test]
    fn empty_trajectory_is_rejected() {
        let mut animator = small_animator(RecordingCanvas::default());
        let result = animator.play(&Trajectory::default());
        assert!(matches!(result, Err(AnimationError::EmptyTrajectory)));
        assert_eq!(animator.frames_rendered(), 0);
    }

    #[test]
    fn canvas_failure_stops_playback() {
        let canvas = RecordingCanvas {
            fail_at: Some(1),
            ..Default::default()
        };
        let mut animator = small_animator(canvas);
        let result = animator.play(&trajectory());

        assert!(matches!(result, Err(AnimationError::Drawing(_))));
        assert_eq!(animator.frames_rendered(), 1);
    }

    #[test]
    fn new_samples_the_preset_surface() {
        let animator = Animator::new(RecordingCanvas::default(), SurfaceFunction::Ackley).unwrap();
        assert_eq!(animator.surface().rows(), 100);
        assert_eq!(animator.frames_rendered(), 0);
    }
}
