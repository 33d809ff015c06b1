use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::animation::{AnimationError, Canvas, Frame};

// Animated GIF canvas. Every presented frame becomes one GIF frame, shown for
// `frame_delay_ms` before the next one.
pub struct GifCanvas {
    root: DrawingArea<BitMapBackend<'static>, Shift>,
}

fn drawing_error<E: std::fmt::Display>(error: E) -> AnimationError {
    AnimationError::Drawing(error.to_string())
}

// plotters' 3D charts are y-up, so the function value goes on the middle axis.
fn to_chart((x, y, z): (f64, f64, f64)) -> (f64, f64, f64) {
    (x, z, y)
}

impl GifCanvas {
    pub fn create<P: AsRef<Path>>(
        path: P,
        size: (u32, u32),
        frame_delay_ms: u32,
    ) -> Result<Self, AnimationError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                log::info!("Creating output directory at {}...", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }

        let backend = BitMapBackend::gif(path, size, frame_delay_ms).map_err(drawing_error)?;
        Ok(GifCanvas {
            root: backend.into_drawing_area(),
        })
    }
}

impl Canvas for GifCanvas {
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<(), AnimationError> {
        let root = &self.root;
        let bounds = frame.bounds;
        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(frame.title, ("sans-serif", 20))
            .margin(10)
            .build_cartesian_3d(
                bounds.min..bounds.max,
                bounds.z_min..bounds.z_max,
                bounds.min..bounds.max,
            )
            .map_err(drawing_error)?;

        chart.with_projection(|mut pb| {
            pb.yaw = 0.5;
            pb.scale = 0.9;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.15))
            .max_light_lines(3)
            .draw()
            .map_err(drawing_error)?;

        // One quad per grid cell, the same shape SurfaceSeries would produce.
        let surface = frame.surface;
        let cells = (1..surface.rows())
            .flat_map(|row| (1..surface.cols()).map(move |col| (row, col)));
        chart
            .draw_series(cells.map(|(row, col)| {
                let corners = [(row - 1, col - 1), (row - 1, col), (row, col), (row, col - 1)];
                let corners = corners
                    .iter()
                    .map(|&(r, c)| to_chart(surface.at(r, c)))
                    .collect::<Vec<_>>();
                Polygon::new(corners, BLUE.mix(0.2).filled())
            }))
            .map_err(drawing_error)?;

        chart
            .draw_series(
                frame
                    .points
                    .points()
                    .map(|point| Circle::new(to_chart(point), 3, RED.filled())),
            )
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
        Ok(())
    }
}
