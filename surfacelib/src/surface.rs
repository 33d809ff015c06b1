use rayon::prelude::*;

use crate::functions::SurfaceFunction;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    #[error("grid step must be a positive finite number, got {0}")]
    InvalidStep(f64),
}

// Sampled surface in meshgrid layout: rows follow y, columns follow x.
// x, y and z always have the same shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceGrid {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    pub fn rows(&self) -> usize {
        self.z.len()
    }

    pub fn cols(&self) -> usize {
        self.z.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    // (x, y, z) at a grid cell
    pub fn at(&self, row: usize, col: usize) -> (f64, f64, f64) {
        (self.x[row][col], self.y[row][col], self.z[row][col])
    }

    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.z.iter().flatten().fold(None, |range, &z| match range {
            None => Some((z, z)),
            Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
        })
    }
}

// Values min + i*step for i in 0..ceil((max - min) / step), i.e. the half-open range [min, max).
pub fn lattice(min: f64, max: f64, step: f64) -> Result<Vec<f64>, SurfaceError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(SurfaceError::InvalidStep(step));
    }
    if min >= max || min.is_nan() || max.is_nan() {
        return Ok(Vec::new());
    }

    let count = ((max - min) / step).ceil() as usize;
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}

pub fn sample<F>(min: f64, max: f64, step: f64, function: F) -> Result<SurfaceGrid, SurfaceError>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let axis = lattice(min, max, step)?;

    let z: Vec<Vec<f64>> = axis
        .par_iter()
        .map(|&y| axis.iter().map(|&x| function(&[x, y])).collect())
        .collect();
    let x = vec![axis.clone(); axis.len()];
    let y = axis.iter().map(|&y| vec![y; axis.len()]).collect();

    log::debug!("Sampled a {}x{} surface over [{}, {})", axis.len(), axis.len(), min, max);
    Ok(SurfaceGrid { x, y, z })
}

// Samples a benchmark over its preset bounds.
pub fn sample_preset(function: SurfaceFunction) -> Result<SurfaceGrid, SurfaceError> {
    let preset = function.preset();
    sample(preset.min, preset.max, preset.step, |x| function.evaluate(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_is_half_open() {
        assert_eq!(lattice(0.0, 1.0, 0.25).unwrap(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(lattice(0.0, 1.1, 0.5).unwrap(), vec![0.0, 0.5, 1.0]);
        assert_eq!(lattice(-2.0, 2.0, 1.0).unwrap(), vec![-2.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn empty_and_invalid_ranges() {
        assert!(lattice(1.0, 1.0, 0.1).unwrap().is_empty());
        assert!(lattice(2.0, 1.0, 0.1).unwrap().is_empty());
        assert_eq!(lattice(0.0, 1.0, 0.0), Err(SurfaceError::InvalidStep(0.0)));
        assert_eq!(lattice(0.0, 1.0, -1.0), Err(SurfaceError::InvalidStep(-1.0)));
        assert!(lattice(0.0, 1.0, f64::NAN).is_err());
        assert!(lattice(0.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn grid_layout() {
        let grid = sample(0.0, 3.0, 1.0, |p| p[0] + 10.0 * p[1]).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.x[1], vec![0.0, 1.0, 2.0]);
        assert_eq!(grid.y[1], vec![1.0, 1.0, 1.0]);
        assert_eq!(grid.z[2], vec![20.0, 21.0, 22.0]);
        assert_eq!(grid.at(2, 1), (1.0, 2.0, 21.0));
        assert_eq!(grid.z_range(), Some((0.0, 22.0)));
    }

    #[test]
    fn preset_surfaces_match_their_functions() {
        for function in SurfaceFunction::ALL {
            let preset = function.preset();
            let grid = sample_preset(function).unwrap();
            let expected = ((preset.max - preset.min) / preset.step).ceil() as usize;

            assert_eq!(grid.rows(), expected, "{}", function);
            assert_eq!(grid.cols(), expected, "{}", function);
            for row in (0..grid.rows()).step_by(7) {
                for col in (0..grid.cols()).step_by(5) {
                    let (x, y, z) = grid.at(row, col);
                    assert_eq!(z, function.evaluate(&[x, y]));
                }
            }
        }
    }

    #[test]
    fn empty_grid() {
        let grid = sample(1.0, 0.0, 0.5, |_| 0.0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.z_range(), None);
    }
}
