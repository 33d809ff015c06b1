use std::fmt;
use std::str::FromStr;

use crate::functions::{ackley, griewank, schwefel};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
    #[error("unknown function {0:?}, expected one of: griewank, ackley, schwefel")]
    Unknown(String),
}

// Plotting bounds for a surface. x and y share [min, max), z is the vertical axis range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub min: f64,
    pub max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceFunction {
    Griewank,
    Ackley,
    Schwefel,
}

impl SurfaceFunction {
    pub const ALL: [SurfaceFunction; 3] = [
        SurfaceFunction::Griewank,
        SurfaceFunction::Ackley,
        SurfaceFunction::Schwefel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SurfaceFunction::Griewank => "griewank",
            SurfaceFunction::Ackley => "ackley",
            SurfaceFunction::Schwefel => "schwefel",
        }
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            SurfaceFunction::Griewank => griewank(x),
            SurfaceFunction::Ackley => ackley(x),
            SurfaceFunction::Schwefel => schwefel(x),
        }
    }

    pub fn preset(&self) -> Preset {
        match self {
            SurfaceFunction::Griewank => Preset {
                min: -10.0,
                max: 10.0,
                z_min: 0.0,
                z_max: 2.0,
                step: 0.25,
            },
            SurfaceFunction::Ackley => Preset {
                min: -5.0,
                max: 5.0,
                z_min: 0.0,
                z_max: 15.0,
                step: 0.1,
            },
            SurfaceFunction::Schwefel => Preset {
                min: -500.0,
                max: 500.0,
                z_min: 0.0,
                z_max: 1700.0,
                step: 10.0,
            },
        }
    }
}

impl fmt::Display for SurfaceFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SurfaceFunction {
    type Err = FunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurfaceFunction::ALL
            .iter()
            .copied()
            .find(|function| function.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FunctionError::Unknown(s.to_string()))
    }
}
