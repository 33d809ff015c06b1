use serde::Deserialize;
use std::path::Path;

pub const SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub animation: AnimationSettings,
    pub optimizer: OptimizerSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub output: String,
    pub frame_delay_ms: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            output: "output/animation.gif".to_string(),
            frame_delay_ms: 500,
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    pub particles: usize,
    pub iterations: usize,
    pub seed: u64,
    pub inertia: f64,
    pub cognitive: f64,
    pub social: f64,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        OptimizerSettings {
            particles: 30,
            iterations: 50,
            seed: 42,
            inertia: 0.5,
            cognitive: 1.0,
            social: 1.0,
        }
    }
}

// Reads settings.json from the working directory, falling back to defaults when it doesn't exist.
pub fn read_settings() -> Result<Settings, SettingsError> {
    read_settings_from(SETTINGS_PATH)
}

pub fn read_settings_from<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("No settings found at {}, using defaults.", path.display());
        return Ok(Settings::default());
    }

    let settings = std::fs::read_to_string(path)?;
    let settings = serde_json::from_str(&settings)?;
    log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}
