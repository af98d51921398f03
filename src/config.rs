use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Color pair used for particles and their links.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    Portfolio,
    Contact,
}

impl Palette {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Palette::Portfolio => (83, 130, 161),
            Palette::Contact => (45, 42, 38),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Portfolio
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub particle_count: usize,
    pub speed: f32,
    pub radius: f32,
    pub link_distance: f32,
    pub resize_debounce_ms: u64,
    /// Pacing hint for the frame timer; frames still arrive as fast as the executor permits.
    pub frame_interval_ms: u64,
    pub min_viewport_width: f32,
    pub touch_primary: bool,
    pub palette: Palette,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            particle_count: 60,
            speed: 0.5,
            radius: 2.0,
            link_distance: 150.0,
            resize_debounce_ms: 250,
            frame_interval_ms: 16,
            min_viewport_width: 768.0,
            touch_primary: false,
            palette: Palette::default(),
            window_width: 1280,
            window_height: 800,
        }
    }
}

impl Parameters {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let parameters = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(parameters)
    }

    /// Missing file means defaults; a broken one is reported and then ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("{} not found, using default parameters", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(parameters) => {
                log::info!("loaded parameters from {}", path.display());
                parameters
            }
            Err(err) => {
                log::warn!("falling back to default parameters: {:#}", err);
                Self::default()
            }
        }
    }
}
