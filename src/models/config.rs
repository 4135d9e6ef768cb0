use cielab_ops::{ExtractOptions, DEFAULT_BACKGROUND_TOLERANCE, DEFAULT_SAMPLE_STRIDE, DEFAULT_TOP_K};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub task: TaskConfig,

    /// Palette extraction tuning
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Parameter defaults applied when a request omits them
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listen address (overridden by BIND_ADDR)
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Maximum accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TaskConfig {
    /// Deadline for one operation, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExtractConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default = "default_sample_stride")]
    pub sample_stride: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_sample_stride() -> usize {
    DEFAULT_SAMPLE_STRIDE
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            sample_stride: default_sample_stride(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_remap_tolerance")]
    pub remap_tolerance: f64,

    #[serde(default = "default_background_tolerance")]
    pub background_tolerance: f64,

    #[serde(default = "default_effect_intensity")]
    pub effect_intensity: f64,
}

fn default_remap_tolerance() -> f64 {
    15.0
}

fn default_background_tolerance() -> f64 {
    DEFAULT_BACKGROUND_TOLERANCE
}

fn default_effect_intensity() -> f64 {
    1.0
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            remap_tolerance: default_remap_tolerance(),
            background_tolerance: default_background_tolerance(),
            effect_intensity: default_effect_intensity(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LimitsConfig {
    /// Largest accepted buffer, in pixels
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,
}

fn default_max_pixels() -> u64 {
    50_000_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_pixels: default_max_pixels(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when the
    /// file is absent, unreadable or invalid.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        timeout_secs = config.task.timeout_secs,
                        top_k = config.extract.top_k,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Deadline for a single TaskHost invocation
    pub fn task_timeout(&self) -> Duration {
        Duration::from_secs(self.task.timeout_secs)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new()
            .top_k(self.extract.top_k)
            .sample_stride(self.extract.sample_stride)
    }
}
