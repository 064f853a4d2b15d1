use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../../assets/default_config.toml");

/// Drags released faster than this (seconds) count as clicks.
pub const DEFAULT_CLICK_THRESHOLD: f32 = 0.15;

/// How a release is classified as a click or as the end of a drag.
///
/// The two policies disagree on a slow stationary press: `Movement` calls it a
/// click, `Duration` calls it a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClickPolicy {
    /// Classify by press length and coast after release.
    #[default]
    Duration,
    /// Classify by whether any move arrived during the press. No coasting.
    Movement,
}

/// Where move/up events are listened for once a press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tracking {
    /// Only while the pointer is over the target.
    #[default]
    Element,
    /// Anywhere in the window, so drags can leave the target's bounds.
    Window,
}

/// Engine configuration. Fixed for the lifetime of a [`crate::DragScroll`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragScrollConfig {
    #[serde(default)]
    pub vertical: bool,
    #[serde(default = "default_click_threshold")]
    pub click_threshold_seconds: f32,
    #[serde(default = "default_scroll_step")]
    pub scroll_step_distance: f32,
    #[serde(default)]
    pub policy: ClickPolicy,
    #[serde(default)]
    pub tracking: Tracking,
    #[serde(default = "default_coast_interval_ms")]
    pub coast_interval_ms: u64,
}

fn default_click_threshold() -> f32 { DEFAULT_CLICK_THRESHOLD }
fn default_scroll_step() -> f32 { 150.0 }
fn default_coast_interval_ms() -> u64 { 10 }

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            vertical: false,
            click_threshold_seconds: default_click_threshold(),
            scroll_step_distance: default_scroll_step(),
            policy: ClickPolicy::default(),
            tracking: Tracking::default(),
            coast_interval_ms: default_coast_interval_ms(),
        }
    }
}

impl DragScrollConfig {
    pub fn vertical() -> Self {
        Self { vertical: true, ..Self::default() }
    }

    pub fn with_policy(mut self, policy: ClickPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_threshold(mut self, seconds: f32) -> Self {
        self.click_threshold_seconds = seconds;
        self
    }

    pub fn with_step(mut self, distance: f32) -> Self {
        self.scroll_step_distance = distance;
        self
    }

    pub fn coast_interval(&self) -> Duration {
        Duration::from_millis(self.coast_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String { "drag scroll".to_string() }

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 960, height: 640, title: default_title() }
    }
}

/// Demo content: a strip of fixed-size cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsConfig {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub gap: f32,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self { count: 1000, width: 80.0, height: 120.0, gap: 0.0 }
    }
}

fn default_panes() -> Vec<DragScrollConfig> {
    vec![
        DragScrollConfig { tracking: Tracking::Window, ..DragScrollConfig::default() },
        DragScrollConfig::vertical().with_policy(ClickPolicy::Movement),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    #[serde(default = "default_panes")]
    pub panes: Vec<DragScrollConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            cards: CardsConfig::default(),
            panes: default_panes(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        base.join("drag_scroll").join("config.toml")
    }

    /// Load the user's config, seeding it from the embedded default on first
    /// run. Any failure is logged and the embedded default is used instead.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            if let Err(e) = Self::write_default(&path) {
                log::warn!("{:#}", e);
            }
        }
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!("{:#}; using built-in config", e);
            Self::parse(DEFAULT_CONFIG).unwrap_or_default()
        })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    fn write_default(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("writing default config {}", path.display()))
    }

    /// Parse a config document. An empty `panes` list falls back to the defaults.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let mut cfg: Config = toml::from_str(contents)?;
        if cfg.panes.is_empty() {
            cfg.panes = default_panes();
        }
        Ok(cfg)
    }
}
