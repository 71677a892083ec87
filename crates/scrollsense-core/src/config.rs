use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// How the header reacts to scrolling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderBehavior {
    /// Hide when scrolling down past the threshold, reveal when scrolling up
    #[default]
    HideOnScroll,
    /// Pinned to the top for the lifetime of the mount
    AlwaysFixed,
    /// Stays in normal flow, never pinned
    AlwaysTop,
}

impl HeaderBehavior {
    pub const ALL: [HeaderBehavior; 3] = [
        HeaderBehavior::HideOnScroll,
        HeaderBehavior::AlwaysFixed,
        HeaderBehavior::AlwaysTop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderBehavior::HideOnScroll => "hide-on-scroll",
            HeaderBehavior::AlwaysFixed => "always-fixed",
            HeaderBehavior::AlwaysTop => "always-top",
        }
    }
}

impl fmt::Display for HeaderBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderBehavior {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| crate::Error::Config(format!("unknown header behavior: {}", s)))
    }
}

/// Shadow preset applied as a class on the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxShadowPreset {
    None,
    #[default]
    Light,
    Medium,
    Heavy,
    Custom,
}

impl BoxShadowPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxShadowPreset::None => "none",
            BoxShadowPreset::Light => "light",
            BoxShadowPreset::Medium => "medium",
            BoxShadowPreset::Heavy => "heavy",
            BoxShadowPreset::Custom => "custom",
        }
    }
}

impl FromStr for BoxShadowPreset {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(BoxShadowPreset::None),
            "light" => Ok(BoxShadowPreset::Light),
            "medium" => Ok(BoxShadowPreset::Medium),
            "heavy" => Ok(BoxShadowPreset::Heavy),
            "custom" => Ok(BoxShadowPreset::Custom),
            other => Err(crate::Error::Config(format!("unknown box shadow preset: {}", other))),
        }
    }
}

/// Mount-time header configuration
///
/// Only `behavior` and the threshold/duration fields drive the state machine;
/// the rest is carried through to [`crate::HeaderAttributes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default)]
    pub behavior: HeaderBehavior,
    /// Offset past which the header becomes sticky (and may hide).
    /// Unset means the header's rendered extent at initialize time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_threshold: Option<f64>,
    /// Offset below which a sticky header returns to normal flow
    #[serde(default = "default_show_threshold")]
    pub show_threshold: f64,
    /// Delay before the sticky transition hint is applied (0 = never)
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    #[serde(default)]
    pub box_shadow: BoxShadowPreset,
    /// Shadow value used when `box_shadow` is `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_box_shadow: Option<String>,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_z_index")]
    pub z_index: i32,
    /// Extra class names appended to the header
    #[serde(default)]
    pub class_name: String,
    #[serde(default = "default_data_attribute")]
    pub data_attribute: String,
    /// Extra style declarations, emitted before the computed ones
    #[serde(default)]
    pub style: BTreeMap<String, String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            behavior: HeaderBehavior::default(),
            hide_threshold: None,
            show_threshold: default_show_threshold(),
            transition_duration_ms: default_transition_duration(),
            box_shadow: BoxShadowPreset::default(),
            custom_box_shadow: None,
            background_color: default_background_color(),
            z_index: default_z_index(),
            class_name: String::new(),
            data_attribute: default_data_attribute(),
            style: BTreeMap::new(),
        }
    }
}

impl HeaderConfig {
    /// Same config with a different behavior
    pub fn with_behavior(&self, behavior: HeaderBehavior) -> Self {
        Self {
            behavior,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Header height in terminal rows
    #[serde(default = "default_header_height")]
    pub header_height: u16,
    /// Number of filler lines on the demo page
    #[serde(default = "default_page_lines")]
    pub page_lines: usize,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            header_height: default_header_height(),
            page_lines: default_page_lines(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for smooth scrolling in the demo viewport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animation
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines per step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frames per second while animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_show_threshold() -> f64 {
    3.0
}

fn default_transition_duration() -> u64 {
    300
}

fn default_background_color() -> String {
    "transparent".to_string()
}

fn default_z_index() -> i32 {
    1000
}

fn default_data_attribute() -> String {
    "data-scroll-sense-header".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_header_height() -> u16 {
    3
}

fn default_page_lines() -> usize {
    200
}

fn default_animation_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollsense/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollsense")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults() {
        let config = HeaderConfig::default();
        assert_eq!(config.behavior, HeaderBehavior::HideOnScroll);
        assert_eq!(config.hide_threshold, None);
        assert_eq!(config.show_threshold, 3.0);
        assert_eq!(config.transition_duration_ms, 300);
        assert_eq!(config.box_shadow, BoxShadowPreset::Light);
        assert_eq!(config.z_index, 1000);
        assert_eq!(config.background_color, "transparent");
        assert_eq!(config.data_attribute, "data-scroll-sense-header");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [header]
            behavior = "always-fixed"
            hide_threshold = 120.0
            box_shadow = "heavy"
            "#,
        )
        .unwrap();

        assert_eq!(config.header.behavior, HeaderBehavior::AlwaysFixed);
        assert_eq!(config.header.hide_threshold, Some(120.0));
        assert_eq!(config.header.show_threshold, 3.0);
        assert_eq!(config.header.box_shadow, BoxShadowPreset::Heavy);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.demo.header_height, 3);
    }

    #[test]
    fn test_invalid_behavior_is_config_error() {
        let err = AppConfig::from_toml("[header]\nbehavior = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_behavior_from_str() {
        assert_eq!("always-top".parse::<HeaderBehavior>().unwrap(), HeaderBehavior::AlwaysTop);
        assert_eq!(
            "hide-on-scroll".parse::<HeaderBehavior>().unwrap(),
            HeaderBehavior::HideOnScroll
        );
        assert!("fixed".parse::<HeaderBehavior>().is_err());
    }

    #[test]
    fn test_toml_roundtrip_preserves_header() {
        let mut config = AppConfig::default();
        config.header.behavior = HeaderBehavior::AlwaysTop;
        config.header.hide_threshold = Some(64.0);
        config.header.style.insert("color".to_string(), "red".to_string());

        let parsed = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.header, config.header);
    }
}
