use serde::Serialize;

use crate::config::{BoxShadowPreset, HeaderConfig};

const BASE_CLASS: &str = "scroll-sense-header";

/// Named visual state the controller applies to or removes from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresentationHint {
    Sticky,
    /// Applied once the sticky-entry transition has settled
    StickyTransition,
    Hidden,
    AlwaysFixed,
    AlwaysTop,
}

impl PresentationHint {
    pub const ALL: [PresentationHint; 5] = [
        PresentationHint::Sticky,
        PresentationHint::StickyTransition,
        PresentationHint::Hidden,
        PresentationHint::AlwaysFixed,
        PresentationHint::AlwaysTop,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            PresentationHint::Sticky => "scroll-sense-header--sticky",
            PresentationHint::StickyTransition => "scroll-sense-header--sticky-transition",
            PresentationHint::Hidden => "scroll-sense-header--hidden",
            PresentationHint::AlwaysFixed => "scroll-sense-header--always-fixed",
            PresentationHint::AlwaysTop => "scroll-sense-header--always-top",
        }
    }
}

/// Static attributes a host renders on the header element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAttributes {
    pub class_name: String,
    /// Style declarations in emission order
    pub style: Vec<(String, String)>,
    pub data_attribute: String,
}

impl HeaderAttributes {
    pub fn from_config(config: &HeaderConfig) -> Self {
        let mut classes = vec![BASE_CLASS.to_string()];
        if config.box_shadow != BoxShadowPreset::None {
            classes.push(format!("{}--box-shadow-{}", BASE_CLASS, config.box_shadow.as_str()));
        }
        let extra = config.class_name.trim();
        if !extra.is_empty() {
            classes.push(extra.to_string());
        }

        let mut style: Vec<(String, String)> = config
            .style
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        set_style(&mut style, "z-index", config.z_index.to_string());
        set_style(&mut style, "background-color", config.background_color.clone());
        if config.transition_duration_ms > 0 {
            set_style(
                &mut style,
                "--transition-duration",
                format!("{}ms", config.transition_duration_ms),
            );
        }
        if config.box_shadow == BoxShadowPreset::Custom {
            if let Some(shadow) = &config.custom_box_shadow {
                set_style(&mut style, "box-shadow", shadow.clone());
            }
        }

        Self {
            class_name: classes.join(" "),
            style,
            data_attribute: config.data_attribute.clone(),
        }
    }

    /// Value of a style declaration, if emitted
    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Shadow preset encoded in the class list; `None` when no shadow class is present
    pub fn box_shadow(&self) -> BoxShadowPreset {
        let prefix = format!("{}--box-shadow-", BASE_CLASS);
        self.class_name
            .split_whitespace()
            .find_map(|class| class.strip_prefix(prefix.as_str()))
            .and_then(|preset| preset.parse().ok())
            .unwrap_or(BoxShadowPreset::None)
    }

    /// Inline style string, e.g. `z-index: 1000; background-color: transparent`
    pub fn style_string(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// Computed declarations override passthrough ones with the same name.
fn set_style(style: &mut Vec<(String, String)>, name: &str, value: String) {
    if let Some(entry) = style.iter_mut().find(|(k, _)| k == name) {
        entry.1 = value;
    } else {
        style.push((name.to_string(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attributes() {
        let attrs = HeaderAttributes::from_config(&HeaderConfig::default());
        assert_eq!(
            attrs.class_name,
            "scroll-sense-header scroll-sense-header--box-shadow-light"
        );
        assert_eq!(
            attrs.style_string(),
            "z-index: 1000; background-color: transparent; --transition-duration: 300ms"
        );
        assert_eq!(attrs.data_attribute, "data-scroll-sense-header");
        assert_eq!(attrs.box_shadow(), BoxShadowPreset::Light);
        assert_eq!(attrs.style_value("background-color"), Some("transparent"));
    }

    #[test]
    fn test_no_shadow_and_no_transition() {
        let config = HeaderConfig {
            box_shadow: BoxShadowPreset::None,
            transition_duration_ms: 0,
            class_name: "  site-header ".to_string(),
            ..Default::default()
        };
        let attrs = HeaderAttributes::from_config(&config);
        assert_eq!(attrs.class_name, "scroll-sense-header site-header");
        assert_eq!(attrs.style_value("--transition-duration"), None);
        assert_eq!(attrs.box_shadow(), BoxShadowPreset::None);
    }

    #[test]
    fn test_custom_shadow_and_passthrough_override() {
        let mut config = HeaderConfig {
            box_shadow: BoxShadowPreset::Custom,
            custom_box_shadow: Some("0 1px 2px black".to_string()),
            z_index: 5,
            ..Default::default()
        };
        config.style.insert("z-index".to_string(), "1".to_string());
        config.style.insert("color".to_string(), "red".to_string());

        let attrs = HeaderAttributes::from_config(&config);
        assert!(attrs.class_name.contains("scroll-sense-header--box-shadow-custom"));
        assert_eq!(
            attrs.style,
            vec![
                ("color".to_string(), "red".to_string()),
                ("z-index".to_string(), "5".to_string()),
                ("background-color".to_string(), "transparent".to_string()),
                ("--transition-duration".to_string(), "300ms".to_string()),
                ("box-shadow".to_string(), "0 1px 2px black".to_string()),
            ]
        );
    }

    #[test]
    fn test_hint_class_names_are_distinct() {
        let mut names: Vec<_> = PresentationHint::ALL.iter().map(|h| h.class_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PresentationHint::ALL.len());
    }
}
