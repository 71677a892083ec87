use serde::{Deserialize, Serialize};

/// Derived display state of the header
///
/// `is_transitioning` is only ever set while `is_sticky` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    pub is_sticky: bool,
    pub is_hidden: bool,
    pub is_transitioning: bool,
}

impl ScrollState {
    /// The `(is_sticky, is_hidden)` pair reported to change listeners
    #[inline]
    pub fn visibility(&self) -> (bool, bool) {
        (self.is_sticky, self.is_hidden)
    }
}

/// Scroll direction derived from the offset delta of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Offset increased (scrolling down)
    Forward,
    /// Offset decreased (scrolling up)
    Backward,
    Still,
}

impl ScrollDirection {
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            ScrollDirection::Forward
        } else if delta < 0.0 {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Still
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let state = ScrollState::default();
        assert!(!state.is_sticky);
        assert!(!state.is_hidden);
        assert!(!state.is_transitioning);
        assert_eq!(state.visibility(), (false, false));
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(ScrollDirection::from_delta(12.5), ScrollDirection::Forward);
        assert_eq!(ScrollDirection::from_delta(-0.5), ScrollDirection::Backward);
        assert_eq!(ScrollDirection::from_delta(0.0), ScrollDirection::Still);
        // NaN deltas never count as a direction change
        assert_eq!(ScrollDirection::from_delta(f64::NAN), ScrollDirection::Still);
    }

    #[test]
    fn test_serializes_camel_case() {
        let state = ScrollState {
            is_sticky: true,
            is_hidden: false,
            is_transitioning: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"isSticky":true,"isHidden":false,"isTransitioning":true}"#);
    }
}
