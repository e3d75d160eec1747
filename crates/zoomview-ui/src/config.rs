use crate::error::ControllerError;
use zoomview_animation::FlingConfig;
use zoomview_foundation::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};

/// Scale limits and fling tuning for a controller.
///
/// ```
/// use zoomview_ui::ZoomConfig;
///
/// let config = ZoomConfig::default()
///     .with_scale_range(0.5, 8.0)
///     .with_double_tap_scale(3.0);
/// assert_eq!(config.resolved_double_tap_scale(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    /// Scale a double tap zooms to. `None` means half of `max_scale`.
    pub double_tap_scale: Option<f32>,
    pub fling: FlingConfig,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            double_tap_scale: None,
            fling: FlingConfig::default(),
        }
    }
}

impl ZoomConfig {
    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }

    pub fn with_max_scale(mut self, max_scale: f32) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn with_scale_range(self, min_scale: f32, max_scale: f32) -> Self {
        self.with_min_scale(min_scale).with_max_scale(max_scale)
    }

    pub fn with_double_tap_scale(mut self, scale: f32) -> Self {
        self.double_tap_scale = Some(scale);
        self
    }

    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = fling;
        self
    }

    pub fn resolved_double_tap_scale(&self) -> f32 {
        self.double_tap_scale.unwrap_or(self.max_scale / 2.0)
    }

    /// Checks that both limits are positive, finite and ordered.
    pub fn validate(&self) -> Result<(), ControllerError> {
        let valid = is_positive_scale(self.min_scale)
            && is_positive_scale(self.max_scale)
            && self.min_scale <= self.max_scale;
        if valid {
            Ok(())
        } else {
            Err(ControllerError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            })
        }
    }
}

pub(crate) fn is_positive_scale(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0
}
