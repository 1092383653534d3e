//! Object-detector configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Thresholds for the five object detectors. All geometric values are in
/// percentage space.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum children for a group shape to qualify. Default: 5.
    pub min_group_children: usize,
    /// Minimum eligible shapes for the nonlinear-layout detector. Default: 5.
    pub min_nonlinear_shapes: usize,
    /// Minimum eligible shapes for the matrix/venn detector. Default: 3.
    pub min_matrix_shapes: usize,
    /// Minimum shape width for the matrix/venn detector. Default: 5.0.
    pub min_matrix_width: f64,
    /// Label-absorption margin around a chart, as a ratio of the chart's
    /// larger dimension. Default: 0.2.
    pub chart_label_margin_ratio: f64,
    /// Pair overlap ratio (intersection / smaller area) above which two
    /// shapes count as overlapping. Default: 0.2.
    pub overlap_ratio_threshold: f64,
    /// Minimum mean center-to-centroid distance for a circular layout.
    /// Default: 5.0.
    pub min_mean_radius: f64,
    /// Maximum stddev/mean ratio of center distances for a circular layout.
    /// Default: 0.3.
    pub radial_spread_threshold: f64,
    /// Minimum sign-alternation ratio of consecutive y-deltas for a zigzag
    /// layout. Default: 0.6.
    pub alternation_threshold: f64,
    /// Coordinate bucketing tolerance for grid detection. Default: 5.0.
    pub grid_tolerance: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_group_children: 5,
            min_nonlinear_shapes: 5,
            min_matrix_shapes: 3,
            min_matrix_width: 5.0,
            chart_label_margin_ratio: 0.2,
            overlap_ratio_threshold: 0.2,
            min_mean_radius: 5.0,
            radial_spread_threshold: 0.3,
            alternation_threshold: 0.6,
            grid_tolerance: 5.0,
        }
    }
}

impl DetectionConfig {
    /// Check that every ratio is in `0.0..=1.0` and every tolerance is
    /// positive. Intended for callers that load configuration from external
    /// sources.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("chart_label_margin_ratio", self.chart_label_margin_ratio),
            ("overlap_ratio_threshold", self.overlap_ratio_threshold),
            ("radial_spread_threshold", self.radial_spread_threshold),
            ("alternation_threshold", self.alternation_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.grid_tolerance <= 0.0 {
            return Err(ConfigError::NonPositiveTolerance {
                name: "grid_tolerance",
                value: self.grid_tolerance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(DetectionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ratio_out_of_range() {
        let config = DetectionConfig {
            overlap_ratio_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange { name: "overlap_ratio_threshold", .. })
        ));
    }

    #[test]
    fn test_zero_tolerance_rejected() {
        let config = DetectionConfig {
            grid_tolerance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
