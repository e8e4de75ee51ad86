//! Synthesized growth data.
//!
//! Legacy forms carry no size distribution, so every converted form gets the
//! same block of constants as its final key.

use serde_json::{Map, Value};

/// Key under which growth data is stored on a form.
pub const GROWTH_DATA_KEY: &str = "growth_data";

/// Size distribution and render-scale bounds of a form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthData {
    mean: f64,
    standard_deviation: f64,
    min_render_scale: f64,
    max_render_scale: f64,
}

impl Default for GrowthData {
    fn default() -> Self {
        Self {
            mean: 40.0,
            standard_deviation: 2.0,
            min_render_scale: 0.7,
            max_render_scale: 1.3,
        }
    }
}

impl GrowthData {
    /// Get the mean size.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the size standard deviation.
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Get the smallest render scale.
    pub fn min_render_scale(&self) -> f64 {
        self.min_render_scale
    }

    /// Get the largest render scale.
    pub fn max_render_scale(&self) -> f64 {
        self.max_render_scale
    }
}

impl From<GrowthData> for Value {
    fn from(growth: GrowthData) -> Self {
        let mut map = Map::new();
        map.insert("mean".to_string(), Value::from(growth.mean));
        map.insert(
            "standard_deviation".to_string(),
            Value::from(growth.standard_deviation),
        );
        map.insert(
            "min_render_scale".to_string(),
            Value::from(growth.min_render_scale),
        );
        map.insert(
            "max_render_scale".to_string(),
            Value::from(growth.max_render_scale),
        );
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_growth_data_defaults() {
        let growth = GrowthData::default();
        assert_approx_eq!(f64, growth.mean(), 40.0);
        assert_approx_eq!(f64, growth.standard_deviation(), 2.0);
        assert_approx_eq!(f64, growth.min_render_scale(), 0.7);
        assert_approx_eq!(f64, growth.max_render_scale(), 1.3);
    }

    #[test]
    fn test_growth_data_value() {
        let value = Value::from(GrowthData::default());
        assert_eq!(
            value,
            json!({
                "mean": 40.0,
                "standard_deviation": 2.0,
                "min_render_scale": 0.7,
                "max_render_scale": 1.3
            })
        );
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"mean":40.0,"standard_deviation":2.0,"min_render_scale":0.7,"max_render_scale":1.3}"#
        );
    }
}
