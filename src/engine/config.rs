use serde::{Deserialize, Serialize};

/// Evaluation weights and the time-to-depth policy. Unknown keys in a JSON
/// override fall back to the defaults field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation weights
    pub weight_board_control: f64,
    pub weight_corner_control: f64,
    pub weight_edge_control: f64,
    pub weight_stability: f64,
    pub weight_mobility: f64,
    pub weight_potential_mobility: f64,

    // Time-to-depth policy
    pub generous_time_secs: f32,
    pub critical_time_secs: f32,
    pub depth_deep: u8,
    pub depth_normal: u8,
    pub depth_shallow: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weight_board_control: 1.0,
            weight_corner_control: 40.0,
            weight_edge_control: 10.0,
            weight_stability: 5.0,
            weight_mobility: 2.0,
            weight_potential_mobility: 2.0,

            generous_time_secs: 50.0,
            critical_time_secs: 15.0,
            depth_deep: 4,
            depth_normal: 3,
            depth_shallow: 1,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Maps a remaining-time budget to a search depth. Comparisons are
    /// strict, so the boundary values themselves get the normal depth.
    #[must_use]
    pub fn depth_for_time(&self, remaining_secs: f32) -> u8 {
        if remaining_secs > self.generous_time_secs {
            self.depth_deep
        } else if remaining_secs < self.critical_time_secs {
            self.depth_shallow
        } else {
            self.depth_normal
        }
    }
}
