use serde::{Deserialize, Serialize};

fn default_chart_width() -> usize {
    72
}

fn default_chart_height() -> usize {
    12
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Columns used by the usage chart plot area
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}
