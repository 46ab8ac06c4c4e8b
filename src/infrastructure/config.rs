// Chart display configuration
use crate::domain::telemetry::Channel;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChartsConfig {
    #[serde(default = "default_chart_styles")]
    pub charts: Vec<ChartStyle>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartStyle {
    pub channel: Channel,
    pub title: String,
    pub unit_label: String,
    pub color: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub fraction_digits: Option<i32>,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            charts: default_chart_styles(),
        }
    }
}

fn default_chart_styles() -> Vec<ChartStyle> {
    Channel::ALL
        .into_iter()
        .map(|channel| ChartStyle {
            channel,
            title: channel.category().to_string(),
            unit_label: channel.unit().label().to_string(),
            color: None,
            y_min: None,
            y_max: None,
            fraction_digits: None,
        })
        .collect()
}

/// Load chart display settings from config/charts.toml. The built-in styles
/// apply when the file is absent.
pub fn load_charts_config() -> anyhow::Result<ChartsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/charts").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
