use crate::presentation::svg_document::RenderSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Plate numbers to render, one diagram per plate.
    #[serde(default)]
    pub plates: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_skyserver_url")]
    pub skyserver_url: String,
    #[serde(default)]
    pub render: RenderSettings,
}

fn default_output_dir() -> String {
    "out".to_string()
}

fn default_skyserver_url() -> String {
    "http://skyserver.sdss.org/dr17/en/tools/search/x_results.aspx".to_string()
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/platemaker"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_in_missing_sections() {
        let config: AppConfig = toml::from_str("plates = [\"2534\"]").unwrap();

        assert_eq!(config.plates, vec!["2534"]);
        assert_eq!(config.output_dir, "out");
        assert!(config.skyserver_url.contains("skyserver.sdss.org"));
        assert_eq!(config.render.dot_scaler, 1.0);
        assert_eq!(config.render.dot_area_scaler, 0.8);
        assert_eq!(config.render.stroke_width_scaler, 0.5);
    }

    #[test]
    fn test_render_overrides_are_partial() {
        let config: AppConfig =
            toml::from_str("plates = []\n\n[render]\ndot_scaler = 2.0\n").unwrap();

        assert_eq!(config.render.dot_scaler, 2.0);
        // untouched settings keep their defaults, including the style table
        assert_eq!(config.render.dot_area_scaler, 0.8);
        assert_eq!(
            config.render.styles.style_for("GALAXY").stroke,
            "rgb(255, 0, 132)"
        );
    }
}
