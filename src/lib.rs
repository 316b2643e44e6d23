// Library exports for pengplot

pub mod axis;
pub mod binning;
pub mod csv_reader;
pub mod data;
pub mod error;
pub mod graph;
pub mod histogram;
pub mod layout;
pub mod palette;
pub mod scale;
pub mod scatter;
pub mod scene;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[serde(rename = "png")]
    #[default]
    Png,
    #[serde(rename = "svg")]
    Svg,
}

/// Canvas overrides and output format for one render.
///
/// Width and height default per chart type (see [`layout::Dimensions`]);
/// setting either here overrides that default.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RenderOptions {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, rename = "type")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_from_json() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"width": 800, "type": "svg"}"#).unwrap();
        assert_eq!(options.width, Some(800));
        assert_eq!(options.height, None);
        assert_eq!(options.format, OutputFormat::Svg);
    }

    #[test]
    fn test_render_options_defaults() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.format, OutputFormat::Png);
        assert!(options.width.is_none());
    }
}
