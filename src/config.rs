//! Demo configuration.
//!
//! Defaults reproduce the stock demo. A JSON override may be stored under
//! [`STORAGE_KEY`] in `localStorage`; any field left out keeps its default.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{DEFAULT_CIRCLE_RADIUS, DEFAULT_PALETTE, DEFAULT_STROKE_WIDTH, LineJoin, Rgba};
use crate::render::{CircleStyle, PathStyle};

pub const STORAGE_KEY: &str = "touch_canvas_config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub radius: f64,
    pub palette: Vec<String>,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CIRCLE_RADIUS,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_css()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub stroke_width: f64,
    pub color: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: Rgba::BLACK.to_css(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub title: String,
    pub author: String,
    pub font_family: String,
    pub font_url: String,
    pub image_url: String,
    pub image_alt: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            title: "多指觸控Compose實例".into(),
            author: "作者：陳恩儒".into(),
            font_family: "finger".into(),
            font_url: "assets/finger.ttf".into(),
            image_url: "assets/hand.png".into(),
            image_alt: "手掌圖片".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub circles: CircleConfig,
    pub path: PathConfig,
    pub greeting: GreetingConfig,
}

impl DemoConfig {
    /// Parses and validates a JSON override.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: DemoConfig = serde_json::from_str(raw)?;
        cfg.circle_style()?;
        cfg.path_style()?;
        Ok(cfg)
    }

    /// Reads the `localStorage` override, falling back to defaults.
    pub fn load() -> Self {
        match Self::read_stored() {
            Ok(Some(cfg)) => {
                tracing::info!(key = STORAGE_KEY, "using stored config");
                cfg
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(key = STORAGE_KEY, %err, "ignoring stored config");
                Self::default()
            }
        }
    }

    fn read_stored() -> Result<Option<Self>> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let Some(store) = window.local_storage()? else {
            return Ok(None);
        };
        match store.get_item(STORAGE_KEY)? {
            Some(raw) => Self::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn circle_style(&self) -> Result<CircleStyle> {
        if self.circles.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        let palette = self
            .circles
            .palette
            .iter()
            .map(|s| Rgba::parse_hex(s))
            .collect::<Result<Vec<_>>>()?;
        Ok(CircleStyle {
            radius: size("circles.radius", self.circles.radius, 0.0)?,
            palette,
        })
    }

    pub fn path_style(&self) -> Result<PathStyle> {
        Ok(PathStyle {
            width: size("path.stroke_width", self.path.stroke_width, f64::MIN_POSITIVE)?,
            color: Rgba::parse_hex(&self.path.color)?,
            join: LineJoin::Round,
        })
    }
}

/// `arc` throws on a negative radius; canvas ignores non-positive line widths.
fn size(field: &'static str, value: f64, min: f64) -> Result<f64> {
    if value.is_finite() && value >= min {
        Ok(value)
    } else {
        Err(Error::InvalidSize { field, value })
    }
}
