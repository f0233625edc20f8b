//! Style options for the field's drawing surface.
//!
//! [`StyleOptions`] is the raw, user-facing configuration: every key optional,
//! values written the way a stylesheet would write them, unknown keys ignored.
//! [`StyleOptions::resolve`] merges it over the defaults and parses each value
//! into a typed [`Style`].
//!
//! ```json
//! {
//!   "background": "radial-gradient(#1c1425, #07060b)",
//!   "particleColor": "#bb95e1",
//!   "strokeStyle": "#bb95e1a8",
//!   "position": "absolute",
//!   "top": "0",
//!   "left": "0",
//!   "width": "100%",
//!   "height": "100%"
//! }
//! ```

use nannou::color::{rgba, Rgba};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FieldError;

pub const DEFAULT_BACKGROUND: &str = "radial-gradient(#1c1425, #07060b)";
pub const DEFAULT_PARTICLE_COLOR: &str = "#bb95e1";
pub const DEFAULT_STROKE_STYLE: &str = "#bb95e1a8";
pub const DEFAULT_POSITION: &str = "absolute";
pub const DEFAULT_OFFSET: &str = "0";
pub const DEFAULT_EXTENT: &str = "100%";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    pub background: Option<String>,
    pub particle_color: Option<String>,
    pub stroke_style: Option<String>,
    pub position: Option<String>,
    pub top: Option<String>,
    pub left: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl StyleOptions {
    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FieldError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fill in defaults for absent keys and parse every value.
    pub fn resolve(&self) -> Result<Style, FieldError> {
        fn pick<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
            value.as_deref().unwrap_or(default)
        }

        Ok(Style {
            background: parse_background(pick(&self.background, DEFAULT_BACKGROUND))
                .ok_or_else(|| invalid("background", &self.background))?,
            particle_color: parse_color(pick(&self.particle_color, DEFAULT_PARTICLE_COLOR))
                .ok_or_else(|| invalid("particleColor", &self.particle_color))?,
            stroke_style: parse_color(pick(&self.stroke_style, DEFAULT_STROKE_STYLE))
                .ok_or_else(|| invalid("strokeStyle", &self.stroke_style))?,
            position: Position::parse(pick(&self.position, DEFAULT_POSITION))
                .ok_or_else(|| invalid("position", &self.position))?,
            top: Length::parse(pick(&self.top, DEFAULT_OFFSET))
                .ok_or_else(|| invalid("top", &self.top))?,
            left: Length::parse(pick(&self.left, DEFAULT_OFFSET))
                .ok_or_else(|| invalid("left", &self.left))?,
            width: Length::parse(pick(&self.width, DEFAULT_EXTENT))
                .ok_or_else(|| invalid("width", &self.width))?,
            height: Length::parse(pick(&self.height, DEFAULT_EXTENT))
                .ok_or_else(|| invalid("height", &self.height))?,
        })
    }
}

fn invalid(key: &'static str, value: &Option<String>) -> FieldError {
    FieldError::InvalidStyle {
        key,
        value: value.clone().unwrap_or_default(),
    }
}

/// Fully resolved style.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub background: Background,
    pub particle_color: Rgba,
    pub stroke_style: Rgba,
    pub position: Position,
    pub top: Length,
    pub left: Length,
    pub width: Length,
    pub height: Length,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Background::RadialGradient {
                inner: rgba(0x1c as f32 / 255.0, 0x14 as f32 / 255.0, 0x25 as f32 / 255.0, 1.0),
                outer: rgba(0x07 as f32 / 255.0, 0x06 as f32 / 255.0, 0x0b as f32 / 255.0, 1.0),
            },
            particle_color: rgba(0xbb as f32 / 255.0, 0x95 as f32 / 255.0, 0xe1 as f32 / 255.0, 1.0),
            stroke_style: rgba(
                0xbb as f32 / 255.0,
                0x95 as f32 / 255.0,
                0xe1 as f32 / 255.0,
                0xa8 as f32 / 255.0,
            ),
            position: Position::Absolute,
            top: Length::Px(0.0),
            left: Length::Px(0.0),
            width: Length::Percent(100.0),
            height: Length::Percent(100.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Background {
    Color(Rgba),
    /// Inner color at the center fading to the outer color at the farthest corner.
    RadialGradient { inner: Rgba, outer: Rgba },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Position {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Position::Static),
            "relative" => Some(Position::Relative),
            "absolute" => Some(Position::Absolute),
            "fixed" => Some(Position::Fixed),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let parsed = if let Some(n) = value.strip_suffix('%') {
            Length::Percent(n.trim().parse().ok()?)
        } else if let Some(n) = value.strip_suffix("px") {
            Length::Px(n.trim().parse().ok()?)
        } else {
            Length::Px(value.parse().ok()?)
        };
        match parsed {
            Length::Px(n) | Length::Percent(n) if !n.is_finite() => None,
            _ => Some(parsed),
        }
    }

    /// Length in pixels against a reference extent (used for percentages).
    pub fn resolve(&self, reference: f32) -> f32 {
        match *self {
            Length::Px(px) => px,
            Length::Percent(pct) => reference * pct / 100.0,
        }
    }
}

pub fn parse_background(value: &str) -> Option<Background> {
    let value = value.trim();
    if let Some(args) = value
        .strip_prefix("radial-gradient(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let stops = split_args(args);
        if stops.len() != 2 {
            return None;
        }
        return Some(Background::RadialGradient {
            inner: parse_color(stops[0])?,
            outer: parse_color(stops[1])?,
        });
    }
    parse_color(value).map(Background::Color)
}

/// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a
/// handful of named colors.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = value.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts = split_args(args);
        let channel = |s: &str| -> Option<f32> {
            let v: f32 = s.parse().ok()?;
            Some(v.clamp(0.0, 255.0) / 255.0)
        };
        return match *parts.as_slice() {
            [r, g, b] => Some(rgba(channel(r)?, channel(g)?, channel(b)?, 1.0)),
            [r, g, b, a] => {
                let a: f32 = a.parse().ok()?;
                Some(rgba(channel(r)?, channel(g)?, channel(b)?, a.clamp(0.0, 1.0)))
            }
            _ => None,
        };
    }
    match lower.as_str() {
        "black" => Some(rgba(0.0, 0.0, 0.0, 1.0)),
        "white" => Some(rgba(1.0, 1.0, 1.0, 1.0)),
        "transparent" => Some(rgba(0.0, 0.0, 0.0, 0.0)),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)?, digit(1)?, digit(2)?, 255),
        4 => (digit(0)?, digit(1)?, digit(2)?, digit(3)?),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };
    Some(rgba(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ))
}

fn split_args(args: &str) -> Vec<&str> {
    args.split(',').map(str::trim).collect()
}
