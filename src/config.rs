//! Command line configuration for the constellation binary.
//!
//! nannou builds the model from a plain `fn(&App) -> Model`, so `main` parses
//! the arguments once, loads the style file, and parks the result in
//! [`SETTINGS`] for the model function to pick up.

use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::FieldError;
use crate::style::StyleOptions;
use crate::viewport::HostRegion;

pub static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(about = "Animated constellation background")]
pub struct Args {
    /// JSON file with style options (background, particleColor, strokeStyle, ...)
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Attach to a sub-region of the window instead of the whole window: x,y,width,height
    #[arg(long, value_parser = parse_host)]
    pub host: Option<HostRegion>,

    /// Seed for reproducible particle layouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the control panel and the debug overlay
    #[arg(long)]
    pub debug: bool,

    /// Repopulate the particles whenever the surface is resized
    #[arg(long)]
    pub reinit_on_resize: bool,

    #[arg(long, default_value = "Constellation")]
    pub title: String,
}

// Everything the model needs, resolved from the arguments
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub style: Option<StyleOptions>,
    pub host: Option<HostRegion>,
    pub seed: Option<u64>,
    pub debug: bool,
    pub reinit_on_resize: bool,
    pub title: String,
}

impl Settings {
    pub fn from_args(args: Args) -> Result<Self, FieldError> {
        let style = match &args.style {
            Some(path) => Some(StyleOptions::load(path)?),
            None => None,
        };

        Ok(Self {
            style,
            host: args.host,
            seed: args.seed,
            debug: args.debug,
            reinit_on_resize: args.reinit_on_resize,
            title: args.title,
        })
    }
}

pub fn parse_host(value: &str) -> Result<HostRegion, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("expected x,y,width,height: {}", e))?;

    match parts.as_slice() {
        &[x, y, width, height] if width >= 0.0 && height >= 0.0 => Ok(HostRegion::Region {
            x,
            y,
            width,
            height,
        }),
        &[_, _, _, _] => Err("width and height must not be negative".to_string()),
        _ => Err(format!("expected 4 numbers, got {}", parts.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_region() {
        assert_eq!(
            parse_host("10, 20, 300,400"),
            Ok(HostRegion::Region {
                x: 10.0,
                y: 20.0,
                width: 300.0,
                height: 400.0
            })
        );
        assert!(parse_host("10,20,300").is_err());
        assert!(parse_host("10,20,-1,5").is_err());
        assert!(parse_host("a,b,c,d").is_err());
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::parse_from(["constellation", "--debug", "--seed", "9", "--host", "0,0,640,480"]);
        assert!(args.debug);
        assert_eq!(args.seed, Some(9));
        assert!(args.host.is_some());
        assert!(!args.reinit_on_resize);

        let settings = Settings::from_args(args).unwrap();
        assert!(settings.style.is_none());
        assert_eq!(settings.title, "Constellation");
    }
}
