//! Single-image operations as values.
//!
//! [`Operation`] names one transform together with its parameter so it can
//! be parsed from a command line, logged, and applied to many rasters.
//!
//! # Syntax
//!
//! ```text
//! grayscale | invert | sepia | bw | rotate
//! hue=<degrees:i32> | saturation=<delta:f64> | lightness=<delta:f64>
//! ```
//!
//! `threshold` is accepted as an alias of `bw`, `gray` of `grayscale`.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::Operation;
//!
//! let op: Operation = "hue=120".parse().unwrap();
//! assert_eq!(op, Operation::Hue(120));
//! assert_eq!(op.to_string(), "hue=120");
//!
//! let img = Raster::filled(1, 1, Rgb::new(255, 0, 0)).unwrap();
//! assert_eq!(op.apply(&img).unwrap().pixel(0, 0), Rgb::new(0, 255, 0));
//! ```

use crate::{OpsError, OpsResult, adjust, color, threshold, transform};
use pixfx_core::Raster;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A single-image transform and its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Channel average to gray.
    Grayscale,
    /// `255 - c` per channel.
    Invert,
    /// Sepia tone matrix.
    Sepia,
    /// Black/white at the median luminance.
    Threshold,
    /// One clockwise quarter turn.
    Rotate,
    /// Hue rotation in degrees.
    Hue(i32),
    /// Saturation delta.
    Saturation(f64),
    /// Lightness delta.
    Lightness(f64),
}

impl Operation {
    /// Canonical name, without parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::Threshold => "bw",
            Self::Rotate => "rotate",
            Self::Hue(_) => "hue",
            Self::Saturation(_) => "saturation",
            Self::Lightness(_) => "lightness",
        }
    }

    /// Returns `true` if the output has the same dimensions as the input.
    pub fn preserves_dimensions(&self) -> bool {
        !matches!(self, Self::Rotate)
    }

    /// Applies the operation, returning a new raster.
    pub fn apply(&self, src: &Raster) -> OpsResult<Raster> {
        debug!(op = %self, width = src.width(), height = src.height(), "apply operation");
        Ok(match *self {
            Self::Grayscale => color::grayscale(src),
            Self::Invert => color::invert(src),
            Self::Sepia => color::sepia(src),
            Self::Threshold => threshold::black_white_threshold(src),
            Self::Rotate => transform::rotate_cw(src),
            Self::Hue(deg) => adjust::set_hue(src, deg),
            Self::Saturation(delta) => adjust::set_saturation(src, delta)?,
            Self::Lightness(delta) => adjust::set_lightness(src, delta)?,
        })
    }

    /// Applies `ops` in order, each step consuming the previous result.
    ///
    /// An empty chain returns a copy of `src`. The first failing step ends
    /// the chain.
    pub fn apply_chain(ops: &[Operation], src: &Raster) -> OpsResult<Raster> {
        ops.iter().try_fold(src.clone(), |acc, op| op.apply(&acc))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hue(v) => write!(f, "{}={}", self.name(), v),
            Self::Saturation(v) | Self::Lightness(v) => write!(f, "{}={}", self.name(), v),
            _ => f.write_str(self.name()),
        }
    }
}

fn parse_value<T: FromStr>(name: &str, value: Option<&str>) -> OpsResult<T> {
    let raw = value.ok_or_else(|| OpsError::UnknownOperation(format!("{name} requires =<value>")))?;
    raw.trim()
        .parse()
        .map_err(|_| OpsError::UnknownOperation(format!("{name}: invalid value '{raw}'")))
}

fn reject_value(name: &str, value: Option<&str>) -> OpsResult<()> {
    match value {
        Some(v) => Err(OpsError::UnknownOperation(format!(
            "{name} takes no value, got '{v}'"
        ))),
        None => Ok(()),
    }
}

impl FromStr for Operation {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        let (name, value) = match s.split_once('=') {
            Some((n, v)) => (n.trim(), Some(v)),
            None => (s.trim(), None),
        };
        let lower = name.to_ascii_lowercase();
        let op = match lower.as_str() {
            "grayscale" | "gray" => Self::Grayscale,
            "invert" => Self::Invert,
            "sepia" => Self::Sepia,
            "bw" | "threshold" => Self::Threshold,
            "rotate" => Self::Rotate,
            "hue" => return Ok(Self::Hue(parse_value(name, value)?)),
            "saturation" => {
                let delta: f64 = parse_value(name, value)?;
                return Ok(Self::Saturation(crate::error::ensure_finite(name, delta)?));
            }
            "lightness" => {
                let delta: f64 = parse_value(name, value)?;
                return Ok(Self::Lightness(crate::error::ensure_finite(name, delta)?));
            }
            _ => return Err(OpsError::UnknownOperation(s.to_string())),
        };
        reject_value(name, value)?;
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    #[test]
    fn test_parse_plain_names() {
        assert_eq!("grayscale".parse::<Operation>().unwrap(), Operation::Grayscale);
        assert_eq!("Gray".parse::<Operation>().unwrap(), Operation::Grayscale);
        assert_eq!("invert".parse::<Operation>().unwrap(), Operation::Invert);
        assert_eq!("sepia".parse::<Operation>().unwrap(), Operation::Sepia);
        assert_eq!("threshold".parse::<Operation>().unwrap(), Operation::Threshold);
        assert_eq!(" rotate ".parse::<Operation>().unwrap(), Operation::Rotate);
    }

    #[test]
    fn test_parse_with_values() {
        assert_eq!("hue=-45".parse::<Operation>().unwrap(), Operation::Hue(-45));
        assert_eq!(
            "saturation=0.25".parse::<Operation>().unwrap(),
            Operation::Saturation(0.25)
        );
        assert_eq!(
            "lightness = -0.5".parse::<Operation>().unwrap(),
            Operation::Lightness(-0.5)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "blur".parse::<Operation>(),
            Err(OpsError::UnknownOperation(_))
        ));
        assert!("hue".parse::<Operation>().is_err());
        assert!("hue=abc".parse::<Operation>().is_err());
        assert!("hue=1.5".parse::<Operation>().is_err());
        assert!("invert=3".parse::<Operation>().is_err());
        assert!(matches!(
            "lightness=NaN".parse::<Operation>(),
            Err(OpsError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for op in [
            Operation::Grayscale,
            Operation::Invert,
            Operation::Sepia,
            Operation::Threshold,
            Operation::Rotate,
            Operation::Hue(30),
            Operation::Saturation(-0.2),
            Operation::Lightness(0.75),
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_apply_dispatch() {
        let img = Raster::from_pixels(2, 1, vec![Rgb::new(255, 0, 0), Rgb::WHITE]).unwrap();
        assert_eq!(Operation::Invert.apply(&img).unwrap(), color::invert(&img));
        assert_eq!(Operation::Rotate.apply(&img).unwrap().dimensions(), (1, 2));
        assert!(!Operation::Rotate.preserves_dimensions());
        assert!(Operation::Hue(10).preserves_dimensions());
        assert!(Operation::Saturation(f64::NAN).apply(&img).is_err());
    }

    #[test]
    fn test_apply_chain() {
        let img =
            Raster::from_pixels(2, 1, vec![Rgb::new(255, 0, 0), Rgb::new(10, 20, 30)]).unwrap();
        let ops = [Operation::Grayscale, Operation::Rotate, Operation::Invert];
        let chained = Operation::apply_chain(&ops, &img).unwrap();
        let expected = color::invert(&transform::rotate_cw(&color::grayscale(&img)));
        assert_eq!(chained, expected);
        assert_eq!(Operation::apply_chain(&[], &img).unwrap(), img);

        let failing = [Operation::Invert, Operation::Lightness(f64::INFINITY)];
        let err = Operation::apply_chain(&failing, &img);
        assert!(matches!(err, Err(OpsError::OutOfRange(_))));
    }
}
