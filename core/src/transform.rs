//! The host's view transform, parsed once into a structured value.
//!
//! The editor encodes pan and zoom on its transform group as
//! `scale(s) translate(x, y)`. Only those two functions matter here; any
//! other function in the string is dropped on re-serialization.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    pub fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }

    pub fn is_uniform(&self) -> bool {
        self.x == self.y
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_uniform() {
            write!(f, "scale({})", fmt_num(self.x))
        } else {
            write!(f, "scale({},{})", fmt_num(self.x), fmt_num(self.y))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{})", fmt_num(self.x), fmt_num(self.y))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub scale: Option<Scale>,
    pub translate: Option<Translate>,
    /// A `scale(...)` with arguments was present but could not be read.
    pub malformed_scale: bool,
}

impl Transform {
    /// Parses an SVG transform attribute. The first `scale` and the first
    /// `translate` win. A malformed `translate` is ignored; a malformed
    /// non-empty `scale` sets `malformed_scale` and stops further scale
    /// lookups.
    pub fn parse(value: &str) -> Self {
        let mut transform = Transform::default();
        for captures in function_regex().captures_iter(value) {
            let (Some(name), Some(raw)) = (captures.get(1), captures.get(2)) else {
                continue;
            };
            let args = parse_args(raw.as_str());
            match name.as_str() {
                "scale" if transform.scale.is_none() && !transform.malformed_scale => {
                    transform.scale = match args.as_deref() {
                        Some([s]) => Some(Scale::uniform(*s)),
                        Some([sx, sy]) => Some(Scale { x: *sx, y: *sy }),
                        _ => None,
                    };
                    transform.malformed_scale =
                        transform.scale.is_none() && !raw.as_str().is_empty();
                }
                "translate" if transform.translate.is_none() => {
                    transform.translate = match args.as_deref() {
                        Some([x]) => Some(Translate { x: *x, y: 0.0 }),
                        Some([x, y]) => Some(Translate { x: *x, y: *y }),
                        _ => None,
                    };
                }
                _ => {}
            }
        }
        transform
    }

    pub fn scale_only(scale: Scale) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// Keeps `scale` and shifts the point (`origin_x`, `origin_y`) of the
    /// scaled content to the local origin.
    pub fn framed(scale: Scale, origin_x: f64, origin_y: f64) -> Self {
        Self {
            scale: Some(scale),
            translate: Some(Translate {
                x: -origin_x,
                y: -origin_y,
            }),
            ..Self::default()
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.scale, self.translate) {
            (Some(scale), Some(translate)) => write!(f, "{scale} {translate}"),
            (Some(scale), None) => write!(f, "{scale}"),
            (None, Some(translate)) => write!(f, "{translate}"),
            (None, None) => Ok(()),
        }
    }
}

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z]+)[ \t\r\n]*\(([^)]*)\)").expect("transform function regex")
    })
}

fn parse_args(raw: &str) -> Option<Vec<f64>> {
    let mut values = Vec::new();
    for token in raw
        .split(|ch: char| ch == ',' || ch.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
    {
        let value: f64 = token.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        values.push(value);
    }
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Formats a number for an SVG attribute as the shortest text that parses
/// back to the same `f64`. Negative zero is written as `0`.
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
