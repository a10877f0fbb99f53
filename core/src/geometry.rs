use crate::error::CropError;
use crate::transform::{fmt_num, Scale, Transform};

/// Reads the leading number of a length attribute the way browsers do for
/// presentation attributes: `"800"`, `"800px"` and `" 800.5 "` all parse.
pub fn parse_length(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, ch)| !matches!(ch, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .map(|(idx, _)| idx)
        .unwrap_or(trimmed.len());
    let candidate = &trimmed[..end];
    (1..=candidate.len())
        .rev()
        .filter(|len| candidate.is_char_boundary(*len))
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn parse(value: &str) -> Option<Self> {
        let values: Vec<f64> = value
            .split(|ch: char| ch == ',' || ch.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| token.parse::<f64>().ok())
            .collect::<Option<_>>()?;
        match values.as_slice() {
            [x, y, width, height] => Some(Self {
                x: *x,
                y: *y,
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    pub fn to_attr(&self) -> String {
        format!(
            "{} {} {} {}",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.width),
            fmt_num(self.height)
        )
    }
}

/// A bounding box as reported by `getBBox`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }

    pub fn ensure_measurable(self) -> Result<Self, CropError> {
        if self.is_degenerate() {
            return Err(CropError::DegenerateBounds {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Declared pixel size of a host canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn from_attrs(width: Option<&str>, height: Option<&str>) -> Result<Self, CropError> {
        let width = width.and_then(parse_length);
        let height = height.and_then(parse_length);
        match (width, height) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(CropError::InvalidCanvasSize { width, height }),
        }
    }

    pub fn view_box(&self) -> ViewBox {
        ViewBox {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }
}

/// Final placement of a cropped object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropFrame {
    pub width: f64,
    pub height: f64,
    pub transform: Transform,
}

impl CropFrame {
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn width_attr(&self) -> String {
        format!("{}px", fmt_num(self.width))
    }

    pub fn height_attr(&self) -> String {
        format!("{}px", fmt_num(self.height))
    }

    pub fn view_box(&self) -> ViewBox {
        self.size().view_box()
    }
}

/// Computes the transform and pixel size that frame `bounds` exactly.
///
/// `bounds` is measured in the transform group's local space after the
/// pan translation has been dropped. The canvas maps `view_box` units onto
/// `canvas` pixels, and the host zoom multiplies on top of that, so each
/// axis is `bounds / view_box * scale * canvas`. A missing view box counts
/// as zero extent and fails the finiteness check.
pub fn crop_frame(
    canvas: CanvasSize,
    view_box: Option<ViewBox>,
    scale: Scale,
    bounds: Rect,
) -> Result<CropFrame, CropError> {
    let bounds = bounds.ensure_measurable()?;
    let (view_w, view_h) = view_box
        .map(|view_box| (view_box.width, view_box.height))
        .unwrap_or((0.0, 0.0));
    let width = (bounds.width / view_w) * scale.x * canvas.width;
    let height = (bounds.height / view_h) * scale.y * canvas.height;
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !valid(width) || !valid(height) {
        return Err(CropError::InvalidDimensions { width, height });
    }
    Ok(CropFrame {
        width,
        height,
        transform: Transform::framed(scale, bounds.x, bounds.y),
    })
}
