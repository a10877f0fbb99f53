/// Why the current selection could not be resolved to an image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("workspace element not found")]
    NoWorkspace,
    #[error("no selection marker in workspace")]
    NoSelection,
    #[error("selection is not inside an object group")]
    NoObjectGroup,
    #[error("object group has no image")]
    NoImage,
}

/// Why a cropped document could not be built. Every variant aborts the
/// current attempt and leaves the page untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CropError {
    #[error("no svg canvas encloses the image")]
    NoCanvas,
    #[error("no object group encloses the image")]
    NoObjectGroup,
    #[error("canvas has no transform group")]
    NoTransformGroup,
    #[error("invalid canvas size: width {width:?}, height {height:?}")]
    InvalidCanvasSize {
        width: Option<f64>,
        height: Option<f64>,
    },
    #[error("selection marker missing from cloned object")]
    NoSelectionMarker,
    #[error("degenerate selection bounds {width}x{height}")]
    DegenerateBounds { width: f64, height: f64 },
    #[error("invalid cropped dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("dom error: {0}")]
    Dom(String),
}
