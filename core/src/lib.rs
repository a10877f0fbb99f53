pub mod error;
pub mod geometry;
pub mod host;
pub mod keys;
pub mod transform;
pub mod zoom;

pub use error::{CropError, LocateError};
pub use geometry::{crop_frame, parse_length, CanvasSize, CropFrame, Rect, ViewBox};
pub use host::HostContract;
pub use keys::{command_for, KeyCommand, KeyGate};
pub use transform::{fmt_num, Scale, Transform, Translate};
pub use zoom::{finish_unzoom, toggle_zoom, unzoom, zoom, OverlayHost, ZoomPhase, ZoomState};
