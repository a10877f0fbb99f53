//! Zoom session state machine.
//!
//! The state is a plain value threaded through `zoom` / `unzoom` /
//! `toggle_zoom`; presentation is delegated to an [`OverlayHost`], so the
//! transitions can be driven without a browser.

/// Capability to show and hide the zoom overlay.
pub trait OverlayHost {
    type Target: Clone;

    /// Builds and shows the overlay for `target`. Returns `false` when no
    /// overlay could be mounted.
    fn mount(&mut self, target: &Self::Target) -> bool;

    /// Starts the exit transition. Returns `false` when nothing is mounted.
    fn begin_unmount(&mut self) -> bool;

    /// Detaches the overlay. Must be a no-op when it is already gone.
    fn finish_unmount(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomPhase {
    #[default]
    Hidden,
    Showing,
    /// Exit transition running; still counts as zoomed until it finishes.
    Closing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomState<T> {
    phase: ZoomPhase,
    target: Option<T>,
}

impl<T> Default for ZoomState<T> {
    fn default() -> Self {
        Self {
            phase: ZoomPhase::Hidden,
            target: None,
        }
    }
}

impl<T> ZoomState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ZoomPhase {
        self.phase
    }

    pub fn is_zoomed(&self) -> bool {
        self.phase != ZoomPhase::Hidden
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn with_target(self, target: T) -> Self {
        Self {
            target: Some(target),
            ..self
        }
    }

    fn with_phase(self, phase: ZoomPhase) -> Self {
        Self { phase, ..self }
    }
}

pub fn zoom<H: OverlayHost>(state: ZoomState<H::Target>, host: &mut H) -> ZoomState<H::Target> {
    if state.phase != ZoomPhase::Hidden {
        return state;
    }
    let Some(target) = state.target.as_ref() else {
        return state;
    };
    if host.mount(target) {
        state.with_phase(ZoomPhase::Showing)
    } else {
        state
    }
}

/// Starts closing a shown overlay. The caller finishes the transition with
/// [`finish_unzoom`] once the fade delay has elapsed.
pub fn unzoom<H: OverlayHost>(state: ZoomState<H::Target>, host: &mut H) -> ZoomState<H::Target> {
    if state.phase != ZoomPhase::Showing {
        return state;
    }
    if host.begin_unmount() {
        state.with_phase(ZoomPhase::Closing)
    } else {
        // overlay removed behind our back
        host.finish_unmount();
        state.with_phase(ZoomPhase::Hidden)
    }
}

pub fn finish_unzoom<H: OverlayHost>(
    state: ZoomState<H::Target>,
    host: &mut H,
) -> ZoomState<H::Target> {
    if state.phase != ZoomPhase::Closing {
        return state;
    }
    host.finish_unmount();
    state.with_phase(ZoomPhase::Hidden)
}

pub fn toggle_zoom<H: OverlayHost>(
    state: ZoomState<H::Target>,
    host: &mut H,
) -> ZoomState<H::Target> {
    if state.is_zoomed() {
        unzoom(state, host)
    } else {
        zoom(state, host)
    }
}
