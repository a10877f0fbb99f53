use spotlight_core::{
    command_for, finish_unzoom, toggle_zoom, unzoom, zoom, KeyCommand, KeyGate, OverlayHost,
    ZoomPhase, ZoomState,
};

/// In-memory overlay: records what a real DOM overlay would do.
#[derive(Default)]
struct FakeOverlay {
    mounted: Option<&'static str>,
    visible: bool,
    mount_calls: usize,
    removals: usize,
    refuse: bool,
}

impl OverlayHost for FakeOverlay {
    type Target = &'static str;

    fn mount(&mut self, target: &Self::Target) -> bool {
        self.mount_calls += 1;
        if self.refuse {
            return false;
        }
        assert!(self.mounted.is_none(), "second overlay mounted");
        self.mounted = Some(*target);
        self.visible = true;
        true
    }

    fn begin_unmount(&mut self) -> bool {
        if self.mounted.is_none() {
            return false;
        }
        self.visible = false;
        true
    }

    fn finish_unmount(&mut self) {
        if self.mounted.take().is_some() {
            self.removals += 1;
        }
    }
}

#[test]
fn zoom_without_target_is_noop() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new(), &mut host);
    assert!(!state.is_zoomed());
    assert_eq!(host.mount_calls, 0);
}

#[test]
fn zoom_mounts_overlay() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    assert_eq!(state.phase(), ZoomPhase::Showing);
    assert_eq!(host.mounted, Some("image-a"));
    assert!(host.visible);
}

#[test]
fn failed_mount_leaves_state_unchanged() {
    let mut host = FakeOverlay {
        refuse: true,
        ..FakeOverlay::default()
    };
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    assert!(!state.is_zoomed());
    assert!(host.mounted.is_none());
}

#[test]
fn unzoom_fades_then_detaches() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    let state = unzoom(state, &mut host);
    assert_eq!(state.phase(), ZoomPhase::Closing);
    assert!(state.is_zoomed());
    assert!(!host.visible);
    assert_eq!(host.mounted, Some("image-a"));

    let state = finish_unzoom(state, &mut host);
    assert_eq!(state.phase(), ZoomPhase::Hidden);
    assert!(host.mounted.is_none());
    assert_eq!(state.target(), Some(&"image-a"));
}

#[test]
fn repeated_unzoom_removes_once() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    let state = unzoom(state, &mut host);
    let state = unzoom(state, &mut host);
    let state = finish_unzoom(state, &mut host);
    let state = finish_unzoom(state, &mut host);
    assert!(!state.is_zoomed());
    assert_eq!(host.removals, 1);
}

#[test]
fn unzoom_when_hidden_is_noop() {
    let mut host = FakeOverlay::default();
    let state: ZoomState<&'static str> = unzoom(ZoomState::new(), &mut host);
    assert_eq!(state.phase(), ZoomPhase::Hidden);
    assert_eq!(host.removals, 0);
}

#[test]
fn unzoom_recovers_from_externally_removed_overlay() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    host.mounted = None;
    let state = unzoom(state, &mut host);
    assert_eq!(state.phase(), ZoomPhase::Hidden);
}

#[test]
fn toggle_twice_restores_hidden() {
    let mut host = FakeOverlay::default();
    let state = ZoomState::new().with_target("image-a");
    let state = toggle_zoom(state, &mut host);
    assert!(state.is_zoomed());
    let state = toggle_zoom(state, &mut host);
    let state = finish_unzoom(state, &mut host);
    assert!(!state.is_zoomed());
    assert!(host.mounted.is_none());
}

#[test]
fn toggle_twice_restores_showing() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    let state = toggle_zoom(state, &mut host);
    let state = finish_unzoom(state, &mut host);
    let state = toggle_zoom(state, &mut host);
    assert_eq!(state.phase(), ZoomPhase::Showing);
    assert_eq!(host.mount_calls, 2);
}

#[test]
fn toggle_during_fade_does_not_remount() {
    let mut host = FakeOverlay::default();
    let state = zoom(ZoomState::new().with_target("image-a"), &mut host);
    let state = toggle_zoom(state, &mut host);
    let state = toggle_zoom(state, &mut host);
    assert_eq!(state.phase(), ZoomPhase::Closing);
    assert_eq!(host.mount_calls, 1);
}

#[test]
fn key_gate_drops_events_inside_window() {
    let mut gate = KeyGate::new(250.0);
    assert!(gate.accept(10_000.0));
    assert!(!gate.accept(10_100.0));
    assert!(gate.accept(10_300.0));
}

#[test]
fn key_gate_window_is_measured_from_last_accepted() {
    let mut gate = KeyGate::new(250.0);
    assert!(gate.accept(0.0));
    assert!(!gate.accept(200.0));
    assert!(gate.accept(260.0));
    assert!(!gate.accept(400.0));
}

#[test]
fn key_gate_accepts_first_event_at_any_time() {
    let mut gate = KeyGate::new(250.0);
    assert!(gate.accept(1.0));
}

#[test]
fn escape_only_dismisses_when_zoomed() {
    assert_eq!(command_for("Escape", false), None);
    assert_eq!(command_for("Escape", true), Some(KeyCommand::Dismiss));
    assert_eq!(command_for(" ", false), Some(KeyCommand::Toggle));
    assert_eq!(command_for(" ", true), Some(KeyCommand::Toggle));
    assert_eq!(command_for("a", true), None);
    assert_eq!(command_for("Enter", false), None);
}
