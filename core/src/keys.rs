pub const KEY_TOGGLE: &str = " ";
pub const KEY_DISMISS: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Toggle,
    Dismiss,
}

/// Maps a `KeyboardEvent.key` to a command. Escape only means something
/// while an overlay is up.
pub fn command_for(key: &str, zoomed: bool) -> Option<KeyCommand> {
    match key {
        KEY_TOGGLE => Some(KeyCommand::Toggle),
        KEY_DISMISS if zoomed => Some(KeyCommand::Dismiss),
        _ => None,
    }
}

/// Drops keydowns that arrive within `window_ms` of the last accepted one.
///
/// The same physical keypress can reach both the page document and the
/// editor's input iframe, and key repeat fires continuously; both collapse
/// into one accepted event. Rejected events do not extend the window.
#[derive(Clone, Debug)]
pub struct KeyGate {
    window_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl KeyGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            let elapsed = now_ms - last;
            if (0.0..self.window_ms).contains(&elapsed) {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}
