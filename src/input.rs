//! Held-key tracking.
//!
//! Terminals that support the kitty keyboard protocol report key releases, so
//! a key is held from its press until its release. Elsewhere only presses and
//! auto-repeats arrive, and a key counts as held for [`KEY_HOLD_WINDOW`] after
//! the last one.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::constants::KEY_HOLD_WINDOW;
use crate::game::Controls;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HeldKey {
    Left,
    Right,
    Thrust,
    Fire,
}

impl HeldKey {
    const COUNT: usize = 4;

    fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Up => Some(Self::Thrust),
            KeyCode::Char(' ') => Some(Self::Fire),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug)]
pub struct InputTracker {
    reports_releases: bool,
    last_seen: [Option<Instant>; HeldKey::COUNT],
}

impl InputTracker {
    #[must_use]
    pub fn new(reports_releases: bool) -> Self {
        Self {
            reports_releases,
            last_seen: [None; HeldKey::COUNT],
        }
    }

    /// Record a key event. Keys that do not steer the ship are ignored.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(held) = HeldKey::from_code(key.code) else {
            return;
        };
        let slot = &mut self.last_seen[held.index()];
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => *slot = Some(now),
            KeyEventKind::Release => *slot = None,
        }
    }

    pub fn release_all(&mut self) {
        self.last_seen = [None; HeldKey::COUNT];
    }

    fn is_held(&self, key: HeldKey, now: Instant) -> bool {
        self.last_seen[key.index()].is_some_and(|at| {
            self.reports_releases || now.saturating_duration_since(at) <= KEY_HOLD_WINDOW
        })
    }

    /// What the player is asking the ship to do this frame.
    #[must_use]
    pub fn controls(&self, now: Instant) -> Controls {
        Controls {
            left: self.is_held(HeldKey::Left, now),
            right: self.is_held(HeldKey::Right, now),
            thrust: self.is_held(HeldKey::Thrust, now),
            fire: self.is_held(HeldKey::Fire, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use std::time::Duration;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_and_release() {
        let mut input = InputTracker::new(true);
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Up, KeyEventKind::Press), t0);
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press), t0);

        let later = t0 + Duration::from_secs(5);
        let held = input.controls(later);
        assert!(held.thrust && held.fire);
        assert!(!held.left && !held.right);

        input.handle_key(key(KeyCode::Up, KeyEventKind::Release), later);
        let held = input.controls(later);
        assert!(!held.thrust);
        assert!(held.fire);
    }

    #[test]
    fn test_hold_window_without_releases() {
        let mut input = InputTracker::new(false);
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(input.controls(t0 + KEY_HOLD_WINDOW).left);
        assert!(!input.controls(t0 + KEY_HOLD_WINDOW + Duration::from_millis(1)).left);

        // An auto-repeat extends the hold.
        let t1 = t0 + Duration::from_millis(150);
        input.handle_key(key(KeyCode::Left, KeyEventKind::Repeat), t1);
        assert!(input.controls(t1 + Duration::from_millis(100)).left);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut input = InputTracker::new(true);
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), t0);
        assert_eq!(input.controls(t0), Controls::default());
    }

    #[test]
    fn test_release_all() {
        let mut input = InputTracker::new(true);
        let t0 = Instant::now();
        input.handle_key(key(KeyCode::Right, KeyEventKind::Press), t0);
        input.release_all();
        assert_eq!(input.controls(t0), Controls::default());
    }
}
