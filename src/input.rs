use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

/// How long a movement key stays "down" after its last event. Long enough to
/// bridge the OS auto-repeat delay so holding a key reads as one continuous
/// press.
const MOVEMENT_HOLD: Duration = Duration::from_millis(500);

/// Decay window for every other key: roughly one frame, so a tap lands in a
/// single snapshot.
const TAP_HOLD: Duration = Duration::from_millis(60);

/// The fixed key vocabulary the game reacts to. Anything else maps to
/// `Other`, which only matters on the press-any-key screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Enter,
    Escape,
    Other,
}

impl Key {
    pub const COUNT: usize = 11;

    fn index(self) -> usize {
        self as usize
    }

    /// Maps a terminal key code into the game vocabulary.
    pub fn from_key_code(code: KeyCode) -> Key {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Char('w') | KeyCode::Char('W') => Key::W,
            KeyCode::Char('a') | KeyCode::Char('A') => Key::A,
            KeyCode::Char('s') | KeyCode::Char('S') => Key::S,
            KeyCode::Char('d') | KeyCode::Char('D') => Key::D,
            _ => Key::Other,
        }
    }

    /// Movement keys are polled as held state; everything else is
    /// edge-triggered.
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            Key::Up | Key::Down | Key::Left | Key::Right | Key::W | Key::A | Key::S | Key::D
        )
    }
}

/// One frame's pressed-key snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeySet {
    down: [bool; Key::COUNT],
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given keys down. Handy in tests and the host loop.
    pub fn of(keys: &[Key]) -> Self {
        let mut set = Self::new();
        for &key in keys {
            set.press(key);
        }
        set
    }

    pub fn press(&mut self, key: Key) {
        self.down[key.index()] = true;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.down.iter().all(|d| !d)
    }
}

/// Two consecutive snapshots. An action fires only on the frame a key goes
/// from released to pressed, never on sustained hold; movement is the sole
/// exception and reads `is_down` directly.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    current: KeySet,
    previous: KeySet,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs this frame's snapshot. Call once at the top of an update.
    pub fn begin_frame(&mut self, snapshot: KeySet) {
        self.current = snapshot;
    }

    /// Rotates the snapshot for next frame's edge detection. Call once at
    /// the end of an update.
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.current.is_down(key)
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.current.is_down(key) && !self.previous.is_down(key)
    }

    /// The press-any-key rule: fires when the whole set transitions from
    /// empty to non-empty, not when an extra key joins an existing hold.
    pub fn any_key_edge(&self) -> bool {
        !self.current.is_empty() && self.previous.is_empty()
    }

    pub fn current(&self) -> &KeySet {
        &self.current
    }
}

/// Terminals report key events, not key state. `HeldKeys` reconstructs a
/// pressed-key snapshot by keeping each key "down" for a decay window after
/// its last event. Time is passed in so tests can drive it.
#[derive(Debug, Default)]
pub struct HeldKeys {
    expires: [Option<Instant>; Key::COUNT],
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key, now: Instant) {
        let ttl = if key.is_movement() {
            MOVEMENT_HOLD
        } else {
            TAP_HOLD
        };
        self.expires[key.index()] = Some(now + ttl);
    }

    /// Current snapshot, pruning expired keys as a side effect.
    pub fn snapshot(&mut self, now: Instant) -> KeySet {
        let mut set = KeySet::new();
        for (idx, slot) in self.expires.iter_mut().enumerate() {
            match *slot {
                Some(expiry) if expiry > now => set.down[idx] = true,
                Some(_) => *slot = None,
                None => {}
            }
        }
        set
    }
}
