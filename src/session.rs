use crate::anim::{Blinker, LogoFade};
use crate::config::{GameConfig, MenuItem, PauseItem};
use crate::input::{InputState, Key, KeySet};
use crate::playfield::{Bounds, Playfield};
use crate::screen::{transition, Screen, Trigger};

/// Everything one run of the game mutates, in a single place.
///
/// Per-screen ownership of the fields: Logo reads/writes `logo`; PressKey
/// `blink`; Menu `selected` and `quit`; Playing and Paused share
/// `playfield` and `pause_selected`. `input` rotates every frame regardless
/// of screen.
#[derive(Debug)]
pub struct GameSession {
    screen: Screen,
    logo: LogoFade,
    blink: Blinker,
    selected: usize,
    pause_selected: usize,
    pub playfield: Playfield,
    input: InputState,
    quit: bool,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        Self {
            screen: Screen::Logo,
            logo: LogoFade::new(config.logo_phase_secs),
            blink: Blinker::new(config.blink_interval_secs),
            selected: 0,
            pause_selected: 0,
            playfield: Playfield::new(config, seed),
            input: InputState::new(),
            quit: false,
        }
    }

    /// One frame: install the key snapshot, run the active screen's
    /// handler, apply any resulting transition, rotate the snapshot for
    /// next frame's edge detection.
    pub fn update(&mut self, dt: f32, keys: &KeySet, bounds: Bounds) {
        self.input.begin_frame(*keys);

        let trigger = match self.screen {
            Screen::Logo => self.update_logo(dt),
            Screen::PressKey => self.update_press_key(dt),
            Screen::Menu => self.update_menu(bounds),
            Screen::Playing => self.update_playing(dt, bounds),
            Screen::Paused => self.update_paused(),
        };

        if let Some(trigger) = trigger {
            self.screen = transition(self.screen, trigger);
        }

        self.input.end_frame();
    }

    fn update_logo(&mut self, dt: f32) -> Option<Trigger> {
        self.logo.advance(dt);
        if self.logo.finished() {
            self.logo.reset();
            return Some(Trigger::LogoDone);
        }
        None
    }

    fn update_press_key(&mut self, dt: f32) -> Option<Trigger> {
        self.blink.advance(dt);
        if self.input.any_key_edge() {
            return Some(Trigger::AnyKey);
        }
        None
    }

    fn update_menu(&mut self, bounds: Bounds) -> Option<Trigger> {
        let len = MenuItem::ALL.len();

        if self.input.just_pressed(Key::Up) {
            self.selected = (self.selected + len - 1) % len;
        }
        if self.input.just_pressed(Key::Down) {
            self.selected = (self.selected + 1) % len;
        }
        if self.input.just_pressed(Key::Enter) {
            match MenuItem::ALL[self.selected] {
                MenuItem::StartGame => {
                    self.playfield.reset(bounds);
                    return Some(Trigger::StartGame);
                }
                MenuItem::Quit => self.quit = true,
            }
        }

        None
    }

    fn update_playing(&mut self, dt: f32, bounds: Bounds) -> Option<Trigger> {
        if self.input.just_pressed(Key::Escape) {
            // The pausing frame skips its gameplay tick.
            self.pause_selected = 0;
            return Some(Trigger::Pause);
        }

        self.playfield.tick(dt, self.input.current(), bounds);
        None
    }

    fn update_paused(&mut self) -> Option<Trigger> {
        let len = PauseItem::ALL.len();

        if self.input.just_pressed(Key::Up) {
            self.pause_selected = (self.pause_selected + len - 1) % len;
        }
        if self.input.just_pressed(Key::Down) {
            self.pause_selected = (self.pause_selected + 1) % len;
        }

        // ESC is a resume shortcut that bypasses the menu selection.
        if self.input.just_pressed(Key::Escape) {
            return Some(Trigger::Resume);
        }

        if self.input.just_pressed(Key::Enter) {
            return Some(match PauseItem::ALL[self.pause_selected] {
                PauseItem::Resume => Trigger::Resume,
                PauseItem::ExitToMenu => Trigger::ExitToMenu,
            });
        }

        None
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Set when "Quit" is activated; the host loop observes it and tears
    /// the terminal down. The session itself never exits the process.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn logo_alpha(&self) -> f32 {
        self.logo.alpha()
    }

    pub fn logo_timer(&self) -> f32 {
        self.logo.timer()
    }

    pub fn press_text_visible(&self) -> bool {
        self.blink.visible()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn pause_selected(&self) -> usize {
        self.pause_selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const BOUNDS: Bounds = Bounds {
        width: 80.0,
        height: 24.0,
    };

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), Some(1))
    }

    /// Runs one update with the given keys, then one with none, so the next
    /// press registers as a fresh edge.
    fn tap(session: &mut GameSession, keys: &[Key]) {
        session.update(0.0, &KeySet::of(keys), BOUNDS);
        session.update(0.0, &KeySet::new(), BOUNDS);
    }

    fn to_menu(session: &mut GameSession) {
        session.update(6.01, &KeySet::new(), BOUNDS);
        tap(session, &[Key::Other]);
        assert_matches!(session.screen(), Screen::Menu);
    }

    fn to_playing(session: &mut GameSession) {
        to_menu(session);
        tap(session, &[Key::Enter]);
        assert_matches!(session.screen(), Screen::Playing);
    }

    #[test]
    fn test_starts_on_logo() {
        let session = session();
        assert_matches!(session.screen(), Screen::Logo);
        assert_eq!(session.logo_alpha(), 0.0);
        assert!(!session.quit_requested());
    }

    #[test]
    fn test_logo_runs_its_course_then_moves_on() {
        let mut session = session();

        session.update(5.9, &KeySet::new(), BOUNDS);
        assert_matches!(session.screen(), Screen::Logo);

        session.update(0.2, &KeySet::new(), BOUNDS);
        assert_matches!(session.screen(), Screen::PressKey);
        assert_eq!(session.logo_timer(), 0.0);
        assert_eq!(session.logo_alpha(), 0.0);
    }

    #[test]
    fn test_logo_ignores_input() {
        let mut session = session();
        session.update(1.0, &KeySet::of(&[Key::Enter]), BOUNDS);
        assert_matches!(session.screen(), Screen::Logo);
    }

    #[test]
    fn test_press_key_needs_a_fresh_press() {
        let mut session = session();
        // Hold a key across the Logo -> PressKey boundary.
        session.update(3.0, &KeySet::of(&[Key::Other]), BOUNDS);
        session.update(3.1, &KeySet::of(&[Key::Other]), BOUNDS);
        assert_matches!(session.screen(), Screen::PressKey);

        // Still held: not an edge, no transition.
        session.update(0.1, &KeySet::of(&[Key::Other]), BOUNDS);
        assert_matches!(session.screen(), Screen::PressKey);

        // Release, then press: now it fires.
        session.update(0.1, &KeySet::new(), BOUNDS);
        session.update(0.1, &KeySet::of(&[Key::Other]), BOUNDS);
        assert_matches!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_press_text_blinks() {
        let mut session = session();
        session.update(6.01, &KeySet::new(), BOUNDS);
        assert!(session.press_text_visible());

        session.update(0.5, &KeySet::new(), BOUNDS);
        assert!(!session.press_text_visible());

        session.update(0.5, &KeySet::new(), BOUNDS);
        assert!(session.press_text_visible());
    }

    #[test]
    fn test_menu_navigation_wraps_both_ways() {
        let mut session = session();
        to_menu(&mut session);
        assert_eq!(session.selected(), 0);

        tap(&mut session, &[Key::Up]);
        assert_eq!(session.selected(), MenuItem::ALL.len() - 1);

        tap(&mut session, &[Key::Down]);
        assert_eq!(session.selected(), 0);

        tap(&mut session, &[Key::Down]);
        assert_eq!(session.selected(), 1);
    }

    #[test]
    fn test_menu_navigation_is_edge_triggered() {
        let mut session = session();
        to_menu(&mut session);

        // Held Down across several frames moves the cursor once.
        session.update(0.0, &KeySet::of(&[Key::Down]), BOUNDS);
        session.update(0.0, &KeySet::of(&[Key::Down]), BOUNDS);
        session.update(0.0, &KeySet::of(&[Key::Down]), BOUNDS);
        assert_eq!(session.selected(), 1);
    }

    #[test]
    fn test_start_game_resets_gameplay() {
        let mut session = session();
        to_menu(&mut session);

        session.playfield.score = 5;
        session.playfield.play_time = 99.0;

        tap(&mut session, &[Key::Enter]);

        assert_matches!(session.screen(), Screen::Playing);
        assert_eq!(session.playfield.score, 0);
        assert_eq!(session.playfield.play_time, 0.0);
    }

    #[test]
    fn test_quit_sets_flag_and_stays_on_menu() {
        let mut session = session();
        to_menu(&mut session);

        tap(&mut session, &[Key::Down]);
        tap(&mut session, &[Key::Enter]);

        assert!(session.quit_requested());
        assert_matches!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_playing_advances_clock() {
        let mut session = session();
        to_playing(&mut session);

        session.update(0.5, &KeySet::new(), BOUNDS);
        assert!((session.playfield.play_time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_escape_pauses_and_skips_that_tick() {
        let mut session = session();
        to_playing(&mut session);
        let time_before = session.playfield.play_time;

        session.update(0.5, &KeySet::of(&[Key::Escape]), BOUNDS);

        assert_matches!(session.screen(), Screen::Paused);
        assert_eq!(session.pause_selected(), 0);
        assert_eq!(session.playfield.play_time, time_before);
    }

    #[test]
    fn test_paused_clock_is_frozen() {
        let mut session = session();
        to_playing(&mut session);
        tap(&mut session, &[Key::Escape]);
        let frozen = session.playfield.play_time;

        session.update(2.0, &KeySet::new(), BOUNDS);
        assert_eq!(session.playfield.play_time, frozen);
    }

    #[test]
    fn test_pause_menu_wraps_and_resets_on_reentry() {
        let mut session = session();
        to_playing(&mut session);
        tap(&mut session, &[Key::Escape]);

        tap(&mut session, &[Key::Up]);
        assert_eq!(session.pause_selected(), PauseItem::ALL.len() - 1);
        tap(&mut session, &[Key::Down]);
        assert_eq!(session.pause_selected(), 0);

        // Leave the cursor on the second entry, resume, pause again:
        // the cursor starts over at the top.
        tap(&mut session, &[Key::Down]);
        tap(&mut session, &[Key::Escape]);
        assert_matches!(session.screen(), Screen::Playing);
        tap(&mut session, &[Key::Escape]);
        assert_matches!(session.screen(), Screen::Paused);
        assert_eq!(session.pause_selected(), 0);
    }

    #[test]
    fn test_pause_resume_via_enter() {
        let mut session = session();
        to_playing(&mut session);
        tap(&mut session, &[Key::Escape]);

        tap(&mut session, &[Key::Enter]);
        assert_matches!(session.screen(), Screen::Playing);
    }

    #[test]
    fn test_pause_exit_to_menu_keeps_score() {
        let mut session = session();
        to_playing(&mut session);
        session.playfield.score = 3;
        tap(&mut session, &[Key::Escape]);

        tap(&mut session, &[Key::Down]);
        tap(&mut session, &[Key::Enter]);

        assert_matches!(session.screen(), Screen::Menu);
        // Gameplay state only resets when a new game starts.
        assert_eq!(session.playfield.score, 3);
    }

    #[test]
    fn test_held_escape_does_not_bounce_between_states() {
        let mut session = session();
        to_playing(&mut session);

        session.update(0.0, &KeySet::of(&[Key::Escape]), BOUNDS);
        assert_matches!(session.screen(), Screen::Paused);

        // Escape still held on the next frames: no edge, stays paused.
        session.update(0.0, &KeySet::of(&[Key::Escape]), BOUNDS);
        session.update(0.0, &KeySet::of(&[Key::Escape]), BOUNDS);
        assert_matches!(session.screen(), Screen::Paused);
    }

    #[test]
    fn test_movement_applies_while_playing() {
        let mut session = session();
        to_playing(&mut session);
        let start = session.playfield.player;

        session.update(0.1, &KeySet::of(&[Key::D]), BOUNDS);

        assert!(session.playfield.player.x > start.x);
    }
}
