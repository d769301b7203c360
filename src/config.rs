use strum_macros::Display;

/// Compiled-in gameplay tuning. Positions and sizes are in terminal cells,
/// speeds in cells per second, durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub player_speed: f32,
    /// Player sprite footprint (width, height).
    pub player_size: (f32, f32),
    /// Target sprite footprint (width, height).
    pub target_size: (f32, f32),
    /// Length of each logo phase (fade in, hold, fade out are equal).
    pub logo_phase_secs: f32,
    /// How often the "Press Any Key" prompt toggles visibility.
    pub blink_interval_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 24.0,
            player_size: (4.0, 2.0),
            target_size: (4.0, 2.0),
            logo_phase_secs: 2.0,
            blink_interval_secs: 0.5,
        }
    }
}

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MenuItem {
    #[strum(to_string = "Start Game")]
    StartGame,
    #[strum(to_string = "Quit")]
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::StartGame, MenuItem::Quit];
}

/// Pause menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PauseItem {
    #[strum(to_string = "Resume")]
    Resume,
    #[strum(to_string = "Exit to Main Menu")]
    ExitToMenu,
}

impl PauseItem {
    pub const ALL: [PauseItem; 2] = [PauseItem::Resume, PauseItem::ExitToMenu];
}
