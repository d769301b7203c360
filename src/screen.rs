/// Which screen owns the current frame. The flow starts at `Logo`; there is
/// no terminal screen — quitting is an action the host observes, not a
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Logo,
    PressKey,
    Menu,
    Playing,
    Paused,
}

/// Outcome of a screen's update that may move the flow elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    LogoDone,
    AnyKey,
    StartGame,
    Pause,
    Resume,
    ExitToMenu,
}

/// The whole screen-flow table in one place. Pairs not listed here leave
/// the screen unchanged.
pub fn transition(screen: Screen, trigger: Trigger) -> Screen {
    use Screen::*;
    use Trigger::*;

    match (screen, trigger) {
        (Logo, LogoDone) => PressKey,
        (PressKey, AnyKey) => Menu,
        (Menu, StartGame) => Playing,
        (Playing, Pause) => Paused,
        (Paused, Resume) => Playing,
        (Paused, ExitToMenu) => Menu,
        (current, _) => current,
    }
}
