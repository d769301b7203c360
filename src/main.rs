use std::error::Error;
use std::io::{self, stdin};
use std::time::{Duration, Instant};

use blok::config::GameConfig;
use blok::input::{HeldKeys, Key};
use blok::playfield::Bounds;
use blok::runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner};
use blok::session::GameSession;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

/// tiny terminal arcade game: chase the block, rack up points, beat the clock
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Steer your block into the target with WASD or the arrow keys. Every catch \
scores a point and the target jumps somewhere new. ESC pauses."
)]
pub struct Cli {
    /// fix the target-spawn sequence for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// frame interval in milliseconds
    #[clap(short = 't', long, default_value_t = 33)]
    tick_rate: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let res = run_game(&mut terminal, &cli);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_game<B: Backend>(terminal: &mut Terminal<B>, cli: &Cli) -> Result<(), Box<dyn Error>> {
    let ticker = FixedTicker::new(Duration::from_millis(cli.tick_rate.max(1)));
    let runner = Runner::new(CrosstermEventSource::new(), ticker);
    let mut session = GameSession::new(GameConfig::default(), cli.seed);
    let mut held = HeldKeys::new();
    let mut last_tick = Instant::now();

    terminal.draw(|f| f.render_widget(&session, f.area()))?;

    loop {
        match runner.step() {
            GameEvent::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                // ctrl+c quits from any screen
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break;
                }
                held.press(Key::from_key_code(key.code), Instant::now());
            }
            GameEvent::Resize => {
                terminal.draw(|f| f.render_widget(&session, f.area()))?;
            }
            GameEvent::Tick => {
                let now = Instant::now();
                let dt = now.duration_since(last_tick).as_secs_f32();
                last_tick = now;

                // Bounds come from the terminal every frame so resizes are
                // picked up without any special handling.
                let size = terminal.size()?;
                let bounds = Bounds::new(size.width as f32, size.height as f32);

                session.update(dt, &held.snapshot(now), bounds);
                if session.quit_requested() {
                    break;
                }

                terminal.draw(|f| f.render_widget(&session, f.area()))?;
            }
        }
    }

    Ok(())
}
