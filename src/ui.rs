pub mod paint;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::config::{MenuItem, PauseItem};
use crate::screen::Screen;
use crate::session::GameSession;
use crate::util::{centered_offset, format_hms};

const LOGO: [&str; 5] = [
    "██████  ██       ██████  ██   ██",
    "██   ██ ██      ██    ██ ██  ██ ",
    "██████  ██      ██    ██ █████  ",
    "██   ██ ██      ██    ██ ██  ██ ",
    "██████  ███████  ██████  ██   ██",
];

const PRESS_ANY_KEY: &str = "Press Any Key";
const PAUSE_TITLE: &str = "Game Paused";
const PAUSE_HINT: &str = "ESC = Resume";

const PLAYER_COLOR: Color = Color::Cyan;
const TARGET_COLOR: Color = Color::Magenta;
const HIGHLIGHT: Color = Color::Yellow;

impl Widget for &GameSession {
    fn render(self, area: Rect, buf: &mut Buffer) {
        paint::clear_black(buf, area);

        match self.screen() {
            Screen::Logo => draw_logo(self, area, buf),
            Screen::PressKey => draw_press_key(self, area, buf),
            Screen::Menu => draw_menu(self, area, buf),
            Screen::Playing => draw_playing(self, area, buf),
            Screen::Paused => {
                // The frozen scene stays visible under the overlay.
                draw_playing(self, area, buf);
                draw_pause_overlay(self, area, buf);
            }
        }
    }
}

/// `Buffer::set_string` panics outside the buffer; clip here so tiny
/// terminals stay safe. The right edge is clipped by the buffer itself.
fn draw_text(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, color: Color) {
    if x >= area.right() || y >= area.bottom() {
        return;
    }
    buf.set_string(x, y, text, Style::default().fg(color));
}

fn draw_centered_line(buf: &mut Buffer, area: Rect, y: u16, text: &str, color: Color) {
    let x = area.left() + centered_offset(area.width, text.width() as u16);
    draw_text(buf, area, x, y, text, color);
}

fn draw_logo(session: &GameSession, area: Rect, buf: &mut Buffer) {
    let color = paint::scale(Color::White, session.logo_alpha());
    let top = area.top() + centered_offset(area.height, LOGO.len() as u16);

    for (i, row) in LOGO.iter().enumerate() {
        draw_centered_line(buf, area, top + i as u16, row, color);
    }
}

fn draw_press_key(session: &GameSession, area: Rect, buf: &mut Buffer) {
    if !session.press_text_visible() {
        return;
    }

    let y = area.top() + centered_offset(area.height, 1);
    draw_centered_line(buf, area, y, PRESS_ANY_KEY, Color::White);
}

fn draw_menu(session: &GameSession, area: Rect, buf: &mut Buffer) {
    let base = area.top() + centered_offset(area.height, 3);

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let color = if i == session.selected() {
            HIGHLIGHT
        } else {
            Color::White
        };
        draw_centered_line(buf, area, base + i as u16 * 2, &item.to_string(), color);
    }
}

fn draw_playing(session: &GameSession, area: Rect, buf: &mut Buffer) {
    let field = &session.playfield;
    let (pw, ph) = field.config().player_size;
    let (tw, th) = field.config().target_size;

    paint::fill_rect(
        buf,
        area,
        area.left() + field.target.x.round() as u16,
        area.top() + field.target.y.round() as u16,
        tw.round() as u16,
        th.round() as u16,
        TARGET_COLOR,
    );
    paint::fill_rect(
        buf,
        area,
        area.left() + field.player.x.round() as u16,
        area.top() + field.player.y.round() as u16,
        pw.round() as u16,
        ph.round() as u16,
        PLAYER_COLOR,
    );

    draw_hud(session, area, buf);
}

/// Clock top-left, score top-right, right-aligned by measured width.
fn draw_hud(session: &GameSession, area: Rect, buf: &mut Buffer) {
    let clock = format_hms(session.playfield.play_time);
    draw_text(buf, area, area.left() + 1, area.top(), &clock, Color::White);

    let score = format!("Score: {}", session.playfield.score);
    let x = area
        .right()
        .saturating_sub(score.width() as u16)
        .saturating_sub(1)
        .max(area.left());
    draw_text(buf, area, x, area.top(), &score, Color::White);
}

fn draw_pause_overlay(session: &GameSession, area: Rect, buf: &mut Buffer) {
    paint::darken_area(buf, area, 0.4);

    let title_y = area.top() + area.height / 4;
    draw_centered_line(buf, area, title_y, PAUSE_TITLE, HIGHLIGHT);

    let base = area.top() + centered_offset(area.height, 3);
    for (i, item) in PauseItem::ALL.iter().enumerate() {
        let color = if i == session.pause_selected() {
            HIGHLIGHT
        } else {
            Color::White
        };
        draw_centered_line(buf, area, base + i as u16 * 2, &item.to_string(), color);
    }

    let hint_y = area.top() + area.height.saturating_mul(3) / 4;
    draw_centered_line(buf, area, hint_y, PAUSE_HINT, Color::Gray);
}
