use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Channel values for the palette the game draws with. Terminal themes
/// vary; these stock values only feed the alpha/darken math, not the
/// terminal's own rendering of named colors.
fn channels(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((255, 255, 255)),
        Color::Gray => Some((192, 192, 192)),
        Color::DarkGray => Some((128, 128, 128)),
        Color::Red => Some((255, 0, 0)),
        Color::Green => Some((0, 255, 0)),
        Color::Blue => Some((0, 0, 255)),
        Color::Yellow => Some((255, 255, 0)),
        Color::Cyan => Some((0, 255, 255)),
        Color::Magenta => Some((255, 0, 255)),
        _ => None,
    }
}

/// Multiplies a color toward black: the terminal stand-in for drawing at
/// `factor` opacity over a black background. Colors outside the known
/// palette pass through unchanged.
pub fn scale(color: Color, factor: f32) -> Color {
    let f = factor.clamp(0.0, 1.0);
    match channels(color) {
        Some((r, g, b)) => Color::Rgb(
            (r as f32 * f) as u8,
            (g as f32 * f) as u8,
            (b as f32 * f) as u8,
        ),
        None => color,
    }
}

/// Paints the whole area black, the per-frame clear every screen starts
/// from.
pub fn clear_black(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(Color::Black);
            }
        }
    }
}

/// Fills a rectangle of cells with solid blocks, clipped to `area`.
/// Coordinates are absolute buffer coordinates.
pub fn fill_rect(buf: &mut Buffer, area: Rect, x: u16, y: u16, w: u16, h: u16, color: Color) {
    let right = area.right().min(x.saturating_add(w));
    let bottom = area.bottom().min(y.saturating_add(h));

    for cy in y.max(area.top())..bottom {
        for cx in x.max(area.left())..right {
            if let Some(cell) = buf.cell_mut((cx, cy)) {
                cell.set_symbol("█");
                cell.set_fg(color);
                cell.set_bg(Color::Black);
            }
        }
    }
}

/// Darkens everything already drawn in `area` by `factor`. 0.4 is the
/// pause screen's 60 % black overlay.
pub fn darken_area(buf: &mut Buffer, area: Rect, factor: f32) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.fg = scale(cell.fg, factor);
                cell.bg = scale(cell.bg, factor);
            }
        }
    }
}
