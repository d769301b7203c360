/// Formats accumulated play time as `HH:MM:SS` for the HUD clock.
///
/// Negative or NaN input is treated as zero; hours keep counting past 99.
pub fn format_hms(seconds: f32) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Offset that centers content of `content_width` cells inside a span of
/// `area_width` cells. Content wider than the area pins to 0.
pub fn centered_offset(area_width: u16, content_width: u16) -> u16 {
    area_width.saturating_sub(content_width) / 2
}
