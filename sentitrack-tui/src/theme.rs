//! Neon-on-dark theme tokens for the dashboard.
//!
//! Color roles:
//! - **Accent**: electric cyan (focus, raw sentiment line)
//! - **Positive**: neon green (gains, strong positive correlation)
//! - **Negative**: hot pink (losses, strong negative correlation)
//! - **Warning**: neon orange (degraded states, mild negative correlation)
//! - **Neutral**: cool purple (smoothed sentiment overlay)
//! - **Muted**: steel blue (axes, hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::Rgb(220, 220, 220);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Highlight for the selected tab label.
pub fn tab_highlight() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Raw daily sentiment series.
pub fn sentiment_series() -> Style {
    Style::default().fg(ACCENT)
}

/// 3-day smoothed sentiment overlay.
pub fn smoothed_series() -> Style {
    Style::default().fg(NEUTRAL)
}

/// Sign-based color for returns and sentiment values.
pub fn signed_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE
    } else {
        NEGATIVE
    }
}

/// Diverging scale for a Pearson r in [-1, 1].
pub fn correlation_color(r: f64) -> Color {
    match r {
        r if r >= 0.6 => POSITIVE,
        r if r >= 0.2 => ACCENT,
        r if r > -0.2 => MUTED,
        r if r > -0.6 => WARNING,
        _ => NEGATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_color_splits_on_zero() {
        assert_eq!(signed_color(1.2), POSITIVE);
        assert_eq!(signed_color(0.0), POSITIVE);
        assert_eq!(signed_color(-0.4), NEGATIVE);
    }

    #[test]
    fn correlation_scale_diverges() {
        assert_eq!(correlation_color(1.0), POSITIVE);
        assert_eq!(correlation_color(0.878), POSITIVE);
        assert_eq!(correlation_color(0.3), ACCENT);
        assert_eq!(correlation_color(0.0), MUTED);
        assert_eq!(correlation_color(-0.1), MUTED);
        assert_eq!(correlation_color(-0.4), WARNING);
        assert_eq!(correlation_color(-0.9), NEGATIVE);
    }

    #[test]
    fn tab_highlight_is_bold() {
        assert!(tab_highlight().add_modifier.contains(Modifier::BOLD));
    }
}
