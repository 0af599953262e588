//! Capacity bar component for the weight/volume HUD
//!
//! Renders a horizontal fill bar plus a numeric readout using procedural
//! graphics (SDL2 rectangles). Bars are stateless components driven by
//! `BagManager::capacity_percentages()`; one instance is created per axis
//! (weight, volume) and re-rendered every frame.

use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for capacity bar appearance
#[derive(Debug, Clone)]
pub struct CapacityBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Background color (shown for unused capacity)
    pub background_color: Color,

    /// Fill color below the warning threshold
    pub fill_color: Color,

    /// Fill color at or above the warning threshold
    pub warn_color: Color,

    /// Percentage (0-100) at which the fill switches to `warn_color`
    pub warn_threshold: f32,

    /// Border color
    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,

    /// Label and readout text color
    pub text_color: Color,
}

impl Default for CapacityBarStyle {
    fn default() -> Self {
        CapacityBarStyle {
            width: 220,
            height: 14,
            background_color: Color::RGB(50, 50, 50),
            fill_color: Color::RGB(46, 204, 113),
            warn_color: Color::RGB(200, 60, 0),
            warn_threshold: 90.0,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 1,
            text_color: Color::RGB(230, 230, 230),
        }
    }
}

/// A labeled capacity fill bar
///
/// The fill level comes in as a 0-100 percentage (already clamped and
/// rounded by the bag manager) and the readout as preformatted
/// "current/max" text, so this component never does capacity arithmetic
/// of its own.
pub struct CapacityBar {
    label: String,
    style: CapacityBarStyle,
}

impl CapacityBar {
    /// Creates a capacity bar with default styling
    pub fn new(label: impl Into<String>) -> Self {
        CapacityBar {
            label: label.into(),
            style: CapacityBarStyle::default(),
        }
    }

    /// Creates a capacity bar with custom styling
    #[allow(dead_code)] // Reserved for future themed HUDs
    pub fn with_style(label: impl Into<String>, style: CapacityBarStyle) -> Self {
        CapacityBar {
            label: label.into(),
            style,
        }
    }

    /// Renders the bar at a fixed screen position
    ///
    /// # Parameters
    ///
    /// - `fill_pct`: fill level 0-100 (values outside are clamped)
    /// - `readout`: text drawn to the right of the bar, e.g. "37.5/100"
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        fill_pct: f32,
        readout: &str,
    ) -> Result<(), String> {
        // Label above the bar
        draw_simple_text(canvas, &self.label, x, y - 10, self.style.text_color, 1)?;

        // Background (unused capacity)
        let background_rect = Rect::new(x, y, self.style.width, self.style.height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(background_rect)?;

        // Filled portion
        let clamped = fill_pct.clamp(0.0, 100.0);
        let fill_width = (self.style.width as f32 * clamped / 100.0) as u32;

        if fill_width > 0 {
            let fill_color = if clamped >= self.style.warn_threshold {
                self.style.warn_color
            } else {
                self.style.fill_color
            };

            canvas.set_draw_color(fill_color);
            canvas.fill_rect(Rect::new(x, y, fill_width, self.style.height))?;
        }

        // Border drawn last so it sits on top of the fill
        if self.style.border_thickness > 0 {
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(background_rect)?;
        }

        // Numeric readout to the right of the bar
        draw_simple_text(
            canvas,
            readout,
            x + self.style.width as i32 + 8,
            y + (self.style.height as i32 - 7) / 2,
            self.style.text_color,
            1,
        )?;

        Ok(())
    }

    /// Gets a reference to the current style
    #[allow(dead_code)] // Reserved for future style inspection
    pub fn style(&self) -> &CapacityBarStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_bar_style() {
        let style = CapacityBarStyle::default();

        assert_eq!(style.width, 220);
        assert_eq!(style.height, 14);
        assert_eq!(style.warn_threshold, 90.0);
    }

    #[test]
    fn test_custom_style_is_kept() {
        let bar = CapacityBar::with_style(
            "VOLUME",
            CapacityBarStyle {
                width: 300,
                ..Default::default()
            },
        );

        assert_eq!(bar.style().width, 300);
    }
}
