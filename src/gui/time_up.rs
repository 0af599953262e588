//! Time-Up Screen Component
//!
//! Terminal overlay shown once the session countdown reaches zero. It
//! darkens the screen, shows the final packed totals, and tells the user
//! how to quit. While this screen is up the event loop drops every mutating
//! gesture; the bag manager itself stays functional (it knows nothing about
//! time), the gating lives entirely out here in the presentation layer.

use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for time-up screen appearance
#[derive(Debug, Clone)]
pub struct TimeUpScreenStyle {
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    /// "TIME IS UP" text color
    pub title_color: Color,

    /// Final totals text color
    pub totals_color: Color,

    /// Instruction text color
    pub instruction_color: Color,
}

impl Default for TimeUpScreenStyle {
    fn default() -> Self {
        TimeUpScreenStyle {
            overlay_alpha: 220,
            title_color: Color::RGB(255, 200, 50),
            totals_color: Color::RGB(220, 220, 240),
            instruction_color: Color::RGB(150, 150, 160),
        }
    }
}

/// The end-of-session overlay
pub struct TimeUpScreen {
    style: TimeUpScreenStyle,
}

impl TimeUpScreen {
    /// Creates a time-up screen with default styling
    pub fn new() -> Self {
        TimeUpScreen {
            style: TimeUpScreenStyle::default(),
        }
    }

    /// Renders the overlay with the session's final numbers
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        packed_units: usize,
        weight_readout: &str,
        volume_readout: &str,
    ) -> Result<(), String> {
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        let (screen_width, screen_height) = canvas.logical_size();
        let center_y = screen_height as i32 / 2;

        let title = "TIME IS UP!";
        draw_simple_text(
            canvas,
            title,
            (screen_width as i32 - text_width(title, 4) as i32) / 2,
            center_y - 80,
            self.style.title_color,
            4,
        )?;

        let lines = [
            format!("PACKED UNITS: {}", packed_units),
            format!("WEIGHT: {}", weight_readout),
            format!("VOLUME: {}", volume_readout),
        ];
        for (i, line) in lines.iter().enumerate() {
            draw_simple_text(
                canvas,
                line,
                (screen_width as i32 - text_width(line, 2) as i32) / 2,
                center_y - 10 + i as i32 * 24,
                self.style.totals_color,
                2,
            )?;
        }

        let instruction = "PRESS ESC TO QUIT";
        draw_simple_text(
            canvas,
            instruction,
            (screen_width as i32 - text_width(instruction, 2) as i32) / 2,
            center_y + 80,
            self.style.instruction_color,
            2,
        )?;

        Ok(())
    }
}

impl Default for TimeUpScreen {
    fn default() -> Self {
        Self::new()
    }
}
