//! Item Detail Modal
//!
//! A stateful overlay that shows one catalog item, a quantity selector in
//! [0, 10], the projected weight/volume for that quantity, and an ADD
//! button. The button renders disabled whenever the bag manager's preview
//! says the addition is inadmissible, so the commit affordance and the
//! admissibility rule can never drift apart.

use crate::bag::Preview;
use crate::catalog::Item;
use crate::text::{draw_simple_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use std::collections::HashMap;

/// Quantity selector bounds
pub const MIN_QUANTITY: u32 = 0;
pub const MAX_QUANTITY: u32 = 10;

const MODAL_WIDTH: u32 = 420;
const MODAL_HEIGHT: u32 = 320;
const BUTTON_SIZE: u32 = 28;

/// Configuration for modal appearance
#[derive(Debug, Clone)]
pub struct ItemModalStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub overlay_alpha: u8,
    pub title_color: Color,
    pub stat_color: Color,
    pub button_color: Color,
    pub add_enabled_color: Color,
    pub add_disabled_color: Color,
    pub add_text_color: Color,
}

impl Default for ItemModalStyle {
    fn default() -> Self {
        ItemModalStyle {
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            overlay_alpha: 180,
            title_color: Color::RGB(220, 220, 240),
            stat_color: Color::RGB(200, 200, 210),
            button_color: Color::RGB(80, 100, 140),
            // Green when admissible, gray when not
            add_enabled_color: Color::RGB(46, 204, 113),
            add_disabled_color: Color::RGB(102, 102, 102),
            add_text_color: Color::RGB(255, 255, 255),
        }
    }
}

/// Result of hit-testing a click against the open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    /// Decrement (-) button
    Decrement,
    /// Increment (+) button
    Increment,
    /// The ADD TO BAG button (enabled state is the caller's concern)
    Add,
    /// Inside the modal box but not on a control
    Inside,
    /// Outside the modal box (closes it, like clicking the backdrop)
    Outside,
}

/// Pixel layout of the modal controls for a given screen size
struct ModalLayout {
    modal: Rect,
    image: Rect,
    minus: Rect,
    plus: Rect,
    add: Rect,
}

fn layout(screen_width: u32, screen_height: u32) -> ModalLayout {
    let modal = Rect::new(
        ((screen_width - MODAL_WIDTH) / 2) as i32,
        ((screen_height - MODAL_HEIGHT) / 2) as i32,
        MODAL_WIDTH,
        MODAL_HEIGHT,
    );

    let image = Rect::new(modal.x() + (MODAL_WIDTH as i32 - 96) / 2, modal.y() + 48, 96, 96);

    let controls_y = modal.y() + 216;
    let center_x = modal.x() + MODAL_WIDTH as i32 / 2;
    let minus = Rect::new(center_x - 70, controls_y, BUTTON_SIZE, BUTTON_SIZE);
    let plus = Rect::new(center_x + 70 - BUTTON_SIZE as i32, controls_y, BUTTON_SIZE, BUTTON_SIZE);

    let add = Rect::new(modal.x() + 60, modal.y() + 264, MODAL_WIDTH - 120, 36);

    ModalLayout {
        modal,
        image,
        minus,
        plus,
        add,
    }
}

/// The open item-detail modal
///
/// Constructed when the user clicks a grid cell; dropped when the modal
/// closes. Opening always starts at quantity 1.
pub struct ItemModal {
    item: Item,
    quantity: u32,
    style: ItemModalStyle,
}

impl ItemModal {
    /// Opens a modal for the given item with quantity 1
    pub fn new(item: Item) -> Self {
        ItemModal {
            item,
            quantity: 1,
            style: ItemModalStyle::default(),
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Steps the quantity selector up, saturating at 10
    pub fn increment(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_QUANTITY);
    }

    /// Steps the quantity selector down, saturating at 0
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(MIN_QUANTITY);
    }

    /// Maps a click position to a modal control
    pub fn hit_test(&self, screen_width: u32, screen_height: u32, x: i32, y: i32) -> ModalHit {
        let layout = layout(screen_width, screen_height);
        let point = (x, y);

        if layout.minus.contains_point(point) {
            ModalHit::Decrement
        } else if layout.plus.contains_point(point) {
            ModalHit::Increment
        } else if layout.add.contains_point(point) {
            ModalHit::Add
        } else if layout.modal.contains_point(point) {
            ModalHit::Inside
        } else {
            ModalHit::Outside
        }
    }

    /// Renders the modal over a darkened backdrop
    ///
    /// `preview` must come from `BagManager::preview_addition` for the
    /// modal's item and current quantity.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        preview: &Preview,
        item_textures: &HashMap<String, Texture>,
    ) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.logical_size();
        let layout = layout(screen_width, screen_height);

        // Darkened backdrop
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        // Modal box with double border
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(layout.modal)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(layout.modal)?;
        canvas.draw_rect(Rect::new(
            layout.modal.x() + 2,
            layout.modal.y() + 2,
            layout.modal.width() - 4,
            layout.modal.height() - 4,
        ))?;

        // Title (centered localized name)
        let title = self.item.localized_name.to_uppercase();
        draw_simple_text(
            canvas,
            &title,
            layout.modal.x() + (layout.modal.width() as i32 - text_width(&title, 2) as i32) / 2,
            layout.modal.y() + 18,
            self.style.title_color,
            2,
        )?;

        // Item image or placeholder block
        if let Some(texture) = item_textures.get(&self.item.image_ref) {
            canvas.copy(texture, None, layout.image)?;
        } else {
            canvas.set_draw_color(Color::RGB(120, 100, 70));
            canvas.fill_rect(layout.image)?;
        }

        // Projected totals for the selected quantity
        let stats = format!(
            "{:.1}KG  {:.1}M3",
            preview.total_weight, preview.total_volume
        );
        draw_simple_text(
            canvas,
            &stats,
            layout.modal.x() + (layout.modal.width() as i32 - text_width(&stats, 2) as i32) / 2,
            layout.modal.y() + 160,
            self.style.stat_color,
            2,
        )?;

        // Quantity selector: [-] N [+]
        for (rect, label) in [(layout.minus, "-"), (layout.plus, "+")] {
            canvas.set_draw_color(self.style.button_color);
            canvas.fill_rect(rect)?;
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(rect)?;
            draw_simple_text(
                canvas,
                label,
                rect.x() + (rect.width() as i32 - 6) / 2,
                rect.y() + (rect.height() as i32 - 14) / 2,
                self.style.add_text_color,
                2,
            )?;
        }

        let quantity_text = format!("{}", self.quantity);
        draw_simple_text(
            canvas,
            &quantity_text,
            layout.modal.x()
                + (layout.modal.width() as i32 - text_width(&quantity_text, 2) as i32) / 2,
            layout.minus.y() + 7,
            self.style.title_color,
            2,
        )?;

        // ADD button, gray when the preview is inadmissible
        let add_color = if preview.admissible {
            self.style.add_enabled_color
        } else {
            self.style.add_disabled_color
        };
        canvas.set_draw_color(add_color);
        canvas.fill_rect(layout.add)?;

        let add_label = "ADD TO BAG";
        draw_simple_text(
            canvas,
            add_label,
            layout.add.x() + (layout.add.width() as i32 - text_width(add_label, 2) as i32) / 2,
            layout.add.y() + (layout.add.height() as i32 - 14) / 2,
            self.style.add_text_color,
            2,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 1,
            name: "Rope".to_string(),
            localized_name: "Rope".to_string(),
            weight: 3.0,
            volume: 2.0,
            description: String::new(),
            image_ref: "assets/items/rope.png".to_string(),
        }
    }

    #[test]
    fn test_modal_opens_at_quantity_one() {
        let modal = ItemModal::new(sample_item());

        assert_eq!(modal.quantity(), 1);
    }

    #[test]
    fn test_quantity_saturates_at_bounds() {
        let mut modal = ItemModal::new(sample_item());

        modal.decrement();
        assert_eq!(modal.quantity(), 0); // Floor, selector allows zero
        modal.decrement();
        assert_eq!(modal.quantity(), 0);

        for _ in 0..20 {
            modal.increment();
        }
        assert_eq!(modal.quantity(), MAX_QUANTITY); // Ceiling at 10
    }

    #[test]
    fn test_hit_test_maps_controls() {
        let modal = ItemModal::new(sample_item());
        let layout = layout(960, 600);

        let minus_center = (
            layout.minus.x() + layout.minus.width() as i32 / 2,
            layout.minus.y() + layout.minus.height() as i32 / 2,
        );
        assert_eq!(
            modal.hit_test(960, 600, minus_center.0, minus_center.1),
            ModalHit::Decrement
        );

        let add_center = (
            layout.add.x() + layout.add.width() as i32 / 2,
            layout.add.y() + layout.add.height() as i32 / 2,
        );
        assert_eq!(
            modal.hit_test(960, 600, add_center.0, add_center.1),
            ModalHit::Add
        );

        // Backdrop click closes the modal
        assert_eq!(modal.hit_test(960, 600, 2, 2), ModalHit::Outside);

        // A click in the modal body hits no control
        assert_eq!(
            modal.hit_test(960, 600, layout.modal.x() + 5, layout.modal.y() + 5),
            ModalHit::Inside
        );
    }
}
