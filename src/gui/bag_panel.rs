//! Bag Panel Component
//!
//! Renders the packed entries as a grid of cells, each with a delete
//! button in its corner, and hit-tests delete clicks back to entry ids.
//! Geometry is shared between rendering and hit-testing, so a delete
//! click only ever lands on a button that was actually drawn. Bags
//! taller than the panel scroll by whole rows via `scroll`.

use crate::bag::{BagEntry, EntryId};
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use std::collections::HashMap;

const CELL_SIZE: u32 = 48;
const CELL_MARGIN: u32 = 6;
const DELETE_SIZE: u32 = 14;

/// Represents the visual style of the bag panel.
#[derive(Debug, Clone)]
pub struct BagPanelStyle {
    pub cell_color: Color,
    pub border_color: Color,
    pub delete_color: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
}

impl Default for BagPanelStyle {
    fn default() -> Self {
        BagPanelStyle {
            cell_color: Color::RGBA(40, 45, 40, 200),
            border_color: Color::RGBA(80, 100, 80, 220),
            delete_color: Color::RGB(200, 60, 50),
            text_color: Color::RGB(230, 230, 230),
            placeholder_color: Color::RGB(100, 110, 90),
        }
    }
}

/// The packed-entries panel
///
/// Entries flow left-to-right, top-to-bottom in insertion order. Each
/// cell carries a delete button in its top-right corner.
pub struct BagPanel {
    area: Rect,
    columns: u32,
    first_row: usize,
    style: BagPanelStyle,
}

impl BagPanel {
    /// Creates a panel filling the given screen area
    pub fn new(area: Rect) -> Self {
        let columns = (area.width() + CELL_MARGIN) / (CELL_SIZE + CELL_MARGIN);

        BagPanel {
            area,
            columns: columns.max(1),
            first_row: 0,
            style: BagPanelStyle::default(),
        }
    }

    /// Rows that fit fully inside the panel area
    fn visible_rows(&self) -> usize {
        (((self.area.height() + CELL_MARGIN) / (CELL_SIZE + CELL_MARGIN)) as usize).max(1)
    }

    /// Screen rectangle of the cell at an entry index
    ///
    /// Returns `None` for cells scrolled off the top or clipped past the
    /// bottom of the area; those cells are neither drawn nor clickable.
    fn cell_rect(&self, index: usize) -> Option<Rect> {
        let slot = index.checked_sub(self.first_row * self.columns as usize)?;

        let col = slot as u32 % self.columns;
        let row = slot as u32 / self.columns;
        if row as usize >= self.visible_rows() {
            return None;
        }

        Some(Rect::new(
            self.area.x() + (col * (CELL_SIZE + CELL_MARGIN)) as i32,
            self.area.y() + (row * (CELL_SIZE + CELL_MARGIN)) as i32,
            CELL_SIZE,
            CELL_SIZE,
        ))
    }

    /// Delete button rectangle in the top-right corner of a cell
    fn delete_rect(cell: Rect) -> Rect {
        Rect::new(
            cell.right() - DELETE_SIZE as i32,
            cell.y(),
            DELETE_SIZE,
            DELETE_SIZE,
        )
    }

    /// Scrolls by whole rows, clamped so the view never runs past the bag
    ///
    /// `delta_rows` is positive toward the end of the bag. Passing 0 just
    /// re-clamps, which callers use after entries are removed.
    pub fn scroll(&mut self, delta_rows: i32, entry_count: usize) {
        let total_rows = entry_count.div_ceil(self.columns as usize);
        let max_first = total_rows.saturating_sub(self.visible_rows());

        let next = self.first_row as i64 + delta_rows as i64;
        self.first_row = next.clamp(0, max_first as i64) as usize;
    }

    /// Returns the id of the entry whose rendered delete button contains (x, y)
    pub fn delete_at(&self, entries: &[BagEntry], x: i32, y: i32) -> Option<EntryId> {
        entries
            .iter()
            .enumerate()
            .find(|(index, _)| {
                self.cell_rect(*index)
                    .is_some_and(|cell| Self::delete_rect(cell).contains_point((x, y)))
            })
            .map(|(_, entry)| entry.id)
    }

    /// Renders the packed entries
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        entries: &[BagEntry],
        item_textures: &HashMap<String, Texture>,
    ) -> Result<(), String> {
        for (index, entry) in entries.iter().enumerate() {
            let Some(cell) = self.cell_rect(index) else {
                continue;
            };

            canvas.set_draw_color(self.style.cell_color);
            canvas.fill_rect(cell)?;
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(cell)?;

            let image_rect = Rect::new(cell.x() + 6, cell.y() + 6, CELL_SIZE - 12, CELL_SIZE - 12);
            if let Some(texture) = item_textures.get(&entry.image_ref) {
                canvas.copy(texture, None, image_rect)?;
            } else {
                canvas.set_draw_color(self.style.placeholder_color);
                canvas.fill_rect(image_rect)?;
            }

            // Per-entry delete button
            let delete = Self::delete_rect(cell);
            canvas.set_draw_color(self.style.delete_color);
            canvas.fill_rect(delete)?;
            draw_simple_text(
                canvas,
                "X",
                delete.x() + 4,
                delete.y() + 3,
                self.style.text_color,
                1,
            )?;
        }

        Ok(())
    }
}
