//! Item Grid Component
//!
//! Renders the searchable catalog grid and hit-tests clicks back to item
//! ids. Filtering, scrolling, and cell geometry are shared between
//! rendering and hit-testing so the cell a user clicks is always the cell
//! they saw; clicks landing where no cell was drawn hit nothing.

use crate::catalog::Item;
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use std::collections::HashMap;

const CELL_SIZE: u32 = 64;
const CELL_MARGIN: u32 = 8;

/// Represents the visual style of the item grid.
#[derive(Debug, Clone)]
pub struct ItemGridStyle {
    pub cell_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
}

impl Default for ItemGridStyle {
    fn default() -> Self {
        ItemGridStyle {
            cell_color: Color::RGBA(50, 50, 60, 200),
            border_color: Color::RGBA(80, 80, 100, 220),
            text_color: Color::RGB(230, 230, 230),
            placeholder_color: Color::RGB(120, 100, 70),
        }
    }
}

/// The searchable catalog grid
///
/// Occupies a fixed screen region; items flow left-to-right, top-to-bottom
/// in catalog order, restricted to those matching the current search query.
/// Catalogs taller than the region scroll by whole rows via `scroll`.
pub struct ItemGrid {
    area: Rect,
    columns: u32,
    first_row: usize,
    style: ItemGridStyle,
}

impl ItemGrid {
    /// Creates a grid filling the given screen area
    pub fn new(area: Rect) -> Self {
        let columns = (area.width() + CELL_MARGIN) / (CELL_SIZE + CELL_MARGIN);

        ItemGrid {
            area,
            columns: columns.max(1),
            first_row: 0,
            style: ItemGridStyle::default(),
        }
    }

    /// Items visible under the current query, in catalog order
    fn visible<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
        items
            .iter()
            .filter(|item| item.matches_search(query))
            .collect()
    }

    /// Rows that fit fully inside the grid area
    fn visible_rows(&self) -> usize {
        (((self.area.height() + CELL_MARGIN) / (CELL_SIZE + CELL_MARGIN)) as usize).max(1)
    }

    /// Screen rectangle of the cell at a filtered-list index
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

    /// Scrolls by whole rows, clamped so the view never runs past the list
    ///
    /// `delta_rows` is positive toward the end of the catalog. Passing 0
    /// just re-clamps, which callers use after the filtered set shrinks.
    pub fn scroll(&mut self, delta_rows: i32, items: &[Item], query: &str) {
        let cell_count = Self::visible(items, query).len();
        let total_rows = cell_count.div_ceil(self.columns as usize);
        let max_first = total_rows.saturating_sub(self.visible_rows());

        let next = self.first_row as i64 + delta_rows as i64;
        self.first_row = next.clamp(0, max_first as i64) as usize;
    }

    /// Jumps back to the top, used when the search query changes
    pub fn reset_scroll(&mut self) {
        self.first_row = 0;
    }

    /// Returns the id of the item whose rendered cell contains (x, y)
    pub fn item_at(&self, items: &[Item], query: &str, x: i32, y: i32) -> Option<u32> {
        Self::visible(items, query)
            .iter()
            .enumerate()
            .find(|(index, _)| {
                self.cell_rect(*index)
                    .is_some_and(|cell| cell.contains_point((x, y)))
            })
            .map(|(_, item)| item.id)
    }

    /// Renders the grid of matching items
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        items: &[Item],
        query: &str,
        item_textures: &HashMap<String, Texture>,
    ) -> Result<(), String> {
        for (index, item) in Self::visible(items, query).iter().enumerate() {
            let Some(cell) = self.cell_rect(index) else {
                continue;
            };

            canvas.set_draw_color(self.style.cell_color);
            canvas.fill_rect(cell)?;
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(cell)?;

            let image_rect = Rect::new(cell.x() + 8, cell.y() + 4, CELL_SIZE - 16, CELL_SIZE - 24);
            if let Some(texture) = item_textures.get(&item.image_ref) {
                canvas.copy(texture, None, image_rect)?;
            } else {
                // Missing sprite: colored block with the item's initial
                canvas.set_draw_color(self.style.placeholder_color);
                canvas.fill_rect(image_rect)?;
                let initial: String = item.localized_name.chars().take(1).collect();
                draw_simple_text(
                    canvas,
                    &initial,
                    image_rect.x() + (image_rect.width() as i32 - 6) / 2,
                    image_rect.y() + (image_rect.height() as i32 - 7) / 2,
                    self.style.text_color,
                    1,
                )?;
            }

            // Weight label along the bottom edge, like the cell tooltip
            let label = format!("{:.1}", item.weight);
            draw_simple_text(
                canvas,
                &label,
                cell.x() + 6,
                cell.bottom() - 12,
                self.style.text_color,
                1,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, localized_name: &str) -> Item {
        Item {
            id,
            name: localized_name.to_string(),
            localized_name: localized_name.to_string(),
            weight: 1.0,
            volume: 1.0,
            description: String::new(),
            image_ref: Item::derive_image_ref(localized_name),
        }
    }

    #[test]
    fn test_column_count_follows_area_width() {
        // 3 * 64 + 2 * 8 = 208 pixels fits exactly 3 columns
        let grid = ItemGrid::new(Rect::new(0, 0, 208, 400));
        assert_eq!(grid.columns, 3);

        // A sliver of an area still gets one column
        let narrow = ItemGrid::new(Rect::new(0, 0, 10, 400));
        assert_eq!(narrow.columns, 1);

        // Fourth item wraps to the next row
        let items: Vec<Item> = (1u32..=4).map(|i| item(i, "Rope")).collect();
        assert_eq!(grid.item_at(&items, "", 5, 64 + 8 + 5), Some(4));
    }

    #[test]
    fn test_hit_testing_respects_search_filter() {
        let grid = ItemGrid::new(Rect::new(0, 0, 300, 400));
        let items = vec![item(1, "Rope"), item(2, "Tent"), item(3, "Rice")];

        // Unfiltered: first cell is Rope
        assert_eq!(grid.item_at(&items, "", 10, 10), Some(1));

        // Filtered to names containing "r": Rope, Rice pack to the front
        assert_eq!(grid.item_at(&items, "r", 10, 10), Some(1));
        assert_eq!(grid.item_at(&items, "r", 10 + 72, 10), Some(3));

        // Click in the margin between cells hits nothing
        assert_eq!(grid.item_at(&items, "", 66, 10), None);
    }

    #[test]
    fn test_click_outside_any_cell_returns_none() {
        let grid = ItemGrid::new(Rect::new(20, 80, 300, 400));
        let items = vec![item(1, "Rope")];

        assert_eq!(grid.item_at(&items, "", 5, 5), None);
        assert_eq!(grid.item_at(&items, "", 20, 80), Some(1));
    }

    #[test]
    fn test_clipped_cells_are_not_clickable() {
        // One visible row: rows fit = (70 + 8) / 72 = 1
        let grid = ItemGrid::new(Rect::new(0, 0, 300, 70));
        let items: Vec<Item> = (1u32..=8).map(|i| item(i, "Rope")).collect();

        // Row 0 is live
        assert_eq!(grid.item_at(&items, "", 5, 5), Some(1));

        // Row 1 was never drawn, so a click where it would sit hits nothing
        assert_eq!(grid.item_at(&items, "", 5, 72 + 5), None);
    }

    #[test]
    fn test_scrolling_brings_overflow_rows_into_view() {
        let mut grid = ItemGrid::new(Rect::new(0, 0, 300, 70));
        let items: Vec<Item> = (1u32..=8).map(|i| item(i, "Rope")).collect();

        // 4 columns, so row 1 starts at the fifth item
        grid.scroll(1, &items, "");
        assert_eq!(grid.item_at(&items, "", 5, 5), Some(5));

        // The row scrolled off the top is no longer clickable
        assert_eq!(grid.item_at(&items, "", 5, -67), None);
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut grid = ItemGrid::new(Rect::new(0, 0, 300, 70));
        let items: Vec<Item> = (1u32..=8).map(|i| item(i, "Rope")).collect();

        grid.scroll(-5, &items, "");
        assert_eq!(grid.first_row, 0);

        // 8 items / 4 columns = 2 rows, 1 visible, so last first_row is 1
        grid.scroll(99, &items, "");
        assert_eq!(grid.first_row, 1);

        // A shrinking filtered set re-clamps on the next scroll
        grid.scroll(0, &items[..2], "");
        assert_eq!(grid.first_row, 0);
    }

    #[test]
    fn test_reset_scroll_returns_to_the_top() {
        let mut grid = ItemGrid::new(Rect::new(0, 0, 300, 70));
        let items: Vec<Item> = (1u32..=8).map(|i| item(i, "Rope")).collect();

        grid.scroll(1, &items, "");
        grid.reset_scroll();

        assert_eq!(grid.item_at(&items, "", 5, 5), Some(1));
    }
}
