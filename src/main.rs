use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

mod bag;
mod catalog;
mod gui;
mod session;
mod text;
mod ui;

use bag::BagManager;
use catalog::{load_catalog, Item};
use gui::{BagPanel, ItemGrid, ItemModal, ModalHit, TimeUpScreen};
use session::{CountdownTimer, SessionConfig};
use text::draw_simple_text;
use ui::CapacityBar;

use std::collections::HashMap;
use std::path::Path;

// Screen layout constants
const SCREEN_WIDTH: u32 = 960;
const SCREEN_HEIGHT: u32 = 600;
const CATALOG_PATH: &str = "assets/items.json";

/// App state for gesture routing
///
/// `Browsing` covers both the bare grid and the open modal (the modal is a
/// separate `Option` because it carries the selected item). `TimeUp` is
/// terminal: every mutating gesture is dropped there, which is the
/// session-end gate the bag manager deliberately does not implement.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AppState {
    Browsing,
    TimeUp,
}

/// Generic texture loading helper
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Loads whatever item sprites exist on disk
///
/// Missing sprites are expected (the catalog is data-driven); the grid and
/// bag panel render a placeholder block for those.
fn load_item_textures<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    items: &[Item],
) -> HashMap<String, sdl2::render::Texture<'a>> {
    let mut textures = HashMap::new();

    for item in items {
        if textures.contains_key(&item.image_ref) || !Path::new(&item.image_ref).exists() {
            continue;
        }
        match load_texture(texture_creator, &item.image_ref) {
            Ok(texture) => {
                textures.insert(item.image_ref.clone(), texture);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    textures
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Packing Simulator", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Catalog load failure degrades to an empty grid, never a crash
    let items = load_catalog(CATALOG_PATH).unwrap_or_else(|e| {
        eprintln!("Failed to load catalog: {}", e);
        Vec::new()
    });
    let item_textures = load_item_textures(&texture_creator, &items);

    let config = SessionConfig::default();
    let mut bag = BagManager::new(config.max_weight, config.max_volume);
    let mut timer = CountdownTimer::new(config.countdown_secs);

    // Screen regions: catalog grid on the left, capacity HUD and bag on
    // the right
    let grid_area = Rect::new(20, 90, 610, 490);
    let bag_area = Rect::new(660, 210, 280, 370);
    let mut item_grid = ItemGrid::new(grid_area);
    let mut bag_panel = BagPanel::new(bag_area);
    let weight_bar = CapacityBar::new("WEIGHT");
    let volume_bar = CapacityBar::new("VOLUME");
    let time_up_screen = TimeUpScreen::new();

    let mut app_state = AppState::Browsing;
    let mut modal: Option<ItemModal> = None;
    let mut search_query = String::new();
    let mut mouse_pos = (0, 0);

    video_subsystem.text_input().start();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,

                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    if app_state == AppState::TimeUp {
                        break 'running;
                    } else if modal.is_some() {
                        modal = None;
                    } else if !search_query.is_empty() {
                        search_query.clear();
                        item_grid.reset_scroll();
                    } else {
                        break 'running;
                    }
                }

                // Quantity selector: arrow keys while the modal is open
                Event::KeyDown {
                    keycode: Some(Keycode::Right | Keycode::Up),
                    ..
                } if app_state == AppState::Browsing && modal.is_some() => {
                    if let Some(open) = modal.as_mut() {
                        open.increment();
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Left | Keycode::Down),
                    ..
                } if app_state == AppState::Browsing && modal.is_some() => {
                    if let Some(open) = modal.as_mut() {
                        open.decrement();
                    }
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } if app_state == AppState::Browsing && modal.is_some() => {
                    try_commit(&mut bag, &mut modal);
                }

                // Search input while browsing the grid
                Event::TextInput { text, .. }
                    if app_state == AppState::Browsing && modal.is_none() =>
                {
                    search_query.push_str(&text);
                    item_grid.reset_scroll();
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Backspace),
                    ..
                } if app_state == AppState::Browsing && modal.is_none() => {
                    search_query.pop();
                    item_grid.reset_scroll();
                }

                Event::MouseMotion { x, y, .. } => {
                    mouse_pos = (x, y);
                }

                // Wheel scrolls whichever component the cursor is over
                Event::MouseWheel { y: scroll_y, .. }
                    if app_state == AppState::Browsing && modal.is_none() =>
                {
                    // Wheel up is positive, rows count toward the end
                    let delta_rows = -scroll_y;
                    if grid_area.contains_point(mouse_pos) {
                        item_grid.scroll(delta_rows, &items, &search_query);
                    } else if bag_area.contains_point(mouse_pos) {
                        bag_panel.scroll(delta_rows, bag.entries().len());
                    }
                }

                Event::MouseButtonDown {
                    mouse_btn: sdl2::mouse::MouseButton::Left,
                    x,
                    y,
                    ..
                } if app_state == AppState::Browsing => {
                    if let Some(hit) = modal
                        .as_ref()
                        .map(|open| open.hit_test(SCREEN_WIDTH, SCREEN_HEIGHT, x, y))
                    {
                        match hit {
                            ModalHit::Decrement => {
                                if let Some(open) = modal.as_mut() {
                                    open.decrement();
                                }
                            }
                            ModalHit::Increment => {
                                if let Some(open) = modal.as_mut() {
                                    open.increment();
                                }
                            }
                            ModalHit::Add => try_commit(&mut bag, &mut modal),
                            ModalHit::Outside => modal = None,
                            ModalHit::Inside => {}
                        }
                    } else if let Some(item_id) = item_grid.item_at(&items, &search_query, x, y) {
                        if let Some(item) = items.iter().find(|i| i.id == item_id) {
                            modal = Some(ItemModal::new(item.clone()));
                        }
                    } else if let Some(entry_id) = bag_panel.delete_at(bag.entries(), x, y) {
                        // Idempotent on the manager side, so a double-click
                        // that races the re-render is harmless
                        bag.remove_entry(entry_id);
                        bag_panel.scroll(0, bag.entries().len());
                    }
                }

                _ => {}
            }
        }

        // Countdown; the expiry transition fires exactly once
        timer.update();
        if timer.take_expiry() {
            modal = None;
            app_state = AppState::TimeUp;
            println!(
                "Session over: {} units packed, weight {:.1}/{:.0}, volume {:.1}/{:.0}",
                bag.entries().len(),
                bag.current_weight(),
                bag.max_weight(),
                bag.current_volume(),
                bag.max_volume()
            );
        }

        // ------------------------- Rendering -------------------------
        canvas.set_draw_color(Color::RGB(20, 20, 28));
        canvas.clear();

        draw_simple_text(&mut canvas, "PACKING SIMULATOR", 20, 16, Color::RGB(220, 220, 240), 3)?;

        // Search bar
        let search_rect = Rect::new(20, 52, 400, 24);
        canvas.set_draw_color(Color::RGB(40, 40, 52));
        canvas.fill_rect(search_rect)?;
        canvas.set_draw_color(Color::RGB(80, 80, 100));
        canvas.draw_rect(search_rect)?;
        let search_display = format!("SEARCH: {}_", search_query);
        draw_simple_text(
            &mut canvas,
            &search_display,
            search_rect.x() + 6,
            search_rect.y() + 8,
            Color::RGB(200, 200, 210),
            1,
        )?;

        // Countdown readout, red in the final ten seconds
        let remaining = timer.remaining_secs();
        let timer_color = if remaining <= 10 {
            Color::RGB(255, 80, 80)
        } else {
            Color::RGB(220, 220, 240)
        };
        draw_simple_text(
            &mut canvas,
            &format!("TIME: {}", remaining),
            SCREEN_WIDTH as i32 - 140,
            24,
            timer_color,
            2,
        )?;

        item_grid.render(&mut canvas, &items, &search_query, &item_textures)?;

        // Capacity HUD (percentages are display-only, admissibility is
        // decided inside the bag manager)
        let (weight_pct, volume_pct) = bag.capacity_percentages();
        let weight_readout = format!("{:.1}/{:.0}", bag.current_weight(), bag.max_weight());
        let volume_readout = format!("{:.1}/{:.0}", bag.current_volume(), bag.max_volume());
        weight_bar.render(&mut canvas, 660, 110, weight_pct, &weight_readout)?;
        volume_bar.render(&mut canvas, 660, 160, volume_pct, &volume_readout)?;

        draw_simple_text(&mut canvas, "BAG", 660, 192, Color::RGB(220, 220, 240), 2)?;
        bag_panel.render(&mut canvas, bag.entries(), &item_textures)?;

        if let Some(open) = &modal {
            let preview = bag.preview_addition(open.item(), open.quantity());
            open.render(&mut canvas, &preview, &item_textures)?;
        }

        if app_state == AppState::TimeUp {
            time_up_screen.render(
                &mut canvas,
                bag.entries().len(),
                &weight_readout,
                &volume_readout,
            )?;
        }

        canvas.present();
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}

/// Commits the modal's selection into the bag
///
/// On success the modal closes. On failure the
/// modal stays open so the user can adjust the quantity; the ADD button is
/// already rendered disabled for inadmissible previews, so the error path
/// only triggers via the keyboard shortcut.
fn try_commit(bag: &mut BagManager, modal: &mut Option<ItemModal>) {
    let Some(open) = modal.as_ref() else {
        return;
    };

    match bag.commit_addition(open.item(), open.quantity()) {
        Ok(created) => {
            println!(
                "Added {} x{} (weight {:.1}/{:.0}, volume {:.1}/{:.0})",
                open.item().localized_name,
                created.len(),
                bag.current_weight(),
                bag.max_weight(),
                bag.current_volume(),
                bag.max_volume()
            );
            *modal = None;
        }
        Err(e) => {
            println!("Rejected: {}", e);
        }
    }
}
