use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use engine::board::{Board, Position, Tile};
use engine::constant::TILE_SIZE;
use engine::engine::Engine;
use engine::observer::{BoardEvent, BoardObserver};
use fltk::{app, draw, enums::*, prelude::*, window::*};

use crate::options::Pacing;

const BACKGROUND: (u8, u8, u8) = (0, 0, 55);
const LIGHT: (u8, u8, u8) = (255, 255, 255);
const QUEEN: (u8, u8, u8) = (0, 200, 0);
const REMOVED: (u8, u8, u8) = (220, 0, 0);

// 深色格子不画，直接露出背景
fn tile_rgb(tile: Tile) -> Option<(u8, u8, u8)> {
    match tile {
        Tile::Light => Some(LIGHT),
        Tile::Dark => None,
        Tile::Queen => Some(QUEEN),
        Tile::Removed => Some(REMOVED),
    }
}

fn paint(board: &Board) {
    let side = board.size() as i32 * TILE_SIZE;
    let (r, g, b) = BACKGROUND;
    draw::draw_rect_fill(0, 0, side, side, Color::from_rgb(r, g, b));
    for row in 0..board.size() as i32 {
        for col in 0..board.size() as i32 {
            if let Some((r, g, b)) = tile_rgb(board.tile(Position::new(row, col))) {
                draw::draw_rect_fill(col * TILE_SIZE, row * TILE_SIZE, TILE_SIZE, TILE_SIZE, Color::from_rgb(r, g, b));
            }
        }
    }
}

/// Observer that repaints the window after each step and holds the search for `step`.
struct WindowRenderer {
    window: DoubleWindow,
    shown: Rc<RefCell<Board>>,
    step: Duration,
}

impl WindowRenderer {
    fn show(&mut self, board: &Board) {
        *self.shown.borrow_mut() = board.clone();
        self.window.redraw();
    }

    // 等待期间继续处理窗口事件，窗口关掉后不再等待
    fn pause(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while self.window.shown() {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                break;
            }
            if let Err(e) = app::wait_for(left.as_secs_f64()) {
                tracing::warn!("event loop error while pausing: {e}");
                break;
            }
        }
    }
}

impl BoardObserver for WindowRenderer {
    fn on_board_changed(&mut self, board: &Board, _event: BoardEvent) {
        self.show(board);
        self.pause(self.step);
    }
}

pub fn ui(engine: Engine, pacing: Pacing) -> anyhow::Result<()> {
    let _app = app::App::default().with_scheme(app::Scheme::Gleam);
    let side = engine.size() as i32 * TILE_SIZE;
    let mut wind = Window::new(100, 100, side, side, "N-Queens");

    let shown = Rc::new(RefCell::new(Board::new(engine.size())));
    let snapshot = shown.clone();
    wind.draw(move |_w| paint(&snapshot.borrow()));
    wind.end();
    wind.show();

    let mut renderer = WindowRenderer {
        window: wind,
        shown,
        step: pacing.step,
    };
    renderer.pause(pacing.start);

    let board = engine.run(&mut renderer)?;
    renderer.show(&board);
    renderer.pause(pacing.finish);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_rgb() {
        assert_eq!(tile_rgb(Tile::Dark), None);
        assert_eq!(tile_rgb(Tile::Light), Some(LIGHT));
        assert_eq!(tile_rgb(Tile::Queen), Some(QUEEN));
        assert_eq!(tile_rgb(Tile::Removed), Some(REMOVED));
    }
}
