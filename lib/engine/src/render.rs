/* 文本渲染：把棋盘画成 ASCII 网格，供无界面模式与日志使用 */
use crate::board::{Board, Position, Tile};

pub fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Queen => 'Q',
        Tile::Removed => 'x',
        Tile::Light | Tile::Dark => ' ',
    }
}

pub fn to_text(board: &Board) -> String {
    let n = board.size();
    let separator = format!("{}+\n", "+---".repeat(n));
    let mut out = String::with_capacity((n + 1) * separator.len() * 2);
    for row in 0..n as i32 {
        out.push_str(&separator);
        for col in 0..n as i32 {
            out.push_str("| ");
            out.push(tile_char(board.tile(Position::new(row, col))));
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(&separator);
    out
}
