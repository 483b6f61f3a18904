/*
 * 详细中文注释 - 皇后棋盘模块（Board 与坐标表示）
 *
 * 设计要点
 * - 棋盘为 N×N 正方形，行列均从 0 开始
 * - Position 使用有符号坐标，越界（包括负数）输入可以被表示并被拒绝
 * - occupied 记录当前所有皇后的位置；removed 记录最近一步被撤下的位置，仅供渲染使用
 * - cells 是与 occupied 同步的稠密网格，渲染时 O(1) 查询
 *
 * 主要功能
 * - place / remove：放置与撤下皇后，越界或撤下不存在的皇后返回 BoardError
 * - is_valid：检查某格是否不被任何已放置的皇后攻击（行、列、两条对角线）
 *
 * 注意
 * - Board 本身不检查放置是否合法，合法性由搜索在放置前调用 is_valid 保证
 */

use std::collections::BTreeSet;
use std::fmt;

use crate::error::BoardError;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position { row, col }
    }
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
    // 左上到右下对角线上的格子 row - col 相同
    pub fn tlbr_diagonal(&self) -> i32 {
        self.row - self.col
    }
    // 右上到左下对角线上的格子 row + col 相同
    pub fn trbl_diagonal(&self) -> i32 {
        self.row + self.col
    }
    pub fn attacks(&self, other: &Position) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.tlbr_diagonal() == other.tlbr_diagonal()
            || self.trbl_diagonal() == other.trbl_diagonal()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Queen,
}

/// How a square should be painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Light,
    Dark,
    Queen,
    Removed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
    occupied: BTreeSet<Position>,
    removed: BTreeSet<Position>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
            occupied: BTreeSet::new(),
            removed: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn occupied(&self) -> &BTreeSet<Position> {
        &self.occupied
    }

    pub fn removed(&self) -> &BTreeSet<Position> {
        &self.removed
    }

    pub fn queen_count(&self) -> usize {
        self.occupied.len()
    }

    // 坐标是否在棋盘内，行列都是左闭右开
    pub fn in_board(&self, pos: Position) -> bool {
        pos.row >= 0 && (pos.row as usize) < self.size && pos.col >= 0 && (pos.col as usize) < self.size
    }

    pub fn cell_at(&self, pos: Position) -> Cell {
        if self.in_board(pos) {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    pub fn is_removed(&self, pos: Position) -> bool {
        self.removed.contains(&pos)
    }

    /// Puts a queen on `(row, col)`.
    ///
    /// No attack check happens here; callers consult [`Board::is_valid`] first.
    /// Placing onto a square that already holds a queen leaves the board as it was.
    pub fn place(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        let pos = self.checked(row, col)?;
        self.cells[pos.row as usize][pos.col as usize] = Cell::Queen;
        self.occupied.insert(pos);
        Ok(())
    }

    /// Takes the queen off `(row, col)` and remembers the square as just removed.
    pub fn remove(&mut self, row: i32, col: i32) -> Result<(), BoardError> {
        let pos = self.checked(row, col)?;
        if !self.occupied.remove(&pos) {
            return Err(BoardError::NotOccupied(pos));
        }
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
        self.removed.insert(pos);
        Ok(())
    }

    /// Returns true when `(row, col)` is on the board and no placed queen attacks it.
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        let pos = Position::new(row, col);
        if !self.in_board(pos) {
            return false;
        }
        self.row_free(pos)
            && self.col_free(pos)
            && self.tlbr_diagonal_free(pos)
            && self.trbl_diagonal_free(pos)
    }

    pub fn clear_removed(&mut self) {
        self.removed.clear();
    }

    pub fn take_removed(&mut self) -> BTreeSet<Position> {
        std::mem::take(&mut self.removed)
    }

    // 皇后优先，其次是刚撤下的格子，其余按棋盘格黑白相间
    pub fn tile(&self, pos: Position) -> Tile {
        if self.cell_at(pos) == Cell::Queen {
            Tile::Queen
        } else if self.is_removed(pos) {
            Tile::Removed
        } else if (pos.row + pos.col) % 2 == 0 {
            Tile::Light
        } else {
            Tile::Dark
        }
    }

    fn checked(&self, row: i32, col: i32) -> Result<Position, BoardError> {
        let pos = Position::new(row, col);
        if self.in_board(pos) {
            Ok(pos)
        } else {
            Err(BoardError::OutOfBounds { pos, size: self.size })
        }
    }

    fn row_free(&self, pos: Position) -> bool {
        self.occupied.iter().all(|q| q.row != pos.row)
    }

    fn col_free(&self, pos: Position) -> bool {
        self.occupied.iter().all(|q| q.col != pos.col)
    }

    fn tlbr_diagonal_free(&self, pos: Position) -> bool {
        let diff = pos.tlbr_diagonal();
        self.occupied.iter().all(|q| q.tlbr_diagonal() != diff)
    }

    fn trbl_diagonal_free(&self, pos: Position) -> bool {
        let sum = pos.trbl_diagonal();
        self.occupied.iter().all(|q| q.trbl_diagonal() != sum)
    }
}
