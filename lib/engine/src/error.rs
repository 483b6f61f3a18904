/* 错误类型：棋盘操作错误与引擎入口错误 */
use crate::board::Position;
use crate::constant::MIN_QUEENS;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position ({}, {}) is outside a {size}x{size} board", .pos.row, .pos.col)]
    OutOfBounds { pos: Position, size: usize },
    #[error("no queen at ({}, {}) to remove", .0.row, .0.col)]
    NotOccupied(Position),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("You need to specify the problem size")]
    MissingSize,
    #[error("Please input numbers")]
    NotANumber(String),
    #[error("n must be more than {}", MIN_QUEENS - 1)]
    TooSmall(usize),
    // 对 n > 3 不应出现
    #[error("no solution found for {0} queens")]
    NoSolution(usize),
    #[error(transparent)]
    Board(#[from] BoardError),
}
