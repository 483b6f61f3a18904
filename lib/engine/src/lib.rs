/**
 * 详细中文注释 - 引擎核心库入口
 *
 * 说明
 * - board: 皇后棋盘，放置/撤下与攻击检查
 * - observer: 搜索每一步之后通知渲染端的接口
 * - search: 逐列回溯搜索，返回第一个解
 * - engine: 校验问题规模并调用搜索
 * - render: 文本渲染
 */
pub mod board;
pub mod constant;
pub mod engine;
pub mod error;
pub mod observer;
pub mod render;
pub mod search;

pub use board::{Board, Position};
pub use error::{BoardError, EngineError};
pub use search::solve;
