/*
 * Search State Module - 回溯搜索
 *
 * 逐列放置皇后：
 * - 每一列按行号从小到大尝试，跳过已占用的行与被攻击的格子
 * - 放置后通知观察者并递归下一列
 * - 下一列无解时撤下皇后、通知观察者并尝试下一行
 * - 找到第一个解立即返回
 */

use crate::board::{Board, Position};
use crate::error::BoardError;
use crate::observer::{BoardEvent, BoardObserver, NoopObserver};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchStats {
    /// 访问的搜索节点数（每次进入一列算一个节点）
    pub nodes: u64,
    pub placements: u64,
    pub removals: u64,
}

/// 搜索状态
/// 与 Board 分离，只保存回溯需要的临时数据
pub struct SearchState {
    /// 已放置皇后的行
    rows_visited: Vec<bool>,
    stats: SearchStats,
}

impl SearchState {
    pub fn new(size: usize) -> Self {
        SearchState {
            rows_visited: vec![false; size],
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn push_queen<O: BoardObserver>(
        &mut self,
        board: &mut Board,
        pos: Position,
        observer: &mut O,
    ) -> Result<(), BoardError> {
        board.place(pos.row, pos.col)?;
        self.rows_visited[pos.row as usize] = true;
        self.stats.placements += 1;
        self.notify(board, BoardEvent::Placed(pos), observer);
        Ok(())
    }

    pub fn pop_queen<O: BoardObserver>(
        &mut self,
        board: &mut Board,
        pos: Position,
        observer: &mut O,
    ) -> Result<(), BoardError> {
        board.remove(pos.row, pos.col)?;
        self.rows_visited[pos.row as usize] = false;
        self.stats.removals += 1;
        self.notify(board, BoardEvent::Removed(pos), observer);
        Ok(())
    }

    // removed 只保留一步，观察者看完之后由搜索清空
    fn notify<O: BoardObserver>(&self, board: &mut Board, event: BoardEvent, observer: &mut O) {
        observer.on_board_changed(board, event);
        board.clear_removed();
    }

    /// Places `remaining` queens starting at column `col`.
    ///
    /// Returns `Ok(true)` with the queens left on `board` when a full placement is found,
    /// `Ok(false)` with `board` restored when this branch is exhausted.
    pub fn search<O: BoardObserver>(
        &mut self,
        board: &mut Board,
        col: i32,
        remaining: usize,
        observer: &mut O,
    ) -> Result<bool, BoardError> {
        self.stats.nodes += 1;
        if remaining == 0 {
            return Ok(true);
        }
        for row in 0..board.size() as i32 {
            if self.rows_visited[row as usize] || !board.is_valid(row, col) {
                continue;
            }
            let pos = Position::new(row, col);
            self.push_queen(board, pos, observer)?;
            if self.search(board, col + 1, remaining - 1, observer)? {
                return Ok(true);
            }
            self.pop_queen(board, pos, observer)?;
        }
        Ok(false)
    }
}

/// Solves `n` queens on an `n`×`n` board, reporting every step to `observer`.
///
/// Returns the first solution in row-ascending, column-major order, or `None`.
pub fn solve_with<O: BoardObserver>(n: usize, observer: &mut O) -> Result<Option<Board>, BoardError> {
    let (board, stats) = solve_with_stats(n, observer)?;
    tracing::info!(
        n,
        found = board.is_some(),
        nodes = stats.nodes,
        placements = stats.placements,
        removals = stats.removals,
        "search finished"
    );
    Ok(board)
}

pub fn solve_with_stats<O: BoardObserver>(
    n: usize,
    observer: &mut O,
) -> Result<(Option<Board>, SearchStats), BoardError> {
    let mut board = Board::new(n);
    let mut state = SearchState::new(n);
    let found = state.search(&mut board, 0, n, observer)?;
    Ok((found.then_some(board), state.stats()))
}

/// Headless search.
pub fn solve(n: usize) -> Option<Board> {
    // 无观察者时 place/remove 的坐标都来自棋盘内部，不会出错
    solve_with(n, &mut NoopObserver).ok().flatten()
}

#[cfg(test)]
mod tests {
    use crate::search::*;
    use std::collections::BTreeSet;

    fn assert_solution(board: &Board, n: usize) {
        assert_eq!(board.queen_count(), n);
        let cols: BTreeSet<i32> = board.occupied().iter().map(|p| p.col).collect();
        assert_eq!(cols, (0..n as i32).collect::<BTreeSet<i32>>());
        let queens: Vec<&Position> = board.occupied().iter().collect();
        for (i, a) in queens.iter().enumerate() {
            for b in &queens[i + 1..] {
                assert!(!a.attacks(b), "{a} attacks {b}");
            }
        }
    }

    #[test]
    fn test_solve_4() {
        let board = solve(4).unwrap();
        let expected: BTreeSet<Position> = [(1, 0), (3, 1), (0, 2), (2, 3)]
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(board.occupied(), &expected);
        assert!(board.removed().is_empty());
    }

    #[test]
    fn test_solve_8_first_solution() {
        let board = solve(8).unwrap();
        let expected: BTreeSet<Position> = [(0, 0), (4, 1), (7, 2), (5, 3), (2, 4), (6, 5), (1, 6), (3, 7)]
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(board.occupied(), &expected);
    }

    #[test]
    fn test_solutions_are_non_attacking() {
        for n in 4..=12 {
            let board = solve(n).unwrap();
            assert_solution(&board, n);
        }
    }

    #[test]
    fn test_deterministic() {
        for n in [5, 9, 10] {
            assert_eq!(solve(n).unwrap().occupied(), solve(n).unwrap().occupied());
        }
    }

    #[test]
    fn test_small_sizes() {
        assert_eq!(solve(0).unwrap().queen_count(), 0);
        assert_eq!(solve(1).unwrap().queen_count(), 1);
        assert!(solve(2).is_none());
        assert!(solve(3).is_none());
    }

    #[test]
    fn test_observer_sees_every_step() {
        let mut events = vec![];
        let mut observer = |board: &Board, event: BoardEvent| {
            match event {
                BoardEvent::Placed(pos) => assert!(board.occupied().contains(&pos)),
                BoardEvent::Removed(pos) => {
                    assert!(!board.occupied().contains(&pos));
                    assert_eq!(board.removed().iter().collect::<Vec<_>>(), vec![&pos]);
                }
            }
            events.push(event);
        };
        let (board, stats) = solve_with_stats(4, &mut observer).unwrap();
        let board = board.unwrap();

        let placed = events.iter().filter(|e| matches!(e, BoardEvent::Placed(_))).count();
        let removed = events.len() - placed;
        assert_eq!(placed as u64, stats.placements);
        assert_eq!(removed as u64, stats.removals);
        assert_eq!(placed - removed, 4);

        // 第一步总是 (0, 0)，最后一步是解的最后一列
        assert_eq!(events.first(), Some(&BoardEvent::Placed(Position::new(0, 0))));
        assert_eq!(events.last(), Some(&BoardEvent::Placed(Position::new(2, 3))));
        assert!(board.removed().is_empty());
    }

    #[test]
    fn test_4_queens_trace() {
        let mut events = vec![];
        let mut observer = |_: &Board, event: BoardEvent| events.push(event);
        solve_with(4, &mut observer).unwrap();
        use BoardEvent::{Placed as P, Removed as R};
        let p = Position::new;
        assert_eq!(
            events,
            vec![
                P(p(0, 0)),
                P(p(2, 1)),
                R(p(2, 1)),
                P(p(3, 1)),
                P(p(1, 2)),
                R(p(1, 2)),
                R(p(3, 1)),
                R(p(0, 0)),
                P(p(1, 0)),
                P(p(3, 1)),
                P(p(0, 2)),
                P(p(2, 3)),
            ]
        );
    }

    #[test]
    fn test_search_restores_board_on_failure() {
        let mut board = Board::new(3);
        let mut state = SearchState::new(3);
        assert!(!state.search(&mut board, 0, 3, &mut NoopObserver).unwrap());
        assert!(board.occupied().is_empty());
        assert_eq!(state.stats().placements, state.stats().removals);
    }
}
