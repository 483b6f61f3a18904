/* 观察者接口：搜索每次放置/撤下皇后后同步通知渲染端 */
use std::fmt;

use crate::board::{Board, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardEvent {
    Placed(Position),
    Removed(Position),
}

impl BoardEvent {
    pub fn position(&self) -> Position {
        match self {
            BoardEvent::Placed(pos) | BoardEvent::Removed(pos) => *pos,
        }
    }
}

impl fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardEvent::Placed(pos) => write!(f, "place {pos}"),
            BoardEvent::Removed(pos) => write!(f, "remove {pos}"),
        }
    }
}

/// Receives the board after every placement and every removal made by the search.
///
/// Called synchronously before the search continues. An observer can block to pace
/// an animation but cannot change which squares the search tries.
pub trait BoardObserver {
    fn on_board_changed(&mut self, board: &Board, event: BoardEvent);
}

impl<F> BoardObserver for F
where
    F: FnMut(&Board, BoardEvent),
{
    fn on_board_changed(&mut self, board: &Board, event: BoardEvent) {
        self(board, event)
    }
}

/// Observer for headless searches.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BoardObserver for NoopObserver {
    fn on_board_changed(&mut self, _board: &Board, _event: BoardEvent) {}
}

/// Logs every step through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver {
    steps: u64,
}

impl TraceObserver {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl BoardObserver for TraceObserver {
    fn on_board_changed(&mut self, board: &Board, event: BoardEvent) {
        self.steps += 1;
        tracing::debug!(step = self.steps, queens = board.queen_count(), "{event}");
    }
}

#[cfg(test)]
mod tests {
    use crate::observer::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = vec![];
        let mut observer = |board: &Board, event: BoardEvent| seen.push((board.queen_count(), event));
        let board = Board::new(4);
        observer.on_board_changed(&board, BoardEvent::Placed(Position::new(1, 0)));
        assert_eq!(seen, vec![(0, BoardEvent::Placed(Position::new(1, 0)))]);
    }

    #[test]
    fn test_trace_observer_counts_steps() {
        let mut observer = TraceObserver::new();
        let board = Board::new(4);
        observer.on_board_changed(&board, BoardEvent::Placed(Position::new(0, 0)));
        observer.on_board_changed(&board, BoardEvent::Removed(Position::new(0, 0)));
        assert_eq!(observer.steps(), 2);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(BoardEvent::Placed(Position::new(1, 2)).to_string(), "place (1, 2)");
        assert_eq!(BoardEvent::Removed(Position::new(3, 0)).to_string(), "remove (3, 0)");
        assert_eq!(BoardEvent::Removed(Position::new(3, 0)).position(), Position::new(3, 0));
    }
}
