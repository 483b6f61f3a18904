/* 引擎入口：校验问题规模，调用回溯搜索 */
use crate::board::Board;
use crate::constant::MIN_QUEENS;
use crate::error::EngineError;
use crate::observer::{BoardObserver, NoopObserver};
use crate::search::solve_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    size: usize,
}

impl Engine {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_QUEENS {
            return Err(EngineError::TooSmall(size));
        }
        Ok(Engine { size })
    }

    /// Parses the problem size as typed by a user.
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let input = input.trim();
        let size = input
            .parse::<usize>()
            .map_err(|_| match input.parse::<i64>() {
                // 负数也是数字，只是太小
                Ok(_) => EngineError::TooSmall(0),
                Err(_) => EngineError::NotANumber(input.to_owned()),
            })?;
        Self::new(size)
    }

    /// Like [`Engine::parse`], but for an argument that may be absent.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, EngineError> {
        match arg {
            Some(input) => Self::parse(input),
            None => Err(EngineError::MissingSize),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn run<O: BoardObserver>(&self, observer: &mut O) -> Result<Board, EngineError> {
        tracing::debug!(n = self.size, "starting search");
        solve_with(self.size, observer)?.ok_or(EngineError::NoSolution(self.size))
    }

    pub fn run_headless(&self) -> Result<Board, EngineError> {
        self.run(&mut NoopObserver)
    }
}
