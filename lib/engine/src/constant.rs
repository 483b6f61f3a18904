/// Smallest problem size that has a solution and that the front end accepts.
pub const MIN_QUEENS: usize = 4;

// 动画节奏（毫秒）
pub const START_DELAY_MS: u64 = 2000;
pub const STEP_DELAY_MS: u64 = 100;
pub const FINAL_DELAY_MS: u64 = 3000;

/// Pixel size of one square in the animated window.
pub const TILE_SIZE: i32 = 60;
