// Game world constants
pub const WORLD_SIZE: f64 = 3000.0;
pub const TICK_DURATION_MS: u64 = 50;

// Player constants
pub const MIN_PLAYER_SIZE: f64 = 40.0;
pub const VELOCITY_DECAY: f64 = 0.98; // multiplicative, per tick
pub const MOVE_SCALE: f64 = 100.0; // velocity units -> pixels per second
pub const MAX_NAME_LEN: usize = 20;

// Consumption rules (size is treated as a diameter everywhere)
pub const FOOD_GROWTH_FACTOR: f64 = 0.1; // size gained per food = food.size * this
pub const CONSUME_SIZE_RATIO: f64 = 1.2; // must be 20% larger to eat a player
pub const CONSUME_GROWTH_FACTOR: f64 = 0.5; // size gained = victim.size * this

// Food constants
pub const FOOD_COUNT: usize = 200;
pub const FOOD_SIZE: f64 = 10.0;

// Viewport
pub const BASE_VIEW_RANGE: f64 = 800.0;
pub const VIEW_RANGE_PER_SIZE: f64 = 2.0;
pub const ZOOM_FACTOR: f64 = 0.15;
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 1.5;

// Leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

// Server
pub const SERVER_PORT: u16 = 3001;

// Helper: speed multiplier based on size (smaller players move faster)
pub fn speed_factor(size: f64) -> f64 {
    (30.0 / size).max(0.5) * 3.0
}

// Helper: how far a player of this size can see food
pub fn view_range(size: f64) -> f64 {
    BASE_VIEW_RANGE + size * VIEW_RANGE_PER_SIZE
}

// Helper: camera zoom for a player of this size
pub fn camera_zoom(size: f64) -> f64 {
    (1.0 - size * ZOOM_FACTOR).clamp(MIN_ZOOM, MAX_ZOOM)
}
