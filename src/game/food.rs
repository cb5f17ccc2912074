use crate::config::*;
use crate::game::player::random_color;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Food {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
}

impl Food {
    pub fn spawn(id: u64) -> Self {
        let mut rng = rand::thread_rng();
        Food {
            id,
            x: rng.gen_range(0.0..WORLD_SIZE),
            y: rng.gen_range(0.0..WORLD_SIZE),
            size: FOOD_SIZE,
            color: random_color(),
        }
    }
}
