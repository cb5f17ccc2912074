use serde::{Deserialize, Serialize};

// ── Client → Server ──

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Join {
        #[serde(default)]
        name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Move {
        #[serde(default)]
        velocity_x: f64,
        #[serde(default)]
        velocity_y: f64,
    },
    ChangeName {
        name: String,
    },
}

// ── Server → Client ──

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    Joined {
        id: u64,
        x: f64,
        y: f64,
        size: f64,
        color: String,
        world_size: f64,
    },
    GameState {
        players: Vec<PlayerState>,
        leaderboard: Vec<LeaderboardEntry>,
    },
    VisibleFood {
        food: Vec<FoodState>,
    },
    CameraUpdate {
        x: f64,
        y: f64,
        zoom: f64,
    },
    Respawn {
        x: f64,
        y: f64,
        size: f64,
    },
}

#[derive(Debug, Serialize, Clone)]
pub struct PlayerState {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub name: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct FoodState {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub score: u64,
}
