use tokio::sync::mpsc;

use crate::config::*;
use crate::protocol::messages::ServerMessage;

/// Fire-and-forget handle to one client's outbound message channel.
/// Sends never block the tick; a closed channel (disconnect race) is ignored.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: mpsc::UnboundedSender<ServerMessage>,
}

impl Outbox {
    pub fn new(tx: mpsc::UnboundedSender<ServerMessage>) -> Self {
        Outbox { tx }
    }

    pub fn send(&self, msg: ServerMessage) {
        let _ = self.tx.send(msg);
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub outbox: Outbox,
}

impl Player {
    pub fn new(id: u64, name: String, outbox: Outbox) -> Self {
        let (x, y) = random_position();
        Player {
            id,
            name,
            x,
            y,
            size: MIN_PLAYER_SIZE,
            color: random_color(),
            velocity_x: 0.0,
            velocity_y: 0.0,
            outbox,
        }
    }

    /// Store a movement intent, scaled so smaller players move faster.
    /// Non-finite components are coerced to zero rather than rejected.
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        let vx = if vx.is_finite() { vx } else { 0.0 };
        let vy = if vy.is_finite() { vy } else { 0.0 };
        let factor = speed_factor(self.size);
        self.velocity_x = vx * factor;
        self.velocity_y = vy * factor;
    }

    /// Reset to a fresh spawn in place, keeping identity and connection,
    /// and notify the owning client immediately.
    pub fn respawn(&mut self) {
        let (x, y) = random_position();
        self.x = x;
        self.y = y;
        self.size = MIN_PLAYER_SIZE;
        self.velocity_x = 0.0;
        self.velocity_y = 0.0;
        self.outbox.send(ServerMessage::Respawn {
            x: self.x,
            y: self.y,
            size: self.size,
        });
    }

    pub fn score(&self) -> u64 {
        self.size.floor() as u64
    }
}

fn random_position() -> (f64, f64) {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (
        rng.gen_range(0.0..WORLD_SIZE),
        rng.gen_range(0.0..WORLD_SIZE),
    )
}

pub fn random_color() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let colors = [
        "#FFA6B7", "#FFBC80", "#FFF176", "#A5F2C7", "#80D8FF", "#B388FF",
        "#FF8A80", "#69F0AE", "#82B1FF", "#F48FB1", "#FFD54F", "#CE93D8",
    ];
    colors[rng.gen_range(0..colors.len())].to_string()
}
