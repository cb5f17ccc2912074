use std::collections::HashMap;

use crate::config::*;
use crate::game::food::Food;
use crate::game::physics;
use crate::game::player::{Outbox, Player};
use crate::protocol::messages::{LeaderboardEntry, ServerMessage};

/// Authoritative game state. All mutation happens under the write half of
/// the shared lock, so snapshot builders never see a half-applied tick.
pub struct World {
    pub players: HashMap<u64, Player>,
    pub food: Vec<Food>,
    /// Every open socket, joined or not. Keys double as player ids.
    pub connections: HashMap<u64, Outbox>,
    pub leaderboard: Vec<LeaderboardEntry>,
    leaderboard_dirty: bool,
    next_conn_id: u64,
    next_food_id: u64,
}

impl World {
    pub fn new() -> Self {
        let mut world = World {
            players: HashMap::new(),
            food: Vec::with_capacity(FOOD_COUNT),
            connections: HashMap::new(),
            leaderboard: Vec::new(),
            leaderboard_dirty: false,
            next_conn_id: 1,
            next_food_id: 0,
        };
        world.replenish_food();
        world
    }

    fn spawn_food(&mut self) -> Food {
        let id = self.next_food_id;
        self.next_food_id += 1;
        Food::spawn(id)
    }

    fn replenish_food(&mut self) {
        while self.food.len() < FOOD_COUNT {
            let food = self.spawn_food();
            self.food.push(food);
        }
    }

    // ── Session Gateway surface ──

    pub fn register_connection(&mut self, outbox: Outbox) -> u64 {
        let id = self.next_conn_id;
        self.next_conn_id += 1;
        self.connections.insert(id, outbox);
        id
    }

    /// Teardown: drop the connection and its player in one step, before the
    /// gateway acknowledges the close. No-op for unknown ids.
    pub fn unregister_connection(&mut self, id: u64) {
        self.connections.remove(&id);
        if self.players.remove(&id).is_some() {
            self.leaderboard_dirty = true;
        }
    }

    /// Create this connection's player and acknowledge with a `joined`
    /// snapshot. A second join on the same connection replaces the player in
    /// place (fresh spawn, same id) rather than duplicating it.
    pub fn join(&mut self, conn_id: u64, name: String) {
        let outbox = match self.connections.get(&conn_id) {
            Some(outbox) => outbox.clone(),
            None => return,
        };
        let player = Player::new(conn_id, name, outbox);
        player.outbox.send(ServerMessage::Joined {
            id: player.id,
            x: player.x,
            y: player.y,
            size: player.size,
            color: player.color.clone(),
            world_size: WORLD_SIZE,
        });
        self.players.insert(conn_id, player);
        self.leaderboard_dirty = true;
    }

    pub fn set_velocity(&mut self, id: u64, vx: f64, vy: f64) {
        if let Some(player) = self.players.get_mut(&id) {
            player.set_velocity(vx, vy);
        }
    }

    pub fn rename(&mut self, id: u64, name: String) {
        if name.is_empty() {
            return;
        }
        if let Some(player) = self.players.get_mut(&id) {
            player.name = name;
            self.leaderboard_dirty = true;
        }
    }

    // ── Tick pass ──

    pub fn tick(&mut self, dt: f64) {
        self.move_players(dt);
        self.resolve_collisions();
        self.replenish_food();
        if self.leaderboard_dirty {
            self.update_leaderboard();
            self.leaderboard_dirty = false;
        }
    }

    fn move_players(&mut self, dt: f64) {
        for player in self.players.values_mut() {
            player.x += player.velocity_x * dt * MOVE_SCALE;
            player.y += player.velocity_y * dt * MOVE_SCALE;
            let (x, y) = physics::clamp_to_world(player.x, player.y, player.size);
            player.x = x;
            player.y = y;
            player.velocity_x *= VELOCITY_DECAY;
            player.velocity_y *= VELOCITY_DECAY;
        }
    }

    /// One resolution pass in store-iteration order with live sizes: players
    /// processed later see growth applied earlier in the same pass. A player
    /// respawned earlier in the pass no longer acts as an attacker.
    fn resolve_collisions(&mut self) {
        let ids: Vec<u64> = self.players.keys().copied().collect();
        let mut respawned: Vec<u64> = Vec::new();
        for &id in &ids {
            if respawned.contains(&id) {
                continue;
            }
            self.eat_food(id);
            self.eat_players(id, &ids, &mut respawned);
        }
    }

    fn eat_food(&mut self, id: u64) {
        let (px, py, mut size) = match self.players.get(&id) {
            Some(p) => (p.x, p.y, p.size),
            None => return,
        };
        let mut eaten: Vec<usize> = Vec::new();
        for (i, food) in self.food.iter().enumerate() {
            if physics::circles_overlap(px, py, size, food.x, food.y, food.size) {
                size += food.size * FOOD_GROWTH_FACTOR;
                eaten.push(i);
            }
        }
        if eaten.is_empty() {
            return;
        }
        // Indices were collected in ascending order; remove back to front so
        // an item consumed this pass cannot register twice.
        for &i in eaten.iter().rev() {
            self.food.remove(i);
        }
        if let Some(player) = self.players.get_mut(&id) {
            player.size = size;
        }
        self.leaderboard_dirty = true;
    }

    fn eat_players(&mut self, id: u64, ids: &[u64], respawned: &mut Vec<u64>) {
        for &other_id in ids {
            if other_id == id {
                continue;
            }
            let (ax, ay, asize) = match self.players.get(&id) {
                Some(p) => (p.x, p.y, p.size),
                None => return,
            };
            let (vx, vy, vsize) = match self.players.get(&other_id) {
                Some(p) => (p.x, p.y, p.size),
                None => continue,
            };
            if physics::circles_overlap(ax, ay, asize, vx, vy, vsize)
                && physics::can_consume(asize, vsize)
            {
                if let Some(attacker) = self.players.get_mut(&id) {
                    attacker.size += vsize * CONSUME_GROWTH_FACTOR;
                }
                if let Some(victim) = self.players.get_mut(&other_id) {
                    victim.respawn();
                }
                respawned.push(other_id);
                self.leaderboard_dirty = true;
            }
        }
    }

    fn update_leaderboard(&mut self) {
        let mut ranked: Vec<&Player> = self.players.values().collect();
        ranked.sort_by(|a, b| {
            b.size
                .partial_cmp(&a.size)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        self.leaderboard = ranked
            .into_iter()
            .take(LEADERBOARD_SIZE)
            .map(|p| LeaderboardEntry {
                id: p.id,
                name: p.name.clone(),
                score: p.score(),
            })
            .collect();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
