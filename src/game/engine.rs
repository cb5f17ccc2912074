use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};

use crate::config::*;
use crate::game::physics;
use crate::game::world::World;
use crate::protocol::messages::*;

pub type SharedWorld = Arc<RwLock<World>>;

pub fn create_world() -> SharedWorld {
    Arc::new(RwLock::new(World::new()))
}

/// Fixed 50 ms simulation clock. Strictly periodic: a late tick is absorbed
/// by the wall-clock delta rather than replayed as catch-up ticks.
pub async fn game_loop(world: SharedWorld) {
    let mut tick_interval = interval(Duration::from_millis(TICK_DURATION_MS));
    tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    loop {
        tick_interval.tick().await;
        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let mut w = world.write().await;
        w.tick(dt);
        broadcast_snapshots(&w);
    }
}

/// Push this tick's snapshots. Everything goes through unbounded channels,
/// so a slow client can never stall the simulation.
pub fn broadcast_snapshots(world: &World) {
    // Full roster and leaderboard to every open connection, joined or not
    let roster: Vec<PlayerState> = world
        .players
        .values()
        .map(|p| PlayerState {
            id: p.id,
            x: p.x,
            y: p.y,
            size: p.size,
            color: p.color.clone(),
            name: p.name.clone(),
        })
        .collect();
    let state = ServerMessage::GameState {
        players: roster,
        leaderboard: world.leaderboard.clone(),
    };
    for outbox in world.connections.values() {
        outbox.send(state.clone());
    }

    // Per-player scoped views
    for player in world.players.values() {
        let range = view_range(player.size);
        let food: Vec<FoodState> = world
            .food
            .iter()
            .filter(|f| physics::distance(f.x, f.y, player.x, player.y) < range)
            .map(|f| FoodState {
                id: f.id,
                x: f.x,
                y: f.y,
                size: f.size,
                color: f.color.clone(),
            })
            .collect();
        player.outbox.send(ServerMessage::VisibleFood { food });
        player.outbox.send(ServerMessage::CameraUpdate {
            x: player.x,
            y: player.y,
            zoom: camera_zoom(player.size),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::Outbox;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn join_player(world: &mut World, name: &str) -> (u64, UnboundedReceiver<ServerMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = world.register_connection(Outbox::new(tx));
        world.join(id, name.to_string());
        (id, rx)
    }

    fn drain(rx: &mut UnboundedReceiver<ServerMessage>) -> Vec<ServerMessage> {
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    #[test]
    fn game_state_reaches_connections_that_never_joined() {
        let mut world = World::new();
        let (tx, mut spectator_rx) = mpsc::unbounded_channel();
        world.register_connection(Outbox::new(tx));
        let (_id, _rx) = join_player(&mut world, "active");
        world.tick(0.05);
        broadcast_snapshots(&world);

        let msgs = drain(&mut spectator_rx);
        assert_eq!(msgs.len(), 1);
        match &msgs[0] {
            ServerMessage::GameState {
                players,
                leaderboard,
            } => {
                assert_eq!(players.len(), 1);
                assert_eq!(leaderboard.len(), 1);
            }
            other => panic!("expected gameState, got {:?}", other),
        }
    }

    #[test]
    fn visible_food_respects_the_view_radius() {
        let mut world = World::new();
        world.food.clear();
        let (id, mut rx) = join_player(&mut world, "viewer");
        {
            let p = world.players.get_mut(&id).unwrap();
            p.x = 1500.0;
            p.y = 1500.0;
        }
        // size 40 -> view range 880
        let mut near = crate::game::food::Food::spawn(0);
        near.x = 1500.0 + 879.0;
        near.y = 1500.0;
        let mut far = crate::game::food::Food::spawn(1);
        far.x = 1500.0 + 881.0;
        far.y = 1500.0;
        world.food.push(near);
        world.food.push(far);

        drain(&mut rx);
        broadcast_snapshots(&world);

        let msgs = drain(&mut rx);
        let food = msgs
            .iter()
            .find_map(|m| match m {
                ServerMessage::VisibleFood { food } => Some(food),
                _ => None,
            })
            .expect("visibleFood snapshot");
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].id, 0);
    }

    #[test]
    fn camera_update_tracks_the_player() {
        let mut world = World::new();
        let (id, mut rx) = join_player(&mut world, "cam");
        {
            let p = world.players.get_mut(&id).unwrap();
            p.x = 123.0;
            p.y = 456.0;
            p.size = 40.0;
        }
        drain(&mut rx);
        broadcast_snapshots(&world);

        let msgs = drain(&mut rx);
        let cam = msgs
            .iter()
            .find_map(|m| match m {
                ServerMessage::CameraUpdate { x, y, zoom } => Some((*x, *y, *zoom)),
                _ => None,
            })
            .expect("cameraUpdate snapshot");
        assert_eq!(cam, (123.0, 456.0, MIN_ZOOM));
    }

    #[test]
    fn snapshots_survive_a_closed_channel() {
        let mut world = World::new();
        let (id, rx) = join_player(&mut world, "dropped");
        drop(rx);
        broadcast_snapshots(&world);
        // The player is still simulated until the gateway unregisters it
        assert!(world.players.contains_key(&id));
    }
}
