use axum::{routing::get, Router};

use orb_arena::config::{SERVER_PORT, TICK_DURATION_MS, WORLD_SIZE};
use orb_arena::game::engine;
use orb_arena::server::ws;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Create game world
    let world = engine::create_world();
    println!("✅ Game world created ({}x{})", WORLD_SIZE, WORLD_SIZE);

    // Start game loop
    let world_clone = world.clone();
    tokio::spawn(async move {
        engine::game_loop(world_clone).await;
    });
    println!("✅ Game loop running every {}ms", TICK_DURATION_MS);

    let ws_state = ws::WsState { world };
    let app = Router::new().route("/ws", get(ws::ws_handler).with_state(ws_state));

    let addr = format!("0.0.0.0:{}", SERVER_PORT);
    println!("🎮 Game server running on port {}", SERVER_PORT);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
