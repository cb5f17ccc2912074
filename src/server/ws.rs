use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tracing::info;

use crate::config::MAX_NAME_LEN;
use crate::game::engine::SharedWorld;
use crate::game::player::Outbox;
use crate::protocol::messages::ClientMessage;

#[derive(Clone)]
pub struct WsState {
    pub world: SharedWorld,
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WsState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: WsState) {
    let (mut sender, mut receiver) = socket.split();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let conn_id = {
        let mut world = state.world.write().await;
        world.register_connection(Outbox::new(tx))
    };
    info!(conn_id, "client connected");

    // Task: serialize queued snapshots onto the socket
    let forward_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let json = serde_json::to_string(&msg).unwrap();
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Main loop: apply client intents. Malformed frames are dropped silently.
    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => {
                let client_msg = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(m) => m,
                    Err(_) => continue,
                };
                let mut world = state.world.write().await;
                match client_msg {
                    ClientMessage::Join { name } => {
                        let display_name = sanitize_name(name.as_deref(), conn_id);
                        info!(conn_id, name = %display_name, "player joined");
                        world.join(conn_id, display_name);
                    }
                    ClientMessage::Move {
                        velocity_x,
                        velocity_y,
                    } => {
                        world.set_velocity(conn_id, velocity_x, velocity_y);
                    }
                    ClientMessage::ChangeName { name } => {
                        let name: String = name.trim().chars().take(MAX_NAME_LEN).collect();
                        world.rename(conn_id, name);
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    // Remove the player before acknowledging teardown so it is never
    // simulated or broadcast to a closed connection
    {
        let mut world = state.world.write().await;
        world.unregister_connection(conn_id);
    }
    info!(conn_id, "client disconnected");
    forward_task.abort();
}

fn sanitize_name(name: Option<&str>, conn_id: u64) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.chars().take(MAX_NAME_LEN).collect(),
        _ => format!("Player {}", conn_id),
    }
}
