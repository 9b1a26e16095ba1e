//! WebSocket server and connection handling.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::service::{GameService, MemoryStore, UuidIds};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{error, info, warn};

/// The service shared across all connections.
pub type SharedService = Arc<GameService<MemoryStore, UuidIds>>;

/// Run the WebSocket server.
pub async fn run_server(addr: SocketAddr, service: SharedService) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Diamond Hunt server listening on {}", addr);

    while let Ok((stream, peer_addr)) = listener.accept().await {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, service).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }

    Ok(())
}

/// Handle a single WebSocket connection: each inbound request gets one
/// reply.
async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    service: SharedService,
) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;
    info!("New WebSocket connection from {}", addr);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => handle_message(client_msg, &service),
                    Err(e) => {
                        warn!("Invalid message from {}: {}", addr, e);
                        ServerMessage::Error {
                            error: format!("invalid request: {}", e),
                        }
                    }
                };
                let reply_text = serde_json::to_string(&reply)?;
                ws_sender.send(Message::Text(reply_text.into())).await?;
            }
            Ok(Message::Close(_)) => {
                info!("Client {} closing connection", addr);
                break;
            }
            Ok(Message::Ping(data)) => {
                ws_sender.send(Message::Pong(data)).await?;
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", addr, e);
                break;
            }
            _ => {}
        }
    }

    info!("Connection closed for {}", addr);
    Ok(())
}

/// Map one client request to an engine call.
fn handle_message(msg: ClientMessage, service: &SharedService) -> ServerMessage {
    match msg {
        ClientMessage::CreateGame { params } => match service.create(params) {
            Ok(id) => {
                info!("Created game {}", id);
                ServerMessage::Created { result: id }
            }
            Err(e) => ServerMessage::Error {
                error: e.to_string(),
            },
        },

        ClientMessage::GetState { id } => match service.get_state(&id) {
            Ok(state) => ServerMessage::State { result: state },
            Err(e) => ServerMessage::Error {
                error: e.to_string(),
            },
        },

        ClientMessage::Join { id, player_id } => match service.join(&id, player_id.clone()) {
            Ok(state) => {
                info!("Player {} joined game {}", player_id, id);
                ServerMessage::State { result: state }
            }
            Err(e) => ServerMessage::Error {
                error: e.to_string(),
            },
        },

        ClientMessage::Reveal {
            id,
            player_id,
            x,
            y,
        } => match service.reveal(&id, &player_id, x, y) {
            Ok(state) => {
                if let Some(winner) = &state.winner {
                    info!("Game {} won by {}", id, winner);
                }
                ServerMessage::State { result: state }
            }
            Err(e) => ServerMessage::Error {
                error: e.to_string(),
            },
        },

        ClientMessage::Ping => ServerMessage::Pong,
    }
}
