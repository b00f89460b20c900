use super::engine::{RoomEngine, RoomError};
use super::events::{ParticipantInfo, RoomEvent};
use futures::stream::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Roster envelope published on `voice.room.<room>.roster`
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterMessage {
    pub participants: Vec<ParticipantInfo>,
}

/// Closure envelope published on `voice.room.<room>.closed`
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomClosedMessage {
    pub reason: String,
}

/// NATS-backed room engine
///
/// Maps the room notification surface onto NATS subjects:
/// - `voice.room.<room>.roster` — JSON roster envelope
/// - `voice.room.<room>.data.<identity>` — raw data-channel payload,
///   sender identity carried as the final subject token
/// - `voice.room.<room>.closed` — JSON closure envelope
pub struct NatsRoom {
    room: String,
    client: Option<async_nats::Client>,
    pump: Option<JoinHandle<()>>,
}

impl NatsRoom {
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            client: None,
            pump: None,
        }
    }

    fn translate(prefix: &str, msg: &async_nats::Message) -> Option<RoomEvent> {
        let subject = msg.subject.as_str();
        let Some(rest) = subject.strip_prefix(prefix) else {
            debug!("Ignoring message outside room prefix: {}", subject);
            return None;
        };

        match rest {
            "roster" => match serde_json::from_slice::<RosterMessage>(&msg.payload) {
                Ok(roster) => Some(RoomEvent::RosterChanged(roster.participants)),
                Err(e) => {
                    warn!("Failed to parse roster message: {}", e);
                    None
                }
            },
            "closed" => {
                let reason = serde_json::from_slice::<RoomClosedMessage>(&msg.payload)
                    .map(|m| m.reason)
                    .unwrap_or_else(|_| "room closed".to_string());
                Some(RoomEvent::SessionFailed(reason))
            }
            "data" => Some(RoomEvent::DataReceived {
                payload: msg.payload.to_vec(),
                sender_identity: None,
            }),
            other => {
                if let Some(identity) = other.strip_prefix("data.") {
                    Some(RoomEvent::DataReceived {
                        payload: msg.payload.to_vec(),
                        sender_identity: Some(identity.to_string()),
                    })
                } else {
                    debug!("Ignoring message on {}", subject);
                    None
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl RoomEngine for NatsRoom {
    async fn connect(
        &mut self,
        server_url: &str,
        token: &str,
    ) -> Result<mpsc::Receiver<RoomEvent>, RoomError> {
        info!("Joining room {} via {}", self.room, server_url);

        let client = async_nats::ConnectOptions::new()
            .token(token.to_string())
            .connect(server_url)
            .await
            .map_err(|e| RoomError::Connect(e.to_string()))?;

        let mut subscriber = client
            .subscribe(format!("voice.room.{}.>", self.room))
            .await
            .map_err(|e| RoomError::Subscribe(e.to_string()))?;

        let (event_tx, event_rx) = mpsc::channel(64);
        let prefix = format!("voice.room.{}.", self.room);

        let pump = tokio::spawn(async move {
            while let Some(msg) = subscriber.next().await {
                let Some(event) = Self::translate(&prefix, &msg) else {
                    continue;
                };
                if event_tx.send(event).await.is_err() {
                    // Receiver gone, the session was torn down
                    break;
                }
            }
            debug!("Room message pump stopped");
        });

        self.client = Some(client);
        self.pump = Some(pump);

        info!("Joined room {}", self.room);

        Ok(event_rx)
    }

    async fn disconnect(&mut self) -> Result<(), RoomError> {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        if let Some(client) = self.client.take() {
            info!("Leaving room {}", self.room);
            // async-nats handles connection cleanup on drop
            drop(client);
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    fn name(&self) -> &str {
        "nats"
    }
}
