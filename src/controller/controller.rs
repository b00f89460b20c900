use super::state::{ConnectError, Credentials, SessionState, SessionStatus};
use crate::protocol;
use crate::room::{RoomEngine, RoomEvent};
use crate::transcript::{TranscriptEntry, TranscriptLog, SYSTEM_SPEAKER};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// System notice appended exactly once when a session is established
const CONNECTED_NOTICE: &str = "Connected to Assistant! Start speaking...";

/// Display label for transcript entries authored by the local participant
const LOCAL_SPEAKER: &str = "You";

/// Fallback label for a remote sender with an empty identity
const DEFAULT_REMOTE_SPEAKER: &str = "User";

/// A connection controller that manages the voice session lifecycle,
/// room commands, and transcript accumulation
///
/// Single authority over [`SessionState`], sole writer to the transcript,
/// sole issuer of connect/disconnect commands, sole subscriber to room
/// events. All mutation happens behind the controller's locks; each
/// connect request starts a numbered attempt, and notifications belonging
/// to a superseded attempt are discarded.
pub struct ConnectionController {
    /// Room engine the controller issues commands to
    engine: Arc<Mutex<Box<dyn RoomEngine>>>,

    /// Observable session status
    status: Arc<Mutex<SessionStatus>>,

    /// Accumulated transcript for the current session
    transcript: Arc<Mutex<TranscriptLog>>,

    /// Live attempt number; bumped on every connect and disconnect request
    attempt: Arc<AtomicU64>,

    /// Handle for the event pump task of the live attempt
    pump_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ConnectionController {
    pub fn new(engine: Box<dyn RoomEngine>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            status: Arc::new(Mutex::new(SessionStatus::default())),
            transcript: Arc::new(Mutex::new(TranscriptLog::new())),
            attempt: Arc::new(AtomicU64::new(0)),
            pump_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Validate credentials and start a connect attempt
    ///
    /// Returns immediately after issuing the connect command; the
    /// Connecting → Connected transition happens asynchronously when the
    /// room reports readiness. On validation failure the state is left
    /// untouched apart from the user-visible error.
    pub async fn request_connect(&self, credentials: Credentials) -> Result<(), ConnectError> {
        let my_attempt = {
            let mut status = self.status.lock().await;

            if let Err(e) = credentials.validate() {
                warn!("Rejecting connect request: {}", e);
                status.last_error = Some(e.to_string());
                return Err(e);
            }

            if status.state.is_active() {
                warn!("Connect requested while a session is already active");
                return Ok(());
            }

            status.last_error = None;
            status.remote_participants = 0;
            status.state = SessionState::Connecting;
            self.attempt.fetch_add(1, Ordering::SeqCst) + 1
        };

        info!("Connecting to room at {}", credentials.server_url);

        let engine = Arc::clone(&self.engine);
        let status = Arc::clone(&self.status);
        let transcript = Arc::clone(&self.transcript);
        let attempt = Arc::clone(&self.attempt);

        let pump = tokio::spawn(async move {
            Self::run_attempt(engine, status, transcript, attempt, my_attempt, credentials).await;
        });

        {
            let mut handle = self.pump_handle.lock().await;
            *handle = Some(pump);
        }

        Ok(())
    }

    /// Leave the room and return to Idle
    ///
    /// Supersedes any in-flight connect attempt: readiness or roster
    /// notifications that postdate this call are discarded, so a late
    /// Connected transition is never honored. The transcript is left
    /// untouched.
    pub async fn request_disconnect(&self) {
        {
            let mut status = self.status.lock().await;
            if !status.state.is_active() {
                warn!("Disconnect requested while no session is active");
                return;
            }
            self.attempt.fetch_add(1, Ordering::SeqCst);
            status.state = SessionState::Idle;
            status.remote_participants = 0;
        }

        info!("Disconnecting from room");

        let pump = {
            let mut handle = self.pump_handle.lock().await;
            handle.take()
        };

        let engine = Arc::clone(&self.engine);
        tokio::spawn(async move {
            Self::release_engine(&engine).await;
            if let Some(pump) = pump {
                if let Err(e) = pump.await {
                    error!("Event pump task panicked: {}", e);
                }
            }
        });
    }

    /// Empty the transcript (user action, decoupled from the lifecycle)
    pub async fn clear_transcript(&self) {
        self.transcript.lock().await.clear();
        info!("Transcript cleared");
    }

    /// Current lifecycle state
    pub async fn current_state(&self) -> SessionState {
        self.status.lock().await.state.clone()
    }

    /// Full observable status
    pub async fn status(&self) -> SessionStatus {
        self.status.lock().await.clone()
    }

    /// Read-only copy of the transcript, in insertion order
    pub async fn transcript_snapshot(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().await.snapshot()
    }

    pub async fn remote_participant_count(&self) -> usize {
        self.status.lock().await.remote_participants
    }

    pub async fn last_error(&self) -> Option<String> {
        self.status.lock().await.last_error.clone()
    }

    /// Connect to the room and pump its events until the attempt ends
    async fn run_attempt(
        engine: Arc<Mutex<Box<dyn RoomEngine>>>,
        status: Arc<Mutex<SessionStatus>>,
        transcript: Arc<Mutex<TranscriptLog>>,
        attempt: Arc<AtomicU64>,
        my_attempt: u64,
        credentials: Credentials,
    ) {
        let connected = {
            let mut engine = engine.lock().await;
            engine
                .connect(&credentials.server_url, &credentials.token)
                .await
        };

        let mut events = match connected {
            Ok(events) => events,
            Err(e) => {
                let mut status = status.lock().await;
                if attempt.load(Ordering::SeqCst) != my_attempt {
                    return;
                }
                error!("Room connect failed: {}", e);
                status.last_error = Some(e.to_string());
                status.state = SessionState::Failed(e.to_string());
                return;
            }
        };

        {
            let status = status.lock().await;
            if attempt.load(Ordering::SeqCst) != my_attempt {
                // A disconnect raced the connect; release what was just acquired
                drop(status);
                Self::release_engine(&engine).await;
                return;
            }
        }

        while let Some(event) = events.recv().await {
            let mut status = status.lock().await;
            if attempt.load(Ordering::SeqCst) != my_attempt {
                // Stale notification from a superseded attempt; the
                // disconnect path already released the engine
                return;
            }

            let failed = matches!(event, RoomEvent::SessionFailed(_));
            Self::apply_event(&mut status, &transcript, event).await;

            if failed {
                drop(status);
                Self::release_engine(&engine).await;
                return;
            }
        }

        // The engine dropped the event stream without reporting failure
        {
            let mut status = status.lock().await;
            if attempt.load(Ordering::SeqCst) != my_attempt {
                return;
            }
            warn!("Room event stream closed unexpectedly");
            let reason = "room event stream closed".to_string();
            status.last_error = Some(reason.clone());
            status.state = SessionState::Failed(reason);
            status.remote_participants = 0;
        }
        Self::release_engine(&engine).await;
    }

    /// Fold one room notification into the status and transcript
    async fn apply_event(
        status: &mut SessionStatus,
        transcript: &Arc<Mutex<TranscriptLog>>,
        event: RoomEvent,
    ) {
        match event {
            RoomEvent::RosterChanged(participants) => {
                status.remote_participants = participants.len();

                let mut transcript = transcript.lock().await;
                if status.state == SessionState::Connecting {
                    // First readiness signal of the attempt
                    info!("Room joined, session established");
                    status.state = SessionState::Connected;
                    transcript.append(CONNECTED_NOTICE, SYSTEM_SPEAKER, false);
                } else {
                    debug!("Roster changed: {} remote participant(s)", participants.len());
                }

                // One announcement per participant per change event
                for participant in participants {
                    transcript.append(
                        format!("{} is in the room", participant.identity),
                        SYSTEM_SPEAKER,
                        false,
                    );
                }
            }

            RoomEvent::DataReceived {
                payload,
                sender_identity,
            } => {
                let event = match protocol::decode(&payload) {
                    Ok(event) => event,
                    Err(e) => {
                        warn!("Dropping data message: {}", e);
                        return;
                    }
                };

                if !event.is_transcription() {
                    debug!("Ignoring data event of type {}", event.event_type);
                    return;
                }

                let Some(text) = event.text else {
                    warn!("Dropping transcription event without text");
                    return;
                };

                let sender = event.sender_identity.or(sender_identity);
                let is_local = matches!(sender.as_deref(), None | Some("user"));
                let speaker = match sender.as_deref() {
                    None | Some("user") => LOCAL_SPEAKER.to_string(),
                    Some("") => DEFAULT_REMOTE_SPEAKER.to_string(),
                    Some(identity) => identity.to_string(),
                };

                transcript.lock().await.append(text, speaker, is_local);
            }

            RoomEvent::SessionFailed(reason) => {
                error!("Room session failed: {}", reason);
                status.last_error = Some(reason.clone());
                status.state = SessionState::Failed(reason);
                status.remote_participants = 0;
            }
        }
    }

    async fn release_engine(engine: &Arc<Mutex<Box<dyn RoomEngine>>>) {
        if let Err(e) = engine.lock().await.disconnect().await {
            warn!("Room disconnect failed: {}", e);
        }
    }
}
