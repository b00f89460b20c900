use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use voicelink::{
    ensure_initialized, AppState, AudioSession, Config, ConnectionController, Credentials,
    DisabledAudioSession, NatsRoom,
};

#[derive(Debug, Parser)]
#[command(name = "voicelink", about = "Voice assistant session controller")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/voicelink")]
    config: String,

    /// Override the room server URL from the configuration file
    #[arg(long)]
    server_url: Option<String>,

    /// Override the room access token from the configuration file
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    ensure_initialized();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(server_url) = args.server_url {
        cfg.room.server_url = server_url;
    }
    if let Some(token) = args.token {
        cfg.room.token = token;
    }

    info!("voicelink v0.1.0");
    info!("Loaded config: {}", cfg.service.name);
    info!(
        "HTTP server will bind to {}:{}",
        cfg.service.http.bind, cfg.service.http.port
    );

    // Audio lifecycle: attempted once at startup; a failure is surfaced to
    // the client but never blocks the session controller
    let mut audio: Box<dyn AudioSession> = Box::new(DisabledAudioSession::new());
    let audio_warning = if cfg.audio.enabled {
        match audio.start().await {
            Ok(()) => None,
            Err(e) => {
                error!("Audio session failed to start: {}", e);
                Some(e.to_string())
            }
        }
    } else {
        None
    };

    let engine = NatsRoom::new(cfg.room.room.clone());
    let controller = Arc::new(ConnectionController::new(Box::new(engine)));

    // Auto-connect when the config carries credentials
    if !cfg.room.server_url.is_empty() && !cfg.room.token.is_empty() {
        let credentials = Credentials::new(cfg.room.server_url.clone(), cfg.room.token.clone());
        if let Err(e) = controller.request_connect(credentials).await {
            error!("Startup connect rejected: {}", e);
        }
    }

    let state = AppState::new(Arc::clone(&controller)).with_audio_warning(audio_warning);
    let router = voicelink::create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    audio.stop().await;

    Ok(())
}
