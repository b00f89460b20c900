use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub room: RoomConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct RoomConfig {
    /// Room server URL; empty means no auto-connect at startup
    #[serde(default)]
    pub server_url: String,

    /// Opaque access token supplied by the embedding application
    #[serde(default)]
    pub token: String,

    /// Logical room name used by the engine's subject scheme
    pub room: String,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    pub enabled: bool,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
