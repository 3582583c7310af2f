//! WebSocket client for the backend log broadcast

use crate::error::{Error, Result};
use crate::logs::LogEntry;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use url::Url;

/// Path of the log broadcast endpoint relative to the backend base URL
pub const LOG_STREAM_PATH: &str = "ws/logs";

/// Derive the log stream URL from the HTTP base URL (`http` → `ws`, `https` → `wss`)
pub fn stream_url(base: &Url) -> Result<Url> {
    let mut url = base.join(LOG_STREAM_PATH)?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(Error::Config(format!(
                "unsupported backend scheme '{}'",
                other
            )))
        }
    };
    url.set_scheme(scheme)
        .map_err(|_| Error::Config(format!("cannot use scheme '{}' for {}", scheme, base)))?;
    Ok(url)
}

/// An open connection to the log broadcast
pub struct LogStream {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl std::fmt::Debug for LogStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStream").finish_non_exhaustive()
    }
}

impl LogStream {
    pub async fn connect(url: &Url) -> Result<Self> {
        let (socket, _response) = connect_async(url.as_str()).await?;
        tracing::info!("Connected to log stream at {}", url);
        Ok(Self { socket })
    }

    /// Wait for the next well-formed record.
    ///
    /// Malformed records are skipped. Returns `None` once the connection closes or fails.
    pub async fn next_entry(&mut self) -> Option<LogEntry> {
        while let Some(message) = self.socket.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    if let Some(entry) = LogEntry::parse(text.as_str()) {
                        return Some(entry);
                    }
                }
                Ok(Message::Binary(data)) => match std::str::from_utf8(&data) {
                    Ok(text) => {
                        if let Some(entry) = LogEntry::parse(text) {
                            return Some(entry);
                        }
                    }
                    Err(e) => tracing::warn!("Dropping non UTF-8 log message: {}", e),
                },
                Ok(Message::Close(frame)) => {
                    tracing::debug!("Log stream closed by server: {:?}", frame);
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Log stream error: {}", e);
                    return None;
                }
            }
        }
        None
    }

    pub async fn close(mut self) -> Result<()> {
        self.socket.close(None).await?;
        Ok(())
    }
}
