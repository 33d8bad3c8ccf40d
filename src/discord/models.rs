//! Channel message payloads returned by `GET /channels/{id}/messages`

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelMessage {
    #[serde(default)]
    pub content: String,
    pub author: MessageAuthor,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageAuthor {
    pub id: String,
}
