//! Chat rooms with bounded message history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of messages a room keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    pub sender: String,
    pub timestamp: i64,
}

/// A named chat room.
///
/// History is a FIFO: once it holds more than the room's limit, the oldest
/// message is evicted. The newest message is always retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    pub chat_name: String,
    pub messages: VecDeque<ChatMessage>,
}

impl ChatRoom {
    /// Create an empty room.
    pub fn new(chat_name: impl Into<String>) -> Self {
        Self {
            chat_name: chat_name.into(),
            messages: VecDeque::new(),
        }
    }

    /// Append a message, evicting the oldest messages beyond `limit`.
    ///
    /// Returns the evicted messages, oldest first. A limit of zero is
    /// treated as one so the appended message survives.
    pub fn push_bounded(&mut self, message: ChatMessage, limit: usize) -> Vec<ChatMessage> {
        let limit = limit.max(1);
        self.messages.push_back(message);

        let mut evicted = Vec::new();
        while self.messages.len() > limit {
            if let Some(oldest) = self.messages.pop_front() {
                evicted.push(oldest);
            }
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> ChatMessage {
        ChatMessage {
            message: text.to_string(),
            sender: "me".to_string(),
            timestamp: 123,
        }
    }

    #[test]
    fn keeps_everything_under_limit() {
        let mut room = ChatRoom::new("cpen321");
        for i in 0..4 {
            assert!(room.push_bounded(msg(&i.to_string()), 5).is_empty());
        }
        assert_eq!(room.messages.len(), 4);
    }

    #[test]
    fn overflow_drops_exactly_the_oldest() {
        let mut room = ChatRoom::new("cpen321");
        for text in ["first", "hi", "hi", "hi", "last"] {
            room.push_bounded(msg(text), 5);
        }

        let evicted = room.push_bounded(msg("newmessage"), 5);

        assert_eq!(evicted, vec![msg("first")]);
        assert_eq!(room.messages.len(), 5);
        assert_eq!(room.messages.back(), Some(&msg("newmessage")));
        assert_eq!(room.messages.front(), Some(&msg("hi")));
    }

    #[test]
    fn shrinks_oversized_history_on_next_append() {
        let mut room = ChatRoom::new("big");
        room.messages = (0..8).map(|i| msg(&i.to_string())).collect();

        let evicted = room.push_bounded(msg("new"), 5);

        assert_eq!(evicted.len(), 4);
        assert_eq!(room.messages.len(), 5);
        assert_eq!(room.messages.front(), Some(&msg("4")));
        assert_eq!(room.messages.back(), Some(&msg("new")));
    }

    #[test]
    fn zero_limit_still_keeps_newest() {
        let mut room = ChatRoom::new("tiny");
        room.push_bounded(msg("a"), 0);
        room.push_bounded(msg("b"), 0);

        assert_eq!(room.messages.len(), 1);
        assert_eq!(room.messages.back(), Some(&msg("b")));
    }

    #[test]
    fn serializes_with_chat_name() {
        let room = ChatRoom::new("cpen491");
        let value = serde_json::to_value(&room).unwrap();
        assert_eq!(value["chatName"], serde_json::json!("cpen491"));
        assert_eq!(value["messages"], serde_json::json!([]));
    }
}
