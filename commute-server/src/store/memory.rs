//! In-memory user and chat store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{ChatMessage, ChatRoom, DEFAULT_HISTORY_LIMIT, Event, ScheduleEntry, User};

use super::error::StoreError;
use super::merge::merge;

/// In-memory store for users, their events and schedules, and chat rooms.
///
/// Every operation takes the relevant lock once, so each is atomic with
/// respect to the others.
#[derive(Debug)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    rooms: RwLock<HashMap<String, ChatRoom>>,
    history_limit: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl MemoryStore {
    /// Create an empty store whose rooms keep `history_limit` messages.
    pub fn new(history_limit: usize) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            rooms: RwLock::new(HashMap::new()),
            history_limit,
        }
    }

    pub async fn get_user(&self, username: &str) -> Option<User> {
        self.users.read().await.get(username).cloned()
    }

    /// Add a user. Returns `false` if the username was already taken, in
    /// which case the stored user is left as it was.
    pub async fn add_user(&self, user: User) -> Result<bool, StoreError> {
        if user.username.trim().is_empty() {
            return Err(StoreError::InvalidUser("username must not be empty"));
        }

        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Ok(false);
        }

        tracing::info!(username = %user.username, "user added");
        users.insert(user.username.clone(), user);
        Ok(true)
    }

    /// Merge a partial preferences document into a user's preferences.
    ///
    /// Returns the merged preferences.
    pub async fn update_preferences(
        &self,
        username: &str,
        patch: serde_json::Value,
    ) -> Result<serde_json::Value, StoreError> {
        if !patch.is_object() {
            return Err(StoreError::InvalidPreferences(
                "update must be a JSON object".to_string(),
            ));
        }

        let mut users = self.users.write().await;
        let user = users
            .get_mut(username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;

        let current = std::mem::take(&mut user.preferences);
        user.preferences = merge(current, patch);
        Ok(user.preferences.clone())
    }

    /// Add events to a user, skipping any whose name is already present.
    ///
    /// Added events are marked as having a chat room. Returns the events
    /// that were added.
    pub async fn add_events(
        &self,
        username: &str,
        events: Vec<Event>,
    ) -> Result<Vec<Event>, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;

        let mut added = Vec::new();
        for mut event in events {
            if user.event(&event.event_name).is_some() {
                continue;
            }
            event.has_chat = Some(true);
            user.events.push(event.clone());
            added.push(event);
        }

        tracing::debug!(%username, added = added.len(), "events added");
        Ok(added)
    }

    pub async fn get_events(&self, username: &str) -> Result<Vec<Event>, StoreError> {
        self.users
            .read()
            .await
            .get(username)
            .map(|u| u.events.clone())
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))
    }

    /// Replace a user's day schedule.
    pub async fn set_schedule(
        &self,
        username: &str,
        entries: Vec<ScheduleEntry>,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;

        user.day_schedule = entries;
        Ok(())
    }

    /// Create a room, or return the existing room of that name.
    pub async fn create_room(&self, chat_name: &str) -> ChatRoom {
        let mut rooms = self.rooms.write().await;
        rooms
            .entry(chat_name.to_string())
            .or_insert_with(|| ChatRoom::new(chat_name))
            .clone()
    }

    pub async fn get_room(&self, chat_name: &str) -> Option<ChatRoom> {
        self.rooms.read().await.get(chat_name).cloned()
    }

    /// Append a message to a room, creating the room if needed.
    ///
    /// Returns the room after the append.
    pub async fn add_message(&self, chat_name: &str, message: ChatMessage) -> ChatRoom {
        let mut rooms = self.rooms.write().await;
        let room = rooms
            .entry(chat_name.to_string())
            .or_insert_with(|| ChatRoom::new(chat_name));

        let evicted = room.push_bounded(message, self.history_limit);
        if !evicted.is_empty() {
            tracing::debug!(%chat_name, evicted = evicted.len(), "chat history trimmed");
        }
        room.clone()
    }
}
