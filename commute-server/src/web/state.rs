//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::CommutePlanner;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Users, events, schedules and chat rooms
    pub store: Arc<MemoryStore>,

    /// Route planner over the configured mapping service
    pub planner: Arc<CommutePlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: MemoryStore, planner: CommutePlanner) -> Self {
        Self {
            store: Arc::new(store),
            planner: Arc::new(planner),
        }
    }
}
