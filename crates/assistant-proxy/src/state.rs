use crate::configuration::MissingContentPolicy;

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub missing_content: MissingContentPolicy,
}
