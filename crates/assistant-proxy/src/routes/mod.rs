// Export route modules
pub mod assistant;
pub mod status;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(status::routes())
        .merge(assistant::routes(state))
}
