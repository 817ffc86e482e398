pub mod api;
pub mod state;

use application::FarmerDirectory;
use state::AppState;
use std::sync::Arc;

pub fn setup_app_state(farmers: FarmerDirectory) -> Arc<AppState> {
    Arc::new(AppState::new(farmers))
}
