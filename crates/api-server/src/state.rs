use application::FarmerDirectory;

/// Shared by every request handler
pub struct AppState {
    pub farmers: FarmerDirectory,
}

impl AppState {
    pub fn new(farmers: FarmerDirectory) -> Self {
        Self { farmers }
    }
}
