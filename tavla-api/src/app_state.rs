#[derive(Clone)]
pub struct AppState {
    /// Shared client for the relay pass-through.
    pub http_client: reqwest::Client,
    pub linear_api_url: String,
}

impl AppState {
    pub fn new(linear_api_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            linear_api_url,
        }
    }
}
