use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/chat";
pub const APP_TITLE: &str = "Modern Chatbot";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub endpoint: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
            window_title: APP_TITLE.to_string(),
            inner_size: [720.0, 760.0],
            min_inner_size: [420.0, 480.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatConfig, APP_TITLE, DEFAULT_ENDPOINT};

    #[test]
    fn default_points_at_fixed_local_chat_endpoint() {
        let config = ChatConfig::default();
        assert_eq!(config.endpoint, "http://localhost:5000/api/chat");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn default_window_title_matches_header() {
        assert_eq!(ChatConfig::default().window_title, APP_TITLE);
    }
}
