use std::sync::Arc;

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
}

impl AppState {
    /// Simulated network latency for content requests
    pub async fn content_delay(&self) {
        let delay = self.config.content_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
