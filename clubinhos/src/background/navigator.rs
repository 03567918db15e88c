use crate::events::DataEvent;
use clubinhos_auth::Navigator;
use tokio::sync::mpsc::UnboundedSender;

/// Turns session navigation requests into data events for the UI loop
pub struct ChannelNavigator {
    data_tx: UnboundedSender<DataEvent>,
}

impl ChannelNavigator {
    pub fn new(data_tx: UnboundedSender<DataEvent>) -> Self {
        Self { data_tx }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigation requested");
        let event = DataEvent::NavigationRequested {
            path: path.to_string(),
        };
        if self.data_tx.send(event).is_err() {
            tracing::warn!(path, "UI loop gone, dropping navigation request");
        }
    }
}
