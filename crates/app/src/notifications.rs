//! Shopper-facing notifications.

use mockall::automock;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Fire-and-forget channel for messages shown to the shopper.
#[automock]
pub trait Notifier: Send + Sync {
    /// Surface an error message.
    fn error(&self, message: &str);
}

/// Emits notifications as `warn` events on the `rocketshoes::toast` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(target: "rocketshoes::toast", toast = message, "cart operation failed");
    }
}

/// A notification delivered to UI consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
}

/// Forwards notifications to a receiver owned by the UI layer.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        if self
            .sender
            .send(Notification::Error(message.to_string()))
            .is_err()
        {
            debug!(toast = message, "notification dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_notifier_forwards_messages() {
        let (notifier, mut receiver) = ChannelNotifier::new();

        notifier.error("Erro na remoção do produto");

        assert_eq!(
            receiver.try_recv().ok(),
            Some(Notification::Error("Erro na remoção do produto".to_string()))
        );
    }

    #[test]
    fn channel_notifier_ignores_closed_receiver() {
        let (notifier, receiver) = ChannelNotifier::new();

        drop(receiver);

        notifier.error("Erro na adição do produto");
    }
}
