//! User-facing notifications emitted by the resolver.
//!
//! Sinks are fire-and-forget: the resolver never waits on them and ignores
//! delivery failures.

use serde::Serialize;
use std::fmt::Debug;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: None }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Some(Variant::Destructive),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Some(Variant::Destructive)
    }
}

pub trait NotificationSink: Send + Sync + Debug {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::debug!("notification receiver dropped");
        }
    }
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, n: Notification) {
        if n.is_destructive() {
            tracing::warn!(title = %n.title, "{}", n.description);
        } else {
            tracing::info!(title = %n.title, "{}", n.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_sink_forwards_in_order() {
        let (sink, mut rx) = ChannelSink::new();

        sink.notify(Notification::info("a", "first"));
        sink.notify(Notification::destructive("b", "second"));

        let first = rx.try_recv().expect("first notification");
        let second = rx.try_recv().expect("second notification");

        assert_eq!(first.description, "first");
        assert!(!first.is_destructive());
        assert!(second.is_destructive());
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);

        sink.notify(Notification::info("ignored", "nobody listening"));
    }

    #[test]
    fn destructive_variant_serializes_lowercase() {
        let json = serde_json::to_value(Notification::destructive("Error", "x")).unwrap();
        assert_eq!(json["variant"], "destructive");

        let json = serde_json::to_value(Notification::info("Ok", "x")).unwrap();
        assert!(json.get("variant").is_none());
    }
}
