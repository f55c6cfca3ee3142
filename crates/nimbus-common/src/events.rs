use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{ViewId, WindowId};

/// Window-scoped notifications fanned out to shell listeners (tab strip,
/// bookmark bar, zoom indicator, session restore, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    TabCreated {
        window: WindowId,
        view: ViewId,
        url: String,
    },
    TabClosed {
        window: WindowId,
        view: ViewId,
    },
    TabSelected {
        window: WindowId,
        view: ViewId,
    },
    ZoomChanged {
        window: WindowId,
        factor: f64,
        show_dialog: bool,
    },
    TitleChanged {
        window: WindowId,
        title: String,
    },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ShellEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ShellEvent::Shutdown);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ShellEvent::Shutdown));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ShellEvent::TabClosed {
            window: WindowId(1),
            view: ViewId(4),
        });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, ShellEvent::TabClosed { .. }));
        assert!(matches!(e2, ShellEvent::TabClosed { .. }));
    }

    #[tokio::test]
    async fn tab_events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let window = WindowId(1);
        let view = ViewId(2);

        bus.publish(ShellEvent::TabCreated {
            window,
            view,
            url: "https://example.org".into(),
        });
        bus.publish(ShellEvent::TabSelected { window, view });
        bus.publish(ShellEvent::TabClosed { window, view });

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, ShellEvent::TabCreated { view: v, .. } if v == ViewId(2)));

        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, ShellEvent::TabSelected { view: v, .. } if v == ViewId(2)));

        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, ShellEvent::TabClosed { view: v, .. } if v == ViewId(2)));
    }

    #[tokio::test]
    async fn zoom_event_carries_dialog_flag() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ShellEvent::ZoomChanged {
            window: WindowId(1),
            factor: 1.2,
            show_dialog: false,
        });

        let event = rx.recv().await.unwrap();
        match event {
            ShellEvent::ZoomChanged {
                factor,
                show_dialog,
                ..
            } => {
                assert!((factor - 1.2).abs() < f64::EPSILON);
                assert!(!show_dialog);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(ShellEvent::Shutdown);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(ShellEvent::Shutdown);
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: ShellEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, ShellEvent::Unknown));
    }
}
