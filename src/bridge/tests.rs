//! Event broker unit tests

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use serde_json::json;

    use crate::bridge::{BridgeEvent, EventBroker};

    /// Collects delivered events so assertions can inspect order and count.
    fn recording_handler() -> (
        impl Fn(BridgeEvent) + Send + Sync + 'static,
        Arc<Mutex<Vec<BridgeEvent>>>,
    ) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let handler = move |event: BridgeEvent| {
            sink.lock().expect("recording mutex poisoned").push(event);
        };
        (handler, received)
    }

    fn names(received: &Arc<Mutex<Vec<BridgeEvent>>>) -> Vec<&'static str> {
        received
            .lock()
            .expect("recording mutex poisoned")
            .iter()
            .map(|e| e.name)
            .collect()
    }

    #[test]
    fn test_events_before_first_listener_are_buffered() {
        let broker = EventBroker::new();

        broker.dispatch(BridgeEvent::new("notification_received", Some(json!({"id": "1"}))));
        broker.dispatch(BridgeEvent::new("notification_opened", None));

        assert_eq!(broker.pending_len(), 2, "pre-attach events should queue");
    }

    #[test]
    fn test_first_listener_receives_buffered_events_in_order() {
        let broker = EventBroker::new();

        broker.dispatch(BridgeEvent::new("a", None));
        broker.dispatch(BridgeEvent::new("b", None));

        let (handler, received) = recording_handler();
        broker.start_listening(handler);

        assert_eq!(names(&received), vec!["a", "b"]);
        assert_eq!(broker.pending_len(), 0, "buffer must be cleared by the flush");

        broker.dispatch(BridgeEvent::new("c", None));

        assert_eq!(names(&received), vec!["a", "b", "c"]);
        assert_eq!(broker.pending_len(), 0, "live events must never queue");
    }

    #[test]
    fn test_attached_listener_receives_events_synchronously() {
        let broker = EventBroker::new();
        let (handler, received) = recording_handler();
        broker.start_listening(handler);

        broker.dispatch(BridgeEvent::new(
            "notification_settings_changed",
            Some(json!(true)),
        ));

        let events = received.lock().expect("recording mutex poisoned");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "notification_settings_changed");
        assert_eq!(events[0].payload, Some(json!(true)));
    }

    #[test]
    fn test_second_listener_replaces_first_without_replay() {
        let broker = EventBroker::new();

        let (first, first_received) = recording_handler();
        broker.start_listening(first);
        broker.dispatch(BridgeEvent::new("before_swap", None));

        let (second, second_received) = recording_handler();
        broker.start_listening(second);
        broker.dispatch(BridgeEvent::new("after_swap", None));

        assert_eq!(names(&first_received), vec!["before_swap"]);
        assert_eq!(
            names(&second_received),
            vec!["after_swap"],
            "the replacement handler must not see already-delivered events"
        );
    }

    #[test]
    fn test_concurrent_dispatch_before_attach_loses_nothing() {
        const THREADS: usize = 8;
        const EVENTS_PER_THREAD: usize = 50;

        let broker = Arc::new(EventBroker::new());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let broker = broker.clone();
                thread::spawn(move || {
                    for i in 0..EVENTS_PER_THREAD {
                        broker.dispatch(BridgeEvent::new(
                            "notification_received",
                            Some(json!({ "thread": t, "seq": i })),
                        ));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("dispatch thread panicked");
        }

        assert_eq!(broker.pending_len(), THREADS * EVENTS_PER_THREAD);

        let (handler, received) = recording_handler();
        broker.start_listening(handler);

        let events = received.lock().expect("recording mutex poisoned");
        assert_eq!(
            events.len(),
            THREADS * EVENTS_PER_THREAD,
            "every pre-attach event must be flushed exactly once"
        );

        // Per-thread sequences must still be in dispatch order.
        for t in 0..THREADS {
            let seqs: Vec<u64> = events
                .iter()
                .filter_map(|e| e.payload.as_ref())
                .filter(|p| p["thread"] == t)
                .map(|p| p["seq"].as_u64().expect("seq is a number"))
                .collect();
            let expected: Vec<u64> = (0..EVENTS_PER_THREAD as u64).collect();
            assert_eq!(seqs, expected, "thread {t} events arrived out of order");
        }
    }

    #[test]
    fn test_payload_serializes_as_data_and_is_omitted_when_absent() {
        let with_payload = BridgeEvent::new("notification_received", Some(json!({"id": "1"})));
        let value = serde_json::to_value(&with_payload).expect("event serializes");
        assert_eq!(value, json!({"name": "notification_received", "data": {"id": "1"}}));

        let without_payload = BridgeEvent::new("notification_opened", None);
        let value = serde_json::to_value(&without_payload).expect("event serializes");
        assert_eq!(value, json!({"name": "notification_opened"}));
    }
}
