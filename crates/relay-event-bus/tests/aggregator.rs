//! End-to-end scenarios for the aggregation hub and its facades.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use relay_event_bus::{EventAggregator, Message, Publisher, Subscriber};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Event {
    TypeA,
    TypeB,
}

/// The reference walkthrough: two tokens on one key, in-order delivery,
/// then whole-key eviction through either token.
#[test]
fn shared_key_dispatch_and_whole_key_eviction() {
    let aggregator: EventAggregator<Event, &'static str> = EventAggregator::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&log);
    let t1 = aggregator.subscribe(Event::TypeA, move |msg| {
        first.lock().unwrap().push(("cb1", *msg.content()));
    });
    let second = Arc::clone(&log);
    let t2 = aggregator.subscribe(Event::TypeA, move |msg| {
        second.lock().unwrap().push(("cb2", *msg.content()));
    });
    assert_ne!(t1, t2);

    aggregator.publish(&Message::new(Event::TypeA, "x"));
    assert_eq!(*log.lock().unwrap(), vec![("cb1", "x"), ("cb2", "x")]);

    // Revoking t1 clears the whole key, t2 included.
    assert!(aggregator.unsubscribe(&t1));
    aggregator.publish(&Message::new(Event::TypeA, "y"));

    assert_eq!(*log.lock().unwrap(), vec![("cb1", "x"), ("cb2", "x")]);
    assert_eq!(aggregator.subscription_count(), 0);
}

/// Two independent subscriber facades on one key: one publish fires each
/// exactly once, in registration order, on the publishing thread.
#[test]
fn two_facades_fire_once_each_in_order_on_the_publishing_thread() {
    let aggregator: EventAggregator<Event, String> = EventAggregator::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let publisher_thread = thread::current().id();

    let mut metrics = Subscriber::new(aggregator.clone());
    let sink = Arc::clone(&log);
    metrics
        .subscribe(Event::TypeB, move |msg: &Message<Event, String>| {
            assert_eq!(thread::current().id(), publisher_thread);
            sink.lock().unwrap().push(format!("metrics:{}", msg.content()));
        })
        .unwrap();

    let mut alerts = Subscriber::new(aggregator.clone());
    let sink = Arc::clone(&log);
    alerts
        .subscribe(Event::TypeB, move |msg: &Message<Event, String>| {
            assert_eq!(thread::current().id(), publisher_thread);
            sink.lock().unwrap().push(format!("alerts:{}", msg.content()));
        })
        .unwrap();

    Publisher::new(aggregator).publish_content(Event::TypeB, "b1".to_string());

    assert_eq!(
        *log.lock().unwrap(),
        vec!["metrics:b1".to_string(), "alerts:b1".to_string()]
    );
}

/// A registration made on one thread is visible to publishes from
/// another.
#[test]
fn registrations_are_visible_across_threads() {
    let aggregator: EventAggregator<Event, u32> = EventAggregator::new();
    let sum = Arc::new(AtomicUsize::new(0));

    let probe = Arc::clone(&sum);
    aggregator.subscribe(Event::TypeA, move |msg| {
        probe.fetch_add(*msg.content() as usize, Ordering::SeqCst);
    });

    let publisher = Publisher::new(aggregator.clone());
    thread::spawn(move || {
        publisher.publish_content(Event::TypeA, 2);
        publisher.publish_content(Event::TypeA, 3);
    })
    .join()
    .unwrap();

    assert_eq!(sum.load(Ordering::SeqCst), 5);
}

/// A panicking action propagates to the publisher and aborts the rest
/// of the pass; the registry itself stays usable.
#[test]
fn panicking_action_aborts_the_pass_but_not_the_registry() {
    let aggregator: EventAggregator<Event, &'static str> = EventAggregator::new();
    let reached = Arc::new(AtomicUsize::new(0));

    aggregator.subscribe(Event::TypeA, |_| panic!("subscriber blew up"));
    let probe = Arc::clone(&reached);
    aggregator.subscribe(Event::TypeA, move |_| {
        probe.fetch_add(1, Ordering::SeqCst);
    });

    let message = Message::new(Event::TypeA, "x");
    let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| aggregator.publish(&message)));
    assert!(outcome.is_err());
    assert_eq!(reached.load(Ordering::SeqCst), 0);

    // Dispatch runs outside the lock, so the registry is not poisoned.
    assert_eq!(aggregator.subscription_count(), 2);
    aggregator.subscribe(Event::TypeB, |_| {});
    assert_eq!(aggregator.subscription_count(), 3);
}

/// Facade-level teardown mirrors the hub-side registry.
#[test]
fn dispose_clears_both_sides() {
    let aggregator: EventAggregator<Event, String> = EventAggregator::new();
    let mut subscriber = Subscriber::new(aggregator.clone());

    subscriber.subscribe(Event::TypeA, |_| {}).unwrap();
    subscriber.subscribe(Event::TypeB, |_| {}).unwrap();
    assert_eq!(aggregator.subscription_count(), 2);

    subscriber.dispose();

    assert_eq!(subscriber.subscription_count(), 0);
    assert_eq!(aggregator.subscription_count(), 0);

    let publisher = Publisher::new(aggregator.clone());
    publisher.publish_content(Event::TypeA, "ignored".to_string());
    assert_eq!(aggregator.stats().events_delivered, 0);
}
