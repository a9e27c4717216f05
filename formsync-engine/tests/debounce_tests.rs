use formsync_engine::Debouncer;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

const DELAY: Duration = Duration::from_millis(300);

fn counting_action(counter: &Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
    let counter = Arc::clone(counter);
    async move {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn new_records_the_configured_delay() {
    let debouncer = Debouncer::new(DELAY);
    assert_eq!(debouncer.delay(), DELAY);
}

#[tokio::test(start_paused = true)]
async fn fires_once_after_delay() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.trigger(counting_action(&fired));

    sleep(Duration::from_millis(299)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn burst_coalesces_to_one_invocation() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(DELAY);

    for _ in 0..5 {
        debouncer.trigger(counting_action(&fired));
        sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn latest_trigger_context_wins() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut debouncer = Debouncer::new(DELAY);

    for value in ["b", "bo", "bob"] {
        let seen = Arc::clone(&seen);
        debouncer.trigger(async move {
            seen.lock().unwrap().push(value);
        });
        sleep(Duration::from_millis(50)).await;
    }

    sleep(Duration::from_millis(400)).await;
    assert_eq!(*seen.lock().unwrap(), vec!["bob"]);
}

#[tokio::test(start_paused = true)]
async fn retrigger_restarts_the_quiet_period() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.trigger(counting_action(&fired));
    sleep(Duration::from_millis(200)).await;
    debouncer.trigger(counting_action(&fired));

    // 300ms from the first trigger, but only 100ms from the second.
    sleep(Duration::from_millis(100)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(250)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn retrigger_aborts_an_in_flight_action() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut debouncer = Debouncer::new(DELAY);

    let slow = Arc::clone(&seen);
    debouncer.trigger(async move {
        slow.lock().unwrap().push("start");
        sleep(Duration::from_millis(100)).await;
        slow.lock().unwrap().push("finish");
    });

    // The first action is mid-run at 350ms; retriggering aborts it at its
    // await point, so "finish" never lands.
    sleep(Duration::from_millis(350)).await;
    let fast = Arc::clone(&seen);
    debouncer.trigger(async move {
        fast.lock().unwrap().push("second");
    });

    sleep(Duration::from_millis(400)).await;
    assert_eq!(*seen.lock().unwrap(), vec!["start", "second"]);
}

#[tokio::test(start_paused = true)]
async fn separate_bursts_each_fire() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.trigger(counting_action(&fired));
    sleep(Duration::from_millis(400)).await;
    debouncer.trigger(counting_action(&fired));
    sleep(Duration::from_millis(400)).await;

    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_the_pending_action() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(DELAY);

    debouncer.trigger(counting_action(&fired));
    debouncer.cancel();

    sleep(Duration::from_millis(400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_the_pending_action() {
    let fired = Arc::new(AtomicUsize::new(0));
    {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.trigger(counting_action(&fired));
    }

    sleep(Duration::from_millis(400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn is_pending_tracks_lifecycle() {
    let fired = Arc::new(AtomicUsize::new(0));
    let mut debouncer = Debouncer::new(DELAY);
    assert!(!debouncer.is_pending());

    debouncer.trigger(counting_action(&fired));
    assert!(debouncer.is_pending());

    sleep(Duration::from_millis(400)).await;
    assert!(!debouncer.is_pending());
}
