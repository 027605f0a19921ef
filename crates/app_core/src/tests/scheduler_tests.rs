use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn tasks_fire_only_once_their_deadline_passes() {
    let mut queue = TaskQueue::new();
    queue.schedule(ms(1500), "reply");

    assert!(queue.advance(ms(1499)).is_empty());
    assert_eq!(queue.advance(ms(1)), vec!["reply"]);
    assert!(queue.is_empty());
    assert!(queue.advance(ms(10_000)).is_empty());
}

#[test]
fn equal_deadlines_fire_in_schedule_order() {
    let mut queue = TaskQueue::new();
    queue.schedule(ms(100), "first");
    queue.schedule(ms(100), "second");
    queue.schedule(ms(50), "earliest");

    assert_eq!(queue.advance(ms(100)), vec!["earliest", "first", "second"]);
}

#[test]
fn delay_is_relative_to_current_virtual_time() {
    let mut queue = TaskQueue::new();
    queue.advance(ms(400));
    let handle = queue.schedule(ms(100), 7);

    assert_eq!(handle.due(), ms(500));
    assert_eq!(queue.next_due(), Some(ms(500)));
    assert_eq!(queue.advance(ms(100)), vec![7]);
    assert_eq!(queue.now(), ms(500));
}

#[test]
fn cancelled_task_never_fires() {
    let mut queue = TaskQueue::new();
    let keep = queue.schedule(ms(10), "keep");
    let dropped = queue.schedule(ms(10), "drop");

    assert_eq!(queue.cancel(dropped), Some("drop"));
    assert_eq!(queue.cancel(dropped), None);
    assert_eq!(queue.next_due(), Some(keep.due()));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.advance(ms(10)), vec!["keep"]);
}

#[test]
fn task_ids_are_unique_and_increasing() {
    let mut queue = TaskQueue::new();
    let a = queue.schedule(ms(1), ());
    let b = queue.schedule(ms(1), ());
    assert!(a.id() < b.id());
}
