// SPDX-License-Identifier: FSL-1.1
use chainlist::{Error, Queue};

#[test_log::test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(Ok(1), queue.dequeue());
    assert_eq!(Some(&2), queue.peek());
    assert_eq!(Ok(2), queue.dequeue());
    assert!(!queue.is_empty());
    assert_eq!(Ok(3), queue.dequeue());
    assert!(queue.is_empty());
}

#[test_log::test]
fn test_fresh_queue() {
    let mut queue: Queue<String> = Queue::new();
    assert!(queue.is_empty());
    assert_eq!(0, queue.len());
    assert_eq!(None, queue.peek());
    assert_eq!(Err(Error::EmptyCollection("dequeue")), queue.dequeue());
    // a failed dequeue leaves the queue usable
    queue.enqueue("after".to_string());
    assert_eq!(Some(&"after".to_string()), queue.peek());
}

#[test_log::test]
fn test_peek_on_empty_is_not_an_error() {
    // documented behavior: the queue reports an empty peek as None while the
    // stack reports it as an error
    let mut queue = Queue::new();
    queue.enqueue('q');
    assert_eq!(Ok('q'), queue.dequeue());
    assert_eq!(None, queue.peek());
}

#[test_log::test]
fn test_round_trip_then_reuse() {
    let mut queue = Queue::with_capacity(8);
    for round in 0..3 {
        for i in 0..100 {
            queue.enqueue(round * 100 + i);
            assert!(!queue.is_empty());
        }
        assert_eq!(100, queue.len());
        for i in 0..100 {
            assert_eq!(Ok(round * 100 + i), queue.dequeue());
        }
        assert!(queue.is_empty());
        assert!(queue.dequeue().is_err());
    }
}

#[test_log::test]
fn test_interleaved() {
    let mut queue = Queue::new();
    let mut expected = std::collections::VecDeque::new();
    for i in 0..50u32 {
        queue.enqueue(i);
        expected.push_back(i);
        if i % 3 == 0 {
            assert_eq!(expected.pop_front(), queue.dequeue().ok());
        }
        assert_eq!(expected.front(), queue.peek());
        assert_eq!(expected.len(), queue.len());
    }
    while let Some(v) = expected.pop_front() {
        assert_eq!(Ok(v), queue.dequeue());
    }
    assert!(queue.is_empty());
}

#[test_log::test]
fn test_non_clone_values() {
    struct Opaque(Vec<u8>);

    let mut queue = Queue::default();
    queue.enqueue(Opaque(vec![1]));
    queue.enqueue(Opaque(vec![2, 2]));
    assert_eq!(Some(1), queue.peek().map(|o| o.0.len()));
    let first = queue.dequeue().map(|o| o.0);
    assert_eq!(Ok(vec![1]), first);
    assert_eq!("Queue { len: 1 }", format!("{queue:?}"));
}
