use globe_core::signal::Signal;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn listeners_run_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut signal = Signal::<u32>::new();
    for tag in ["a", "b", "c"] {
        let log = log.clone();
        signal.add(move |v| log.borrow_mut().push(format!("{tag}{v}")));
    }
    signal.dispatch(&1);
    signal.dispatch(&2);
    assert_eq!(*log.borrow(), ["a1", "b1", "c1", "a2", "b2", "c2"]);
}

#[test]
fn once_listeners_fire_a_single_time() {
    let hits = Rc::new(RefCell::new(0));
    let mut signal = Signal::<()>::new();
    let h = hits.clone();
    signal.add_once(move |_| *h.borrow_mut() += 1);
    signal.add(|_| {});
    assert_eq!(signal.len(), 2);
    signal.dispatch(&());
    signal.dispatch(&());
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(signal.len(), 1);
    signal.clear();
    assert!(signal.is_empty());
}
