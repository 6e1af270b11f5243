use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn notify_without_handler_is_a_noop() {
    clear_handler();
    notify();
}

#[test]
fn handler_runs_on_every_notify() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    set_handler(move || seen.set(seen.get() + 1));

    notify();
    notify();
    assert_eq!(calls.get(), 2);

    clear_handler();
}

#[test]
fn clear_handler_stops_delivery() {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    set_handler(move || seen.set(seen.get() + 1));

    notify();
    clear_handler();
    notify();
    assert_eq!(calls.get(), 1);
}

#[test]
fn set_handler_replaces_the_previous_one() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));

    let seen = Rc::clone(&first);
    set_handler(move || seen.set(seen.get() + 1));
    let seen = Rc::clone(&second);
    set_handler(move || seen.set(seen.get() + 1));

    notify();
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);

    clear_handler();
}
