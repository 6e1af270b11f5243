use super::*;

#[test]
fn push_appends_and_returns_the_id() {
    let mut state = ToastState::default();
    let id = state.push(Toast::info("Saved", "All good."));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, id);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.push(Toast::info("One", ""));
    let second = state.push(Toast::error("Two", ""));

    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);

    // Dismissing an already-gone toast is harmless.
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn constructors_set_the_kind() {
    assert_eq!(Toast::info("t", "m").kind, ToastKind::Info);
    assert_eq!(Toast::error("t", "m").kind, ToastKind::Error);
}

#[test]
fn toast_ids_are_unique() {
    assert_ne!(Toast::info("t", "m").id, Toast::info("t", "m").id);
}
