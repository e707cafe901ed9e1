use super::*;

#[test]
fn push_appends_and_returns_id() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Success, "Saved");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].text, "Saved");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
}

#[test]
fn toasts_accumulate_newest_last() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "first");
    state.push(ToastKind::Error, "second");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].text, "second");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "first");
    let second = state.push(ToastKind::Info, "second");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
    // Unknown ids are a no-op.
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn kind_classes_are_distinct() {
    assert_eq!(ToastKind::Info.class(), "toast--info");
    assert_eq!(ToastKind::Success.class(), "toast--success");
    assert_eq!(ToastKind::Error.class(), "toast--error");
}
