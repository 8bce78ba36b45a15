use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut q = ToastQueue::default();
    let a = q.push(ToastKind::Success, "Post created!".into());
    let b = q.push(ToastKind::Error, "Failed to create post".into());
    assert!(b > a);
    assert_eq!(q.items.len(), 2);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut q = ToastQueue::default();
    let a = q.push(ToastKind::Success, "one".into());
    q.push(ToastKind::Success, "two".into());
    q.dismiss(a);
    assert_eq!(q.items.iter().map(|t| t.message.as_str()).collect::<Vec<_>>(), vec!["two"]);
    q.dismiss(999);
    assert_eq!(q.items.len(), 1);
}

#[test]
fn queue_drops_oldest_when_full() {
    let mut q = ToastQueue::default();
    for i in 0..(MAX_TOASTS + 2) {
        q.push(ToastKind::Error, format!("e{i}"));
    }
    assert_eq!(q.items.len(), MAX_TOASTS);
    assert_eq!(q.items[0].message, "e2");
}
