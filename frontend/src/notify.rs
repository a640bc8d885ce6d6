use std::rc::Rc;

use yew::prelude::*;

/// Transient user-facing messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

const MAX_TOASTS: usize = 4;

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id: self.next_id,
            kind,
            message,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => next.push(kind, message),
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

/// Notifier backed by the page's toast queue.
#[derive(Clone)]
pub struct ToastNotifier {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(dispatcher: UseReducerDispatcher<ToastQueue>) -> Self {
        ToastNotifier { dispatcher }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        self.dispatcher
            .dispatch(ToastAction::Push(ToastKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.dispatcher
            .dispatch(ToastAction::Push(ToastKind::Error, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(queue: ToastQueue, action: ToastAction) -> ToastQueue {
        (*Rc::new(queue).reduce(action)).clone()
    }

    #[test]
    fn push_and_dismiss() {
        let queue = reduce(
            ToastQueue::default(),
            ToastAction::Push(ToastKind::Error, "Gagal memuat data pembayaran".into()),
        );
        let queue = reduce(
            queue,
            ToastAction::Push(ToastKind::Success, "Pembayaran berhasil diproses!".into()),
        );
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Success);

        let first = queue.toasts()[0].id;
        let queue = reduce(queue, ToastAction::Dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "Pembayaran berhasil diproses!");
    }

    #[test]
    fn keeps_only_the_newest_toasts() {
        let mut queue = ToastQueue::default();
        for i in 0..7 {
            queue = reduce(queue, ToastAction::Push(ToastKind::Error, format!("error {i}")));
        }
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["error 3", "error 4", "error 5", "error 6"]);
    }
}
