use std::time::{Duration, Instant};

/// Severity of a toast, controls icon and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn icon(self) -> char {
        match self {
            Severity::Success => '\u{2713}', // ✓
            Severity::Error => '\u{2715}',   // ✕
            Severity::Info => '\u{2139}',    // ℹ
        }
    }
}

/// A transient notification. Each toast carries its own expiry deadline and
/// is removed by the event-loop tick once the deadline passes.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Derived from creation time; unique among currently-live toasts
    pub id: i64,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

/// Queue of live toasts, rendered in push order, each expiring independently
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            ttl,
        }
    }

    /// Append a toast expiring `ttl` from now
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }

    /// Append a toast expiring `ttl` after `now`
    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let mut id = chrono::Utc::now().timestamp_millis();
        while self.toasts.iter().any(|t| t.id == id) {
            id += 1;
        }
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            expires_at: now + self.ttl,
        });
    }

    /// Remove a toast by id. No-op if the expiry timer already removed it.
    pub fn dismiss(&mut self, id: i64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop every toast whose deadline has passed
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// The oldest live toast (target of manual Esc dismissal)
    pub fn front(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> ToastQueue {
        ToastQueue::new(Duration::from_millis(3000))
    }

    #[test]
    fn toasts_expire_independently_after_the_window() {
        let mut q = queue();
        let t0 = Instant::now();
        q.push_at("first", Severity::Success, t0);
        q.push_at("second", Severity::Info, t0 + Duration::from_millis(1000));
        assert_eq!(q.len(), 2);

        q.expire(t0 + Duration::from_millis(3001));
        assert_eq!(q.len(), 1);
        assert_eq!(q.front().unwrap().message, "second");

        q.expire(t0 + Duration::from_millis(4001));
        assert!(q.is_empty());
    }

    #[test]
    fn manual_dismiss_removes_only_the_target() {
        let mut q = queue();
        let t0 = Instant::now();
        q.push_at("keep", Severity::Success, t0);
        q.push_at("drop", Severity::Error, t0);
        let drop_id = q.iter().nth(1).unwrap().id;

        q.dismiss(drop_id);
        assert_eq!(q.len(), 1);
        assert_eq!(q.front().unwrap().message, "keep");

        // The survivor still expires on its own schedule
        q.expire(t0 + Duration::from_millis(3001));
        assert!(q.is_empty());
    }

    #[test]
    fn dismiss_after_expiry_is_a_noop() {
        let mut q = queue();
        let t0 = Instant::now();
        q.push_at("gone", Severity::Success, t0);
        let id = q.front().unwrap().id;
        q.expire(t0 + Duration::from_millis(3001));
        q.dismiss(id);
        assert!(q.is_empty());
    }

    #[test]
    fn live_ids_are_unique() {
        let mut q = queue();
        let t0 = Instant::now();
        for _ in 0..10 {
            q.push_at("x", Severity::Success, t0);
        }
        let mut ids: Vec<i64> = q.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn toasts_keep_push_order() {
        let mut q = queue();
        let t0 = Instant::now();
        q.push_at("a", Severity::Success, t0);
        q.push_at("b", Severity::Error, t0);
        q.push_at("c", Severity::Info, t0);
        let messages: Vec<&str> = q.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }
}
