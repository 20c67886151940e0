use chrono::{DateTime, Duration, Utc};

/// Trailing-edge debounce driven by explicit clock values.
///
/// Each `call` stores the latest value and re-arms the quiet window; `poll`
/// fires at most one trailing call once the window has elapsed with no further
/// activity. Repeated calls inside the window collapse into a single fire
/// carrying the last value.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    deadline: Option<DateTime<Utc>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            deadline: None,
        }
    }

    pub fn call(&mut self, value: T, now: DateTime<Utc>) {
        self.pending = Some(value);
        self.deadline = Some(now + self.window);
    }

    /// Takes the trailing value if the quiet window has elapsed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.deadline = None;
            return self.pending.take();
        }
        None
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
