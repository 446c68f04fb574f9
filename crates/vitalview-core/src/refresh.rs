//! Delayed, cancellable lab projection.
//!
//! After a patient or date change the table shows a loading placeholder for
//! a fixed delay before the new rows appear. Every request bumps a
//! generation counter; a result is applied only if it carries the current
//! generation, so a superseded projection can never become visible.
//!
//! There is no timer thread. The owner polls with the current `Instant`
//! from its event loop, the same way the terminal dashboard drives its
//! animations.

use std::time::{Duration, Instant};

use tracing::debug;

use vitalview_contracts::lab::LabResult;

/// What a projection is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionKey {
    pub patient_name: String,
    pub date: String,
}

impl ProjectionKey {
    pub fn new(patient_name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            patient_name: patient_name.into(),
            date: date.into(),
        }
    }
}

/// Proof of which request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionTicket {
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshState {
    /// Nothing requested yet.
    Idle,
    /// Waiting out the delay for `key`.
    Loading { key: ProjectionKey },
    /// Rows for `key` are visible.
    Ready { key: ProjectionKey, rows: Vec<LabResult> },
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: ProjectionTicket,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct ProjectionRefresher {
    delay: Duration,
    generation: u64,
    pending: Option<Pending>,
    state: RefreshState,
}

impl ProjectionRefresher {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
            state: RefreshState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &RefreshState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RefreshState::Loading { .. })
    }

    /// Visible rows, if the current request has completed.
    pub fn rows(&self) -> Option<&[LabResult]> {
        match &self.state {
            RefreshState::Ready { rows, .. } => Some(rows),
            _ => None,
        }
    }

    /// When the pending request becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Start a projection for `key`, discarding any pending one.
    ///
    /// An empty date has nothing to project and completes immediately with
    /// no rows.
    pub fn request(&mut self, key: ProjectionKey, now: Instant) -> ProjectionTicket {
        self.generation += 1;
        let ticket = ProjectionTicket {
            generation: self.generation,
        };

        if self.pending.take().is_some() {
            debug!(generation = ticket.generation, "pending projection superseded");
        }

        if key.date.is_empty() {
            self.state = RefreshState::Ready { key, rows: Vec::new() };
            return ticket;
        }

        debug!(
            generation = ticket.generation,
            patient = %key.patient_name,
            date = %key.date,
            delay_ms = self.delay.as_millis() as u64,
            "projection requested"
        );
        self.pending = Some(Pending {
            ticket,
            due: now + self.delay,
        });
        self.state = RefreshState::Loading { key };
        ticket
    }

    /// Commit the pending request if its delay has elapsed.
    ///
    /// `projector` runs at most once, only for a due request. Returns `true`
    /// if new rows became visible.
    pub fn poll<F>(&mut self, now: Instant, projector: F) -> bool
    where
        F: FnOnce(&ProjectionKey) -> Vec<LabResult>,
    {
        let due = match &self.pending {
            Some(p) => now >= p.due,
            None => false,
        };
        if !due {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let rows = match &self.state {
            RefreshState::Loading { key } => projector(key),
            _ => return false,
        };
        self.complete(pending.ticket, rows)
    }

    /// Apply `rows` for `ticket`. Ignored unless `ticket` is the latest
    /// request and that request is still loading.
    pub fn complete(&mut self, ticket: ProjectionTicket, rows: Vec<LabResult>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "stale projection discarded"
            );
            return false;
        }
        let key = match &self.state {
            RefreshState::Loading { key } => key.clone(),
            _ => return false,
        };
        debug!(generation = ticket.generation, rows = rows.len(), "projection committed");
        self.pending = None;
        self.state = RefreshState::Ready { key, rows };
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::testing::lab;

    const DELAY: Duration = Duration::from_millis(300);

    fn rows_for(key: &ProjectionKey) -> Vec<LabResult> {
        vec![lab("1", &key.patient_name, "Glucose", 90.0, "normal", &key.date)]
    }

    #[test]
    fn test_rows_appear_only_after_delay() {
        let t0 = Instant::now();
        let mut r = ProjectionRefresher::new(DELAY);
        assert_eq!(r.state(), &RefreshState::Idle);

        r.request(ProjectionKey::new("Ada Park", "2024-01-15"), t0);
        assert!(r.is_loading());
        assert_eq!(r.deadline(), Some(t0 + DELAY));

        assert!(!r.poll(t0 + Duration::from_millis(299), rows_for));
        assert!(r.rows().is_none());

        assert!(r.poll(t0 + DELAY, rows_for));
        assert_eq!(r.rows().map(|rows| rows.len()), Some(1));
        assert!(r.deadline().is_none());
    }

    #[test]
    fn test_empty_date_completes_immediately() {
        let mut r = ProjectionRefresher::new(DELAY);
        r.request(ProjectionKey::new("Ada Park", ""), Instant::now());
        assert!(!r.is_loading());
        assert_eq!(r.rows(), Some(&[][..]));
    }

    #[test]
    fn test_second_request_supersedes_first() {
        let t0 = Instant::now();
        let mut r = ProjectionRefresher::new(DELAY);

        let first = r.request(ProjectionKey::new("Ada Park", "2024-01-15"), t0);
        let second =
            r.request(ProjectionKey::new("Ben Cole", "2024-03-01"), t0 + Duration::from_millis(100));
        assert!(second.generation > first.generation);

        // The first result arriving late is dropped.
        assert!(!r.complete(first, rows_for(&ProjectionKey::new("Ada Park", "2024-01-15"))));
        assert!(r.is_loading());

        // The first deadline passing does not commit anything.
        assert!(!r.poll(t0 + DELAY, rows_for));
        assert!(r.poll(t0 + Duration::from_millis(400), rows_for));

        let rows = r.rows().unwrap();
        assert!(rows.iter().all(|row| row.patient == "Ben Cole"));
    }

    #[test]
    fn test_projector_not_called_before_due() {
        let t0 = Instant::now();
        let mut r = ProjectionRefresher::new(DELAY);
        r.request(ProjectionKey::new("Ada Park", "2024-01-15"), t0);
        let polled = r.poll(t0, |_| panic!("projector ran early"));
        assert!(!polled);
    }

    #[test]
    fn test_zero_delay_commits_on_first_poll() {
        let t0 = Instant::now();
        let mut r = ProjectionRefresher::new(Duration::ZERO);
        r.request(ProjectionKey::new("Ada Park", "2024-01-15"), t0);
        assert!(r.poll(t0, rows_for));
    }

    #[test]
    fn test_complete_twice_is_ignored() {
        let t0 = Instant::now();
        let mut r = ProjectionRefresher::new(DELAY);
        let ticket = r.request(ProjectionKey::new("Ada Park", "2024-01-15"), t0);
        assert!(r.complete(ticket, vec![]));
        assert!(!r.complete(ticket, rows_for(&ProjectionKey::new("Ada Park", "2024-01-15"))));
        assert_eq!(r.rows(), Some(&[][..]));
    }
}
