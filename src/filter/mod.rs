//! Composable predicates deciding whether a handler sees an event.
//!
//! Filters are pure and total: malformed payloads never get this far.
//! `and` / `or` evaluate left to right and stop as soon as the result is
//! known.

mod event_type;
mod resource;

pub use event_type::EventTypeFilter;
pub use resource::{IsFileFilter, MimeTypeFilter, NodeTypeFilter};

use crate::domain::EventRecord;

pub trait EventFilter: Send + Sync {
    fn matches(&self, event: &EventRecord) -> bool;

    fn and<F>(self, other: F) -> AndFilter<Self, F>
    where
        Self: Sized,
        F: EventFilter,
    {
        AndFilter {
            left: self,
            right: other,
        }
    }

    fn or<F>(self, other: F) -> OrFilter<Self, F>
    where
        Self: Sized,
        F: EventFilter,
    {
        OrFilter {
            left: self,
            right: other,
        }
    }

    fn negate(self) -> NotFilter<Self>
    where
        Self: Sized,
    {
        NotFilter { inner: self }
    }
}

impl EventFilter for Box<dyn EventFilter> {
    fn matches(&self, event: &EventRecord) -> bool {
        (**self).matches(event)
    }
}

#[derive(Debug, Clone)]
pub struct AndFilter<L, R> {
    left: L,
    right: R,
}

impl<L: EventFilter, R: EventFilter> EventFilter for AndFilter<L, R> {
    fn matches(&self, event: &EventRecord) -> bool {
        self.left.matches(event) && self.right.matches(event)
    }
}

#[derive(Debug, Clone)]
pub struct OrFilter<L, R> {
    left: L,
    right: R,
}

impl<L: EventFilter, R: EventFilter> EventFilter for OrFilter<L, R> {
    fn matches(&self, event: &EventRecord) -> bool {
        self.left.matches(event) || self.right.matches(event)
    }
}

#[derive(Debug, Clone)]
pub struct NotFilter<F> {
    inner: F,
}

impl<F: EventFilter> EventFilter for NotFilter<F> {
    fn matches(&self, event: &EventRecord) -> bool {
        !self.inner.matches(event)
    }
}

/// Matches every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyEventFilter;

impl EventFilter for AnyEventFilter {
    fn matches(&self, _event: &EventRecord) -> bool {
        true
    }
}
