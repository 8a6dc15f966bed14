//! Controllers
//!
//! Listing, form and delete flows as plain state machines. Each async flow is
//! split into `begin_*` (synchronous transition, returns a request carrying a
//! [`Ticket`]) and `finish_*` (applies the response if the ticket is still
//! current), so a reactive UI can update state on both sides of the await and
//! drop responses that arrive after a dialog closed or a newer load started.

mod delete;
mod form;
mod listing;

#[cfg(test)]
mod scenarios;

pub use delete::{DeleteController, DeleteOutcome, DeleteRequest};
pub use form::{FormController, FormMode, FormPhase, Submission, SubmitOutcome, SubmitRejected};
pub use listing::{ListingController, LoadOutcome, LoadRequest};

/// Identifies one in-flight request of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Issues tickets; only the most recent one is current
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TicketCounter {
    latest: u64,
}

impl TicketCounter {
    pub(crate) fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Makes every outstanding ticket stale
    pub(crate) fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub(crate) fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
