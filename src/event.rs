use crate::time::TimeRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A pre-existing booking: a busy interval and the people sitting in it.
/// Events are caller-supplied and never mutated by a query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub when: TimeRange<u16>,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(name: &str, when: TimeRange<u16>, attendees: I) -> Event
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.to_string(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff at least one of `attendees` sits in this event
    pub fn includes_any(&self, attendees: &BTreeSet<String>) -> bool {
        attendees.iter().any(|a| self.attendees.contains(a))
    }

    /// True iff `attendee` sits in this event
    pub fn includes(&self, attendee: &str) -> bool {
        self.attendees.contains(attendee)
    }
}
