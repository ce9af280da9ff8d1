use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Upper bound on optional attendees per request. The optimizer
/// enumerates subsets of the optional set, so the search costs
/// O(2^m) in the optional-attendee count; past this cap we refuse
/// rather than grind.
pub const MAX_OPTIONAL_ATTENDEES: usize = 20;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported length of input. Expected {expected}, got {found}")]
    UnsupportedLength { expected: usize, found: usize },
    #[error("Attendee ({name}) is listed as both required and optional")]
    OverlappingAttendee { name: String },
}

/// The query: who must be free, who we would like to be free, and for
/// how long. Attendee sets are ordered so that subset enumeration in
/// the optimizer is deterministic for a fixed input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingRequest {
    #[serde(rename = "requiredAttendees")]
    pub required_attendees: BTreeSet<String>,
    #[serde(rename = "optionalAttendees")]
    pub optional_attendees: BTreeSet<String>,
    pub duration: u16,
}

impl Default for MeetingRequest {
    fn default() -> Self {
        MeetingRequest {
            required_attendees: BTreeSet::new(),
            optional_attendees: BTreeSet::new(),
            duration: 0,
        }
    }
}

impl MeetingRequest {
    pub fn new<I, J, S>(required_attendees: I, optional_attendees: J, duration: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            required_attendees: required_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: optional_attendees.into_iter().map(Into::into).collect(),
            duration,
        }
    }

    /// Fail-fast check for input the query itself will not police:
    /// an attendee in both sets, or an optional set large enough to
    /// make the subset search unreasonable.
    ///
    /// [`query`](crate::query::query) assumes these preconditions hold;
    /// with an attendee in both sets it treats them as required only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.optional_attendees.len() > MAX_OPTIONAL_ATTENDEES {
            return Err(ValidationError::UnsupportedLength {
                expected: MAX_OPTIONAL_ATTENDEES,
                found: self.optional_attendees.len(),
            });
        }

        if let Some(name) = self
            .required_attendees
            .intersection(&self.optional_attendees)
            .next()
        {
            return Err(ValidationError::OverlappingAttendee { name: name.clone() });
        }

        Ok(())
    }
}
