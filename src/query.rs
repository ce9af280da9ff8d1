use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time::{Intersect, Normalize, Subtract, TimeRange};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Finds every window of the day in which the requested meeting can
/// happen: all required attendees free, and as many optional attendees
/// present as the day allows without shrinking a window below the
/// requested duration.
///
/// The result is sorted ascending by start, pairwise non-overlapping,
/// and every range holds at least `request.duration` minutes. An empty
/// result means no window exists. Degenerate input (a duration longer
/// than the day, empty attendee sets) yields an empty or whole-day
/// result; this function never fails.
///
/// # Examples
/// ```
/// use terminfinder::event::Event;
/// use terminfinder::query::query;
/// use terminfinder::request::MeetingRequest;
/// use terminfinder::time::TimeRange;
///
/// let events = vec![Event::new(
///     "Standup",
///     TimeRange::new(510, 540),
///     vec!["Alice"],
/// )];
/// let request = MeetingRequest::new(vec!["Alice"], vec![], 30);
///
/// assert_eq!(
///     query(&events, &request),
///     vec![TimeRange::new(0, 510), TimeRange::new(540, 1440)]
/// );
/// ```
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange<u16>> {
    let required_free = free_times(events, request.duration, |event| {
        event.includes_any(&request.required_attendees)
    });

    if request.optional_attendees.is_empty() {
        return required_free;
    }

    let optional_free: BTreeMap<&str, Vec<TimeRange<u16>>> = request
        .optional_attendees
        .iter()
        .map(|name| {
            (
                name.as_str(),
                free_times(events, request.duration, |event| event.includes(name)),
            )
        })
        .collect();

    let attendees = request
        .optional_attendees
        .iter()
        .map(String::as_str)
        .collect_vec();

    // Largest subsets first; the first subset with room wins.
    for size in (1..=attendees.len()).rev() {
        for subset in attendees.iter().copied().combinations(size) {
            let combined = subset
                .iter()
                .fold(vec![TimeRange::whole_day()], |combined, name| {
                    combined.iter().intersect(&optional_free[*name])
                });

            let slots = combined
                .iter()
                .intersect(&required_free)
                .iter()
                .normalize(request.duration);

            trace!("subset {:?} leaves {} slot(s)", subset, slots.len());

            if !slots.is_empty() {
                debug!(
                    "{} of {} optional attendees can make it",
                    size,
                    attendees.len()
                );
                return slots;
            }
        }
    }

    // No optional attendee fits anywhere. With required attendees the
    // meeting goes ahead without the optional ones; with nobody
    // required there is no meeting to hold.
    if request.required_attendees.is_empty() {
        vec![]
    } else {
        required_free
    }
}

/// Free time of one attendee group: the whole day minus every event
/// selected by `relevant`, trimmed and sorted for the given duration.
fn free_times<F>(events: &[Event], duration: u16, mut relevant: F) -> Vec<TimeRange<u16>>
where
    F: FnMut(&Event) -> bool,
{
    events
        .iter()
        .filter(|&event| relevant(event))
        .fold(vec![TimeRange::whole_day()], |free, event| {
            free.iter().subtract(event.when)
        })
        .iter()
        .normalize(duration)
}
