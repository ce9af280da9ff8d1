use itertools::Itertools;
use num::Integer;
use serde::{Deserialize, Serialize};

/// Number of minutes in the single day being searched
pub const MINUTES_IN_DAY: u16 = 1440;

/// Half-open [start, end) time range
/// <N>: Any integer type
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeRange<N>(pub N, pub N)
where
    N: Integer + Copy;

impl<N> TimeRange<N>
where
    N: Integer + Copy,
{
    /// Construct a new Time Range
    /// Range is half-open on [start, end)
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    ///
    /// assert_eq!(test.0, 0);
    /// assert_eq!(test.1, 100);
    /// ```
    pub fn new(start: N, end: N) -> TimeRange<N> {
        TimeRange(start, end)
    }

    /// Convenience function for readability
    /// Returns the start of the TimeRange
    pub fn start(self) -> N {
        self.0
    }

    /// Convenience function for readability
    /// Returns the end of the TimeRange
    pub fn end(self) -> N {
        self.1
    }

    /// Minutes spanned by this range
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// assert_eq!(TimeRange::new(30, 90).duration(), 60);
    /// assert_eq!(TimeRange::new(5, 5).duration(), 0);
    /// ```
    pub fn duration(self) -> N {
        self.1 - self.0
    }

    /// True iff `other` lies entirely within self
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let day = TimeRange::new(0, 100);
    /// assert!(day.contains(TimeRange::new(0, 100)));
    /// assert!(day.contains(TimeRange::new(20, 30)));
    /// assert!(!day.contains(TimeRange::new(90, 101)));
    /// ```
    pub fn contains(self, other: TimeRange<N>) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    /// True iff self and `other` share at least one minute.
    /// Touching endpoints do not overlap: [0, 5) and [5, 9) are disjoint.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let a = TimeRange::new(0, 5);
    /// assert!(a.overlaps(TimeRange::new(4, 9)));
    /// assert!(!a.overlaps(TimeRange::new(5, 9)));
    /// ```
    pub fn overlaps(self, other: TimeRange<N>) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }
}

impl TimeRange<u16> {
    /// The full search domain: every minute of the day
    pub fn whole_day() -> TimeRange<u16> {
        TimeRange(0, MINUTES_IN_DAY)
    }
}

pub trait Subtract<N>
where
    N: Integer + Copy,
{
    fn subtract(self, busy: TimeRange<N>) -> Vec<TimeRange<N>>;
}

impl<'a, T, N> Subtract<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Integer + Copy,
{
    /// Self is a collection of free times; removes the portion of each
    /// free time covered by `busy`, splitting into up to two pieces.
    /// Empty pieces are never emitted. Output order is not guaranteed;
    /// callers re-sort via `Normalize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminfinder::time::{Subtract, TimeRange};
    ///
    /// let free_times = vec![TimeRange::new(0, 10)];
    ///
    /// assert_eq!(
    ///     free_times.iter().subtract(TimeRange::new(4, 6)),
    ///     vec![TimeRange::new(0, 4), TimeRange::new(6, 10)]
    /// );
    ///
    /// assert_eq!(free_times.iter().subtract(TimeRange::new(0, 10)), vec![]);
    /// ```
    fn subtract(self, busy: TimeRange<N>) -> Vec<TimeRange<N>> {
        self.flat_map(|&free| {
            if !free.overlaps(busy) {
                return vec![free];
            }

            let mut pieces = Vec::with_capacity(2);
            if free.start() < busy.start() {
                pieces.push(TimeRange(free.start(), busy.start()));
            }
            if busy.end() < free.end() {
                pieces.push(TimeRange(busy.end(), free.end()));
            }
            pieces
        })
        .collect_vec()
    }
}

pub trait Intersect<N>
where
    N: Integer + Copy,
{
    fn intersect(self, other: &[TimeRange<N>]) -> Vec<TimeRange<N>>;
}

impl<'a, T, N> Intersect<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Integer + Copy,
{
    /// Emits the overlap of every pair of ranges between self and
    /// `other`. With each side non-overlapping within itself, the
    /// result is the set intersection of the two collections.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::{Intersect, TimeRange};
    ///
    /// let mine = vec![TimeRange::new(0, 8), TimeRange::new(12, 20)];
    /// let yours = vec![TimeRange::new(5, 14)];
    ///
    /// assert_eq!(
    ///     mine.iter().intersect(&yours),
    ///     vec![TimeRange::new(5, 8), TimeRange::new(12, 14)]
    /// );
    /// ```
    fn intersect(self, other: &[TimeRange<N>]) -> Vec<TimeRange<N>> {
        self.flat_map(|&time| {
            other
                .iter()
                .filter(move |o| time.overlaps(**o))
                .map(move |&o| TimeRange(time.start().max(o.start()), time.end().min(o.end())))
        })
        .collect_vec()
    }
}

pub trait Normalize<N>
where
    N: Integer + Copy,
{
    fn normalize(self, min_duration: N) -> Vec<TimeRange<N>>;
}

impl<'a, T, N> Normalize<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Integer + Copy,
{
    /// Drops ranges too short to hold `min_duration` minutes, then
    /// sorts ascending by start (ties by end) for deterministic output.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::{Normalize, TimeRange};
    ///
    /// let times = vec![
    ///     TimeRange::new(20, 30),
    ///     TimeRange::new(0, 5),
    ///     TimeRange::new(40, 41),
    /// ];
    ///
    /// assert_eq!(
    ///     times.iter().normalize(5),
    ///     vec![TimeRange::new(0, 5), TimeRange::new(20, 30)]
    /// );
    /// ```
    fn normalize(self, min_duration: N) -> Vec<TimeRange<N>> {
        self.filter(|time| time.duration() >= min_duration)
            .copied()
            .sorted_unstable()
            .collect_vec()
    }
}
