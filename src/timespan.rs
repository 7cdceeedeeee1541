//! Time ranges with overlap and containment checks.
//!
//! A [`TimeRange`] is a validated pair of instants with `start <= end`
//! (equal is allowed, see [`TimeRange::is_instant`]). Containment is
//! inclusive at both bounds; overlap is strict, so two ranges that merely
//! touch at an endpoint do not overlap.

use std::error::Error;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

// =============================================================================
// Error Types
// =============================================================================

/// Errors produced when constructing a [`TimeRange`].
#[derive(Debug)]
pub enum TimeRangeError {
    /// The end instant precedes the start instant.
    Inverted,

    /// A timestamp string did not match the supplied format.
    Parse(chrono::ParseError),

    /// The parsed wall-clock time does not exist (or is ambiguous) in the
    /// requested time zone, e.g. inside a DST transition.
    InvalidLocalTime,
}

impl fmt::Display for TimeRangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted => write!(formatter, "time range end precedes its start"),
            Self::Parse(error) => write!(formatter, "time range parse failed: {error}"),
            Self::InvalidLocalTime => {
                write!(formatter, "local time is invalid in the requested zone")
            }
        }
    }
}

impl Error for TimeRangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Inverted | Self::InvalidLocalTime => None,
        }
    }
}

// =============================================================================
// TimeRange
// =============================================================================

/// A validated time range: `start <= end`, both inclusive for containment.
///
/// # Examples
///
/// ```rust
/// use seqkit::timespan::TimeRange;
///
/// let day = TimeRange::parse(
///     "2024-05-01 00:00:00",
///     "2024-05-02 00:00:00",
///     "%Y-%m-%d %H:%M:%S",
/// )?;
/// let evening = TimeRange::parse(
///     "2024-05-01 18:00:00",
///     "2024-05-01 22:00:00",
///     "%Y-%m-%d %H:%M:%S",
/// )?;
/// assert!(day.overlaps(&evening));
/// # Ok::<(), seqkit::timespan::TimeRangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    #[cfg_attr(feature = "serde", serde(rename = "start_time"))]
    start: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(rename = "end_time"))]
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range from two instants.
    ///
    /// # Errors
    ///
    /// [`TimeRangeError::Inverted`] if `end` precedes `start`. Equal instants
    /// are allowed.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if end < start {
            return Err(TimeRangeError::Inverted);
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two timestamp strings in the given `chrono`
    /// format, interpreted as UTC.
    ///
    /// # Errors
    ///
    /// [`TimeRangeError::Parse`] if either string does not match the format,
    /// [`TimeRangeError::Inverted`] if the parsed end precedes the start.
    pub fn parse(start: &str, end: &str, format: &str) -> Result<Self, TimeRangeError> {
        Self::parse_in_zone(start, end, format, &Utc)
    }

    /// Parses a range from two timestamp strings interpreted as wall-clock
    /// time in `zone`.
    ///
    /// # Errors
    ///
    /// As [`TimeRange::parse`], plus [`TimeRangeError::InvalidLocalTime`] if
    /// a parsed wall-clock time does not exist (or is ambiguous) in `zone`.
    pub fn parse_in_zone<Tz: TimeZone>(
        start: &str,
        end: &str,
        format: &str,
        zone: &Tz,
    ) -> Result<Self, TimeRangeError> {
        Self::new(
            parse_instant(start, format, zone)?,
            parse_instant(end, format, zone)?,
        )
    }

    /// The inclusive start of the range.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The inclusive end of the range.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Reports whether the range is a single instant (`start == end`).
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Reports whether `instant` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Reports whether the two ranges overlap.
    ///
    /// Overlap is strict: ranges that only touch at an endpoint (one range's
    /// end equals the other's start) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        other.start < self.end && self.start < other.end
    }
}

fn parse_instant<Tz: TimeZone>(
    value: &str,
    format: &str,
    zone: &Tz,
) -> Result<DateTime<Utc>, TimeRangeError> {
    let naive = NaiveDateTime::parse_from_str(value, format).map_err(TimeRangeError::Parse)?;
    zone.from_local_datetime(&naive)
        .single()
        .map(|instant| instant.with_timezone(&Utc))
        .ok_or(TimeRangeError::InvalidLocalTime)
}
