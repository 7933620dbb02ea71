use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Absolute point in time, normalized to the grid's reporting zone.
///
/// Wall-clock values of the reporting zone are encoded as UTC so that
/// day arithmetic never has to consult a time zone database.
pub type DateMarker = DateTime<Utc>;

#[must_use]
pub fn duration_to_millis(duration: Duration) -> i64 {
    duration.num_milliseconds()
}

/// Divides two durations exactly.
///
/// Returns `None` when `divisor` is zero or does not evenly divide `dividend`.
#[must_use]
pub fn whole_divide_durations(dividend: Duration, divisor: Duration) -> Option<i64> {
    let divisor_ms = duration_to_millis(divisor);
    if divisor_ms == 0 {
        return None;
    }
    let dividend_ms = duration_to_millis(dividend);
    if dividend_ms % divisor_ms != 0 {
        return None;
    }
    Some(dividend_ms / divisor_ms)
}

/// Fractional number of `divisor` spans in `dividend`.
#[must_use]
pub fn duration_ratio(dividend: Duration, divisor: Duration) -> f64 {
    let divisor_ms = duration_to_millis(divisor);
    if divisor_ms == 0 {
        return 0.0;
    }
    duration_to_millis(dividend) as f64 / divisor_ms as f64
}

#[must_use]
pub fn start_of_day(marker: DateMarker) -> DateMarker {
    marker.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Serde adapter storing a `Duration` as integer milliseconds.
pub mod duration_millis {
    use chrono::Duration;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Duration::try_milliseconds(millis)
            .ok_or_else(|| D::Error::custom(format!("duration of {millis} ms is out of range")))
    }
}

/// Same as [`duration_millis`] for optional durations.
pub mod duration_millis_opt {
    use chrono::Duration;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => serializer.serialize_some(&duration.num_milliseconds()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<i64>::deserialize(deserializer)?
            .map(|millis| {
                Duration::try_milliseconds(millis).ok_or_else(|| {
                    D::Error::custom(format!("duration of {millis} ms is out of range"))
                })
            })
            .transpose()
    }
}
