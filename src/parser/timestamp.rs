//! Timestamp normalization for engine-written ISO-8601 strings.
//!
//! The engine is not consistent about offsets: most timestamps carry a
//! literal `Z` or an explicit `+HH:MM`/`-HH:MM`, a few are naive. All of
//! them mean UTC. Anything unparseable is treated as "timestamp
//! unavailable" rather than an error, and the step is dropped from
//! ordered processing by the caller.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an ISO-8601 timestamp string into a UTC instant
///
/// **Public** - used by the flattener for step and run timestamps
///
/// Returns `None` on empty/absent input or any parse failure; this is the
/// only failure mode, it never errors.
pub fn parse_timestamp(ts_str: Option<&str>) -> Option<DateTime<Utc>> {
    let ts_str = ts_str?.trim();
    if ts_str.is_empty() {
        return None;
    }

    // RFC 3339 covers both `Z` and explicit offsets
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Naive datetime, interpreted as UTC
    NaiveDateTime::parse_from_str(ts_str, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Difference between two instants in seconds
///
/// **Public** - the single conversion point from instants to the f64
/// seconds used by all duration arithmetic and formatting.
pub fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let delta = end.signed_duration_since(start);
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        // Only reachable for spans beyond ~292k years
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_and_explicit_offset_are_equivalent() {
        let z = parse_timestamp(Some("2026-02-20T10:47:03.123456Z")).unwrap();
        let offset = parse_timestamp(Some("2026-02-20T10:47:03.123456+00:00")).unwrap();
        assert_eq!(z, offset);
    }

    #[test]
    fn test_nonzero_offset_normalizes_to_utc() {
        let local = parse_timestamp(Some("2026-02-20T12:00:00+02:00")).unwrap();
        let utc = parse_timestamp(Some("2026-02-20T10:00:00Z")).unwrap();
        assert_eq!(local, utc);
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        let naive = parse_timestamp(Some("2026-02-20T10:47:03.5")).unwrap();
        let explicit = parse_timestamp(Some("2026-02-20T10:47:03.5Z")).unwrap();
        assert_eq!(naive, explicit);
    }

    #[test]
    fn test_absent_and_malformed_yield_none() {
        assert!(parse_timestamp(None).is_none());
        assert!(parse_timestamp(Some("")).is_none());
        assert!(parse_timestamp(Some("not a timestamp")).is_none());
        assert!(parse_timestamp(Some("2026-13-40T99:99:99Z")).is_none());
    }

    #[test]
    fn test_seconds_between() {
        let a = parse_timestamp(Some("2026-02-20T10:00:00Z")).unwrap();
        let b = parse_timestamp(Some("2026-02-20T10:00:01.500Z")).unwrap();
        assert_eq!(seconds_between(a, b), 1.5);
        assert_eq!(seconds_between(b, a), -1.5);
    }
}
