//! One-shot presence checks against the Zoom API.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::zoom::{Meeting, MeetingListType, ZoomApiClient, ZoomError, ZoomUser};

/// Timestamp format used by the Zoom API for meeting start times.
pub const ZOOM_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Result of a single presence check.
///
/// A failed request is a normal outcome here, not a fault: the monitor
/// treats it as inconclusive and keeps its previous state.
#[derive(Debug)]
pub enum QueryOutcome {
    MeetingFound(Meeting),
    NoneFound,
    QueryError(ZoomError),
}

/// A point-in-time "is this user in a live meeting" check.
#[async_trait]
pub trait PresenceQuery: Send + Sync {
    async fn check(&self, user: &ZoomUser) -> QueryOutcome;
}

pub struct ZoomPresenceQuery {
    client: ZoomApiClient,
}

impl ZoomPresenceQuery {
    pub fn new(client: ZoomApiClient) -> Self {
        Self { client }
    }

    /// Lists the user's scheduled meetings.
    ///
    /// Not part of the live-detection path; combine with
    /// [`is_in_scheduled_window`] to reconcile the calendar against ad-hoc
    /// meetings.
    pub async fn scheduled_meetings(&self, user: &ZoomUser) -> Result<Vec<Meeting>, ZoomError> {
        self.client
            .list_meetings(&user.id, MeetingListType::Scheduled)
            .await
    }
}

#[async_trait]
impl PresenceQuery for ZoomPresenceQuery {
    async fn check(&self, user: &ZoomUser) -> QueryOutcome {
        debug!("Requesting live meetings for {}", user.email);
        classify(
            self.client
                .list_meetings(&user.id, MeetingListType::Live)
                .await,
        )
    }
}

/// Folds a live-meeting list result into an outcome.
///
/// With more than one concurrent live meeting the first entry in Zoom's
/// returned order wins; the monitored account is expected to have at most
/// one, so no stable ordering is assumed beyond that.
fn classify(result: Result<Vec<Meeting>, ZoomError>) -> QueryOutcome {
    match result {
        Ok(meetings) => match meetings.into_iter().next() {
            Some(meeting) => {
                info!("Meeting found: {}", meeting.topic);
                QueryOutcome::MeetingFound(meeting)
            }
            None => QueryOutcome::NoneFound,
        },
        Err(err) => QueryOutcome::QueryError(err),
    }
}

/// Whether `now` falls inside the meeting's scheduled window
/// (start ≤ now ≤ start + duration).
///
/// Pure; a meeting without a parseable start time or without a duration
/// is never "in window".
pub fn is_in_scheduled_window(meeting: &Meeting, now: DateTime<Utc>) -> bool {
    let (Some(start_time), Some(duration)) = (&meeting.start_time, meeting.duration) else {
        return false;
    };
    let Ok(start) = NaiveDateTime::parse_from_str(start_time, ZOOM_TIME_FORMAT) else {
        return false;
    };
    let start = start.and_utc();
    let end = start + chrono::Duration::minutes(duration);
    start <= now && now <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(start_time: Option<&str>, duration: Option<i64>) -> Meeting {
        Meeting {
            id: 91836709,
            topic: "Weekly sync".to_string(),
            start_time: start_time.map(str::to_string),
            duration,
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, ZOOM_TIME_FORMAT)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_window_contains_midpoint() {
        let m = meeting(Some("2024-03-01T10:00:00Z"), Some(30));
        assert!(is_in_scheduled_window(&m, at("2024-03-01T10:15:00Z")));
    }

    #[test]
    fn test_window_excludes_after_end() {
        let m = meeting(Some("2024-03-01T10:00:00Z"), Some(30));
        assert!(!is_in_scheduled_window(&m, at("2024-03-01T10:31:00Z")));
    }

    #[test]
    fn test_window_excludes_before_start() {
        let m = meeting(Some("2024-03-01T10:00:00Z"), Some(30));
        assert!(!is_in_scheduled_window(&m, at("2024-03-01T09:59:00Z")));
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let m = meeting(Some("2024-03-01T10:00:00Z"), Some(30));
        assert!(is_in_scheduled_window(&m, at("2024-03-01T10:00:00Z")));
        assert!(is_in_scheduled_window(&m, at("2024-03-01T10:30:00Z")));
    }

    #[test]
    fn test_window_false_without_schedule_fields() {
        let now = at("2024-03-01T10:15:00Z");
        assert!(!is_in_scheduled_window(&meeting(None, Some(30)), now));
        assert!(!is_in_scheduled_window(
            &meeting(Some("2024-03-01T10:00:00Z"), None),
            now
        ));
        assert!(!is_in_scheduled_window(&meeting(Some("not a time"), Some(30)), now));
    }

    #[test]
    fn test_classify_takes_first_of_many() {
        let first = meeting(None, None);
        let mut second = meeting(None, None);
        second.id = 2;
        second.topic = "Other".to_string();

        match classify(Ok(vec![first, second])) {
            QueryOutcome::MeetingFound(m) => assert_eq!(m.id, 91836709),
            other => panic!("expected MeetingFound, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_empty_is_none_found() {
        assert!(matches!(classify(Ok(vec![])), QueryOutcome::NoneFound));
    }

    #[test]
    fn test_classify_error_is_query_error() {
        let err = ZoomError::UserNotFound("me@example.com".to_string());
        assert!(matches!(classify(Err(err)), QueryOutcome::QueryError(_)));
    }
}
