use serde::Deserialize;

/// A Zoom account user, as returned by the user directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoomUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// One meeting snapshot from a list call.
///
/// Ephemeral: lives for a single poll cycle, never persisted. `start_time`
/// and `duration` are only populated for scheduled meetings; live ad-hoc
/// meetings may omit both.
#[derive(Debug, Clone, Deserialize)]
pub struct Meeting {
    pub id: i64,
    #[serde(default)]
    pub topic: String,
    /// Scheduled start, `%Y-%m-%dT%H:%M:%SZ` (UTC).
    #[serde(default)]
    pub start_time: Option<String>,
    /// Scheduled duration in minutes.
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<ZoomUser>,
}

#[derive(Debug, Deserialize)]
pub struct MeetingListResponse {
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

/// Which meeting list to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingListType {
    /// Meetings currently in progress.
    Live,
    /// Meetings on the calendar, whether or not they have started.
    Scheduled,
}

impl MeetingListType {
    pub fn as_query_param(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Scheduled => "scheduled",
        }
    }
}
