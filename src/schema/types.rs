// src/schema/types.rs

use std::fmt;

pub const UNKNOWN_ORGANIZER: &str = "주최자불명";
pub const UNKNOWN_EVENT: &str = "행사명불명";
pub const UNKNOWN_TIME_LOCATION: &str = "시간장소불명";
pub const UNKNOWN_HEADCOUNT: &str = "인원불명";
pub const UNKNOWN_REGION: &str = "관할불명";
pub const UNKNOWN_LOCATION: &str = "장소불명";
pub const NO_TIME_INFO: &str = "시간정보없음";

/// Fixed category written into every formatted line.
pub const CATEGORY: &str = "집회";

/// One assembly/protest entry, built from a single merged table row.
///
/// Every field is non-empty: a value missing from the source row is replaced
/// by one of the placeholders above before the record is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub organizer: String,
    pub event: String,
    pub time: String,
    pub location: String,
    pub headcount: String,
    /// Raw event-type cell. Kept for logging; the line always says [`CATEGORY`].
    pub event_type: String,
    pub region: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-{}/{}/{}/{}/{}/{}/{}",
            self.organizer,
            self.event,
            self.time,
            self.location,
            self.headcount,
            CATEGORY,
            self.region
        )
    }
}
