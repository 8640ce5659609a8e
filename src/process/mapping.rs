// src/process/mapping.rs

use tracing::debug;

use crate::process::extract::{extract_region, mask_personal_info, split_time_location};
use crate::process::normalize::NormalizedRow;
use crate::process::utils::{or_placeholder, remove_whitespace};
use crate::schema::types::{
    Record, CATEGORY, UNKNOWN_EVENT, UNKNOWN_HEADCOUNT, UNKNOWN_ORGANIZER, UNKNOWN_REGION,
    UNKNOWN_TIME_LOCATION,
};

/// Where each field sits in the 8-cell normalized row for one source width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub width: usize,
    pub organizer: usize,
    /// `None` when the layout has no event column; the organizer stands in.
    pub event: Option<usize>,
    pub time_location: usize,
    pub headcount: usize,
    pub event_type: usize,
    pub region: usize,
}

/// Keyed by source width. The 8-wide layout never reads cells 0 and 1.
pub const LAYOUTS: [ColumnLayout; 4] = [
    ColumnLayout {
        width: 5,
        organizer: 3,
        event: None,
        time_location: 4,
        headcount: 5,
        event_type: 6,
        region: 7,
    },
    ColumnLayout {
        width: 6,
        organizer: 2,
        event: Some(3),
        time_location: 4,
        headcount: 5,
        event_type: 6,
        region: 7,
    },
    // an 8-wide row whose sequence cell was stripped
    ColumnLayout {
        width: 7,
        organizer: 2,
        event: Some(3),
        time_location: 4,
        headcount: 5,
        event_type: 6,
        region: 7,
    },
    ColumnLayout {
        width: 8,
        organizer: 2,
        event: Some(3),
        time_location: 4,
        headcount: 5,
        event_type: 6,
        region: 7,
    },
];

pub fn layout_for(width: usize) -> Option<&'static ColumnLayout> {
    LAYOUTS.iter().find(|layout| layout.width == width)
}

/// Build a [`Record`] from a merged row, or `None` when no layout fits its width.
pub fn map_row(row: &NormalizedRow) -> Option<Record> {
    let Some(layout) = layout_for(row.source_width) else {
        debug!(width = row.source_width, "no column layout for row");
        return None;
    };
    let cell = |i: usize| row.cells[i].trim();

    let organizer = mask_personal_info(&or_placeholder(cell(layout.organizer), UNKNOWN_ORGANIZER));
    let event = match layout.event {
        Some(i) => or_placeholder(&remove_whitespace(cell(i)), UNKNOWN_EVENT),
        None => organizer.clone(),
    };
    let time_location = split_time_location(&or_placeholder(
        cell(layout.time_location),
        UNKNOWN_TIME_LOCATION,
    ));
    let region = extract_region(&or_placeholder(cell(layout.region), UNKNOWN_REGION));

    Some(Record {
        organizer,
        event,
        time: time_location.time,
        location: time_location.location,
        headcount: or_placeholder(cell(layout.headcount), UNKNOWN_HEADCOUNT),
        event_type: or_placeholder(cell(layout.event_type), CATEGORY),
        region,
    })
}
