// src/process/extract.rs
//
// Regex-driven field extractors applied by the field mapper.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::process::utils::{remove_whitespace, strip_tags};
use crate::schema::types::{NO_TIME_INFO, UNKNOWN_LOCATION, UNKNOWN_REGION};

const TILDES: [char; 4] = ['~', '～', '〜', '∼'];

/// A named time-range matcher; `TIME_MATCHERS` is tried in order.
struct TimeMatcher {
    name: &'static str,
    re: Regex,
}

fn matcher(name: &'static str, pattern: &str) -> TimeMatcher {
    TimeMatcher {
        name,
        re: Regex::new(pattern).unwrap(),
    }
}

/// Tried in order, first match wins. `multi_range` must precede `plain`;
/// `open_end` matches a prefix of every other form and stays last.
static TIME_MATCHERS: Lazy<Vec<TimeMatcher>> = Lazy::new(|| {
    vec![
        matcher(
            "multi_range",
            r"\d{1,2}:\d{2}\s*[~～〜∼]\s*\d{1,2}:\d{2}(?:\s*[,/]\s*\d{1,2}:\d{2}\s*[~～〜∼]\s*\d{1,2}:\d{2})+",
        ),
        matcher("plain", r"\d{1,2}:\d{2}\s*~\s*\d{1,2}:\d{2}"),
        matcher("full_width", r"\d{1,2}:\d{2}\s*[～〜∼]\s*\d{1,2}:\d{2}"),
        matcher(
            "next_day",
            r"\d{1,2}:\d{2}\s*[~～〜∼]\s*(?:익일|다음날)\s*\d{1,2}:\d{2}",
        ),
        matcher("open_end", r"\d{1,2}:\d{2}\s*[~～〜∼](?:\s*미정)?"),
    ]
});

static REGION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([가-힣\s]+)\s*<[^>]*>").unwrap());
static SURNAME_00_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([가-힣])00").unwrap());
static INDIVIDUAL_00_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"개인\(([가-힣])00\)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLocation {
    pub time: String,
    pub location: String,
}

/// Split a combined "time + place" cell.
pub fn split_time_location(field: &str) -> TimeLocation {
    let found = if field.contains(&TILDES[..]) {
        TIME_MATCHERS.iter().find_map(|m| {
            m.re.find(field).map(|hit| {
                tracing::trace!(matcher = m.name, hit = hit.as_str(), "time range");
                hit
            })
        })
    } else {
        None
    };

    let (time, rest) = match found {
        Some(hit) => (
            hit.as_str().trim().to_string(),
            format!("{}{}", &field[..hit.start()], &field[hit.end()..]),
        ),
        None => (NO_TIME_INFO.to_string(), field.to_string()),
    };

    let location = strip_tags(&rest);
    TimeLocation {
        time,
        location: if location.is_empty() {
            UNKNOWN_LOCATION.to_string()
        } else {
            location
        },
    }
}

/// Police-station style region from a cell like `서울 종로경찰서 <관할>`.
/// Never returns an empty string.
pub fn extract_region(text: &str) -> String {
    if let Some(caps) = REGION_RE.captures(text) {
        let region = remove_whitespace(&caps[1]);
        if !region.is_empty() {
            return region;
        }
    }
    text.split_whitespace()
        .last()
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_REGION.to_string())
}

/// Mask `김00` style names as `김◯◯`, including inside `개인(...)`.
pub fn mask_personal_info(text: &str) -> String {
    let masked = SURNAME_00_RE.replace_all(text, "${1}◯◯");
    INDIVIDUAL_00_RE
        .replace_all(&masked, "개인(${1}◯◯)")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(field: &str) -> (String, String) {
        let tl = split_time_location(field);
        (tl.time, tl.location)
    }

    #[test]
    fn plain_range_is_split_from_place() {
        assert_eq!(
            split("17:00~22:00 광화문"),
            ("17:00~22:00".into(), "광화문".into())
        );
        assert_eq!(
            split("광화문 <신고> 9:30 ~ 11:00"),
            ("9:30 ~ 11:00".into(), "광화문".into())
        );
    }

    #[test]
    fn full_width_and_next_day_ranges() {
        assert_eq!(
            split("18:00～21:00 시청광장"),
            ("18:00～21:00".into(), "시청광장".into())
        );
        assert_eq!(
            split("22:00~익일 02:00 여의도공원"),
            ("22:00~익일 02:00".into(), "여의도공원".into())
        );
    }

    #[test]
    fn multi_range_beats_plain() {
        assert_eq!(
            split("09:00~12:00, 14:00~18:00 국회앞"),
            ("09:00~12:00, 14:00~18:00".into(), "국회앞".into())
        );
    }

    #[test]
    fn open_end_range() {
        assert_eq!(split("10:00~미정 서울역"), ("10:00~미정".into(), "서울역".into()));
        assert_eq!(split("10:00~ 서울역"), ("10:00~".into(), "서울역".into()));
    }

    #[test]
    fn separator_without_time_keeps_whole_field() {
        assert_eq!(
            split("종일~ 광화문 <행진>"),
            (NO_TIME_INFO.into(), "종일~ 광화문".into())
        );
    }

    #[test]
    fn no_separator_means_no_time() {
        assert_eq!(split("17:00 광화문"), (NO_TIME_INFO.into(), "17:00 광화문".into()));
    }

    #[test]
    fn empty_location_gets_placeholder() {
        assert_eq!(split("17:00~22:00"), ("17:00~22:00".into(), UNKNOWN_LOCATION.into()));
        assert_eq!(split(""), (NO_TIME_INFO.into(), UNKNOWN_LOCATION.into()));
    }

    #[test]
    fn region_from_annotated_run() {
        assert_eq!(extract_region("서울 종로경찰서 <관할>"), "서울종로경찰서");
        assert_eq!(extract_region("1. 마포 경찰서<주관>"), "마포경찰서");
    }

    #[test]
    fn region_falls_back_to_last_token() {
        assert_eq!(extract_region("서울 강남경찰서"), "강남경찰서");
        assert_eq!(extract_region("ABC <x>"), "<x>");
    }

    #[test]
    fn region_is_total() {
        for input in ["", "   ", "<>", "\t\n", "서울", "<관할>", " <a> "] {
            assert!(!extract_region(input).is_empty(), "empty region for {input:?}");
        }
        assert_eq!(extract_region(""), UNKNOWN_REGION);
        assert_eq!(extract_region("  "), UNKNOWN_REGION);
    }

    #[test]
    fn masks_surname_and_individual_forms() {
        assert_eq!(mask_personal_info("김00"), "김◯◯");
        assert_eq!(mask_personal_info("개인(이00)"), "개인(이◯◯)");
        assert_eq!(mask_personal_info("민주노총 외 박00, 최00"), "민주노총 외 박◯◯, 최◯◯");
        assert_eq!(mask_personal_info("2000명"), "2000명");
    }

    #[test]
    fn masking_is_idempotent() {
        for input in ["김00", "개인(이00)", "홍길동", "정000", "A00"] {
            let once = mask_personal_info(input);
            assert_eq!(mask_personal_info(&once), once);
        }
    }
}
