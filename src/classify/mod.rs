// src/classify/mod.rs

use std::fmt;

use crate::schema::Record;

/// Region fragments for group A, checked first.
pub static MAYEONGGWAN_REGIONS: &[&str] = &[
    "마포", "서대문", "은평", "서부", "영등포", "구로", "강서", "양천", "관악", "방배", "금천", "동작",
];

/// Region fragments for group B.
pub static GANGGWANG_REGIONS: &[&str] = &["강남", "서초", "수서", "송파", "성동", "강동", "광진"];

/// The three distribution groups. The labels are internal names, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jurisdiction {
    MaYeongGwan,
    GangGwang,
    JungJong,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 3] = [
        Jurisdiction::MaYeongGwan,
        Jurisdiction::GangGwang,
        Jurisdiction::JungJong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Jurisdiction::MaYeongGwan => "마영관",
            Jurisdiction::GangGwang => "강광",
            Jurisdiction::JungJong => "중종",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Substring test against the fixed lists; anything unmatched is `JungJong`.
pub fn classify(region: &str) -> Jurisdiction {
    if MAYEONGGWAN_REGIONS.iter().any(|r| region.contains(r)) {
        Jurisdiction::MaYeongGwan
    } else if GANGGWANG_REGIONS.iter().any(|r| region.contains(r)) {
        Jurisdiction::GangGwang
    } else {
        Jurisdiction::JungJong
    }
}

/// Formatted lines split by jurisdiction, each keeping document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub mayeonggwan: Vec<String>,
    pub ganggwang: Vec<String>,
    pub jungjong: Vec<String>,
}

impl Buckets {
    pub fn get(&self, jurisdiction: Jurisdiction) -> &[String] {
        match jurisdiction {
            Jurisdiction::MaYeongGwan => &self.mayeonggwan,
            Jurisdiction::GangGwang => &self.ganggwang,
            Jurisdiction::JungJong => &self.jungjong,
        }
    }

    fn get_mut(&mut self, jurisdiction: Jurisdiction) -> &mut Vec<String> {
        match jurisdiction {
            Jurisdiction::MaYeongGwan => &mut self.mayeonggwan,
            Jurisdiction::GangGwang => &mut self.ganggwang,
            Jurisdiction::JungJong => &mut self.jungjong,
        }
    }

    pub fn len(&self) -> usize {
        Jurisdiction::ALL.iter().map(|&j| self.get(j).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition(records: &[Record]) -> Buckets {
    records.iter().fold(Buckets::default(), |mut buckets, record| {
        buckets
            .get_mut(classify(&record.region))
            .push(record.to_string());
        buckets
    })
}
