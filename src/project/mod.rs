//! Read-only projections over the record list.
//!
//! Each view is computed fresh from the full list plus the classifier's
//! output per record; none of them mutate or reorder the source.

mod model;

pub use model::{RecordDetail, Shortlist, ShortlistCard, Statistics, TableRow};

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu::collator::{Collator, CollatorOptions};
use icu::locid::locale;

use crate::classify::{Category, RecommendationDisplay, classify};
use crate::feed::StockRecord;
use crate::format;

/// Size of the featured shortlist slice.
const FEATURED_LIMIT: usize = 3;
/// Size of the "other picks" slice that follows it.
const OTHER_LIMIT: usize = 12;
/// Minimum clamped score for a record to qualify for the shortlist.
const SHORTLIST_FLOOR: f64 = 0.2;

const FEATURED_REASON_CHARS: usize = 60;
const OTHER_REASON_CHARS: usize = 110;
const NO_REASON: &str = "推奨理由の情報はありません。";

/// Count the feed and its buy/hold/sell buckets.
///
/// The classifier's category is the source of truth, not the raw field;
/// unknown records count toward `total` only.
#[must_use]
pub fn statistics(records: &[StockRecord]) -> Statistics {
    let mut stats = Statistics {
        total: records.len() as u64,
        ..Statistics::default()
    };
    for record in records {
        match classify(record.recommendation).category {
            Category::Buy => stats.buy += 1,
            Category::Hold => stats.hold += 1,
            Category::Sell => stats.sell += 1,
            Category::Unknown => {}
        }
    }
    stats
}

/// Build the curated shortlist: records scoring at least 0.2, best first,
/// split into a featured slice of 3 and an "other" slice of 12. Anything
/// past position 15 is dropped from this view entirely.
#[must_use]
pub fn shortlist(records: &[StockRecord]) -> Shortlist {
    let mut candidates: Vec<(usize, &StockRecord, RecommendationDisplay)> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let info = classify(record.recommendation);
            match info.score {
                Some(score) if score >= SHORTLIST_FLOOR => Some((index, record, info)),
                _ => None,
            }
        })
        .collect();

    // Highest score first; feed order breaks ties so equal-score records
    // never swap between renders.
    candidates.sort_by(|a, b| {
        b.2.score
            .partial_cmp(&a.2.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut featured = Vec::new();
    let mut other = Vec::new();
    for (position, (index, record, info)) in candidates.into_iter().enumerate() {
        if position < FEATURED_LIMIT {
            featured.push(card(index, record, &info, FEATURED_REASON_CHARS));
        } else if position < FEATURED_LIMIT + OTHER_LIMIT {
            other.push(card(index, record, &info, OTHER_REASON_CHARS));
        } else {
            break;
        }
    }

    Shortlist { featured, other }
}

/// Build the full table: every record, sorted by display name with Japanese
/// collation. Records without a name sort as the empty string.
#[must_use]
pub fn table(records: &[StockRecord]) -> Vec<TableRow> {
    let collator = ja_collator();

    let mut indexed: Vec<(usize, &StockRecord)> = records.iter().enumerate().collect();
    indexed.sort_by(|a, b| {
        let name_a = a.1.name.as_deref().unwrap_or("");
        let name_b = b.1.name.as_deref().unwrap_or("");
        collator.compare(name_a, name_b)
    });

    indexed
        .into_iter()
        .map(|(index, record)| {
            let info = classify(record.recommendation);
            TableRow {
                record_index: index,
                name: display_name(record),
                code: display_code(record),
                price: format::price_text(record.current_price),
                recommendation: info.text(),
                style_hint: info.style_hint,
            }
        })
        .collect()
}

/// Content of the detail modal for one record: the table-row fields plus the
/// full, untruncated reason text.
#[must_use]
pub fn detail(record: &StockRecord) -> RecordDetail {
    let info = classify(record.recommendation);
    RecordDetail {
        name: display_name(record),
        code: display_code(record),
        price: format::price_text(record.current_price),
        recommendation: info.text(),
        reason: record
            .reasons
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NO_REASON.to_string()),
    }
}

fn card(
    index: usize,
    record: &StockRecord,
    info: &RecommendationDisplay,
    reason_chars: usize,
) -> ShortlistCard {
    let reason_source = record
        .reasons
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_REASON);

    ShortlistCard {
        record_index: index,
        name: display_name(record),
        code: display_code(record),
        score_line: info.text(),
        reason: format::truncate(reason_source, reason_chars),
    }
}

fn display_name(record: &StockRecord) -> String {
    record
        .name
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

fn display_code(record: &StockRecord) -> String {
    record
        .code
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

fn ja_collator() -> &'static Collator {
    static JA: OnceLock<Collator> = OnceLock::new();
    JA.get_or_init(|| {
        // Compiled collation data ships with the icu crate; ja is always there.
        Collator::try_new(&locale!("ja").into(), CollatorOptions::new())
            .expect("ja collation data")
    })
}
