use crate::{
    Res, info,
    types::{Summary, SummaryKind},
    warning,
};

use super::SummaryStore;

const ZERO_TASTE_LIMIT: f64 = 0.70;
const AVERAGE_LIMIT: f64 = 0.40;
const ALMOST_SNOB_LIMIT: f64 = 0.10;

/// Maps an obscurity score to its summary bucket.
///
/// | score         | bucket       |
/// |---------------|--------------|
/// | > 0.70        | `zeroTaste`  |
/// | 0.40 .. 0.70  | `average`    |
/// | 0.10 .. 0.40  | `almostSnob` |
/// | < 0.10        | `musicSnob`  |
///
/// All bounds are exclusive. A score sitting exactly on 0.10, 0.40 or 0.70
/// selects no bucket and yields `None`, as does NaN.
pub fn summary_kind_for(score: f64) -> Option<SummaryKind> {
    if score > ZERO_TASTE_LIMIT {
        Some(SummaryKind::ZeroTaste)
    } else if score > AVERAGE_LIMIT && score < ZERO_TASTE_LIMIT {
        Some(SummaryKind::Average)
    } else if score > ALMOST_SNOB_LIMIT && score < AVERAGE_LIMIT {
        Some(SummaryKind::AlmostSnob)
    } else if score < ALMOST_SNOB_LIMIT {
        Some(SummaryKind::MusicSnob)
    } else {
        None
    }
}

/// Looks up the summary record for `score`.
///
/// Lookup failures are logged and swallowed: the caller gets `None`, exactly as
/// for a score without a bucket or a bucket without a stored record.
pub async fn pick_summary(store: &dyn SummaryStore, score: f64) -> Option<Summary> {
    let kind = summary_kind_for(score)?;

    match store.find_summary(kind).await {
        Ok(Some(summary)) => Some(summary),
        Ok(None) => {
            warning!("No summary record named {}", kind);
            None
        }
        Err(e) => {
            warning!("Summary lookup for {} failed: {}", kind, e);
            None
        }
    }
}

/// The canned summary texts.
pub fn default_summaries() -> Vec<Summary> {
    SummaryKind::ALL
        .into_iter()
        .map(|kind| {
            let text = match kind {
                SummaryKind::ZeroTaste => {
                    "Your top tracks are everybody's top tracks. The charts thank you for your service."
                }
                SummaryKind::Average => {
                    "A healthy mix of hits and a few deep cuts. Nobody will judge your playlist at a party."
                }
                SummaryKind::AlmostSnob => {
                    "You know bands before they blow up, and you make sure people know that you knew."
                }
                SummaryKind::MusicSnob => {
                    "Most of your favourite artists have fewer listeners than your group chat."
                }
            };
            Summary::new(kind, text)
        })
        .collect()
}

/// Inserts the default summaries that are missing from `store`.
///
/// Existing records are left untouched so their ids, which users reference,
/// stay stable. Returns the number of records inserted.
pub async fn seed_summaries(store: &dyn SummaryStore) -> Res<usize> {
    let mut inserted = 0;
    for summary in default_summaries() {
        if store.find_summary(summary.name).await?.is_none() {
            info!("Seeding summary {}", summary.name);
            store.save_summary(summary).await?;
            inserted += 1;
        }
    }
    Ok(inserted)
}
