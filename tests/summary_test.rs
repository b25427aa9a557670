use async_trait::async_trait;
use obscurify::{
    Error, Res,
    management::{
        MemoryStore, SummaryStore, default_summaries, pick_summary, seed_summaries,
        summary_kind_for,
    },
    types::{Summary, SummaryKind},
};
use uuid::Uuid;

// Summary store whose every call fails
struct BrokenStore;

#[async_trait]
impl SummaryStore for BrokenStore {
    async fn find_summary(&self, _name: SummaryKind) -> Res<Option<Summary>> {
        Err(Error::Store("connection refused".to_string()))
    }

    async fn find_summary_by_id(&self, _id: Uuid) -> Res<Option<Summary>> {
        Err(Error::Store("connection refused".to_string()))
    }

    async fn save_summary(&self, _summary: Summary) -> Res<Summary> {
        Err(Error::Store("connection refused".to_string()))
    }

    async fn summaries(&self) -> Res<Vec<Summary>> {
        Err(Error::Store("connection refused".to_string()))
    }
}

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::default();
    seed_summaries(&store).await.unwrap();
    store
}

#[test]
fn test_summary_kind_for_buckets() {
    assert_eq!(summary_kind_for(1.0), Some(SummaryKind::ZeroTaste));
    assert_eq!(summary_kind_for(0.75), Some(SummaryKind::ZeroTaste));
    assert_eq!(summary_kind_for(0.71), Some(SummaryKind::ZeroTaste));
    assert_eq!(summary_kind_for(0.69), Some(SummaryKind::Average));
    assert_eq!(summary_kind_for(0.41), Some(SummaryKind::Average));
    assert_eq!(summary_kind_for(0.39), Some(SummaryKind::AlmostSnob));
    assert_eq!(summary_kind_for(0.11), Some(SummaryKind::AlmostSnob));
    assert_eq!(summary_kind_for(0.09), Some(SummaryKind::MusicSnob));
    assert_eq!(summary_kind_for(0.0), Some(SummaryKind::MusicSnob));
}

#[test]
fn test_summary_kind_for_thresholds_select_nothing() {
    assert_eq!(summary_kind_for(0.70), None);
    assert_eq!(summary_kind_for(0.40), None);
    assert_eq!(summary_kind_for(0.10), None);
    assert_eq!(summary_kind_for(f64::NAN), None);
}

#[tokio::test]
async fn test_pick_summary() {
    let store = seeded_store().await;

    let summary = pick_summary(&store, 0.75).await.unwrap();
    assert_eq!(summary.name, SummaryKind::ZeroTaste);

    let summary = pick_summary(&store, 0.05).await.unwrap();
    assert_eq!(summary.name, SummaryKind::MusicSnob);

    assert!(pick_summary(&store, 0.40).await.is_none());
}

#[tokio::test]
async fn test_pick_summary_missing_record() {
    let store = MemoryStore::default();
    assert!(pick_summary(&store, 0.75).await.is_none());
}

#[tokio::test]
async fn test_pick_summary_swallows_store_errors() {
    assert!(pick_summary(&BrokenStore, 0.5).await.is_none());
}

#[tokio::test]
async fn test_seed_summaries_keeps_existing_records() {
    let store = MemoryStore::default();
    assert_eq!(seed_summaries(&store).await.unwrap(), 4);

    let before = store.find_summary(SummaryKind::Average).await.unwrap().unwrap();

    // A second run inserts nothing and keeps the ids users point at
    assert_eq!(seed_summaries(&store).await.unwrap(), 0);
    let after = store.find_summary(SummaryKind::Average).await.unwrap().unwrap();
    assert_eq!(before.id, after.id);

    assert_eq!(store.summaries().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_seed_summaries_propagates_store_errors() {
    assert!(seed_summaries(&BrokenStore).await.is_err());
}

#[test]
fn test_default_summaries_cover_every_kind() {
    let summaries = default_summaries();
    assert_eq!(summaries.len(), 4);
    for kind in SummaryKind::ALL {
        assert!(summaries.iter().any(|s| s.name == kind && !s.text.is_empty()));
    }
}

#[test]
fn test_summary_kind_serializes_camel_case() {
    assert_eq!(
        serde_json::to_string(&SummaryKind::ZeroTaste).unwrap(),
        "\"zeroTaste\""
    );
    assert_eq!(
        serde_json::from_str::<SummaryKind>("\"almostSnob\"").unwrap(),
        SummaryKind::AlmostSnob
    );
    assert_eq!(SummaryKind::MusicSnob.to_string(), "musicSnob");
}
