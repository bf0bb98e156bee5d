// Integration tests for the periodicity-transition fan-out against an
// in-memory store honoring the batched-write contract.

use std::sync::Arc;

use chrono::Datelike;
use rust_decimal_macros::dec;

use commitrack::config::EngineConfig;
use commitrack::core::traits::CommitmentStore;
use commitrack::core::ErrorKind;
use commitrack::modules::commitments::models::Periodicity;
use commitrack::modules::recurrence::models::TransitionOutcome;
use commitrack::modules::recurrence::services::RecurrenceTransitionManager;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::{MemoryStore, TestDataFactory};

fn manager(store: &Arc<MemoryStore>) -> RecurrenceTransitionManager {
    RecurrenceTransitionManager::new(
        Arc::clone(store) as Arc<dyn CommitmentStore>,
        EngineConfig::default(),
    )
}

#[tokio::test]
async fn test_unique_to_monthly_creates_year_bounded_siblings() {
    let store = Arc::new(MemoryStore::new());

    // The record was saved as a one-off, then edited to monthly
    let before = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-03-10"),
        Periodicity::Unique,
        dec!(3500000),
    );
    store.insert(before.clone());

    let mut after = before.clone();
    after.periodicity = Periodicity::Monthly;

    let outcome = manager(&store).apply(&before, &after).await.unwrap();

    let (group_id, created) = match outcome {
        TransitionOutcome::Expanded { group_id, created } => (group_id.unwrap(), created),
        other => panic!("expected expansion, got {:?}", other),
    };

    // Apr through Dec: nine additional instances, none on the anchor's date
    assert_eq!(created, 9);
    assert_eq!(store.count(), 10);

    let mut siblings = store.find_by_group(&group_id).await.unwrap();
    siblings.sort_by_key(|c| c.due_date);
    assert_eq!(siblings.len(), 10, "anchor carries the group id too");

    let anchor = store.get(&before.id).unwrap();
    assert_eq!(anchor.group_id.as_deref(), Some(group_id.as_str()));

    for sibling in siblings.iter().filter(|c| c.id != before.id) {
        assert_eq!(sibling.due_date.day(), 10);
        assert_eq!(sibling.due_date.year(), 2025);
        assert!(sibling.due_date > before.due_date);
        assert!(sibling.due_date <= TestDataFactory::date("2025-12-31"));
    }
}

#[tokio::test]
async fn test_december_anchor_expands_to_nothing() {
    let store = Arc::new(MemoryStore::new());

    let before = TestDataFactory::commitment(
        "Year-end fee",
        TestDataFactory::date("2025-12-10"),
        Periodicity::Unique,
        dec!(500000),
    );
    store.insert(before.clone());

    let mut after = before.clone();
    after.periodicity = Periodicity::Monthly;

    let outcome = manager(&store).apply(&before, &after).await.unwrap();
    assert_eq!(
        outcome,
        TransitionOutcome::Expanded {
            group_id: None,
            created: 0
        }
    );

    // Nothing written, anchor stays ungrouped
    assert_eq!(store.count(), 1);
    assert_eq!(store.get(&before.id).unwrap().group_id, None);
}

#[tokio::test]
async fn test_recurring_to_unique_deletes_group_members_only() {
    let store = Arc::new(MemoryStore::new());

    // A monthly group of four, plus an unrelated commitment sharing the same
    // concept, company, and beneficiary text
    let mut anchor = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-01-15"),
        Periodicity::Monthly,
        dec!(3500000),
    );
    anchor.group_id = Some("grp_100_aaaaaaaa".to_string());
    store.insert(anchor.clone());

    for i in 1..4u32 {
        let sibling = anchor.recurrence_draft(
            TestDataFactory::date(&format!("2025-{:02}-15", i + 1)),
            "grp_100_aaaaaaaa",
            i,
        );
        store.insert(sibling);
    }

    let lookalike = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-06-15"),
        Periodicity::Unique,
        dec!(3500000),
    );
    store.insert(lookalike.clone());
    assert_eq!(store.count(), 5);

    let mut after = anchor.clone();
    after.periodicity = Periodicity::Unique;

    let outcome = manager(&store).apply(&anchor, &after).await.unwrap();
    assert_eq!(
        outcome,
        TransitionOutcome::Collapsed {
            deleted: 3,
            legacy_fallback: false
        }
    );

    // The edited record and the unrelated lookalike both survive
    assert_eq!(store.count(), 2);
    assert!(store.get(&anchor.id).is_some());
    assert!(store.get(&lookalike.id).is_some());
}

#[tokio::test]
async fn test_legacy_ungrouped_collapse_falls_back_to_field_equality() {
    let store = Arc::new(MemoryStore::new());

    // Pre-groupId records: same concept/company/beneficiary, no group id
    let edited = TestDataFactory::commitment(
        "Parafiscales",
        TestDataFactory::date("2025-02-20"),
        Periodicity::Bimonthly,
        dec!(900000),
    );
    store.insert(edited.clone());

    for month in ["2025-04-20", "2025-06-20"] {
        let mut sibling = TestDataFactory::commitment(
            "Parafiscales",
            TestDataFactory::date(month),
            Periodicity::Bimonthly,
            dec!(900000),
        );
        sibling.group_id = None;
        store.insert(sibling);
    }

    let mut after = edited.clone();
    after.periodicity = Periodicity::Unique;

    let outcome = manager(&store).apply(&edited, &after).await.unwrap();
    assert_eq!(
        outcome,
        TransitionOutcome::Collapsed {
            deleted: 2,
            legacy_fallback: true
        }
    );

    // The edited record itself is never deleted
    assert_eq!(store.count(), 1);
    assert!(store.get(&edited.id).is_some());
}

#[tokio::test]
async fn test_store_outage_surfaces_as_persistence_error() {
    let store = Arc::new(MemoryStore::new());

    let before = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-03-10"),
        Periodicity::Unique,
        dec!(3500000),
    );
    store.insert(before.clone());
    store.fail_next_batches(true);

    let mut after = before.clone();
    after.periodicity = Periodicity::Monthly;

    let err = manager(&store).apply(&before, &after).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Persistence);

    // The primary record is untouched; the caller keeps its own update and
    // reports the fan-out failure as a warning
    assert_eq!(store.count(), 1);
    assert_eq!(store.get(&before.id).unwrap().group_id, None);
}

#[tokio::test]
async fn test_collapse_with_no_siblings_is_a_clean_noop() {
    let store = Arc::new(MemoryStore::new());

    let mut edited = TestDataFactory::commitment(
        "Lonely series",
        TestDataFactory::date("2025-08-01"),
        Periodicity::Quarterly,
        dec!(150000),
    );
    edited.group_id = Some("grp_200_bbbbbbbb".to_string());
    store.insert(edited.clone());

    let mut after = edited.clone();
    after.periodicity = Periodicity::Unique;

    let outcome = manager(&store).apply(&edited, &after).await.unwrap();
    assert_eq!(
        outcome,
        TransitionOutcome::Collapsed {
            deleted: 0,
            legacy_fallback: false
        }
    );
    assert_eq!(store.count(), 1);
}
