use chrono::{DateTime, Duration, Utc};
use vc_core::board::Board;
use vc_core::config::Config;
use vc_core::seed::{self, Fixture};
use vc_core::store::LeadStore;
use vc_core::types::*;

fn seeded() -> LeadStore {
    LeadStore::new(seed::initial_leads(Utc::now()))
}

#[test]
fn all_preserves_seed_order() {
    let store = seeded();
    let ids: Vec<&str> = store.all().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["l1", "l2", "l3", "l4"]);
}

#[test]
fn update_status_moves_between_buckets() {
    let mut store = seeded();
    for target in LeadStatus::ALL {
        let id = LeadId::from("l2");
        let old = store.get(&id).unwrap().clone();

        let updated = store.update_status(&id, target).expect("known lead");

        assert_eq!(updated.status, target);
        assert!(updated.last_activity_at > old.last_activity_at);
        assert!(store.by_status(target).iter().any(|l| l.id == id));
        if old.status != target {
            assert!(store.by_status(old.status).iter().all(|l| l.id != id));
        }
    }
}

#[test]
fn update_status_only_touches_status_and_activity() {
    let mut store = seeded();
    let id = LeadId::from("l3");
    let old = store.get(&id).unwrap().clone();

    let at = Utc::now() + Duration::seconds(1);
    let updated = store.update_status_at(&id, LeadStatus::Invoiced, at).unwrap();

    assert_eq!(updated.name, old.name);
    assert_eq!(updated.status_note, old.status_note);
    assert_eq!(updated.created_at, old.created_at);
    assert_eq!(updated.converted_at, None);
    assert_eq!(store.get(&id), Some(&updated));
}

#[test]
fn update_unknown_lead_leaves_snapshot_unchanged() {
    let mut store = seeded();
    let snapshot = store.all().to_vec();

    let missing = LeadId::from("l404");
    assert_eq!(store.update_status(&missing, LeadStatus::Approved), None);

    assert_eq!(store.all(), snapshot.as_slice());
}

#[test]
fn empty_store_is_harmless() {
    let mut store = LeadStore::default();
    assert!(store.all().is_empty());
    assert!(store.by_status(LeadStatus::Lead).is_empty());
    assert_eq!(store.update_status(&"l1".into(), LeadStatus::Lead), None);
    assert_eq!(store.financing_summary().insurance, 0);
}

#[test]
fn count_by_status_matches_filter() {
    let store = seeded();
    for status in LeadStatus::ALL {
        assert_eq!(store.count_by_status(status), store.by_status(status).len());
    }
}

#[test]
fn lead_stamped_at_end_of_time_can_still_move() {
    let mut fixture = Fixture::demo(Utc::now());
    fixture.leads[0].last_activity_at = DateTime::<Utc>::MAX_UTC;
    let text = serde_json::to_string(&fixture).unwrap();
    let loaded = Fixture::from_json(&text).expect("fixture loads");

    let mut board = Board::new(loaded, &Config::default());
    board.handle_drag_end("l1", Some("PROSPECT"));

    let lead = board.get(&"l1".into()).unwrap();
    assert_eq!(lead.status, LeadStatus::Prospect);
    assert_eq!(lead.last_activity_at, DateTime::<Utc>::MAX_UTC);
}
