//! Persistence round-trips for clusters, citations, maps, and reports.

use chrono::NaiveDate;
use citemap_core::traits::{IClusterStore, IMapStore};
use citemap_core::types::{Citation, CitationMap, OpinionCluster};
use citemap_storage::SqliteStore;

fn setup_store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cluster(id: i64, court: &str, filed: Option<NaiveDate>) -> OpinionCluster {
    OpinionCluster {
        id,
        court: court.to_string(),
        date_filed: filed,
        case_name_short: format!("Case {id}"),
        case_name: String::new(),
        case_name_full: String::new(),
        slug: format!("case-{id}"),
        decision_direction: None,
        votes_majority: None,
        votes_minority: None,
    }
}

#[test]
fn test_cluster_round_trip() {
    let store = setup_store();

    let mut c = cluster(10, "scotus", Some(date(1973, 1, 22)));
    c.decision_direction = Some(2);
    c.votes_majority = Some(7);
    c.votes_minority = Some(2);
    store.upsert_cluster(&c).unwrap();

    let loaded = store.get_cluster(10).unwrap().unwrap();
    assert_eq!(loaded, c);

    // Upsert overwrites
    c.case_name_short = "Renamed".to_string();
    store.upsert_cluster(&c).unwrap();
    let loaded = store.get_cluster(10).unwrap().unwrap();
    assert_eq!(loaded.case_name_short, "Renamed");

    assert!(store.get_cluster(999).unwrap().is_none());
}

#[test]
fn test_cluster_without_date_round_trips() {
    let store = setup_store();
    store.upsert_cluster(&cluster(1, "scotus", None)).unwrap();
    let loaded = store.get_cluster(1).unwrap().unwrap();
    assert!(loaded.date_filed.is_none());
}

#[test]
fn test_authorities_filter_and_order() {
    let store = setup_store();

    // Citing node plus four candidate targets.
    store.upsert_cluster(&cluster(1, "scotus", Some(date(2000, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(2, "scotus", Some(date(1990, 6, 1)))).unwrap();
    store.upsert_cluster(&cluster(3, "scotus", Some(date(1985, 3, 1)))).unwrap();
    store.upsert_cluster(&cluster(4, "ca9", Some(date(1995, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(5, "scotus", Some(date(1950, 1, 1)))).unwrap();

    for cited in [2, 3, 4, 5] {
        store.insert_citation(&Citation::new(1, cited)).unwrap();
    }

    let hits = store
        .authorities_of(1, "scotus", date(1980, 1, 1))
        .unwrap();

    // Wrong court (4) and too-old (5) are filtered; order is by target date.
    let cited: Vec<i64> = hits.iter().map(|c| c.cited_id).collect();
    assert_eq!(cited, vec![3, 2]);
}

#[test]
fn test_authorities_skip_undated_targets() {
    let store = setup_store();
    store.upsert_cluster(&cluster(1, "scotus", Some(date(2000, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(2, "scotus", None)).unwrap();
    store.insert_citation(&Citation::new(1, 2)).unwrap();

    let hits = store.authorities_of(1, "scotus", date(1980, 1, 1)).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_duplicate_citation_ignored() {
    let store = setup_store();
    store.upsert_cluster(&cluster(1, "scotus", Some(date(2000, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(2, "scotus", Some(date(1990, 1, 1)))).unwrap();

    store.insert_citation(&Citation::new(1, 2)).unwrap();
    store.insert_citation(&Citation::new(1, 2)).unwrap();

    let hits = store.authorities_of(1, "scotus", date(1980, 1, 1)).unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_map_insert_get_update() {
    let store = setup_store();
    store.upsert_cluster(&cluster(1, "scotus", Some(date(1990, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(2, "scotus", Some(date(2000, 1, 1)))).unwrap();

    let map = CitationMap::new(1, 2);
    let saved = store.insert_map(&map).unwrap();
    assert!(saved.id > 0);

    let mut loaded = store.get_map(saved.id).unwrap().unwrap();
    assert_eq!(loaded.cluster_start_id, 1);
    assert_eq!(loaded.cluster_end_id, 2);
    assert!(loaded.generation_time.is_none());

    loaded.title = "First to Second".to_string();
    loaded.generation_time = Some(0.25);
    store.update_map(&loaded).unwrap();

    let reloaded = store.get_map(saved.id).unwrap().unwrap();
    assert_eq!(reloaded.title, "First to Second");
    assert_eq!(reloaded.generation_time, Some(0.25));
}

#[test]
fn test_update_missing_map_errors() {
    let store = setup_store();
    let mut map = CitationMap::new(1, 2);
    map.id = 123;
    assert!(store.update_map(&map).is_err());
}

#[test]
fn test_map_cluster_association_is_idempotent() {
    let store = setup_store();
    for id in 1..=3 {
        store
            .upsert_cluster(&cluster(id, "scotus", Some(date(1990 + id as i32, 1, 1))))
            .unwrap();
    }
    let map = store.insert_map(&CitationMap::new(1, 3)).unwrap();

    let added = store.add_map_clusters(map.id, &[1, 2, 3]).unwrap();
    assert_eq!(added, 3);

    // Re-adding the same set is a no-op.
    let added = store.add_map_clusters(map.id, &[1, 2, 3]).unwrap();
    assert_eq!(added, 0);

    let members = store.map_clusters(map.id).unwrap();
    assert_eq!(members.len(), 3);
}

#[test]
fn test_map_clusters_ordered_by_date_then_id() {
    let store = setup_store();
    store.upsert_cluster(&cluster(7, "scotus", Some(date(1995, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(3, "scotus", Some(date(1990, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(5, "scotus", Some(date(1990, 1, 1)))).unwrap();

    let map = store.insert_map(&CitationMap::new(3, 7)).unwrap();
    store.add_map_clusters(map.id, &[7, 5, 3]).unwrap();

    let ids: Vec<i64> = store
        .map_clusters(map.id)
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![3, 5, 7]);
}

#[test]
fn test_report_versions_append_only() {
    let store = setup_store();
    store.upsert_cluster(&cluster(1, "scotus", Some(date(1990, 1, 1)))).unwrap();
    store.upsert_cluster(&cluster(2, "scotus", Some(date(2000, 1, 1)))).unwrap();
    let map = store.insert_map(&CitationMap::new(1, 2)).unwrap();

    assert!(store.latest_report_version(map.id).unwrap().is_none());

    let v1 = store.add_report_version(map.id, r#"{"v":1}"#).unwrap();
    let v2 = store.add_report_version(map.id, r#"{"v":2}"#).unwrap();
    assert!(v2 > v1);

    assert_eq!(
        store.latest_report_version(map.id).unwrap().unwrap(),
        r#"{"v":2}"#
    );
    assert_eq!(store.count_report_versions(map.id).unwrap(), 2);
}

#[test]
fn test_migrations_idempotent_on_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("citemap.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store
            .upsert_cluster(&cluster(1, "scotus", Some(date(1990, 1, 1))))
            .unwrap();
    }

    // Second open re-runs the migration path against existing tables.
    let store = SqliteStore::open(&path).unwrap();
    assert!(store.get_cluster(1).unwrap().is_some());
}

#[test]
fn test_database_path_reflects_backing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("citemap.db");

    let on_disk = SqliteStore::open(&path).unwrap();
    assert_eq!(on_disk.database().path(), Some(path.as_path()));

    let in_memory = setup_store();
    assert!(in_memory.database().path().is_none());
}
