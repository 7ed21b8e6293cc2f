//! V001: Initial schema.
//! clusters, citations, maps, map_clusters, report_versions.

pub const MIGRATION_SQL: &str = r#"
-- Opinion clusters: the case-law records the engine reads.
-- Dates are ISO-8601 TEXT so lexicographic compare equals chronological.
CREATE TABLE IF NOT EXISTS clusters (
    id INTEGER PRIMARY KEY,
    court TEXT NOT NULL,
    date_filed TEXT,
    case_name_short TEXT NOT NULL DEFAULT '',
    case_name TEXT NOT NULL DEFAULT '',
    case_name_full TEXT NOT NULL DEFAULT '',
    slug TEXT NOT NULL DEFAULT '',
    decision_direction INTEGER,
    votes_majority INTEGER,
    votes_minority INTEGER
) STRICT;

CREATE INDEX IF NOT EXISTS idx_clusters_court_date
    ON clusters(court, date_filed);

-- Citations: directed "citing cites cited" edges.
CREATE TABLE IF NOT EXISTS citations (
    citing_id INTEGER NOT NULL REFERENCES clusters(id),
    cited_id INTEGER NOT NULL REFERENCES clusters(id),
    PRIMARY KEY (citing_id, cited_id)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_citations_citing ON citations(citing_id);
CREATE INDEX IF NOT EXISTS idx_citations_cited ON citations(cited_id);

-- Citation maps: one row per visualization.
CREATE TABLE IF NOT EXISTS maps (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cluster_start_id INTEGER NOT NULL REFERENCES clusters(id),
    cluster_end_id INTEGER NOT NULL REFERENCES clusters(id),
    title TEXT NOT NULL DEFAULT '',
    subtitle TEXT NOT NULL DEFAULT '',
    slug TEXT NOT NULL DEFAULT '',
    notes TEXT NOT NULL DEFAULT '',
    published INTEGER NOT NULL DEFAULT 0,
    deleted INTEGER NOT NULL DEFAULT 0,
    view_count INTEGER NOT NULL DEFAULT 0,
    generation_time REAL,
    date_created TEXT NOT NULL,
    date_modified TEXT NOT NULL
) STRICT;

-- Association sets: which clusters a map's traversal discovered.
-- The composite key is what makes re-adding a cluster a no-op.
CREATE TABLE IF NOT EXISTS map_clusters (
    map_id INTEGER NOT NULL REFERENCES maps(id),
    cluster_id INTEGER NOT NULL REFERENCES clusters(id),
    PRIMARY KEY (map_id, cluster_id)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_map_clusters_map ON map_clusters(map_id);

-- Archived report serializations, append-only.
CREATE TABLE IF NOT EXISTS report_versions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    map_id INTEGER NOT NULL REFERENCES maps(id),
    date_created TEXT NOT NULL,
    json_data TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_report_versions_map ON report_versions(map_id);
"#;
