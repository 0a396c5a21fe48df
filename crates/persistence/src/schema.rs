//! Database schema definitions

/// SQL to create all tables
/// NOTE: `time` is stored as TEXT and ranked lexically; callers supply a sortable encoding
pub const CREATE_TABLES: &str = r#"
-- Leaderboard entries (AUTOINCREMENT: ids are never reused after delete)
CREATE TABLE IF NOT EXISTS leaderboard (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    country TEXT NOT NULL,
    countries INTEGER NOT NULL,
    time TEXT NOT NULL
);

-- ========== INDEXES ==========

CREATE INDEX IF NOT EXISTS idx_leaderboard_rank ON leaderboard(countries DESC, time ASC)
"#;
