//! SQL statements for the lookup table.

/// The lookup table. `pinyin` is deliberately non-unique: homophones
/// produce one row each, all sharing the reading string.
pub const CREATE_PINYIN_MAP: &str = r#"
CREATE TABLE pinyin_map (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pinyin TEXT NOT NULL,
    hanzi TEXT NOT NULL
);
"#;

/// Non-unique index for exact and prefix reading lookups.
pub const CREATE_PINYIN_INDEX: &str = "CREATE INDEX idx_pinyin ON pinyin_map (pinyin);";

pub const INSERT_ROW: &str = "INSERT INTO pinyin_map (pinyin, hanzi) VALUES (?, ?)";

pub const COUNT_ROWS: &str = "SELECT count(*) FROM pinyin_map";

pub const SELECT_BY_PREFIX: &str =
    "SELECT pinyin, hanzi FROM pinyin_map WHERE pinyin LIKE ? || '%' ORDER BY id LIMIT ?";
