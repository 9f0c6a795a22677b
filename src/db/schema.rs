use rusqlite::Connection;

/// Initialize the database schema.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        -- Beers (the catalog, one row per product)
        -- name is unique: the stock service checks before insert, the
        -- constraint backs it up at the storage layer.
        -- quantity/max CHECKs mirror the stock invariant 0 <= quantity <= max.
        CREATE TABLE IF NOT EXISTS beers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            brand TEXT NOT NULL,
            style TEXT NOT NULL CHECK (style IN ('lager', 'malzbier', 'witbier', 'weiss', 'ale', 'ipa', 'stout')),
            quantity INTEGER NOT NULL DEFAULT 0 CHECK (quantity >= 0 AND quantity <= max),
            max INTEGER NOT NULL CHECK (max > 0),
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_beers_name ON beers(name);
        "#,
    )?;
    Ok(())
}
