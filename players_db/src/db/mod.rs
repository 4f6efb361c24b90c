use sqlx::sqlite::SqlitePool;
use sqlx::{QueryBuilder, Sqlite};
use crate::models::*;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    position TEXT NOT NULL,
    team TEXT NOT NULL,
    age INTEGER NOT NULL,
    active BOOLEAN NOT NULL DEFAULT 0
)"#;

pub async fn connect(dsn: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePool::connect(dsn).await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(pool)
}

/// Create the `players` table when it does not exist yet. Existing tables are
/// left alone.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, first_name, last_name, position, team, age, active
           FROM players
           ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

/// Insert a player and return the id the store assigned to it.
pub async fn insert_player(pool: &SqlitePool, player: &NewPlayer) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO players (first_name, last_name, position, team, age, active)
           VALUES (?, ?, ?, ?, ?, ?)"#
    )
    .bind(&player.first_name)
    .bind(&player.last_name)
    .bind(&player.position)
    .bind(&player.team)
    .bind(player.age)
    .bind(player.active)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Build `UPDATE players SET <col> = ?, ... WHERE id = ?`. Column names come
/// from [`PlayerColumn`] only; every value is a bind parameter.
pub fn build_update(
    player_id: i64,
    changes: Vec<(PlayerColumn, ColumnValue)>,
) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new("UPDATE players SET ");

    {
        let mut set = query.separated(", ");
        for (column, value) in changes {
            set.push(column.as_str());
            set.push_unseparated(" = ");
            match value {
                ColumnValue::Text(text) => set.push_bind_unseparated(text),
                ColumnValue::Integer(int) => set.push_bind_unseparated(int),
                ColumnValue::Bool(flag) => set.push_bind_unseparated(flag),
            };
        }
    }

    query.push(" WHERE id = ").push_bind(player_id);
    query
}

/// Apply a partial update. Returns the number of rows touched, which is 0 for
/// an unknown id.
pub async fn update_player(
    pool: &SqlitePool,
    player_id: i64,
    changes: Vec<(PlayerColumn, ColumnValue)>,
) -> Result<u64, sqlx::Error> {
    let mut query = build_update(player_id, changes);
    let result = query.build().execute(pool).await?;
    Ok(result.rows_affected())
}

pub async fn delete_player(pool: &SqlitePool, player_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM players WHERE id = ?"#)
        .bind(player_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_statement_lists_only_changed_columns() {
        let query = build_update(
            5,
            vec![
                (PlayerColumn::Age, ColumnValue::Integer(30)),
                (PlayerColumn::Active, ColumnValue::Bool(true)),
            ],
        );
        assert_eq!(
            query.sql(),
            "UPDATE players SET age = ?, active = ? WHERE id = ?"
        );
    }

    #[test]
    fn single_column_update_has_no_separator() {
        let query = build_update(
            1,
            vec![(PlayerColumn::FirstName, ColumnValue::Text("Ann".into()))],
        );
        assert_eq!(query.sql(), "UPDATE players SET first_name = ? WHERE id = ?");
    }
}
