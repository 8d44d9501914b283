use assert_matches::assert_matches;
use sqlx::PgPool;

/// `events.id` is a bigint surrogate key and `status` a smallint flag.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_events_column_types(pool: PgPool) {
    let rows: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT column_name, data_type, is_nullable
         FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name = 'events'
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = [
        ("id", "bigint", "NO"),
        ("name", "text", "NO"),
        ("description", "text", "YES"),
        ("date", "timestamp with time zone", "NO"),
        ("status", "smallint", "NO"),
        ("date_created", "timestamp with time zone", "NO"),
        ("date_updated", "timestamp with time zone", "YES"),
    ];
    assert_eq!(rows.len(), expected.len());
    for ((column, data_type, nullable), (want_col, want_type, want_null)) in
        rows.iter().zip(expected)
    {
        assert_eq!(column, want_col);
        assert_eq!(data_type, want_type, "events.{column} type");
        assert_eq!(nullable, want_null, "events.{column} nullability");
    }
}

/// Status values other than 0/1 are rejected by the store and surface as a
/// database error.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_outside_flag_range_is_rejected(pool: PgPool) {
    let result = sqlx::query("INSERT INTO events (name, date, status) VALUES ('bad', NOW(), 2)")
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}
