//! Check-and-create bootstrap for the target database and the `entries` table.

use sqlx::{Connection, PgConnection, PgPool};

use crate::Result;

/// Name of the table holding entries, in the `public` schema.
pub const ENTRIES_TABLE: &str = "entries";

/// Database that always exists on a PostgreSQL server; used to create the
/// target database when it is missing.
pub const MAINTENANCE_DATABASE: &str = "postgres";

const DATABASE_EXISTS_SQL: &str = "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)";

// SQLSTATE duplicate_database
const DUPLICATE_DATABASE: &str = "42P04";

const TABLE_EXISTS_SQL: &str = r#"
    SELECT EXISTS (
        SELECT FROM information_schema.tables
        WHERE table_schema = 'public' AND table_name = $1
    )
"#;

// IF NOT EXISTS covers a second process creating the table between our
// existence check and this statement.
const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS public.entries (
        id SERIAL PRIMARY KEY,
        data TEXT NOT NULL
    )
"#;

/// What bootstrap found when it looked for the database or the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The object was missing and has been created.
    Created,
    /// The object was already present and was left untouched.
    AlreadyExists,
}

impl SchemaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaStatus::Created => "created",
            SchemaStatus::AlreadyExists => "already_exists",
        }
    }
}

/// Ensures the database the pool points at exists, creating it when absent.
///
/// Connects to [`MAINTENANCE_DATABASE`] with the pool's credentials, so the
/// pool itself never has to reach a database that is not there yet. A pool
/// without an explicit database, or one pointing at the maintenance
/// database, needs no work.
#[tracing::instrument(skip(pool))]
pub async fn ensure_database(pool: &PgPool) -> Result<SchemaStatus> {
    let target = pool.connect_options();
    let Some(name) = target
        .get_database()
        .filter(|name| *name != MAINTENANCE_DATABASE)
        .map(str::to_string)
    else {
        return Ok(SchemaStatus::AlreadyExists);
    };

    let maintenance = (*target).clone().database(MAINTENANCE_DATABASE);
    let mut conn = PgConnection::connect_with(&maintenance).await?;

    let exists: bool = sqlx::query_scalar(DATABASE_EXISTS_SQL)
        .bind(&name)
        .fetch_one(&mut conn)
        .await?;

    let status = if exists {
        tracing::info!(database = %name, "database already exists");
        SchemaStatus::AlreadyExists
    } else {
        create_database(&mut conn, &name).await?
    };

    conn.close().await?;
    Ok(status)
}

async fn create_database(conn: &mut PgConnection, name: &str) -> Result<SchemaStatus> {
    let statement = format!("CREATE DATABASE {}", quote_identifier(name));

    match sqlx::query(&statement).execute(&mut *conn).await {
        Ok(_) => {
            tracing::info!(database = %name, "database created");
            Ok(SchemaStatus::Created)
        }
        // Another process created it between our check and this statement.
        Err(sqlx::Error::Database(ref db_err))
            if db_err.code().as_deref() == Some(DUPLICATE_DATABASE) =>
        {
            Ok(SchemaStatus::AlreadyExists)
        }
        Err(err) => Err(err.into()),
    }
}

/// Quotes `name` as a PostgreSQL identifier, doubling embedded quotes.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Ensures the `entries` table exists, creating it when absent.
///
/// Safe to run on every start. An existing table is never altered, even if
/// its columns differ from what this service expects.
#[tracing::instrument(skip(pool))]
pub async fn ensure_entries_table(pool: &PgPool) -> Result<SchemaStatus> {
    tracing::info!("checking database connection");
    let mut conn = pool.acquire().await?;
    tracing::info!("database connection opened");

    let exists: bool = sqlx::query_scalar(TABLE_EXISTS_SQL)
        .bind(ENTRIES_TABLE)
        .fetch_one(&mut *conn)
        .await?;

    if exists {
        tracing::info!(table = ENTRIES_TABLE, "table already exists");
        return Ok(SchemaStatus::AlreadyExists);
    }

    sqlx::query(CREATE_TABLE_SQL).execute(&mut *conn).await?;
    tracing::info!(table = ENTRIES_TABLE, "table created");

    Ok(SchemaStatus::Created)
}
