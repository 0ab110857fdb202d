// src/common/migrations.rs
//! Idempotent schema setup run at startup.
//!
//! Table and column names follow the external dashboard schema: jobs carry a
//! JSON-encoded `required_skills` array, learning resources a comma-separated
//! `related_skills` string, and job-seeker profiles hang off users by user_id.

use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            role TEXT DEFAULT 'jobseeker',
            status TEXT DEFAULT 'active',
            created_at TEXT,
            updated_at TEXT
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS job_seekers (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            full_name TEXT,
            education_level TEXT,
            department TEXT,
            resume_link TEXT,
            experience_level TEXT,
            preferred_career_track TEXT,
            skills TEXT,
            about TEXT,
            location TEXT,
            created_at TEXT,
            FOREIGN KEY (user_id) REFERENCES users (id)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS jobs (
            id TEXT PRIMARY KEY,
            job_title TEXT NOT NULL,
            company TEXT,
            location TEXT,
            required_skills TEXT,
            experience_level TEXT,
            job_type TEXT,
            description TEXT,
            is_active INTEGER DEFAULT 1,
            created_at TEXT,
            updated_at TEXT
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS learning_resources (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            platform TEXT,
            url TEXT,
            related_skills TEXT,
            cost_indicator TEXT,
            created_at TEXT,
            updated_at TEXT
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_jobs_created_at ON jobs (created_at)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_created_at ON users (created_at)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_job_seekers_user_id ON job_seekers (user_id)")
        .execute(pool)
        .await?;

    info!("Database migrations completed");
    Ok(())
}
