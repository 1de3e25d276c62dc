//! sqlx-backed video repository.

use async_trait::async_trait;
use reelvault_core::models::Video;
use reelvault_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::video_store::{NewVideo, VideoStore};

/// Video metadata repository over Postgres.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    async fn create(&self, new_video: NewVideo) -> Result<Video, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (id, owner_id, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, title, description, video_url, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_video.owner_id)
        .bind(&new_video.title)
        .bind(&new_video.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(video_id = %video.id, owner_id = %video.owner_id, "Video record created");

        Ok(video)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, owner_id, title, description, video_url, created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, owner_id, title, description, video_url, created_at, updated_at
            FROM videos
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    async fn update(&self, video: &Video) -> Result<Video, AppError> {
        let updated = sqlx::query_as::<_, Video>(
            r#"
            UPDATE videos
            SET title = $2, description = $3, video_url = $4, updated_at = now()
            WHERE id = $1
            RETURNING id, owner_id, title, description, video_url, created_at, updated_at
            "#,
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.video_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video.id)))?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Video {} not found", id)));
        }

        tracing::debug!(video_id = %id, "Video record deleted");

        Ok(())
    }
}
