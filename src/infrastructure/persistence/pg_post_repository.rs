//! PostgreSQL implementation of the post repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{NewPost, Post, PostListing};
use crate::domain::repositories::PostRepository;
use crate::error::StoreError;

/// PostgreSQL repository for post storage and retrieval.
///
/// Holds a handle to the shared pool; each operation acquires a connection
/// for exactly one statement.
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list(&self) -> Result<Vec<PostListing>, StoreError> {
        let rows = sqlx::query_as::<_, PostListing>(
            r#"
            SELECT
                p.id,
                p.image,
                p.title,
                p.description,
                p.date,
                p.content,
                p.likes_count,
                c.name AS category_name,
                s.status AS status_name
            FROM posts p
            LEFT JOIN categories c ON p.category_id = c.id
            LEFT JOIN statuses s ON p.status_id = s.id
            ORDER BY p.date DESC, p.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, image, category_id, description, content, status_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, image, description, content, category_id, status_id, date, likes_count
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.image)
        .bind(new_post.category_id)
        .bind(&new_post.description)
        .bind(&new_post.content)
        .bind(new_post.status_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}
