#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use posts_service::domain::entities::{NewPost, Post, PostListing};
use posts_service::domain::repositories::PostRepository;
use posts_service::error::StoreError;
use posts_service::state::AppState;

/// In-memory stand-in for the PostgreSQL repository.
///
/// Mirrors the store's observable behavior: id/date/likes_count assignment
/// on insert, outer-join name resolution against fixed reference tables, and
/// `(date DESC, id DESC)` listing order.
pub struct InMemoryPostRepository {
    rows: Mutex<Vec<Post>>,
    next_id: AtomicI32,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Inserts a row with explicit id and date, bypassing store assignment.
    pub fn seed(&self, post: Post) {
        let next = self.next_id.load(Ordering::SeqCst).max(post.id + 1);
        self.next_id.store(next, Ordering::SeqCst);
        self.rows.lock().unwrap().push(post);
    }

    fn category_name(category_id: i32) -> Option<String> {
        match category_id {
            1 => Some("Cat".to_string()),
            2 => Some("General".to_string()),
            _ => None,
        }
    }

    fn status_name(status_id: i32) -> Option<String> {
        match status_id {
            1 => Some("draft".to_string()),
            2 => Some("published".to_string()),
            _ => None,
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<PostListing>, StoreError> {
        let rows = self.rows.lock().unwrap();

        let mut listings: Vec<PostListing> = rows
            .iter()
            .map(|p| PostListing {
                id: p.id,
                image: p.image.clone(),
                title: p.title.clone(),
                description: p.description.clone(),
                date: p.date,
                content: p.content.clone(),
                likes_count: p.likes_count,
                category_name: Self::category_name(p.category_id),
                status_name: Self::status_name(p.status_id),
            })
            .collect();

        listings.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        Ok(listings)
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id,
            title: new_post.title,
            image: new_post.image,
            description: new_post.description,
            content: new_post.content,
            category_id: new_post.category_id,
            status_id: new_post.status_id,
            date: Utc::now(),
            likes_count: 0,
        };

        self.rows.lock().unwrap().push(post.clone());

        Ok(post)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Repository whose every operation fails with a fixed fault.
pub struct FailingPostRepository {
    fault: StoreError,
}

impl FailingPostRepository {
    pub fn new(fault: StoreError) -> Self {
        Self { fault }
    }
}

#[async_trait]
impl PostRepository for FailingPostRepository {
    async fn list(&self) -> Result<Vec<PostListing>, StoreError> {
        Err(self.fault.clone())
    }

    async fn create(&self, _new_post: NewPost) -> Result<Post, StoreError> {
        Err(self.fault.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.fault.clone())
    }
}

pub fn state_with(posts: Arc<dyn PostRepository>) -> AppState {
    AppState::new(posts)
}

/// A seedable post row with store-assigned fields chosen by the test.
pub fn post(id: i32, date: DateTime<Utc>, category_id: i32, status_id: i32) -> Post {
    Post {
        id,
        title: format!("post {id}"),
        image: format!("https://cdn.example.com/{id}.png"),
        description: None,
        content: "content".to_string(),
        category_id,
        status_id,
        date,
        likes_count: 0,
    }
}

pub fn date(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}
