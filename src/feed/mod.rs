//! Community feed rules: filtering, publishing, likes and comments.
//!
//! Everything here is a pure function over plain data. The store (or any
//! other hosting layer) owns the single mutable reference and swaps in
//! whatever these functions return on each UI event.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Comment, CreateCommentRequest, CreatePostRequest, Post, PostCategory};

/// The tuple of (category, tag set, search string) that determines which
/// posts are visible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: PostCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: PostCategory::All,
            tags: Vec::new(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    /// Reset all controls to their defaults.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// Case-insensitive substring match.
fn matches_query(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Produce the ordered sub-sequence of posts to display.
///
/// A post passes when all active controls match: exact category (or `全部`),
/// every selected tag present on the post (AND semantics), and the search
/// query appearing case-insensitively in title or content. Input order is
/// preserved; no re-sorting.
pub fn apply_filters(posts: &[Post], filters: &FilterState) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| {
            let matches_category =
                filters.category == PostCategory::All || post.category == filters.category;
            let matches_tags =
                filters.tags.is_empty() || filters.tags.iter().all(|tag| post.tags.contains(tag));
            let matches_search = filters.search_query.is_empty()
                || matches_query(&post.title, &filters.search_query)
                || matches_query(&post.content, &filters.search_query);
            matches_category && matches_tags && matches_search
        })
        .cloned()
        .collect()
}

/// Toggle a tag chip: add it if absent, remove it if present.
pub fn toggle_tag(filters: &FilterState, tag: &str) -> FilterState {
    let mut next = filters.clone();
    if let Some(pos) = next.tags.iter().position(|t| t == tag) {
        next.tags.remove(pos);
    } else {
        next.tags.push(tag.to_string());
    }
    next
}

/// Publish a new post to the front of the feed.
///
/// Title, content and a concrete category are all required; on any missing
/// field the feed is left untouched and a validation error is returned for
/// the screen to keep its submit button disabled.
pub fn publish_post(posts: &[Post], request: &CreatePostRequest) -> Result<Vec<Post>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("Content is required".to_string()));
    }
    let category = match request.category {
        Some(category) if category != PostCategory::All => category,
        _ => return Err(AppError::Validation("Category is required".to_string())),
    };

    let post = Post {
        id: Uuid::new_v4().to_string(),
        title: request.title.trim().to_string(),
        content: request.content.trim().to_string(),
        category,
        tags: request.tags.clone(),
        author: request.author.clone(),
        timestamp: Utc::now().to_rfc3339(),
        likes: 0,
        comments: Vec::new(),
    };

    tracing::info!(post_id = %post.id, "post published");

    let mut next = Vec::with_capacity(posts.len() + 1);
    next.push(post);
    next.extend_from_slice(posts);
    Ok(next)
}

/// Increment the like counter of a post by exactly one.
///
/// An unknown id is a benign race with the feed refreshing underneath the
/// detail screen and is silently ignored.
pub fn like_post(posts: &[Post], id: &str) -> Vec<Post> {
    if !posts.iter().any(|p| p.id == id) {
        tracing::debug!(post_id = %id, "like for unknown post ignored");
        return posts.to_vec();
    }

    posts
        .iter()
        .map(|post| {
            if post.id == id {
                let mut updated = post.clone();
                updated.likes += 1;
                updated
            } else {
                post.clone()
            }
        })
        .collect()
}

/// Append a comment to the end of a post's comment list.
///
/// Blank comment text and unknown post ids are both silent no-ops.
pub fn add_comment(posts: &[Post], id: &str, request: &CreateCommentRequest) -> Vec<Post> {
    if request.content.trim().is_empty() {
        return posts.to_vec();
    }
    if !posts.iter().any(|p| p.id == id) {
        tracing::debug!(post_id = %id, "comment for unknown post ignored");
        return posts.to_vec();
    }

    let comment = Comment {
        id: Uuid::new_v4().to_string(),
        author: request.author.clone(),
        content: request.content.trim().to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    posts
        .iter()
        .map(|post| {
            if post.id == id {
                let mut updated = post.clone();
                updated.comments.push(comment.clone());
                updated
            } else {
                post.clone()
            }
        })
        .collect()
}
