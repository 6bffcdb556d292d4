//! Community post model matching the frontend Post interface.

use serde::{Deserialize, Serialize};

/// Fixed category set for community posts.
///
/// `All` (`全部`) is the filter sentinel shown as the first category chip;
/// published posts always carry one of the five concrete categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostCategory {
    #[serde(rename = "全部")]
    All,
    #[serde(rename = "清洁技巧")]
    CleaningTips,
    #[serde(rename = "烹饪分享")]
    Cooking,
    #[serde(rename = "收纳整理")]
    Organizing,
    #[serde(rename = "时间管理")]
    TimeManagement,
    #[serde(rename = "经验分享")]
    Experience,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::All => "全部",
            PostCategory::CleaningTips => "清洁技巧",
            PostCategory::Cooking => "烹饪分享",
            PostCategory::Organizing => "收纳整理",
            PostCategory::TimeManagement => "时间管理",
            PostCategory::Experience => "经验分享",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "全部" => Some(PostCategory::All),
            "清洁技巧" => Some(PostCategory::CleaningTips),
            "烹饪分享" => Some(PostCategory::Cooking),
            "收纳整理" => Some(PostCategory::Organizing),
            "时间管理" => Some(PostCategory::TimeManagement),
            "经验分享" => Some(PostCategory::Experience),
            _ => None,
        }
    }
}

/// Post author as shown on the feed cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    /// Household level badge, e.g. "家务达人"
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A comment under a post. Immutable once created, owned by exactly one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

/// A community post shared on the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Author,
    pub timestamp: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Request body for publishing a new post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    /// `None` when the user has not picked a category yet.
    #[serde(default)]
    pub category: Option<PostCategory>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Author,
}

/// Request body for commenting on a post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub author: String,
    pub content: String,
}
