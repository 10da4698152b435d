/**
 * Tweet Query Types
 *
 * Row and response types for the social-graph query endpoints.
 */

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One feed entry: a followed user's tweet with its author handle
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedTweet {
    /// Author's handle
    pub username: String,
    /// Tweet body
    pub tweet: String,
    /// Store-assigned creation timestamp
    pub date_time: NaiveDateTime,
}

/// A tweet annotated with its like and reply counts
///
/// Used both for the tweet-detail view and the caller's own-tweets list.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TweetStats {
    /// Tweet body
    pub tweet: String,
    /// Number of likes
    pub likes: i64,
    /// Number of replies
    pub replies: i64,
    /// Store-assigned creation timestamp
    pub date_time: NaiveDateTime,
}

/// One reply: the replier's display name and the reply text
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReplyEntry {
    pub name: String,
    pub reply: String,
}

/// Response body for GET /user/following
#[derive(Debug, Serialize, Deserialize)]
pub struct FollowingResponse {
    #[serde(rename = "followingList")]
    pub following_list: Vec<String>,
}

/// Response body for GET /user/followers
#[derive(Debug, Serialize, Deserialize)]
pub struct FollowersResponse {
    #[serde(rename = "followersList")]
    pub followers_list: Vec<String>,
}

/// Response body for GET /tweets/:id/likes
#[derive(Debug, Serialize, Deserialize)]
pub struct LikesResponse {
    /// Handles of users who liked the tweet
    pub likes: Vec<String>,
}

/// Response body for GET /tweets/:id/replies: the tweet paired with its
/// replies (possibly none)
#[derive(Debug, Serialize, Deserialize)]
pub struct TweetRepliesResponse {
    /// Body of the tweet being replied to
    pub tweet: String,
    pub replies: Vec<ReplyEntry>,
}

/// Request body for POST /user/tweets
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTweetRequest {
    pub tweet: String,
}
