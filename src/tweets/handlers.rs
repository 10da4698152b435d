/**
 * Tweet and Social-Graph Handlers
 *
 * Handlers for the nine protected endpoints. Every handler receives the
 * verified caller identity from the auth middleware via the `AuthUser`
 * extractor; the middleware has already rejected unauthenticated calls.
 *
 * # Visibility Policy
 *
 * Tweet-scoped reads (detail, likes, replies) run the shared visibility
 * gate first and reject with 401 `Invalid Request` when it fails. The
 * same response covers nonexistent tweets, so callers cannot probe for
 * existence. Deletion answers the same way for not-owned and not-found.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::tweets::db;
use crate::tweets::types::{
    CreateTweetRequest, FeedTweet, FollowersResponse, FollowingResponse, LikesResponse,
    TweetRepliesResponse, TweetStats,
};

/// GET /user/tweets/feed
///
/// Up to four most-recent tweets from followed users, newest first.
pub async fn get_feed(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<FeedTweet>>, ApiError> {
    let feed = db::get_feed(&pool, user.user_id).await?;
    Ok(Json(feed))
}

/// GET /user/following
pub async fn get_following(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<FollowingResponse>, ApiError> {
    let following_list = db::get_following_names(&pool, user.user_id).await?;
    Ok(Json(FollowingResponse { following_list }))
}

/// GET /user/followers
pub async fn get_followers(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<FollowersResponse>, ApiError> {
    let followers_list = db::get_follower_names(&pool, user.user_id).await?;
    Ok(Json(FollowersResponse { followers_list }))
}

/// GET /tweets/:id
///
/// Tweet body with like/reply counts and timestamp, gated on visibility.
pub async fn get_tweet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<TweetStats>, ApiError> {
    if !db::is_tweet_visible(&pool, user.user_id, tweet_id).await? {
        return Err(ApiError::Forbidden);
    }

    // The tweet can disappear between the gate and the fetch; the
    // response is the same either way.
    let stats = db::get_tweet_stats(&pool, tweet_id)
        .await?
        .ok_or(ApiError::Forbidden)?;

    Ok(Json(stats))
}

/// GET /tweets/:id/likes
///
/// Handles of everyone who liked the tweet, gated on visibility.
pub async fn get_tweet_likes(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<LikesResponse>, ApiError> {
    if !db::is_tweet_visible(&pool, user.user_id, tweet_id).await? {
        return Err(ApiError::Forbidden);
    }

    let likes = db::get_tweet_likers(&pool, tweet_id).await?;
    Ok(Json(LikesResponse { likes }))
}

/// GET /tweets/:id/replies
///
/// The tweet paired with its replies, gated on visibility. The tweet and
/// its replies are fetched independently, so zero replies yields an
/// empty list rather than a positional split of one fused result set.
pub async fn get_tweet_replies(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<Json<TweetRepliesResponse>, ApiError> {
    if !db::is_tweet_visible(&pool, user.user_id, tweet_id).await? {
        return Err(ApiError::Forbidden);
    }

    let tweet = db::get_tweet_body(&pool, tweet_id)
        .await?
        .ok_or(ApiError::Forbidden)?;
    let replies = db::get_tweet_replies(&pool, tweet_id).await?;

    Ok(Json(TweetRepliesResponse { tweet, replies }))
}

/// GET /user/tweets
///
/// All of the caller's own tweets with like/reply counts. No visibility
/// gate: the caller is always the author.
pub async fn get_own_tweets(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<TweetStats>>, ApiError> {
    let tweets = db::get_user_tweets(&pool, user.user_id).await?;
    Ok(Json(tweets))
}

/// POST /user/tweets
///
/// Insert a tweet with a store-assigned timestamp. The new tweet id is
/// not returned; clients re-query to discover it (known limitation kept
/// for compatibility).
pub async fn create_tweet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateTweetRequest>,
) -> Result<&'static str, ApiError> {
    db::insert_tweet(&pool, user.user_id, &request.tweet).await?;
    tracing::info!("Tweet created by user {}", user.user_id);
    Ok("Created a Tweet")
}

/// DELETE /tweets/:id
///
/// Atomic conditional delete: one statement scoped to the caller's
/// ownership, judged by affected-row count. Not-owned and not-found both
/// answer 401 `Invalid Request`.
pub async fn delete_tweet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(tweet_id): Path<i64>,
) -> Result<&'static str, ApiError> {
    let deleted = db::delete_tweet_if_owned(&pool, user.user_id, tweet_id).await?;
    if !deleted {
        tracing::warn!(
            "Rejected delete of tweet {} by user {}",
            tweet_id,
            user.user_id
        );
        return Err(ApiError::Forbidden);
    }

    tracing::info!("Tweet {} deleted by user {}", tweet_id, user.user_id);
    Ok("Tweet Removed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_user;
    use crate::middleware::auth::AuthenticatedUser;
    use crate::server::config::test_pool;

    fn caller(user_id: i64) -> AuthUser {
        AuthUser(AuthenticatedUser { user_id })
    }

    async fn seed_user(pool: &SqlitePool, username: &str, name: &str) -> i64 {
        create_user(pool, name, username, "hash", "other")
            .await
            .unwrap()
            .user_id
    }

    #[tokio::test]
    async fn test_tweet_detail_hides_existence() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "Alice").await;
        let bob = seed_user(&pool, "bob", "Bob").await;

        db::insert_tweet(&pool, bob, "secret").await.unwrap();

        // Alice does not follow Bob: existing and nonexistent tweet ids
        // produce the identical rejection.
        let existing = get_tweet(State(pool.clone()), caller(alice), Path(1)).await;
        let missing = get_tweet(State(pool.clone()), caller(alice), Path(999)).await;
        assert!(matches!(existing, Err(ApiError::Forbidden)));
        assert!(matches!(missing, Err(ApiError::Forbidden)));
    }

    #[tokio::test]
    async fn test_tweet_detail_visible_to_follower() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "Alice").await;
        let bob = seed_user(&pool, "bob", "Bob").await;

        db::insert_follow(&pool, alice, bob).await.unwrap();
        db::insert_tweet(&pool, bob, "hello world").await.unwrap();

        let Json(stats) = get_tweet(State(pool.clone()), caller(alice), Path(1))
            .await
            .unwrap();
        assert_eq!(stats.tweet, "hello world");
        assert_eq!(stats.likes, 0);
        assert_eq!(stats.replies, 0);
    }

    #[tokio::test]
    async fn test_replies_view_with_no_replies() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "Alice").await;
        let bob = seed_user(&pool, "bob", "Bob").await;

        db::insert_follow(&pool, alice, bob).await.unwrap();
        db::insert_tweet(&pool, bob, "no replies yet").await.unwrap();

        let Json(view) = get_tweet_replies(State(pool.clone()), caller(alice), Path(1))
            .await
            .unwrap();
        assert_eq!(view.tweet, "no replies yet");
        assert!(view.replies.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_own_tweets_round_trip() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "Alice").await;

        let created = create_tweet(
            State(pool.clone()),
            caller(alice),
            Json(CreateTweetRequest {
                tweet: "hello".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(created, "Created a Tweet");

        let Json(own) = get_own_tweets(State(pool.clone()), caller(alice))
            .await
            .unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].tweet, "hello");
        assert_eq!((own[0].likes, own[0].replies), (0, 0));
    }

    #[tokio::test]
    async fn test_delete_foreign_tweet_rejected() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "Alice").await;
        let bob = seed_user(&pool, "bob", "Bob").await;

        db::insert_tweet(&pool, bob, "bob's tweet").await.unwrap();

        let result = delete_tweet(State(pool.clone()), caller(alice), Path(1)).await;
        assert!(matches!(result, Err(ApiError::Forbidden)));

        // Still there for its owner
        let Json(own) = get_own_tweets(State(pool.clone()), caller(bob)).await.unwrap();
        assert_eq!(own.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_own_tweet() {
        let pool = test_pool().await;
        let alice = seed_user(&pool, "alice", "Alice").await;

        db::insert_tweet(&pool, alice, "short-lived").await.unwrap();

        let result = delete_tweet(State(pool.clone()), caller(alice), Path(1))
            .await
            .unwrap();
        assert_eq!(result, "Tweet Removed");

        let Json(own) = get_own_tweets(State(pool.clone()), caller(alice))
            .await
            .unwrap();
        assert!(own.is_empty());
    }
}
