/**
 * Social Graph Store Operations
 *
 * This module holds every query the query and mutation engines run
 * against the store: feed assembly, follow-list lookups, the tweet
 * visibility gate, per-tweet like/reply views, and tweet insert/delete.
 *
 * # Visibility
 *
 * A tweet is visible to a caller iff the caller follows its author or
 * authored it. `is_tweet_visible` is the single predicate every
 * tweet-scoped read goes through; a nonexistent tweet and an invisible
 * one both come back `false`, so callers cannot probe for existence.
 *
 * # Ordering
 *
 * Lists are returned in insertion order (by surrogate id) so results are
 * deterministic. The feed orders by timestamp descending with the id as
 * tie-break, since `datetime('now')` has one-second resolution.
 */

use sqlx::SqlitePool;

use crate::tweets::types::{FeedTweet, ReplyEntry, TweetStats};

/// Feed size: the four most recent tweets from followed users
const FEED_LIMIT: i64 = 4;

/// Fetch the caller's feed
///
/// Up to four most-recent tweets authored by users the caller follows,
/// newest first, each annotated with the author's handle.
pub async fn get_feed(pool: &SqlitePool, user_id: i64) -> Result<Vec<FeedTweet>, sqlx::Error> {
    sqlx::query_as::<_, FeedTweet>(
        r#"
        SELECT u.username, t.tweet, t.date_time
        FROM follows AS f
        JOIN tweets AS t ON t.user_id = f.followed_id
        JOIN users AS u ON u.user_id = t.user_id
        WHERE f.follower_id = ?
        ORDER BY t.date_time DESC, t.tweet_id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(FEED_LIMIT)
    .fetch_all(pool)
    .await
}

/// Display names of everyone the caller follows, in follow order
pub async fn get_following_names(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT u.name
        FROM follows AS f
        JOIN users AS u ON u.user_id = f.followed_id
        WHERE f.follower_id = ?
        ORDER BY f.follow_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Display names of everyone following the caller, in follow order
pub async fn get_follower_names(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT u.name
        FROM follows AS f
        JOIN users AS u ON u.user_id = f.follower_id
        WHERE f.followed_id = ?
        ORDER BY f.follow_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// The visibility gate shared by all tweet-scoped reads
///
/// Returns `true` iff the tweet exists and the caller follows its author
/// or authored it. A single filtered lookup; `false` deliberately
/// conflates "invisible" with "does not exist".
pub async fn is_tweet_visible(
    pool: &SqlitePool,
    user_id: i64,
    tweet_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1
            FROM tweets AS t
            WHERE t.tweet_id = ?
              AND (t.user_id = ?
                   OR EXISTS(SELECT 1 FROM follows AS f
                             WHERE f.follower_id = ? AND f.followed_id = t.user_id))
        )
        "#,
    )
    .bind(tweet_id)
    .bind(user_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Fetch a tweet with its like and reply counts
///
/// Visibility is the caller's concern; run `is_tweet_visible` first.
pub async fn get_tweet_stats(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Option<TweetStats>, sqlx::Error> {
    sqlx::query_as::<_, TweetStats>(
        r#"
        SELECT t.tweet,
               (SELECT COUNT(*) FROM likes WHERE tweet_id = t.tweet_id) AS likes,
               (SELECT COUNT(*) FROM replies WHERE tweet_id = t.tweet_id) AS replies,
               t.date_time
        FROM tweets AS t
        WHERE t.tweet_id = ?
        "#,
    )
    .bind(tweet_id)
    .fetch_optional(pool)
    .await
}

/// Fetch just a tweet's body, for the replies view
pub async fn get_tweet_body(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT tweet FROM tweets WHERE tweet_id = ?")
        .bind(tweet_id)
        .fetch_optional(pool)
        .await
}

/// Handles of users who liked a tweet, in like order
pub async fn get_tweet_likers(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT u.username
        FROM likes AS l
        JOIN users AS u ON u.user_id = l.user_id
        WHERE l.tweet_id = ?
        ORDER BY l.like_id
        "#,
    )
    .bind(tweet_id)
    .fetch_all(pool)
    .await
}

/// Replies to a tweet as {name, reply} pairs, in reply order
///
/// Fetched independently of the tweet itself, so zero replies is simply
/// an empty list.
pub async fn get_tweet_replies(
    pool: &SqlitePool,
    tweet_id: i64,
) -> Result<Vec<ReplyEntry>, sqlx::Error> {
    sqlx::query_as::<_, ReplyEntry>(
        r#"
        SELECT u.name, r.reply
        FROM replies AS r
        JOIN users AS u ON u.user_id = r.user_id
        WHERE r.tweet_id = ?
        ORDER BY r.reply_id
        "#,
    )
    .bind(tweet_id)
    .fetch_all(pool)
    .await
}

/// All of a user's own tweets with like/reply counts, in insertion order
pub async fn get_user_tweets(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<TweetStats>, sqlx::Error> {
    sqlx::query_as::<_, TweetStats>(
        r#"
        SELECT t.tweet,
               (SELECT COUNT(*) FROM likes WHERE tweet_id = t.tweet_id) AS likes,
               (SELECT COUNT(*) FROM replies WHERE tweet_id = t.tweet_id) AS replies,
               t.date_time
        FROM tweets AS t
        WHERE t.user_id = ?
        ORDER BY t.tweet_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Insert a tweet with a store-assigned timestamp
pub async fn insert_tweet(
    pool: &SqlitePool,
    user_id: i64,
    tweet: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO tweets (tweet, user_id, date_time) VALUES (?, ?, datetime('now'))")
        .bind(tweet)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a tweet, but only if the caller owns it
///
/// A single conditional delete checked by affected-row count, so there
/// is no window between an ownership check and the delete. Returns
/// `false` for both "not owned" and "no such tweet".
pub async fn delete_tweet_if_owned(
    pool: &SqlitePool,
    user_id: i64,
    tweet_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tweets WHERE tweet_id = ? AND user_id = ?")
        .bind(tweet_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Record a follow edge
///
/// The follow graph is managed outside the HTTP surface of this service;
/// this exists for graph population and for tests.
pub async fn insert_follow(
    pool: &SqlitePool,
    follower_id: i64,
    followed_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO follows (follower_id, followed_id) VALUES (?, ?)")
        .bind(follower_id)
        .bind(followed_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Record a like
///
/// Likes are read-only through the HTTP surface; this exists for graph
/// population and for tests.
pub async fn insert_like(
    pool: &SqlitePool,
    tweet_id: i64,
    user_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO likes (tweet_id, user_id) VALUES (?, ?)")
        .bind(tweet_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Record a reply
///
/// Replies are read-only through the HTTP surface; this exists for graph
/// population and for tests.
pub async fn insert_reply(
    pool: &SqlitePool,
    tweet_id: i64,
    user_id: i64,
    reply: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO replies (tweet_id, user_id, reply) VALUES (?, ?, ?)")
        .bind(tweet_id)
        .bind(user_id)
        .bind(reply)
        .execute(pool)
        .await?;
    Ok(())
}
