//! Tweets and Social-Graph Queries
//!
//! The core of the service: the query engine answering the feed,
//! follow-list, and tweet-scoped views for an authenticated caller, plus
//! tweet creation and deletion.
//!
//! # Module Structure
//!
//! ```text
//! tweets/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Row and response types
//! ├── db.rs       - Store queries (feed, visibility gate, counts, ...)
//! └── handlers.rs - Protected HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{
    create_tweet, delete_tweet, get_feed, get_followers, get_following, get_own_tweets,
    get_tweet, get_tweet_likes, get_tweet_replies,
};
