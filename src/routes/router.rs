/**
 * Router Configuration
 *
 * This module assembles the full route table.
 *
 * # Route Groups
 *
 * - **Public**: `POST /register`, `POST /login`
 * - **Protected** (auth middleware): the feed, follow-list, tweet-scoped,
 *   and own-tweet endpoints
 *
 * The auth middleware runs before every protected handler, so handlers
 * can rely on `AuthUser` being present.
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{login, register};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;
use crate::tweets::handlers::{
    create_tweet, delete_tweet, get_feed, get_followers, get_following, get_own_tweets,
    get_tweet, get_tweet_likes, get_tweet_replies,
};

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// | Method | Path                  | Auth |
/// |--------|-----------------------|------|
/// | POST   | /register             | no   |
/// | POST   | /login                | no   |
/// | GET    | /user/tweets/feed     | yes  |
/// | GET    | /user/following       | yes  |
/// | GET    | /user/followers       | yes  |
/// | GET    | /user/tweets          | yes  |
/// | POST   | /user/tweets          | yes  |
/// | GET    | /tweets/{id}          | yes  |
/// | DELETE | /tweets/{id}          | yes  |
/// | GET    | /tweets/{id}/likes    | yes  |
/// | GET    | /tweets/{id}/replies  | yes  |
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/user/tweets/feed", get(get_feed))
        .route("/user/following", get(get_following))
        .route("/user/followers", get(get_followers))
        .route("/user/tweets", get(get_own_tweets).post(create_tweet))
        .route("/tweets/{tweet_id}", get(get_tweet).delete(delete_tweet))
        .route("/tweets/{tweet_id}/likes", get(get_tweet_likes))
        .route("/tweets/{tweet_id}/replies", get(get_tweet_replies))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
