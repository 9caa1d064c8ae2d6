pub mod error;
pub mod types;

pub use error::{BoardError, Result};
pub use types::{Comment, Created, NewComment, NewPost, Post, User};

use serde::de::DeserializeOwned;

/// REST client for the downstream board service. One method per endpoint,
/// one HTTP round-trip per call. No retries, no backoff, no timeout
/// override beyond reqwest's transport defaults — failures propagate
/// unchanged to the caller.
pub struct BoardClient {
    client: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch a single user: `GET /users/{id}`.
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        tracing::debug!(%url, "Fetching user");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    /// Fetch a page of users: `GET /users?_limit={count}&_page={page}`.
    /// The page and count values pass through verbatim; the returned
    /// collection is not re-validated against them.
    pub async fn list_users(&self, page: i32, count: i32) -> Result<Vec<User>> {
        let url = format!("{}/users", self.base_url);
        tracing::debug!(%url, page, count, "Listing users");
        let resp = self
            .client
            .get(&url)
            .query(&[("_limit", count), ("_page", page)])
            .send()
            .await?;
        decode(resp).await
    }

    /// Fetch a user's posts: `GET /users/{id}/posts`.
    pub async fn posts_for_user(&self, user_id: &str) -> Result<Vec<Post>> {
        let url = format!("{}/users/{}/posts", self.base_url, user_id);
        tracing::debug!(%url, "Fetching posts for user");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    /// Fetch all posts: `GET /posts`.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let url = format!("{}/posts", self.base_url);
        tracing::debug!(%url, "Listing posts");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    /// Fetch a single post: `GET /posts/{id}`.
    pub async fn get_post(&self, post_id: &str) -> Result<Post> {
        let url = format!("{}/posts/{}", self.base_url, post_id);
        tracing::debug!(%url, "Fetching post");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    /// Fetch a post's comments: `GET /posts/{id}/comments`.
    pub async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        let url = format!("{}/posts/{}/comments", self.base_url, post_id);
        tracing::debug!(%url, "Fetching comments for post");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    /// Fetch all comments: `GET /comments`.
    pub async fn list_comments(&self) -> Result<Vec<Comment>> {
        let url = format!("{}/comments", self.base_url);
        tracing::debug!(%url, "Listing comments");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    /// Create a post under a user: `POST /users/{id}/posts` with body
    /// `{"data": {title, body}}`.
    pub async fn create_post(&self, user_id: &str, post: &NewPost) -> Result<Created> {
        let url = format!("{}/users/{}/posts", self.base_url, user_id);
        tracing::info!(%url, title = %post.title, "Creating post");
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "data": post }))
            .send()
            .await?;
        decode(resp).await
    }

    /// Create a comment under a post: `POST /posts/{id}/comments` with
    /// body `{"data": {name, body}}`.
    pub async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Created> {
        let url = format!("{}/posts/{}/comments", self.base_url, post_id);
        tracing::info!(%url, "Creating comment");
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "data": comment }))
            .send()
            .await?;
        decode(resp).await
    }
}

/// Check the status, then decode the body through typed deserialization.
/// A non-success status becomes `BoardError::Api`; a shape mismatch
/// becomes `BoardError::Parse` rather than trusting the payload.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(BoardError::Api {
            status: status.as_u16(),
            message,
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
