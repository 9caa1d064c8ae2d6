use std::sync::Arc;

use async_graphql::{Context, Error, Object, Result, SimpleObject, ID};
use tracing::info;

use board_client::{BoardClient, NewComment, NewPost};

use super::types::{CommentInput, PostIdInput, PostInput};

/// Every created post is attributed to this user. The downstream API
/// offers no way to pick one without an auth layer, which this gateway
/// does not have.
const CREATE_POST_USER_ID: &str = "1";

pub struct MutationRoot;

// --- Mutation result types ---

#[derive(SimpleObject)]
pub struct CreatePostResponse {
    message: String,
    id: ID,
}

#[derive(SimpleObject)]
pub struct CreateCommentResponse {
    message: String,
    id: ID,
}

#[Object]
impl MutationRoot {
    /// Create a post under the fixed target user. One downstream call;
    /// on failure the whole mutation fails, nothing to roll back.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        data: Option<PostInput>,
    ) -> Result<CreatePostResponse> {
        let data = data.ok_or_else(|| Error::new("data is required"))?;
        let client = ctx.data_unchecked::<Arc<BoardClient>>();

        let created = client
            .create_post(
                CREATE_POST_USER_ID,
                &NewPost {
                    title: data.title,
                    body: data.body,
                },
            )
            .await?;

        info!(id = %created.id, "Post created");
        Ok(CreatePostResponse {
            message: "post created successfully".to_string(),
            id: ID(created.id),
        })
    }

    /// Create a comment under the post named by the `postId` argument.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: Option<CommentInput>,
        post_id: Option<PostIdInput>,
    ) -> Result<CreateCommentResponse> {
        let data = data.ok_or_else(|| Error::new("data is required"))?;
        let post_id = post_id.ok_or_else(|| Error::new("postId is required"))?;
        let client = ctx.data_unchecked::<Arc<BoardClient>>();

        let created = client
            .create_comment(
                &post_id.post_id,
                &NewComment {
                    name: data.name,
                    body: data.body,
                },
            )
            .await?;

        info!(id = %created.id, post_id = %post_id.post_id, "Comment created");
        Ok(CreateCommentResponse {
            message: "Comment created successfully".to_string(),
            id: ID(created.id),
        })
    }
}
