use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Error, Object, Result, Schema};

use board_client::BoardClient;

use super::mutations::MutationRoot;
use super::types::{Gender, GqlComment, GqlPost, GqlUser, PaginationInput};

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Declared but never resolved to a value; there is no auth layer
    /// to derive an identity from.
    async fn me(&self) -> Option<String> {
        None
    }

    /// Declared `User!` with no identity to back it, so every request
    /// fails with an explicit error.
    async fn get_profile(&self) -> Result<GqlUser> {
        Err(Error::new("no authenticated profile"))
    }

    /// Page of users. The pagination values pass through to the
    /// downstream `_limit`/`_page` query parameters verbatim.
    async fn users(
        &self,
        ctx: &Context<'_>,
        pagination: PaginationInput,
    ) -> Result<Vec<GqlUser>> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let users = client.list_users(pagination.page, pagination.count).await?;
        Ok(users.into_iter().map(GqlUser).collect())
    }

    /// All posts, comments unresolved until requested.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<GqlPost>> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let posts = client.list_posts().await?;
        Ok(posts.into_iter().map(GqlPost).collect())
    }

    /// All comments.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<GqlComment>> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let comments = client.list_comments().await?;
        Ok(comments.into_iter().map(GqlComment).collect())
    }

    /// A single user by id, posts unresolved until requested.
    async fn get_user_by_id(&self, ctx: &Context<'_>, user_id: String) -> Result<GqlUser> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let user = client.get_user(&user_id).await?;
        Ok(GqlUser(user))
    }

    /// A single post by id.
    async fn get_post_by_id(&self, ctx: &Context<'_>, post_id: String) -> Result<GqlPost> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let post = client.get_post(&post_id).await?;
        Ok(GqlPost(post))
    }
}

pub fn build_schema(client: Arc<BoardClient>) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .register_output_type::<Gender>()
        .data(client)
        .finish()
}
