use std::sync::Arc;

use async_graphql::{Context, InputObject, Object, Result, ID};

use board_client::{BoardClient, Comment, Post, User};

// --- GraphQL Enums ---

/// Declared in the schema but referenced by no resolver; registered
/// explicitly in `build_schema` so it still appears in the SDL.
#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

// --- Inputs ---

#[derive(InputObject)]
pub struct PaginationInput {
    pub page: i32,
    pub count: i32,
}

#[derive(InputObject)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

#[derive(InputObject)]
pub struct CommentInput {
    pub name: String,
    pub body: String,
}

#[derive(InputObject)]
pub struct PostIdInput {
    pub post_id: String,
}

// --- Output wrappers ---

pub struct GqlUser(pub User);

#[Object(name = "User")]
impl GqlUser {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }
    async fn name(&self) -> &str {
        &self.0.name
    }
    async fn email(&self) -> &str {
        &self.0.email
    }

    /// Lazily resolved: one downstream call per user, only when the
    /// field is requested.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<GqlPost>> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let posts = client.posts_for_user(&self.0.id).await?;
        Ok(posts.into_iter().map(GqlPost).collect())
    }
}

pub struct GqlPost(pub Post);

#[Object(name = "Post")]
impl GqlPost {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }
    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }
    async fn body(&self) -> Option<&str> {
        self.0.body.as_deref()
    }

    /// Lazily resolved: one downstream call per post, only when the
    /// field is requested.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<GqlComment>> {
        let client = ctx.data_unchecked::<Arc<BoardClient>>();
        let comments = client.comments_for_post(&self.0.id).await?;
        Ok(comments.into_iter().map(GqlComment).collect())
    }
}

pub struct GqlComment(pub Comment);

#[Object(name = "Comment")]
impl GqlComment {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }
    async fn post_id(&self) -> Option<ID> {
        self.0.post_id.clone().map(ID)
    }
    async fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }
    async fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }
    async fn body(&self) -> Option<&str> {
        self.0.body.as_deref()
    }
}
