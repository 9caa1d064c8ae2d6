use serde::{Deserialize, Deserializer, Serialize};

// json-server assigns numeric ids; other deployments return strings.
// Normalize both to String at the deserialization boundary.
fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

fn opt_id_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(Option::<Raw>::deserialize(de)?.map(|raw| match raw {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    }))
}

/// A user record from the board service.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A post record from the board service.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "userId", default, deserialize_with = "opt_id_string")]
    pub user_id: Option<String>,
}

/// A comment record from the board service.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "postId", default, deserialize_with = "opt_id_string")]
    pub post_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

/// Creation payload for `POST /users/{id}/posts`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Creation payload for `POST /posts/{id}/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub name: String,
    pub body: String,
}

/// Creation response. The service echoes the stored record; the id is
/// the only field the gateway reads back.
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
}
