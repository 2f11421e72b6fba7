use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Author of a post. Only the two name fields are known, anything else the
/// client sends is kept as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Author {
            first_name: first_name.into(),
            last_name: last_name.into(),
            extra: Map::new(),
        }
    }

    /// "firstName lastName", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A blog post as stored in the `blogposts` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: bson::DateTime,
}

impl BlogPost {
    /// The only shape of a post that leaves the service.
    pub fn public_view(&self) -> BlogPostView {
        BlogPostView {
            id: self.id.to_hex(),
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.full_name(),
            created: self.created.to_chrono(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlogPostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

/// Fields a client may set when creating a post. `id` and `created` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// Whitelisted partial update. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
    }
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

#[derive(Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(req: UpdatePostRequest) -> Self {
        PostUpdate {
            title: req.title,
            content: req.content,
            author: req.author,
        }
    }
}
