use chrono::{DateTime, Utc};

use super::Category;
use crate::error::ValidationError;
use crate::validate;

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
}

impl NewPost {
    /// Validate the fields of a new post, in declaration order.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: Option<String>,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();

        validate::post_title(Some(&title))?;
        validate::post_content(Some(&content))?;
        validate::post_summary(summary.as_deref())?;
        let category = validate::post_category(Some(category))?;

        Ok(Self {
            title,
            content,
            summary,
            category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: i32,
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Rebuild a post from a stored row. Values are trusted as-is.
    pub fn from_storage(
        id: i32,
        title: String,
        content: String,
        summary: Option<String>,
        category: Category,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            summary,
            category,
            created_at,
            updated_at,
        }
    }

    /// Build the stored form of a draft once storage has assigned an id.
    pub fn from_new(id: i32, new: NewPost, created_at: DateTime<Utc>) -> Self {
        Self::from_storage(
            id,
            new.title,
            new.content,
            new.summary,
            new.category,
            created_at,
            None,
        )
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate::post_title(Some(&title))?;
        self.title = title;
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        validate::post_content(Some(&content))?;
        self.content = content;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        validate::post_summary(summary.as_deref())?;
        self.summary = summary;
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = validate::post_category(Some(category))?;
        Ok(())
    }

    /// Mark the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
