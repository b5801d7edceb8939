use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::validate;

/// A validated author that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    name: String,
    phone_number: Option<String>,
}

impl NewAuthor {
    /// Validate the fields of a new author.
    ///
    /// Name uniqueness needs storage and is checked when the author is created
    /// through [`crate::AuthorService`].
    pub fn new(
        name: impl Into<String>,
        phone_number: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate::author_name(Some(&name))?;
        validate::phone_number(phone_number.as_deref())?;

        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

/// Author entity - a stored author record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: i32,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Rebuild an author from a stored row. Values are trusted as-is.
    pub fn from_storage(
        id: i32,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    /// Build the stored form of a draft once storage has assigned an id.
    pub fn from_new(id: i32, new: NewAuthor, created_at: DateTime<Utc>) -> Self {
        Self::from_storage(id, new.name, new.phone_number, created_at, None)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate::author_name(Some(&name))?;
        self.name = name;
        Ok(())
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> Result<(), ValidationError> {
        validate::phone_number(phone_number.as_deref())?;
        self.phone_number = phone_number;
        Ok(())
    }

    /// Mark the record as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
