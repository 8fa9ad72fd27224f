use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}

/// A book that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub name: String,
    pub author_id: i32,
}

impl NewBook {
    pub fn new(name: impl Into<String>, author_id: i32) -> Self {
        Self {
            name: name.into(),
            author_id,
        }
    }

    pub fn with_id(self, id: i32) -> Book {
        Book {
            id,
            name: self.name,
            author_id: self.author_id,
        }
    }
}
