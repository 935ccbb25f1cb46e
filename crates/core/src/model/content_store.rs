use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Topic, TopicId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("topic not found: {name}")]
    NotFound { name: String },

    #[error("content store must contain at least one topic")]
    Empty,

    #[error("duplicate topic: {name}")]
    DuplicateTopic { name: String },

    #[error("topic name cannot be empty")]
    EmptyName,

    #[error("topic {topic} has no steps")]
    NoSteps { topic: String },
}

//
// ─── STORE ─────────────────────────────────────────────────────────────────────
//

/// Read-only catalog of first-aid topics.
///
/// Topics keep the order they were given in; that order drives the main
/// menu. There are no mutating operations once the store is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    topics: Vec<Topic>,
}

// `new` rejects an empty topic list, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl ContentStore {
    /// Builds a store from an ordered list of topics.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Empty` for an empty list and
    /// `ContentError::DuplicateTopic` when two topics share a name.
    pub fn new(topics: Vec<Topic>) -> Result<Self, ContentError> {
        if topics.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut seen = HashSet::with_capacity(topics.len());
        for topic in &topics {
            if !seen.insert(topic.name()) {
                return Err(ContentError::DuplicateTopic {
                    name: topic.name().to_string(),
                });
            }
        }

        Ok(Self { topics })
    }

    /// Looks a topic up by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no topic has that name.
    pub fn lookup(&self, name: &str) -> Result<&Topic, ContentError> {
        self.id_of(name).map(|id| &self.topics[id.index()])
    }

    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no topic has that name.
    pub fn id_of(&self, name: &str) -> Result<TopicId, ContentError> {
        self.topics
            .iter()
            .position(|topic| topic.name() == name)
            .map(TopicId::new)
            .ok_or_else(|| ContentError::NotFound {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(id.index())
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(Topic::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }
}
