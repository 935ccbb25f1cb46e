use thiserror::Error;

use crate::model::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Please enter your name.")]
    Empty,
}

/// A trimmed, non-empty user name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// # Errors
    ///
    /// Returns `NameError::Empty` if the input is empty or whitespace-only.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Mutable progress through the wizard. Lives as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    user_name: Option<UserName>,
    current_topic: Option<TopicId>,
    current_step_index: usize,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&UserName> {
        self.user_name.as_ref()
    }

    #[must_use]
    pub fn current_topic(&self) -> Option<TopicId> {
        self.current_topic
    }

    #[must_use]
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub(crate) fn set_user_name(&mut self, name: UserName) {
        self.user_name = Some(name);
    }

    pub(crate) fn start_topic(&mut self, topic: TopicId) {
        self.current_topic = Some(topic);
        self.current_step_index = 0;
    }

    pub(crate) fn set_step_index(&mut self, index: usize) {
        self.current_step_index = index;
    }
}
