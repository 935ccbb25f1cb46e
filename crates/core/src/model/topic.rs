use std::path::{Path, PathBuf};

use crate::model::ContentError;

/// One first-aid scenario: its procedure, illustration and warning signs.
///
/// Step order is the order the procedure must be followed in and is kept
/// exactly as given. Emergency signs keep their source order for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    steps: Vec<String>,
    image_path: PathBuf,
    emergency_signs: Vec<String>,
}

impl Topic {
    /// Creates a new Topic.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyName` if the name is blank and
    /// `ContentError::NoSteps` if the procedure has no steps.
    pub fn new(
        name: impl Into<String>,
        steps: Vec<String>,
        image_path: impl Into<PathBuf>,
        emergency_signs: Vec<String>,
    ) -> Result<Self, ContentError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ContentError::EmptyName);
        }
        if steps.is_empty() {
            return Err(ContentError::NoSteps { topic: name });
        }

        Ok(Self {
            name,
            steps,
            image_path: image_path.into(),
            emergency_signs,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Instruction at `index`, if it exists.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(String::as_str)
    }

    /// Always at least one.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn last_step_index(&self) -> usize {
        self.steps.len() - 1
    }

    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    #[must_use]
    pub fn emergency_signs(&self) -> &[String] {
        &self.emergency_signs
    }
}
