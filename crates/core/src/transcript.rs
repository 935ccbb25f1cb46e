use std::fmt;

use crate::model::Topic;
use crate::session::UserName;

/// One line of the chatbot summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Greeting(String),
    Blank,
    Step(String),
    SignsHeader,
    Sign(String),
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptLine::Greeting(text) => f.write_str(text),
            TranscriptLine::Blank => Ok(()),
            TranscriptLine::Step(step) => write!(f, "• {step}"),
            TranscriptLine::SignsHeader => f.write_str("⚠ Emergency signs:"),
            TranscriptLine::Sign(sign) => write!(f, "❗ {sign}"),
        }
    }
}

/// Read-only recap of a topic addressed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    title: String,
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    #[must_use]
    pub fn build(user: &UserName, topic: &Topic) -> Self {
        let mut lines = Vec::with_capacity(topic.step_count() + topic.emergency_signs().len() + 4);
        lines.push(TranscriptLine::Greeting(format!(
            "👋 Hello {}, here is your quick summary for {}:",
            user.as_str(),
            topic.name().to_lowercase()
        )));
        lines.push(TranscriptLine::Blank);
        lines.extend(topic.steps().iter().cloned().map(TranscriptLine::Step));
        lines.push(TranscriptLine::Blank);
        lines.push(TranscriptLine::SignsHeader);
        lines.extend(
            topic
                .emergency_signs()
                .iter()
                .cloned()
                .map(TranscriptLine::Sign),
        );

        Self {
            title: format!("{} — Chatbot Advice", topic.name()),
            lines,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
