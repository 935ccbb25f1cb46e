use aid_core::transcript::{Transcript, TranscriptLine};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLineVm {
    pub class: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub title: String,
    pub lines: Vec<SummaryLineVm>,
}

#[must_use]
pub fn map_summary(transcript: &Transcript) -> SummaryVm {
    let lines = transcript
        .lines()
        .iter()
        .map(|line| {
            let class = match line {
                TranscriptLine::Greeting(_) => "transcript-line transcript-greeting",
                TranscriptLine::Blank => "transcript-line transcript-blank",
                TranscriptLine::Step(_) => "transcript-line transcript-step",
                TranscriptLine::SignsHeader => "transcript-line transcript-header",
                TranscriptLine::Sign(_) => "transcript-line transcript-sign",
            };
            SummaryLineVm {
                class,
                text: line.to_string(),
            }
        })
        .collect();

    SummaryVm {
        title: transcript.title().to_string(),
        lines,
    }
}
