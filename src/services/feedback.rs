use std::str::FromStr;

use crate::error::FeedbackError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Helpful,
    NotHelpful,
    Skip,
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Feedback::Helpful),
            "2" => Ok(Feedback::NotHelpful),
            "3" => Ok(Feedback::Skip),
            other => Err(FeedbackError::InvalidChoice(other.to_string())),
        }
    }
}

impl Feedback {
    pub fn label(self) -> &'static str {
        match self {
            Feedback::Helpful => "helpful",
            Feedback::NotHelpful => "not_helpful",
            Feedback::Skip => "skip",
        }
    }
}
