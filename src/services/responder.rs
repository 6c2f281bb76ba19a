use std::fmt;

use super::replies;

/// Inputs at least this many characters long skip the direct-answer rules.
const DIRECT_ANSWER_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Questions,
    Summarize,
    Creative,
    Advice,
}

impl Function {
    /// Fixed enumeration order. Also the tie-break order for "most used".
    pub const ALL: [Function; 4] = [
        Function::Questions,
        Function::Summarize,
        Function::Creative,
        Function::Advice,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Questions => "questions",
            Function::Summarize => "summarize",
            Function::Creative => "creative",
            Function::Advice => "advice",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Function::Questions => "Questions",
            Function::Summarize => "Summarize",
            Function::Creative => "Creative",
            Function::Advice => "Advice",
        }
    }

    /// Reply used when none of the function's rules match.
    pub fn fallback(self) -> &'static str {
        match self {
            Function::Questions => replies::QUESTION_FALLBACK,
            Function::Summarize => replies::SUMMARIZE_FALLBACK,
            Function::Creative => replies::CREATIVE_FALLBACK,
            Function::Advice => replies::DAILY_ROUTINES,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A matched rule. Each topic maps to exactly one canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    CapitalOfFrance,
    France,
    EiffelTower,
    EducationComparison,
    BriefSummary,
    MainPoints,
    ChallengesAndRecommendations,
    Story,
    Poem,
    PlotIdeas,
    StudyTips,
    Motivation,
}

impl Topic {
    pub fn reply(self) -> &'static str {
        use Topic::*;

        match self {
            CapitalOfFrance => replies::CAPITAL_OF_FRANCE,
            France => replies::FRANCE,
            EiffelTower => replies::EIFFEL_TOWER,
            EducationComparison => replies::EDUCATION_COMPARISON,
            BriefSummary => replies::BRIEF_SUMMARY,
            MainPoints => replies::MAIN_POINTS,
            ChallengesAndRecommendations => replies::ANALYTICAL_SUMMARY,
            Story => replies::DRAGON_STORY,
            Poem => replies::AUTUMN_POEM,
            PlotIdeas => replies::SCI_FI_PLOTS,
            StudyTips => replies::STUDY_TIPS,
            Motivation => replies::MOTIVATION,
        }
    }
}

/// Runs the function's rules in priority order. `None` means fallback.
pub fn detect_topic(function: Function, input: &str) -> Option<Topic> {
    let lower = input.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    match function {
        Function::Questions => {
            if input.chars().count() < DIRECT_ANSWER_MAX_LEN {
                if has("capital of france") || has("paris") {
                    Some(Topic::CapitalOfFrance)
                } else if has("france") {
                    Some(Topic::France)
                } else {
                    None
                }
            } else if has("explain") || has("significance") {
                has("eiffel tower").then_some(Topic::EiffelTower)
            } else if has("compare") && has("education") {
                (has("france") && has("germany")).then_some(Topic::EducationComparison)
            } else {
                None
            }
        }

        Function::Summarize => {
            if has("3 lines") || has("brief") {
                Some(Topic::BriefSummary)
            } else if has("points") || has("list") {
                Some(Topic::MainPoints)
            } else if has("challenges") || has("recommendations") {
                Some(Topic::ChallengesAndRecommendations)
            } else {
                None
            }
        }

        Function::Creative => {
            if has("story") {
                Some(Topic::Story)
            } else if has("poem") {
                Some(Topic::Poem)
            } else if has("idea") || has("plot") {
                Some(Topic::PlotIdeas)
            } else {
                None
            }
        }

        Function::Advice => {
            if has("study") || has("exam") {
                Some(Topic::StudyTips)
            } else if has("motivation") || has("project") {
                Some(Topic::Motivation)
            } else {
                None
            }
        }
    }
}

pub fn respond(function: Function, input: &str) -> &'static str {
    match detect_topic(function, input) {
        Some(topic) => topic.reply(),
        None => function.fallback(),
    }
}

pub fn answer_question(query: &str) -> &'static str {
    respond(Function::Questions, query)
}

pub fn summarize_text(text: &str) -> &'static str {
    respond(Function::Summarize, text)
}

pub fn generate_creative_content(prompt: &str) -> &'static str {
    respond(Function::Creative, prompt)
}

pub fn provide_advice(topic: &str) -> &'static str {
    respond(Function::Advice, topic)
}
