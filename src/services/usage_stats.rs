use serde::{Deserialize, Serialize};

use super::feedback::Feedback;
use super::responder::Function;

/// Per-function dispatch counts. Keys missing from a stats file default to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionUsage {
    pub questions: u64,
    pub summarize: u64,
    pub creative: u64,
    pub advice: u64,
}

impl FunctionUsage {
    pub fn get(&self, function: Function) -> u64 {
        match function {
            Function::Questions => self.questions,
            Function::Summarize => self.summarize,
            Function::Creative => self.creative,
            Function::Advice => self.advice,
        }
    }

    fn slot(&mut self, function: Function) -> &mut u64 {
        match function {
            Function::Questions => &mut self.questions,
            Function::Summarize => &mut self.summarize,
            Function::Creative => &mut self.creative,
            Function::Advice => &mut self.advice,
        }
    }

    pub fn increment(&mut self, function: Function) {
        let slot = self.slot(function);
        *slot = slot.saturating_add(1);
    }

    /// Counts in `Function::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Function, u64)> + '_ {
        Function::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    /// Highest count, earliest in `Function::ALL` on a tie.
    /// `None` until something has been dispatched.
    pub fn most_used(&self) -> Option<Function> {
        let mut best: Option<(Function, u64)> = None;
        for (function, count) in self.iter() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((function, count)),
            }
        }
        best.map(|(function, _)| function)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageStats {
    pub total_queries: u64,
    pub helpful_responses: u64,
    pub not_helpful_responses: u64,
    pub function_usage: FunctionUsage,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once per completed dispatch.
    pub fn record_query(&mut self, function: Function) {
        self.total_queries = self.total_queries.saturating_add(1);
        self.function_usage.increment(function);
    }

    pub fn record_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Helpful => {
                self.helpful_responses = self.helpful_responses.saturating_add(1)
            }
            Feedback::NotHelpful => {
                self.not_helpful_responses = self.not_helpful_responses.saturating_add(1)
            }
            Feedback::Skip => {}
        }
    }

    /// Counters near `u64::MAX` can come from disk; this one saturates.
    pub fn total_feedback(&self) -> u64 {
        self.helpful_responses
            .saturating_add(self.not_helpful_responses)
    }

    /// Percentage of helpful answers; 100 when nobody has voted yet.
    pub fn satisfaction_rate(&self) -> f64 {
        if self.total_feedback() == 0 {
            return 100.0;
        }
        let helpful = self.helpful_responses as f64;
        helpful / (helpful + self.not_helpful_responses as f64) * 100.0
    }

    pub fn most_used_function(&self) -> Option<Function> {
        self.function_usage.most_used()
    }
}
