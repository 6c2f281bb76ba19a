// src/message.rs
use crate::services::responder::Function;

pub const HEADER_RULE: &str =
    "============================================================";
pub const MENU_RULE: &str = "----------------------------------------";
pub const FEEDBACK_RULE: &str = "==================================================";

pub const BANNER_TITLE: &str = "🤖 AI ASSISTANT - PROMPT ENGINEERING PROJECT";
pub const BANNER_TAGLINE: &str = "Your Intelligent Prompt Engineering Companion";

pub const MENU_ITEMS: [&str; 6] = [
    "1. ❓ Answer Questions",
    "2. 📝 Summarize Text",
    "3. 🎨 Generate Creative Content",
    "4. 💡 Provide Advice",
    "5. 📊 View Statistics",
    "6. 🚪 Exit",
];

pub const INVALID_CHOICE: &str = "❌ Invalid choice. Please select 1-6.";
pub const INVALID_FEEDBACK: &str = "❌ Please enter 1, 2, or 3.";
pub const PRESS_ENTER: &str = "📱 Press Enter to continue...";

pub const FAREWELL_TECHNIQUES: [&str; 4] = [
    "   • Different response styles (direct, explanatory, comparative)",
    "   • Structured output formatting",
    "   • Context-aware responses",
    "   • User feedback integration",
];

/// Heading printed above the sample prompts of each mode.
pub fn mode_title(function: Function) -> &'static str {
    match function {
        Function::Questions => "❓ QUESTION ANSWERING MODE",
        Function::Summarize => "📝 TEXT SUMMARIZATION MODE",
        Function::Creative => "🎨 CREATIVE CONTENT GENERATION MODE",
        Function::Advice => "💡 ADVICE PROVISION MODE",
    }
}

pub fn input_prompt(function: Function) -> &'static str {
    match function {
        Function::Questions => "What would you like to know?",
        Function::Summarize => "Enter your text or summarization request:",
        Function::Creative => "What creative content would you like me to generate?",
        Function::Advice => "What advice topic can I help you with?",
    }
}

pub fn sample_prompts(function: Function) -> &'static [&'static str] {
    match function {
        Function::Questions => &[
            "What is the capital of France?",
            "Can you explain the historical significance of the Eiffel Tower in Paris?",
            "Compare the educational systems of France and Germany in 5 key points.",
        ],
        Function::Summarize => &[
            "Summarize the following article in 3 lines: [Insert your text here]",
            "Extract and list the 5 main points from this passage: [Insert your text here]",
            "Provide a summary focusing only on challenges and recommendations: [Insert your text here]",
        ],
        Function::Creative => &[
            "Write a short story about a dragon who learns to live peacefully with humans.",
            "Compose a four-line poem about the beauty of autumn evenings.",
            "Suggest 3 unique science fiction novel plots involving space exploration and AI.",
        ],
        Function::Advice => &[
            "Give me 5 effective study tips for preparing for exams.",
            "Suggest ways to stay motivated while working on long projects.",
            "Provide daily routines that can improve mental health and productivity.",
        ],
    }
}
