// src/routes/session.rs
use std::io::Write;

use tokio::io::AsyncBufRead;
use tracing::{debug, error, info, warn};

use super::console::Console;
use super::menu::MenuChoice;
use crate::{
    config::AssistantConfig,
    error::SessionError,
    message::{self, FEEDBACK_RULE, HEADER_RULE, MENU_RULE},
    services::{
        feedback::Feedback,
        responder::{self, Function},
    },
    state::AppState,
};

/// How a session ended. All of them leave the stats persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exited,
    Interrupted,
    InputClosed,
}

enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    state: AppState,
    config: AssistantConfig,
    console: Console<R, W>,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(state: AppState, config: AssistantConfig, console: Console<R, W>) -> Self {
        Self { state, config, console }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_parts(self) -> (AppState, Console<R, W>) {
        (self.state, self.console)
    }

    /// Runs the menu until exit, interrupt or end of input, then saves.
    pub async fn run(&mut self) -> SessionEnd {
        let mut flow = self.start().await;

        loop {
            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.farewell().await;
                    return SessionEnd::Exited;
                }
                Err(SessionError::Interrupted) => {
                    self.goodbye().await;
                    return SessionEnd::Interrupted;
                }
                Err(SessionError::InputClosed) => {
                    self.goodbye().await;
                    return SessionEnd::InputClosed;
                }
                Err(SessionError::Io(e)) => {
                    error!(error = %e, "console error");
                    let _ = writeln!(self.console.out(), "\n❌ An error occurred: {e}");
                    let _ = writeln!(self.console.out(), "🔄 Continuing...");
                    if let Err(e) = self.console.pause(self.config.error_pause).await {
                        flow = Err(e);
                        continue;
                    }
                }
            }

            flow = self.step().await;
        }
    }

    async fn start(&mut self) -> Result<Flow, SessionError> {
        writeln!(self.console.out(), "🚀 Starting AI Assistant...")?;
        self.console.pause(self.config.startup_pause).await?;
        Ok(Flow::Continue)
    }

    async fn step(&mut self) -> Result<Flow, SessionError> {
        self.clear_screen()?;
        self.print_header()?;
        self.print_menu()?;

        write!(self.console.out(), "\n🎯 Select a function (1-6): ")?;
        let raw = self.console.read_line().await?;

        match raw.parse::<MenuChoice>() {
            Ok(MenuChoice::Dispatch(function)) => self.dispatch(function).await?,
            Ok(MenuChoice::Statistics) => self.show_statistics().await?,
            Ok(MenuChoice::Exit) => return Ok(Flow::Exit),
            Err(e) => {
                debug!(error = %e, "menu input rejected");
                writeln!(self.console.out(), "{}", message::INVALID_CHOICE)?;
                self.console.pause(self.config.invalid_choice_pause).await?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn dispatch(&mut self, function: Function) -> Result<(), SessionError> {
        self.clear_screen()?;
        self.print_header()?;
        writeln!(self.console.out(), "\n{}", message::mode_title(function))?;
        self.show_sample_prompts(function)?;

        writeln!(self.console.out(), "\n💬 {}", message::input_prompt(function))?;
        write!(self.console.out(), ">> ")?;
        let query = self.console.read_line().await?;
        if query.is_empty() {
            return Ok(());
        }

        self.simulate_processing().await?;

        let reply = responder::respond(function, &query);
        info!(
            %function,
            topic = ?responder::detect_topic(function, &query),
            "dispatched query"
        );

        let out = self.console.out();
        writeln!(out, "\n{HEADER_RULE}")?;
        writeln!(out, "🤖 AI RESPONSE:")?;
        writeln!(out, "{HEADER_RULE}")?;
        writeln!(out, "{reply}")?;

        self.state.stats.record_query(function);
        self.collect_feedback().await?;
        self.wait_for_enter().await
    }

    /// Re-prompts until one of the three choices is entered.
    async fn collect_feedback(&mut self) -> Result<Feedback, SessionError> {
        let out = self.console.out();
        writeln!(out, "\n{FEEDBACK_RULE}")?;
        writeln!(out, "📝 FEEDBACK REQUEST")?;
        writeln!(out, "{FEEDBACK_RULE}")?;
        writeln!(out, "Was this response helpful?")?;
        writeln!(out, "1. 👍 Yes, very helpful!")?;
        writeln!(out, "2. 👎 Not quite what I needed")?;
        writeln!(out, "3. ➡️  Skip feedback")?;

        let feedback = loop {
            write!(self.console.out(), "\nYour choice (1-3): ")?;
            let raw = self.console.read_line().await?;
            match raw.parse::<Feedback>() {
                Ok(feedback) => break feedback,
                Err(e) => {
                    debug!(error = %e, "feedback input rejected");
                    writeln!(self.console.out(), "{}", message::INVALID_FEEDBACK)?;
                }
            }
        };

        self.state.stats.record_feedback(feedback);
        debug!(feedback = feedback.label(), "feedback recorded");

        match feedback {
            Feedback::Helpful => {
                writeln!(self.console.out(), "\n🎉 Thank you! I'm glad I could help!")?;
                writeln!(self.console.out(), "💡 Feel free to ask me anything else!")?;
            }
            Feedback::NotHelpful => {
                writeln!(self.console.out(), "\n📝 Thank you for the feedback!")?;
                write!(
                    self.console.out(),
                    "💭 What specific information were you looking for? "
                )?;
                // Echoed back only; never stored.
                let note = self.console.read_line().await?;
                writeln!(
                    self.console.out(),
                    "📌 Noted: '{note}' - I'll try to improve!"
                )?;
            }
            Feedback::Skip => {
                writeln!(
                    self.console.out(),
                    "\n✅ No problem! Feel free to continue using the assistant."
                )?;
            }
        }

        Ok(feedback)
    }

    async fn show_statistics(&mut self) -> Result<(), SessionError> {
        let stats = &self.state.stats;
        let out = self.console.out();

        writeln!(out, "\n{FEEDBACK_RULE}")?;
        writeln!(out, "📊 AI ASSISTANT STATISTICS")?;
        writeln!(out, "{FEEDBACK_RULE}")?;
        writeln!(out, "📈 Total Queries: {}", stats.total_queries)?;
        writeln!(out, "👍 Helpful Responses: {}", stats.helpful_responses)?;
        writeln!(out, "👎 Not Helpful: {}", stats.not_helpful_responses)?;
        writeln!(out, "😊 Satisfaction Rate: {:.1}%", stats.satisfaction_rate())?;

        writeln!(out, "\n🎯 FUNCTION USAGE:")?;
        for (function, count) in stats.function_usage.iter() {
            writeln!(out, "   {}: {count} times", function.title())?;
        }

        if let Some(function) = stats.most_used_function() {
            writeln!(out, "\n🏆 Most Used Function: {}", function.title())?;
        }

        self.wait_for_enter().await
    }

    async fn simulate_processing(&mut self) -> Result<(), SessionError> {
        write!(self.console.out(), "\n🔄 Processing your request")?;
        for _ in 0..self.config.processing_steps {
            self.console.pause(self.config.processing_step_delay).await?;
            write!(self.console.out(), ".")?;
        }
        self.console.pause(self.config.processing_final_delay).await?;
        writeln!(self.console.out(), " Done!")?;
        Ok(())
    }

    async fn wait_for_enter(&mut self) -> Result<(), SessionError> {
        write!(self.console.out(), "\n{}", message::PRESS_ENTER)?;
        self.console.read_line().await?;
        Ok(())
    }

    async fn farewell(&mut self) {
        let _ = self.clear_screen();
        let _ = writeln!(self.console.out(), "💾 Saving your session data...");
        self.persist().await;

        let out = self.console.out();
        let _ = writeln!(out, "\n🎉 Thank you for using AI Assistant!");
        let _ = writeln!(
            out,
            "📚 This project demonstrates various prompt engineering techniques:"
        );
        for line in message::FAREWELL_TECHNIQUES {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "\n👋 Goodbye!");
        let _ = out.flush();
    }

    async fn goodbye(&mut self) {
        let _ = writeln!(
            self.console.out(),
            "\n\n👋 Goodbye! Thanks for using AI Assistant!"
        );
        self.persist().await;
        let _ = self.console.out().flush();
    }

    /// Save failures are reported and otherwise ignored.
    async fn persist(&mut self) {
        match self.state.store.save(&self.state.stats).await {
            Ok(()) => info!(
                path = %self.state.store.path().display(),
                total_queries = self.state.stats.total_queries,
                "stats saved"
            ),
            Err(e) => {
                warn!(error = %e, "stats not saved");
                let _ = writeln!(self.console.out(), "⚠️  Could not save stats: {e}");
            }
        }
    }

    fn clear_screen(&mut self) -> std::io::Result<()> {
        if self.config.clear_screen {
            self.console.clear()?;
        }
        Ok(())
    }

    fn print_header(&mut self) -> std::io::Result<()> {
        let out = self.console.out();
        writeln!(out, "{HEADER_RULE}")?;
        writeln!(out, "{}", message::BANNER_TITLE)?;
        writeln!(out, "{HEADER_RULE}")?;
        writeln!(out, "{}", message::BANNER_TAGLINE)?;
        writeln!(out, "{HEADER_RULE}")
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        let out = self.console.out();
        writeln!(out, "\n📋 AVAILABLE FUNCTIONS:")?;
        for item in message::MENU_ITEMS {
            writeln!(out, "{item}")?;
        }
        writeln!(out, "{MENU_RULE}")
    }

    fn show_sample_prompts(&mut self, function: Function) -> std::io::Result<()> {
        let out = self.console.out();
        writeln!(
            out,
            "\n💫 SAMPLE PROMPTS FOR {}:",
            function.name().to_uppercase()
        )?;
        writeln!(out, "{MENU_RULE}")?;
        for (i, prompt) in message::sample_prompts(function).iter().enumerate() {
            writeln!(out, "{}. {prompt}", i + 1)?;
        }
        writeln!(out, "{MENU_RULE}")
    }
}
