use std::path::Path;
use std::time::Duration;

use prompt_assistant::config::AssistantConfig;
use prompt_assistant::message;
use prompt_assistant::routes::{Console, Session, SessionEnd};
use prompt_assistant::services::replies;
use prompt_assistant::services::stats_store::StatsStore;
use prompt_assistant::services::usage_stats::{FunctionUsage, UsageStats};
use prompt_assistant::state::AppState;
use tempfile::tempdir;
use tokio::io::{AsyncWriteExt, BufReader};

async fn run_script(stats_path: &Path, stats: UsageStats, script: &str) -> (SessionEnd, AppState, String) {
    let store = StatsStore::new(stats_path);
    let config = AssistantConfig::instant(stats_path);
    let console = Console::uninterruptible(script.as_bytes(), Vec::new());

    let mut session = Session::new(AppState::new(stats, store), config, console);
    let end = session.run().await;
    let (state, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    (end, state, output)
}

#[tokio::test]
async fn test_capital_of_france_question() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.json");

    let (end, state, output) = run_script(
        &path,
        UsageStats::default(),
        "1\nWhat is the capital of France?\n3\n\n6\n",
    )
    .await;

    assert_eq!(end, SessionEnd::Exited);
    assert!(output.contains(replies::CAPITAL_OF_FRANCE));
    assert!(output.contains("Processing your request... Done!"));
    assert!(output.contains("Goodbye!"));
    assert_eq!(state.stats.total_queries, 1);
    assert_eq!(state.stats.function_usage.questions, 1);
    assert_eq!(state.stats.helpful_responses, 0);
    assert_eq!(state.stats.not_helpful_responses, 0);

    // Persisted on exit.
    let saved = StatsStore::new(&path).load().await.unwrap();
    assert_eq!(saved, state.stats);
}

#[tokio::test]
async fn test_unknown_question_gets_fallback() {
    let dir = tempdir().unwrap();
    let (_, state, output) = run_script(
        &dir.path().join("stats.json"),
        UsageStats::default(),
        "1\nbanana\n3\n\n6\n",
    )
    .await;

    assert!(output.contains(replies::QUESTION_FALLBACK));
    assert!(!output.contains(replies::CAPITAL_OF_FRANCE));
    assert_eq!(state.stats.total_queries, 1);
}

#[tokio::test]
async fn test_invalid_menu_choice_changes_nothing() {
    let dir = tempdir().unwrap();
    let before = UsageStats {
        total_queries: 4,
        helpful_responses: 2,
        not_helpful_responses: 1,
        function_usage: FunctionUsage {
            questions: 1,
            summarize: 1,
            creative: 1,
            advice: 1,
        },
    };

    let (end, state, output) =
        run_script(&dir.path().join("stats.json"), before.clone(), "9\n6\n").await;

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(state.stats, before);
    assert!(output.contains(message::INVALID_CHOICE));
    // The menu is shown again after the rejection.
    assert_eq!(output.matches("AVAILABLE FUNCTIONS").count(), 2);
}

#[tokio::test]
async fn test_feedback_reprompts_until_valid() {
    let dir = tempdir().unwrap();
    let (_, state, output) = run_script(
        &dir.path().join("stats.json"),
        UsageStats::default(),
        "2\nSummarize this in 3 lines\nmaybe\n\n1\n\n6\n",
    )
    .await;

    assert!(output.contains(replies::BRIEF_SUMMARY));
    assert_eq!(output.matches(message::INVALID_FEEDBACK).count(), 2);
    assert!(output.contains("Thank you! I'm glad I could help!"));
    assert_eq!(state.stats.helpful_responses, 1);
    assert_eq!(state.stats.function_usage.summarize, 1);
}

#[tokio::test]
async fn test_not_helpful_echoes_note() {
    let dir = tempdir().unwrap();
    let (_, state, output) = run_script(
        &dir.path().join("stats.json"),
        UsageStats::default(),
        "4\nstudy tips please\n2\nmore about sleep\n\n6\n",
    )
    .await;

    assert!(output.contains(replies::STUDY_TIPS));
    assert!(output.contains("📌 Noted: 'more about sleep' - I'll try to improve!"));
    assert_eq!(state.stats.not_helpful_responses, 1);
    assert_eq!(state.stats.function_usage.advice, 1);
}

#[tokio::test]
async fn test_empty_query_is_not_dispatched() {
    let dir = tempdir().unwrap();
    let (_, state, output) = run_script(
        &dir.path().join("stats.json"),
        UsageStats::default(),
        "3\n\n6\n",
    )
    .await;

    assert!(output.contains("CREATIVE CONTENT GENERATION MODE"));
    assert!(!output.contains("AI RESPONSE"));
    assert_eq!(state.stats, UsageStats::default());
}

#[tokio::test]
async fn test_statistics_screen() {
    let dir = tempdir().unwrap();
    let stats = UsageStats {
        total_queries: 8,
        helpful_responses: 3,
        not_helpful_responses: 1,
        function_usage: FunctionUsage {
            questions: 2,
            summarize: 0,
            creative: 3,
            advice: 3,
        },
    };

    let (_, state, output) =
        run_script(&dir.path().join("stats.json"), stats.clone(), "5\n\n6\n").await;

    assert!(output.contains("📈 Total Queries: 8"));
    assert!(output.contains("😊 Satisfaction Rate: 75.0%"));
    assert!(output.contains("   Summarize: 0 times"));
    assert!(output.contains("🏆 Most Used Function: Creative"));
    assert_eq!(state.stats, stats);
}

#[tokio::test]
async fn test_statistics_without_usage() {
    let dir = tempdir().unwrap();
    let (_, _, output) = run_script(
        &dir.path().join("stats.json"),
        UsageStats::default(),
        "5\n\n6\n",
    )
    .await;

    assert!(output.contains("😊 Satisfaction Rate: 100.0%"));
    assert!(!output.contains("Most Used Function"));
}

#[tokio::test]
async fn test_end_of_input_still_saves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.json");

    // Input ends while the feedback prompt is waiting.
    let (end, _, _) = run_script(&path, UsageStats::default(), "1\nParis\n").await;

    assert_eq!(end, SessionEnd::InputClosed);
    let saved = StatsStore::new(&path).load().await.unwrap();
    assert_eq!(saved.total_queries, 1);
    assert_eq!(saved.function_usage.questions, 1);
}

#[tokio::test]
async fn test_unwritable_stats_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("stats.json");

    let (end, _, output) = run_script(&path, UsageStats::default(), "6\n").await;

    assert_eq!(end, SessionEnd::Exited);
    assert!(output.contains("Could not save stats"));
    assert!(output.contains("Goodbye!"));
}

#[tokio::test(start_paused = true)]
async fn test_interrupt_saves_before_exit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.json");

    let (mut keyboard, input) = tokio::io::duplex(1024);
    keyboard
        .write_all(b"3\nWrite a poem about rain\n1\n\n")
        .await
        .unwrap();

    // Fires once the session is idle at the next menu prompt.
    let interrupt = tokio::time::sleep(Duration::from_secs(60));
    let console = Console::new(BufReader::new(input), Vec::new(), interrupt);
    let store = StatsStore::new(&path);
    let mut session = Session::new(
        AppState::new(UsageStats::default(), store),
        AssistantConfig::instant(&path),
        console,
    );

    let end = session.run().await;
    assert_eq!(end, SessionEnd::Interrupted);
    assert_eq!(session.state().stats.function_usage.creative, 1);
    assert_eq!(session.state().stats.helpful_responses, 1);

    let (_, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains(replies::AUTUMN_POEM));
    assert!(output.contains("Thanks for using AI Assistant!"));

    let saved = StatsStore::new(&path).load().await.unwrap();
    assert_eq!(saved.total_queries, 1);
    assert_eq!(saved.helpful_responses, 1);
    drop(keyboard);
}

#[tokio::test]
async fn test_saturated_stats_from_disk_keep_working() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stats.json");
    tokio::fs::write(
        &path,
        r#"{"total_queries": 18446744073709551615, "helpful_responses": 18446744073709551615, "not_helpful_responses": 1}"#,
    )
    .await
    .unwrap();
    let loaded = StatsStore::new(&path).load().await.unwrap();

    let (end, state, output) =
        run_script(&path, loaded, "5\n\n1\nbanana\n1\n\n6\n").await;

    assert_eq!(end, SessionEnd::Exited);
    assert!(output.contains("😊 Satisfaction Rate: 100.0%"));
    assert!(output.contains(replies::QUESTION_FALLBACK));
    assert_eq!(state.stats.total_queries, u64::MAX);
    assert_eq!(state.stats.helpful_responses, u64::MAX);
    assert_eq!(state.stats.function_usage.questions, 1);
}

#[tokio::test]
async fn test_dispatch_uses_named_responders() {
    let dir = tempdir().unwrap();
    let (_, _, output) = run_script(
        &dir.path().join("stats.json"),
        UsageStats::default(),
        "3\nAny plot ideas?\n3\n\n6\n",
    )
    .await;

    let expected = prompt_assistant::services::responder::generate_creative_content("Any plot ideas?");
    assert!(output.contains(expected));
}
