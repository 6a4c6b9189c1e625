//! Lifecycle tests for the chat widget: greeting scheduling, serialized
//! submits, and cancellation. Timers run under paused tokio time, so
//! these are deterministic and fast.

use shreebot_core::{ChatWidget, Sender, WidgetConfig, WidgetState};
use std::time::Duration;
use tokio::time;

fn config() -> WidgetConfig {
    WidgetConfig::new()
        .with_greeting_delay(Duration::from_millis(1500))
        .with_typing_delay_ms(1500..2500)
}

#[tokio::test(start_paused = true)]
async fn test_full_widget_conversation() {
    let mut widget = ChatWidget::new(config());

    // Closed widgets take no input.
    assert_eq!(widget.state().await, WidgetState::Closed);
    assert!(!widget.send("skills").await.unwrap());

    widget.open().await.unwrap();
    assert!(widget.is_typing().await);
    time::sleep(Duration::from_millis(1600)).await;

    let history = widget.history_snapshot().await;
    assert_eq!(history.len(), 1);
    assert!(history[0].text.starts_with("Greetings! I'm ShreeBot"));

    // A question lands immediately; the answer follows the typing delay.
    assert!(widget.send("what is his cgpa?").await.unwrap());
    assert_eq!(widget.history_snapshot().await.len(), 2);
    time::sleep(Duration::from_millis(2600)).await;

    let history = widget.history_snapshot().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].sender, Sender::User);
    assert_eq!(history[2].sender, Sender::Bot);
    assert!(history[2].text.starts_with("EDUCATION INFORMATION:"));
    assert_eq!(widget.state().await, WidgetState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_rejected_while_typing() {
    let mut widget = ChatWidget::new(config());
    widget.open().await.unwrap();
    time::sleep(Duration::from_millis(1600)).await;

    assert!(widget.send("gif project?").await.unwrap());
    assert!(!widget.send("healthcare project?").await.unwrap());
    time::sleep(Duration::from_millis(2600)).await;

    // Only the first question got an answer, and it is the gif reply.
    let history = widget.history_snapshot().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].links.len(), 1);
    assert!(history[2].links[0].url.contains("GIF-Animation-Generator-Agent"));
}

#[tokio::test(start_paused = true)]
async fn test_close_suppresses_late_reply() {
    let mut widget = ChatWidget::new(config());
    widget.open().await.unwrap();
    time::sleep(Duration::from_millis(1600)).await;

    assert!(widget.send("any hackathon wins?").await.unwrap());
    widget.close().await;

    time::sleep(Duration::from_millis(10_000)).await;
    let history = widget.history_snapshot().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].sender, Sender::User);

    // Reopening resumes the conversation without greeting again, and
    // input is accepted once more.
    widget.open().await.unwrap();
    assert_eq!(widget.state().await, WidgetState::Idle);
    assert!(widget.send("any hackathon wins?").await.unwrap());
    time::sleep(Duration::from_millis(2600)).await;
    let history = widget.history_snapshot().await;
    assert_eq!(history.len(), 4);
    assert!(history[3].text.starts_with("ACHIEVEMENT DATA:"));
}

#[tokio::test(start_paused = true)]
async fn test_instant_config_for_headless_use() {
    let mut widget = ChatWidget::new(WidgetConfig::instant());
    widget.open().await.unwrap();
    time::sleep(Duration::from_millis(1)).await;

    assert_eq!(widget.state().await, WidgetState::Idle);
    assert!(widget.send("experience").await.unwrap());
    time::sleep(Duration::from_millis(1)).await;

    assert_eq!(widget.history_snapshot().await.len(), 3);
}
