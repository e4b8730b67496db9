use std::time::Duration;

use summarist::ui::core::event_handler::{EventHandler, EventType};

#[test]
fn test_event_type_variants_exist() {
    let tick = EventType::Tick;
    assert!(matches!(tick, EventType::Tick));

    let paste = EventType::Paste("hello".to_string());
    assert!(matches!(paste, EventType::Paste(text) if text == "hello"));
}

#[tokio::test]
async fn test_should_render_respects_frame_interval() {
    let handler = EventHandler::new();
    assert!(!handler.should_render(), "fresh handler just rendered");

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(handler.should_render(), "a frame interval has elapsed");
}
