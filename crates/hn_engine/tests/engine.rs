use std::sync::mpsc::RecvTimeoutError;
use std::sync::{Arc, Once};
use std::time::Duration;

use hn_core::{Story, StoryId, StoryType};
use hn_engine::{EngineEvent, EngineHandle, FetchError, HnApi};
use pretty_assertions::assert_eq;

const WAIT: Duration = Duration::from_secs(5);

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hn_logging::initialize_for_tests);
}

/// Ids above 1000 answer slowly so a test can supersede them.
struct SlowApi;

#[async_trait::async_trait]
impl HnApi for SlowApi {
    async fn story_ids(&self, story_type: StoryType) -> Result<Vec<StoryId>, FetchError> {
        Ok(match story_type {
            StoryType::Top => (1..=100).collect(),
            StoryType::New => (101..=130).collect(),
        })
    }

    async fn item(&self, id: StoryId) -> Result<Option<Story>, FetchError> {
        if id > 1000 {
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
        Ok(Some(Story {
            id,
            title: format!("Story {id}"),
            by: "engine".to_string(),
            time: 1_700_000_000,
            score: 0,
            url: None,
            kind: None,
            descendants: None,
        }))
    }
}

#[test]
fn id_list_load_reports_generation_and_type() {
    init_logging();
    let (engine, events) = EngineHandle::with_api(Arc::new(SlowApi));

    engine.load_id_list(7, StoryType::New);

    let event = events.recv_timeout(WAIT).expect("id list event");
    assert_eq!(
        event,
        EngineEvent::IdListLoaded {
            generation: 7,
            story_type: StoryType::New,
            ids: (101..=130).collect(),
        }
    );
}

#[test]
fn newer_page_supersedes_slow_page() {
    init_logging();
    let (engine, events) = EngineHandle::with_api(Arc::new(SlowApi));

    engine.load_page(1, vec![1001, 1002]);
    engine.load_page(2, vec![11, 12]);

    match events.recv_timeout(WAIT).expect("page event") {
        EngineEvent::PageLoaded {
            generation,
            stories,
        } => {
            assert_eq!(generation, 2);
            let ids: Vec<_> = stories.iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![11, 12]);
        }
        other => panic!("unexpected event {other:?}"),
    }

    // The superseded batch never reports.
    assert_eq!(
        events.recv_timeout(Duration::from_millis(800)),
        Err(RecvTimeoutError::Timeout)
    );
}

#[test]
fn cancelled_page_never_reports() {
    init_logging();
    let (engine, events) = EngineHandle::with_api(Arc::new(SlowApi));

    engine.load_page(1, vec![1001]);
    engine.cancel_page();

    assert_eq!(
        events.recv_timeout(Duration::from_millis(800)),
        Err(RecvTimeoutError::Timeout)
    );
}
