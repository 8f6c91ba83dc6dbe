use std::sync::mpsc;
use std::thread;

use hn_core::{Effect, Msg};
use hn_engine::{EngineEvent, EngineHandle, FetchError, FetchSettings};
use hn_logging::{hn_debug, hn_info};

/// What the shell itself must do after a batch of effects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellRequests {
    pub scroll_to_top: bool,
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: FetchSettings,
        msg_tx: mpsc::Sender<Msg>,
        ctx: egui::Context,
    ) -> Result<Self, FetchError> {
        hn_info!("Using Hacker News API at {}", settings.base_url);
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, msg_tx, ctx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) -> ShellRequests {
        let mut requests = ShellRequests::default();
        for effect in effects {
            match effect {
                Effect::LoadIdList {
                    generation,
                    story_type,
                } => {
                    hn_debug!("Requesting {} id list (generation {})", story_type, generation);
                    self.engine.load_id_list(generation, story_type);
                }
                Effect::LoadPage { generation, ids } => {
                    hn_debug!("Loading page of {} stories (generation {})", ids.len(), generation);
                    self.engine.load_page(generation, ids);
                }
                Effect::CancelPageLoad => self.engine.cancel_page(),
                Effect::ScrollToTop => requests.scroll_to_top = true,
            }
        }
        requests
    }
}

fn spawn_event_loop(
    events: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            if msg_tx.send(to_msg(event)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::IdListLoaded {
            generation,
            story_type,
            ids,
        } => Msg::IdListLoaded {
            generation,
            story_type,
            ids,
        },
        EngineEvent::PageLoaded {
            generation,
            stories,
        } => Msg::PageLoaded {
            generation,
            stories,
        },
    }
}
