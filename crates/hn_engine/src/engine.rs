use std::sync::{mpsc, Arc};
use std::thread;

use hn_core::{Generation, StoryId, StoryType};
use hn_logging::hn_debug;
use tokio_util::sync::CancellationToken;

use crate::accessor::StoryAccessor;
use crate::fetch::{FetchSettings, HnApi, ReqwestHnApi};
use crate::{EngineEvent, FetchError};

enum EngineCommand {
    LoadIdList {
        generation: Generation,
        story_type: StoryType,
    },
    LoadPage {
        generation: Generation,
        ids: Vec<StoryId>,
    },
    CancelPage,
}

/// Runs loads on a background tokio runtime and reports them as [`EngineEvent`]s.
///
/// At most one page batch is live: starting a page load or cancelling drops
/// the previous batch before it can report.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<(Self, mpsc::Receiver<EngineEvent>), FetchError> {
        let api = ReqwestHnApi::new(settings)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn HnApi>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let accessor = StoryAccessor::new(api);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut live_page: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::LoadIdList {
                        generation,
                        story_type,
                    } => {
                        let accessor = accessor.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let ids = accessor.fetch_id_list(story_type).await;
                            let _ = event_tx.send(EngineEvent::IdListLoaded {
                                generation,
                                story_type,
                                ids,
                            });
                        });
                    }
                    EngineCommand::LoadPage { generation, ids } => {
                        if let Some(previous) = live_page.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        live_page = Some(token.clone());
                        let accessor = accessor.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {
                                    hn_debug!("Page generation {} superseded", generation);
                                }
                                stories = accessor.fetch_stories(&ids) => {
                                    let _ = event_tx.send(EngineEvent::PageLoaded { generation, stories });
                                }
                            }
                        });
                    }
                    EngineCommand::CancelPage => {
                        if let Some(previous) = live_page.take() {
                            previous.cancel();
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn load_id_list(&self, generation: Generation, story_type: StoryType) {
        let _ = self.cmd_tx.send(EngineCommand::LoadIdList {
            generation,
            story_type,
        });
    }

    pub fn load_page(&self, generation: Generation, ids: Vec<StoryId>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::LoadPage { generation, ids });
    }

    pub fn cancel_page(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelPage);
    }
}
