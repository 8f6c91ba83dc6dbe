use std::path::PathBuf;
use std::sync::mpsc;

use hn_core::{update, AppState, Msg, PageViewModel, ViewMode};
use hn_engine::FetchError;
use hn_logging::{hn_debug, hn_error, hn_info, hn_warn};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::{self, constants::*, UiAction};

pub fn run_app() -> eframe::Result<()> {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, problem) = config::load_or_default(&working_dir);
    logging::initialize(config.log_destination);
    if let Some(err) = problem {
        hn_warn!("{}; using default configuration", err);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE)
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let view_mode = cc
                .storage
                .and_then(|storage| storage.get_string(VIEW_MODE_KEY))
                .map(|raw| ViewMode::parse_or_grid(&raw))
                .unwrap_or_default();
            let app = PagerApp::new(&config, view_mode, cc.egui_ctx.clone())?;
            Ok(Box::new(app))
        }),
    )
}

struct PagerApp {
    state: AppState,
    view: PageViewModel,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
    last_width: Option<u32>,
    scroll_to_top: bool,
}

impl PagerApp {
    fn new(config: &AppConfig, view_mode: ViewMode, ctx: egui::Context) -> Result<Self, FetchError> {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(config.fetch_settings(), msg_tx, ctx)?;
        let state = AppState::with_view_mode(view_mode);
        let view = state.view();
        hn_info!("Starting in {} view", view_mode);
        Ok(Self {
            state,
            view,
            msg_rx,
            effects,
            last_width: None,
            scroll_to_top: false,
        })
    }

    /// First frame initializes the coordinator, later width changes re-layout.
    fn track_viewport(&mut self, ctx: &egui::Context) {
        let width = ctx.screen_rect().width().max(0.0) as u32;
        let msg = match self.last_width {
            None => Msg::Init {
                viewport_width: width,
            },
            Some(previous) if previous != width => Msg::ViewportResized { width },
            Some(_) => return,
        };
        self.last_width = Some(width);
        self.dispatch(msg);
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let requests = self.effects.enqueue(effects);
        self.scroll_to_top |= requests.scroll_to_top;
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
    }
}

impl eframe::App for PagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_viewport(ctx);
        self.process_pending_messages();

        if !ctx.wants_keyboard_input() {
            let keys = ui::shortcuts::pressed_keys(ctx);
            for msg in ui::shortcuts::messages_for(&keys, &self.view) {
                self.dispatch(msg);
            }
        }

        let scroll_to_top = std::mem::take(&mut self.scroll_to_top);
        let now = chrono::Utc::now().timestamp();
        let actions = ui::layout::show(ctx, &self.view, scroll_to_top, now);

        let mut dispatched = false;
        for action in actions {
            match action {
                UiAction::Dispatch(msg) => {
                    self.dispatch(msg);
                    dispatched = true;
                }
                UiAction::OpenLink(link) => open_link(&link),
            }
        }
        if dispatched {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(VIEW_MODE_KEY, self.view.view_mode.as_str().to_string());
    }
}

fn open_link(link: &str) {
    if link == "#" {
        hn_debug!("Ignoring click on a card without a link");
        return;
    }
    if let Err(err) = open::that(link) {
        hn_error!("Failed to open {} in the browser: {}", link, err);
    }
}
