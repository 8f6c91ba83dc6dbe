pub mod constants;
pub mod layout;
pub mod render;
pub mod shortcuts;

use hn_core::Msg;

/// Something the user asked for while a frame was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    OpenLink(String),
}
