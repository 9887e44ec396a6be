mod intent;
mod reducer;
mod state;
mod view;

pub use intent::PanelIntent;
pub use reducer::PanelReducer;
pub use state::{EditSession, Notice, NoticeKind, PanelState, ReadyPanel, UnavailableReason};
pub use view::{line_text, panel_view, read_lines, PanelView};
