mod app_state;
mod config;
mod types;

pub use app_state::AppState;
pub use config::AppConfig;
pub use types::{PanelPhase, PanelTransition};
