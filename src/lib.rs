pub mod app;
pub mod background;
pub mod core;
#[cfg(feature = "debug")]
pub mod debug;
pub mod greeting;
pub mod session;
pub mod shell;

// Curated re-exports
pub use crate::app::sequencer::GreetingFinished;
pub use crate::app::state::ViewState;
pub use crate::app::FolioPlugin;
pub use crate::core::config::AppConfig;
pub use crate::core::content::Portfolio;
