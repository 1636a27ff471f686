pub mod app;
pub mod config;
pub mod counter;
pub mod errors;
pub mod handlers;
pub mod hub;
pub mod models;
pub mod session;
pub mod state;
pub mod storage;
pub mod ticker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_state;
pub use ticker::spawn_ticker;
