pub mod app;
pub mod interactive;
pub mod loader;
pub mod panic_handler;

pub use app::MacrodApp;
