pub mod handler;
pub mod loading;
pub mod protocol;
pub mod state;

// Re-export the main loop so the binary can drive it directly.
pub use handler::run_console;
