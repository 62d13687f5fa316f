pub mod command_engine;
pub mod podcast_engine;

pub use command_engine::CommandEngine;
pub use podcast_engine::{EngineError, FailureKind, PodcastEngine, EXIT_TEMPFAIL};
