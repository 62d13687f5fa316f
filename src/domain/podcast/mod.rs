pub mod credentials;
pub mod dto;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod service;

pub use credentials::EngineCredentials;
pub use dto::{HealthResponse, TranscriptResponse, UserPodcastRequest, VoiceConfig};
pub use error::{OutputKind, PodcastServiceError};
pub use model::{ConversationConfig, GeneratePodcastRequest};
pub use normalizer::normalize;
pub use service::{GeneratedAudio, PodcastService, PodcastServiceApi};
