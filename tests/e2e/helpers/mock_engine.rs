use podcast_gateway::domain::podcast::{EngineCredentials, GeneratePodcastRequest};
use podcast_gateway::infrastructure::engine::{EngineError, PodcastEngine};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// What the mock engine does when invoked
#[derive(Debug, Clone)]
pub enum EngineBehavior {
    /// Write these bytes to a fresh file and return its path
    Produce(Vec<u8>),
    /// Return a path that was never written
    MissingOutput,
    /// Fail as if the bridge exited with this code and stderr
    Fail(i32, String),
}

/// One recorded engine invocation
#[derive(Debug, Clone)]
pub struct EngineCall {
    pub request: GeneratePodcastRequest,
    pub credentials: EngineCredentials,
    pub transcript_only: bool,
}

pub struct MockEngine {
    output_dir: PathBuf,
    behavior: EngineBehavior,
    delay: Duration,
    calls: Mutex<Vec<EngineCall>>,
}

impl MockEngine {
    pub fn new(output_dir: PathBuf, behavior: EngineBehavior, delay: Duration) -> Self {
        Self {
            output_dir,
            behavior,
            delay,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PodcastEngine for MockEngine {
    fn generate_podcast(
        &self,
        request: &GeneratePodcastRequest,
        credentials: &EngineCredentials,
        transcript_only: bool,
    ) -> Result<PathBuf, EngineError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        self.calls.lock().unwrap().push(EngineCall {
            request: request.clone(),
            credentials: credentials.clone(),
            transcript_only,
        });

        let extension = if transcript_only { "txt" } else { "mp3" };
        let path = self
            .output_dir
            .join(format!("podcast_{}.{}", Uuid::new_v4().simple(), extension));

        match &self.behavior {
            EngineBehavior::Produce(contents) => {
                std::fs::write(&path, contents).map_err(EngineError::Io)?;
                Ok(path)
            }
            EngineBehavior::MissingOutput => Ok(path),
            EngineBehavior::Fail(code, stderr) => Err(EngineError::failed(Some(*code), stderr.clone())),
        }
    }
}
