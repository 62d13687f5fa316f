use super::podcast_engine::{EngineError, PodcastEngine};
use crate::domain::podcast::{ConversationConfig, EngineCredentials, GeneratePodcastRequest};
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Stderr is truncated to this many bytes in error messages
const MAX_STDERR_BYTES: usize = 2048;

/// How often a running bridge is checked against its deadline
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// JSON document written to the bridge's stdin
#[derive(Debug, Serialize)]
struct EngineInvocation<'a> {
    text: Option<&'a str>,
    urls: Option<&'a [String]>,
    image_paths: Option<&'a [String]>,
    tts_model: Option<&'a str>,
    conversation_config: Option<&'a ConversationConfig>,
    longform: bool,
    transcript_only: bool,
}

/// Runs the engine through an external bridge program.
///
/// Protocol:
/// - the request is written to stdin as a single JSON object
/// - provider keys are set in the child's environment only
/// - the bridge prints the output file path as its last non-empty stdout line
/// - a non-zero exit is a failure; exit code 75 marks it as temporary
///
/// With a timeout set, a bridge still running at the deadline is killed.
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: None,
        }
    }

    /// Build from a command line such as `python3 -m podcastfy_bridge`
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, EngineError> {
        let Some(limit) = self.timeout else {
            return child.wait().map_err(EngineError::Io);
        };

        let deadline = Instant::now() + limit;
        loop {
            if let Some(status) = child.try_wait().map_err(EngineError::Io)? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                tracing::warn!(
                    program = %self.program,
                    pid = child.id(),
                    timeout = ?limit,
                    "Podcast engine exceeded its deadline, killing it"
                );
                if let Err(e) = child.kill() {
                    tracing::warn!(error = %e, "Failed to kill podcast engine");
                }
                // Reap so the bridge does not linger as a zombie
                let _ = child.wait();
                return Err(EngineError::TimedOut(limit));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl PodcastEngine for CommandEngine {
    fn generate_podcast(
        &self,
        request: &GeneratePodcastRequest,
        credentials: &EngineCredentials,
        transcript_only: bool,
    ) -> Result<PathBuf, EngineError> {
        let invocation = EngineInvocation {
            text: request.text.as_deref(),
            urls: request.urls.as_deref(),
            image_paths: request.image_paths.as_deref(),
            tts_model: request.tts_model.as_deref(),
            conversation_config: request.conversation_config.as_ref(),
            longform: request.longform,
            transcript_only,
        };
        let input = serde_json::to_vec(&invocation).map_err(EngineError::Encode)?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        credentials.apply_to(&mut command);

        tracing::debug!(
            program = %self.program,
            transcript_only,
            "Launching podcast engine"
        );

        let mut child = command.spawn().map_err(EngineError::Launch)?;

        // Pipes are serviced on their own threads so a chatty bridge cannot
        // block on a full stderr while we are still writing its stdin
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || {
                // Dropping stdin closes the pipe so the bridge sees EOF
                stdin.write_all(&input)
            })
        });
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = self.wait(&mut child)?;

        if let Some(writer) = writer {
            if let Err(e) = joined(writer)? {
                // A bridge that exits before reading reports through its status
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(EngineError::Io(e));
                }
            }
        }
        let stdout = collect(stdout)?;
        let stderr = collect(stderr)?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            let stderr = truncate(stderr.trim(), MAX_STDERR_BYTES);
            return Err(EngineError::failed(status.code(), stderr));
        }

        let stdout = String::from_utf8_lossy(&stdout);
        stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .map(PathBuf::from)
            .ok_or(EngineError::NoOutputPath)
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        pipe.read_to_end(&mut buffer)?;
        Ok(buffer)
    })
}

fn joined<T>(handle: JoinHandle<T>) -> Result<T, EngineError> {
    handle
        .join()
        .map_err(|_| EngineError::Io(io::Error::new(io::ErrorKind::Other, "engine pipe thread panicked")))
}

fn collect(handle: Option<JoinHandle<io::Result<Vec<u8>>>>) -> Result<Vec<u8>, EngineError> {
    match handle {
        Some(handle) => joined(handle)?.map_err(EngineError::Io),
        None => Ok(Vec::new()),
    }
}

fn truncate(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
