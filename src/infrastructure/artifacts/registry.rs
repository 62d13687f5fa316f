use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::path::{Path, PathBuf};
use std::time::Duration;
use uuid::Uuid;

const MAX_ARTIFACTS: u64 = 10_000;

/// Opaque handle for a generated file
pub type ArtifactId = Uuid;

#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
}

/// In-memory index of generated files, keyed by server-issued handles.
///
/// Clients download artifacts by handle instead of naming filesystem paths.
/// Entries expire after `ttl`; the files themselves are left alone.
pub struct ArtifactRegistry {
    cache: Cache<ArtifactId, Artifact>,
}

impl ArtifactRegistry {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_ARTIFACTS)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    pub async fn register(&self, path: &Path) -> ArtifactId {
        let id = Uuid::new_v4();
        self.cache
            .insert(
                id,
                Artifact {
                    path: path.to_path_buf(),
                    created_at: Utc::now(),
                },
            )
            .await;

        tracing::debug!(artifact_id = %id, path = %path.display(), "Artifact registered");
        id
    }

    pub async fn get(&self, id: &ArtifactId) -> Option<Artifact> {
        self.cache.get(id).await
    }

    /// Resolve a client-supplied reference. Anything that is not a known
    /// handle yields `None`.
    pub async fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let id = Uuid::parse_str(reference.trim_matches('/')).ok()?;
        self.get(&id).await.map(|artifact| artifact.path)
    }
}
