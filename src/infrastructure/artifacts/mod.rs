pub mod registry;

pub use registry::{Artifact, ArtifactId, ArtifactRegistry};
