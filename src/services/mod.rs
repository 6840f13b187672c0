pub mod artifact_store;
pub mod job;

pub use artifact_store::ArtifactStore;
pub use job::{run_job, JobReport, JobSpec};
