use crate::types::Termination;

#[derive(thiserror::Error, Debug)]
pub enum SigbenchError {
    #[error("Failed to spawn benchmark {name}: {source}")]
    SpawnFailed {
        name: String,
        source: std::io::Error,
    },

    #[error("Benchmark {name} {status}")]
    BenchmarkFailed { name: String, status: Termination },

    #[error("Failed to read child resource usage: {source}")]
    SnapshotFailed { source: std::io::Error },
}
