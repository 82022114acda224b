//! Console defaults shared by the web UI and the CLI.

/// Namespace used when the cluster form leaves it empty.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Creator recorded on clusters when no user is configured.
pub const DEFAULT_CREATED_BY: &str = "System";

/// Projects that can be assigned to a cluster.
pub const DEFAULT_PROJECTS: &[&str] = &[
    "Project A",
    "Project B",
    "Project C",
    "Project D",
    "Project E",
];

// ─── Reference capacity ───────────────────────────────────────────────────

/// Cluster-wide request CPU shown next to the reservation inputs.
pub const DEFAULT_TOTAL_REQUEST_CPU: f64 = 64.0;

/// Cluster-wide limit CPU shown next to the reservation inputs.
pub const DEFAULT_TOTAL_LIMIT_CPU: f64 = 128.0;

/// Cluster-wide request memory (Mi) shown next to the reservation inputs.
pub const DEFAULT_TOTAL_REQUEST_MEMORY: f64 = 131_072.0;

/// Cluster-wide limit memory (Mi) shown next to the reservation inputs.
pub const DEFAULT_TOTAL_LIMIT_MEMORY: f64 = 262_144.0;

/// Longest namespace accepted by the cluster form (a DNS label).
pub const MAX_NAMESPACE_LEN: usize = 63;
