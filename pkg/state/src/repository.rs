use pkg_types::Result;
use pkg_types::cluster::Cluster;
use pkg_types::form::ClusterSpec;
use pkg_types::quota::ResourceDimension;
use std::collections::BTreeSet;

/// Cluster storage as seen by the console.
///
/// Every operation is synchronous. Operations that name a cluster id that is
/// not stored return `ConsoleError::NotFound` and change nothing.
pub trait ClusterRepository {
    /// All clusters in insertion order.
    fn list(&self) -> Vec<Cluster>;

    fn get(&self, id: &str) -> Result<Cluster>;

    /// Append one cluster built from `spec` under a fresh id.
    fn create(&mut self, spec: ClusterSpec, created_by: &str) -> Result<Cluster>;

    /// Replace identity and reservation fields from `spec`.
    fn update(&mut self, id: &str, spec: ClusterSpec) -> Result<Cluster>;

    fn delete(&mut self, id: &str) -> Result<Cluster>;

    fn update_pods_template(&mut self, id: &str, template: String) -> Result<()>;

    fn set_assigned_projects(&mut self, id: &str, projects: BTreeSet<String>) -> Result<()>;

    /// Set one quota record. Rejects a `max` that is not positive.
    fn update_quota(
        &mut self,
        id: &str,
        dimension: ResourceDimension,
        used: f64,
        max: f64,
    ) -> Result<()>;
}
