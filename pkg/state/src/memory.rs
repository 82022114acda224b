use crate::repository::ClusterRepository;
use crate::watch::{ChangeKind, ChangeLog};
use chrono::Utc;
use pkg_constants::state::DEFAULT_CHANGE_LOG_CAPACITY;
use pkg_types::cluster::Cluster;
use pkg_types::form::ClusterSpec;
use pkg_types::quota::{ResourceDimension, usage_percent};
use pkg_types::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Snapshot file layout (YAML): a list of clusters under `clusters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}

/// Cluster store that lives only in memory.
/// Ids are decimal strings handed out from a counter.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    clusters: Vec<Cluster>,
    next_id: u64,
    changes: ChangeLog,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clusters(Vec::new())
    }

    /// Start from existing clusters. New ids start above the largest
    /// numeric id present, or wrap to 1 when that id is `u64::MAX`.
    pub fn with_clusters(clusters: Vec<Cluster>) -> Self {
        let next_id = clusters
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(1);
        Self {
            clusters,
            next_id,
            changes: ChangeLog::new(DEFAULT_CHANGE_LOG_CAPACITY),
        }
    }

    /// Parse a YAML snapshot.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let snapshot: ClusterSnapshot = serde_yaml::from_str(yaml)?;
        Ok(Self::with_clusters(snapshot.clusters))
    }

    /// Load a YAML snapshot from disk.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read snapshot {}: {}", path, e))?;
        let store = Self::from_yaml(&content)?;
        info!("Loaded {} clusters from {}", store.clusters.len(), path);
        Ok(store)
    }

    /// The built-in demo clusters.
    pub fn seeded() -> anyhow::Result<Self> {
        Self::from_yaml(crate::seed::CLUSTERS_YAML)
    }

    pub fn snapshot(&self) -> ClusterSnapshot {
        ClusterSnapshot {
            clusters: self.clusters.clone(),
        }
    }

    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.clusters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ConsoleError::cluster_not_found(id))
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.next_id.to_string();
            self.next_id = self.next_id.wrapping_add(1);
            if !self.clusters.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}

impl ClusterRepository for MemoryStore {
    fn list(&self) -> Vec<Cluster> {
        self.clusters.clone()
    }

    fn get(&self, id: &str) -> Result<Cluster> {
        let idx = self.position(id)?;
        Ok(self.clusters[idx].clone())
    }

    fn create(&mut self, spec: ClusterSpec, created_by: &str) -> Result<Cluster> {
        let cluster = Cluster {
            id: self.fresh_id(),
            name: spec.name,
            namespace: spec.namespace,
            cluster_type: spec.cluster_type,
            created_by: created_by.to_string(),
            created_at: Utc::now(),
            assigned_projects: BTreeSet::new(),
            reserved: spec.reserved,
            quota: spec.reserved.initial_quota(),
            pods_template: String::new(),
        };
        self.changes.record(ChangeKind::Created, &cluster);
        info!(
            "Created cluster {} ({}, {})",
            cluster.name, cluster.id, cluster.cluster_type
        );
        self.clusters.push(cluster.clone());
        Ok(cluster)
    }

    fn update(&mut self, id: &str, spec: ClusterSpec) -> Result<Cluster> {
        let idx = self.position(id)?;
        let cluster = &mut self.clusters[idx];
        cluster.name = spec.name;
        cluster.namespace = spec.namespace;
        cluster.cluster_type = spec.cluster_type;
        cluster.reserved = spec.reserved;
        // Ceilings follow the reservation; consumption is kept.
        for (dimension, max) in [
            (ResourceDimension::LimitsCpu, spec.reserved.limit_cpu),
            (ResourceDimension::RequestsCpu, spec.reserved.request_cpu),
            (ResourceDimension::LimitsMemory, spec.reserved.limit_memory),
            (ResourceDimension::RequestsMemory, spec.reserved.request_memory),
        ] {
            let used = cluster.quota.get(dimension).map_or(0.0, |r| r.used);
            cluster.quota.set(dimension, used, max);
        }
        self.changes.record(ChangeKind::Updated, cluster);
        info!("Updated cluster {} ({})", cluster.name, cluster.id);
        Ok(cluster.clone())
    }

    fn delete(&mut self, id: &str) -> Result<Cluster> {
        let idx = self.position(id)?;
        let cluster = self.clusters.remove(idx);
        self.changes.record(ChangeKind::Deleted, &cluster);
        info!("Deleted cluster {} ({})", cluster.name, cluster.id);
        Ok(cluster)
    }

    fn update_pods_template(&mut self, id: &str, template: String) -> Result<()> {
        let idx = self.position(id)?;
        let cluster = &mut self.clusters[idx];
        cluster.pods_template = template;
        self.changes.record(ChangeKind::PodsTemplateUpdated, cluster);
        debug!(
            "Pods template of {} is now {} bytes",
            cluster.id,
            cluster.pods_template.len()
        );
        Ok(())
    }

    fn set_assigned_projects(&mut self, id: &str, projects: BTreeSet<String>) -> Result<()> {
        let idx = self.position(id)?;
        let cluster = &mut self.clusters[idx];
        cluster.assigned_projects = projects;
        self.changes.record(ChangeKind::ProjectsAssigned, cluster);
        info!(
            "Cluster {} assigned to {} project(s)",
            cluster.id,
            cluster.assigned_projects.len()
        );
        Ok(())
    }

    fn update_quota(
        &mut self,
        id: &str,
        dimension: ResourceDimension,
        used: f64,
        max: f64,
    ) -> Result<()> {
        let idx = self.position(id)?;
        usage_percent(used, max).map_err(|_| ConsoleError::InvalidQuota {
            dimension: Some(dimension),
            used,
            max,
        })?;
        let cluster = &mut self.clusters[idx];
        cluster.quota.set(dimension, used, max);
        self.changes.record(ChangeKind::QuotaUpdated, cluster);
        info!(
            "Cluster {} quota {} set to {}/{}",
            cluster.id, dimension, used, max
        );
        Ok(())
    }
}
