use crate::quota::{ResourceDimension, ResourceQuota};
use chrono::{DateTime, Utc};
use pkg_constants::console::{
    DEFAULT_TOTAL_LIMIT_CPU, DEFAULT_TOTAL_LIMIT_MEMORY, DEFAULT_TOTAL_REQUEST_CPU,
    DEFAULT_TOTAL_REQUEST_MEMORY,
};
use pkg_constants::quota::DEFAULT_MAX_PODS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// --- Cluster type ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterType {
    Public,
    #[default]
    Private,
}

impl ClusterType {
    pub const ALL: [ClusterType; 2] = [ClusterType::Private, ClusterType::Public];

    pub fn label(self) -> &'static str {
        match self {
            ClusterType::Public => "Public",
            ClusterType::Private => "Private",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ClusterType::Public => {
                "All projects can access, requires admin/support for modifications"
            }
            ClusterType::Private => "Only creator can manage project access",
        }
    }
}

impl std::fmt::Display for ClusterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterType::Public => write!(f, "public"),
            ClusterType::Private => write!(f, "private"),
        }
    }
}

// --- Reserved resources ---

/// Capacity a cluster sets aside at creation time. CPU in cores, memory in Mi.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedResources {
    pub request_cpu: f64,
    pub limit_cpu: f64,
    pub request_memory: f64,
    pub limit_memory: f64,
}

impl ReservedResources {
    /// Quota for a fresh cluster: nothing used, ceilings at the reservation.
    pub fn initial_quota(&self) -> ResourceQuota {
        let mut quota = ResourceQuota::new();
        quota.set(ResourceDimension::LimitsCpu, 0.0, self.limit_cpu);
        quota.set(ResourceDimension::RequestsCpu, 0.0, self.request_cpu);
        quota.set(ResourceDimension::LimitsMemory, 0.0, self.limit_memory);
        quota.set(ResourceDimension::RequestsMemory, 0.0, self.request_memory);
        quota.set(ResourceDimension::Pods, 0.0, DEFAULT_MAX_PODS);
        quota
    }
}

/// Cluster-wide totals shown as a reference next to the reservation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCapacity {
    pub total_request_cpu: f64,
    pub total_limit_cpu: f64,
    pub total_request_memory: f64,
    pub total_limit_memory: f64,
}

impl Default for ReferenceCapacity {
    fn default() -> Self {
        Self {
            total_request_cpu: DEFAULT_TOTAL_REQUEST_CPU,
            total_limit_cpu: DEFAULT_TOTAL_LIMIT_CPU,
            total_request_memory: DEFAULT_TOTAL_REQUEST_MEMORY,
            total_limit_memory: DEFAULT_TOTAL_LIMIT_MEMORY,
        }
    }
}

// --- Cluster ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub namespace: String,
    #[serde(rename = "type")]
    pub cluster_type: ClusterType,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub assigned_projects: BTreeSet<String>,
    #[serde(default)]
    pub reserved: ReservedResources,
    #[serde(default)]
    pub quota: ResourceQuota,
    /// Raw workload manifest. Never parsed.
    #[serde(default)]
    pub pods_template: String,
}

impl Cluster {
    /// Adds `project` when absent, removes it when present.
    /// Returns whether the project is assigned afterwards.
    pub fn toggle_project(&mut self, project: &str) -> bool {
        toggle_in(&mut self.assigned_projects, project)
    }
}

/// Set-membership toggle shared by the cluster and dialog drafts.
pub fn toggle_in(set: &mut BTreeSet<String>, project: &str) -> bool {
    if set.remove(project) {
        false
    } else {
        set.insert(project.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cluster(projects: &[&str]) -> Cluster {
        Cluster {
            id: "1".to_string(),
            name: "Public Cluster 1".to_string(),
            namespace: "default".to_string(),
            cluster_type: ClusterType::Public,
            created_by: "System".to_string(),
            created_at: Utc::now(),
            assigned_projects: projects.iter().map(|p| p.to_string()).collect(),
            reserved: ReservedResources::default(),
            quota: ResourceQuota::new(),
            pods_template: String::new(),
        }
    }

    #[test]
    fn double_toggle_restores_projects() {
        for start in [vec![], vec!["Project A"], vec!["Project A", "Project B"]] {
            let mut cluster = make_cluster(&start);
            let before = cluster.assigned_projects.clone();
            for project in ["Project A", "Project C"] {
                cluster.toggle_project(project);
                cluster.toggle_project(project);
                assert_eq!(cluster.assigned_projects, before);
            }
        }
    }

    #[test]
    fn toggle_reports_membership() {
        let mut cluster = make_cluster(&["Project A"]);
        assert!(!cluster.toggle_project("Project A"));
        assert!(cluster.toggle_project("Project B"));
        assert!(cluster.assigned_projects.contains("Project B"));
    }

    #[test]
    fn initial_quota_tracks_reservation() {
        let reserved = ReservedResources {
            request_cpu: 2.0,
            limit_cpu: 4.0,
            request_memory: 1024.0,
            limit_memory: 2048.0,
        };
        let quota = reserved.initial_quota();
        assert_eq!(quota.len(), ResourceDimension::ALL.len());
        assert_eq!(quota.get(ResourceDimension::LimitsCpu).unwrap().max, 4.0);
        assert_eq!(quota.get(ResourceDimension::RequestsMemory).unwrap().max, 1024.0);
        assert_eq!(quota.get(ResourceDimension::Pods).unwrap().max, DEFAULT_MAX_PODS);
        assert!(quota.iter().all(|r| r.used == 0.0));
    }

    #[test]
    fn cluster_type_uses_wire_name() {
        let json = serde_json::to_string(&make_cluster(&[])).unwrap();
        assert!(json.contains(r#""type":"public""#));
        assert!(json.contains(r#""createdBy":"System""#));
    }
}
