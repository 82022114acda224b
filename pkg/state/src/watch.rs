use chrono::{DateTime, Utc};
use pkg_types::cluster::Cluster;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Kind of mutation recorded in the change log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    ProjectsAssigned,
    PodsTemplateUpdated,
    QuotaUpdated,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Created => write!(f, "Created"),
            ChangeKind::Updated => write!(f, "Updated"),
            ChangeKind::Deleted => write!(f, "Deleted"),
            ChangeKind::ProjectsAssigned => write!(f, "ProjectsAssigned"),
            ChangeKind::PodsTemplateUpdated => write!(f, "PodsTemplateUpdated"),
            ChangeKind::QuotaUpdated => write!(f, "QuotaUpdated"),
        }
    }
}

/// A single recorded change to a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub seq: u64,
    pub kind: ChangeKind,
    pub cluster_id: String,
    pub cluster_name: String,
    pub at: DateTime<Utc>,
}

/// In-memory log of store mutations with monotonic sequence numbers.
/// Keeps at most `max_events`; the oldest entry is dropped first.
#[derive(Debug, Clone)]
pub struct ChangeLog {
    seq: u64,
    events: VecDeque<ChangeEvent>,
    max_events: usize,
}

impl ChangeLog {
    pub fn new(max_events: usize) -> Self {
        Self {
            seq: 0,
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Record a change to `cluster` and return its sequence number.
    pub fn record(&mut self, kind: ChangeKind, cluster: &Cluster) -> u64 {
        self.seq += 1;
        if self.max_events == 0 {
            return self.seq;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(ChangeEvent {
            seq: self.seq,
            kind,
            cluster_id: cluster.id.clone(),
            cluster_name: cluster.name.clone(),
            at: Utc::now(),
        });
        self.seq
    }

    pub fn current_seq(&self) -> u64 {
        self.seq
    }

    /// All retained events with a sequence number above `from_seq`.
    pub fn events_since(&self, from_seq: u64) -> Vec<ChangeEvent> {
        self.events
            .iter()
            .filter(|e| e.seq > from_seq)
            .cloned()
            .collect()
    }

    /// Retained events, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &ChangeEvent> {
        self.events.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::cluster::{ClusterType, ReservedResources};
    use pkg_types::quota::ResourceQuota;

    fn make_cluster(id: &str) -> Cluster {
        Cluster {
            id: id.to_string(),
            name: format!("cluster-{}", id),
            namespace: "default".to_string(),
            cluster_type: ClusterType::Private,
            created_by: "System".to_string(),
            created_at: Utc::now(),
            assigned_projects: Default::default(),
            reserved: ReservedResources::default(),
            quota: ResourceQuota::new(),
            pods_template: String::new(),
        }
    }

    #[test]
    fn ring_buffer_drops_oldest() {
        let mut log = ChangeLog::new(2);
        for id in ["1", "2", "3"] {
            log.record(ChangeKind::Created, &make_cluster(id));
        }
        assert_eq!(log.current_seq(), 3);
        assert_eq!(log.len(), 2);
        let ids: Vec<_> = log.recent().map(|e| e.cluster_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }

    #[test]
    fn events_since_filters_by_seq() {
        let mut log = ChangeLog::new(8);
        let first = log.record(ChangeKind::Created, &make_cluster("1"));
        log.record(ChangeKind::Deleted, &make_cluster("1"));
        let later = log.events_since(first);
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].kind, ChangeKind::Deleted);
    }
}
