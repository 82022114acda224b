use crate::error::{ConsoleError, Result};
use pkg_constants::quota::{DANGER_THRESHOLD_PERCENT, WARNING_THRESHOLD_PERCENT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resource dimension a cluster quota is tracked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceDimension {
    #[serde(rename = "limitsCPU")]
    LimitsCpu,
    #[serde(rename = "requestsCPU")]
    RequestsCpu,
    #[serde(rename = "limitsMemory")]
    LimitsMemory,
    #[serde(rename = "requestsMemory")]
    RequestsMemory,
    #[serde(rename = "pods")]
    Pods,
}

impl ResourceDimension {
    pub const ALL: [ResourceDimension; 5] = [
        ResourceDimension::LimitsCpu,
        ResourceDimension::RequestsCpu,
        ResourceDimension::LimitsMemory,
        ResourceDimension::RequestsMemory,
        ResourceDimension::Pods,
    ];

    /// Wire name, as used in snapshots and CLI output.
    pub fn key(self) -> &'static str {
        match self {
            ResourceDimension::LimitsCpu => "limitsCPU",
            ResourceDimension::RequestsCpu => "requestsCPU",
            ResourceDimension::LimitsMemory => "limitsMemory",
            ResourceDimension::RequestsMemory => "requestsMemory",
            ResourceDimension::Pods => "pods",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceDimension::LimitsCpu => "CPU Limits",
            ResourceDimension::RequestsCpu => "CPU Requests",
            ResourceDimension::LimitsMemory => "Memory Limits",
            ResourceDimension::RequestsMemory => "Memory Requests",
            ResourceDimension::Pods => "Pods Usage",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ResourceDimension::LimitsCpu | ResourceDimension::RequestsCpu => "CPU",
            ResourceDimension::LimitsMemory | ResourceDimension::RequestsMemory => "Mi",
            ResourceDimension::Pods => "Pods",
        }
    }
}

impl std::fmt::Display for ResourceDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// --- Usage calculator ---

/// Percentage of `max` consumed by `used`, rounded to one decimal place.
///
/// The result is not clamped: a record that is over quota reads above 100.
/// A non-positive or non-finite `max`, or a negative `used`, is rejected.
pub fn usage_percent(used: f64, max: f64) -> Result<f64> {
    if !max.is_finite() || max <= 0.0 || !used.is_finite() || used < 0.0 {
        return Err(ConsoleError::InvalidQuota {
            dimension: None,
            used,
            max,
        });
    }
    Ok(round_one_decimal(used / max * 100.0))
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a percentage with at most one fraction digit (`50%`, `72.5%`).
pub fn format_percent(percent: f64) -> String {
    let rounded = round_one_decimal(percent);
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

/// Formats an amount with at most two fraction digits (`8`, `0.5`, `1.25`).
pub fn format_amount(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// --- Threshold classifier ---

/// Severity tier of a usage percentage. Ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl UsageLevel {
    /// Inclusive at both thresholds: 70 is a warning, 90 is danger.
    pub fn classify(percent: f64) -> Self {
        if percent >= DANGER_THRESHOLD_PERCENT {
            UsageLevel::Danger
        } else if percent >= WARNING_THRESHOLD_PERCENT {
            UsageLevel::Warning
        } else {
            UsageLevel::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UsageLevel::Normal => "normal",
            UsageLevel::Warning => "warning",
            UsageLevel::Danger => "danger",
        }
    }
}

impl std::fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a usage ring displays for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UsageReading {
    Measured { percent: f64, level: UsageLevel },
    /// `max` was not usable; shown as 0% in an error state.
    Invalid,
}

impl UsageReading {
    pub fn from_amounts(used: f64, max: f64) -> Self {
        match usage_percent(used, max) {
            Ok(percent) => Self::from_percent(percent),
            Err(_) => UsageReading::Invalid,
        }
    }

    pub fn from_percent(percent: f64) -> Self {
        UsageReading::Measured {
            percent,
            level: UsageLevel::classify(percent),
        }
    }

    pub fn percent(&self) -> f64 {
        match self {
            UsageReading::Measured { percent, .. } => *percent,
            UsageReading::Invalid => 0.0,
        }
    }

    pub fn level(&self) -> Option<UsageLevel> {
        match self {
            UsageReading::Measured { level, .. } => Some(*level),
            UsageReading::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, UsageReading::Invalid)
    }
}

// --- Quota records ---

/// Used/max pair for one resource dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaRecord {
    pub dimension: ResourceDimension,
    pub used: f64,
    pub max: f64,
}

impl QuotaRecord {
    pub fn new(dimension: ResourceDimension, used: f64, max: f64) -> Self {
        Self {
            dimension,
            used,
            max,
        }
    }

    pub fn percentage(&self) -> Result<f64> {
        usage_percent(self.used, self.max).map_err(|_| ConsoleError::InvalidQuota {
            dimension: Some(self.dimension),
            used: self.used,
            max: self.max,
        })
    }

    /// Remaining headroom. Negative when over quota.
    pub fn available(&self) -> f64 {
        self.max - self.used
    }

    pub fn reading(&self) -> UsageReading {
        UsageReading::from_amounts(self.used, self.max)
    }
}

/// The quota records of one cluster, at most one per dimension.
///
/// Serialized as a plain list; a later entry for the same dimension
/// replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<QuotaRecord>", into = "Vec<QuotaRecord>")]
pub struct ResourceQuota {
    records: BTreeMap<ResourceDimension, QuotaRecord>,
}

impl ResourceQuota {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: ResourceDimension) -> Option<&QuotaRecord> {
        self.records.get(&dimension)
    }

    pub fn set(&mut self, dimension: ResourceDimension, used: f64, max: f64) {
        self.records
            .insert(dimension, QuotaRecord::new(dimension, used, max));
    }

    /// Records in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = &QuotaRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean percentage of the valid records, rounded to a whole percent.
    /// Records with an unusable `max` are left out.
    pub fn average_percent(&self) -> Option<f64> {
        let valid: Vec<f64> = self
            .records
            .values()
            .filter_map(|r| r.percentage().ok())
            .collect();
        if valid.is_empty() {
            return None;
        }
        Some((valid.iter().sum::<f64>() / valid.len() as f64).round())
    }

    /// The reading shown by the table view's summary ring.
    pub fn average_reading(&self) -> UsageReading {
        match self.average_percent() {
            Some(p) => UsageReading::from_percent(p),
            None => UsageReading::Invalid,
        }
    }
}

impl From<Vec<QuotaRecord>> for ResourceQuota {
    fn from(records: Vec<QuotaRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl From<ResourceQuota> for Vec<QuotaRecord> {
    fn from(quota: ResourceQuota) -> Self {
        quota.records.into_values().collect()
    }
}

impl FromIterator<QuotaRecord> for ResourceQuota {
    fn from_iter<I: IntoIterator<Item = QuotaRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|r| (r.dimension, r)).collect(),
        }
    }
}
