//! Create/edit form for a cluster, with local validation.
//!
//! The form keeps exactly what the user typed; nothing is parsed until
//! [`ClusterForm::validate`] runs. A valid form yields a [`ClusterSpec`],
//! which is what the store accepts.

use crate::cluster::{Cluster, ClusterType, ReferenceCapacity, ReservedResources};
use crate::error::{ConsoleError, Result};
use crate::quota::format_amount;
use crate::validate::{validate_amount, validate_dns_label, validate_required_text};
use pkg_constants::console::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Namespace,
    Type,
    ReservedRequestCpu,
    ReservedLimitCpu,
    ReservedRequestMemory,
    ReservedLimitMemory,
}

impl FormField {
    pub const AMOUNTS: [FormField; 4] = [
        FormField::ReservedRequestCpu,
        FormField::ReservedLimitCpu,
        FormField::ReservedRequestMemory,
        FormField::ReservedLimitMemory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Cluster Name",
            FormField::Namespace => "Namespace",
            FormField::Type => "Cluster Type",
            FormField::ReservedRequestCpu => "Reserved Request CPU",
            FormField::ReservedLimitCpu => "Reserved Limit CPU",
            FormField::ReservedRequestMemory => "Reserved Request Memory",
            FormField::ReservedLimitMemory => "Reserved Limit Memory",
        }
    }

    /// Identity fields are fixed once a cluster exists.
    pub fn is_identity(self) -> bool {
        matches!(self, FormField::Name | FormField::Namespace | FormField::Type)
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            FormField::ReservedRequestCpu | FormField::ReservedLimitCpu => {
                Some("CPU units (e.g., 0.5, 1, 2)")
            }
            FormField::ReservedRequestMemory | FormField::ReservedLimitMemory => {
                Some("Memory in Mi")
            }
            _ => None,
        }
    }

    /// Reference total and unit an amount field is compared against.
    pub fn reference(self, reference: &ReferenceCapacity) -> Option<(f64, &'static str)> {
        match self {
            FormField::ReservedRequestCpu => Some((reference.total_request_cpu, "CPU")),
            FormField::ReservedLimitCpu => Some((reference.total_limit_cpu, "CPU")),
            FormField::ReservedRequestMemory => Some((reference.total_request_memory, "Mi")),
            FormField::ReservedLimitMemory => Some((reference.total_limit_memory, "Mi")),
            _ => None,
        }
    }
}

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validated form contents, ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "type")]
    pub cluster_type: ClusterType,
    pub reserved: ReservedResources,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterForm {
    pub name: String,
    pub namespace: String,
    pub cluster_type: Option<ClusterType>,
    pub reserved_request_cpu: String,
    pub reserved_limit_cpu: String,
    pub reserved_request_memory: String,
    pub reserved_limit_memory: String,
}

impl Default for ClusterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterForm {
    /// Empty form for a new cluster. Type starts as private.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            namespace: String::new(),
            cluster_type: Some(ClusterType::Private),
            reserved_request_cpu: String::new(),
            reserved_limit_cpu: String::new(),
            reserved_request_memory: String::new(),
            reserved_limit_memory: String::new(),
        }
    }

    pub fn from_cluster(cluster: &Cluster) -> Self {
        Self {
            name: cluster.name.clone(),
            namespace: cluster.namespace.clone(),
            cluster_type: Some(cluster.cluster_type),
            // Exact values: a rounded prefill would rewrite the reservation on save.
            reserved_request_cpu: cluster.reserved.request_cpu.to_string(),
            reserved_limit_cpu: cluster.reserved.limit_cpu.to_string(),
            reserved_request_memory: cluster.reserved.request_memory.to_string(),
            reserved_limit_memory: cluster.reserved.limit_memory.to_string(),
        }
    }

    /// Text currently held for `field`.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Namespace => self.namespace.clone(),
            FormField::Type => self
                .cluster_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            FormField::ReservedRequestCpu => self.reserved_request_cpu.clone(),
            FormField::ReservedLimitCpu => self.reserved_limit_cpu.clone(),
            FormField::ReservedRequestMemory => self.reserved_request_memory.clone(),
            FormField::ReservedLimitMemory => self.reserved_limit_memory.clone(),
        }
    }

    /// Store raw input for `field`. An unknown type string clears the type.
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Name => self.name = raw.to_string(),
            FormField::Namespace => self.namespace = raw.to_string(),
            FormField::Type => {
                self.cluster_type = match raw.trim() {
                    "public" => Some(ClusterType::Public),
                    "private" => Some(ClusterType::Private),
                    _ => None,
                }
            }
            FormField::ReservedRequestCpu => self.reserved_request_cpu = raw.to_string(),
            FormField::ReservedLimitCpu => self.reserved_limit_cpu = raw.to_string(),
            FormField::ReservedRequestMemory => self.reserved_request_memory = raw.to_string(),
            FormField::ReservedLimitMemory => self.reserved_limit_memory = raw.to_string(),
        }
    }

    /// Parsed amount. `None` when blank; NaN when the text is not a number.
    pub fn amount(&self, field: FormField) -> Option<f64> {
        let raw = self.value(field);
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(raw.parse::<f64>().unwrap_or(f64::NAN))
    }

    /// Every violated constraint, in field order.
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut check = |field: FormField, result: anyhow::Result<()>| {
            if let Err(e) = result {
                errors.push(FieldError {
                    field,
                    message: e.to_string(),
                });
            }
        };

        check(
            FormField::Name,
            validate_required_text(FormField::Name.label(), &self.name),
        );
        let namespace = self.namespace.trim();
        if !namespace.is_empty() {
            check(
                FormField::Namespace,
                validate_dns_label(FormField::Namespace.label(), namespace),
            );
        }
        if self.cluster_type.is_none() {
            check(
                FormField::Type,
                Err(anyhow::anyhow!("{} is required", FormField::Type.label())),
            );
        }
        for field in FormField::AMOUNTS {
            check(
                field,
                validate_amount(field.label(), self.amount(field)).map(|_| ()),
            );
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn validate(&self) -> Result<ClusterSpec> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(ConsoleError::ValidationFailed(errors));
        }
        let namespace = match self.namespace.trim() {
            "" => DEFAULT_NAMESPACE.to_string(),
            ns => ns.to_string(),
        };
        Ok(ClusterSpec {
            name: self.name.trim().to_string(),
            namespace,
            cluster_type: self.cluster_type.unwrap_or_default(),
            reserved: ReservedResources {
                request_cpu: self.checked_amount(FormField::ReservedRequestCpu),
                limit_cpu: self.checked_amount(FormField::ReservedLimitCpu),
                request_memory: self.checked_amount(FormField::ReservedRequestMemory),
                limit_memory: self.checked_amount(FormField::ReservedLimitMemory),
            },
        })
    }

    /// Hands the validated spec to `on_submit`. An invalid form is refused
    /// and the callback is never called.
    pub fn submit<F>(&self, on_submit: F) -> Result<()>
    where
        F: FnOnce(ClusterSpec),
    {
        let spec = self.validate()?;
        on_submit(spec);
        Ok(())
    }

    /// Reserved amounts above the cluster totals. Advisory only.
    pub fn capacity_warnings(&self, reference: &ReferenceCapacity) -> Vec<FieldError> {
        FormField::AMOUNTS
            .into_iter()
            .filter_map(|field| {
                let value = self.amount(field).filter(|v| v.is_finite())?;
                let (total, unit) = field.reference(reference)?;
                (value > total).then(|| FieldError {
                    field,
                    message: format!(
                        "{} exceeds the cluster total of {} {}",
                        field.label(),
                        format_amount(total),
                        unit
                    ),
                })
            })
            .collect()
    }

    // Only called after `errors()` came back empty.
    fn checked_amount(&self, field: FormField) -> f64 {
        self.amount(field).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled_form() -> ClusterForm {
        let mut form = ClusterForm::new();
        form.set_field(FormField::Name, "Private Cluster 2");
        form.set_field(FormField::ReservedRequestCpu, "2");
        form.set_field(FormField::ReservedLimitCpu, "4");
        form.set_field(FormField::ReservedRequestMemory, "0");
        form.set_field(FormField::ReservedLimitMemory, "2048.5");
        form
    }

    #[test]
    fn filled_form_is_valid() {
        let form = filled_form();
        assert!(form.is_valid(), "{:?}", form.errors());
        let spec = form.validate().unwrap();
        assert_eq!(spec.name, "Private Cluster 2");
        assert_eq!(spec.namespace, DEFAULT_NAMESPACE);
        assert_eq!(spec.cluster_type, ClusterType::Private);
        assert_eq!(spec.reserved.limit_memory, 2048.5);
    }

    #[test]
    fn empty_name_is_invalid_regardless_of_other_fields() {
        let mut form = filled_form();
        form.set_field(FormField::Name, "");
        assert!(!form.is_valid());
        let errors = form.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FormField::Name);
    }

    #[test]
    fn new_form_reports_every_missing_amount() {
        let errors = ClusterForm::new().errors();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Name,
                FormField::ReservedRequestCpu,
                FormField::ReservedLimitCpu,
                FormField::ReservedRequestMemory,
                FormField::ReservedLimitMemory,
            ]
        );
    }

    #[test]
    fn rejects_negative_and_garbage_amounts() {
        let mut form = filled_form();
        form.set_field(FormField::ReservedLimitCpu, "-1");
        form.set_field(FormField::ReservedRequestMemory, "lots");
        let fields: Vec<_> = form.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![FormField::ReservedLimitCpu, FormField::ReservedRequestMemory]
        );
    }

    #[test]
    fn rejects_bad_namespace_and_missing_type() {
        let mut form = filled_form();
        form.set_field(FormField::Namespace, "Team_A");
        form.set_field(FormField::Type, "shared");
        let fields: Vec<_> = form.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FormField::Namespace, FormField::Type]);
    }

    #[test]
    fn submit_blocks_invalid_form() {
        let called = Cell::new(false);
        let result = ClusterForm::new().submit(|_| called.set(true));
        assert!(matches!(result, Err(ConsoleError::ValidationFailed(_))));
        assert!(!called.get());

        let result = filled_form().submit(|spec| {
            assert_eq!(spec.reserved.request_cpu, 2.0);
            called.set(true);
        });
        assert!(result.is_ok());
        assert!(called.get());
    }

    #[test]
    fn capacity_warnings_are_advisory() {
        let reference = ReferenceCapacity {
            total_request_cpu: 1.0,
            total_limit_cpu: 8.0,
            total_request_memory: 512.0,
            total_limit_memory: 4096.0,
        };
        let form = filled_form();
        let warnings = form.capacity_warnings(&reference);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, FormField::ReservedRequestCpu);
        assert!(form.is_valid());
    }

    #[test]
    fn prefill_from_cluster_round_trips_values() {
        let spec = filled_form().validate().unwrap();
        let cluster = Cluster {
            id: "7".to_string(),
            name: spec.name.clone(),
            namespace: "team-a".to_string(),
            cluster_type: ClusterType::Public,
            created_by: "System".to_string(),
            created_at: chrono::Utc::now(),
            assigned_projects: Default::default(),
            reserved: spec.reserved,
            quota: spec.reserved.initial_quota(),
            pods_template: String::new(),
        };
        let form = ClusterForm::from_cluster(&cluster);
        assert_eq!(form.value(FormField::Type), "public");
        assert_eq!(form.reserved_limit_memory, "2048.5");
        assert_eq!(form.validate().unwrap().reserved, cluster.reserved);
    }

    #[test]
    fn prefill_keeps_fractional_reservations_exact() {
        let mut cluster = Cluster {
            id: "1".to_string(),
            name: "Public Cluster 1".to_string(),
            namespace: "default".to_string(),
            cluster_type: ClusterType::Public,
            created_by: "System".to_string(),
            created_at: chrono::Utc::now(),
            assigned_projects: Default::default(),
            reserved: ReservedResources::default(),
            quota: Default::default(),
            pods_template: String::new(),
        };
        cluster.reserved.request_cpu = 0.125;
        cluster.reserved.limit_memory = 1536.375;
        let form = ClusterForm::from_cluster(&cluster);
        assert_eq!(form.reserved_request_cpu, "0.125");
        let reserved = form.validate().unwrap().reserved;
        assert_eq!(reserved.request_cpu, 0.125);
        assert_eq!(reserved.limit_memory, 1536.375);
    }
}
