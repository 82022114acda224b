use pkg_types::form::ClusterForm;
use std::collections::BTreeSet;

/// Whether the cluster form creates a new cluster or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { cluster_id: String },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// The one dialog currently shown. Opening another replaces it.
///
/// Drafts live here until the dialog is saved, so closing a dialog
/// discards whatever was typed into it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    Closed,
    ResourceDetails {
        cluster_id: String,
    },
    Projects {
        cluster_id: String,
        draft: BTreeSet<String>,
    },
    PodsTemplate {
        cluster_id: String,
        draft: String,
    },
    ClusterForm {
        mode: FormMode,
        form: ClusterForm,
    },
    ConfirmDelete {
        cluster_id: String,
    },
}

impl ActiveDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveDialog::Closed)
    }

    /// Cluster the dialog is about. `None` when closed or creating.
    pub fn cluster_id(&self) -> Option<&str> {
        match self {
            ActiveDialog::Closed => None,
            ActiveDialog::ResourceDetails { cluster_id }
            | ActiveDialog::Projects { cluster_id, .. }
            | ActiveDialog::PodsTemplate { cluster_id, .. }
            | ActiveDialog::ConfirmDelete { cluster_id } => Some(cluster_id),
            ActiveDialog::ClusterForm { mode, .. } => match mode {
                FormMode::Create => None,
                FormMode::Edit { cluster_id } => Some(cluster_id),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActiveDialog::Closed => "none",
            ActiveDialog::ResourceDetails { .. } => "resource-details",
            ActiveDialog::Projects { .. } => "projects",
            ActiveDialog::PodsTemplate { .. } => "pods-template",
            ActiveDialog::ClusterForm {
                mode: FormMode::Create,
                ..
            } => "create-cluster",
            ActiveDialog::ClusterForm { .. } => "edit-cluster",
            ActiveDialog::ConfirmDelete { .. } => "confirm-delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_has_no_cluster() {
        let dialog = ActiveDialog::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.cluster_id(), None);
    }

    #[test]
    fn create_form_has_no_cluster() {
        let create = ActiveDialog::ClusterForm {
            mode: FormMode::Create,
            form: ClusterForm::new(),
        };
        let edit = ActiveDialog::ClusterForm {
            mode: FormMode::Edit {
                cluster_id: "2".to_string(),
            },
            form: ClusterForm::new(),
        };
        assert_eq!(create.cluster_id(), None);
        assert_eq!(edit.cluster_id(), Some("2"));
        assert_eq!(create.name(), "create-cluster");
        assert_eq!(edit.name(), "edit-cluster");
    }
}
