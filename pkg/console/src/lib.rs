//! Console state for kdeck: which view is shown, which dialog is open and
//! for which cluster, and how user messages change that state.
//!
//! Front ends never touch the store directly. They send a [`Message`] to
//! [`Console::dispatch`] and render what the console exposes afterwards.

mod dialog;
mod settings;

pub use dialog::{ActiveDialog, FormMode};
pub use settings::ConsoleSettings;

use pkg_state::ClusterRepository;
use pkg_types::cluster::{Cluster, ClusterType, toggle_in};
use pkg_types::form::{ClusterForm, FormField};
use pkg_types::Result;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    Table,
}

/// A message shown above the cluster list until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// User intents the console reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SetViewMode(ViewMode),
    ShowResourceDetails(String),
    ManageProjects(String),
    ToggleProject(String),
    ViewPodsTemplate(String),
    EditPodsTemplate(String),
    ShowCreateForm,
    EditCluster(String),
    UpdateField(FormField, String),
    SetClusterType(ClusterType),
    RequestDelete(String),
    Save,
    Close,
    DismissNotice,
}

pub struct Console<R> {
    repo: R,
    settings: ConsoleSettings,
    view_mode: ViewMode,
    dialog: ActiveDialog,
    notice: Option<Notice>,
}

impl<R: ClusterRepository> Console<R> {
    pub fn new(repo: R, settings: ConsoleSettings) -> Self {
        Self {
            repo,
            settings,
            view_mode: ViewMode::default(),
            dialog: ActiveDialog::Closed,
            notice: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Direct store access for changes made outside the console.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn clusters(&self) -> Vec<Cluster> {
        self.repo.list()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn dialog(&self) -> &ActiveDialog {
        &self.dialog
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The cluster the open dialog is about, if any.
    pub fn selected_cluster(&self) -> Option<Cluster> {
        let id = self.dialog.cluster_id()?;
        self.repo.get(id).ok()
    }

    /// Projects offered in the projects dialog: the catalog, plus anything
    /// already assigned that the catalog does not list.
    pub fn project_choices(&self) -> Vec<String> {
        let mut choices = self.settings.projects.clone();
        if let ActiveDialog::Projects { draft, .. } = &self.dialog {
            for project in draft {
                if !choices.contains(project) {
                    choices.push(project.clone());
                }
            }
        }
        choices
    }

    /// Apply one message. Failures leave the state as it was and set an
    /// error notice; the error is also returned to the caller.
    pub fn dispatch(&mut self, msg: Message) -> Result<()> {
        debug!("dispatch {:?} (dialog={})", msg, self.dialog.name());
        let result = self.apply(msg);
        if let Err(e) = &result {
            warn!("{}", e);
            self.notice = Some(Notice::Error(e.to_string()));
        }
        result
    }

    fn apply(&mut self, msg: Message) -> Result<()> {
        match msg {
            Message::SetViewMode(mode) => self.view_mode = mode,
            Message::ShowResourceDetails(id) => {
                self.repo.get(&id)?;
                self.open(ActiveDialog::ResourceDetails { cluster_id: id });
            }
            Message::ManageProjects(id) => {
                let cluster = self.repo.get(&id)?;
                self.open(ActiveDialog::Projects {
                    cluster_id: id,
                    draft: cluster.assigned_projects,
                });
            }
            Message::ToggleProject(project) => match &mut self.dialog {
                ActiveDialog::Projects { draft, .. } => {
                    toggle_in(draft, &project);
                }
                other => ignored("ToggleProject", other),
            },
            Message::ViewPodsTemplate(id) => {
                let cluster = self.repo.get(&id)?;
                self.open(ActiveDialog::PodsTemplate {
                    cluster_id: id,
                    draft: cluster.pods_template,
                });
            }
            Message::EditPodsTemplate(text) => match &mut self.dialog {
                ActiveDialog::PodsTemplate { draft, .. } => *draft = text,
                other => ignored("EditPodsTemplate", other),
            },
            Message::ShowCreateForm => self.open(ActiveDialog::ClusterForm {
                mode: FormMode::Create,
                form: ClusterForm::new(),
            }),
            Message::EditCluster(id) => {
                let cluster = self.repo.get(&id)?;
                self.open(ActiveDialog::ClusterForm {
                    mode: FormMode::Edit { cluster_id: id },
                    form: ClusterForm::from_cluster(&cluster),
                });
            }
            Message::UpdateField(field, raw) => match &mut self.dialog {
                ActiveDialog::ClusterForm { mode, form } => {
                    if field.is_identity() && mode.is_edit() {
                        debug!("{} is locked while editing", field.label());
                    } else {
                        form.set_field(field, &raw);
                    }
                }
                other => ignored("UpdateField", other),
            },
            Message::SetClusterType(cluster_type) => match &mut self.dialog {
                ActiveDialog::ClusterForm {
                    mode: FormMode::Create,
                    form,
                } => form.cluster_type = Some(cluster_type),
                other => ignored("SetClusterType", other),
            },
            Message::RequestDelete(id) => {
                self.repo.get(&id)?;
                self.open(ActiveDialog::ConfirmDelete { cluster_id: id });
            }
            Message::Save => self.save()?,
            Message::Close => self.dialog = ActiveDialog::Closed,
            Message::DismissNotice => self.notice = None,
        }
        Ok(())
    }

    fn open(&mut self, dialog: ActiveDialog) {
        if self.dialog.is_open() {
            debug!("{} replaces {}", dialog.name(), self.dialog.name());
        }
        self.dialog = dialog;
    }

    /// Commit the open dialog. The dialog only closes when the commit
    /// succeeded.
    fn save(&mut self) -> Result<()> {
        let notice = match &self.dialog {
            ActiveDialog::Closed | ActiveDialog::ResourceDetails { .. } => None,
            ActiveDialog::Projects { cluster_id, draft } => {
                let count = draft.len();
                self.repo
                    .set_assigned_projects(cluster_id, draft.clone())?;
                Some(format!("Assigned {} project(s)", count))
            }
            ActiveDialog::PodsTemplate { cluster_id, draft } => {
                self.repo.update_pods_template(cluster_id, draft.clone())?;
                Some("Pods template saved".to_string())
            }
            ActiveDialog::ClusterForm { mode, form } => {
                let spec = form.validate()?;
                let cluster = match mode {
                    FormMode::Create => {
                        let created_by = self.settings.current_user.clone();
                        self.repo.create(spec, &created_by)?
                    }
                    FormMode::Edit { cluster_id } => self.repo.update(cluster_id, spec)?,
                };
                Some(match mode {
                    FormMode::Create => format!("Cluster '{}' created", cluster.name),
                    FormMode::Edit { .. } => format!("Cluster '{}' updated", cluster.name),
                })
            }
            ActiveDialog::ConfirmDelete { cluster_id } => {
                let cluster = self.repo.delete(cluster_id)?;
                Some(format!("Cluster '{}' deleted", cluster.name))
            }
        };
        if let Some(text) = notice {
            info!("{}", text);
            self.notice = Some(Notice::Info(text));
        }
        self.dialog = ActiveDialog::Closed;
        Ok(())
    }
}

fn ignored(what: &str, dialog: &ActiveDialog) {
    debug!("{} ignored while {} is open", what, dialog.name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_state::MemoryStore;
    use pkg_types::ConsoleError;
    use std::collections::BTreeSet;

    fn make_console() -> Console<MemoryStore> {
        let store = MemoryStore::seeded().unwrap();
        Console::new(store, ConsoleSettings::default())
    }

    fn fill_create_form(console: &mut Console<MemoryStore>, name: &str) {
        console.dispatch(Message::ShowCreateForm).unwrap();
        for (field, raw) in [
            (FormField::Name, name),
            (FormField::ReservedRequestCpu, "2"),
            (FormField::ReservedLimitCpu, "4"),
            (FormField::ReservedRequestMemory, "1024"),
            (FormField::ReservedLimitMemory, "2048"),
        ] {
            console
                .dispatch(Message::UpdateField(field, raw.to_string()))
                .unwrap();
        }
    }

    #[test]
    fn starts_closed_in_card_view() {
        let console = make_console();
        assert_eq!(console.view_mode(), ViewMode::Card);
        assert!(!console.dialog().is_open());
        assert!(console.notice().is_none());
        assert!(console.selected_cluster().is_none());
    }

    #[test]
    fn view_mode_does_not_touch_dialog() {
        let mut console = make_console();
        console
            .dispatch(Message::ShowResourceDetails("1".into()))
            .unwrap();
        console.dispatch(Message::SetViewMode(ViewMode::Table)).unwrap();
        assert_eq!(console.view_mode(), ViewMode::Table);
        assert_eq!(console.dialog().name(), "resource-details");
    }

    #[test]
    fn opening_a_dialog_replaces_the_previous_one() {
        let mut console = make_console();
        console
            .dispatch(Message::ShowResourceDetails("1".into()))
            .unwrap();
        console.dispatch(Message::ManageProjects("2".into())).unwrap();
        assert_eq!(console.dialog().name(), "projects");
        assert_eq!(console.selected_cluster().unwrap().id, "2");

        console.dispatch(Message::Close).unwrap();
        assert!(!console.dialog().is_open());
        assert!(console.selected_cluster().is_none());
    }

    #[test]
    fn unknown_cluster_sets_error_notice() {
        let mut console = make_console();
        let err = console
            .dispatch(Message::ShowResourceDetails("404".into()))
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound { .. }));
        assert!(!console.dialog().is_open());
        assert!(console.notice().unwrap().is_error());

        console.dispatch(Message::DismissNotice).unwrap();
        assert!(console.notice().is_none());
    }

    #[test]
    fn closing_projects_discards_draft() {
        let mut console = make_console();
        let before = console.repository().get("1").unwrap().assigned_projects;

        console.dispatch(Message::ManageProjects("1".into())).unwrap();
        console
            .dispatch(Message::ToggleProject("Project E".into()))
            .unwrap();
        console.dispatch(Message::Close).unwrap();

        assert_eq!(console.repository().get("1").unwrap().assigned_projects, before);
    }

    #[test]
    fn saving_projects_commits_draft() {
        let mut console = make_console();
        console.dispatch(Message::ManageProjects("1".into())).unwrap();
        console
            .dispatch(Message::ToggleProject("Project A".into()))
            .unwrap();
        console
            .dispatch(Message::ToggleProject("Project E".into()))
            .unwrap();
        console.dispatch(Message::Save).unwrap();

        let projects = console.repository().get("1").unwrap().assigned_projects;
        let expected: BTreeSet<String> = ["Project B", "Project E"]
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(projects, expected);
        assert!(!console.dialog().is_open());
        assert!(!console.notice().unwrap().is_error());
    }

    #[test]
    fn project_choices_include_unlisted_assignments() {
        let mut console = Console::new(
            MemoryStore::seeded().unwrap(),
            ConsoleSettings {
                projects: vec!["Project A".to_string()],
                ..Default::default()
            },
        );
        console.dispatch(Message::ManageProjects("1".into())).unwrap();
        assert_eq!(
            console.project_choices(),
            vec!["Project A".to_string(), "Project B".to_string()]
        );
    }

    #[test]
    fn pods_template_edit_and_save() {
        let mut console = make_console();
        console
            .dispatch(Message::ViewPodsTemplate("2".into()))
            .unwrap();
        console
            .dispatch(Message::EditPodsTemplate("not even json".into()))
            .unwrap();
        console.dispatch(Message::Save).unwrap();
        assert_eq!(
            console.repository().get("2").unwrap().pods_template,
            "not even json"
        );
    }

    #[test]
    fn create_appends_cluster_by_current_user() {
        let mut console = Console::new(
            MemoryStore::seeded().unwrap(),
            ConsoleSettings {
                current_user: "jane".to_string(),
                ..Default::default()
            },
        );
        let before = console.clusters();
        fill_create_form(&mut console, "Private Cluster 2");
        console.dispatch(Message::Save).unwrap();

        let after = console.clusters();
        assert_eq!(after.len(), before.len() + 1);
        let created = after.last().unwrap();
        assert_eq!(created.name, "Private Cluster 2");
        assert_eq!(created.namespace, "default");
        assert_eq!(created.created_by, "jane");
        assert!(before.iter().all(|c| c.id != created.id));
        assert!(!console.dialog().is_open());
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut console = make_console();
        let before = console.clusters();
        fill_create_form(&mut console, "   ");

        let err = console.dispatch(Message::Save).unwrap_err();
        assert!(matches!(err, ConsoleError::ValidationFailed(_)));
        assert_eq!(console.clusters(), before);
        assert_eq!(console.dialog().name(), "create-cluster");
        assert!(console.notice().unwrap().is_error());
    }

    #[test]
    fn identity_fields_are_locked_while_editing() {
        let mut console = make_console();
        console.dispatch(Message::EditCluster("2".into())).unwrap();
        console
            .dispatch(Message::UpdateField(FormField::Name, "hijacked".into()))
            .unwrap();
        console
            .dispatch(Message::SetClusterType(ClusterType::Public))
            .unwrap();
        console
            .dispatch(Message::UpdateField(
                FormField::ReservedLimitCpu,
                "24".into(),
            ))
            .unwrap();
        console.dispatch(Message::Save).unwrap();

        let updated = console.repository().get("2").unwrap();
        assert_eq!(updated.name, "Private Cluster 1");
        assert_eq!(updated.cluster_type, ClusterType::Private);
        assert_eq!(updated.reserved.limit_cpu, 24.0);
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut console = make_console();
        console.dispatch(Message::RequestDelete("3".into())).unwrap();
        assert_eq!(console.clusters().len(), 3);

        console.dispatch(Message::Close).unwrap();
        assert_eq!(console.clusters().len(), 3);

        console.dispatch(Message::RequestDelete("3".into())).unwrap();
        console.dispatch(Message::Save).unwrap();
        let ids: Vec<String> = console.clusters().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn messages_for_other_dialogs_are_ignored() {
        let mut console = make_console();
        console
            .dispatch(Message::ShowResourceDetails("1".into()))
            .unwrap();
        let before = console.dialog().clone();
        console
            .dispatch(Message::ToggleProject("Project A".into()))
            .unwrap();
        console
            .dispatch(Message::EditPodsTemplate("x".into()))
            .unwrap();
        assert_eq!(console.dialog(), &before);
    }

    #[test]
    fn edit_then_save_keeps_fractional_reservation() {
        use pkg_types::cluster::{ClusterType, ReservedResources};
        use pkg_types::form::ClusterSpec;
        use pkg_types::quota::ResourceDimension;

        let mut store = MemoryStore::seeded().unwrap();
        let spec = ClusterSpec {
            name: "Fractional".to_string(),
            namespace: "default".to_string(),
            cluster_type: ClusterType::Private,
            reserved: ReservedResources {
                request_cpu: 0.125,
                limit_cpu: 2.0,
                request_memory: 512.0,
                limit_memory: 1536.375,
            },
        };
        let id = store.create(spec, "tester").unwrap().id;
        let mut console = Console::new(store, ConsoleSettings::default());

        console.dispatch(Message::EditCluster(id.clone())).unwrap();
        console.dispatch(Message::Save).unwrap();

        let saved = console.repository().get(&id).unwrap();
        assert_eq!(saved.reserved.request_cpu, 0.125);
        assert_eq!(saved.reserved.limit_memory, 1536.375);
        let requests = saved.quota.get(ResourceDimension::RequestsCpu).unwrap();
        assert_eq!(requests.max, 0.125);
    }

    #[test]
    fn save_after_cluster_removed_keeps_dialog_open() {
        let mut console = make_console();
        console
            .dispatch(Message::ViewPodsTemplate("3".to_string()))
            .unwrap();
        console.repository_mut().delete("3").unwrap();

        let err = console.dispatch(Message::Save).unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound { .. }));
        assert_eq!(console.dialog().name(), "pods-template");
        assert!(console.notice().unwrap().is_error());
    }
}
