use crate::widgets::{send, ConsoleState, DialogActions, DialogFrame, ResourceItem};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{ActiveDialog, FormMode, Message};
use pkg_types::cluster::{Cluster, ClusterType, ReferenceCapacity};
use pkg_types::form::{ClusterForm, FormField};
use pkg_types::quota::format_amount;
use std::collections::BTreeSet;

const INPUT: &str = "w-full bg-slate-800 border border-slate-700 rounded-md px-2.5 py-1.5 text-sm text-slate-200 outline-none focus:border-blue-500 transition-colors disabled:opacity-50";
const LABEL: &str = "block text-xs font-medium text-slate-400 mb-1";

/// Renders whichever dialog the console has open.
#[component]
pub fn ActiveDialogView() -> Element {
    let console = use_context::<ConsoleState>();
    let state = console.read();
    let dialog = state.dialog().clone();
    let cluster = state.selected_cluster();
    let choices = state.project_choices();
    let reference = state.settings().reference;

    match (dialog, cluster) {
        (ActiveDialog::ResourceDetails { .. }, Some(cluster)) => rsx! {
            ResourceDetailsDialog { cluster }
        },
        (ActiveDialog::Projects { draft, .. }, Some(cluster)) => rsx! {
            ProjectsDialog { cluster, draft, choices }
        },
        (ActiveDialog::PodsTemplate { draft, .. }, Some(cluster)) => rsx! {
            PodsTemplateDialog { cluster, draft }
        },
        (ActiveDialog::ClusterForm { mode, form }, _) => rsx! {
            ClusterFormDialog { mode, form, reference }
        },
        (ActiveDialog::ConfirmDelete { .. }, Some(cluster)) => rsx! {
            ConfirmDeleteDialog { cluster }
        },
        _ => rsx! {},
    }
}

#[component]
fn ResourceDetailsDialog(cluster: Cluster) -> Element {
    rsx! {
        DialogFrame { title: "Resource Details: {cluster.name}", wide: true,
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                for record in cluster.quota.iter() {
                    ResourceItem { key: "{record.dimension}", record: *record }
                }
            }
        }
    }
}

#[component]
fn ProjectsDialog(cluster: Cluster, draft: BTreeSet<String>, choices: Vec<String>) -> Element {
    let console = use_context::<ConsoleState>();

    rsx! {
        DialogFrame { title: "Assign Projects: {cluster.name}",
            p { class: "text-xs text-slate-500 mb-3", "{draft.len()} of {choices.len()} selected" }
            div { class: "space-y-1",
                for project in choices {
                    {
                        let checked = draft.contains(&project);
                        let toggled = project.clone();
                        rsx! {
                            label { key: "{project}", class: "flex items-center gap-2.5 px-3 py-2 rounded-lg hover:bg-slate-800/60 cursor-pointer",
                                input {
                                    r#type: "checkbox",
                                    class: "accent-blue-500",
                                    checked,
                                    onchange: move |_| send(console, Message::ToggleProject(toggled.clone())),
                                }
                                span { class: "text-sm text-slate-300", "{project}" }
                            }
                        }
                    }
                }
            }
            DialogActions { confirm: "Save" }
        }
    }
}

#[component]
fn PodsTemplateDialog(cluster: Cluster, draft: String) -> Element {
    let console = use_context::<ConsoleState>();

    rsx! {
        DialogFrame { title: "Pods Template: {cluster.name}", wide: true,
            textarea {
                class: "w-full h-96 bg-slate-950 border border-slate-700 rounded-md p-3 text-xs font-mono text-slate-200 outline-none focus:border-blue-500",
                spellcheck: "false",
                value: "{draft}",
                oninput: move |evt| send(console, Message::EditPodsTemplate(evt.value())),
            }
            DialogActions { confirm: "Save" }
        }
    }
}

#[component]
fn ConfirmDeleteDialog(cluster: Cluster) -> Element {
    rsx! {
        DialogFrame { title: "Delete Cluster",
            p { class: "text-sm text-slate-300",
                "Delete "
                span { class: "font-semibold text-white", "{cluster.name}" }
                " from namespace "
                span { class: "font-mono", "{cluster.namespace}" }
                "? This cannot be undone."
            }
            DialogActions { confirm: "Delete", danger: true }
        }
    }
}

#[component]
fn ClusterFormDialog(mode: FormMode, form: ClusterForm, reference: ReferenceCapacity) -> Element {
    let console = use_context::<ConsoleState>();
    let editing = mode.is_edit();
    let title = if editing { "Edit Cluster" } else { "Add Cluster" };
    let confirm = if editing { "Save Changes" } else { "Create Cluster" };
    let errors = form.errors();
    let warnings = form.capacity_warnings(&reference);
    let valid = errors.is_empty();

    // Blank required fields only disable the submit button.
    let error_for = |field: FormField| {
        if form.value(field).trim().is_empty() {
            return None;
        }
        errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    };
    let name_error = error_for(FormField::Name);
    let namespace_error = error_for(FormField::Namespace);

    rsx! {
        DialogFrame { title: "{title}", wide: true,
            if !editing {
                div { class: "flex gap-3 p-4 mb-5 rounded-lg bg-amber-500/10 border border-amber-500/30",
                    span { class: "text-amber-400", Icon { width: 18, height: 18, icon: LdInfo } }
                    div {
                        h4 { class: "text-sm font-semibold text-amber-300", "Prerequisite: ABCID Access Required" }
                        p { class: "text-xs text-amber-200/80 mt-1",
                            "Before creating a new cluster, please ensure that your ABCID has been granted access permissions to the target cluster. Contact your cluster administrator if you need assistance."
                        }
                    }
                }
            }

            h4 { class: "text-[11px] uppercase tracking-wider text-slate-500 font-semibold mb-3", "Basic Information" }
            div { class: "grid grid-cols-2 gap-4 mb-4",
                div {
                    label { class: LABEL, "Cluster Name *" }
                    input {
                        class: INPUT,
                        value: "{form.name}",
                        disabled: editing,
                        oninput: move |evt| send(console, Message::UpdateField(FormField::Name, evt.value())),
                    }
                    if let Some(msg) = name_error {
                        p { class: "text-xs text-red-400 mt-1", "{msg}" }
                    }
                }
                div {
                    label { class: LABEL, "Namespace" }
                    input {
                        class: INPUT,
                        placeholder: "default",
                        value: "{form.namespace}",
                        disabled: editing,
                        oninput: move |evt| send(console, Message::UpdateField(FormField::Namespace, evt.value())),
                    }
                    if let Some(msg) = namespace_error {
                        p { class: "text-xs text-red-400 mt-1", "{msg}" }
                    }
                }
            }

            label { class: LABEL, "Cluster Type *" }
            div { class: "grid grid-cols-2 gap-3 mb-4",
                for cluster_type in ClusterType::ALL {
                    {
                        let selected = form.cluster_type == Some(cluster_type);
                        let cls = if selected {
                            "flex gap-2.5 p-3 rounded-lg border border-blue-500/60 bg-blue-500/10 cursor-pointer"
                        } else {
                            "flex gap-2.5 p-3 rounded-lg border border-slate-700 hover:border-slate-600 cursor-pointer"
                        };
                        rsx! {
                            label { key: "{cluster_type}", class: cls,
                                input {
                                    r#type: "radio",
                                    name: "cluster-type",
                                    class: "accent-blue-500 mt-0.5",
                                    checked: selected,
                                    disabled: editing,
                                    onchange: move |_| send(console, Message::SetClusterType(cluster_type)),
                                }
                                div {
                                    div { class: "text-sm font-medium text-slate-200", "{cluster_type.label()}" }
                                    div { class: "text-xs text-slate-500 mt-0.5", "{cluster_type.description()}" }
                                }
                            }
                        }
                    }
                }
            }

            if form.cluster_type == Some(ClusterType::Public) {
                div { class: "p-4 mb-4 rounded-lg bg-red-500/5 border border-red-500/30 text-xs text-red-200/90",
                    h4 { class: "text-sm font-semibold text-red-300 mb-1", "Important Notice" }
                    p { "Setting this cluster as public means:" }
                    ul { class: "list-disc pl-5 my-1.5 space-y-0.5",
                        li { "All projects will have access to this cluster" }
                        li { "You will not be able to modify the cluster settings after creation" }
                        li { "Any future modifications will require admin or support team assistance" }
                    }
                    p { "Please confirm this is what you want to do." }
                }
            }

            h4 { class: "text-[11px] uppercase tracking-wider text-slate-500 font-semibold mb-3 mt-2", "Resource Configuration" }
            div { class: "grid grid-cols-2 gap-4",
                for field in FormField::AMOUNTS {
                    {
                        // Errors win over capacity warnings.
                        let feedback = match error_for(field) {
                            Some(msg) => Some(("text-xs text-red-400 mt-1", msg)),
                            None => warnings
                                .iter()
                                .find(|w| w.field == field)
                                .map(|w| ("text-xs text-amber-400 mt-1", w.message.clone())),
                        };
                        let total = field
                            .reference(&reference)
                            .map(|(total, unit)| format!("Cluster total: {} {}", format_amount(total), unit));
                        rsx! {
                            div { key: "{field.label()}",
                                label { class: LABEL, "{field.label()} *" }
                                input {
                                    class: INPUT,
                                    r#type: "number",
                                    min: "0",
                                    step: "any",
                                    value: "{form.value(field)}",
                                    oninput: move |evt| send(console, Message::UpdateField(field, evt.value())),
                                }
                                if let Some(hint) = field.hint() {
                                    p { class: "text-[11px] text-slate-500 mt-1", "{hint}" }
                                }
                                if let Some(total) = total {
                                    p { class: "text-[11px] text-slate-600", "{total}" }
                                }
                                if let Some((cls, msg)) = feedback {
                                    p { class: cls, "{msg}" }
                                }
                            }
                        }
                    }
                }
            }

            DialogActions { confirm: "{confirm}", disabled: !valid }
        }
    }
}
