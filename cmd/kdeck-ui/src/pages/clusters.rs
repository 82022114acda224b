use crate::widgets::{send, ConsoleState, NoticeBanner, TypeBadge, UsageRing};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{Message, ViewMode};
use pkg_types::cluster::Cluster;
use pkg_types::quota::format_amount;

use super::dialogs::ActiveDialogView;

const TH: &str = "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold";

#[component]
pub fn Clusters() -> Element {
    let console = use_context::<ConsoleState>();
    let state = console.read();
    let clusters = state.clusters();
    let view_mode = state.view_mode();
    let notice = state.notice().cloned();

    let toggle_cls = |mode: ViewMode| {
        if mode == view_mode {
            "p-2 rounded-md text-blue-400 bg-blue-500/10"
        } else {
            "p-2 rounded-md text-slate-500 hover:text-slate-300 transition-colors"
        }
    };

    rsx! {
        div { class: "flex items-center justify-between mb-6",
            div {
                h2 { class: "text-xl font-semibold text-white", "Cluster Management" }
                p { class: "text-sm text-slate-400 mt-1", "Reserved capacity, quota usage and project access" }
            }
            div { class: "flex items-center gap-3",
                div { class: "flex gap-1 p-1 bg-slate-900 border border-slate-800 rounded-lg",
                    button {
                        class: toggle_cls(ViewMode::Card),
                        title: "Card View",
                        onclick: move |_| send(console, Message::SetViewMode(ViewMode::Card)),
                        Icon { width: 16, height: 16, icon: LdLayoutGrid }
                    }
                    button {
                        class: toggle_cls(ViewMode::Table),
                        title: "Table View",
                        onclick: move |_| send(console, Message::SetViewMode(ViewMode::Table)),
                        Icon { width: 16, height: 16, icon: LdTable }
                    }
                }
                button {
                    class: "flex items-center gap-1.5 px-3 py-1.5 rounded-lg text-sm font-medium text-white bg-blue-600 hover:bg-blue-500 transition-all active:scale-95",
                    onclick: move |_| send(console, Message::ShowCreateForm),
                    Icon { width: 14, height: 14, icon: LdPlus }
                    span { "Add Cluster" }
                }
            }
        }

        if let Some(notice) = notice {
            NoticeBanner { notice }
        }

        if clusters.is_empty() {
            div { class: "bg-slate-900 border border-slate-800 rounded-xl text-center py-16 text-slate-500 text-sm",
                "No clusters yet"
            }
        } else {
            match view_mode {
                ViewMode::Card => rsx! {
                    div { class: "grid grid-cols-1 xl:grid-cols-2 gap-4",
                        for cluster in clusters.iter() {
                            ClusterCard { key: "{cluster.id}", cluster: cluster.clone() }
                        }
                    }
                },
                ViewMode::Table => rsx! { ClusterTable { clusters: clusters.clone() } },
            }
        }

        ActiveDialogView {}
    }
}

#[component]
fn ProjectChips(cluster: Cluster) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-1.5",
            if cluster.assigned_projects.is_empty() {
                span { class: "text-xs text-slate-600", "No projects" }
            }
            for project in cluster.assigned_projects.iter() {
                span { class: "px-2 py-0.5 rounded-md text-[11px] text-cyan-300 bg-cyan-500/10 border border-cyan-500/20", "{project}" }
            }
        }
    }
}

#[component]
fn RowActions(cluster_id: String) -> Element {
    let console = use_context::<ConsoleState>();
    let btn = "p-1.5 rounded-md text-slate-400 hover:text-slate-100 hover:bg-slate-800 transition-colors";
    let edit_id = cluster_id.clone();
    let delete_id = cluster_id.clone();
    let pods_id = cluster_id.clone();
    let projects_id = cluster_id;

    rsx! {
        div { class: "flex items-center gap-1",
            button { class: btn, title: "Edit",
                onclick: move |_| send(console, Message::EditCluster(edit_id.clone())),
                Icon { width: 14, height: 14, icon: LdPencil }
            }
            button { class: btn, title: "Manage Projects",
                onclick: move |_| send(console, Message::ManageProjects(projects_id.clone())),
                Icon { width: 14, height: 14, icon: LdFolder }
            }
            button { class: btn, title: "View Pods Template",
                onclick: move |_| send(console, Message::ViewPodsTemplate(pods_id.clone())),
                Icon { width: 14, height: 14, icon: LdBox }
            }
            button { class: "p-1.5 rounded-md text-red-400/80 hover:text-red-300 hover:bg-red-500/10 transition-colors", title: "Delete",
                onclick: move |_| send(console, Message::RequestDelete(delete_id.clone())),
                Icon { width: 14, height: 14, icon: LdTrash2 }
            }
        }
    }
}

#[component]
fn ClusterCard(cluster: Cluster) -> Element {
    let console = use_context::<ConsoleState>();
    let details_id = cluster.id.clone();
    let created = cluster.created_at.format("%Y-%m-%d").to_string();

    rsx! {
        div { class: "bg-slate-900 border border-slate-800 rounded-xl p-5 hover:border-blue-500/40 transition-all",
            div { class: "flex items-start justify-between mb-4",
                div {
                    div { class: "flex items-center gap-2",
                        h3 { class: "text-base font-semibold text-white", "{cluster.name}" }
                        TypeBadge { cluster_type: cluster.cluster_type }
                    }
                    p { class: "text-xs text-slate-500 mt-1",
                        "ns/{cluster.namespace} · created by {cluster.created_by} on {created}"
                    }
                }
                RowActions { cluster_id: cluster.id.clone() }
            }

            div { class: "mb-4",
                p { class: "text-[11px] uppercase tracking-wider text-slate-500 font-semibold mb-1.5", "Assigned Projects" }
                ProjectChips { cluster: cluster.clone() }
            }

            div { class: "flex items-center justify-between mb-2",
                p { class: "text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "Resource Quota" }
                button {
                    class: "text-xs text-blue-400 hover:text-blue-300",
                    onclick: move |_| send(console, Message::ShowResourceDetails(details_id.clone())),
                    "Details"
                }
            }
            div { class: "grid grid-cols-5 gap-3",
                for record in cluster.quota.iter() {
                    div { key: "{record.dimension}", class: "flex flex-col items-center text-center",
                        UsageRing { reading: record.reading(), size: "w-14 h-14" }
                        span { class: "text-[11px] text-slate-400 mt-1.5", "{record.dimension.title()}" }
                        span { class: "text-[11px] font-mono text-slate-500",
                            "{format_amount(record.used)}/{format_amount(record.max)} {record.dimension.unit()}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ClusterTable(clusters: Vec<Cluster>) -> Element {
    let console = use_context::<ConsoleState>();

    rsx! {
        div { class: "bg-slate-900 border border-slate-800 rounded-xl overflow-hidden",
            table { class: "w-full",
                thead {
                    tr { class: "border-b border-slate-800",
                        th { class: TH, "Name" }
                        th { class: TH, "Type" }
                        th { class: TH, "Namespace" }
                        th { class: TH, "Created By" }
                        th { class: TH, "Reserved CPU" }
                        th { class: TH, "Assigned Projects" }
                        th { class: TH, "Resource Usage" }
                        th { class: TH, "Actions" }
                    }
                }
                tbody {
                    for cluster in clusters.iter() {
                        {
                            let details_id = cluster.id.clone();
                            let reading = cluster.quota.average_reading();
                            rsx! {
                                tr { key: "{cluster.id}", class: "border-b border-slate-800/50 hover:bg-slate-800/30 transition-colors",
                                    td { class: "px-5 py-3 text-sm text-slate-300 font-medium", "{cluster.name}" }
                                    td { class: "px-5 py-3", TypeBadge { cluster_type: cluster.cluster_type } }
                                    td { class: "px-5 py-3 text-sm text-slate-400", "{cluster.namespace}" }
                                    td { class: "px-5 py-3 text-sm text-slate-400", "{cluster.created_by}" }
                                    td { class: "px-5 py-3 text-sm text-cyan-400 font-mono", "{format_amount(cluster.reserved.request_cpu)} cores" }
                                    td { class: "px-5 py-3", ProjectChips { cluster: cluster.clone() } }
                                    td { class: "px-5 py-3",
                                        button {
                                            title: "Show resource details",
                                            onclick: move |_| send(console, Message::ShowResourceDetails(details_id.clone())),
                                            UsageRing { reading, size: "w-12 h-12" }
                                        }
                                    }
                                    td { class: "px-5 py-3", RowActions { cluster_id: cluster.id.clone() } }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
