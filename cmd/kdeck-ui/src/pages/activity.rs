use crate::widgets::ConsoleState;
use dioxus::prelude::*;

#[component]
pub fn Activity() -> Element {
    let console = use_context::<ConsoleState>();
    let events: Vec<_> = console
        .read()
        .repository()
        .changes()
        .recent()
        .cloned()
        .collect();

    rsx! {
        div { class: "mb-6",
            h2 { class: "text-xl font-semibold text-white", "Activity" }
            p { class: "text-sm text-slate-400 mt-1", "Cluster changes made in this session, newest first" }
        }

        div { class: "bg-slate-900 border border-slate-800 rounded-xl overflow-hidden",
            table { class: "w-full",
                thead {
                    tr { class: "border-b border-slate-800",
                        th { class: "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "Seq" }
                        th { class: "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "Change" }
                        th { class: "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "Cluster" }
                        th { class: "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "ID" }
                        th { class: "text-left px-5 py-2.5 text-[11px] uppercase tracking-wider text-slate-500 font-semibold", "At" }
                    }
                }
                tbody {
                    if events.is_empty() {
                        tr { td { colspan: "5", class: "text-center py-16 text-slate-500 text-sm", "No changes yet" } }
                    } else {
                        for event in events.iter() {
                            tr { key: "{event.seq}", class: "border-b border-slate-800/50 hover:bg-slate-800/30 transition-colors",
                                td { class: "px-5 py-3 text-xs font-mono text-slate-500", "{event.seq}" }
                                td { class: "px-5 py-3 text-sm text-slate-300", "{event.kind}" }
                                td { class: "px-5 py-3 text-sm text-slate-300 font-medium", "{event.cluster_name}" }
                                td { class: "px-5 py-3 text-xs font-mono text-slate-600", "{event.cluster_id}" }
                                td { class: "px-5 py-3 text-xs text-slate-500", {event.at.format("%H:%M:%S").to_string()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
