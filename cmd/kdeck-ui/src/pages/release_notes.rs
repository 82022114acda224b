use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use pkg_state::seed;
use pkg_types::release::{ReleaseNote, ReleaseSection};

fn section_color(section: ReleaseSection) -> &'static str {
    match section {
        ReleaseSection::Features => "text-emerald-400",
        ReleaseSection::Improvements => "text-blue-400",
        ReleaseSection::BugFixes => "text-amber-400",
        ReleaseSection::KnownIssues => "text-red-400",
        ReleaseSection::ComingSoon => "text-violet-400",
    }
}

#[component]
pub fn ReleaseNotes() -> Element {
    let notes = use_hook(|| {
        seed::release_notes().unwrap_or_else(|e| {
            warn!("Failed to load release notes: {}", e);
            Vec::new()
        })
    });

    rsx! {
        div { class: "mb-6",
            h2 { class: "text-xl font-semibold text-white", "Release Notes" }
            p { class: "text-sm text-slate-400 mt-1", "What changed in each version" }
        }

        if notes.is_empty() {
            div { class: "bg-slate-900 border border-slate-800 rounded-xl text-center py-16 text-slate-500 text-sm",
                "No release notes"
            }
        }

        div { class: "relative border-l border-slate-800 ml-2 space-y-8",
            for note in notes.iter() {
                ReleaseEntry { key: "{note.version}", note: note.clone() }
            }
        }
    }
}

#[component]
fn ReleaseEntry(note: ReleaseNote) -> Element {
    rsx! {
        div { class: "relative pl-8",
            span { class: "absolute -left-[7px] top-1.5 w-3.5 h-3.5 rounded-full bg-blue-500 ring-4 ring-slate-950" }
            div { class: "flex items-baseline gap-3 mb-3",
                h3 { class: "text-lg font-semibold text-white", "Version {note.version}" }
                span { class: "text-xs text-slate-500 font-mono", "{note.date}" }
            }
            div { class: "bg-slate-900 border border-slate-800 rounded-xl p-5 space-y-4",
                for (section, entries) in note.sections() {
                    div { key: "{section.title()}",
                        h4 { class: "text-[11px] uppercase tracking-wider font-semibold mb-1.5 {section_color(section)}",
                            "{section.title()}"
                        }
                        ul { class: "list-disc pl-5 space-y-1",
                            for entry in entries.iter() {
                                li { class: "text-sm text-slate-300", "{entry}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
