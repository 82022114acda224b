use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{Console, Message, Notice};
use pkg_state::MemoryStore;
use pkg_types::cluster::ClusterType;
use pkg_types::quota::{format_amount, format_percent, QuotaRecord, UsageLevel, UsageReading};

pub type ConsoleState = Signal<Console<MemoryStore>>;

/// Dispatch a message. Failures already show up as the console notice.
pub fn send(mut console: ConsoleState, msg: Message) {
    if let Err(e) = console.write().dispatch(msg) {
        debug!("message rejected: {}", e);
    }
}

// Circle of circumference 100 so the dash length is the percentage.
const RING_PATH: &str = "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

fn tier_class(reading: &UsageReading) -> &'static str {
    match reading.level() {
        Some(UsageLevel::Normal) => "usage-normal",
        Some(UsageLevel::Warning) => "usage-warning",
        Some(UsageLevel::Danger) => "usage-danger",
        None => "usage-invalid",
    }
}

#[component]
pub fn UsageRing(reading: UsageReading, #[props(default = "w-16 h-16".to_string())] size: String) -> Element {
    let tier = tier_class(&reading);
    let dash = format!("{}, 100", reading.percent().clamp(0.0, 100.0));
    let label = if reading.is_invalid() {
        "0%".to_string()
    } else {
        format_percent(reading.percent())
    };
    let title = if reading.is_invalid() { "Invalid quota" } else { "" };

    rsx! {
        div { class: "usage-ring {size}", title: "{title}",
            svg { view_box: "0 0 36 36", class: "w-full h-full",
                path { class: "ring-bg", d: RING_PATH }
                path { class: "ring-fg {tier}", stroke_dasharray: "{dash}", d: RING_PATH }
                text { x: "18", y: "20.35", class: "ring-text {tier}", "{label}" }
            }
        }
    }
}

#[component]
pub fn ResourceItem(record: QuotaRecord) -> Element {
    let unit = record.dimension.unit();
    let used = format_amount(record.used);
    let max = format_amount(record.max);
    let available = format_amount(record.available());

    rsx! {
        div { class: "bg-slate-800/50 border border-slate-700/60 rounded-xl p-5 text-center",
            h3 { class: "text-sm font-semibold text-slate-200 mb-3", "{record.dimension.title()}" }
            UsageRing { reading: record.reading(), size: "w-28 h-28 mx-auto" }
            div { class: "mt-4 space-y-1.5 text-xs",
                div { class: "flex justify-between text-slate-400",
                    span { "Used:" }
                    span { class: "text-slate-200 font-mono", "{used} {unit}" }
                }
                div { class: "flex justify-between text-slate-400",
                    span { "Max:" }
                    span { class: "text-slate-200 font-mono", "{max} {unit}" }
                }
                div { class: "flex justify-between text-slate-400 border-t border-slate-700 pt-1.5",
                    span { "Available:" }
                    span { class: "text-slate-200 font-mono", "{available} {unit}" }
                }
            }
        }
    }
}

#[component]
pub fn TypeBadge(cluster_type: ClusterType) -> Element {
    let cls = match cluster_type {
        ClusterType::Public => "bg-violet-500/10 text-violet-400 border border-violet-500/20",
        ClusterType::Private => "bg-slate-500/10 text-slate-300 border border-slate-500/20",
    };
    rsx! {
        span { class: "inline-block px-2.5 py-0.5 rounded-full text-[11px] font-medium {cls}", "{cluster_type.label()}" }
    }
}

#[component]
pub fn NoticeBanner(notice: Notice) -> Element {
    let console = use_context::<ConsoleState>();
    let cls = if notice.is_error() {
        "bg-red-500/10 text-red-300 border border-red-500/30"
    } else {
        "bg-emerald-500/10 text-emerald-300 border border-emerald-500/30"
    };

    rsx! {
        div { class: "flex items-center justify-between gap-3 px-4 py-2.5 mb-5 rounded-lg text-sm {cls}",
            span { "{notice.text()}" }
            button {
                class: "opacity-70 hover:opacity-100 transition-opacity",
                onclick: move |_| send(console, Message::DismissNotice),
                Icon { width: 14, height: 14, icon: LdX }
            }
        }
    }
}

/// Modal frame shared by every console dialog. The X button closes it.
#[component]
pub fn DialogFrame(title: String, #[props(default)] wide: bool, children: Element) -> Element {
    let console = use_context::<ConsoleState>();
    let width = if wide { "max-w-4xl" } else { "max-w-xl" };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-6",
            div { class: "w-full {width} max-h-[90vh] overflow-y-auto bg-slate-900 border border-slate-800 rounded-xl shadow-2xl",
                div { class: "flex items-center justify-between px-5 py-3.5 border-b border-slate-800",
                    h3 { class: "text-sm font-semibold text-white", "{title}" }
                    button {
                        class: "text-slate-500 hover:text-slate-200 transition-colors",
                        onclick: move |_| send(console, Message::Close),
                        Icon { width: 16, height: 16, icon: LdX }
                    }
                }
                div { class: "p-5", {children} }
            }
        }
    }
}

/// Cancel / confirm button row at the bottom of a dialog.
#[component]
pub fn DialogActions(
    confirm: String,
    #[props(default)] danger: bool,
    #[props(default)] disabled: bool,
) -> Element {
    let console = use_context::<ConsoleState>();
    let confirm_cls = if danger {
        "px-4 py-1.5 rounded-lg text-sm font-medium text-white bg-red-600 hover:bg-red-500 transition-all disabled:opacity-40"
    } else {
        "px-4 py-1.5 rounded-lg text-sm font-medium text-white bg-blue-600 hover:bg-blue-500 transition-all disabled:opacity-40"
    };

    rsx! {
        div { class: "flex justify-end gap-2 mt-5 pt-4 border-t border-slate-800",
            button {
                class: "px-4 py-1.5 rounded-lg text-sm font-medium text-slate-300 bg-slate-800 border border-slate-700 hover:bg-slate-700 transition-all",
                onclick: move |_| send(console, Message::Close),
                "Cancel"
            }
            button {
                class: confirm_cls,
                disabled,
                onclick: move |_| send(console, Message::Save),
                "{confirm}"
            }
        }
    }
}
