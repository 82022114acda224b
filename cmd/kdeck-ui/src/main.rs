use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{Console, ConsoleSettings};
use pkg_state::MemoryStore;

mod pages;
mod widgets;

use pages::*;

// ============================================================
// Routes
// ============================================================
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::ReleaseNotes {})]
    #[layout(Layout)]
        #[route("/release-notes")]
        ReleaseNotes {},
        #[route("/clusters")]
        Clusters {},
        #[route("/activity")]
        Activity {},
}

// ============================================================
// Assets
// ============================================================
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

fn init_console() -> Console<MemoryStore> {
    let store = MemoryStore::seeded().unwrap_or_else(|e| {
        warn!("Failed to load demo clusters: {}", e);
        MemoryStore::new()
    });
    Console::new(store, ConsoleSettings::default())
}

#[component]
fn App() -> Element {
    let console = use_signal(init_console);
    use_context_provider(move || console);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}

// ============================================================
// Layout
// ============================================================
#[component]
fn Layout() -> Element {
    let route: Route = use_route();
    let console = use_context::<widgets::ConsoleState>();
    let user = console.read().settings().current_user.clone();

    let link_cls = |target: &Route| {
        if *target == route {
            "flex items-center gap-2.5 px-3 py-2 rounded-lg text-sm font-medium text-blue-400 bg-blue-500/10"
        } else {
            "flex items-center gap-2.5 px-3 py-2 rounded-lg text-sm font-medium text-slate-400 hover:text-slate-200 hover:bg-slate-800/60 transition-all"
        }
    };

    rsx! {
        div { class: "flex min-h-screen",
            // Sidebar
            nav { class: "w-56 bg-slate-900 border-r border-slate-800 fixed top-0 left-0 bottom-0 flex flex-col",
                div { class: "px-5 py-5 border-b border-slate-800",
                    h1 { class: "text-lg font-bold text-white tracking-tight", "kdeck" }
                    p { class: "text-[10px] text-slate-500 uppercase tracking-widest mt-0.5", "cluster console" }
                }

                div { class: "flex-1 px-3 py-3 space-y-0.5 overflow-y-auto",
                    p { class: "text-[10px] text-slate-500 uppercase tracking-widest px-2 mb-1.5", "Menu" }
                    Link { class: link_cls(&Route::ReleaseNotes {}), to: Route::ReleaseNotes {},
                        Icon { width: 16, height: 16, icon: LdFileText }
                        span { "Release Notes" }
                    }
                    Link { class: link_cls(&Route::Clusters {}), to: Route::Clusters {},
                        Icon { width: 16, height: 16, icon: LdServer }
                        span { "Cluster Management" }
                    }
                    Link { class: link_cls(&Route::Activity {}), to: Route::Activity {},
                        Icon { width: 16, height: 16, icon: LdActivity }
                        span { "Activity" }
                    }
                }

                div { class: "px-5 py-4 border-t border-slate-800",
                    p { class: "text-[10px] text-slate-500 uppercase tracking-widest", "Signed in as" }
                    p { class: "text-xs text-slate-300 mt-0.5", "{user}" }
                }
            }

            // Main
            main { class: "ml-56 flex-1 p-8 min-h-screen",
                Outlet::<Route> {}
            }
        }
    }
}
