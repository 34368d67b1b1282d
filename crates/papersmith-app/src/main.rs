// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Papersmith — official document generator.
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::generator::Generator;
use pages::home::Home;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Papersmith starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/generate/:kind")]
    Generator { kind: String },
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| {
        let svc = AppServices::init();
        tracing::info!(platform = svc.share().platform_name(), "backend services initialised");
        svc
    });

    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

const SHELL_CSS: &str = "display: flex; flex-direction: column; height: 100vh; \
                         font-family: system-ui, -apple-system, sans-serif;";
const HEADER_CSS: &str = "display: flex; align-items: center; gap: 16px; padding: 10px 16px; \
                          border-bottom: 1px solid #e0e0e0; background: #fafafa;";
const BRAND_CSS: &str = "text-decoration: none; color: #1f2a44; font-weight: 600; font-size: 18px;";

/// Printing shows the document preview and nothing else.
const PRINT_CSS: &str = "@media print { \
    body * { visibility: hidden; } \
    #papersmith-preview, #papersmith-preview * { visibility: visible; } \
    #papersmith-preview { position: absolute; left: 0; top: 0; box-shadow: none; } \
}";

/// Header bar wrapping every page.
#[component]
fn Shell() -> Element {
    rsx! {
        style { {PRINT_CSS} }
        div { class: "app-container", style: SHELL_CSS,
            header { style: HEADER_CSS,
                Link { to: Route::Home {}, style: BRAND_CSS, "Papersmith" }
                span { style: "color: #888; font-size: 13px;", "Official document generator" }
            }

            div { class: "page-content", style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }
        }
    }
}
