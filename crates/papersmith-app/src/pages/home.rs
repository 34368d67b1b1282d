// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — pick a document type, then unlock the generator with the
// access key.

use dioxus::prelude::*;

use papersmith_core::types::{DocumentKind, ExportFormat};
use papersmith_security::GateForm;

use crate::Route;
use crate::services::app_services::AppServices;
use crate::state::AppState;

const GRID_CSS: &str =
    "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); \
     gap: 12px; margin: 24px 0;";
const CARD_CSS: &str = "padding: 20px; border-radius: 12px; border: 1px solid #d0d7e2; \
                        background: white; text-align: left; cursor: pointer;";
const KEY_PANEL_CSS: &str = "max-width: 420px; padding: 16px; border: 1px solid #e0e0e0; \
                             border-radius: 12px; background: #fafafa;";
const KEY_INPUT_CSS: &str = "width: 100%; padding: 10px; border-radius: 8px; \
                             border: 1px solid #ccc; box-sizing: border-box;";
const KEY_SUBMIT_CSS: &str = "margin-top: 12px; width: 100%; padding: 10px; border-radius: 8px; \
                              border: none; background: #1f2a44; color: white;";

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut form = use_signal(GateForm::new);
    let mut denied = use_signal(|| false);
    let nav = navigator();

    let mut choose = move |kind: DocumentKind| {
        if state.read().unlocked {
            nav.push(Route::Generator { kind: kind.slug().to_owned() });
        } else {
            denied.set(false);
            form.write().choose(kind.slug());
        }
    };

    let mut submit = {
        let svc = svc.clone();
        move || {
            let destination = form.write().submit(svc.gate());
            match destination {
                Some(slug) => {
                    state.write().unlocked = true;
                    nav.push(Route::Generator { kind: slug });
                }
                None => denied.set(true),
            }
        }
    };

    let pending = form.read().destination().map(str::to_owned);

    rsx! {
        div {
            h1 { "Create an official document" }
            p { style: "color: #666;",
                "Choose what you need. Everything is filled in on the next page with a live "
                "preview."
            }

            div { style: GRID_CSS,
                for kind in DocumentKind::ALL {
                    button {
                        key: "{kind}",
                        style: CARD_CSS,
                        onclick: move |_| choose(kind),
                        div { style: "font-size: 16px; font-weight: 600; color: #1f2a44;",
                            {kind.title()}
                        }
                        div { style: "font-size: 12px; color: #888; margin-top: 6px;",
                            {kind.file_name(ExportFormat::Pdf)}
                        }
                    }
                }
            }

            if let Some(slug) = pending {
                div { style: KEY_PANEL_CSS,
                    h2 { style: "margin-top: 0; font-size: 18px;", "Access key" }
                    p { style: "color: #666; font-size: 14px;",
                        "Enter the key to open the "
                        strong { "{slug}" }
                        " generator."
                    }
                    form {
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            submit();
                        },
                        input {
                            r#type: "password",
                            autofocus: true,
                            style: KEY_INPUT_CSS,
                            value: form.read().input.clone(),
                            oninput: move |evt| {
                                denied.set(false);
                                form.write().input = evt.value();
                            },
                        }
                        button {
                            r#type: "submit",
                            style: KEY_SUBMIT_CSS,
                            "Continue"
                        }
                    }
                    if denied() {
                        p { style: "color: #a61b1b; font-size: 14px; margin-bottom: 0;",
                            "That key was not accepted. Check it and try again."
                        }
                    }
                }
            }
        }
    }
}
