// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generator page — form on the left, live preview on the right, export and
// share actions above.
//
// One `EditingSession` lives for as long as the page is mounted. Leaving the
// page drops it, which abandons exports that have not finished.

use dioxus::prelude::*;

use papersmith_core::error::PapersmithError;
use papersmith_core::template::catalog;
use papersmith_core::types::{
    DocumentKind, ExportFormat, FieldId, FieldShape, Interest, ShareMethod,
};
use papersmith_document::{EditingSession, build_share_link, field_text, share_text, visible_fields};

use crate::Route;
use crate::pages::preview::Preview;
use crate::services::app_services::AppServices;
use crate::state::{AppState, Notice};

const EXPORT_FORMATS: [ExportFormat; 4] = [
    ExportFormat::Pdf,
    ExportFormat::Png,
    ExportFormat::Jpeg,
    ExportFormat::Docx,
];

const SHARE_METHODS: [(ShareMethod, &str); 3] = [
    (ShareMethod::Email, "Email"),
    (ShareMethod::Messaging, "WhatsApp"),
    (ShareMethod::Social, "LinkedIn"),
];

const FIELD_CSS: &str =
    "display: flex; flex-direction: column; gap: 4px; font-size: 13px; color: #333;";
const FOLDER_ROW_CSS: &str =
    "display: flex; gap: 8px; align-items: center; font-size: 13px; color: #666;";
const DISMISS_CSS: &str =
    "border: none; background: transparent; cursor: pointer; color: inherit;";

#[component]
pub fn Generator(kind: String) -> Element {
    let state = use_context::<Signal<AppState>>();

    let kind = match kind.parse::<DocumentKind>() {
        Ok(kind) => kind,
        Err(e) => {
            let notice = Notice::from_error(&e);
            return rsx! {
                NoticeBar { notice }
                Link { to: Route::Home {}, "Back to the start page" }
            };
        }
    };

    if !state.read().unlocked {
        return rsx! {
            p { "Enter the access key on the start page to open the generator." }
            Link { to: Route::Home {}, "Go to the start page" }
        };
    }

    rsx! {
        Editor { key: "{kind}", kind }
    }
}

#[component]
fn Editor(kind: DocumentKind) -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();
    let mut session = use_signal({
        let svc = svc.clone();
        move || svc.open_session(kind)
    });
    let mut notice = use_signal(|| Option::<Notice>::None);

    let surface = session.read().surface().ok();
    let has_preview = surface.is_some();
    let template_id = session.read().template().id;
    let export_dir = state.read().export_dir.clone();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 12px;",
            h1 { style: "margin: 0;", {kind.title()} }

            // Toolbar
            div { style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
                span { style: "color: #666; font-size: 13px;", "Template:" }
                for template in catalog() {
                    button {
                        key: "{template.id}",
                        style: chip_css(template.id == template_id),
                        onclick: move |_| {
                            session.write().set_template(template);
                        },
                        {template.name}
                    }
                }

                span { style: "width: 16px;" }

                for format in EXPORT_FORMATS {
                    button {
                        key: "{format}",
                        style: chip_css(false),
                        disabled: session.read().is_exporting(format),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let job = session.read().prepare_export(format);
                                let dir = state.read().export_dir.clone();
                                let svc = svc.clone();
                                notice.set(Some(Notice::info(format!("Exporting {format}..."))));
                                spawn(async move {
                                    let outcome = match job.run().await {
                                        Ok(artifact) => svc.save_artifact(&artifact, &dir),
                                        Err(e) => Err(e),
                                    };
                                    notice.set(Some(match outcome {
                                        Ok(path) => Notice::info(format!("{format} saved"))
                                            .with_detail(path.display().to_string()),
                                        Err(e) => {
                                            tracing::warn!(error = %e, %format, "export failed");
                                            Notice::from_error(&e)
                                        }
                                    }));
                                });
                            }
                        },
                        if session.read().is_exporting(format) {
                            "Exporting..."
                        } else {
                            "Download {format}"
                        }
                    }
                }
            }

            // Share actions
            div { style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
                span { style: "color: #666; font-size: 13px;", "Share:" }
                button {
                    style: chip_css(false),
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let org = organization(&session.read());
                            notice.set(Some(match svc.share().copy_share_text(kind, &org) {
                                Ok(_) => Notice::info("Share text copied"),
                                Err(e) => {
                                    Notice::from_error(&e).with_detail(share_text(kind, &org))
                                }
                            }));
                        }
                    },
                    "Copy text"
                }
                button {
                    style: chip_css(false),
                    disabled: !has_preview,
                    onclick: move |_| {
                        // The print stylesheet hides everything but the preview.
                        let _ = document::eval("window.print();");
                        tracing::info!(%kind, "print dialog requested");
                    },
                    "Print"
                }
                for (method, label) in SHARE_METHODS {
                    button {
                        key: "{label}",
                        style: chip_css(false),
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let payload = session
                                    .read()
                                    .share_payload(svc.config().share_base_url.as_deref());
                                if let Err(e) = svc.share().open_external_share(method, &payload) {
                                    let link = build_share_link(method, &payload)
                                        .ok()
                                        .map(|link| link.to_string());
                                    notice.set(Some(share_failure(&e, link)));
                                }
                            }
                        },
                        {label}
                    }
                }
            }

            div { style: FOLDER_ROW_CSS,
                "Saving to "
                code { {export_dir.display().to_string()} }
                button {
                    style: chip_css(false),
                    onclick: move |_| {
                        let current = state.read().export_dir.clone();
                        let picked = rfd::FileDialog::new().set_directory(&current).pick_folder();
                        if let Some(dir) = picked {
                            tracing::info!(path = %dir.display(), "export folder changed");
                            state.write().export_dir = dir;
                        }
                    },
                    "Change folder"
                }
            }

            if let Some(current) = notice() {
                NoticeBar { notice: current, on_dismiss: move |_| notice.set(None) }
            }

            // Form + preview
            div { style: "display: flex; gap: 24px; align-items: flex-start;",
                div { style: "flex: 0 0 340px; display: flex; flex-direction: column; gap: 10px;",
                    for &field in visible_fields(kind) {
                        FieldInput {
                            key: "{field}",
                            field,
                            value: field_text(session.read().model(), field),
                            on_change: move |raw: String| {
                                let result = session.write().input(field, &raw);
                                if let Err(e) = result {
                                    notice.set(Some(Notice::from_error(&e)));
                                }
                            },
                        }
                    }
                }
                div { style: "flex: 1; overflow: auto;",
                    if let Some(surface) = surface {
                        Preview { surface }
                    } else {
                        p { style: "color: #888;", "Preparing preview..." }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: FieldId, value: String, on_change: EventHandler<String>) -> Element {
    let label = field.label();
    let input_css = "width: 100%; padding: 8px; border-radius: 6px; border: 1px solid #ccc; \
                     box-sizing: border-box; font-size: 14px;";

    let control = match field.shape() {
        FieldShape::Text if is_long_text(field) => rsx! {
            textarea {
                style: "{input_css} min-height: 72px;",
                placeholder: field.placeholder(),
                value: value,
                oninput: move |evt| on_change.call(evt.value()),
            }
        },
        FieldShape::Text => rsx! {
            input {
                style: input_css,
                placeholder: field.placeholder(),
                value: value,
                oninput: move |evt| on_change.call(evt.value()),
            }
        },
        // Committed on blur: the list codec drops blank lines, so applying
        // every keystroke would swallow a freshly typed newline.
        FieldShape::Lines => rsx! {
            textarea {
                style: "{input_css} min-height: 96px;",
                placeholder: "One item per line",
                value: value,
                onchange: move |evt| on_change.call(evt.value()),
            }
        },
        FieldShape::Choice => rsx! {
            select {
                style: input_css,
                value: value,
                onchange: move |evt| on_change.call(evt.value()),
                for interest in [Interest::Yes, Interest::Later, Interest::No] {
                    option { key: "{interest.as_str()}", value: interest.as_str(),
                        {interest.describe()}
                    }
                }
            }
        },
        FieldShape::Flag => rsx! {
            input {
                r#type: "checkbox",
                checked: value == "true",
                onchange: move |evt| on_change.call(evt.checked().to_string()),
            }
        },
    };

    rsx! {
        label { style: FIELD_CSS,
            span { {label} }
            {control}
        }
    }
}

#[component]
fn NoticeBar(notice: Notice, on_dismiss: Option<EventHandler<()>>) -> Element {
    let (background, color) = notice.colors();
    let bar_css = format!(
        "display: flex; gap: 12px; align-items: flex-start; padding: 10px 14px; \
         border-radius: 8px; background: {background}; color: {color};"
    );
    rsx! {
        div { style: bar_css,
            div { style: "flex: 1;",
                div { style: "font-weight: 600;", {notice.message.clone()} }
                if let Some(detail) = notice.detail.clone() {
                    div { style: "font-size: 13px; margin-top: 4px; word-break: break-all;",
                        {detail}
                    }
                }
            }
            if let Some(handler) = on_dismiss {
                button {
                    style: DISMISS_CSS,
                    onclick: move |_| handler.call(()),
                    "Dismiss"
                }
            }
        }
    }
}

fn chip_css(active: bool) -> String {
    let (background, color) = if active { ("#1f2a44", "white") } else { ("white", "#1f2a44") };
    format!(
        "padding: 6px 12px; border-radius: 16px; border: 1px solid #1f2a44; \
         background: {background}; color: {color}; cursor: pointer; font-size: 13px;"
    )
}

fn is_long_text(field: FieldId) -> bool {
    matches!(
        field,
        FieldId::Purpose
            | FieldId::CustomNote
            | FieldId::Introduction
            | FieldId::Notes
            | FieldId::Feedback
    )
}

fn organization(session: &EditingSession) -> String {
    session
        .model()
        .text(FieldId::Organization)
        .unwrap_or_default()
        .to_owned()
}

/// Share actions fail on hosts without a bridge; show the link so the user
/// can open it themselves.
fn share_failure(err: &PapersmithError, link: Option<String>) -> Notice {
    let notice = Notice::from_error(err);
    match link {
        Some(link) => notice.with_detail(format!("Open this link yourself: {link}")),
        None => notice,
    }
}
