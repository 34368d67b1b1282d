// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Share engine — clipboard text, native print, and external share links.
//
// Every action goes through the platform bridge. Link construction is kept
// pure so the UI can show a link without opening it.

use papersmith_bridge::PlatformBridge;
use papersmith_core::error::{PapersmithError, Result};
use papersmith_core::types::{DocumentKind, ShareMethod, SharePayload};
use tracing::{info, instrument};
use url::Url;
use urlencoding::encode;

use crate::export::ExportArtifact;

const MAILTO: &str = "mailto:";
const MESSAGING: &str = "https://wa.me/";
const SOCIAL_LINK: &str = "https://www.linkedin.com/sharing/share-offsite/";
const SOCIAL_TEXT: &str = "https://twitter.com/intent/tweet";

/// Sentence copied to the clipboard for `kind`.
pub fn share_text(kind: DocumentKind, organization: &str) -> String {
    let organization = match organization.trim() {
        "" => "our organization",
        org => org,
    };
    format!(
        "Check out the {} from {} generated with Papersmith.",
        kind.title(),
        organization
    )
}

/// Build the external link for `method` with every component percent-encoded.
///
/// Social shares use the payload URL when there is one and fall back to a
/// text-only post otherwise.
pub fn build_share_link(method: ShareMethod, payload: &SharePayload) -> Result<Url> {
    let link_url = payload
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());
    let with_link = |text: &str, sep: &str| match link_url {
        Some(url) if text.is_empty() => url.to_owned(),
        Some(url) => format!("{text}{sep}{url}"),
        None => text.to_owned(),
    };

    let raw = match method {
        ShareMethod::Email => format!(
            "{MAILTO}?subject={}&body={}",
            encode(&payload.subject),
            encode(&with_link(&payload.body, "\n\n"))
        ),
        ShareMethod::Messaging => {
            format!("{MESSAGING}?text={}", encode(&with_link(&payload.body, " ")))
        }
        ShareMethod::Social => match link_url {
            Some(url) => format!("{SOCIAL_LINK}?url={}", encode(url)),
            None => {
                let text = if payload.body.trim().is_empty() {
                    &payload.subject
                } else {
                    &payload.body
                };
                format!("{SOCIAL_TEXT}?text={}", encode(text))
            }
        },
    };

    Url::parse(&raw).map_err(|err| PapersmithError::ShareLink(format!("{raw}: {err}")))
}

pub struct ShareEngine {
    bridge: Box<dyn PlatformBridge>,
}

impl ShareEngine {
    pub fn new(bridge: Box<dyn PlatformBridge>) -> Self {
        Self { bridge }
    }

    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    /// Put the share sentence on the clipboard and return it.
    #[instrument(skip(self))]
    pub fn copy_share_text(&self, kind: DocumentKind, organization: &str) -> Result<String> {
        let text = share_text(kind, organization);
        self.bridge.set_clipboard_text(&text)?;
        info!(%kind, "share text copied");
        Ok(text)
    }

    /// Hand an exported rendition to the native print dialog.
    #[instrument(skip_all, fields(file = %artifact.file_name))]
    pub fn trigger_print(&self, artifact: &ExportArtifact) -> Result<()> {
        self.bridge
            .show_print_dialog(&artifact.bytes, artifact.mime_type())?;
        info!("print dialog shown");
        Ok(())
    }

    /// Build the link for `method` and open it. Returns the opened link.
    #[instrument(skip(self, payload))]
    pub fn open_external_share(&self, method: ShareMethod, payload: &SharePayload) -> Result<Url> {
        let link = build_share_link(method, payload)?;
        self.bridge.open_url(link.as_str())?;
        info!(scheme = link.scheme(), "external share opened");
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_bridge::{NativeClipboard, NativeOpener, NativePrint};
    use papersmith_core::types::ExportFormat;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        clipboard: Vec<String>,
        printed: Vec<(usize, String)>,
        opened: Vec<String>,
    }

    struct RecordingBridge(Rc<RefCell<Calls>>);

    impl PlatformBridge for RecordingBridge {
        fn platform_name(&self) -> &str {
            "test"
        }
    }

    impl NativeClipboard for RecordingBridge {
        fn set_clipboard_text(&self, text: &str) -> Result<()> {
            self.0.borrow_mut().clipboard.push(text.to_owned());
            Ok(())
        }
    }

    impl NativePrint for RecordingBridge {
        fn show_print_dialog(&self, document: &[u8], mime_type: &str) -> Result<()> {
            self.0
                .borrow_mut()
                .printed
                .push((document.len(), mime_type.to_owned()));
            Ok(())
        }
    }

    impl NativeOpener for RecordingBridge {
        fn open_url(&self, url: &str) -> Result<()> {
            self.0.borrow_mut().opened.push(url.to_owned());
            Ok(())
        }
    }

    fn recording() -> (ShareEngine, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let engine = ShareEngine::new(Box::new(RecordingBridge(Rc::clone(&calls))));
        (engine, calls)
    }

    fn payload(url: Option<&str>) -> SharePayload {
        SharePayload {
            subject: "Letter of Clearance".into(),
            body: "Visit & follow-up".into(),
            url: url.map(str::to_owned),
        }
    }

    #[test]
    fn share_text_names_kind_and_org() {
        assert_eq!(
            share_text(DocumentKind::Certificate, "Acme Labs"),
            format!(
                "Check out the {} from Acme Labs generated with Papersmith.",
                DocumentKind::Certificate.title()
            )
        );
        assert!(share_text(DocumentKind::Letterhead, "  ").contains("from our organization"));
    }

    #[test]
    fn copy_goes_through_the_clipboard() {
        let (engine, calls) = recording();
        let text = engine.copy_share_text(DocumentKind::Clearance, "UNCIF").unwrap();
        assert_eq!(calls.borrow().clipboard, vec![text]);
    }

    #[test]
    fn email_link_is_percent_encoded() {
        let link = build_share_link(ShareMethod::Email, &payload(None)).unwrap();
        assert_eq!(link.scheme(), "mailto");
        assert_eq!(
            link.as_str(),
            "mailto:?subject=Letter%20of%20Clearance&body=Visit%20%26%20follow-up"
        );
    }

    #[test]
    fn messaging_link_appends_url() {
        let link =
            build_share_link(ShareMethod::Messaging, &payload(Some("https://x.org/a"))).unwrap();
        assert!(link.as_str().starts_with("https://wa.me/?text="));
        let text = link
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(text, "Visit & follow-up https://x.org/a");
    }

    #[test]
    fn social_prefers_a_url_and_falls_back_to_text() {
        let with_url =
            build_share_link(ShareMethod::Social, &payload(Some("https://x.org/a"))).unwrap();
        assert_eq!(with_url.host_str(), Some("www.linkedin.com"));
        assert_eq!(
            with_url.query_pairs().find(|(k, _)| k == "url").map(|(_, v)| v.into_owned()),
            Some("https://x.org/a".to_owned())
        );

        let without = build_share_link(ShareMethod::Social, &payload(Some("  "))).unwrap();
        assert_eq!(without.host_str(), Some("twitter.com"));
        assert_eq!(
            without.query_pairs().find(|(k, _)| k == "text").map(|(_, v)| v.into_owned()),
            Some("Visit & follow-up".to_owned())
        );
    }

    #[test]
    fn open_external_share_opens_the_built_link() {
        let (engine, calls) = recording();
        let link = engine.open_external_share(ShareMethod::Email, &payload(None)).unwrap();
        assert_eq!(calls.borrow().opened, vec![link.to_string()]);
    }

    #[test]
    fn print_hands_over_artifact_bytes() {
        let (engine, calls) = recording();
        let artifact = ExportArtifact::new(
            DocumentKind::Certificate,
            ExportFormat::Png,
            vec![0; 16],
            Some((4, 4)),
        );
        engine.trigger_print(&artifact).unwrap();
        assert_eq!(calls.borrow().printed, vec![(16, "image/png".to_owned())]);
    }

    #[test]
    fn stub_bridge_reports_unavailable() {
        let engine = ShareEngine::new(Box::new(papersmith_bridge::stub::StubBridge));
        assert!(matches!(
            engine.copy_share_text(DocumentKind::Certificate, ""),
            Err(PapersmithError::PlatformUnavailable)
        ));
        assert!(matches!(
            engine.open_external_share(ShareMethod::Social, &SharePayload::default()),
            Err(PapersmithError::PlatformUnavailable)
        ));
    }
}
