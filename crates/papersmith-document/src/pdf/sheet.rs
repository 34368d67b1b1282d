// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF sheet — the fields the PDF rendition carries, per kind.
//
// The PDF does not capture the preview. It lists a fixed subset of fields as
// label/value pairs, so a field added to the preview only reaches the PDF once
// it is added here too.

use papersmith_core::model::DocumentModel;
use papersmith_core::types::{DocumentKind, FieldId, FieldValue};

use FieldId::*;

/// Fields emitted into the PDF for `kind`, in print order.
pub fn pdf_fields(kind: DocumentKind) -> &'static [FieldId] {
    match kind {
        DocumentKind::Certificate => &[
            Name,
            Title,
            Organization,
            Purpose,
            Date,
            CertificateNumber,
            ValidUntil,
            Authority,
        ],
        DocumentKind::Letterhead => &[Date, CustomNote],
        DocumentKind::Clearance => &[
            Name,
            Title,
            Organization,
            Purpose,
            Date,
            FrontlinerName,
            VisitLocation,
            Interest,
        ],
        DocumentKind::Collaboration => &[
            Organization,
            Name,
            Title,
            Purpose,
            Date,
            Scope,
            SignatoryName,
        ],
    }
}

/// Text content of one PDF page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfSheet {
    pub title: String,
    /// `(label, value)` pairs; blank values carry the field placeholder.
    pub entries: Vec<(String, String)>,
}

impl PdfSheet {
    pub fn from_model(model: &DocumentModel) -> Self {
        let entries = pdf_fields(model.kind)
            .iter()
            .map(|&field| (field.label().to_owned(), entry_value(model, field)))
            .collect();
        Self {
            title: model.kind.title().to_owned(),
            entries,
        }
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

fn entry_value(model: &DocumentModel, field: FieldId) -> String {
    let text = match model.value(field) {
        FieldValue::Text(text) => text.trim().to_owned(),
        FieldValue::Lines(items) => items.join("; "),
        FieldValue::Choice(interest) => interest.describe().to_owned(),
        FieldValue::Flag(on) => if on { "Yes" } else { "No" }.to_owned(),
    };
    if text.is_empty() {
        field.placeholder()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{apply_edit, visible_fields};

    #[test]
    fn pdf_fields_are_visible_fields() {
        for kind in DocumentKind::ALL {
            let visible = visible_fields(kind);
            for field in pdf_fields(kind) {
                assert!(visible.contains(field), "{field} is not visible for {kind}");
            }
        }
    }

    #[test]
    fn blank_fields_print_placeholders() {
        let model = DocumentModel::new(DocumentKind::Certificate, "");
        let sheet = PdfSheet::from_model(&model);
        assert_eq!(sheet.title, DocumentKind::Certificate.title());
        assert_eq!(sheet.entries.len(), pdf_fields(DocumentKind::Certificate).len());
        for (_, value) in &sheet.entries {
            assert!(value.starts_with('[') && value.ends_with(']'));
        }
    }

    #[test]
    fn filled_fields_print_their_values() {
        let model = DocumentModel::new(DocumentKind::Collaboration, "4 June 2026");
        let model = apply_edit(
            &model,
            Scope,
            FieldValue::Lines(vec!["Joint research".into(), "Student exchange".into()]),
        )
        .unwrap();
        let model = apply_edit(&model, Name, FieldValue::Text("  Grace Hopper ".into())).unwrap();

        let sheet = PdfSheet::from_model(&model);
        assert_eq!(sheet.value_of(Scope.label()), Some("Joint research; Student exchange"));
        assert_eq!(sheet.value_of(Name.label()), Some("Grace Hopper"));
        assert_eq!(sheet.value_of(Date.label()), Some("4 June 2026"));
    }

    #[test]
    fn preview_only_fields_stay_out() {
        let model = DocumentModel::new(DocumentKind::Collaboration, "");
        let model = apply_edit(&model, Email, FieldValue::Text("ref@example.org".into())).unwrap();
        let sheet = PdfSheet::from_model(&model);
        assert!(sheet.entries.iter().all(|(_, v)| v != "ref@example.org"));
    }

    #[test]
    fn clearance_interest_is_described() {
        let model = DocumentModel::new(DocumentKind::Clearance, "");
        let sheet = PdfSheet::from_model(&model);
        assert_eq!(
            sheet.value_of(Interest.label()),
            Some(papersmith_core::types::Interest::Later.describe())
        );
    }
}
