// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Form controller — which fields each document kind collects, and immutable
// field-scoped edits of the document model.

use papersmith_core::error::{PapersmithError, Result};
use papersmith_core::model::{DocumentModel, encode_lines};
use papersmith_core::types::{DocumentKind, FieldId, FieldValue};
use tracing::debug;

use FieldId::*;

const CERTIFICATE: &[FieldId] = &[
    Name,
    Title,
    Organization,
    Department,
    Purpose,
    Date,
    CertificateNumber,
    ValidUntil,
    Authority,
];

const LETTERHEAD: &[FieldId] = &[Date, CustomNote];

const CLEARANCE: &[FieldId] = &[
    Date,
    Name,
    Title,
    Organization,
    Purpose,
    VisitLocation,
    VisitTime,
    FrontlinerName,
    FrontlinerPosition,
    FrontlinerPhone,
    FrontlinerEmail,
    Interest,
    ServiceConsultation,
    ServiceTraining,
    ServicePartnership,
    ServicePublication,
    ServiceOther,
    Notes,
    Feedback,
];

const COLLABORATION: &[FieldId] = &[
    Date,
    Organization,
    Name,
    Title,
    Purpose,
    Introduction,
    Scope,
    Understanding,
    SignatoryName,
    SignatoryTitle,
    Email,
    Phone,
];

/// Ordered fields collected and displayed for `kind`.
pub fn visible_fields(kind: DocumentKind) -> &'static [FieldId] {
    match kind {
        DocumentKind::Certificate => CERTIFICATE,
        DocumentKind::Letterhead => LETTERHEAD,
        DocumentKind::Clearance => CLEARANCE,
        DocumentKind::Collaboration => COLLABORATION,
    }
}

pub fn is_visible(kind: DocumentKind, field: FieldId) -> bool {
    visible_fields(kind).contains(&field)
}

/// Return a copy of `model` with `field` set to `value`.
///
/// Every other field keeps its value. Fields outside the kind's visible set
/// are rejected rather than silently stored.
pub fn apply_edit(
    model: &DocumentModel,
    field: FieldId,
    value: FieldValue,
) -> Result<DocumentModel> {
    if !is_visible(model.kind, field) {
        return Err(PapersmithError::FieldNotVisible {
            kind: model.kind,
            field,
        });
    }
    let mut next = model.clone();
    next.set(field, value)?;
    debug!(kind = %model.kind, field = ?field, "field edited");
    Ok(next)
}

/// Coerce a raw input string and apply it.
pub fn apply_input(model: &DocumentModel, field: FieldId, raw: &str) -> Result<DocumentModel> {
    apply_edit(model, field, FieldValue::coerce(field, raw)?)
}

/// The value of `field` as an input control shows it.
pub fn field_text(model: &DocumentModel, field: FieldId) -> String {
    match model.value(field) {
        FieldValue::Text(text) => text,
        FieldValue::Lines(items) => encode_lines(&items),
        FieldValue::Choice(interest) => interest.as_str().to_owned(),
        FieldValue::Flag(on) => on.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papersmith_core::types::Interest as Choice;

    const CORE: [FieldId; 5] = [Name, Title, Organization, Date, Purpose];

    #[test]
    fn letterhead_is_date_and_note_only() {
        assert_eq!(visible_fields(DocumentKind::Letterhead), &[Date, CustomNote]);
    }

    #[test]
    fn other_kinds_collect_the_core_fields() {
        for kind in DocumentKind::ALL {
            let fields = visible_fields(kind);
            assert!(!fields.is_empty());
            assert_eq!(fields, visible_fields(kind));
            if kind != DocumentKind::Letterhead {
                for core in CORE {
                    assert!(fields.contains(&core), "{kind} is missing {core}");
                }
            }
        }
    }

    #[test]
    fn visible_sets_have_no_duplicates() {
        for kind in DocumentKind::ALL {
            let fields = visible_fields(kind);
            for (i, a) in fields.iter().enumerate() {
                assert!(!fields[i + 1..].contains(a), "{kind} lists {a} twice");
            }
        }
    }

    #[test]
    fn edit_touches_only_one_field() {
        let model = DocumentModel::new(DocumentKind::Certificate, "2 June 2026");
        let next = apply_input(&model, Name, "Ada Lovelace").unwrap();

        assert_eq!(next.data.name, "Ada Lovelace");
        assert_eq!(model.data.name, "");
        let mut reverted = next.clone();
        reverted.data.name.clear();
        assert_eq!(reverted, model);
    }

    #[test]
    fn empty_string_is_a_valid_edit() {
        let model = DocumentModel::new(DocumentKind::Letterhead, "today");
        let next = apply_input(&model, Date, "").unwrap();
        assert_eq!(next.data.date, "");
    }

    #[test]
    fn hidden_field_is_rejected() {
        let model = DocumentModel::new(DocumentKind::Letterhead, "today");
        let err = apply_input(&model, Name, "Someone").unwrap_err();
        assert!(matches!(
            err,
            PapersmithError::FieldNotVisible {
                kind: DocumentKind::Letterhead,
                field: Name
            }
        ));
    }

    #[test]
    fn previously_filled_hidden_field_survives_edits() {
        let mut model = DocumentModel::new(DocumentKind::Letterhead, "today");
        model.data.name = "Left over".into();
        let next = apply_input(&model, CustomNote, "Ref 12/2026").unwrap();
        assert_eq!(next.data.name, "Left over");
    }

    #[test]
    fn list_field_round_trips_through_input_text() {
        let model = DocumentModel::new(DocumentKind::Collaboration, "today");
        let next = apply_input(&model, Scope, "Research\n\n  Internships  \n").unwrap();
        assert_eq!(next.collaboration.scope, vec!["Research", "Internships"]);
        assert_eq!(field_text(&next, Scope), "Research\nInternships");
    }

    #[test]
    fn choice_and_flag_inputs_are_coerced() {
        let model = DocumentModel::new(DocumentKind::Clearance, "today");
        let next = apply_input(&model, Interest, "yes").unwrap();
        let next = apply_input(&next, ServicePartnership, "true").unwrap();
        assert_eq!(next.clearance.interest, Choice::Yes);
        assert!(next.clearance.requested_services.partnership);
        assert_eq!(field_text(&next, Interest), "yes");
        assert_eq!(field_text(&next, ServicePartnership), "true");
    }
}
