// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document records — the data a user fills in for one document instance.
//
// Records are plain data. Empty strings mean "not filled in yet"; the renderer
// substitutes placeholders for them.

use serde::{Deserialize, Serialize};

use crate::error::PapersmithError;
use crate::types::{DocumentKind, FieldId, FieldShape, FieldValue, Interest};

/// Shared header used by every document kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentData {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub purpose: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub certificate_number: String,
    pub valid_until: String,
    pub authority: String,
    pub custom_note: String,
}

/// Frontliner who carried out a visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontliner {
    pub name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

/// Where and when the visit happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub location: String,
    pub time: String,
}

/// Services the visited party asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedServices {
    pub consultation: bool,
    pub training: bool,
    pub partnership: bool,
    pub publication: bool,
    /// Freeform description of anything not covered by the flags.
    pub other: String,
}

impl RequestedServices {
    /// Labels of every requested service, flags first, then `other`.
    pub fn selected(&self) -> Vec<String> {
        let mut out: Vec<String> = [
            (self.consultation, FieldId::ServiceConsultation),
            (self.training, FieldId::ServiceTraining),
            (self.partnership, FieldId::ServicePartnership),
            (self.publication, FieldId::ServicePublication),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, field)| field.label().to_owned())
        .collect();
        if !self.other.trim().is_empty() {
            out.push(self.other.trim().to_owned());
        }
        out
    }
}

/// Clearance-letter specifics. The representative's identity and the visit
/// date/purpose live in the shared [`DocumentData`] header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearanceData {
    pub frontliner: Frontliner,
    pub visit: Visit,
    pub interest: Interest,
    pub requested_services: RequestedServices,
    pub notes: String,
    pub feedback: String,
}

/// Person signing on behalf of the partner organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    pub name: String,
    pub title: String,
}

/// Collaboration-proposal specifics. The partner's identity lives in the
/// shared header (organization, name, title).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationData {
    pub introduction: String,
    pub scope: Vec<String>,
    pub understanding: Vec<String>,
    pub signatory: Signatory,
}

/// Everything entered for one document instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub kind: DocumentKind,
    pub data: DocumentData,
    pub clearance: ClearanceData,
    pub collaboration: CollaborationData,
}

impl DocumentModel {
    /// Fresh model for `kind` with the date pre-filled and everything else empty.
    pub fn new(kind: DocumentKind, today: impl Into<String>) -> Self {
        Self {
            kind,
            data: DocumentData {
                date: today.into(),
                ..DocumentData::default()
            },
            clearance: ClearanceData::default(),
            collaboration: CollaborationData::default(),
        }
    }

    /// Current value of `field`.
    pub fn value(&self, field: FieldId) -> FieldValue {
        match field.shape() {
            FieldShape::Text => {
                FieldValue::Text(self.text_slot(field).cloned().unwrap_or_default())
            }
            FieldShape::Lines => {
                FieldValue::Lines(self.lines_slot(field).cloned().unwrap_or_default())
            }
            FieldShape::Choice => FieldValue::Choice(self.clearance.interest),
            FieldShape::Flag => FieldValue::Flag(self.flag_slot(field).copied().unwrap_or(false)),
        }
    }

    /// Trimmed text of a text field, or `None` when it is blank.
    pub fn text(&self, field: FieldId) -> Option<&str> {
        self.text_slot(field)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Items of a list field (empty when the field is not a list).
    pub fn lines(&self, field: FieldId) -> &[String] {
        self.lines_slot(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Overwrite one field in place. Only this field changes.
    pub fn set(&mut self, field: FieldId, value: FieldValue) -> Result<(), PapersmithError> {
        if value.shape() != field.shape() {
            return Err(PapersmithError::InvalidFieldValue {
                field,
                reason: format!("expected {:?}, got {:?}", field.shape(), value.shape()),
            });
        }
        match value {
            FieldValue::Text(text) => {
                if let Some(slot) = self.text_slot_mut(field) {
                    *slot = text;
                }
            }
            FieldValue::Lines(items) => {
                if let Some(slot) = self.lines_slot_mut(field) {
                    *slot = items;
                }
            }
            FieldValue::Choice(interest) => self.clearance.interest = interest,
            FieldValue::Flag(on) => {
                if let Some(slot) = self.flag_slot_mut(field) {
                    *slot = on;
                }
            }
        }
        Ok(())
    }

    fn text_slot(&self, field: FieldId) -> Option<&String> {
        let d = &self.data;
        let c = &self.clearance;
        let p = &self.collaboration;
        Some(match field {
            FieldId::Name => &d.name,
            FieldId::Title => &d.title,
            FieldId::Organization => &d.organization,
            FieldId::Date => &d.date,
            FieldId::Purpose => &d.purpose,
            FieldId::Email => &d.email,
            FieldId::Phone => &d.phone,
            FieldId::Department => &d.department,
            FieldId::CertificateNumber => &d.certificate_number,
            FieldId::ValidUntil => &d.valid_until,
            FieldId::Authority => &d.authority,
            FieldId::CustomNote => &d.custom_note,
            FieldId::FrontlinerName => &c.frontliner.name,
            FieldId::FrontlinerPosition => &c.frontliner.position,
            FieldId::FrontlinerPhone => &c.frontliner.phone,
            FieldId::FrontlinerEmail => &c.frontliner.email,
            FieldId::VisitLocation => &c.visit.location,
            FieldId::VisitTime => &c.visit.time,
            FieldId::ServiceOther => &c.requested_services.other,
            FieldId::Notes => &c.notes,
            FieldId::Feedback => &c.feedback,
            FieldId::Introduction => &p.introduction,
            FieldId::SignatoryName => &p.signatory.name,
            FieldId::SignatoryTitle => &p.signatory.title,
            _ => return None,
        })
    }

    fn text_slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        let d = &mut self.data;
        let c = &mut self.clearance;
        let p = &mut self.collaboration;
        Some(match field {
            FieldId::Name => &mut d.name,
            FieldId::Title => &mut d.title,
            FieldId::Organization => &mut d.organization,
            FieldId::Date => &mut d.date,
            FieldId::Purpose => &mut d.purpose,
            FieldId::Email => &mut d.email,
            FieldId::Phone => &mut d.phone,
            FieldId::Department => &mut d.department,
            FieldId::CertificateNumber => &mut d.certificate_number,
            FieldId::ValidUntil => &mut d.valid_until,
            FieldId::Authority => &mut d.authority,
            FieldId::CustomNote => &mut d.custom_note,
            FieldId::FrontlinerName => &mut c.frontliner.name,
            FieldId::FrontlinerPosition => &mut c.frontliner.position,
            FieldId::FrontlinerPhone => &mut c.frontliner.phone,
            FieldId::FrontlinerEmail => &mut c.frontliner.email,
            FieldId::VisitLocation => &mut c.visit.location,
            FieldId::VisitTime => &mut c.visit.time,
            FieldId::ServiceOther => &mut c.requested_services.other,
            FieldId::Notes => &mut c.notes,
            FieldId::Feedback => &mut c.feedback,
            FieldId::Introduction => &mut p.introduction,
            FieldId::SignatoryName => &mut p.signatory.name,
            FieldId::SignatoryTitle => &mut p.signatory.title,
            _ => return None,
        })
    }

    fn lines_slot(&self, field: FieldId) -> Option<&Vec<String>> {
        match field {
            FieldId::Scope => Some(&self.collaboration.scope),
            FieldId::Understanding => Some(&self.collaboration.understanding),
            _ => None,
        }
    }

    fn lines_slot_mut(&mut self, field: FieldId) -> Option<&mut Vec<String>> {
        match field {
            FieldId::Scope => Some(&mut self.collaboration.scope),
            FieldId::Understanding => Some(&mut self.collaboration.understanding),
            _ => None,
        }
    }

    fn flag_slot(&self, field: FieldId) -> Option<&bool> {
        let s = &self.clearance.requested_services;
        match field {
            FieldId::ServiceConsultation => Some(&s.consultation),
            FieldId::ServiceTraining => Some(&s.training),
            FieldId::ServicePartnership => Some(&s.partnership),
            FieldId::ServicePublication => Some(&s.publication),
            _ => None,
        }
    }

    fn flag_slot_mut(&mut self, field: FieldId) -> Option<&mut bool> {
        let s = &mut self.clearance.requested_services;
        match field {
            FieldId::ServiceConsultation => Some(&mut s.consultation),
            FieldId::ServiceTraining => Some(&mut s.training),
            FieldId::ServicePartnership => Some(&mut s.partnership),
            FieldId::ServicePublication => Some(&mut s.publication),
            _ => None,
        }
    }
}

// -- List codec ---------------------------------------------------------------

/// Split a multi-line blob into list items.
///
/// Lines are trimmed and lines that are empty after trimming are dropped, so
/// `decode_lines(encode_lines(items))` loses blank entries.
pub fn decode_lines(blob: &str) -> Vec<String> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join list items back into the blob shown in a textarea.
pub fn encode_lines(items: &[String]) -> String {
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_lines() {
        assert_eq!(decode_lines("Line1\nLine2"), vec!["Line1", "Line2"]);
    }

    #[test]
    fn decode_drops_blank_lines() {
        assert_eq!(decode_lines("Line1\n\nLine2"), vec!["Line1", "Line2"]);
        assert_eq!(decode_lines("  \n\t\n"), Vec::<String>::new());
    }

    #[test]
    fn decode_handles_crlf_and_trims() {
        assert_eq!(decode_lines(" a \r\n b\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn encode_then_decode_is_identity_without_blanks() {
        let blob = "Joint research\nStudent exchange";
        assert_eq!(encode_lines(&decode_lines(blob)), blob);
    }

    #[test]
    fn decode_of_encoded_blank_entry_is_lossy() {
        let items = vec!["a".to_owned(), " ".to_owned(), "b".to_owned()];
        assert_eq!(decode_lines(&encode_lines(&items)), vec!["a", "b"]);
    }

    #[test]
    fn new_model_has_only_the_date() {
        let model = DocumentModel::new(DocumentKind::Certificate, "1 May 2026");
        assert_eq!(model.text(FieldId::Date), Some("1 May 2026"));
        assert_eq!(model.text(FieldId::Name), None);
        assert!(model.lines(FieldId::Scope).is_empty());
        assert_eq!(model.clearance.interest, Interest::Later);
    }

    #[test]
    fn set_changes_only_the_target_field() {
        let mut model = DocumentModel::new(DocumentKind::Clearance, "today");
        let before = model.clone();
        model
            .set(FieldId::ServiceTraining, FieldValue::Flag(true))
            .unwrap();
        assert!(model.clearance.requested_services.training);
        model.clearance.requested_services.training = false;
        assert_eq!(model, before);
    }

    #[test]
    fn set_rejects_mismatched_shape() {
        let mut model = DocumentModel::new(DocumentKind::Collaboration, "today");
        let err = model
            .set(FieldId::Scope, FieldValue::Text("x".into()))
            .unwrap_err();
        assert!(matches!(err, PapersmithError::InvalidFieldValue { .. }));
    }

    #[test]
    fn selected_services_lists_flags_then_other() {
        let services = RequestedServices {
            training: true,
            publication: true,
            other: " Venue loan ".into(),
            ..Default::default()
        };
        assert_eq!(
            services.selected(),
            vec!["Training", "Publication", "Venue loan"]
        );
    }
}
