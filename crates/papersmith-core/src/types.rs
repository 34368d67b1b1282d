// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Papersmith document generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PapersmithError;

/// Identifier for one editing session (one document instance on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of documents the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Certificate,
    Letterhead,
    /// Letter of clearance issued after a frontliner visit.
    Clearance,
    /// Partnership proposal with scope and shared understanding.
    Collaboration,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        Self::Certificate,
        Self::Letterhead,
        Self::Clearance,
        Self::Collaboration,
    ];

    /// Static slug used for routing and as the export file stem.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Letterhead => "letterhead",
            Self::Clearance => "letter-of-clearance",
            Self::Collaboration => "collaboration-proposal",
        }
    }

    /// Heading printed at the top of the document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Certificate => "Certificate of Achievement",
            Self::Letterhead => "Official Letterhead",
            Self::Clearance => "Letter of Clearance",
            Self::Collaboration => "Collaboration Proposal",
        }
    }

    /// Default download name for an export in the given format.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.slug(), format.extension())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DocumentKind {
    type Err = PapersmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| PapersmithError::UnknownDocumentKind(s.to_owned()))
    }
}

/// How a field is edited and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldShape {
    /// Single free-text value.
    Text,
    /// Ordered list edited as one multi-line blob.
    Lines,
    /// The interest tri-state.
    Choice,
    /// Boolean toggle.
    Flag,
}

/// Every editable field across the document records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    // -- Shared header --
    Name,
    Title,
    Organization,
    Date,
    Purpose,
    Email,
    Phone,
    Department,
    CertificateNumber,
    ValidUntil,
    Authority,
    CustomNote,

    // -- Clearance --
    FrontlinerName,
    FrontlinerPosition,
    FrontlinerPhone,
    FrontlinerEmail,
    VisitLocation,
    VisitTime,
    Interest,
    ServiceConsultation,
    ServiceTraining,
    ServicePartnership,
    ServicePublication,
    ServiceOther,
    Notes,
    Feedback,

    // -- Collaboration --
    Introduction,
    Scope,
    Understanding,
    SignatoryName,
    SignatoryTitle,
}

impl FieldId {
    pub fn shape(&self) -> FieldShape {
        match self {
            Self::Scope | Self::Understanding => FieldShape::Lines,
            Self::Interest => FieldShape::Choice,
            Self::ServiceConsultation
            | Self::ServiceTraining
            | Self::ServicePartnership
            | Self::ServicePublication => FieldShape::Flag,
            _ => FieldShape::Text,
        }
    }

    /// Human label shown next to the input and inside placeholders.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Title => "Title",
            Self::Organization => "Organization",
            Self::Date => "Date",
            Self::Purpose => "Purpose",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Department => "Department",
            Self::CertificateNumber => "Certificate Number",
            Self::ValidUntil => "Valid Until",
            Self::Authority => "Issuing Authority",
            Self::CustomNote => "Custom Note",
            Self::FrontlinerName => "Frontliner Name",
            Self::FrontlinerPosition => "Frontliner Position",
            Self::FrontlinerPhone => "Frontliner Phone",
            Self::FrontlinerEmail => "Frontliner Email",
            Self::VisitLocation => "Visit Location",
            Self::VisitTime => "Visit Time",
            Self::Interest => "Interest",
            Self::ServiceConsultation => "Consultation",
            Self::ServiceTraining => "Training",
            Self::ServicePartnership => "Partnership",
            Self::ServicePublication => "Publication",
            Self::ServiceOther => "Other Services",
            Self::Notes => "Notes",
            Self::Feedback => "Feedback",
            Self::Introduction => "Introduction",
            Self::Scope => "Scope of Collaboration",
            Self::Understanding => "Mutual Understanding",
            Self::SignatoryName => "Signatory Name",
            Self::SignatoryTitle => "Signatory Title",
        }
    }

    /// Placeholder rendered in place of an empty value.
    pub fn placeholder(&self) -> String {
        format!("[{}]", self.label())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the visited party wants to follow up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interest {
    Yes,
    #[default]
    Later,
    No,
}

impl Interest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Later => "later",
            Self::No => "no",
        }
    }

    /// Sentence used in the rendered letter.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Yes => "Interested in following up",
            Self::Later => "Will consider at a later date",
            Self::No => "Not interested at this time",
        }
    }
}

/// A typed value for a single field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Lines(Vec<String>),
    Choice(Interest),
    Flag(bool),
}

impl FieldValue {
    pub fn shape(&self) -> FieldShape {
        match self {
            Self::Text(_) => FieldShape::Text,
            Self::Lines(_) => FieldShape::Lines,
            Self::Choice(_) => FieldShape::Choice,
            Self::Flag(_) => FieldShape::Flag,
        }
    }

    /// Coerce a raw input string into a value of `field`'s shape.
    ///
    /// This is the only check applied to user input: empty strings are valid
    /// text, list blobs are decoded with [`crate::model::decode_lines`].
    pub fn coerce(field: FieldId, raw: &str) -> Result<Self, PapersmithError> {
        match field.shape() {
            FieldShape::Text => Ok(Self::Text(raw.to_owned())),
            FieldShape::Lines => Ok(Self::Lines(crate::model::decode_lines(raw))),
            FieldShape::Choice => match raw.trim().to_ascii_lowercase().as_str() {
                "yes" => Ok(Self::Choice(Interest::Yes)),
                "later" => Ok(Self::Choice(Interest::Later)),
                "no" => Ok(Self::Choice(Interest::No)),
                other => Err(PapersmithError::InvalidFieldValue {
                    field,
                    reason: format!("expected yes, later or no, got {other:?}"),
                }),
            },
            FieldShape::Flag => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "1" | "yes" => Ok(Self::Flag(true)),
                "false" | "off" | "0" | "no" | "" => Ok(Self::Flag(false)),
                other => Err(PapersmithError::InvalidFieldValue {
                    field,
                    reason: format!("expected a yes/no toggle, got {other:?}"),
                }),
            },
        }
    }
}

/// Downloadable renditions of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    Pdf,
    Png,
    Jpeg,
    /// Listed in the UI but not produced.
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pdf => "PDF",
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Docx => "DOCX",
        };
        f.write_str(label)
    }
}

/// External share destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareMethod {
    Email,
    /// WhatsApp-style messaging deep link.
    Messaging,
    /// Professional social network share.
    Social,
}

/// Payload passed to an external share.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub subject: String,
    pub body: String,
    /// Optional public link to include (social shares prefer this).
    pub url: Option<String>,
}
