//! Typed submission records for both applicant roles.

use std::path::Path;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Scalar fields of the investor dossier, by wire name.
pub const INVESTOR_FIELDS: [&str; 8] = [
    "first_name",
    "last_name",
    "date_of_birth",
    "phone_number",
    "id_document_type",
    "id_document_number",
    "address",
    "tax_number",
];

/// File attachments of the investor dossier, by wire name.
pub const INVESTOR_FILES: [&str; 3] = ["id_document_front", "id_document_back", "selfie_with_id"];

/// Scalar fields of the business dossier, by wire name.
pub const BUSINESS_FIELDS: [&str; 16] = [
    "company_name",
    "registration_number",
    "registration_date",
    "tax_number",
    "legal_address",
    "physical_address",
    "business_type",
    "industry",
    "director_first_name",
    "director_last_name",
    "director_dob",
    "director_id_number",
    "phone_number",
    "email",
    "ownership_structure",
    "website",
];

/// File attachments of the business dossier, by wire name.
pub const BUSINESS_FILES: [&str; 4] = [
    "director_id_document",
    "director_selfie",
    "company_registration_certificate",
    "tax_registration_certificate",
];

/// Which kind of applicant is signing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Investor,
    Business,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Business => "business",
        }
    }

    /// Path of the profile submission endpoint for this role.
    pub fn submission_path(&self) -> &'static str {
        match self {
            Self::Investor => "/register/investor",
            Self::Business => "/register/business",
        }
    }

    /// Message shown when the submission endpoint fails without a detail.
    pub fn submission_fallback(&self) -> &'static str {
        match self {
            Self::Investor => "Investor registration failed",
            Self::Business => "Business registration failed",
        }
    }

    /// Path of the stored-profile lookup for an account of this role.
    pub fn profile_path(&self, account_id: &AccountId) -> String {
        format!("/{}/{}", self.as_str(), account_id)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "investor" => Ok(Self::Investor),
            "business" => Ok(Self::Business),
            other => Err(format!(
                "unknown role {other:?}, expected \"investor\" or \"business\""
            )),
        }
    }
}

/// Identity-level signup fields. The password never appears in `Debug` output.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
    pub role: Role,
}

/// Identifier the backend issues for a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One uploaded document.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Create an attachment, guessing the content type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

// Document bytes are not worth dumping into logs.
impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Personal dossier of an individual investor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvestorProfile {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub id_document_type: String,
    pub id_document_number: String,
    pub address: String,
    pub tax_number: String,
    pub id_document_front: Option<Attachment>,
    pub id_document_back: Option<Attachment>,
    pub selfie_with_id: Option<Attachment>,
}

/// Corporate dossier of a business applicant, including its director.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessProfile {
    pub company_name: String,
    pub registration_number: String,
    pub registration_date: String,
    pub tax_number: String,
    pub legal_address: String,
    pub physical_address: String,
    pub business_type: String,
    pub industry: String,
    pub director_first_name: String,
    pub director_last_name: String,
    pub director_dob: String,
    pub director_id_number: String,
    pub phone_number: String,
    /// Company contact address; may differ from the account email.
    pub email: String,
    pub ownership_structure: String,
    pub website: String,
    pub director_id_document: Option<Attachment>,
    pub director_selfie: Option<Attachment>,
    pub company_registration_certificate: Option<Attachment>,
    pub tax_registration_certificate: Option<Attachment>,
}

/// Role-specific verification data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dossier {
    Investor(InvestorProfile),
    Business(BusinessProfile),
}

impl Dossier {
    pub fn role(&self) -> Role {
        match self {
            Self::Investor(_) => Role::Investor,
            Self::Business(_) => Role::Business,
        }
    }

    /// Scalar fields as `(wire name, value)` pairs.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Investor(p) => {
                let values = [
                    &p.first_name,
                    &p.last_name,
                    &p.date_of_birth,
                    &p.phone_number,
                    &p.id_document_type,
                    &p.id_document_number,
                    &p.address,
                    &p.tax_number,
                ];
                INVESTOR_FIELDS
                    .iter()
                    .zip(values)
                    .map(|(name, value)| (*name, value.as_str()))
                    .collect()
            }
            Self::Business(p) => {
                let values = [
                    &p.company_name,
                    &p.registration_number,
                    &p.registration_date,
                    &p.tax_number,
                    &p.legal_address,
                    &p.physical_address,
                    &p.business_type,
                    &p.industry,
                    &p.director_first_name,
                    &p.director_last_name,
                    &p.director_dob,
                    &p.director_id_number,
                    &p.phone_number,
                    &p.email,
                    &p.ownership_structure,
                    &p.website,
                ];
                BUSINESS_FIELDS
                    .iter()
                    .zip(values)
                    .map(|(name, value)| (*name, value.as_str()))
                    .collect()
            }
        }
    }

    /// File slots as `(wire name, attachment)` pairs, including empty slots.
    pub fn attachments(&self) -> Vec<(&'static str, Option<&Attachment>)> {
        match self {
            Self::Investor(p) => {
                let files = [&p.id_document_front, &p.id_document_back, &p.selfie_with_id];
                INVESTOR_FILES
                    .iter()
                    .zip(files)
                    .map(|(name, file)| (*name, file.as_ref()))
                    .collect()
            }
            Self::Business(p) => {
                let files = [
                    &p.director_id_document,
                    &p.director_selfie,
                    &p.company_registration_certificate,
                    &p.tax_registration_certificate,
                ];
                BUSINESS_FILES
                    .iter()
                    .zip(files)
                    .map(|(name, file)| (*name, file.as_ref()))
                    .collect()
            }
        }
    }
}

/// Immutable snapshot of one submit action.
///
/// Only the collector builds these, so the credentials role always matches
/// the dossier variant.
#[derive(Debug)]
pub struct SubmissionRecord {
    credentials: Credentials,
    dossier: Dossier,
}

impl SubmissionRecord {
    pub(crate) fn new(credentials: Credentials, dossier: Dossier) -> Self {
        debug_assert_eq!(credentials.role, dossier.role());
        Self {
            credentials,
            dossier,
        }
    }

    pub fn role(&self) -> Role {
        self.dossier.role()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn dossier(&self) -> &Dossier {
        &self.dossier
    }

    /// Split so the credentials can be dropped once the account exists.
    pub fn into_parts(self) -> (Credentials, Dossier) {
        (self.credentials, self.dossier)
    }
}
