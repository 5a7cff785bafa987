//! Snapshot the UI's current form state into a typed submission record.

use secrecy::SecretString;

use crate::error::ValidationError;

use super::model::{
    Attachment, BusinessProfile, Credentials, Dossier, InvestorProfile, Role, SubmissionRecord,
};

/// Source name of the account email.
pub const EMAIL_FIELD: &str = "email";
/// Source name of the account password.
pub const PASSWORD_FIELD: &str = "password";
/// Source name of the business contact email (sent on the wire as `email`).
pub const CONTACT_EMAIL_FIELD: &str = "contact_email";

/// Read access to the fields and files the UI currently holds.
///
/// Field names are the wire names, plus `email`/`password` for the account
/// and `contact_email` for the business contact address.
pub trait FormSource: Send + Sync {
    /// Current value of a text input, `None` if the UI has no such input.
    fn field(&self, name: &str) -> Option<String>;

    /// The file picked for a file input, if any.
    fn file(&self, name: &str) -> Option<Attachment>;
}

/// Build a submission record for `role` from the form.
///
/// Only the account email and password are checked. Everything else passes
/// through as-is: missing text becomes an empty string and missing files stay
/// empty slots.
pub fn collect(role: Role, source: &dyn FormSource) -> Result<SubmissionRecord, ValidationError> {
    let email = source.field(EMAIL_FIELD).unwrap_or_default();
    let password = source.field(PASSWORD_FIELD).unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }

    let credentials = Credentials {
        email,
        password: SecretString::from(password),
        role,
    };

    let text = |name: &str| source.field(name).unwrap_or_default();
    let dossier = match role {
        Role::Investor => Dossier::Investor(InvestorProfile {
            first_name: text("first_name"),
            last_name: text("last_name"),
            date_of_birth: text("date_of_birth"),
            phone_number: text("phone_number"),
            id_document_type: text("id_document_type"),
            id_document_number: text("id_document_number"),
            address: text("address"),
            tax_number: text("tax_number"),
            id_document_front: source.file("id_document_front"),
            id_document_back: source.file("id_document_back"),
            selfie_with_id: source.file("selfie_with_id"),
        }),
        Role::Business => Dossier::Business(BusinessProfile {
            company_name: text("company_name"),
            registration_number: text("registration_number"),
            registration_date: text("registration_date"),
            tax_number: text("tax_number"),
            legal_address: text("legal_address"),
            physical_address: text("physical_address"),
            business_type: text("business_type"),
            industry: text("industry"),
            director_first_name: text("director_first_name"),
            director_last_name: text("director_last_name"),
            director_dob: text("director_dob"),
            director_id_number: text("director_id_number"),
            phone_number: text("phone_number"),
            email: text(CONTACT_EMAIL_FIELD),
            ownership_structure: text("ownership_structure"),
            website: text("website"),
            director_id_document: source.file("director_id_document"),
            director_selfie: source.file("director_selfie"),
            company_registration_certificate: source.file("company_registration_certificate"),
            tax_registration_certificate: source.file("tax_registration_certificate"),
        }),
    };

    Ok(SubmissionRecord::new(credentials, dossier))
}
