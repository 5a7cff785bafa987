//! Profile submission: multipart `POST /register/{investor,business}`.

use reqwest::multipart::{Form, Part};

use crate::error::BackendError;
use crate::form::{AccountId, Dossier};

use super::HttpBackend;
use super::response::rejection;

/// Multipart name of the account id part.
pub const USER_ID_FIELD: &str = "user_id";

/// Encode the account id and the whole dossier as one multipart form.
///
/// Every scalar field is sent, empty or not. Empty file slots are left out.
pub fn dossier_form(account_id: &AccountId, dossier: &Dossier) -> Result<Form, BackendError> {
    let mut form = Form::new().text(USER_ID_FIELD, account_id.to_string());

    for (name, value) in dossier.text_fields() {
        form = form.text(name, value.to_string());
    }

    for (name, file) in dossier.attachments() {
        let Some(file) = file else {
            tracing::debug!(field = name, "No file attached");
            continue;
        };
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                BackendError::Encoding(format!(
                    "{name}: invalid content type {:?}: {e}",
                    file.content_type
                ))
            })?;
        form = form.part(name, part);
    }

    Ok(form)
}

impl HttpBackend {
    pub(crate) async fn register_profile(
        &self,
        account_id: &AccountId,
        dossier: &Dossier,
    ) -> Result<(), BackendError> {
        let role = dossier.role();
        let path = role.submission_path();
        let form = dossier_form(account_id, dossier)?;

        let resp = self
            .client
            .post(self.config.endpoint(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(path, self.config.request_timeout, e))?;

        if !resp.status().is_success() {
            return Err(rejection(path, resp, role.submission_fallback()).await);
        }

        tracing::info!(role = %role, account_id = %account_id, "Verification profile submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Attachment, InvestorProfile};

    #[test]
    fn encodes_dossier_with_missing_files() {
        let dossier = Dossier::Investor(InvestorProfile {
            first_name: "Aigerim".into(),
            id_document_front: Some(Attachment::new("front.jpg", vec![1, 2, 3])),
            ..Default::default()
        });
        let form = dossier_form(&AccountId::new("u123"), &dossier).unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn rejects_unparsable_content_type() {
        let dossier = Dossier::Investor(InvestorProfile {
            selfie_with_id: Some(
                Attachment::new("selfie.jpg", vec![1]).with_content_type("not a mime"),
            ),
            ..Default::default()
        });
        let err = dossier_form(&AccountId::new("1"), &dossier).unwrap_err();
        assert!(matches!(err, BackendError::Encoding(ref m) if m.starts_with("selfie_with_id")));
    }
}
