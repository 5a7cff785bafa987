//! Form snapshot collection.
//!
//! The UI is an external collaborator: it exposes its inputs through
//! [`FormSource`], and [`collect`] turns them into an immutable
//! [`SubmissionRecord`] for one role.

pub mod collector;
pub mod model;
pub mod source;

pub use collector::{FormSource, collect};
pub use model::{
    AccountId, Attachment, BusinessProfile, Credentials, Dossier, InvestorProfile, Role,
    SubmissionRecord,
};
pub use source::{FormManifest, MapFormSource};
