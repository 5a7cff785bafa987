//! KYC onboarding client — account provisioning plus verification dossier
//! submission against a remote verification backend.

pub mod backend;
pub mod config;
pub mod error;
pub mod form;
pub mod onboarding;
