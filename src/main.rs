use std::path::Path;
use std::sync::Arc;

use kyc_onboard::backend::HttpBackend;
use kyc_onboard::config::BackendConfig;
use kyc_onboard::form::{AccountId, FormManifest, Role};
use kyc_onboard::onboarding::{ConsoleUi, Orchestrator};

const USAGE: &str = "\
Usage:
  kyc-onboard submit <investor|business> <form.json>
  kyc-onboard status <investor|business> <user_id>

Environment:
  KYC_BACKEND_URL            backend origin (default http://localhost:8000)
  KYC_REQUEST_TIMEOUT_SECS   per-call timeout (default 30)
  KYC_CONNECT_TIMEOUT_SECS   connect timeout (default 10)
  KYC_LOGIN_DESTINATION      where to go after signup (default login.html)";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, role, target) = match args.as_slice() {
        [command, role, target] => (command.as_str(), role, target),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let role: Role = role.parse().map_err(anyhow::Error::msg)?;

    let config = BackendConfig::from_env()?;
    eprintln!("🪪 kyc-onboard v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {}", config.base_url);

    let backend = Arc::new(HttpBackend::new(config.clone())?);

    match command {
        "submit" => {
            let form = FormManifest::load(Path::new(target)).await?;
            let orchestrator = Orchestrator::new(backend, Arc::new(ConsoleUi::new()), config);
            let outcome = orchestrator.submit(role, &form).await?;
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        "status" => {
            let account_id = AccountId::new(target.as_str());
            let status = backend.fetch_verification(role, &account_id).await?;
            println!("{}", status.verification_status);
            if let Some(reason) = status.rejection_reason {
                println!("Reason: {reason}");
            }
        }
        other => {
            eprintln!("Unknown command {other:?}\n\n{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
