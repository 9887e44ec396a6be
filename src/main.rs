use anyhow::{bail, Context, Result};
use clap::Parser;

use anysettings::api::SettingsClient;
use anysettings::cli::{Cli, Command};
use anysettings::config::{Config, CredentialStatus};
use anysettings::logging::init_logging;
use anysettings::settings::{ReadValue, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let log_path = cli.log_path();
    if let Err(err) = init_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), err);
    }

    let credential = config.auth.resolve_credential(cli.api_key.as_deref());
    match &credential {
        CredentialStatus::Configured { source, .. } => {
            tracing::info!(?source, base_url = %config.server.base_url, "Admin key resolved");
        }
        CredentialStatus::Missing { reason } => tracing::warn!("{}", reason),
    }

    match cli.command {
        Some(Command::Show) => show(&config, credential),
        None => {
            anysettings::ui::run(&config, credential.into_key())?;
            Ok(())
        }
    }
}

/// Fetch once and print each field the way read mode shows it.
fn show(config: &Config, credential: CredentialStatus) -> Result<()> {
    let key = match credential {
        CredentialStatus::Configured { key, .. } => key,
        CredentialStatus::Missing { reason } => bail!(reason),
    };
    let client = SettingsClient::new(&config.server, &config.auth, &key)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let settings = runtime
        .block_on(client.fetch_settings())
        .map_err(|err| anyhow::anyhow!(err.user_message()))
        .context("Failed to load settings")?;

    print!("{}", render_plain(&settings));
    Ok(())
}

fn render_plain(settings: &Settings) -> String {
    let mut out = String::new();
    if let Some(description) = &settings.schema.description {
        out.push_str(description);
        out.push('\n');
    }
    for field in settings.fields() {
        let summary = ReadValue::from_value(field.value).summary();
        out.push_str(&format!("{}: {}\n", field.key, summary));
    }
    out
}
