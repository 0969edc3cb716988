use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use neobank_api::demo::{DemoNotifications, DemoSession};
use neobank_api::{BankClient, HttpNotificationStore, HttpSessionStore, NotificationProvider, SessionProvider};
use neobank_tui::ShellSettings;
use neobank_types::SessionUser;
use neobank_util::{ShellConfig, log_file_path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Collaborators = (Arc<dyn SessionProvider>, Arc<dyn NotificationProvider>);

/// Terminal shell for the NeoBank client.
#[derive(Debug, Parser)]
#[command(name = "neobank", version, about)]
struct Args {
    /// Base URL of the banking API (overrides config and NEOBANK_API_BASE)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Bearer token for the banking API (overrides NEOBANK_API_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,

    /// Seconds between unread notification refreshes
    #[arg(long, value_name = "SECS")]
    poll_interval: Option<u64>,

    /// Run against in-memory collaborators instead of the API
    #[arg(long)]
    demo: bool,

    /// Role reported by the demo session, exactly as the backend would send it
    #[arg(long, value_name = "ROLE", default_value = "CUSTOMER", requires = "demo")]
    demo_role: String,

    /// Name of the demo user
    #[arg(long, value_name = "NAME", default_value = "Demo User", requires = "demo")]
    demo_name: String,

    /// Theme to use when the terminal supports truecolor (neobank, ansi256)
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,
}

impl Args {
    /// Command-line flags win over the config file and environment.
    fn apply_to(&self, config: &mut ShellConfig) {
        if let Some(base) = &self.api_base {
            config.api_base_url = base.clone();
        }
        if let Some(token) = &self.token {
            config.api_token = Some(token.clone());
        }
        if let Some(secs) = self.poll_interval {
            config.poll_interval_secs = secs;
        }
        if let Some(theme) = &self.theme {
            config.preferred_theme = Some(theme.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let mut config = ShellConfig::load().context("failed to load shell configuration")?;
    args.apply_to(&mut config);
    let settings = ShellSettings {
        poll_interval: config.poll_interval(),
        logout_timeout: config.logout_timeout(),
    };

    let (session, notifications) = if args.demo {
        info!(role = %args.demo_role, "starting in demo mode");
        demo_collaborators(&args)
    } else {
        http_collaborators(&config).await?
    };

    neobank_tui::run(session, notifications, settings, config.preferred_theme.as_deref()).await
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_tracing() -> Result<()> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn demo_collaborators(args: &Args) -> Collaborators {
    let user = SessionUser::new(args.demo_name.clone(), args.demo_role.clone());
    (Arc::new(DemoSession::new(Some(user))), Arc::new(DemoNotifications::new(3, 1)))
}

async fn http_collaborators(config: &ShellConfig) -> Result<Collaborators> {
    let client = BankClient::new(&config.api_base_url, config.api_token.as_deref())
        .with_context(|| format!("invalid API configuration for {}", config.api_base_url))?;

    let session = HttpSessionStore::new(client.clone());
    match session.restore().await {
        Ok(Some(user)) => info!(role = %user.role, "session restored"),
        Ok(None) => info!("no active session"),
        Err(error) => warn!(%error, "could not restore session; starting signed out"),
    }

    Ok((Arc::new(session), Arc::new(HttpNotificationStore::new(client))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_values() {
        let args = Args::try_parse_from([
            "neobank",
            "--api-base",
            "https://bank.example.com/api",
            "--poll-interval",
            "10",
            "--theme",
            "ansi256",
        ])
        .unwrap();
        let mut config = ShellConfig {
            preferred_theme: Some("neobank".into()),
            ..ShellConfig::default()
        };

        args.apply_to(&mut config);

        assert_eq!(config.api_base_url, "https://bank.example.com/api");
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.preferred_theme.as_deref(), Some("ansi256"));
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let args = Args::try_parse_from(["neobank"]).unwrap();
        let mut config = ShellConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn demo_identity_requires_demo_mode() {
        assert!(Args::try_parse_from(["neobank", "--demo-role", "ADMIN"]).is_err());

        let args = Args::try_parse_from(["neobank", "--demo", "--demo-role", "auditor", "--demo-name", "Frohike"]).unwrap();
        let (session, _) = demo_collaborators(&args);
        let user = session.current_user().unwrap();
        assert_eq!(user.name, "Frohike");
        assert_eq!(user.role, "auditor");
        assert_eq!(user.role(), None);
    }
}
