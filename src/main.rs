use clap::Parser;
use portfolio_common::contact::{ContactFormController, FormStatus, ENDPOINT_ENV, FALLBACK_EMAIL};
use portfolio_site::{cli, config, contact, error, export, listing, load_catalog, prompt};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, SiteError};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Projects { category, json, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let projects = catalog.filtered(category);

            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else if projects.is_empty() {
                println!("No projects in category: {}", category);
            } else {
                print!("{}", listing::format_table(&projects));
                println!("\n{} project(s)", projects.len());
            }
        }

        Commands::Show { id, json, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let project = catalog
                .get_by_id(&id)
                .ok_or_else(|| SiteError::ProjectNotFound(id.clone()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(project)?);
            } else {
                print!("{}", listing::format_detail(project));
            }
        }

        Commands::Categories { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            print!("{}", listing::format_categories(&catalog));
        }

        Commands::Export { output, base_url, catalog } => {
            println!("📦 portfolio - site export\n");

            let catalog = load_catalog(catalog.as_deref())?;
            let base_url = base_url.unwrap_or_else(|| config.base_url.clone());
            let summary = export::export_site(&catalog, &output, &base_url)?;

            println!("✔ {} projects: {}", catalog.len(), summary.projects.display());
            println!("✔ {} routes: {}", summary.route_count, summary.sitemap.display());
            println!("✔ route list: {}", summary.routes.display());
            println!("\n✅ Export complete");
        }

        Commands::Contact {
            name,
            email,
            organization,
            interests,
            message,
            timeline,
            budget,
            inquiry_type,
            endpoint,
        } => {
            let mut controller = ContactFormController::new();
            controller.form.name = prompt::or_ask(name, "Name")?;
            controller.form.email = prompt::or_ask(email, "Email")?;
            controller.form.organization = organization;
            controller.form.interests = interests;
            controller.form.message = prompt::or_ask(message, "Project description")?;
            controller.form.timeline = timeline;
            controller.form.budget = budget;
            controller.form.inquiry_type = inquiry_type;

            let endpoint = match endpoint {
                Some(url) => {
                    config::validate_http_url(&url)?;
                    Some(url)
                }
                None => config.endpoint()?,
            };
            if endpoint.is_none() {
                println!("⚠ No contact endpoint configured (set {} or run `portfolio config --set-endpoint`)", ENDPOINT_ENV);
            }
            let client = contact::ContactClient::new(endpoint, Duration::from_secs(config.timeout_seconds))?;

            println!("✉ Sending message...");
            client.send(&mut controller).await?;

            match controller.status() {
                FormStatus::Success => println!("✅ {}", controller.status_message().unwrap_or_default()),
                _ => {
                    let reason = controller.last_error().unwrap_or("unknown error").to_string();
                    return Err(SiteError::Submission(reason, FALLBACK_EMAIL));
                }
            }
        }

        Commands::Config { set_endpoint, set_base_url, show } => {
            let changed = set_endpoint.is_some() || set_base_url.is_some();

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ Contact endpoint updated");
            }
            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ Base URL updated");
            }
            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("Settings:");
                let endpoint = config.endpoint()?.unwrap_or_else(|| "(not configured)".to_string());
                println!("  Contact endpoint: {}", endpoint);
                println!("  Base URL: {}", config.base_url);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  File: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
