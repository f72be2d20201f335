use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};

use crate::application::{ContactIngestUseCase, PreviewPresenter, SubmissionCoordinator};
use crate::domain::contact_list::{ContactList, ListId};
use crate::domain::error::{AppError, Result};
use crate::domain::upload_session::{UploadSession, UploadStatus};
use crate::infrastructure::api_clients::{ContactListDirectory, RestApiClient};
use crate::infrastructure::cache_signal::BroadcastInvalidator;
use crate::infrastructure::config::{AppConfig, CONFIG_FILE};
use crate::infrastructure::file_source::LocalFileSource;

/// contact-upload: preview and bulk-import a CSV of contacts
#[derive(Debug, Parser)]
#[command(name = "contact-upload")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file to import
    pub file: PathBuf,

    /// Contact list to import into
    #[arg(short, long)]
    pub list: Option<ListId>,

    /// Parse and preview only, never upload
    #[arg(long)]
    pub dry_run: bool,

    /// Config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

pub async fn execute(cli: Cli, config: AppConfig) -> Result<()> {
    let client = Arc::new(RestApiClient::new(config.api.clone())?);

    let lists = match client.list_all().await {
        Ok(lists) => {
            print_lists(&lists);
            Some(lists)
        }
        Err(e) => {
            warn!("Could not load contact lists: {}", e);
            None
        }
    };

    if let (Some(list_id), Some(lists)) = (cli.list, lists.as_ref()) {
        if !lists.iter().any(|l| l.id == list_id) {
            return Err(AppError::NotFound(format!("Contact list {}", list_id)));
        }
    }

    let mut session = UploadSession::new();
    if let Some(list_id) = cli.list {
        session.select_list(list_id)?;
    }

    let source = LocalFileSource::new(config.ingest.allowed_extension.clone());
    ContactIngestUseCase::new()
        .select_file(&mut session, &source, &cli.file)
        .await?;

    let presenter = PreviewPresenter::new(&config.ingest);

    if session.status() == UploadStatus::Error {
        // Every row was rejected; show why before failing
        eprint!("{}", presenter.summarize_issues(session.issues()));
        return Err(AppError::ValidationError(session.errors().join("\n")));
    }

    if let Some(outcome) = session.outcome() {
        println!("{}", presenter.present(outcome));
    }

    if cli.dry_run || cli.list.is_none() {
        println!("Nothing uploaded. Pass --list <id> to import these contacts.");
        return Ok(());
    }

    let coordinator =
        SubmissionCoordinator::new(client, Arc::new(BroadcastInvalidator::default()));
    let receipt = coordinator.submit(&mut session).await?;

    info!(
        "Session {} started at {} finished as {}",
        session.id(),
        session.started_at(),
        session.status()
    );
    println!(
        "{} ({} created, {} updated, {} total)",
        receipt.message, receipt.created, receipt.updated, receipt.total
    );

    Ok(())
}

fn print_lists(lists: &[ContactList]) {
    if lists.is_empty() {
        println!("No contact lists available");
        return;
    }

    println!("Contact lists:");
    for list in lists {
        println!("  {:>6}  {}", list.id.0, list.display_label());
    }
    println!();
}
