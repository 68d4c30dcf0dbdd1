//! Command-line client for the task board.
//!
//! Usage:
//!
//! ```text
//! taskboard [--config <path>] [--api-url <url>] <command>
//! ```
//!
//! Every command loads the current snapshot through the lifecycle
//! controller, performs its action, and prints the board grouped by status.
//! Set `RUST_LOG=taskboard=debug` to see the controller's diagnostics on
//! stderr.

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr, bail, eyre};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use taskboard::config::ClientConfig;
use taskboard::task::{
    adapters::http::HttpTaskStore,
    domain::{EditField, StatusSelection, TaskId, TaskStatus},
    services::{ActionOutcome, BoardView, TaskForm, TaskLifecycleController},
};
use tracing_subscriber::EnvFilter;


type Controller = TaskLifecycleController<HttpTaskStore, DefaultClock>;

#[derive(Debug, Parser)]
#[command(name = "taskboard", about = "List and manage tasks on a remote task service")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Task resource URL, overriding the configuration file.
    #[arg(long, env = "TASKBOARD_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show tasks grouped by status.
    List,
    /// Create a task.
    Add {
        /// Task title.
        #[arg(long)]
        title: String,
        /// Due timestamp, e.g. 2099-01-01T09:00.
        #[arg(long)]
        due: String,
        /// Optional description.
        #[arg(long, default_value = "")]
        description: String,
        /// Initial status.
        #[arg(long, default_value = "PENDING")]
        status: TaskStatus,
    },
    /// Move a task to another status.
    Move {
        /// Task identifier.
        id: i64,
        /// Target status.
        status: TaskStatus,
    },
    /// Change a task's title, description, or due timestamp.
    Edit {
        /// Task identifier.
        id: i64,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New due timestamp.
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_ref(), cli.api_url.clone())?;

    let store = Arc::new(HttpTaskStore::from_config(&config));
    let controller = TaskLifecycleController::new(Arc::clone(&store), Arc::new(DefaultClock))
        .with_fetch_strategy(config.fetch_strategy);
    controller.fetch_all().await;

    match cli.command {
        Command::List => {}
        Command::Add {
            title,
            due,
            description,
            status,
        } => {
            let mut form = TaskForm {
                title,
                description,
                due_date_time: due,
                status,
            };
            form.submit(store.as_ref(), &DefaultClock)
                .await
                .wrap_err("create task")?;
            controller.fetch_all().await;
        }
        Command::Move { id, status } => {
            let task_id = TaskId::new(id)?;
            let outcome = controller
                .change_status(task_id, StatusSelection::Target(status))
                .await;
            ensure_applied(&controller, outcome)?;
        }
        Command::Edit {
            id,
            title,
            description,
            due,
        } => {
            let task_id = TaskId::new(id)?;
            edit_task(&controller, task_id, title, description, due).await?;
        }
        Command::Delete { id } => {
            let task_id = TaskId::new(id)?;
            let outcome = controller.delete_task(task_id).await;
            ensure_applied(&controller, outcome)?;
        }
    }

    render(&controller.view())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Layers the URL flag (or `TASKBOARD_API_URL`) over the config file over
/// defaults.
fn resolve_config(path: Option<&PathBuf>, api_url: Option<String>) -> Result<ClientConfig> {
    let base = match path {
        Some(config_path) => ClientConfig::load(config_path)?,
        None => ClientConfig::default(),
    };
    Ok(match api_url {
        Some(url) => base.with_api_url(url),
        None => base,
    })
}

async fn edit_task(
    controller: &Controller,
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
) -> Result<()> {
    if let Some(notice) = controller.transport_error() {
        bail!(notice.message());
    }
    let task = controller
        .tasks()
        .into_iter()
        .find(|task| task.id() == task_id)
        .ok_or_else(|| eyre!("task {task_id} not found"))?;

    controller.begin_edit(&task);
    let changes = [
        (EditField::Title, title),
        (EditField::Description, description),
        (EditField::DueDateTime, due),
    ];
    for (field, value) in changes {
        if let Some(text) = value {
            controller.update_edit_field(field, text);
        }
    }
    let outcome = controller.save_edit(task_id).await;
    ensure_applied(controller, outcome)
}

fn ensure_applied(controller: &Controller, outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Applied => Ok(()),
        ActionOutcome::Ignored => bail!("nothing to do: the requested change is not offered"),
        ActionOutcome::Invalid(err) => bail!(err),
        ActionOutcome::TransportFailed => {
            let message = controller
                .transport_error()
                .map_or("the task service call failed", |notice| notice.message());
            bail!(message)
        }
    }
}

fn render(view: &BoardView) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(notice) = view.transport_error {
        writeln!(out, "! {notice}")?;
    }
    for (status, tasks) in view.groups.iter() {
        writeln!(out, "{status} ({})", tasks.len())?;
        if !view.sections.is_expanded(status) {
            continue;
        }
        for task in tasks {
            writeln!(
                out,
                "  #{} {} (due {})",
                task.id(),
                task.title(),
                task.due_date_time()
            )?;
            if let Some(description) = task.description() {
                writeln!(out, "      {description}")?;
            }
        }
    }
    Ok(())
}
