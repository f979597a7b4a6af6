//! qrdash CLI application entry point
//!
//! This is the main executable for the qrdash house-manual QR code
//! dashboard. The binary plays the host role: it owns the manual file on
//! disk, opens the interactive dashboard over the in-memory collection,
//! and persists whatever the session changed when it closes.
//!
//! # Usage
//!
//! ```bash
//! # Create the manual, then open the dashboard (default command)
//! qrdash init --name "Beach House" --address "123 Ocean Drive"
//! qrdash
//!
//! # Record operations without the TUI
//! qrdash list
//! qrdash add -t "Pool Gate" -c "https://x/pool" -u uc-007
//! qrdash rm qr-0185... -y
//! qrdash print --all
//!
//! # Quiet mode (only output results)
//! qrdash -q list
//! ```
//!
//! # Configuration
//!
//! On first run, qrdash will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/qrdash/config.toml`
//! on Linux).

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use qrdash::{
    QrDashError, catalog,
    cli::{Cli, Commands},
    config::QrDashConfig,
    dashboard::FormState,
    manual::{HouseManual, ManualFile, QrRecord},
    print::PrintJob,
    ui::DashboardApp,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, QrDashError>;

/// Set up file-based tracing under the user data directory
///
/// The TUI owns the terminal, so log output goes to a rolling file
/// instead of stderr. Returns the guard that flushes the writer on drop;
/// logging is silently disabled when no data directory exists.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_local_dir()?.join("qrdash").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::daily(log_dir, "qrdash.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qrdash=info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Seed a freshly created manual with the demo records
fn seed_sample_records(manual: &mut HouseManual) {
    let samples = [
        ("WiFi Access", "WIFI:T:WPA;S:BeachHouse;P:Welcome123;;", "uc-001"),
        ("House Rules", "https://example.com/rules", "uc-002"),
        ("Emergency Contacts", "https://example.com/emergency", "uc-003"),
    ];

    for (title, content, use_case_id) in samples {
        let now = chrono::Utc::now();
        manual.upsert(QrRecord {
            id: QrRecord::new_id(),
            title: title.to_string(),
            content: content.to_string(),
            use_case_id: use_case_id.to_string(),
            use_case_name: catalog::name_of(use_case_id).to_string(),
            manual_id: manual.id.clone(),
            created_at: now,
            updated_at: now,
        });
    }
}

/// Handle the init command - create the house manual file
///
/// Prompts for the property name and address unless they were given as
/// flags (or quiet mode supplies defaults).
///
/// # Errors
///
/// Returns `QrDashError` if the file already exists, prompting fails, or
/// the file cannot be written.
fn handle_init(
    path: &Path,
    name: Option<String>,
    address: Option<String>,
    sample: bool,
    quiet: bool,
) -> Result<()> {
    if path.exists() {
        return Err(QrDashError::InvalidInput(format!(
            "A house manual already exists at {}",
            path.display()
        )));
    }

    let name = match name {
        Some(name) => name,
        None if quiet => "House Manual".to_string(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Property name")
            .default("House Manual".to_string())
            .interact_text()
            .map_err(|e| QrDashError::InvalidInput(format!("Failed to read input: {e}")))?,
    };

    let address = match address {
        Some(address) => address,
        None if quiet => String::new(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Property address")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| QrDashError::InvalidInput(format!("Failed to read input: {e}")))?,
    };

    let mut manual = HouseManual::new(name, address);
    if sample {
        seed_sample_records(&mut manual);
    }

    let file = ManualFile::create(path, manual)?;
    if !quiet {
        println!(
            "Created house manual '{}' at {}",
            file.manual.name,
            path.display()
        );
        if sample {
            println!("Seeded {} sample QR codes", file.manual.len());
        }
    }
    Ok(())
}

/// Handle the dashboard command - open the interactive TUI
///
/// Loads the manual, runs the dashboard over it, and saves the collection
/// back once the session closes.
///
/// # Errors
///
/// Returns `QrDashError` if the manual cannot be loaded or saved, or the
/// terminal session fails.
fn handle_dashboard(path: &Path, print_dir: PathBuf, quiet: bool) -> Result<()> {
    let mut file = ManualFile::load(path)?;

    let mut app = DashboardApp::new(print_dir);
    app.run(&mut file.manual)?;

    file.save()?;
    if !quiet {
        println!(
            "Saved {} QR code(s) to {}",
            file.manual.len(),
            path.display()
        );
    }
    Ok(())
}

/// Handle the list command - print the record table
///
/// # Errors
///
/// Returns `QrDashError` if the manual cannot be loaded.
fn handle_list(path: &Path, quiet: bool) -> Result<()> {
    let file = ManualFile::load(path)?;

    if file.manual.is_empty() {
        if !quiet {
            println!("No QR codes in '{}'.", file.manual.name);
        }
        return Ok(());
    }

    if !quiet {
        println!(
            "QR codes in '{}' ({}):",
            file.manual.name,
            file.manual.len()
        );
    }
    for record in &file.manual.records {
        if quiet {
            println!("{}", record.id);
        } else {
            println!(
                "  {}  {} {}",
                record.id.dimmed(),
                record.title.bold(),
                format!("[{}]", record.use_case_name).magenta()
            );
        }
    }
    Ok(())
}

/// Handle the catalog command - print the use-case catalog
fn handle_catalog(quiet: bool) {
    for use_case in &catalog::USE_CASES {
        if quiet {
            println!("{}", use_case.id);
        } else {
            println!(
                "  {}  {} {}",
                use_case.id.dimmed(),
                use_case.name.bold(),
                format!("({})", use_case.category).magenta()
            );
            println!("          {}", use_case.description.dimmed());
        }
    }
}

/// Handle the add command - create a record through the form validation path
///
/// # Errors
///
/// Returns `QrDashError` if the use-case id is unknown, validation fails,
/// or the manual cannot be loaded or saved.
fn handle_add(
    path: &Path,
    title: String,
    content: String,
    use_case: &str,
    quiet: bool,
) -> Result<()> {
    let mut file = ManualFile::load(path)?;

    let use_case_index = catalog::position(use_case).ok_or_else(|| {
        QrDashError::InvalidInput(format!(
            "Unknown use case '{use_case}'. See 'qrdash catalog' for valid ids."
        ))
    })?;

    let mut form = FormState::new(file.manual.id.clone());
    form.title = title;
    form.content = content;
    form.use_case_index = Some(use_case_index);

    if !form.validate() {
        let messages: Vec<&str> = [
            form.errors.title.as_deref(),
            form.errors.content.as_deref(),
            form.errors.use_case.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        return Err(QrDashError::InvalidInput(messages.join("; ")));
    }

    let record = form.build_record();
    let id = record.id.clone();
    file.manual.upsert(record);
    file.save()?;

    if quiet {
        println!("{id}");
    } else {
        println!("{} Created QR code {id}", "✓".green());
    }
    Ok(())
}

/// Handle the remove command - delete a record with confirmation
///
/// # Errors
///
/// Returns `QrDashError` if the record does not exist or the manual
/// cannot be loaded or saved.
fn handle_remove(path: &Path, id: &str, yes: bool, quiet: bool) -> Result<()> {
    let mut file = ManualFile::load(path)?;

    let title = file
        .manual
        .find(id)
        .map(|record| record.title.clone())
        .ok_or_else(|| QrDashError::InvalidInput(format!("No QR code with id '{id}'")))?;

    if !yes && !quiet {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete \"{title}\"?"))
            .default(false)
            .interact()
            .map_err(|e| QrDashError::InvalidInput(format!("Failed to read input: {e}")))?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    file.manual.remove(id);
    file.save()?;

    if !quiet {
        println!("{} Deleted \"{title}\"", "✓".green());
    }
    Ok(())
}

/// Handle the print command - compose a print document without the TUI
///
/// # Errors
///
/// Returns `QrDashError` if an id is unknown, nothing is selected, or
/// composing/writing the document fails.
fn handle_print(
    path: &Path,
    ids: &[String],
    all: bool,
    out: Option<PathBuf>,
    print_dir: PathBuf,
    quiet: bool,
) -> Result<()> {
    let file = ManualFile::load(path)?;

    let records: Vec<QrRecord> = if all {
        file.manual.records.clone()
    } else {
        let mut selected = Vec::new();
        for id in ids {
            let record = file.manual.find(id).ok_or_else(|| {
                QrDashError::InvalidInput(format!("No QR code with id '{id}'"))
            })?;
            selected.push(record.clone());
        }
        // Print in collection order regardless of argument order
        file.manual
            .records
            .iter()
            .filter(|r| selected.iter().any(|s| s.id == r.id))
            .cloned()
            .collect()
    };

    if records.is_empty() {
        return Err(QrDashError::InvalidInput(
            "No QR codes selected. Pass record ids or --all.".to_string(),
        ));
    }

    let job = PrintJob::new(&file.manual.name, records);
    let dir = out.unwrap_or(print_dir);
    let written = job.write_to(&dir)?;

    if quiet {
        println!("{}", written.display());
    } else {
        println!(
            "{} Print document for {} QR code(s) written to {}",
            "✓".green(),
            job.records.len(),
            written.display()
        );
    }
    Ok(())
}

/// Main entry point for the qrdash application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `QrDashError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    let _guard = init_tracing();

    let config = QrDashConfig::load_or_setup()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;

    let manual_path = match &cli.manual {
        Some(path) => path.clone(),
        None => config.resolve_manual_path()?,
    };

    match cli.command() {
        Commands::Dashboard => {
            handle_dashboard(&manual_path, config.resolve_print_dir()?, quiet)?;
        }
        Commands::Init {
            name,
            address,
            sample,
        } => handle_init(&manual_path, name, address, sample, quiet)?,
        Commands::List => handle_list(&manual_path, quiet)?,
        Commands::Catalog => handle_catalog(quiet),
        Commands::Add {
            title,
            content,
            use_case,
        } => handle_add(&manual_path, title, content, &use_case, quiet)?,
        Commands::Remove { id, yes } => handle_remove(&manual_path, &id, yes, quiet)?,
        Commands::Print { ids, all, out } => handle_print(
            &manual_path,
            &ids,
            all,
            out,
            config.resolve_print_dir()?,
            quiet,
        )?,
    }

    Ok(())
}
