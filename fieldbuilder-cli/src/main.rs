use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use fieldbuilder::{
    DocumentFormat, FieldBuilder, OutputDestination, OutputOptions, UiOptions, io::serialize_value,
};

#[derive(Debug, Parser)]
#[command(
    name = "fieldbuilder",
    version,
    about = "Edit a list-valued field definition in the terminal"
)]
struct Cli {
    /// Seed choice; repeat the flag for several. Defaults to five world regions.
    #[arg(long = "choice", value_name = "TEXT", action = ArgAction::Append)]
    choices: Vec<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout after the editor closes). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; inferred from the first output file extension when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Write diagnostic logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

/// Where the saved definition goes: files are rewritten on every save,
/// stdout receives the final result once the terminal is restored.
#[derive(Debug)]
struct OutputPlan {
    files: Option<OutputOptions>,
    stdout: Option<OutputOptions>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_ref() {
        init_logging(path)?;
    }
    let plan = build_output_plan(&cli)?;

    let options = UiOptions::default().with_mouse(!cli.no_mouse);
    let mut builder = FieldBuilder::new().with_options(options);
    if !cli.choices.is_empty() {
        builder = builder.with_seed(&cli.choices);
    }
    if let Some(title) = cli.title.as_ref() {
        builder = builder.with_title(title.clone());
    }
    if let Some(files) = plan.files {
        builder = builder.with_output(files);
    }

    let committed = builder.run().map_err(chained)?;
    tracing::info!(label = %committed.definition.label, "editor closed with a saved definition");

    if let Some(stdout) = plan.stdout {
        let payload = serialize_value(&committed, &stdout).map_err(chained)?;
        println!("{payload}");
    }
    Ok(())
}

/// Carries every context layer of a library error into the report.
fn chained(err: anyhow::Error) -> Report {
    eyre!("{err:#}")
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}

fn build_output_plan(cli: &Cli) -> Result<OutputPlan> {
    let mut problems = Vec::new();
    let mut files = Vec::new();
    let mut stdout = cli.outputs.is_empty();

    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            problems.push("output destination cannot be empty".to_string());
            continue;
        }
        match OutputDestination::parse(raw) {
            OutputDestination::Stdout => stdout = true,
            destination => files.push(destination),
        }
    }

    let inferred = files.iter().find_map(|destination| match destination {
        OutputDestination::File(path) => DocumentFormat::from_path(path),
        OutputDestination::Stdout => None,
    });
    let format = cli.format.or(inferred).unwrap_or_default();

    for destination in &files {
        if let OutputDestination::File(path) = destination
            && let Some(found) = DocumentFormat::from_path(path)
            && found != format
        {
            problems.push(format!(
                "output file {} looks like {found} but the output format is {format}",
                path.display()
            ));
        }
    }

    if !problems.is_empty() {
        let mut body = String::from("encountered output issues:\n");
        for (idx, msg) in problems.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        return Err(eyre!(body));
    }

    let base = OutputOptions::new(format).with_pretty(!cli.no_pretty);
    Ok(OutputPlan {
        files: (!files.is_empty()).then(|| base.clone().with_destinations(files)),
        stdout: stdout.then(|| base.with_destinations(vec![OutputDestination::Stdout])),
    })
}
