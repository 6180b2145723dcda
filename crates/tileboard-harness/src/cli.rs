use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tileboard_core::Viewport;
use tileboard_layout::{BoardConfig, DASHBOARD_SYMBOLS, DashboardCatalog, Panel, PanelKind};
use tracing::warn;

use crate::error::{HarnessError, Result};
use crate::trace::{GestureTrace, LayoutReport, board_from};

#[derive(Debug, Parser)]
#[command(
    name = "tileboard",
    about = "Replay gestures and pack layouts on a grid-snapping panel board",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a JSON gesture trace and print the final layout.
    Replay(ReplayArgs),

    /// Auto-arrange a layout and print the result.
    Arrange(ArrangeArgs),

    /// Add a panel to the stock dashboard and print the result.
    Add(AddArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Trace file (`viewport`, optional `panels`, `events`).
    pub trace: PathBuf,

    /// Print every session transition, not only the final layout.
    #[arg(long)]
    pub transitions: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ViewportArgs {
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    #[arg(long, default_value_t = 800.0)]
    pub height: f64,
}

impl ViewportArgs {
    fn viewport(&self) -> Result<Viewport> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(HarnessError::invalid(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(Viewport::from_size(self.width, self.height))
    }
}

#[derive(Debug, Clone, Args)]
pub struct ArrangeArgs {
    /// JSON array of panels; the stock dashboard when omitted.
    #[arg(long)]
    pub layout: Option<PathBuf>,

    #[command(flatten)]
    pub viewport: ViewportArgs,
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Panel kind, e.g. `price_chart` or `news_feed`.
    #[arg(long)]
    pub kind: String,

    /// Ticker symbol shown by the panel.
    #[arg(long, default_value = "AAPL")]
    pub payload: String,

    #[command(flatten)]
    pub viewport: ViewportArgs,
}

pub fn run_from_env() -> Result<String> {
    let cli = Cli::parse();
    run(cli)
}

/// Execute a parsed command and return its JSON output.
pub fn run(cli: Cli) -> Result<String> {
    let config = BoardConfig::from_env()?;
    match cli.command {
        Commands::Replay(args) => run_replay(&args, config),
        Commands::Arrange(args) => run_arrange(&args, config),
        Commands::Add(args) => run_add(&args, config),
    }
}

fn run_replay(args: &ReplayArgs, config: BoardConfig) -> Result<String> {
    let outcome = GestureTrace::load(&args.trace)?.replay(config)?;
    let json = if args.transitions {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome.layout)?
    };
    Ok(json)
}

fn run_arrange(args: &ArrangeArgs, config: BoardConfig) -> Result<String> {
    let viewport = args.viewport.viewport()?;
    let panels = match &args.layout {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| HarnessError::Read {
                path: path.clone(),
                source,
            })?;
            Some(serde_json::from_str::<Vec<Panel>>(&raw)?)
        }
        None => None,
    };
    let mut board = board_from(panels, config)?;
    board.auto_arrange(&viewport);
    Ok(serde_json::to_string_pretty(&LayoutReport::new(
        &board, viewport,
    ))?)
}

fn run_add(args: &AddArgs, config: BoardConfig) -> Result<String> {
    let viewport = args.viewport.viewport()?;
    if !DASHBOARD_SYMBOLS.contains(&args.payload.as_str()) {
        warn!(payload = %args.payload, "payload is not a dashboard symbol");
    }
    let mut board = board_from(None, config)?;
    board.add_panel(
        PanelKind::new(args.kind.as_str()),
        args.payload.as_str(),
        &DashboardCatalog,
        &viewport,
    )?;
    Ok(serde_json::to_string_pretty(&LayoutReport::new(
        &board, viewport,
    ))?)
}
