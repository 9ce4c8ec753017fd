// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::commands;
use cmd::common::SiteContext;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "marketsite")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Site config file (defaults to MARKETSITE_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the complete static site
    Build {
        /// Output directory for generated files
        output_dir: PathBuf,
    },
    /// Show which page a URL path resolves to
    Route {
        /// URL path, e.g. /locations/chicago/automotive
        path: String,
    },
    /// Print the rendered HTML for one URL path
    Render {
        /// URL path, e.g. /locations/chicago/ai-voice-agents
        path: String,
    },
    /// List every page the site generates
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let ctx = SiteContext::new(cli.config);
    let print = |line: &str| println!("{}", line);

    match cli.command {
        Commands::Build { output_dir } => commands::build_command(&ctx, &output_dir, print),
        Commands::Route { path } => commands::route_command(&path, print),
        Commands::Render { path } => commands::render_command(&ctx, &path, print),
        Commands::List { json } => commands::list_command(&ctx, json, print),
    }
}
