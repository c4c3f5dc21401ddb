//! gencase: Generates button enclosure meshes from the command line.
//!
//! Writes a watertight triangle mesh of the case, the lid, or both, to
//! stdout or to a file.
//!
//! # Logging
//!
//! Logs go to stderr. `-v` shows a generation summary, `-vv` per-panel
//! progress and `-vvv` everything. `RUST_LOG` takes precedence:
//! - `RUST_LOG=enclosure_mesh=debug` - Per-panel face counts
//! - `RUST_LOG=trace` - All output
//!
//! # Example
//!
//! ```bash
//! # Full assembly with default dimensions
//! gencase assembly -o enclosure.obj
//!
//! # A narrow lid with the button surface, summary on stderr
//! gencase lid --width 60 --button 16 --surface -v > lid.obj
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::constants::{
    DEFAULT_BUTTON, DEFAULT_CABLE, DEFAULT_CLEARANCE, DEFAULT_DEPTH, DEFAULT_LENGTH,
    DEFAULT_THICKNESS, DEFAULT_WIDTH,
};
use enclosure_mesh::{write_enclosure, Mesh, Parts, Settings};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// gencase - Generates a 3D-printable button enclosure.
///
/// All dimensions are in millimeters. Width, length and depth are outer
/// dimensions; hole sizes are diameters.
#[derive(Parser, Debug)]
#[command(name = "gencase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which part of the enclosure to generate
    part: Part,

    /// Outer width along x
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Outer length along y
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    length: f64,

    /// Wall thickness
    #[arg(long, default_value_t = DEFAULT_THICKNESS)]
    thickness: f64,

    /// Outer depth along z
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: f64,

    /// Button diameter
    #[arg(long, default_value_t = DEFAULT_BUTTON)]
    button: f64,

    /// Cable diameter
    #[arg(long, default_value_t = DEFAULT_CABLE)]
    cable: f64,

    /// Extra radius added to both holes
    #[arg(long, default_value_t = DEFAULT_CLEARANCE)]
    clearance: f64,

    /// Add the chamfered button surface on top of the lid
    #[arg(long)]
    surface: bool,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress all log output
    #[arg(long, short)]
    quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Bottom and four walls with the cable hole
    Case,
    /// Top panel with the button hole
    Lid,
    /// Case and lid together
    Assembly,
}

impl From<Part> for Parts {
    fn from(part: Part) -> Self {
        match part {
            Part::Case => Parts::Case,
            Part::Lid => Parts::Lid,
            Part::Assembly => Parts::Assembly,
        }
    }
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            length: self.length,
            thickness: self.thickness,
            depth: self.depth,
            button: self.button,
            cable: self.cable,
            clearance: self.clearance,
            with_surface: self.surface,
            parts: self.part.into(),
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "enclosure_mesh=info,gencase=info",
            2 => "enclosure_mesh=debug,gencase=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).compact())
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings();
    // Checked before any output file is created
    settings.validate().context("invalid enclosure dimensions")?;

    let mesh = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mesh = write_enclosure(&settings, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote mesh");
            mesh
        }
        None => {
            let stdout = io::stdout();
            let mut sink = BufWriter::new(stdout.lock());
            let mesh = write_enclosure(&settings, &mut sink).context("failed to write mesh")?;
            sink.flush().context("failed to flush stdout")?;
            mesh
        }
    };

    log_summary(&mesh);
    Ok(())
}

fn log_summary(mesh: &Mesh) {
    let report = mesh.edge_report();
    match mesh.bounding_box() {
        Some((min, max)) => info!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            min = ?min.to_array(),
            max = ?max.to_array(),
            "generated enclosure"
        ),
        None => info!(vertices = mesh.vertex_count(), "generated empty enclosure"),
    }

    if !report.is_closed() {
        warn!(
            boundary = report.boundary,
            non_manifold = report.non_manifold,
            misoriented = report.misoriented,
            "mesh is not watertight"
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    run(&cli)
}
