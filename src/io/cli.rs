//! Command-line interface for ranking layouts and planning collage builds

use crate::algorithm::candidate::GridCandidate;
use crate::algorithm::factorization::GridShape;
use crate::algorithm::optimizer::Optimizer;
use crate::algorithm::ranking::top_k;
use crate::io::configuration::{DEFAULT_TOP_LAYOUTS, MANIFEST_FILE_NAME, Settings};
use crate::io::error::{InfeasibleReason, LayoutError, Result, invalid_parameter};
use crate::io::logger::StderrLogger;
use crate::io::manifest::BuildManifest;
use crate::io::pool::TilePool;
use crate::io::progress::SweepProgress;
use crate::io::report::{cost_arithmetic, describe, table_header, table_row};
use crate::spatial::TileAspect;
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "collagrid")]
#[command(
    author,
    version,
    about = "Choose grid layouts for square photo collages"
)]
/// Command-line arguments shared by every subcommand
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Canvas side in pixels, overrides the configuration
    #[arg(short, long, global = true)]
    pub side: Option<u32>,

    /// Tile aspect as WIDTHxHEIGHT, overrides the configuration
    #[arg(short, long, global = true, value_name = "WxH")]
    pub aspect: Option<TileAspect>,

    /// More log output, repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the tool
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the best layout for a tile count
    Optimize {
        /// Available tiles
        tiles: u32,
    },

    /// List scored layouts, best first
    Layouts {
        /// Available tiles
        tiles: u32,

        /// Only show this many layouts
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Score a hand-picked grid
    Evaluate {
        /// Grid as COLSxROWS
        grid: GridShape,

        /// Available tiles
        tiles: u32,
    },

    /// Print the best layout for every tile count in a range
    Sweep {
        /// First tile count
        min: u32,

        /// Last tile count, inclusive
        max: u32,
    },

    /// Select the oldest tiles of a directory and write a build manifest
    Plan {
        /// Directory holding the PNG tiles
        tiles_dir: PathBuf,

        /// Tiles to consider, defaults to the whole directory
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Manifest destination, defaults to the tile directory
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Log level selected by `-v` and `-q`
    pub const fn log_level(&self) -> LevelFilter {
        StderrLogger::level_for(self.verbose, self.quiet)
    }

    /// Configuration file (or defaults) with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = self
            .config
            .as_deref()
            .map_or_else(|| Ok(Settings::default()), Settings::load)?;

        if let Some(side) = self.side {
            settings.canvas.side = side;
        }
        if let Some(aspect) = self.aspect {
            settings.canvas.tile_aspect = [aspect.width(), aspect.height()];
        }
        Ok(settings)
    }
}

/// Runs one parsed command against a configured optimizer
pub struct CommandRunner {
    command: Command,
    optimizer: Optimizer,
    quiet: bool,
}

impl CommandRunner {
    /// Resolve settings and build the optimizer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or fails validation
    pub fn new(cli: Cli) -> Result<Self> {
        let optimizer = cli.settings()?.optimizer()?;
        Ok(Self {
            command: cli.command,
            optimizer,
            quiet: cli.quiet,
        })
    }

    /// Optimizer the commands run against
    pub const fn optimizer(&self) -> &Optimizer {
        &self.optimizer
    }

    /// Run the command, writing its report to `out`
    ///
    /// # Errors
    ///
    /// Returns the optimizer's error for infeasible requests, or an error if
    /// file access or writing the report fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.command {
            Command::Optimize { tiles } => self.optimize(*tiles, out),
            Command::Layouts { tiles, top } => self.layouts(*tiles, *top, out),
            Command::Evaluate { grid, tiles } => self.evaluate(*grid, *tiles, out),
            Command::Sweep { min, max } => self.sweep(*min, *max, out),
            Command::Plan {
                tiles_dir,
                count,
                output,
            } => self.plan(tiles_dir, *count, output.as_deref(), out),
        }
    }

    fn optimize(&self, tiles: u32, out: &mut impl Write) -> Result<()> {
        let ranked = top_k(self.optimizer.rank(tiles)?, DEFAULT_TOP_LAYOUTS + 1);
        let (best, runners_up) = ranked
            .split_first()
            .ok_or(LayoutError::InfeasibleLayout {
                available_tiles: tiles,
                canvas_side: self.optimizer.canvas().side(),
                reason: InfeasibleReason::NoFeasibleGrid,
            })?;
        info!(
            "{tiles} tiles -> {}x{} grid, cost {:.1}",
            best.cols, best.rows, best.cost.total
        );
        self.write_layout(best, out)?;

        if !runners_up.is_empty() {
            writeln!(out)?;
            writeln!(out, "Runners-up:")?;
            Self::write_table(runners_up, out)?;
        }
        Ok(())
    }

    fn layouts(&self, tiles: u32, top: Option<usize>, out: &mut impl Write) -> Result<()> {
        let ranked = self.optimizer.rank(tiles)?;
        let total = ranked.len();
        let shown = top_k(ranked, top.unwrap_or(usize::MAX));

        writeln!(
            out,
            "{total} layouts for {tiles} tiles on a {0}x{0} canvas",
            self.optimizer.canvas().side()
        )?;
        Self::write_table(&shown, out)
    }

    fn evaluate(&self, grid: GridShape, tiles: u32, out: &mut impl Write) -> Result<()> {
        let layout = self.optimizer.evaluate_grid(grid, tiles)?;
        self.write_layout(&layout, out)
    }

    fn sweep(&self, min: u32, max: u32, out: &mut impl Write) -> Result<()> {
        if min > max {
            return Err(invalid_parameter(
                "range",
                &format!("{min}..{max}"),
                &"minimum must not exceed maximum",
            ));
        }

        let progress = SweepProgress::new(u64::from(max - min) + 1, self.quiet);
        writeln!(out, "  Tiles {}", table_header())?;

        for tiles in min..=max {
            match self.optimizer.optimize(tiles) {
                Ok(best) => writeln!(out, "{tiles:>7} {}", table_row(&best))?,
                Err(err) if err.is_infeasible() => {
                    debug!("{err}");
                    writeln!(out, "{tiles:>7} infeasible")?;
                }
                Err(err) => return Err(err),
            }
            progress.advance(tiles);
        }

        progress.finish();
        Ok(())
    }

    fn plan(
        &self,
        tiles_dir: &Path,
        count: Option<u32>,
        output: Option<&Path>,
        out: &mut impl Write,
    ) -> Result<()> {
        let pool = TilePool::scan(tiles_dir)?;
        let available = count.unwrap_or_else(|| pool.count());
        pool.select(available)?;

        let layout = self.optimizer.optimize(available)?;
        let selected = pool.select(layout.used_tiles)?;
        let manifest = BuildManifest::new(*self.optimizer.canvas(), layout, selected, pool.count());

        let path = output.map_or_else(|| tiles_dir.join(MANIFEST_FILE_NAME), Path::to_path_buf);
        manifest.write_to(&path)?;
        info!(
            "planned {} of {available} tiles, manifest at {}",
            manifest.photo_count,
            path.display()
        );

        self.write_layout(&layout, out)?;
        writeln!(out, "  Manifest: {}", path.display())?;
        Ok(())
    }

    fn write_layout(&self, layout: &GridCandidate, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", describe(layout))?;
        writeln!(
            out,
            "  Cost: {}",
            cost_arithmetic(layout, self.optimizer.weights())
        )?;
        Ok(())
    }

    fn write_table(layouts: &[GridCandidate], out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", table_header())?;
        for layout in layouts {
            writeln!(out, "{}", table_row(layout))?;
        }
        Ok(())
    }
}
