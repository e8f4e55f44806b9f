use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lct_core::demo::{BodeFrame, PoleFrame, StepFrame};
use lct_core::render::{
    bode_summary, pole_summary, step_summary, Renderer, SvgRenderer, TableRenderer,
};
use lct_core::tracker::{JsonFileStore, SyllabusTracker, ITEMS, STORAGE_KEY};
use lct_core::{BodePlotDemo, PoleMovementDemo, StepResponseDemo};

mod chart;
mod config;

use chart::ChartRenderer;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "lct", version, about = "Linear control-theory response demos")]
struct Cli {
    /// TOML file overriding chart viewports and table stride
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Second-order unit-step response
    Step {
        /// Damping ratio
        #[arg(long, default_value_t = 0.45)]
        zeta: f64,
        /// Natural frequency (rad/s)
        #[arg(long, default_value_t = 2.2)]
        wn: f64,
        /// Simulated time span (s)
        #[arg(long, default_value_t = 8.0)]
        horizon: f64,
        #[command(flatten)]
        output: Output,
    },
    /// Closed-loop poles of K/((s+1)(s+3))
    Poles {
        /// Loop gain K
        #[arg(long, default_value_t = 0.5)]
        gain: f64,
        #[command(flatten)]
        output: Output,
    },
    /// Two-pole open-loop Bode plot with gain crossover and phase margin
    Bode {
        #[arg(long, default_value_t = 12.0, allow_negative_numbers = true)]
        gain_db: f64,
        /// First corner frequency (rad/s)
        #[arg(long, default_value_t = 1.0)]
        w1: f64,
        /// Second corner frequency (rad/s)
        #[arg(long, default_value_t = 8.0)]
        w2: f64,
        #[command(flatten)]
        output: Output,
    },
    /// Syllabus progress checklist
    Tracker {
        /// Completion record (defaults to ./lct_syllabus_tracker_v1.json)
        #[arg(long)]
        store: Option<PathBuf>,
        #[command(subcommand)]
        action: Option<TrackerAction>,
    },
}

#[derive(Subcommand, Debug)]
enum TrackerAction {
    /// Print every item and the progress totals
    Show,
    /// Flip the completion flag of one item
    Toggle { id: String },
    /// Clear every completion flag
    Reset,
}

#[derive(Args, Debug)]
struct Output {
    /// Print a sample table before the summary
    #[arg(long)]
    table: bool,
    /// Write the chart as direct SVG markup
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Write the chart through the plotting library
    #[arg(long)]
    chart: Option<PathBuf>,
}

impl Output {
    fn emit(&self, config: &Config, frame: &DemoFrame) -> anyhow::Result<()> {
        if self.table {
            print!("{}", frame.render(&TableRenderer::new(config.table_stride)));
        } else {
            println!("{}", frame.summary());
        }
        if let Some(path) = &self.svg {
            write_file(path, &frame.render(&SvgRenderer::new(config.charts)))?;
        }
        if let Some(path) = &self.chart {
            write_file(path, &frame.render(&ChartRenderer::new(config.charts))?)?;
        }
        Ok(())
    }
}

/// Frame of whichever demo the subcommand selected
enum DemoFrame {
    Step(StepFrame),
    Poles(PoleFrame),
    Bode(BodeFrame),
}

impl DemoFrame {
    fn render<R: Renderer>(&self, renderer: &R) -> R::Output {
        match self {
            DemoFrame::Step(frame) => renderer.step(frame),
            DemoFrame::Poles(frame) => renderer.poles(frame),
            DemoFrame::Bode(frame) => renderer.bode(frame),
        }
    }

    fn summary(&self) -> String {
        match self {
            DemoFrame::Step(frame) => step_summary(frame),
            DemoFrame::Poles(frame) => pole_summary(frame).join("\n"),
            DemoFrame::Bode(frame) => bode_summary(frame),
        }
    }
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn run_tracker(store: PathBuf, action: TrackerAction) -> anyhow::Result<()> {
    let mut tracker = SyllabusTracker::load(JsonFileStore::new(&store));
    match action {
        TrackerAction::Show => {}
        TrackerAction::Toggle { id } => {
            let done = tracker.toggle(&id)?;
            println!("{} {}", id, if done { "done" } else { "not done" });
        }
        TrackerAction::Reset => tracker.reset(),
    }
    for item in ITEMS.iter() {
        let mark = if tracker.is_done(item.id).unwrap_or(false) {
            'x'
        } else {
            ' '
        };
        println!("[{}] {:<4} {} ({} h)", mark, item.id, item.title, item.hours);
    }
    let progress = tracker.progress();
    println!(
        "Modules: {}/{} ({}%) | Hours: {}/{} ({}%)",
        progress.completed_modules,
        progress.total_modules,
        progress.module_percent,
        progress.completed_hours,
        progress.total_hours,
        progress.hour_percent,
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Step {
            zeta,
            wn,
            horizon,
            output,
        } => {
            let frame = StepResponseDemo::with_values(zeta, wn, horizon).frame();
            output.emit(&config, &DemoFrame::Step(frame))?;
        }
        Command::Poles { gain, output } => {
            let frame = PoleMovementDemo::with_gain(gain).frame();
            output.emit(&config, &DemoFrame::Poles(frame))?;
        }
        Command::Bode {
            gain_db,
            w1,
            w2,
            output,
        } => {
            let frame = BodePlotDemo::with_values(gain_db, w1, w2).frame();
            output.emit(&config, &DemoFrame::Bode(frame))?;
        }
        Command::Tracker { store, action } => {
            let store = store.unwrap_or_else(|| PathBuf::from(format!("{}.json", STORAGE_KEY)));
            run_tracker(store, action.unwrap_or(TrackerAction::Show))?;
        }
    }
    Ok(())
}
