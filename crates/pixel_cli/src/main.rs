use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use pixel_engine::{Color, DEFAULT_CANVAS_SIZE, EditorSession, PixelDump, render_ascii};

mod script;

/// Characters used for the colors of a preview, in order of first appearance
const PREVIEW_CHARS: &str = "#@%*+=o~x&$ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Parser)]
#[command(version, about = "Scriptable pixel art editor")]
pub struct Cli {
    #[arg(help = "Write a rotated log file into this directory.", long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run an editing script and write the resulting pixel dump")]
    Run {
        #[arg(help = "Script with one editing command per line.")]
        script: PathBuf,

        #[arg(help = "Canvas edge length in cells.", long, default_value_t = DEFAULT_CANVAS_SIZE)]
        size: i32,

        #[arg(help = "Output file for the pixel dump (stdout if omitted).", long)]
        out: Option<PathBuf>,
    },

    #[command(about = "Print an ASCII preview of one frame of a pixel dump")]
    Show {
        #[arg(help = "Pixel dump JSON file.")]
        dump: PathBuf,

        #[arg(help = "Frame index.", long, default_value_t = 0)]
        frame: usize,
    },
}

fn start_logger(log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;
    let handle = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("can't create log directory {}", dir.display()))?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename("pixel_cli").suffix("log").suppress_timestamp())
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                .start()?
        }
        None => logger.start()?,
    };
    Ok(handle)
}

fn run_script(script_path: &Path, size: i32, out: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(script_path).with_context(|| format!("can't read script {}", script_path.display()))?;
    let commands = script::parse_script(&text)?;

    let mut session = EditorSession::with_canvas_size(size)?;
    script::run(&mut session, &commands)?;
    log::info!(
        "ran {} commands: {} frames, {} pixels",
        commands.len(),
        session.frame_count(),
        session.total_pixel_count()
    );

    let dump = session.export_dump();
    match out {
        Some(path) => dump.save(path).with_context(|| format!("can't write pixel dump {}", path.display()))?,
        None => println!("{}", dump.to_json()?),
    }
    Ok(())
}

fn show_dump(dump_path: &Path, frame: usize) -> Result<()> {
    let dump = PixelDump::load(dump_path).with_context(|| format!("can't load pixel dump {}", dump_path.display()))?;
    let grids = dump.to_grids()?;
    let Some(grid) = grids.get(frame) else {
        bail!("frame {frame} out of range, the dump has {} frames", grids.len());
    };

    let mut chars: HashMap<Color, char> = HashMap::new();
    let mut legend = Vec::new();
    let mut available = PREVIEW_CHARS.chars();
    for (_, color) in grid.sorted_pixels() {
        if chars.contains_key(&color) {
            continue;
        }
        // colors beyond the preview alphabet render as '?'
        if let Some(ch) = available.next() {
            chars.insert(color, ch);
            legend.push((ch, color));
        }
    }

    println!("frame {} of {} ({}x{})", frame + 1, grids.len(), dump.canvas_size, dump.canvas_size);
    print!("{}", render_ascii(grid, &chars, '.'));
    for (ch, color) in legend {
        println!("{ch} {color}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let _logger = start_logger(args.log_dir.as_deref())?;

    match args.command {
        Commands::Run { script, size, out } => run_script(&script, size, out.as_deref()),
        Commands::Show { dump, frame } => show_dump(&dump, frame),
    }
}
