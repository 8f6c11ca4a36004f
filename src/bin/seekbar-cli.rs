use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use env_logger::Env;
use serde_json::json;
use seekbar::{
    ClipInfo, FrameRate, HeadlessView, ImageFormat, RequestLog, Scrubber, ScrubberConfig,
    SeekPage, Stepping, Timecode, TrackGeometry, format_timecode, map_pointer_to_frame,
};

/// Smallest pointer step a sweep accepts, in pixels.
const MIN_SWEEP_INCREMENT: f64 = 0.01;

const CLI_AFTER_HELP: &str = "Examples:\n  seekbar timecode 1800 --fps 29.97\n  seekbar frame 00:01:00:02 --fps 29.97\n  seekbar map 250 --frames 1000 --width 500\n  seekbar sweep --file clip.mov --frames 1000 --fps 25 --steps 15 --json\n  seekbar page --file clip.mov --frames 1500 --fps 25 --out seek.html\n  seekbar completions zsh > _seekbar";

#[derive(Debug, Parser)]
#[command(
    name = "seekbar",
    version,
    about = "Frame scrubber toolkit: timecode, pointer mapping, and seek pages",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show debug logging output.
    #[arg(long)]
    verbose: bool,

    /// Load scrubber settings from a JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame server endpoint for preview requests.
    #[arg(long)]
    base_url: Option<String>,

    /// Preview image format (jpeg, jpegNN, png, ppm, rgb, rgba).
    #[arg(long)]
    format: Option<String>,

    /// Slider track width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the timecode of a frame.
    #[command(
        about = "Convert a frame number to timecode",
        after_help = "Examples:\n  seekbar timecode 1800 --fps 29.97\n  seekbar timecode 90061 --fps 25 --json"
    )]
    Timecode {
        /// Frame number.
        frame: u64,
        /// Frame rate (25, 29.97, 30000/1001).
        #[arg(long)]
        fps: String,
        /// Disable drop-frame counting at 29.97 fps.
        #[arg(long)]
        non_drop: bool,
        /// Output as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the frame number of a timecode.
    #[command(
        about = "Convert timecode to a frame number",
        after_help = "Examples:\n  seekbar frame 00:01:00:02 --fps 29.97\n  seekbar frame 01:00:02:11 --fps 25"
    )]
    Frame {
        /// Timecode as HH:MM:SS:FF.
        timecode: String,
        /// Frame rate (25, 29.97, 30000/1001).
        #[arg(long)]
        fps: String,
        /// Disable drop-frame counting at 29.97 fps.
        #[arg(long)]
        non_drop: bool,
    },

    /// Map a pointer position on the track to a frame.
    #[command(
        about = "Map a pointer position to a frame",
        after_help = "Examples:\n  seekbar map 250 --frames 1000 --width 500\n  seekbar map 500 --frames 1000 --steps 15"
    )]
    Map {
        /// Pointer x coordinate.
        pointer: f64,
        /// Number of frames in the clip.
        #[arg(long)]
        frames: u64,
        /// Track left edge in pointer coordinates.
        #[arg(long, default_value_t = 0.0)]
        offset: f64,
        /// Number of stops; 0 maps continuously.
        #[arg(long, default_value_t = 0)]
        steps: u32,
        /// Also print the timecode at this frame rate.
        #[arg(long)]
        fps: Option<String>,
    },

    /// Sweep the pointer across the track and print every dispatched seek.
    #[command(
        about = "Simulate a pointer sweep",
        after_help = "Examples:\n  seekbar sweep --file clip.mov --frames 1000 --fps 25\n  seekbar sweep --file clip.mov --frames 1000 --fps 25 --steps 15 --json"
    )]
    Sweep {
        /// Clip id on the frame server.
        #[arg(long)]
        file: String,
        /// Number of frames in the clip.
        #[arg(long)]
        frames: u64,
        /// Frame rate.
        #[arg(long)]
        fps: String,
        /// Step-count input; omit for continuous dragging.
        #[arg(long)]
        steps: Option<String>,
        /// Pointer increment in pixels (at least 0.01).
        #[arg(long, default_value_t = 1.0)]
        increment: f64,
        /// Output as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render the HTML seek page for a clip.
    #[command(
        about = "Render a seek page",
        after_help = "Examples:\n  seekbar page --file clip.mov --frames 1500 --fps 25 --out seek.html\n  seekbar page --input clip.mov --out seek.html"
    )]
    Page {
        /// Clip id on the frame server.
        #[arg(long)]
        file: Option<String>,
        /// Number of frames in the clip.
        #[arg(long)]
        frames: Option<u64>,
        /// Frame rate.
        #[arg(long)]
        fps: Option<String>,
        /// Frame geometry as WIDTHxHEIGHT.
        #[arg(long)]
        geometry: Option<String>,
        /// Probe clip information from a media file (requires `ffmpeg`).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output path; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    #[cfg(feature = "ffmpeg")]
    /// Probe a media file and print its clip information.
    #[command(about = "Print clip information", visible_alias = "probe")]
    Info {
        /// Input media path.
        input: PathBuf,
        /// Output as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_rate(value: &str, non_drop: bool) -> Result<FrameRate, Box<dyn std::error::Error>> {
    let rate: FrameRate = value.parse()?;
    Ok(if non_drop {
        rate.with_drop_frame(false)
    } else {
        rate
    })
}

fn parse_geometry(value: &str) -> Option<(u32, u32)> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    Some((width.parse().ok()?, height.parse().ok()?))
}

/// Pointer positions for a sweep from 0 to `track_width` in `increment`
/// pixel steps.
fn sweep_positions(
    track_width: u32,
    increment: f64,
) -> Result<impl Iterator<Item = f64>, Box<dyn std::error::Error>> {
    if increment.is_nan() || increment < MIN_SWEEP_INCREMENT {
        return Err(format!("--increment must be at least {MIN_SWEEP_INCREMENT} pixels").into());
    }
    let steps = (f64::from(track_width) / increment).floor() as u64;
    Ok((0..=steps).map(move |step| step as f64 * increment))
}

fn load_config(global: &GlobalOptions) -> Result<ScrubberConfig, Box<dyn std::error::Error>> {
    let mut config = match &global.config {
        Some(path) => ScrubberConfig::load(path)?,
        None => ScrubberConfig::new(),
    };

    if let Some(base_url) = &global.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(format) = &global.format {
        let format: ImageFormat = format.parse()?;
        config = config.with_image_format(format);
    }
    if let Some(width) = global.width {
        if width == 0 {
            return Err("--width must be greater than 0".into());
        }
        config = config.with_track_width(width);
    }

    Ok(config)
}

fn init_logging(global: &GlobalOptions) {
    let level = if global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn ensure_writable_path(path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

#[cfg(feature = "ffmpeg")]
fn probe_clip(input: &Path) -> Result<ClipInfo, Box<dyn std::error::Error>> {
    Ok(ClipInfo::probe(input)?)
}

#[cfg(not(feature = "ffmpeg"))]
fn probe_clip(_input: &Path) -> Result<ClipInfo, Box<dyn std::error::Error>> {
    Err("--input requires building with the `ffmpeg` feature".into())
}

fn page_clip(
    file: Option<String>,
    frames: Option<u64>,
    fps: Option<String>,
    geometry: Option<String>,
    input: Option<PathBuf>,
) -> Result<ClipInfo, Box<dyn std::error::Error>> {
    let mut clip = match input {
        Some(input) => probe_clip(&input)?,
        None => {
            let frames = frames.ok_or("--frames is required without --input")?;
            let fps = fps.as_deref().ok_or("--fps is required without --input")?;
            let file = file.clone().ok_or("--file is required without --input")?;
            ClipInfo::new(file, parse_rate(fps, false)?, frames)?
        }
    };

    if let Some(file) = file {
        clip.file_id = file;
    }
    if let Some(geometry) = geometry {
        let (width, height) =
            parse_geometry(&geometry).ok_or(format!("unsupported --geometry: {geometry}"))?;
        clip = clip.with_geometry(width, height);
    }
    Ok(clip)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);
    let config = load_config(&cli.global)?;

    match cli.command {
        Commands::Timecode {
            frame,
            fps,
            non_drop,
            json,
        } => {
            let rate = parse_rate(&fps, non_drop)?;
            let timecode = format_timecode(frame, &rate);
            if json {
                let payload = json!({
                    "frame": frame,
                    "fps": rate.as_f64(),
                    "drop_frame": rate.is_drop_frame(),
                    "timecode": timecode.to_string(),
                    "hours": timecode.hours,
                    "minutes": timecode.minutes,
                    "seconds": timecode.seconds,
                    "frames": timecode.frames,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{timecode}");
            }
        }
        Commands::Frame {
            timecode,
            fps,
            non_drop,
        } => {
            let rate = parse_rate(&fps, non_drop)?;
            let timecode: Timecode = timecode.parse()?;
            println!("{}", timecode.to_frame_number(&rate)?);
        }
        Commands::Map {
            pointer,
            frames,
            offset,
            steps,
            fps,
        } => {
            let track = TrackGeometry::new(offset, config.track_width)?;
            let frame = map_pointer_to_frame(pointer, &track, frames, steps);
            match fps {
                Some(fps) => {
                    let rate = parse_rate(&fps, false)?;
                    println!("{frame} {}", format_timecode(frame, &rate));
                }
                None => println!("{frame}"),
            }
        }
        Commands::Sweep {
            file,
            frames,
            fps,
            steps,
            increment,
            json,
        } => {
            let positions = sweep_positions(config.track_width, increment)?;

            let clip = ClipInfo::new(file, parse_rate(&fps, false)?, frames)?;
            let (stepping, view) = match steps {
                Some(steps) => (
                    Stepping::Quantized,
                    HeadlessView::new().with_step_input(steps),
                ),
                None => (Stepping::Continuous, HeadlessView::new()),
            };

            let mut scrubber = Scrubber::new(clip, config, view, RequestLog::new())?;
            scrubber.toggle_mode(stepping);

            for pointer in positions {
                scrubber.pointer_move(pointer);
            }

            let step_count = scrubber.step_count();
            let rate = scrubber.clip().frame_rate;
            let (_, log) = scrubber.into_parts();

            if json {
                let seeks: Vec<_> = log
                    .requests()
                    .iter()
                    .map(|request| {
                        json!({
                            "frame": request.frame,
                            "timecode": format_timecode(request.frame, &rate).to_string(),
                            "url": request.to_url(),
                        })
                    })
                    .collect();
                let payload = json!({
                    "step_count": step_count,
                    "requests": log.len(),
                    "seeks": seeks,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for request in log.requests() {
                    println!(
                        "{} {}",
                        format_timecode(request.frame, &rate).to_string().cyan(),
                        request.to_url()
                    );
                }
                eprintln!(
                    "{} {} requests (step count {step_count})",
                    "sweep".green().bold(),
                    log.len()
                );
            }
        }
        Commands::Page {
            file,
            frames,
            fps,
            geometry,
            input,
            out,
        } => {
            let clip = page_clip(file, frames, fps, geometry, input)?;
            let page = SeekPage::new(&clip, &config).with_footer(concat!(
                env!("CARGO_PKG_NAME"),
                " ",
                env!("CARGO_PKG_VERSION")
            ));
            match out {
                Some(out) => {
                    ensure_writable_path(&out, cli.global.overwrite)?;
                    page.write_to(&out)?;
                    eprintln!("{} {}", "wrote".green().bold(), out.display());
                }
                None => print!("{}", page.render()),
            }
        }
        #[cfg(feature = "ffmpeg")]
        Commands::Info { input, json } => {
            let clip = ClipInfo::probe(&input)?;
            if json {
                let payload = json!({
                    "file": clip.file_id,
                    "fps": clip.frame_rate.as_f64(),
                    "frame_rate": format!("{}/{}", clip.frame_rate.numerator(), clip.frame_rate.denominator()),
                    "drop_frame": clip.frame_rate.is_drop_frame(),
                    "frame_count": clip.frame_count,
                    "width": clip.width,
                    "height": clip.height,
                    "aspect_ratio": clip.aspect_ratio,
                    "duration": clip.duration().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("File: {}", clip.file_id);
                println!("Geometry: {}x{}", clip.width, clip.height);
                println!("Aspect-Ratio: {:.3}", clip.aspect_ratio);
                println!("Framerate: {}", clip.frame_rate);
                println!("Frames: {}", clip.frame_count);
                println!("Duration: {}", clip.duration());
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "seekbar", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{MIN_SWEEP_INCREMENT, parse_geometry, parse_rate, sweep_positions};

    #[test]
    fn parse_geometry_forms() {
        assert_eq!(parse_geometry("720x576"), Some((720, 576)));
        assert_eq!(parse_geometry("1920X1080"), Some((1920, 1080)));
        assert_eq!(parse_geometry("720"), None);
        assert_eq!(parse_geometry("axb"), None);
    }

    #[test]
    fn parse_rate_non_drop() {
        let drop = parse_rate("29.97", false).unwrap();
        assert!(drop.is_drop_frame());

        let non_drop = parse_rate("29.97", true).unwrap();
        assert!(!non_drop.is_drop_frame());
        assert_eq!(non_drop.timebase(), 30);
    }

    #[test]
    fn sweep_covers_the_whole_track() {
        let positions: Vec<f64> = sweep_positions(10, 2.5).unwrap().collect();
        assert_eq!(positions, vec![0.0, 2.5, 5.0, 7.5, 10.0]);

        let fine = sweep_positions(501, MIN_SWEEP_INCREMENT).unwrap();
        assert_eq!(fine.count(), 50_101);
    }

    #[test]
    fn sweep_rejects_tiny_or_invalid_increments() {
        assert!(sweep_positions(501, 1e-12).is_err());
        assert!(sweep_positions(501, 0.0).is_err());
        assert!(sweep_positions(501, -1.0).is_err());
        assert!(sweep_positions(501, f64::NAN).is_err());
    }

    #[test]
    fn parse_rate_rejects_garbage() {
        assert!(parse_rate("fast", false).is_err());
        assert!(parse_rate("0", false).is_err());
    }
}
