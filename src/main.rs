use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use facestyle::i18n::Locale;
use facestyle::random::RngSource;
use facestyle::report::SectionContent;
use facestyle::detector::RecordedDetector;
use facestyle::{config, matcher, photo, report, FaceError, Pipeline};
use log::info;

#[derive(Parser)]
#[command(name = "facestyle")]
#[command(version, about = "Style reports and animal look-alikes from a photo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Output {
    /// Language of the result (defaults to the configured locale)
    #[arg(short, long)]
    lang: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a style report
    Report {
        /// Photo to analyze
        #[arg(short, long)]
        photo: Option<PathBuf>,
        /// Skip the analysis delay
        #[arg(long)]
        instant: bool,
        #[command(flatten)]
        output: Output,
    },
    /// Find the animal look-alike for a recorded face detection
    Match {
        /// Detection JSON written by the landmark detector
        #[arg(short, long)]
        face: PathBuf,
        /// Photo the detection was taken from
        #[arg(short, long)]
        photo: Option<PathBuf>,
        #[command(flatten)]
        output: Output,
    },
    /// Edit the config file, writing the defaults first if it does not exist
    Config {
        /// Print the effective config instead of opening an editor
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(None)?;

    match cli.command {
        Commands::Report {
            photo,
            instant,
            output,
        } => run_report(&cfg, photo.as_deref(), instant, &output),
        Commands::Match {
            face,
            photo,
            output,
        } => run_match(&cfg, &face, photo.as_deref(), &output),
        Commands::Config { show } => edit_config(&cfg, show),
    }
}

fn load_locale(cfg: &config::Config, output: &Output) -> Result<Locale> {
    let lang = output.lang.as_deref().unwrap_or(&cfg.locale);
    Locale::load(lang, cfg.locale_dir.as_deref()).context("Failed to load translations")
}

fn check_photo(path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        let info = photo::inspect(path).context("Failed to read photo")?;
        info!("Photo {}: {}x{}", path.display(), info.width, info.height);
    }
    Ok(())
}

fn run_report(
    cfg: &config::Config,
    photo: Option<&Path>,
    instant: bool,
    output: &Output,
) -> Result<()> {
    let locale = load_locale(cfg, output)?;
    check_photo(photo)?;

    if !instant {
        info!("{}", locale.get("analyzing"));
        std::thread::sleep(cfg.analysis_delay());
    }

    let mut rng = RngSource::from_seed(cfg.seed);
    let sections = report::generate_report(&mut rng).sections(&locale);

    if output.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    for section in &sections {
        println!("## {}", section.label);
        match &section.content {
            SectionContent::Text { text } => println!("{}", text),
            SectionContent::Diagnosis { name, description } => {
                println!("{}: {}", name, description)
            }
            SectionContent::Items { items } => {
                for item in items {
                    println!("- {}", item);
                }
            }
        }
        println!();
    }
    Ok(())
}

fn run_match(
    cfg: &config::Config,
    face: &Path,
    photo: Option<&Path>,
    output: &Output,
) -> Result<()> {
    let locale = load_locale(cfg, output)?;
    check_photo(photo)?;

    let mut pipeline = Pipeline::new(RecordedDetector::open(face));
    let profile = match pipeline.process() {
        Ok(profile) => profile,
        Err(e) if matches!(e.downcast_ref::<FaceError>(), Some(FaceError::NoFaceDetected)) => {
            anyhow::bail!("{}", locale.get("noFaceDetected"));
        }
        Err(e) => return Err(e.context("Failed to process face detection")),
    };

    info!(
        "Eyes: {} ({:.3}), face: {} ({:.3})",
        profile.eye_size, profile.eye_ratio, profile.face_shape, profile.face_ratio
    );

    let mut rng = RngSource::from_seed(cfg.seed);
    let result = matcher::best_match(&profile, &mut rng);

    let shown = result.localize(&locale);
    if output.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!("## {}", locale.get("matchResultTitle"));
    println!("{} {}", shown.emoji, shown.name);
    println!("{}", shown.description);
    println!("{}: {}%", locale.get("matchScoreLabel"), shown.percent);
    Ok(())
}

fn edit_config(cfg: &config::Config, show: bool) -> Result<()> {
    if show {
        print!("{}", toml::to_string_pretty(cfg)?);
        return Ok(());
    }

    config::write_if_missing(cfg, None).context("Failed to write config")?;

    let path = config::CONFIG_PATH.as_os_str();
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    info!("Editing {:?} with {}", path, editor);

    let status = std::process::Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch {}", editor))?;
    if !status.success() {
        anyhow::bail!("{} exited with {}", editor, status);
    }
    Ok(())
}
