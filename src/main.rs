use anyhow::{Context, Result};
use chordsheet::{
    extract_chords, render, transpose_document, AccidentalPreference, Config, Document, SongFile,
};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Extension of persisted song files (metadata line + chord body)
const SONG_EXTENSION: &str = "wtr";

#[derive(Parser, Debug)]
#[command(name = "chordsheet", version, about = "Transpose chord-annotated song sheets")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct TransposeArgs {
    /// Semitones to shift; 0 only re-spells accidentals
    #[arg(long = "by", default_value_t = 0, allow_hyphen_values = true)]
    semitones: i64,

    /// Spell accidentals with flats (overrides the config)
    #[arg(long, conflicts_with = "sharps")]
    flats: bool,

    /// Spell accidentals with sharps (overrides the config)
    #[arg(long)]
    sharps: bool,
}

impl TransposeArgs {
    fn preference(&self, config: &Config) -> AccidentalPreference {
        if self.flats {
            AccidentalPreference::Flats
        } else if self.sharps {
            AccidentalPreference::Sharps
        } else {
            config.accidentals
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Transpose a song file (.wtr) or raw chord markup
    Transpose {
        input: PathBuf,
        #[command(flatten)]
        args: TransposeArgs,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print display lines, optionally transposed first
    Render {
        input: PathBuf,
        #[command(flatten)]
        args: TransposeArgs,
    },
    /// Extract chord markup from a saved chord page
    Extract {
        page: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the metadata of a song file as YAML
    Meta { song: PathBuf },
}

fn is_song_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SONG_EXTENSION)
}

/// Chord body of `path`: the body of a song file, or the whole file otherwise
fn read_body(path: &Path) -> Result<String> {
    if is_song_file(path) {
        let song = SongFile::read(path)
            .with_context(|| format!("Error reading song file '{}'", path.display()))?;
        Ok(song.body)
    } else {
        fs::read_to_string(path).with_context(|| format!("Error reading file '{}'", path.display()))
    }
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Error writing to '{}'", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Error loading config '{}'", path.display()))?,
        None => Config::default(),
    };
    let markers = &config.markup.chords;

    match cli.command {
        Commands::Transpose {
            input,
            args,
            output,
        } => {
            let target = args.preference(&config);
            let text = if is_song_file(&input) {
                let song = SongFile::read(&input)
                    .with_context(|| format!("Error reading song file '{}'", input.display()))?;
                song.transposed(args.semitones, target, markers).to_string()
            } else {
                let doc = Document::parse(&read_body(&input)?, markers);
                transpose_document(&doc, args.semitones, target).to_string()
            };
            write_output(output.as_deref(), &text)
        }
        Commands::Render { input, args } => {
            let target = args.preference(&config);
            let doc = Document::parse(&read_body(&input)?, markers);
            let doc = transpose_document(&doc, args.semitones, target);
            for line in render(&doc.to_string(), &config.markup).lines() {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Extract { page, output } => {
            let html = fs::read_to_string(&page)
                .with_context(|| format!("Error reading file '{}'", page.display()))?;
            let content = extract_chords(&html, &config.boundaries)
                .with_context(|| format!("Error extracting chords from '{}'", page.display()))?;
            write_output(output.as_deref(), &content)
        }
        Commands::Meta { song } => {
            let song = SongFile::read(&song)
                .with_context(|| format!("Error reading song file '{}'", song.display()))?;
            print!("{}", serde_yaml::to_string(&song.metadata)?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
