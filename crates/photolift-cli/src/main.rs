// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photolift: command-line image enhancement.
//
// Entry point. Initialises logging, loads the optional config file, and
// dispatches to the engine.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use image::RgbImage;
use tracing::{info, warn};

use photolift_core::catalog;
use photolift_core::error::{PhotoliftError, Result};
use photolift_core::human_errors::humanize_error;
use photolift_core::{Adjustments, EngineConfig, FilterId, PosterLayout, ProfileId};
use photolift_engine::imaging::codec::is_supported_extension;
use photolift_engine::{
    OutputFormat, apply_adjustments, apply_filter, compose_poster_from_bytes, decode, encode,
    enhance_batch, enhance_bytes, to_canonical,
};

#[derive(Parser)]
#[command(name = "photolift", version, about = "Enhance, stylise, and compose photos")]
struct Cli {
    /// JSON settings file (missing file means defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an enhancement profile on one image
    Enhance {
        input: PathBuf,

        /// Output path (default: <input>_<profile>.jpg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Profile id: traditional, quality_basic, advanced, super_clear, super_quality
        #[arg(long)]
        profile: Option<String>,

        /// Override the profile's upscale factor
        #[arg(long)]
        scale: Option<u32>,
    },

    /// Enhance many images in parallel
    Batch {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[arg(long)]
        out_dir: PathBuf,

        #[arg(long)]
        profile: Option<String>,

        #[arg(long)]
        scale: Option<u32>,

        /// Number of parallel jobs (default: config, then one per core)
        #[arg(long, short)]
        jobs: Option<usize>,
    },

    /// Apply a stylistic filter
    Filter {
        input: PathBuf,

        /// Filter id: blackwhite, vintage, film, fresh, hdr, warm, cool
        #[arg(long)]
        filter: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply manual brightness/contrast/saturation/sharpness factors
    Adjust {
        input: PathBuf,

        #[arg(long)]
        brightness: Option<f32>,

        #[arg(long)]
        contrast: Option<f32>,

        #[arg(long)]
        saturation: Option<f32>,

        /// Values of 2.0 and above add one sharpen pass per whole step above 1.0
        #[arg(long)]
        sharpness: Option<f32>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compose several images onto one poster
    Poster {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// grid or horizontal (default: config)
        #[arg(long)]
        layout: Option<String>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the advertised enhancement profiles
    Profiles {
        #[arg(long)]
        json: bool,
    },

    /// List the filter presets
    Filters {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let human = humanize_error(&err);
            eprintln!("Error: {}", human.message);
            eprintln!("  {}", human.suggestion);
            tracing::debug!(error = %err, severity = ?human.severity, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Enhance {
            input,
            output,
            profile,
            scale,
        } => {
            let profile = resolve_profile(profile.as_deref(), &config);
            let data = read_input(&input)?;
            let enhanced = enhance_bytes(profile, &data, scale)?;
            let output = output.unwrap_or_else(|| sibling_path(&input, profile.as_str()));
            write_output(&enhanced, &output, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Batch {
            inputs,
            out_dir,
            profile,
            scale,
            jobs,
        } => {
            let profile = resolve_profile(profile.as_deref(), &config);
            let jobs = jobs.or(config.batch_threads);
            run_batch(&inputs, &out_dir, profile, scale, jobs, &config)
        }
        Commands::Filter {
            input,
            filter,
            output,
        } => {
            if FilterId::from_id(&filter).is_none() {
                warn!(filter = %filter, "Unknown filter; image will be unchanged");
            }
            let image = to_canonical(&decode(&read_input(&input)?)?);
            let filtered = apply_filter(&filter, &image);
            let output = output.unwrap_or_else(|| sibling_path(&input, &filter));
            write_output(&filtered, &output, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Adjust {
            input,
            brightness,
            contrast,
            saturation,
            sharpness,
            output,
        } => {
            let adjustments = Adjustments {
                brightness,
                contrast,
                saturation,
                sharpness,
            };
            let image = to_canonical(&decode(&read_input(&input)?)?);
            let adjusted = apply_adjustments(&image, &adjustments);
            let output = output.unwrap_or_else(|| sibling_path(&input, "adjusted"));
            write_output(&adjusted, &output, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Poster {
            inputs,
            layout,
            output,
        } => {
            let layout = match layout {
                Some(layout) => layout.parse::<PosterLayout>()?,
                None => config.poster_layout,
            };
            // Unreadable files become empty entries so their cell stays white.
            let data: Vec<Vec<u8>> = inputs
                .iter()
                .map(|path| {
                    read_input(path).unwrap_or_else(|err| {
                        warn!(path = %path.display(), error = %err, "Could not read poster input");
                        Vec::new()
                    })
                })
                .collect();
            let poster = compose_poster_from_bytes(&data, layout)?;
            write_output(&poster, &output, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Profiles { json } => {
            let profiles = catalog::profiles();
            if json {
                println!("{}", serde_json::to_string_pretty(&profiles)?);
            } else {
                for p in profiles {
                    println!(
                        "{:<14} {:<14} {:<7} {}",
                        p.id.as_str(),
                        p.name,
                        p.speed.as_str(),
                        p.description
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Filters { json } => {
            let filters = catalog::filters();
            if json {
                println!("{}", serde_json::to_string_pretty(&filters)?);
            } else {
                for f in filters {
                    println!("{:<12} {:<16} {}", f.id.as_str(), f.name, f.description);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_batch(
    inputs: &[PathBuf],
    out_dir: &Path,
    profile: ProfileId,
    scale: Option<u32>,
    jobs: Option<usize>,
    config: &EngineConfig,
) -> Result<ExitCode> {
    std::fs::create_dir_all(out_dir)?;

    if let Some(n) = jobs {
        if let Err(err) = rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
            warn!(error = %err, "Could not size the worker pool; using the default");
        }
    }

    let mut failed = 0usize;
    let mut readable = Vec::with_capacity(inputs.len());
    let mut data = Vec::with_capacity(inputs.len());
    for path in inputs {
        match read_input(path) {
            Ok(bytes) => {
                readable.push(path);
                data.push(bytes);
            }
            Err(err) => {
                eprintln!("  Error: {}: {}", path.display(), humanize_error(&err).message);
                failed += 1;
            }
        }
    }
    if data.is_empty() {
        return Err(PhotoliftError::EmptyInput("batch"));
    }

    let names = batch_output_names(&readable, profile.as_str());
    let results = enhance_batch(&data, profile, scale)?;
    for ((path, name), result) in readable.iter().zip(names).zip(results) {
        let written = result.and_then(|image| write_output(&image, &out_dir.join(name), config));
        if let Err(err) = written {
            eprintln!("  Error: {}: {}", path.display(), humanize_error(&err).message);
            failed += 1;
        }
    }

    let total = inputs.len();
    info!(total, failed, "Batch finished");
    eprintln!("Done: {} of {} images enhanced", total - failed, total);
    if failed == total {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn resolve_profile(requested: Option<&str>, config: &EngineConfig) -> ProfileId {
    match requested {
        None => config.default_profile,
        Some(id) => ProfileId::from_id(id).unwrap_or_else(|| {
            warn!(profile = id, "Unknown profile; falling back to traditional");
            ProfileId::Traditional
        }),
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !is_supported_extension(path) {
        return Err(PhotoliftError::InvalidArgument(format!(
            "{} is not a png, jpg, jpeg, gif, or bmp file",
            path.display()
        )));
    }
    Ok(std::fs::read(path)?)
}

fn output_name(input: &Path, suffix: &str) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    format!("{stem}_{suffix}.jpg")
}

/// Output file names for a batch, in input order. Inputs that share a stem
/// get a numeric suffix so no output overwrites another.
fn batch_output_names(inputs: &[&PathBuf], suffix: &str) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|path| {
            let mut name = output_name(path, suffix);
            let mut n = 2;
            while !used.insert(name.clone()) {
                name = output_name(path, &format!("{suffix}_{n}"));
                n += 1;
            }
            name
        })
        .collect()
}

fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(output_name(input, suffix))
}

fn write_output(image: &RgbImage, path: &Path, config: &EngineConfig) -> Result<()> {
    let format = OutputFormat::for_path(path, config.jpeg_quality);
    let bytes = encode(image, format)?;
    std::fs::write(path, bytes)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Wrote output"
    );
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_names_with_shared_stems_do_not_collide() {
        let paths = [
            PathBuf::from("a/x.jpg"),
            PathBuf::from("b/x.png"),
            PathBuf::from("c/y.jpg"),
            PathBuf::from("d/x.bmp"),
        ];
        let refs: Vec<&PathBuf> = paths.iter().collect();
        let names = batch_output_names(&refs, "traditional");
        assert_eq!(
            names,
            vec![
                "x_traditional.jpg",
                "x_traditional_2.jpg",
                "y_traditional.jpg",
                "x_traditional_3.jpg",
            ]
        );
    }

    #[test]
    fn output_name_uses_stem_and_suffix() {
        assert_eq!(output_name(Path::new("dir/cat.PNG"), "film"), "cat_film.jpg");
        assert_eq!(
            sibling_path(Path::new("dir/cat.png"), "adjusted"),
            PathBuf::from("dir/cat_adjusted.jpg")
        );
    }
}
