// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use destiny_scanner::{
    logging, reduce_str, zodiac_sign, BirthDate, DestinyInsightProvider, LocalInsightProvider,
    NumerologyProfile, PalmAnalysis, PalmAnalysisMode, Reading, ReadingRequest, ScannerConfig,
};
use std::path::{Path, PathBuf};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Numerology and zodiac readings from a birth date
#[derive(Parser)]
#[command(name = "destiny-scanner", version)]
#[command(about = "Numerology and zodiac readings from a birth date")]
struct Cli {
    /// Configuration file (defaults to ./destiny-scanner.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Numerology profile for a YYYY-MM-DD birth date
    Profile {
        date: String,
        #[arg(long)]
        json: bool,
    },
    /// Zodiac sign for a month and day
    Zodiac {
        month: u32,
        day: u32,
        #[arg(long)]
        json: bool,
    },
    /// Digital root of a positive integer (11, 22 and 33 are kept)
    Reduce { n: String },
    /// Full reading; opens the results view unless --json or --plain
    Reading {
        #[arg(short, long)]
        date: String,
        /// Birth time as HH:MM
        #[arg(short, long)]
        time: Option<String>,
        /// Birth place
        #[arg(short, long)]
        location: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        /// Palm image to include
        #[arg(long)]
        palm: Option<PathBuf>,
        /// Use advanced palm analysis
        #[arg(long)]
        advanced: bool,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        plain: bool,
    },
    /// Palm analysis of an image file
    Palm {
        path: PathBuf,
        #[arg(long)]
        advanced: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ScannerConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let interactive = matches!(
        cli.command,
        Commands::Reading { json: false, plain: false, .. }
    ) && cfg!(feature = "tui");

    if interactive {
        logging::init_quiet(&config.logging)?;
    } else {
        logging::init(&config.logging)?;
    }

    match cli.command {
        Commands::Profile { date, json } => run_profile(&date, json)?,
        Commands::Zodiac { month, day, json } => run_zodiac(month, day, json)?,
        Commands::Reduce { n } => run_reduce(&n)?,
        Commands::Reading {
            date,
            time,
            location,
            name,
            palm,
            advanced,
            json,
            plain,
        } => {
            let request = ReadingRequest {
                name,
                date,
                time,
                location,
            };
            let mode = palm_mode(advanced, &config);
            let reading = compute_reading(&request, palm.as_deref(), mode).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else if plain || !cfg!(feature = "tui") {
                print_reading(&reading);
            } else {
                run_ui_mode(reading)?;
            }
        }
        Commands::Palm { path, advanced } => {
            let mode = palm_mode(advanced, &config);
            let image = read_image(&path)?;
            let analysis = LocalInsightProvider::new().analyze_palm(&image, mode).await?;
            print_palm(&analysis);
        }
    }

    Ok(())
}

fn palm_mode(advanced: bool, config: &ScannerConfig) -> PalmAnalysisMode {
    if advanced || config.palm.advanced {
        PalmAnalysisMode::Advanced
    } else {
        PalmAnalysisMode::Basic
    }
}

fn read_image(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading palm image {}", path.display()))
}

async fn compute_reading(
    request: &ReadingRequest,
    palm: Option<&Path>,
    mode: PalmAnalysisMode,
) -> Result<Reading> {
    let provider = LocalInsightProvider::new();
    let image = palm.map(read_image).transpose()?;
    let palm = image.as_deref().map(|bytes| (bytes, mode));
    Ok(Reading::compute(request, &provider, palm).await?)
}

fn run_profile(date: &str, json: bool) -> Result<()> {
    let date: BirthDate = date.parse()?;
    let profile = NumerologyProfile::for_date(&date);

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("🔢 Numerology Profile - {}", date);
    println!("{}", RULE);
    print_profile(&profile);
    Ok(())
}

fn run_zodiac(month: u32, day: u32, json: bool) -> Result<()> {
    let sign = zodiac_sign(month, day)?;

    if json {
        println!("{}", serde_json::to_string_pretty(sign)?);
        return Ok(());
    }

    println!("{} {} - {}", sign.symbol, sign.name, sign.title);
    println!("{}", RULE);
    println!("📅 {}", sign.date_range);
    println!("🜂  Element:  {} ({})", sign.element.as_str(), sign.element_description);
    println!("◈  Quality:  {}", sign.quality.as_str());
    println!("🪐 Ruled by: {}", sign.ruling_planet_label());
    println!("✓ Strengths:  {}", sign.strengths.join(", "));
    println!("✗ Weaknesses: {}", sign.weaknesses.join(", "));
    println!("\n🎯 {}", sign.life_path_focus);
    Ok(())
}

fn run_reduce(n: &str) -> Result<()> {
    let root = reduce_str(n)?;
    if root.is_master() {
        println!("{} → {} ✨ master number", n.trim(), root);
    } else {
        println!("{} → {}", n.trim(), root);
    }
    Ok(())
}

fn print_profile(profile: &NumerologyProfile) {
    println!("\n🌱 Mulank {}: {}", profile.mulank.number, profile.mulank.meaning);
    println!("   {}", profile.mulank.traits.join(", "));
    println!("\n✦ Bhagyank {}: {}", profile.bhagyank.number, profile.bhagyank.meaning);
    println!("   {}", profile.bhagyank.traits.join(", "));
    println!(
        "\n⚡ Power number {}: {}",
        profile.power_number.number, profile.power_number.meaning
    );
    println!("\n🪐 {}: {}", profile.ruling_planet.name, profile.ruling_planet.influence);
    println!(
        "\n✓ Compatible: {:?}   ✗ Challenging: {:?}",
        profile.compatible_numbers, profile.incompatible_numbers
    );
    println!("\n{}", profile.personality_overview);
    println!("\n💼 Careers:  {}", profile.career_paths.join(", "));
    println!("🎨 Colors:   {}", profile.lucky_colors.join(", "));
    println!("💎 Gems:     {}", profile.lucky_gemstones.join(", "));
}

fn print_palm(analysis: &PalmAnalysis) {
    println!("✋ Palm Analysis ({})", analysis.mode);
    println!("{}", RULE);
    println!("✦ Destiny number: {}", analysis.destiny_number);
    println!("✓ Confidence: {:.0}%", analysis.confidence * 100.0);
    if let Some(features) = &analysis.features {
        println!("   Life line:      length {}", features.life_line_length);
        println!("   Dominant mount: {}", features.dominant_mount);
        println!(
            "   Fate line:      {}",
            if features.fate_line_presence { "present" } else { "faint" }
        );
    }
}

fn print_reading(reading: &Reading) {
    println!("🔮 Destiny Reading for {} - {}", reading.display_name(), reading.birth_date);
    println!("{}", RULE);
    print_profile(&reading.profile);

    println!("\n📜 Insights");
    for insight in &reading.insights.insights {
        println!("   • {}", insight);
    }

    let astro = &reading.astrology;
    println!(
        "\n{} Sun in {} ({}, {})",
        astro.sun_sign.symbol,
        astro.sun_sign.name,
        astro.sun_sign.element.as_str(),
        astro.sun_sign.quality.as_str()
    );
    if let Some(moon) = astro.moon_sign {
        println!("🌙 {}: {}", moon.name, moon.influence);
    }
    if let Some(asc) = astro.ascendant {
        println!("⬆  {}: {}", asc.name, asc.influence);
    }
    println!(
        "🪐 {}: {}",
        astro.planetary_influence.dominant_planet, astro.planetary_influence.description
    );

    if let Some(palm) = &reading.palm {
        println!();
        print_palm(palm);
    }

    println!("\n{}", RULE);
    println!("id {} · generated {}", reading.id, reading.generated_at.format("%Y-%m-%d %H:%M UTC"));
}

#[cfg(feature = "tui")]
fn run_ui_mode(reading: Reading) -> Result<()> {
    let mut app = ui::App::new(reading);
    ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(reading: Reading) -> Result<()> {
    print_reading(&reading);
    Ok(())
}
