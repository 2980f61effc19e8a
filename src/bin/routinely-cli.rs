#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use routinely::{
    day_count, io, load_labels_or_warn, selection_summary, MarkdownTable, RoutineConfig,
    RoutineGenerator, ScheduleRenderer, TextListing,
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Génère une routine d'entraînement jour par jour
#[derive(Parser, Debug)]
#[command(name = "routinely", author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Nombre de jours à inclure dans le plan
    #[arg(short = 'n', long = "number", default_value_t = 1, allow_negative_numbers = true)]
    number: i64,

    /// Fichier texte de libellés (ligne i = libellé de l'indice i)
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Affiche le plan au format JSON compact au lieu de la liste
    #[arg(long)]
    json: bool,

    /// Graine pour une sortie reproductible
    #[arg(long)]
    seed: Option<u64>,

    /// Affiche le nombre de sélections par indice
    #[arg(long)]
    counts: bool,

    #[arg(long)]
    out_json: Option<PathBuf>,
    #[arg(long)]
    out_csv: Option<PathBuf>,
    /// Export Markdown (tableau imprimable)
    #[arg(long)]
    markdown: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let num_days = day_count(cli.number)?;
    let config = RoutineConfig::default();
    let mut generator = match cli.seed {
        Some(seed) => RoutineGenerator::seeded(config, seed)?,
        None => RoutineGenerator::from_entropy(config)?,
    };

    let labels = cli.labels.as_deref().and_then(load_labels_or_warn);
    if let Some(l) = &labels {
        l.ensure_covers(generator.universe())?;
    }

    let schedule = generator.generate(num_days);
    let today = Local::now().date_naive();

    if let Some(path) = &cli.out_json {
        io::export_schedule_json(path, &schedule, generator.universe(), today)?;
    }
    if let Some(path) = &cli.out_csv {
        io::export_schedule_csv(path, &schedule, labels.as_ref())?;
    }
    if let Some(path) = &cli.markdown {
        let renderer = MarkdownTable {
            generated_on: today,
            universe: generator.universe().to_vec(),
        };
        let content = renderer.render(&schedule, labels.as_ref())?;
        io::write_atomic(path, content.as_bytes())?;
    }

    if cli.json {
        println!("{}", io::schedule_to_json(&schedule)?);
    } else {
        print!("{}", TextListing.render(&schedule, labels.as_ref())?);
    }

    if cli.counts {
        println!();
        print!(
            "{}",
            selection_summary(&schedule, generator.universe(), labels.as_ref())?
        );
    }

    Ok(())
}
