//! rdfkb - build the RDF knowledge-base artifact.
//!
//! Usage:
//!   rdfkb
//!   rdfkb --output kb.txt --label-policy lexical
//!   rdfkb --config rdfkb.json --stdout

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rdfkb::config::PipelineConfig;
use rdfkb::core::LabelPolicy;
use rdfkb::output::render_artifact;
use rdfkb::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rdfkb")]
#[command(about = "Render the RDF knowledge graph into text chunks for retrieval")]
struct Args {
    /// Output file (defaults to rdf_triplets.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON pipeline configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Identifier labelling: declared or lexical
    #[arg(short, long)]
    label_policy: Option<LabelPolicy>,

    /// Print the artifact instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Also print every stored fact
    #[arg(long)]
    facts: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(policy) = args.label_policy {
        config.label_policy = policy;
    }

    let pipeline = Pipeline::new(config);

    if args.facts {
        let store = pipeline.load()?;
        for line in store.fact_lines() {
            println!("{}", line);
        }
        println!();
    }

    if args.stdout {
        let report = pipeline.run()?;
        println!("{}", render_artifact(&report.chunks, chrono::Local::now().naive_local()));
        return Ok(());
    }

    let report = pipeline.run_to_configured_output().with_context(|| {
        format!("writing {}", pipeline.config().output_path.display())
    })?;

    println!("Knowledge base");
    println!("==============\n");
    println!("  Facts: {}", report.facts);
    for (kind, count) in &report.entities {
        println!("  {}: {}", kind, count);
    }
    println!("  Records: {}", report.records.len());
    println!("  Chunks: {}", report.chunks.len());
    println!("  Output: {}", pipeline.config().output_path.display());

    Ok(())
}
