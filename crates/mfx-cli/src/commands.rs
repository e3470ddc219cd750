use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use mfx_gen::{walk_dag, DagShape, GeneratorConfig};
use mfx_store::InMemoryNodeStore;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Blocks(ref args) => cmd_blocks(&config, args, &cli.format),
        Command::Dag(ref args) => cmd_dag(&config, args, &cli.format),
        Command::Verify(ref args) => cmd_verify(&config, args, &cli.format),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GeneratorConfig::from_toml(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(digest) = cli.digest {
        config.digest = digest.into();
    }
    tracing::debug!(digest = %config.digest, shape = %config.shape, "loaded config");
    Ok(config)
}

fn shape_for(config: &GeneratorConfig, args: &DagArgs) -> DagShape {
    DagShape::new(
        args.fanout.unwrap_or(config.shape.fanout),
        args.depth.unwrap_or(config.shape.depth),
    )
}

fn cmd_blocks(config: &GeneratorConfig, args: &BlocksArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let blocks = config.block_generator().blocks(args.count);
    match format {
        OutputFormat::Json => {
            let out: Vec<_> = blocks
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id().to_hex(),
                        "payload": String::from_utf8_lossy(b.data()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            for block in &blocks {
                println!(
                    "{} {}",
                    block.id().to_hex().cyan(),
                    String::from_utf8_lossy(block.data())
                );
            }
        }
    }
    Ok(())
}

fn cmd_dag(config: &GeneratorConfig, args: &DagArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let shape = shape_for(config, args);
    let store = InMemoryNodeStore::new();
    let dag = config
        .dag_generator()
        .make_dag_shape(&store, shape)
        .with_context(|| format!("generating DAG ({shape})"))?;

    match format {
        OutputFormat::Json => {
            let mut out = json!({
                "root": dag.root.to_hex(),
                "fanout": shape.fanout,
                "depth": shape.depth,
                "nodes": dag.len(),
                "bytes": store.total_bytes(),
            });
            if args.all {
                out["ids"] = json!(dag.ids.iter().map(|id| id.to_hex()).collect::<Vec<_>>());
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "root:".bold(), dag.root.to_hex().cyan());
            println!("  {} ({} nodes, {} bytes)", shape, dag.len(), store.total_bytes());
            if args.all {
                for id in &dag.ids {
                    println!("  {}", id.to_hex());
                }
            }
        }
    }
    Ok(())
}

fn cmd_verify(config: &GeneratorConfig, args: &DagArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let shape = shape_for(config, args);
    let store = InMemoryNodeStore::new();
    let mut generator = config.dag_generator();
    let dag = generator
        .make_dag_shape(&store, shape)
        .with_context(|| format!("generating DAG ({shape})"))?;

    let walked = walk_dag(&store, generator.digest(), dag.root).context("walking DAG")?;
    store
        .verify_all(generator.digest())
        .context("verifying stored nodes")?;

    let order_matches = walked.iter().map(|(id, _)| id).eq(dag.ids.iter());
    if walked.len() != dag.len() || !order_matches {
        anyhow::bail!(
            "walked {} nodes but generator reported {}",
            walked.len(),
            dag.len()
        );
    }

    match format {
        OutputFormat::Json => {
            let out = json!({
                "root": dag.root.to_hex(),
                "nodes": walked.len(),
                "verified": true,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {} nodes under {} verified",
                "✓".green().bold(),
                walked.len(),
                dag.root.short_hex().cyan()
            );
        }
    }
    Ok(())
}
