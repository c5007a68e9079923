// ABOUTME: CLI for rewriting HTML with the bootstrapify content pipeline.
// ABOUTME: Reads files or stdin, runs the pipeline (or the embed stripper) and prints the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use bootstrapify_content::{strip_embed_dimensions, Bootstrapify, Pass};
use clap::Parser;
use serde_json::json;

/// Rewrite HTML fragments to use Bootstrap classes.
#[derive(Parser, Debug)]
#[command(name = "bootstrapify")]
#[command(about = "Apply Bootstrap classes and wrappers to HTML content", long_about = None)]
struct Args {
    /// Input file paths. Use "-" (the default) to read from stdin.
    targets: Vec<String>,

    /// Strip width/height attributes from embed markup instead of running the pipeline.
    #[arg(long, default_value_t = false)]
    embed: bool,

    /// Pass to leave out: blockquote, heading, image or video. Repeatable.
    #[arg(long = "skip", value_name = "PASS")]
    skip: Vec<Pass>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a JSON report per target instead of raw HTML.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Output compact JSON instead of pretty (with --json).
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Log pass activity to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.embed && !args.skip.is_empty() {
        bail!("--skip has no effect together with --embed");
    }

    let targets = if args.targets.is_empty() {
        vec!["-".to_string()]
    } else {
        args.targets.clone()
    };
    if targets.iter().filter(|t| t.as_str() == "-").count() > 1 {
        bail!("stdin (\"-\") can only be read once");
    }

    let pipeline = Bootstrapify::builder().skip_all(args.skip.iter().copied()).build();
    log::debug!("enabled passes: {:?}", pipeline.passes());

    let output = if args.json {
        let results: Vec<_> = targets
            .iter()
            .map(|target| match rewrite(target, &pipeline, args.embed) {
                Ok(html) => json!({ "target": target, "ok": true, "html": html, "error": null }),
                Err(err) => json!({ "target": target, "ok": false, "html": null, "error": err.to_string() }),
            })
            .collect();
        let failed = results
            .iter()
            .filter(|r| r.get("ok").and_then(|v| v.as_bool()) != Some(true))
            .count();
        let (mode, passes) = if args.embed {
            ("embed", json!([]))
        } else {
            ("content", json!(pipeline.passes()))
        };
        let report = json!({
            "mode": mode,
            "passes": passes,
            "results": results,
            "total": targets.len(),
            "failed": failed,
        });
        let mut text = if args.compact {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string_pretty(&report)?
        };
        text.push('\n');
        text
    } else {
        let mut rendered = Vec::with_capacity(targets.len());
        for target in &targets {
            rendered.push(rewrite(target, &pipeline, args.embed)?);
        }
        rendered.join("\n")
    };

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn rewrite(target: &str, pipeline: &Bootstrapify, embed: bool) -> Result<String> {
    let bytes = load_bytes(target)?;
    if embed {
        let html = std::str::from_utf8(&bytes)
            .with_context(|| format!("{} is not valid UTF-8", target))?;
        return Ok(strip_embed_dimensions(html));
    }
    pipeline
        .transform_bytes(&bytes)
        .with_context(|| format!("failed to rewrite {}", target))
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
