//! Analyze one piece of feedback and print the report as JSON.
//!
//! ```text
//! analyze_feedback "A entrega atrasou e ninguém responde"
//! echo "Produto excelente" | analyze_feedback
//! ```

use anyhow::Context;
use std::io::Read;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedback_sentiment_analyzer::engine_from_env;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("feedback_sentiment_analyzer=info,warn"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn read_input() -> anyhow::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading feedback text from stdin")?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let engine = engine_from_env()?;
    let text = read_input()?;
    let report = engine.analyze(text.trim())?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
