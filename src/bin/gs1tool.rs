use clap::{Parser, Subcommand};
use rust_gs1::config::debug_enabled;
use rust_gs1::tools::{
    ToolError, decode_stats, describe_length, escape_separators, read_payloads, render_record,
    unescape_separators,
};
use rust_gs1::{AiRuleTable, Decoder, DecoderConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gs1tool", version, about = "RustGS1 CLI tools")]
struct Cli {
    /// Log decoder decisions to stderr
    #[arg(long, global = true)]
    verbose: bool,
    /// Recover GTIN/expiry digits even from payloads with no GS1 markers
    #[arg(long, global = true)]
    bare_digits: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a single payload (`<GS>` or `\x1d` stand for the separator)
    Decode {
        payload: String,
        #[arg(long)]
        json: bool,
    },
    /// Decode every line of a payload file in parallel and print stats
    Batch {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List the AI length rules
    Table,
    /// Show the rule applied to one AI code
    Describe { ai: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose || debug_enabled());

    let mut config = DecoderConfig::from_env();
    if cli.bare_digits {
        config = config.with_bare_digit_fallback(true);
    }
    let decoder = Decoder::with_config(config);

    let result = match cli.command {
        Command::Decode { payload, json } => decode_cmd(&decoder, &payload, json),
        Command::Batch { file, json } => batch_cmd(&decoder, &file, json),
        Command::Table => {
            table_cmd();
            Ok(ExitCode::SUCCESS)
        }
        Command::Describe { ai } => Ok(describe_cmd(&ai)),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("gs1tool: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn decode_cmd(decoder: &Decoder, payload: &str, json: bool) -> Result<ExitCode, ToolError> {
    let payload = unescape_separators(payload);
    let record = decoder.decode(&payload);

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(ExitCode::SUCCESS);
    }

    match record {
        Some(record) => print!("{}", render_record(&record)),
        None => println!(
            "No GS1 data recognized in {}",
            escape_separators(&payload)
        ),
    }
    Ok(ExitCode::SUCCESS)
}

fn batch_cmd(decoder: &Decoder, file: &Path, json: bool) -> Result<ExitCode, ToolError> {
    let payloads = read_payloads(file)?;
    if payloads.is_empty() {
        println!("No payloads found in {}", file.display());
        return Ok(ExitCode::SUCCESS);
    }

    let texts: Vec<&str> = payloads.iter().map(|p| p.text.as_str()).collect();
    let start = Instant::now();
    let results = decoder.decode_batch(&texts);
    let elapsed = start.elapsed();
    let stats = decode_stats(&payloads, &results);

    if json {
        let body = serde_json::json!({ "results": results, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(ExitCode::SUCCESS);
    }

    for (i, (payload, result)) in payloads.iter().zip(&results).enumerate() {
        let summary = match result {
            Some(record) => format!(
                "{} gtin={} expiry={}",
                record.method.label(),
                record.product_identifier.as_deref().unwrap_or("-"),
                record.expiry_iso.as_deref().unwrap_or("-")
            ),
            None => "miss".to_string(),
        };
        println!(
            "  [{}] {} -> {}",
            i + 1,
            escape_separators(&payload.text),
            summary
        );
    }

    println!(
        "\nDecoded: {}/{} = {:.2}% ({:.2?})",
        stats.decoded,
        stats.total,
        stats.rate() * 100.0,
        elapsed
    );
    println!(
        "With product identifier: {}, with expiry: {}",
        stats.with_product_identifier, stats.with_expiry
    );
    if stats.labeled > 0 {
        println!(
            "Matched labels: {}/{} = {:.2}%",
            stats.matched,
            stats.labeled,
            stats.match_rate() * 100.0
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn table_cmd() {
    for (code, rule) in AiRuleTable::global().listing() {
        println!("{:<6} {:<6} {}", code, describe_length(&rule.length), rule.title);
    }
}

fn describe_cmd(ai: &str) -> ExitCode {
    match AiRuleTable::global().resolve(ai) {
        Some(rule) => {
            println!(
                "AI {}: {} ({}, {} AI digits)",
                ai,
                rule.title,
                describe_length(&rule.length),
                rule.ai_length
            );
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No rule for AI {}", ai);
            ExitCode::FAILURE
        }
    }
}
