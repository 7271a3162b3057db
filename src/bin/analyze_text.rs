use anyhow::{bail, Context, Result};
use prosecheck_lib::services::{load_config_file, AnalyzerConfig, ConfigStore};
use prosecheck_lib::{analyze_with_config, init_logging, AnalysisResult, SentenceScore};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

const USAGE: &str = "Usage:\n  analyze_text <path|-> [--config <json_path>] [--sentences <n>] [--out <json_path>]\n\nNotes:\n  - Use `-` to read the text from stdin.\n  - Without --config the user config directory is consulted, then built-in defaults.\n  - Set PROSECHECK_DISABLE_FILE_LOG=1 to log to stderr only.";

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin failed")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read file failed: {}", path))
}

fn load_config(explicit: Option<String>) -> Result<AnalyzerConfig> {
    if let Some(path) = explicit {
        return load_config_file(&PathBuf::from(&path))
            .with_context(|| format!("load config failed: {}", path));
    }

    let Some(dir) = ConfigStore::default_config_dir() else {
        return Ok(AnalyzerConfig::default());
    };
    match ConfigStore::new(dir).load() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(error = %e, "config.load_failed_using_defaults");
            Ok(AnalyzerConfig::default())
        }
    }
}

/// Highest-scoring sentences first; ties keep document order
fn top_sentences(result: &AnalysisResult, n: usize) -> Vec<&SentenceScore> {
    let mut ranked: Vec<&SentenceScore> = result.sentence_scores.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(n);
    ranked
}

fn print_report(path: &str, word_count: usize, result: &AnalysisResult, sentences_n: usize) {
    println!("File: {}", path);
    println!("Words: {}", word_count);
    println!("Overall score: {}/100", result.overall_score);
    println!("Verdict: {}", result.verdict);
    println!("Confidence: {}", result.confidence);
    println!("Summary: {}", result.summary);
    println!();

    if result.signals.is_empty() {
        return;
    }

    println!("Signals:");
    for s in &result.signals {
        println!(
            "  {:<22} score={:>3}  weight={:.2}  {}",
            s.name, s.score, s.weight, s.detail
        );
    }
    println!();

    let top = top_sentences(result, sentences_n);
    if !top.is_empty() {
        println!("Most AI-like sentences:");
        for s in top {
            println!("  [{:>3}] {}", s.score, preview(&s.text, 120));
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    init_logging();

    let path = args[1].clone();
    let sentences_n: usize = match parse_arg_value(&args, "--sentences") {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("--sentences expects a number, got {:?}", raw))?,
        None => 5,
    };
    let out_path = parse_arg_value(&args, "--out");
    let config = load_config(parse_arg_value(&args, "--config"))?;

    let text = read_input(&path)?;
    if text.trim().is_empty() {
        bail!("input is empty: {}", path);
    }

    let word_count = text.split_whitespace().count();
    info!(path = %path, word_count, "analysis.start");
    let result = analyze_with_config(&text, &config);
    info!(overall_score = result.overall_score, verdict = %result.verdict, "analysis.done");

    print_report(&path, word_count, &result, sentences_n);

    if let Some(out_path) = out_path {
        let json = serde_json::to_string_pretty(&result).context("serialize result failed")?;
        std::fs::write(&out_path, json).with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
