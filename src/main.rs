// 音节切分命令行工具
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use syllabifier_lib::{OutputFormat, SyllabifierConfig, SyllableEngine, WordOutcome, WordReport};

#[derive(Parser)]
#[command(name = "syllabify")]
#[command(about = "Split English words into onset/nucleus/coda syllables")]
#[command(version)]
struct Cli {
    /// Words to look up (or ARPABET transcriptions with --phonemes)
    #[arg(required = true)]
    words: Vec<String>,

    /// CMU pronouncing dictionary file
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Phoneme feature table (JSON)
    #[arg(short, long)]
    features: Option<PathBuf>,

    /// Custom configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat each argument as a transcription, e.g. "K AE1 T"
    #[arg(short, long)]
    phonemes: bool,

    /// Print JSON reports
    #[arg(long)]
    json: bool,

    /// Only print syllable counts
    #[arg(long)]
    count: bool,
}

fn main() -> ExitCode {
    // 初始化日志（输出到 stderr，默认只显示警告）
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("错误: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// 返回是否所有单词都切分成功
fn run(cli: Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => SyllabifierConfig::load_from(path)?,
        None => SyllabifierConfig::load().unwrap_or_else(|e| {
            tracing::warn!("加载默认配置失败，使用内置默认值: {}", e);
            SyllabifierConfig::default()
        }),
    };

    // 命令行参数优先于配置文件
    if cli.dict.is_some() {
        config.dictionary_path = cli.dict.clone();
    }
    if cli.features.is_some() {
        config.feature_table_path = cli.features.clone();
    }
    if cli.json {
        config.output_format = OutputFormat::Json;
    }

    let engine = SyllableEngine::new(config.feature_table()?);

    let reports: Vec<WordReport> = if cli.phonemes {
        cli.words
            .iter()
            .map(|transcription| engine.report(transcription, Some(transcription.as_str())))
            .collect()
    } else {
        let dictionary = config.dictionary()?.ok_or_else(|| {
            anyhow::anyhow!("未指定发音词典，请使用 --dict 或在配置文件中设置 dictionary_path")
        })?;
        engine.syllabify_words(&dictionary, cli.words.iter().map(String::as_str))
    };

    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => print_text(&reports, cli.count),
    }

    Ok(reports.iter().all(|r| r.syllable_count().is_some()))
}

fn print_text(reports: &[WordReport], count_only: bool) {
    for report in reports {
        match &report.outcome {
            WordOutcome::Syllabified { syllables } if count_only => {
                println!("{}: {}", report.word, syllables.len());
            }
            WordOutcome::Syllabified { syllables } => {
                println!(
                    "{}: {} syllables: {}",
                    report.word,
                    syllables.len(),
                    syllables
                );
            }
            WordOutcome::NotInDictionary => {
                eprintln!("***{} not in CMU dictionary", report.word);
            }
            WordOutcome::Failed { error } => {
                eprintln!("{}: {}", report.word, error);
            }
        }
    }
}
