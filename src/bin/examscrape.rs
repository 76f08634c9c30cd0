//! CLI for scraping, rendering and translating exam-answer pages.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use examscrape::fetch::{self, Fetcher};
use examscrape::render::{self, TemplateSet};
use examscrape::translate::{Memoized, OllamaTranslator};
use examscrape::{extract_questions, Error, Question, Result};

/// Default local input for `extract`, matching the saved page name of the
/// modules 11-13 download.
const DEFAULT_INPUT: &str = "ccna-1-v7-modules-11-13-ip-addressing-exam-answers-full.html";

#[derive(Parser)]
#[command(name = "examscrape", version, about = "Scrape exam-answer pages into JSON and static quiz pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract question JSON from a local HTML page.
    Extract {
        /// Source HTML file.
        #[arg(default_value = DEFAULT_INPUT)]
        path: PathBuf,

        /// Shuffle each question's options.
        #[arg(short, long)]
        randomize: bool,

        /// Output JSON path; defaults to ccna-1-v7-modules-<range>.json.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Download module pages and extract their question JSON.
    Fetch {
        /// Only this module range (e.g. "11-13"); all known ranges otherwise.
        #[arg(long)]
        module: Option<String>,

        /// Directory receiving CCNA_MODULES_<range>/ subdirectories.
        #[arg(long, default_value = "Modules")]
        out_dir: PathBuf,
    },

    /// Render standalone quiz pages from extracted JSON.
    Build {
        /// Directory holding index.html, styles.css and main.js.
        #[arg(long, default_value = "templates")]
        templates: PathBuf,

        /// Directory holding the per-module JSON output of `fetch`.
        #[arg(long, default_value = "Modules")]
        modules_dir: PathBuf,

        /// Only this module range; all known ranges otherwise.
        #[arg(long)]
        module: Option<String>,
    },

    /// Translate extracted JSON to German via an Ollama-compatible endpoint.
    Translate {
        /// Translation server base URL.
        #[arg(long, default_value = "http://localhost:11434")]
        endpoint: String,

        /// Model name.
        #[arg(long, default_value = "gemma3:4b-it-qat")]
        model: String,

        /// Directory holding the per-module JSON output of `fetch`.
        #[arg(long, default_value = "Modules")]
        modules_dir: PathBuf,

        /// Only this module range; all known ranges otherwise.
        #[arg(long)]
        module: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract {
            path,
            randomize,
            output,
        } => cmd_extract(&path, randomize, output),
        Command::Fetch { module, out_dir } => cmd_fetch(module.as_deref(), &out_dir),
        Command::Build {
            templates,
            modules_dir,
            module,
        } => cmd_build(&templates, &modules_dir, module.as_deref()),
        Command::Translate {
            endpoint,
            model,
            modules_dir,
            module,
        } => cmd_translate(&endpoint, &model, &modules_dir, module.as_deref()),
    }
}

fn cmd_extract(path: &Path, randomize: bool, output: Option<PathBuf>) -> Result<()> {
    let html = fetch::read_html(path)?;
    let report = extract_questions(&html);
    for warning in &report.warnings {
        eprintln!("{warning}");
    }

    let questions = maybe_randomize(report.questions, randomize);
    let output = output.unwrap_or_else(|| default_output_path(path));
    render::write_json(&output, &questions)?;
    println!("Saved {} questions to {}", questions.len(), output.display());
    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let range = fetch::module_range_from_path(input);
    if range == "unknown" {
        PathBuf::from("output.json")
    } else {
        PathBuf::from(format!("ccna-1-v7-modules-{range}.json"))
    }
}

fn maybe_randomize(questions: Vec<Question>, randomize: bool) -> Vec<Question> {
    if randomize {
        questions.iter().map(Question::shuffled).collect()
    } else {
        questions
    }
}

/// The ranges a batch subcommand covers: the requested one, or all known.
fn selected_ranges(module: Option<&str>) -> Vec<String> {
    match module {
        Some(range) => vec![range.to_string()],
        None => fetch::MODULE_PAGES
            .iter()
            .map(|(range, _)| (*range).to_string())
            .collect(),
    }
}

fn module_json_path(modules_dir: &Path, range: &str) -> PathBuf {
    modules_dir
        .join(format!("CCNA_MODULES_{range}"))
        .join(format!("ccna-1-v7-modules-{range}.json"))
}

fn cmd_fetch(module: Option<&str>, out_dir: &Path) -> Result<()> {
    let fetcher = Fetcher::new()?;

    for range in selected_ranges(module) {
        let Some(url) = fetch::page_url(&range) else {
            eprintln!("unknown module range: {range}");
            continue;
        };

        // A failed download abandons this page only; the batch goes on.
        let html = match fetcher.page(url) {
            Ok(html) => html,
            Err(err) => {
                tracing::warn!(%range, "skipping module: {err}");
                continue;
            }
        };

        let report = extract_questions(&html);
        for warning in &report.warnings {
            eprintln!("module {range}: {warning}");
        }

        let out_path = module_json_path(out_dir, &range);
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        render::write_json(&out_path, &report.questions)?;
        println!(
            "Saved {} questions to {}",
            report.questions.len(),
            out_path.display()
        );
    }
    Ok(())
}

fn cmd_build(templates: &Path, modules_dir: &Path, module: Option<&str>) -> Result<()> {
    let templates = TemplateSet::load(templates)?;

    for range in selected_ranges(module) {
        let json_path = module_json_path(modules_dir, &range);
        if !json_path.exists() {
            tracing::warn!(%range, path = %json_path.display(), "JSON missing, skipping module");
            continue;
        }

        let json = std::fs::read_to_string(&json_path).map_err(|source| Error::Read {
            path: json_path.clone(),
            source,
        })?;
        let questions: Vec<Question> = serde_json::from_str(&json)?;

        let page = render::render_module(&templates, &range, &questions)?;
        let out_path = json_path.with_file_name("index.html");
        std::fs::write(&out_path, page).map_err(|source| Error::Write {
            path: out_path.clone(),
            source,
        })?;
        println!("Built quiz page for module {range} -> {}", out_path.display());
    }
    Ok(())
}

fn cmd_translate(
    endpoint: &str,
    model: &str,
    modules_dir: &Path,
    module: Option<&str>,
) -> Result<()> {
    let mut translator = Memoized::new(OllamaTranslator::new(endpoint, model)?);

    for range in selected_ranges(module) {
        let json_path = module_json_path(modules_dir, &range);
        if !json_path.exists() {
            tracing::warn!(%range, path = %json_path.display(), "JSON missing, skipping module");
            continue;
        }

        let json = std::fs::read_to_string(&json_path).map_err(|source| Error::Read {
            path: json_path.clone(),
            source,
        })?;
        let tree: serde_json::Value = serde_json::from_str(&json)?;
        let translated = examscrape::translate::translate_value(&tree, &mut translator)?;

        let out_path = json_path.with_file_name(format!("ccna-1-v7-modules-{range}-de.json"));
        render::write_json_value(&out_path, &translated)?;
        println!("Translated module {range} -> {}", out_path.display());
    }

    tracing::info!(distinct = translator.cached(), "translation cache size");
    Ok(())
}
