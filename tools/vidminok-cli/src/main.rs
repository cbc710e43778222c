mod console;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use vidminok_morph::{LexiconAnalyzer, WordInflector};
use vidminok_names::{NameMorpher, NameOptions};
use vidminok_parser::{PhraseMorpher, TextMode};
use vidminok_protocol::{Analyzer, Lexicon};

const BUNDLED_LEXICON: &str = include_str!("../../../data/lexicon.uk.json");

#[derive(Parser)]
#[command(name = "vidminok", version, about = "Inflects Ukrainian names, positions and sentences")]
struct Cli {
    /// Lexicon to load: `.json` source or a binary built by lexicon-compiler.
    /// Defaults to the bundled sample lexicon.
    #[arg(short, long, value_name = "FILE", env = "VIDMINOK_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Target case code for --name / --text (nomn, gent, datv, accs, ablt, loct, voct).
    #[arg(short, long, default_value = "gent")]
    case: String,

    /// Full name to inflect ("Прізвище Ім'я По-батькові").
    #[arg(long, conflicts_with = "text")]
    name: Option<String>,

    /// Sentence or position title to inflect.
    #[arg(long)]
    text: Option<String>,

    /// Treat --text as a position title.
    #[arg(long, requires = "text")]
    position: bool,

    /// Keep the surname's original letter case.
    #[arg(long)]
    keep_surname_case: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let analyzer = load_analyzer(cli.lexicon.as_deref())?;
    let inflector = WordInflector::new(analyzer);
    let phrases = PhraseMorpher::with_inflector(inflector.clone());
    let mut names = NameMorpher::with_inflector(inflector).with_options(NameOptions {
        uppercase_surname: !cli.keep_surname_case,
    });

    if let Some(result) = one_shot(&cli, &mut names, &phrases) {
        println!("{}", result?);
        return Ok(());
    }

    // The console asks for the case itself
    let stdin = io::stdin();
    console::run(stdin.lock(), io::stdout(), &mut names, &phrases)?;
    Ok(())
}

/// Handles `--name` / `--text`. `None` means no one-shot input was given.
fn one_shot(cli: &Cli, names: &mut NameMorpher, phrases: &PhraseMorpher) -> Option<anyhow::Result<String>> {
    if let Some(name) = &cli.name {
        return Some(names.inflect_name(name, &cli.case).map_err(Into::into));
    }
    let text = cli.text.as_ref()?;
    let mode = if cli.position { TextMode::Position } else { TextMode::Sentence };
    Some(phrases.inflect_text(text, &cli.case, mode).map_err(Into::into))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_analyzer(path: Option<&Path>) -> anyhow::Result<Arc<dyn Analyzer>> {
    let analyzer = match path {
        None => {
            let lexicon: Lexicon = serde_json::from_str(BUNDLED_LEXICON).context("bundled lexicon")?;
            LexiconAnalyzer::new(lexicon)
        }
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
            let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let lexicon: Lexicon =
                serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
            vidminok_morph::lexicon::check(&lexicon)?;
            LexiconAnalyzer::new(lexicon)
        }
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            LexiconAnalyzer::from_archive(&bytes)?
        }
    };

    tracing::debug!(lexemes = analyzer.lexicon().entries.len(), "lexicon loaded");
    Ok(Arc::new(analyzer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_flags_parse() {
        let cli = Cli::try_parse_from(["vidminok", "--text", "Директор", "--position", "-c", "datv"]).unwrap();
        assert!(cli.position);
        assert_eq!(cli.case, "datv");
        assert!(Cli::try_parse_from(["vidminok", "--position"]).is_err());
        assert!(Cli::try_parse_from(["vidminok", "--name", "a", "--text", "b"]).is_err());
    }

    #[test]
    fn test_case_flag_only_checked_for_one_shot_input() {
        let analyzer = load_analyzer(None).unwrap();
        let mut names = NameMorpher::new(analyzer.clone());
        let phrases = PhraseMorpher::new(analyzer);

        let interactive = Cli::try_parse_from(["vidminok", "--case", "gentt"]).unwrap();
        assert!(one_shot(&interactive, &mut names, &phrases).is_none());

        let bad = Cli::try_parse_from(["vidminok", "--case", "gentt", "--name", "Шевченко Тарас"]).unwrap();
        let err = one_shot(&bad, &mut names, &phrases).unwrap().unwrap_err();
        assert!(err.to_string().starts_with("Unsupported case 'gentt'"));

        let good = Cli::try_parse_from(["vidminok", "--text", "Директор", "--position"]).unwrap();
        assert_eq!(one_shot(&good, &mut names, &phrases).unwrap().unwrap(), "Директора");
    }

    #[test]
    fn test_bundled_lexicon_loads() {
        let analyzer = load_analyzer(None).unwrap();
        assert!(!analyzer.parse("директор").is_empty());
    }
}
