use clap::Parser;
use std::fs;
use std::path::PathBuf;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use tracing_subscriber::{fmt, EnvFilter};
use vidminok_protocol::Lexicon;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON lexicon to a validated rkyv binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    tracing::info!(path = %cli.input.display(), "reading JSON lexicon");
    let input_data = fs::read_to_string(&cli.input)?;
    let lexicon: Lexicon = serde_json::from_str(&input_data)?;

    vidminok_morph::lexicon::check(&lexicon)?;
    let forms: usize = lexicon.entries.iter().map(|e| e.forms.len()).sum();
    tracing::info!(version = lexicon.version, lexemes = lexicon.entries.len(), forms, "compiling lexicon");

    let mut serializer = AllocSerializer::<1024>::default();
    serializer
        .serialize_value(&lexicon)
        .map_err(|err| anyhow::anyhow!("rkyv serialization failed: {:?}", err))?;
    let bytes = serializer.into_serializer().into_inner();

    // Refuse to write an archive the engine would reject
    vidminok_morph::LexiconAnalyzer::from_archive(&bytes)?;

    fs::write(&cli.output, &bytes)?;
    tracing::info!(path = %cli.output.display(), bytes = bytes.len(), "binary written");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
