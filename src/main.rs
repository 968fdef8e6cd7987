use clap::{Arg, Command};
use igbo_translator::gateway::RemoteGateway;
use igbo_translator::loader::load_dictionary_from_file;
use igbo_translator::translate::TranslationService;
use igbo_translator::{Dictionary, Suggester, TranslationSource};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let matches = Command::new("igbo-translator")
        .version("0.1.0")
        .about("English to Igbo phrase lookup and best-effort translation")
        .arg(
            Arg::new("text")
                .help("English text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .help("Path to a JSON dictionary file (default: built-in seed table)"),
        )
        .arg(
            Arg::new("remote")
                .long("remote")
                .short('r')
                .help("Backend base URL (falls back to IGBO_BACKEND_URL, else local only)"),
        )
        .arg(
            Arg::new("suggest")
                .long("suggest")
                .short('s')
                .help("Show typeahead suggestions instead of translating")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();

    let dictionary = match matches.get_one::<String>("dictionary") {
        Some(path) => load_dictionary_from_file(Path::new(path))?,
        None => Dictionary::seed(),
    };
    let dictionary = Arc::new(dictionary);

    if matches.get_flag("suggest") {
        let suggester = Suggester::new(dictionary);
        for suggestion in suggester.suggest_default(text) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    let service = match matches
        .get_one::<String>("remote")
        .map(|url| RemoteGateway::new(url))
        .or_else(|| RemoteGateway::from_env().ok().map(Ok))
    {
        Some(gateway) => TranslationService::with_gateway(dictionary, Arc::new(gateway?)),
        None => TranslationService::local(dictionary),
    };

    let translation = match service.translate(text).await {
        Ok(translation) => translation,
        // A 401 just means no remote session; the local tiers still apply
        Err(_) => service.resolve_locally(text),
    };

    match translation.source {
        TranslationSource::Remote => println!("{}  [remote]", translation.text),
        TranslationSource::Local => println!("{}", translation.text),
    }

    Ok(())
}
