use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use base64::Engine;
use clap::Parser;
use gaul_config::Config;
use gaul_core::comic::generate_comic_strip;
use gaul_core::search::perform_search;
use gaul_genai::GeminiClient;
use gaul_types::{ComicRequest, Language, SearchResult};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Interpret slang and emoji terms for a bilingual audience
#[derive(Parser)]
#[command(name = "gaul", version, about)]
struct Args {
    /// Term, phrase, or emoji to interpret
    query: String,

    /// Response and message language (en or id)
    #[arg(short, long, default_value = "en")]
    language: Language,

    /// Also render a 4-panel comic strip for the term
    #[arg(long)]
    comic: bool,

    /// Example dialogue line for the comic (repeatable)
    #[arg(long = "sentence", requires = "comic")]
    sentences: Vec<String>,

    /// Where to write the comic image
    #[arg(long, default_value = "comic.png", requires = "comic")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::new();

    let client = GeminiClient::new(
        config.genai.api_key.clone(),
        config.genai.api_url.clone(),
        config.genai.text_model.clone(),
        config.genai.image_model.clone(),
        Duration::from_secs(config.timeout_seconds),
    )?;

    // Ctrl-C abandons in-flight calls; no result is delivered after that.
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::info!("Shutdown requested, abandoning in-flight calls");
            Ok(())
        }
        result = run(&client, &args) => result,
    }
}

async fn run(client: &GeminiClient, args: &Args) -> anyhow::Result<()> {
    let outcome = perform_search(client, &args.query, args.language).await;

    if let Some(result) = outcome.data {
        print_result(&result);

        if args.comic {
            render_comic(client, &result, args).await?;
        }
    } else {
        println!("{}", outcome.error.unwrap_or_default());
    }

    Ok(())
}

fn print_result(result: &SearchResult) {
    let interpretation = &result.interpretation;

    println!("{}", interpretation.term_phrase);
    println!("  platform:   {}", interpretation.platform);
    println!("  meaning:    {}", interpretation.meaning);
    println!("  linguistic: {}", interpretation.linguistic_category);
    println!("  social:     {}", interpretation.social_category);
    println!();
    println!("{}", interpretation.explanation);

    if !interpretation.references.is_empty() {
        println!();
        println!("references:");
        for reference in &interpretation.references {
            println!("  - {reference}");
        }
    }

    if !result.related_terms.is_empty() {
        println!();
        println!("related: {}", result.related_terms.join(", "));
    }
}

async fn render_comic(
    client: &GeminiClient,
    result: &SearchResult,
    args: &Args,
) -> anyhow::Result<()> {
    let request = ComicRequest {
        term_phrase: result.interpretation.term_phrase.clone(),
        example_sentences: args.sentences.clone(),
        language: args.language,
    };

    match generate_comic_strip(client, &request).await {
        Ok(data_uri) => {
            let bytes = decode_data_uri(&data_uri)?;
            std::fs::write(&args.out, bytes)
                .with_context(|| format!("failed to write {}", args.out.display()))?;

            println!();
            println!("comic strip written to {}", args.out.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "comic generation failed");
            println!("{}", e.message(args.language));
        }
    }

    Ok(())
}

fn decode_data_uri(uri: &str) -> anyhow::Result<Vec<u8>> {
    let encoded = uri
        .rsplit_once("base64,")
        .map(|(_, data)| data)
        .context("comic payload is not a base64 data URI")?;

    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .context("comic payload is not valid base64")
}
