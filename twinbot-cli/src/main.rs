//! twinbot CLI: run the Telegram digital-twin bot, or ask it one question
//! locally through the same response policy. Config from env and optional
//! CLI args.

mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cv_store::CvConfig;
use openai_client::{mask_token, OpenAIClient};
use settings::LlmSettings;
use twinbot_agent::{
    build_classifier_prompt, build_system_prompt, Classifier, CvProfile, FallbackResponder,
    OpenAiClassifier, OpenAiResponder, PersonaConfig, ResponsePolicy,
};
use twinbot_core::init_tracing;
use twinbot_telegram::{run_repl, TelegramConfig};

#[derive(Parser)]
#[command(name = "twinbot")]
#[command(about = "Digital-twin CV bot: run on Telegram, or ask one question locally", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Answer one message through the response policy and print the result.
    Ask {
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => handle_run(token).await,
        Commands::Ask { message } => handle_ask(message.join(" ")).await,
    }
}

/// Startup sequence for the bot: logging, CV load (fatal on Config/Fetch
/// errors — the bot refuses to run without a CV), policy wiring, then REPL.
async fn handle_run(token: Option<String>) -> Result<()> {
    let config = load_telegram_config(token)?;

    std::fs::create_dir_all("logs").context("Create logs directory")?;
    let log_file = config
        .log_file
        .clone()
        .unwrap_or_else(|| "logs/twinbot.log".to_string());
    init_tracing(&log_file)?;

    let (policy, profile) = build_agent().await?;

    info!(
        ai_enabled = policy.ai_enabled(),
        persona = %profile.name,
        "Starting Telegram bot"
    );

    let mut bot = teloxide::Bot::new(config.bot_token);
    if let Some(url) = &config.telegram_api_url {
        let url = url
            .parse()
            .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url))?;
        bot = bot.set_api_url(url);
    }

    run_repl(bot, Arc::new(policy), profile).await
}

/// One-shot turn without Telegram: same CV load and policy, result on stdout.
async fn handle_ask(message: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_target(false)
        .init();

    if message.trim().is_empty() {
        anyhow::bail!("ask needs a message, e.g.: twinbot ask \"what is your experience?\"");
    }

    let (policy, _profile) = build_agent().await?;
    let outcome = policy.handle_incoming_message(&message).await;

    println!("[{:?}] {}", outcome.path, outcome.text);
    Ok(())
}

fn load_telegram_config(token: Option<String>) -> Result<TelegramConfig> {
    match token {
        Some(t) => {
            let mut config = TelegramConfig::with_token(t);
            config.telegram_api_url = std::env::var("TELEGRAM_API_URL")
                .or_else(|_| std::env::var("TELOXIDE_API_URL"))
                .ok();
            config.log_file = std::env::var("LOG_FILE").ok();
            Ok(config)
        }
        None => TelegramConfig::from_env().context("Load Telegram config (BOT_TOKEN)"),
    }
}

/// Loads the CV, builds persona and profile, and wires the response policy.
/// Config and Fetch errors propagate: the process must not serve without a CV.
async fn build_agent() -> Result<(ResponsePolicy, Arc<CvProfile>)> {
    let cv_config = CvConfig::from_env();
    let cv = cv_store::load(&cv_config)
        .await
        .context("Load CV (set CV_TEXT, CV_PATH or CV_URL)")?;

    let profile = Arc::new(CvProfile::from_env());
    let tone = std::env::var("CV_TONE")
        .unwrap_or_else(|_| "brief, honest and professional".to_string());
    let persona = PersonaConfig::new(profile.name.clone(), tone, cv.content());

    let fallback = FallbackResponder::new((*profile).clone());
    let settings = LlmSettings::from_env();
    let policy = build_policy(&settings, &persona, fallback);

    Ok((policy, profile))
}

/// Builds the policy from settings. No API key means AI disabled: the policy
/// runs in permanent fallback mode, decided here once, never per message.
fn build_policy(
    settings: &LlmSettings,
    persona: &PersonaConfig,
    fallback: FallbackResponder,
) -> ResponsePolicy {
    let api_key = match &settings.api_key {
        Some(key) => key.clone(),
        None => {
            info!("OPENAI_API_KEY not set; AI disabled, fallback-only mode");
            return ResponsePolicy::ai_disabled(fallback);
        }
    };

    info!(
        base_url = %settings.base_url,
        model = %settings.model,
        api_key = %mask_token(&api_key),
        classifier_enabled = settings.classifier_enabled,
        "LLM configured"
    );

    let client = OpenAIClient::with_base_url(api_key, settings.base_url.clone());
    let responder = OpenAiResponder::new(client.clone(), settings.model.clone());
    let classifier = if settings.classifier_enabled {
        Some(Arc::new(OpenAiClassifier::new(
            client,
            settings.classifier_model.clone(),
            build_classifier_prompt(persona, settings.classifier_protocol),
            settings.classifier_protocol,
        )) as Arc<dyn Classifier>)
    } else {
        None
    };

    ResponsePolicy::new(
        classifier,
        Arc::new(responder),
        build_system_prompt(persona),
        fallback,
    )
}
