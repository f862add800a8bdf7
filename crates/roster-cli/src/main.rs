use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use roster_ai::GeminiClient;
use roster_cli::{Destination, RosterArgs, collect_request, write_artifact};
use roster_config::{GeminiConfig, RosterConfig};
use roster_generator::{
    AiEdit, GenerationSettings, generate_roster, preview_prompt, resolve_credential,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "VANO roster CLI - Generate user list CSVs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a roster CSV, optionally edited by AI
    Generate {
        #[command(flatten)]
        roster: RosterArgs,

        /// Gemini API key (overrides GOOGLE_API_KEY)
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Output file, or `-` for stdout (defaults to the artifact filename)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Print the prompt that would be sent to the AI service
    Prompt {
        #[command(flatten)]
        roster: RosterArgs,
    },
    /// Show the active batch limits
    Limits,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    roster_observability::init_basic_console_logging("roster_cli");

    let cli = Cli::parse();
    let settings = GenerationSettings::from(&RosterConfig::from_env());

    match cli.command {
        Commands::Generate {
            roster,
            api_key,
            output,
        } => handle_generate(&settings, roster, api_key, output).await,
        Commands::Prompt { roster } => handle_prompt(&settings, roster),
        Commands::Limits => handle_limits(&settings),
    }
}

async fn handle_generate(
    settings: &GenerationSettings,
    roster: RosterArgs,
    api_key: Option<String>,
    output: Option<PathBuf>,
) {
    let gemini_config = GeminiConfig::from_env();

    // Without a key the form never runs.
    let api_key = match resolve_credential(&gemini_config, api_key.as_deref()) {
        Ok(key) => key,
        Err(e) => {
            eprintln!("\n❌ {}", e);
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::from_config(&gemini_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n❌ Error creating AI client: {}", e);
            std::process::exit(1);
        }
    };

    let request = match collect_request(&roster) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("\n❌ Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    let ai = AiEdit {
        editor: &client,
        api_key: &api_key,
    };

    let artifact = match generate_roster(&request, settings, Some(ai)).await {
        Ok(artifact) => artifact,
        Err(e) => {
            eprintln!("\n❌ {}", e);
            std::process::exit(1);
        }
    };

    match write_artifact(&artifact, output.as_deref()) {
        Ok(destination) => {
            // Keep stdout clean when the CSV itself goes there.
            let summary = format!(
                "✅ Wrote {} users to {}{}",
                artifact.record_count,
                destination,
                if artifact.ai_edited { " (AI edited)" } else { "" }
            );
            if destination == Destination::Stdout {
                eprintln!("\n{}", summary);
            } else {
                println!("\n{}", summary);
            }
        }
        Err(e) => {
            eprintln!("\n❌ Error writing roster: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_prompt(settings: &GenerationSettings, roster: RosterArgs) {
    let request = match collect_request(&roster) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("\n❌ Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    match preview_prompt(&request, settings) {
        Ok(Some(prompt)) => println!("{}", prompt),
        Ok(None) => println!("No instruction given; the roster would not be sent to AI."),
        Err(e) => {
            eprintln!("\n❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_limits(settings: &GenerationSettings) {
    let limits = settings
        .limits
        .to_response(settings.password_length, &settings.email_domain);

    println!("Max users per batch:           {}", limits.max_users);
    println!("Max users per AI-edited batch: {}", limits.max_ai_users);
    println!("Password length:               {}", limits.password_length);
    println!("Email domain:                  {}", limits.email_domain);
}
