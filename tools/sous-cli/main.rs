use clap::{Parser, ValueEnum};
use sous::prelude::*;
use sous::transport;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyCli {
    Exact,
    Substring,
}

impl From<PolicyCli> for MatchPolicy {
    fn from(policy: PolicyCli) -> Self {
        match policy {
            PolicyCli::Exact => MatchPolicy::Exact,
            PolicyCli::Substring => MatchPolicy::Substring,
        }
    }
}

/// Dialogue engine for a voice-driven recipe assistant
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a platform event JSON file to process
    event_path: Option<String>,

    /// Recipe catalog: a JSON file, or a `.bin` artifact. Defaults to the bundled catalog
    #[arg(short, long)]
    catalog: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<String>,

    /// Ingredient matching policy (overrides the config file)
    #[arg(short, long, value_enum)]
    policy: Option<PolicyCli>,

    /// Write the loaded catalog as a binary artifact to this path
    #[arg(long)]
    save_artifact: Option<String>,

    /// Run in interactive mode and hold a conversation on the terminal
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let router = build_router(&cli);

    if cli.human {
        run_interactive(&router);
    } else if let Some(event_path) = &cli.event_path {
        run_event(&router, event_path);
    } else if cli.save_artifact.is_none() {
        exit_with_error("An event path is required in non-interactive mode.");
    }
}

fn build_router(cli: &Cli) -> Router {
    let load_start = Instant::now();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => Config::default(),
    };
    if let Some(policy) = cli.policy {
        config.match_policy = policy.into();
    }

    let catalog = load_catalog(cli.catalog.as_deref())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)));
    tracing::info!(
        recipes = catalog.len(),
        elapsed = ?load_start.elapsed(),
        "catalog loaded"
    );

    if let Some(path) = &cli.save_artifact {
        CatalogArtifact::new(catalog.clone())
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        eprintln!("Wrote catalog artifact to '{}'", path);
    }

    Router::builder(catalog).with_config(config).build()
}

fn load_catalog(path: Option<&str>) -> std::result::Result<RecipeCatalog, CatalogError> {
    match path {
        None => RecipeCatalog::builtin(),
        Some(path) if Path::new(path).extension().is_some_and(|ext| ext == "bin") => {
            CatalogArtifact::from_file(path).map(CatalogArtifact::into_catalog)
        }
        Some(path) => RecipeCatalog::from_file(path),
    }
}

/// Processes a single event file and prints the response envelope.
fn run_event(router: &Router, event_path: &str) {
    let body = fs::read_to_string(event_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read event file '{}': {}",
            event_path, e
        ))
    });

    let envelope = transport::handle_json(router, &body)
        .unwrap_or_else(|e| exit_with_error(&format!("Turn failed: {}", e)));

    match envelope {
        Some(envelope) => {
            let json = serde_json::to_string_pretty(&envelope).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize response: {}", e))
            });
            println!("{}", json);
        }
        None => eprintln!("No response for this request type."),
    }
}

/// Runs a conversation on the terminal, carrying session state between lines.
fn run_interactive(router: &Router) {
    println!("--- Sous Interactive Mode ---");
    println!("Type an intent name, optionally followed by an ingredient.");
    println!("Intents: {}", Intent::ALL.map(Intent::name).join(", "));
    println!("Examples: 'ProvideIngredient water', 'FindRecipe', 'ContinueRecipeInstructions'");
    println!("Enter an empty line to quit.\n");

    let mut state = SessionState::default();
    if let Some(response) = handle_turn(router, Request::launch().new_session()) {
        state = response.session_state;
    }

    loop {
        let line = prompt_for_input("you");
        if line.is_empty() {
            break;
        }

        let (intent, slot) = match line.split_once(' ') {
            Some((intent, rest)) => (intent, Some(rest.trim())),
            None => (line.as_str(), None),
        };
        let mut request = Request::intent(intent).with_state(state.clone());
        if let Some(value) = slot {
            request = request.with_slot("Ingredient", value);
        }

        if let Some(response) = handle_turn(router, request) {
            let ended = response.should_end_session;
            state = response.session_state;
            if ended {
                println!("(session ended)");
                break;
            }
        }
    }
}

fn handle_turn(router: &Router, request: Request) -> Option<Response> {
    match router.handle(request) {
        Ok(Some(response)) => {
            println!("[{}] {}", response.card_title, response.spoken_text);
            if let Some(reprompt) = &response.reprompt_text {
                println!("  (reprompt: {})", reprompt);
            }
            Some(response)
        }
        Ok(None) => None,
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    if io::stdout().flush().is_err() || io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
