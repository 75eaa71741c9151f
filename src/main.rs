use std::sync::Arc;

use clap::Parser;

use teamsim::cli::{Cli, Commands};
use teamsim::config;
use teamsim::crew::LlmCrew;
use teamsim::repl;
use teamsim::solver::{self, ProblemRequest};
use teamsim::team::router;
use teamsim::web::{self, WebState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is read before anything looks at the environment.
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_config(&cli)?;
    tracing::info!(model = %config.model, default_agents = %config.default_agents, "teamsim starting");

    // Credential check: a missing provider key surfaces here, before any
    // request path runs.
    let crew = LlmCrew::from_env(&config)?;

    match &cli.command {
        Some(Commands::Serve { bind }) => {
            let bind = bind.clone().unwrap_or_else(|| config.bind.clone());
            let state = Arc::new(WebState {
                runtime: Arc::new(crew),
                default_selection: config.default_selection(),
            });
            web::serve(&bind, state).await?;
        }
        None => match &cli.problem {
            Some(problem) => {
                let selection = match cli.agents.as_deref() {
                    Some(token) => router::resolve(token, &config.default_selection()),
                    None => config.default_selection(),
                };
                let request = ProblemRequest {
                    description: problem.clone(),
                    roles: selection,
                };
                let result = solver::solve(&crew, &request).await?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    println!("{}", result.render_text());
                }
            }
            None => repl::run(&config, &crew).await?,
        },
    }

    Ok(())
}
