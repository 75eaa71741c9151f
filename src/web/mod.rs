//! Single-page web form over the same solve contract as the CLI.
//!
//! GET `/` renders a free-text box plus a role-choice control; POST `/solve`
//! resolves the token, runs the crew and renders the normalized entries.
//! One submitted request is processed per interaction, blocking the response
//! until the batch returns. Rendering is plain string building with HTML
//! escaping; no templates, no assets.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::crew::{CrewRuntime, SolveResult};
use crate::solver::{self, ProblemRequest};
use crate::team::{Role, RoleSelection, router};

/// Shared state for the form handlers.
pub struct WebState {
    pub runtime: Arc<dyn CrewRuntime>,
    pub default_selection: RoleSelection,
}

/// Build the two-route application.
pub fn app(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/solve", post(solve_form))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: Arc<WebState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "web form listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct SolveForm {
    pub problem: String,
    #[serde(default = "default_agents_field")]
    pub agents: String,
}

fn default_agents_field() -> String {
    "it".to_string()
}

async fn index() -> Html<String> {
    Html(render_index())
}

async fn solve_form(
    State(state): State<Arc<WebState>>,
    Form(form): Form<SolveForm>,
) -> Html<String> {
    let problem = form.problem.trim();
    if problem.is_empty() {
        return Html(render_error("Please enter a problem to solve."));
    }

    let roles = router::resolve(&form.agents, &state.default_selection);
    let request = ProblemRequest {
        description: problem.to_string(),
        roles,
    };

    match solver::solve(state.runtime.as_ref(), &request).await {
        Ok(result) => Html(render_result(&result)),
        Err(e) => {
            tracing::error!("solve failed: {e}");
            Html(render_error(&e.to_string()))
        }
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\">\
         <title>{title}</title></head>\n<body>\n{body}\n</body></html>\n"
    )
}

/// The input form: free-text problem box plus the role-choice control the
/// original front end offered (IT agent, coder agent, or both).
pub fn render_index() -> String {
    let body = "\
<h1>IT Agent - Technical Problem Solver</h1>
<form action=\"/solve\" method=\"post\">
  <p><textarea name=\"problem\" rows=\"8\" cols=\"80\"
      placeholder=\"Describe your technical problem\"></textarea></p>
  <p>
    <label><input type=\"radio\" name=\"agents\" value=\"it\" checked> IT Agent</label>
    <label><input type=\"radio\" name=\"agents\" value=\"coder\"> Coder Agent</label>
    <label><input type=\"radio\" name=\"agents\" value=\"both\"> Both</label>
  </p>
  <p><button type=\"submit\">Solve Problem</button></p>
</form>";
    page("teamsim", body)
}

/// Render the normalized result, one section per entry.
pub fn render_result(result: &SolveResult) -> String {
    let mut body = String::from("<h1>Solution</h1>\n");
    for entry in &result.entries {
        let heading = entry.role.map_or("Result", Role::title);
        body.push_str(&format!(
            "<h3>{}</h3>\n<pre>{}</pre>\n",
            escape_html(heading),
            escape_html(&entry.output)
        ));
    }
    body.push_str(&format!(
        "<p><em>{} task(s), {:.1}s</em></p>\n<p><a href=\"/\">Back</a></p>",
        result.entries.len(),
        result.elapsed_secs
    ));
    page("teamsim - solution", &body)
}

pub fn render_error(message: &str) -> String {
    let body = format!(
        "<h1>Error</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>",
        escape_html(message)
    );
    page("teamsim - error", &body)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
