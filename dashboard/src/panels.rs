//! Handlers for the three dashboard panels.
//!
//! Every handler catches its own failures and renders them into the page,
//! unreadable form submissions included; panel routes always answer 200.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use todo_core::{build_fetch, parse_fetch, ApiError, HttpRequest, HttpResponse, TodoItem, UserProfile};

use crate::render::{Outcome, Page};
use crate::DashboardState;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FetchForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodoForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index(State(state): State<DashboardState>) -> Html<String> {
    Page::new(&state.default_fetch_url).render()
}

/// Unreadable form submissions are shown in the panel that sent them.
fn read_form<T: Default>(submitted: Result<Form<T>, FormRejection>) -> (T, Option<Outcome>) {
    match submitted {
        Ok(Form(form)) => (form, None),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable panel form");
            (T::default(), Some(Outcome::Failure(rejection.body_text())))
        }
    }
}

/// Panel A: build a `UserProfile` from the submitted fields.
pub async fn profile(
    State(state): State<DashboardState>,
    submitted: Result<Form<ProfileForm>, FormRejection>,
) -> Html<String> {
    let (form, rejected) = read_form(submitted);
    let outcome = rejected.unwrap_or_else(|| validate_profile(&form));
    if let Outcome::Failure(reason) = &outcome {
        tracing::debug!(%reason, "profile rejected");
    }

    let mut page = Page::new(&state.default_fetch_url);
    page.profile.name = form.name;
    page.profile.email = form.email;
    page.profile.age = form.age;
    page.profile.outcome = Some(outcome);
    page.render()
}

fn validate_profile(form: &ProfileForm) -> Outcome {
    let age = match form.age.trim().parse::<i64>() {
        Ok(age) => age,
        Err(_) => return Outcome::Failure("age must be an integer".to_string()),
    };
    match UserProfile::new(form.name.as_str(), form.email.as_str(), age) {
        Ok(profile) => match serde_json::to_string_pretty(&profile) {
            Ok(body) => Outcome::Success {
                title: "Valid profile".to_string(),
                body,
            },
            Err(e) => Outcome::Failure(e.to_string()),
        },
        Err(e) => Outcome::Failure(e.to_string()),
    }
}

/// Panel B: GET an arbitrary URL and show the JSON it returns.
pub async fn fetch(
    State(state): State<DashboardState>,
    submitted: Result<Form<FetchForm>, FormRejection>,
) -> Html<String> {
    let (form, rejected) = read_form(submitted);
    let outcome = match rejected {
        Some(outcome) => outcome,
        None => fetch_outcome(&state, form.url.trim()).await,
    };

    let mut page = Page::new(&state.default_fetch_url);
    page.fetch.url = form.url;
    page.fetch.outcome = Some(outcome);
    page.render()
}

async fn fetch_outcome(state: &DashboardState, url: &str) -> Outcome {
    let result = match build_fetch(url) {
        Ok(req) => execute(state, req).await.and_then(parse_fetch),
        Err(e) => Err(e),
    };

    match result {
        Ok(fetched) => match serde_json::to_string_pretty(&fetched.body) {
            Ok(body) => Outcome::Success {
                title: format!("HTTP {} from {url}", fetched.status),
                body,
            },
            Err(e) => Outcome::Failure(e.to_string()),
        },
        Err(e) => {
            tracing::warn!(%url, error = %e, "outbound fetch failed");
            Outcome::Failure(e.to_string())
        }
    }
}

/// Panel C, add: append the submitted text to the todo service.
pub async fn add_todo(
    State(state): State<DashboardState>,
    submitted: Result<Form<TodoForm>, FormRejection>,
) -> Html<String> {
    let (form, rejected) = read_form(submitted);
    let outcome = match rejected {
        Some(outcome) => outcome,
        None => append_outcome(&state, &form.text).await,
    };

    let mut page = Page::new(&state.default_fetch_url);
    page.todos.text = form.text;
    page.todos.outcome = Some(outcome);
    page.render()
}

async fn append_outcome(state: &DashboardState, text: &str) -> Outcome {
    let item = TodoItem::new(text);
    let result = match state.client.build_append_todo(&item) {
        Ok(req) => execute(state, req)
            .await
            .and_then(|resp| state.client.parse_append_todo(resp)),
        Err(e) => Err(e),
    };

    match result {
        Ok(stored) => Outcome::Success {
            title: "Todo added".to_string(),
            body: serde_json::to_string(&stored).unwrap_or_else(|_| stored.text.clone()),
        },
        Err(e) => {
            tracing::warn!(error = %e, "append to todo service failed");
            Outcome::Failure(e.to_string())
        }
    }
}

/// Panel C, list: fetch the whole list and show it as a table.
pub async fn list_todos(State(state): State<DashboardState>) -> Html<String> {
    let req = state.client.build_list_todos();
    let result = execute(&state, req)
        .await
        .and_then(|resp| state.client.parse_list_todos(resp));
    if let Err(e) = &result {
        tracing::warn!(error = %e, "listing todos failed");
    }

    let mut page = Page::new(&state.default_fetch_url);
    page.todos.table = Some(result.map_err(|e| e.to_string()));
    page.render()
}

/// Run the blocking round-trip off the async scheduler.
async fn execute(state: &DashboardState, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let transport = state.transport.clone();
    tokio::task::spawn_blocking(move || transport.execute(req))
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?
}
