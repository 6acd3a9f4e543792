//! HTML rendering for the dashboard page.
//!
//! The whole page is re-rendered on every action. Each panel carries its own
//! form values and at most one outcome; panels never share state.

use std::fmt::Write;

use axum::response::Html;
use todo_core::TodoItem;

/// Result of one panel action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { title: String, body: String },
    Failure(String),
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePanel {
    pub name: String,
    pub email: String,
    pub age: String,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Default)]
pub struct FetchPanel {
    pub url: String,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Default)]
pub struct TodosPanel {
    pub text: String,
    pub outcome: Option<Outcome>,
    pub table: Option<Result<Vec<TodoItem>, String>>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub profile: ProfilePanel,
    pub fetch: FetchPanel,
    pub todos: TodosPanel,
}

impl Page {
    pub fn new(default_fetch_url: &str) -> Self {
        Self {
            fetch: FetchPanel {
                url: default_fetch_url.to_string(),
                outcome: None,
            },
            ..Self::default()
        }
    }

    pub fn render(&self) -> Html<String> {
        let mut out = String::with_capacity(4096);
        out.push_str(HEAD);
        self.render_profile(&mut out);
        self.render_fetch(&mut out);
        self.render_todos(&mut out);
        out.push_str("</main>\n</body>\n</html>\n");
        Html(out)
    }

    fn render_profile(&self, out: &mut String) {
        let p = &self.profile;
        let _ = write!(
            out,
            r#"<section id="profile">
<h2>User profile validation</h2>
<form method="post" action="/panels/profile">
<label>Name <input name="name" value="{}"></label>
<label>Email <input name="email" value="{}"></label>
<label>Age <input name="age" value="{}"></label>
<button type="submit">Validate</button>
</form>
"#,
            escape(&p.name),
            escape(&p.email),
            escape(&p.age),
        );
        render_outcome(out, p.outcome.as_ref());
        out.push_str("</section>\n");
    }

    fn render_fetch(&self, out: &mut String) {
        let f = &self.fetch;
        let _ = write!(
            out,
            r#"<section id="fetch">
<h2>Outbound request</h2>
<form method="post" action="/panels/fetch">
<label>URL <input name="url" size="60" value="{}"></label>
<button type="submit">Fetch</button>
</form>
"#,
            escape(&f.url),
        );
        render_outcome(out, f.outcome.as_ref());
        out.push_str("</section>\n");
    }

    fn render_todos(&self, out: &mut String) {
        let t = &self.todos;
        let _ = write!(
            out,
            r#"<section id="todos">
<h2>Todo list</h2>
<form method="post" action="/panels/todos/add">
<label>Todo <input name="text" value="{}"></label>
<button type="submit">Add</button>
</form>
<form method="post" action="/panels/todos/list">
<button type="submit">Show todos</button>
</form>
"#,
            escape(&t.text),
        );
        render_outcome(out, t.outcome.as_ref());
        match &t.table {
            None => {}
            Some(Err(message)) => render_outcome(out, Some(&Outcome::Failure(message.clone()))),
            Some(Ok(items)) if items.is_empty() => out.push_str("<p class=\"empty\">No todos yet.</p>\n"),
            Some(Ok(items)) => {
                out.push_str("<table>\n<tr><th>#</th><th>text</th><th>is_done</th></tr>\n");
                for (i, item) in items.iter().enumerate() {
                    let _ = writeln!(
                        out,
                        "<tr><td>{i}</td><td>{}</td><td>{}</td></tr>",
                        escape(&item.text),
                        item.is_done
                    );
                }
                out.push_str("</table>\n");
            }
        }
        out.push_str("</section>\n");
    }
}

fn render_outcome(out: &mut String, outcome: Option<&Outcome>) {
    match outcome {
        None => {}
        Some(Outcome::Success { title, body }) => {
            let _ = writeln!(
                out,
                "<div class=\"success\"><p>{}</p><pre>{}</pre></div>",
                escape(title),
                escape(body)
            );
        }
        Some(Outcome::Failure(message)) => {
            let _ = writeln!(out, "<div class=\"error\"><p>{}</p></div>", escape(message));
        }
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Todo demo dashboard</title>
<style>
body { font-family: sans-serif; margin: 2rem; }
section { border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin-bottom: 1.5rem; }
label { margin-right: 1rem; }
.success { color: #14532d; }
.error { color: #991b1b; }
table { border-collapse: collapse; }
td, th { border: 1px solid #ccc; padding: 0.25rem 0.75rem; text-align: left; }
</style>
</head>
<body>
<main>
<h1>Todo demo dashboard</h1>
"#;
