//! Browser UI
//!
//! Serves the entry page with the current log already rendered; the embedded
//! script then takes over and talks to `/api/stats` like any other client.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use chrono::SecondsFormat;

use crate::api::state::AppState;
use crate::event_store::StatFilter;
use crate::types::{totals_by_player, PlayerTotals, StatEvent, StatKind};
use crate::utils::escape_html;

const PAGE_TEMPLATE: &str = include_str!("page.html");
const APP_SCRIPT: &str = include_str!("app.js");

/// Which entry page to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    /// Form visible to everyone
    Open,
    /// Form hidden behind a sign-in link
    Gated,
}

impl PageVariant {
    fn as_str(self) -> &'static str {
        match self {
            PageVariant::Open => "open",
            PageVariant::Gated => "gated",
        }
    }
}

/// GET / - Entry page
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let events = state.store.list(&StatFilter::default());
    Html(render_page(&events, PageVariant::Open))
}

/// GET /gated - Entry page with the sign-in gate
pub async fn gated(State(state): State<Arc<AppState>>) -> Html<String> {
    let events = state.store.list(&StatFilter::default());
    Html(render_page(&events, PageVariant::Gated))
}

/// Render the full page for `events` (in arrival order)
pub fn render_page(events: &[StatEvent], variant: PageVariant) -> String {
    let hidden = |flag: bool| if flag { " hidden" } else { "" };
    let totals = totals_by_player(events);

    let kinds_json = format!(
        "[{}]",
        StatKind::ALL
            .iter()
            .map(|k| format!("\"{}\"", k.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    );

    let kind_options: String = StatKind::ALL
        .iter()
        .map(|k| format!("          <option value=\"{0}\">{0}</option>\n", k.as_str()))
        .collect();

    let kind_headers: String = StatKind::ALL
        .iter()
        .map(|k| format!("            <th>{}</th>\n", k.as_str()))
        .collect();

    let events_html = render_events(events);
    let totals_html = render_totals(&totals);
    let kinds_attr = escape_html(&kinds_json);

    fill(
        PAGE_TEMPLATE,
        &[
            ("variant", variant.as_str()),
            ("kinds_json", kinds_attr.as_str()),
            ("gate_hidden", hidden(variant == PageVariant::Open)),
            ("form_hidden", hidden(variant == PageVariant::Gated)),
            ("kind_options", kind_options.trim_end()),
            ("kind_headers", kind_headers.trim_end()),
            ("totals_hidden", hidden(totals.is_empty())),
            ("totals", totals_html.as_str()),
            ("events", events_html.as_str()),
            ("script", APP_SCRIPT),
        ],
    )
}

/// Substitute `{{name}}` placeholders in one pass; inserted text is never rescanned.
/// Unknown placeholders are left as they are.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Recent events, most recent first
pub fn render_events(events: &[StatEvent]) -> String {
    if events.is_empty() {
        return r#"<p class="muted">No events yet. Add one above.</p>"#.to_string();
    }

    let items: String = events
        .iter()
        .rev()
        .map(|event| {
            let ts = event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
            format!(
                "<li><strong>{}</strong> — {} (Set {}) • <span class=\"ts\" data-ts=\"{ts}\">{ts}</span></li>",
                escape_html(&event.player),
                event.kind,
                event.set_number,
            )
        })
        .collect();

    format!("<ul>{}</ul>", items)
}

/// Table body rows for the totals view
pub fn render_totals(rows: &[PlayerTotals]) -> String {
    rows.iter()
        .map(|row| {
            let cells: String = row
                .totals
                .iter()
                .map(|(_, count)| format!("<td>{}</td>", count))
                .collect();
            format!("<tr><td>{}</td>{}</tr>", escape_html(&row.player), cells)
        })
        .collect()
}
