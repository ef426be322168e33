//! Widget renderer
//!
//! Renders the widget view to text. Three surfaces:
//! - the configuration form (two fields plus Save/Cancel)
//! - a setup prompt when no configuration is present
//! - the deploy list, newest first, with status glyphs and links

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{Deploy, DeployStatus, WidgetMode, WidgetView};

/// Render a widget view using the current wall clock for relative times.
pub fn render_widget(view: &WidgetView) -> String {
    render_widget_at(view, Utc::now())
}

/// Render a widget view with an explicit "now" for relative-time labels.
pub fn render_widget_at(view: &WidgetView, now: DateTime<Utc>) -> String {
    let mut buf = String::new();

    if let Some(error) = &view.host_error {
        buf.push_str(&format!("[!] {}\n\n", error));
    }

    match view.mode {
        WidgetMode::Configuring => render_config_form(view, &mut buf),
        WidgetMode::Viewing => {
            if view.config.is_complete() {
                render_deploy_list(view, now, &mut buf);
            } else {
                buf.push_str("Enter your Drone API key and URL to see deployments.\n");
            }
        }
    }

    buf
}

fn render_config_form(view: &WidgetView, buf: &mut String) {
    buf.push_str("# Widget Settings\n\n");
    buf.push_str(&format!("API Key:   {}\n", view.config.api_key));
    buf.push_str(&format!("Drone URL: {}\n", view.config.drone_url));
    buf.push_str("\n[Save] [Cancel]\n");
}

fn render_deploy_list(view: &WidgetView, now: DateTime<Utc>, buf: &mut String) {
    for deploy in &view.deploys {
        buf.push_str(&render_deploy(deploy, &view.config.drone_url, now));
        buf.push('\n');
    }
}

fn render_deploy(deploy: &Deploy, drone_url: &str, now: DateTime<Utc>) -> String {
    let glyph = match deploy.status_kind() {
        DeployStatus::Success => "[OK]",
        DeployStatus::Running => "[..]",
        DeployStatus::Failed => "[X]",
    };

    let title = match deploy.detail_url(drone_url) {
        Some(url) => format!("[{}]({})", deploy.name, url),
        None => deploy.name.clone(),
    };

    let mut line = format!("{} {}", glyph, title);

    if let Some(started_at) = deploy.started_at {
        if let Some(started) = Utc.timestamp_opt(started_at, 0).single() {
            line.push_str(&format!(" ({})", relative_time(started, now)));
        }
    }

    if let (Some(commit), Some(branch)) = (deploy.short_commit(), deploy.branch.as_deref()) {
        match deploy.branch_url() {
            Some(url) => line.push_str(&format!(" | [{}]({}) - {}", branch, url, commit)),
            None => line.push_str(&format!(" | {} - {}", branch, commit)),
        }
    }

    if let Some(message) = &deploy.message {
        line.push_str(&format!("\n    {}", truncate(message, 100)));
    }

    format!("{}\n", line)
}

/// Human-readable distance between a past instant and `now`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);

    if secs < 45 {
        "just now".to_string()
    } else if secs < 120 {
        "a minute ago".to_string()
    } else if secs < 3600 {
        format!("{} minutes ago", secs / 60)
    } else if secs < 7200 {
        "an hour ago".to_string()
    } else if secs < 86400 {
        format!("{} hours ago", secs / 3600)
    } else if secs < 172800 {
        "a day ago".to_string()
    } else {
        format!("{} days ago", secs / 86400)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len).collect();
        format!("{}...", truncated.trim_end())
    }
}
