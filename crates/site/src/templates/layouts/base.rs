use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    dom::RevealPlan,
    templates::components::{footer, navbar, scroll_to_top},
};

pub struct PageConfig<'a> {
    pub title: &'a str,
    pub container_id: &'a str,
    pub reveal: RevealPlan,
}

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/lucide@latest" {}
                script src="https://cdn.jsdelivr.net/npm/htmx.org@1.9.10/dist/htmx.min.js" {}
                link rel="stylesheet" href="/static/styles.css";
            }
            body class="bg-blue-50 text-gray-800" {
                script {
                    (PreEscaped(format!("window.SITE_CONFIG = {};", site_config(config))))
                }

                (navbar())

                main id="main-content" class="pt-16" {
                    (content)
                }

                (footer(OffsetDateTime::now_utc().year()))
                (scroll_to_top())

                script src="/static/site.js" {}
            }
        }
    }
}

/// Settings the browser script needs to reveal the schedule cards.
/// `<` is escaped so no value can close the surrounding script element.
fn site_config(config: &PageConfig) -> String {
    json!({
        "containerId": config.container_id,
        "revealInitialDelayMs": config.reveal.initial_delay.as_millis() as u64,
    })
    .to_string()
    .replace('<', "\\u003c")
}
