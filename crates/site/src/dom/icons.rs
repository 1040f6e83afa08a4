use log::trace;
use regex::{Captures, Regex};

use super::Document;

/// Expands icon placeholders (`<i data-lucide="name">`) into graphics.
/// Implementations must be idempotent.
pub trait IconRenderer: Send + Sync {
    fn create_icons(&self, document: &dyn Document);
}

/// Replaces Lucide placeholders with inline SVG. Unknown icon names are
/// left as they are.
pub struct InlineIcons {
    placeholder: Regex,
}

impl Default for InlineIcons {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineIcons {
    pub fn new() -> Self {
        let placeholder = Regex::new(r#"<i data-lucide="([a-z0-9-]+)"(?: class="([^"]*)")?\s*></i>"#)
            .expect("icon placeholder pattern is valid");
        Self { placeholder }
    }

    /// Renders every known placeholder in `html`
    pub fn render(&self, html: &str) -> String {
        self.placeholder
            .replace_all(html, |caps: &Captures| {
                let name = &caps[1];
                match icon_body(name) {
                    Some(body) => svg(name, caps.get(2).map(|c| c.as_str()), body),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl IconRenderer for InlineIcons {
    fn create_icons(&self, document: &dyn Document) {
        for element in document.elements() {
            let html = element.inner_html();
            if !self.placeholder.is_match(&html) {
                continue;
            }

            let rendered = self.render(&html);
            if rendered != html {
                trace!("rendered icons in #{}", element.id());
                element.set_inner_html(rendered);
            }
        }
    }
}

fn svg(name: &str, class: Option<&str>, body: &str) -> String {
    let class = match class {
        Some(extra) if !extra.is_empty() => format!("lucide lucide-{} {}", name, extra),
        _ => format!("lucide lucide-{}", name),
    };
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{}" data-lucide-icon="{}">{}</svg>"#,
        class, name, body
    )
}

fn icon_body(name: &str) -> Option<&'static str> {
    let body = match name {
        "calendar" => r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#,
        "clock" => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
        "map-pin" => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
        "users" => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
        "wallet" => r#"<path d="M21 12V7H5a2 2 0 0 1 0-4h14v4"/><path d="M3 5v14a2 2 0 0 0 2 2h16v-5"/><path d="M18 12a2 2 0 0 0 0 4h4v-4Z"/>"#,
        "external-link" => r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
        "arrow-up" => r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#,
        "menu" => r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
        "x" => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        "alert-circle" => r#"<circle cx="12" cy="12" r="10"/><line x1="12" x2="12" y1="8" y2="12"/><line x1="12" x2="12.01" y1="16" y2="16"/>"#,
        _ => return None,
    };
    Some(body)
}
