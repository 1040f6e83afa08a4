use maud::{html, Markup};

use crate::{dom::RevealPlan, schedule::EventRecord};

/// One event card. Starts hidden; the reveal fades it in after
/// `plan.css_delay(index)`.
pub fn event_card(event: &EventRecord, index: usize, plan: &RevealPlan) -> Markup {
    html! {
        div class="event-card bg-white rounded-3xl p-6 shadow-lg border-2 border-blue-100 hover:shadow-2xl transition-all duration-300 opacity-0 transform translate-y-4"
            data-event-index=(index)
            style=(format!("animation-delay: {}", plan.css_delay(index))) {
            div class="flex items-start justify-between mb-4" {
                h4 class="event-title text-xl font-bold text-gray-900" { (event.title) }
                span class=(format!("event-status {} px-3 py-1 rounded-full text-xs font-bold", event.badge().class())) {
                    (event.status)
                }
            }

            ul class="event-details space-y-3 mb-4" {
                (detail("date", "calendar", None, &event.date))
                (detail("time", "clock", None, &event.time))
                (detail("venue", "map-pin", None, &event.venue))
                (detail("capacity", "users", Some("定員"), &event.capacity.to_string()))
                (detail("fee", "wallet", Some("参加費"), &event.fee))
            }

            @if let Some(description) = event.description() {
                p class="event-description text-sm text-gray-600 mb-4 leading-relaxed" { (description) }
            }

            (action(event))
        }
    }
}

fn detail(field: &str, icon: &str, label: Option<&str>, value: &str) -> Markup {
    html! {
        li class="flex items-center text-gray-600" data-field=(field) {
            i data-lucide=(icon) class="w-4 h-4 mr-2 text-blue-500" {}
            span class="text-sm" {
                @if let Some(label) = label {
                    (label) ": "
                }
                (value)
            }
        }
    }
}

fn action(event: &EventRecord) -> Markup {
    html! {
        @match event.twipla_url() {
            Some(url) => {
                a class="event-action block w-full text-center bg-blue-500 hover:bg-blue-600 text-white py-3 rounded-xl font-bold transition-all transform hover:-translate-y-0.5"
                  href=(url) target="_blank" rel="noopener noreferrer" {
                    "詳細を見る"
                }
            }
            None => {
                div class="event-action block w-full text-center bg-gray-300 text-gray-600 py-3 rounded-xl font-bold cursor-not-allowed"
                    aria-disabled="true" {
                    "近日公開予定"
                }
            }
        }
    }
}
