use maud::{html, Markup};

use super::event_card::event_card;
use crate::{dom::RevealPlan, schedule::EventRecord};

/// All cards, in document order
pub fn event_list(events: &[EventRecord], plan: &RevealPlan) -> Markup {
    html! {
        @for (index, event) in events.iter().enumerate() {
            (event_card(event, index, plan))
        }
    }
}

/// Shown when the schedule has no events
pub fn events_empty() -> Markup {
    html! {
        div class="events-empty col-span-full text-center py-12" {
            p class="text-gray-500" { "現在、開催予定のイベントはありません。" }
        }
    }
}

/// Shown when the schedule could not be loaded. Never carries error detail.
pub fn events_error() -> Markup {
    html! {
        div class="events-error col-span-full text-center py-12" role="alert" {
            p class="text-red-500 font-bold mb-2" { "スケジュールの読み込みに失敗しました。" }
            p class="text-gray-500 text-sm" { "ページを再読み込みしてください。" }
        }
    }
}

/// Initial container content until the fragment arrives
pub fn events_loading() -> Markup {
    html! {
        div class="events-loading col-span-full text-center py-12" {
            p class="text-gray-400" { "スケジュールを読み込み中..." }
        }
    }
}
