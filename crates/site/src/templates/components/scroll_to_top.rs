use maud::{html, Markup};

pub fn scroll_to_top() -> Markup {
    html! {
        button id="scroll-to-top" aria-label="ページトップへ"
            class="fixed bottom-6 right-6 z-40 bg-blue-500 text-white p-3 rounded-full shadow-lg opacity-0 pointer-events-none transition-opacity" {
            i data-lucide="arrow-up" class="w-5 h-5" {}
        }
    }
}
