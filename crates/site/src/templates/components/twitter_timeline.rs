use maud::{html, Markup};

/// Embedded timeline; the widget script replaces the anchor once it loads
pub fn twitter_timeline(handle: &str) -> Markup {
    let handle = handle.trim_start_matches('@');
    html! {
        div class="twitter-container bg-white rounded-3xl p-6 shadow-lg" {
            p id="twitter-loading" class="text-center text-gray-400 py-8" { "Twitterを読み込み中..." }
            a class="twitter-timeline" data-lang="ja" data-height="600"
              href=(format!("https://twitter.com/{}", handle)) {
                "Tweets by @" (handle)
            }
        }
    }
}
