use maud::{html, Markup};

use crate::{
    dom::RevealPlan,
    templates::{
        components::twitter_timeline,
        fragments::events_loading,
        layouts::{base, PageConfig},
    },
};

const FEATURES: &[(&str, &str, &str)] = &[
    ("users", "初心者歓迎", "ルール説明からスタッフがサポートします。"),
    ("calendar", "毎月開催", "週末を中心に定期的に集まっています。"),
    ("wallet", "気軽な参加費", "ワンドリンク程度の参加費で遊べます。"),
];

const GAMES: &[(&str, &str)] = &[
    ("カタン", "資源を集めて開拓する定番の陣取りゲーム。"),
    ("ドミニオン", "デッキを組み上げていくカードゲーム。"),
    ("コードネーム", "チームで言葉をつなぐ連想ゲーム。"),
];

/// `(target, label)` for the statistic counters
const STATS: &[(u32, &str)] = &[(50, "開催回数"), (300, "参加者"), (120, "ゲーム数")];

const FAQ: &[(&str, &str)] = &[
    ("一人でも参加できますか？", "はい、半数以上の方がお一人で参加されています。"),
    ("ボードゲームを知らなくても大丈夫？", "スタッフがルールを説明するので安心してください。"),
    ("申し込み方法は？", "各イベントの「詳細を見る」から申し込めます。"),
];

/// Blobs drifting behind the hero; each one moves at its own parallax speed
const HERO_BLOBS: &[&str] = &["bg-blue-300", "bg-pink-300", "bg-yellow-300"];

pub fn home_page(container_id: &str, reveal: RevealPlan, twitter_handle: &str) -> Markup {
    let config = PageConfig {
        title: "Booo! GAMES - ボードゲーム会",
        container_id,
        reveal,
    };

    base(&config, home_content(container_id, twitter_handle))
}

fn home_content(container_id: &str, twitter_handle: &str) -> Markup {
    html! {
        (hero())

        section id="about" class="py-20 px-4" {
            div class="max-w-6xl mx-auto" {
                (section_header("Booo! GAMESとは", "誰でも気軽に遊べるボードゲーム会です。"))
                div class="grid md:grid-cols-3 gap-6" {
                    @for (icon, title, text) in FEATURES {
                        div class="feature-card bg-white rounded-3xl p-6 shadow" {
                            i data-lucide=(icon) class="w-8 h-8 text-blue-500 mb-4" {}
                            h4 class="font-bold text-lg mb-2" { (title) }
                            p class="text-gray-600 text-sm" { (text) }
                        }
                    }
                }
                div id="stats" class="grid grid-cols-3 gap-6 mt-12 text-center" {
                    @for (target, label) in STATS {
                        div {
                            p class="counter text-4xl font-black text-blue-500" data-target=(target) { "0" }
                            p class="text-gray-600 text-sm" { (label) }
                        }
                    }
                }
            }
        }

        section id="schedule" class="py-20 px-4 bg-white" {
            div class="max-w-6xl mx-auto" {
                (section_header("スケジュール", "今後のイベント予定です。"))
                div id=(container_id) class="grid md:grid-cols-2 lg:grid-cols-3 gap-6"
                    hx-get="/fragments/events" hx-trigger="load" hx-swap="innerHTML" {
                    (events_loading())
                }
            }
        }

        section id="games" class="py-20 px-4" {
            div class="max-w-6xl mx-auto" {
                (section_header("ゲーム紹介", "よく遊んでいるゲームの一部です。"))
                div class="grid md:grid-cols-3 gap-6" {
                    @for (name, text) in GAMES {
                        div class="game-card bg-white rounded-3xl p-6 shadow" {
                            h4 class="font-bold text-lg mb-2" { (name) }
                            p class="text-gray-600 text-sm" { (text) }
                        }
                    }
                }
                div class="mt-12" {
                    (twitter_timeline(twitter_handle))
                }
            }
        }

        section id="faq" class="py-20 px-4 bg-white" {
            div class="max-w-3xl mx-auto" {
                (section_header("よくある質問", ""))
                @for (question, answer) in FAQ {
                    div class="faq-item border-b py-4" {
                        h4 class="font-bold mb-2" { "Q. " (question) }
                        p class="text-gray-600 text-sm" { "A. " (answer) }
                    }
                }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        div id="hero" class="relative bg-white overflow-hidden py-32 px-4 text-center" {
            @for color in HERO_BLOBS {
                div class=(format!("animate-blob absolute w-72 h-72 rounded-full opacity-50 blur-2xl {}", color)) {}
            }
            div class="relative" {
                h1 class="text-5xl font-black text-gray-900 mb-4" { "Booo! GAMES" }
                p class="text-lg text-gray-600 mb-8" { "みんなで遊ぶボードゲーム会" }
                a href="#schedule" class="inline-block bg-blue-500 text-white px-8 py-3 rounded-full font-bold" {
                    "次回のイベントを見る"
                }
            }
        }
    }
}

fn section_header(title: &str, lead: &str) -> Markup {
    html! {
        div class="section-fade-in text-center mb-12" {
            h2 class="text-3xl font-black text-gray-900 mb-2" { (title) }
            @if !lead.is_empty() {
                p class="text-gray-600" { (lead) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_container_requests_the_fragment_on_load() {
        let html = home_page("upcoming-events", RevealPlan::default(), "booo_games").into_string();

        assert!(html.contains(r#"id="upcoming-events""#));
        assert!(html.contains(r#"hx-get="/fragments/events""#));
        assert!(html.contains("スケジュールを読み込み中..."));
        for id in ["about", "schedule", "games", "faq"] {
            assert!(html.contains(&format!("section id=\"{}\"", id)));
        }
    }
}
