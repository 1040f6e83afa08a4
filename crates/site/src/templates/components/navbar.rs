use maud::{html, Markup};

/// In-page sections linked from the navigation, as `(id, label)`
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "Booo! GAMESとは"),
    ("schedule", "スケジュール"),
    ("games", "ゲーム紹介"),
    ("faq", "よくある質問"),
];

/// Fixed top navigation with the collapsible mobile menu
pub fn navbar() -> Markup {
    html! {
        nav class="fixed top-0 inset-x-0 z-50 bg-white/90 backdrop-blur shadow-sm" role="navigation" aria-label="main navigation" {
            div class="max-w-6xl mx-auto px-4 flex items-center justify-between h-16" {
                a href="#" id="logo" class="text-2xl font-black text-gray-900" { "Booo! GAMES" }

                div class="hidden md:flex space-x-6" {
                    @for (id, label) in NAV_SECTIONS {
                        a href=(format!("#{}", id)) class="nav-link text-gray-600 hover:text-blue-500 font-bold" { (label) }
                    }
                }

                button id="mobile-menu-btn" class="md:hidden p-2" aria-label="menu" {
                    i id="menu-icon" data-lucide="menu" class="w-6 h-6" {}
                    i id="close-icon" data-lucide="x" class="w-6 h-6 hidden" {}
                }
            }

            div id="mobile-menu" class="hidden md:hidden bg-white border-t" {
                @for (id, label) in NAV_SECTIONS {
                    a href=(format!("#{}", id)) class="mobile-link block px-4 py-3 text-gray-700 font-bold" { (label) }
                }
            }
        }
    }
}
