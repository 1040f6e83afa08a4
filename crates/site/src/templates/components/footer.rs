use maud::{html, Markup};

pub fn footer(year: i32) -> Markup {
    html! {
        footer class="bg-gray-900 text-gray-400 py-8 text-center text-sm" {
            "© " span id="year" { (year) } " Booo! GAMES"
        }
    }
}
