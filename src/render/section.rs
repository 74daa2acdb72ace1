use maud::{Markup, html};

/// Generic composition primitive used by every page: heading, optional
/// subtitle directly beneath it, then the body verbatim. A subtitle is
/// never rendered without its title.
pub fn section(title: &str, subtitle: Option<&str>, body: Markup) -> Markup {
    html! {
        section class="section" {
            h1 { (title) }
            @if let Some(subtitle) = subtitle {
                p class="subtitle" { (subtitle) }
            }
            (body)
        }
    }
}
