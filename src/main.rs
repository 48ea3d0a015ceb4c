// src/main.rs
use gloo::console::log;
use yew::prelude::*;

mod card;
mod team;

use card::TeamCard;
use team::ARIZONA_CARDINALS;

#[function_component(App)]
fn app() -> Html {
    html! {
        <TeamCard team={ARIZONA_CARDINALS} />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log!(format!("team-card: mounting {} ({})", ARIZONA_CARDINALS.name, ARIZONA_CARDINALS.id));
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_renders_the_cardinals_card() {
        let html = yew::ServerRenderer::<App>::new()
            .hydratable(false)
            .render()
            .await;

        let name = html.find(">Arizona Cardinals<").expect("name");
        let division = html.find(">NFC West<").expect("division");
        let id = html.find(">GNAWS23RDT5UYR<").expect("id");
        assert!(name < division && division < id);

        assert!(html.contains("/logos/ARI\""));
        let wrapper = html.find(r#"class="skew-wrapper""#).expect("wrapper");
        assert!(wrapper < html.find(r#"class="skew-content""#).expect("banner"));
    }
}
