// src/card.rs
use yew::prelude::*;

use crate::team::TeamDisplay;

#[derive(Properties, Clone, PartialEq)]
pub struct TeamCardProps {
    pub team: TeamDisplay,
}

/// Skewed three-section banner with the logo in the middle, details underneath.
/// Colors reach styles.css only through the wrapper's custom properties.
#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let team = props.team;

    html! {
        <div class="skew-wrapper" style={team.accent_style()}>
          <div class="skew-content">
            <div class="section left"></div>
            <div class="section middle">
              <div class="logo-anchor">
                <img src={team.logo_url} class="logo" />
              </div>
            </div>
            <div class="section right"></div>
          </div>

          <div class="details-container">
            { for team.detail_lines().into_iter().map(|(class, text)| html! {
                <div class={class}>{ text }</div>
            }) }
          </div>
        </div>
    }
}
