use crate::background::generate_bubbles;
use crate::config::BUBBLE_COUNT;
use crate::util::browser_rng;
use yew::prelude::*;

#[function_component(Background)]
pub fn background() -> Html {
    // generated once per mount
    let bubbles = use_state(|| generate_bubbles(&mut browser_rng(), BUBBLE_COUNT));
    html! {
        <div class="background-bubbles" aria-hidden="true">
            { for bubbles.iter().map(|b| html! { <div class="background-bubble" style={b.style()}></div> }) }
        </div>
    }
}
