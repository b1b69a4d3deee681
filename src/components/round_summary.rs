use crate::model::RoundSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoundSummaryProps {
    pub summary: RoundSummary,
}

#[function_component]
pub fn RoundSummaryCard(props: &RoundSummaryProps) -> Html {
    let s = props.summary;
    html! {
        <div style="text-align:center; padding:20px;">
            <h3 style="margin:0 0 16px 0; color:#3fb950;">{"Mission Complete!"}</h3>
            <p style="font-size:1.2rem; margin:0 0 8px 0;">{ format!("Spaceships Destroyed: {}", s.score) }</p>
            <p style="font-size:1.1rem; margin:0 0 16px 0; color:#d4af37;">{ s.tier.label() }</p>
            <p style="font-size:0.9rem; margin:0; opacity:0.75;">{ format!("Best Score: {}", s.best_score) }</p>
        </div>
    }
}
