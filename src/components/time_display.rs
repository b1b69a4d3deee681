use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub time_text: String,
    pub progress_percent: f64,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let fill_style = format!(
        "width:{:.2}%; height:100%; background:#58a6ff; border-radius:4px; transition:width 0.25s linear;",
        props.progress_percent
    );
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:6px;">
        <div id="reaction-time" style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ props.time_text.clone() }</div>
        <div class="slider" style="width:100%; height:8px; background:#30363d; border-radius:4px; overflow:hidden;">
            <div id="slider-fill" style={fill_style}></div>
        </div>
    </div>}
}
