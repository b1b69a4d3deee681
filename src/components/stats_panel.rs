use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u32,
    pub best: u32,
    pub games: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:50px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🎯"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Score"}</span>
                <span id="reaction-score-value" style={format!("{} color:#58a6ff;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🏆"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Best"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.best }</span>
            </div>
            <div style={row_style}>
                <span style={icon_style}>{"🎮"}</span>
                <span style={label_style}>{"Games Played"}</span>
                <span style={value_style}>{ props.games }</span>
            </div>
        </div>
    }
}
