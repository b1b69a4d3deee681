use crate::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <button id="theme-toggle" onclick={toggle_cb} style="padding:4px 10px; font-size:16px;">{ props.theme.icon() }</button>
    }
}
