use super::{background::Background, reaction_view::ReactionView, theme_toggle::ThemeToggle};
use crate::storage::LocalStore;
use crate::theme::Theme;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(|| Theme::load(&LocalStore::new()));

    // Keep <body> in sync with the preference
    {
        use_effect_with(*theme, move |t| {
            t.apply();
            || ()
        });
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            if let Err(e) = next.save(&mut LocalStore::new()) {
                log::warn!("theme not saved: {}", e);
            }
            theme.set(next);
        })
    };

    html! {
        <div id="root">
            <Background />
            <header id="top-bar" style="display:flex; justify-content:space-between; align-items:center; padding:12px 16px;">
                <h1 style="margin:0; font-size:22px;">{"Reaction Rush"}</h1>
                <ThemeToggle theme={*theme} on_toggle={toggle_theme} />
            </header>
            <main style="padding:0 16px 24px 16px;">
                <ReactionView />
            </main>
        </div>
    }
}
