use rand::rngs::SmallRng;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::{round_summary::RoundSummaryCard, stats_panel::StatsPanel, time_display::TimeDisplay};
use crate::config::RoundConfig;
use crate::model::{Bounds, GameState, Target};
use crate::scheduler::{Task, WindowScheduler};
use crate::session::GameSession;
use crate::storage::LocalStore;
use crate::surface::Hud;
use crate::util::browser_rng;

pub type BrowserSession = GameSession<WindowScheduler, Hud, LocalStore, SmallRng>;

fn measure(area_ref: &NodeRef) -> Bounds {
    area_ref
        .cast::<Element>()
        .map(|el| {
            let r = el.get_bounding_client_rect();
            Bounds { width: r.width(), height: r.height() }
        })
        .unwrap_or_default()
}

#[function_component(ReactionView)]
pub fn reaction_view() -> Html {
    let area_ref = use_node_ref();
    let session = use_mut_ref(|| None::<BrowserSession>);
    let redraw = use_force_update();

    // Build the session once the play area is mounted; timers die with it.
    {
        let session = session.clone();
        let area_ref = area_ref.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            if let Some(window) = web_sys::window() {
                let sink: Rc<dyn Fn(Task)> = {
                    let weak = Rc::downgrade(&session);
                    let area_ref = area_ref.clone();
                    let redraw = redraw.clone();
                    Rc::new(move |task: Task| {
                        let Some(cell) = weak.upgrade() else { return };
                        if let Some(s) = cell.borrow_mut().as_mut() {
                            s.surface_mut().area = measure(&area_ref);
                            s.handle(task);
                        }
                        redraw.force_update();
                    })
                };
                let scheduler = WindowScheduler::new(window, sink);
                let config = RoundConfig::default();
                let game = GameSession::new(config, scheduler, Hud::for_round(&config), LocalStore::new(), browser_rng());
                *session.borrow_mut() = Some(game);
                redraw.force_update();
            } else {
                log::error!("no global `window`, reaction test disabled");
            }
            move || {
                session.borrow_mut().take();
            }
        });
    }

    let on_start = {
        let session = session.clone();
        let area_ref = area_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(s) = session.borrow_mut().as_mut() {
                s.surface_mut().area = measure(&area_ref);
                s.start();
            }
            redraw.force_update();
        })
    };

    let (hud, record) = session
        .borrow()
        .as_ref()
        .map(|s| (s.surface().clone(), s.state()))
        .unwrap_or_else(|| (Hud::for_round(&RoundConfig::default()), GameState::default()));

    let target_html = |t: &Target| {
        let id = t.id;
        let onclick = {
            let session = session.clone();
            let redraw = redraw.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                if let Some(s) = session.borrow_mut().as_mut() {
                    s.click_target(id);
                }
                redraw.force_update();
            })
        };
        let style = format!(
            "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; font-size:{}px; line-height:{}px; text-align:center; cursor:pointer; user-select:none;",
            t.x, t.y, t.size_px, t.size_px, t.size_px * 3 / 4, t.size_px
        );
        html! { <div key={id.0.to_string()} class="target" {style} {onclick}>{"🚀"}</div> }
    };

    let area_content = match hud.summary {
        Some(summary) => html! { <RoundSummaryCard {summary} /> },
        None => hud.targets.iter().map(target_html).collect::<Html>(),
    };

    html! {
        <section class="reaction-test" style="display:flex; flex-direction:column; gap:12px; max-width:720px; margin:0 auto;">
            <StatsPanel score={hud.score} best={record.best_reaction_score} games={record.total_games_played} />
            <TimeDisplay time_text={hud.time_text.clone()} progress_percent={hud.progress_percent} />
            <div id="reaction-area" class="reaction-area" ref={area_ref.clone()}
                style="position:relative; height:360px; overflow:hidden; border:1px solid #30363d; border-radius:12px; background:rgba(22,27,34,0.6);">
                { area_content }
            </div>
            <button id="reaction-start" onclick={on_start} disabled={!hud.start_enabled}>{ hud.start_label.clone() }</button>
        </section>
    }
}
