use yew_reaction_rush::components::App;
use yew_reaction_rush::util::init_logging;

fn main() {
    init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
