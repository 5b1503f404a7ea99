mod components;
mod geom;
mod model;
mod raycast;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
