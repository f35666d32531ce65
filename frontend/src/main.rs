use crate::app::App;

mod api;
mod app;
mod components;
mod context;
mod helpers;
mod tops_sheet;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
