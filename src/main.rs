mod app;
mod components;
mod logging;

use app::App;

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
