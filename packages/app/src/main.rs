use wokky::{App, Config};

#[cfg(target_arch = "wasm32")]
fn main() {
    use std::rc::Rc;

    let config = Config::from_env();
    dioxus::logger::init(config.log_level).expect("failed to initialize logger");

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().history(Rc::new(dioxus::web::HashHistory::new(false))))
        .launch(App)
}

/// Outside the browser there is nothing to locate, so print the page the
/// browser starts from.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dioxus::prelude::*;

    let config = Config::from_env();
    dioxus::logger::init(config.log_level).expect("failed to initialize logger");

    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();

    println!("{}", dioxus_ssr::render(&dom));
}
