mod fixtures;
mod gallery;
mod playground;

use dioxus::prelude::*;
use gallery::Gallery;
use playground::Playground;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Gallery {},
    #[route("/playground")]
    Playground {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            style: "min-height: 100vh; background: #ffffff;",
            Router::<Route> {}
        }
    }
}

fn main() {
    // Defines <product-card> before the first render so the tags upgrade
    // as soon as they are inserted
    match product_card::define() {
        Ok(true) => log::info!("showcase registered <{}>", product_card::TAG_NAME),
        Ok(false) => log::info!("<{}> was already registered", product_card::TAG_NAME),
        Err(err) => log::error!("could not register <{}>: {err:?}", product_card::TAG_NAME),
    }
    dioxus::launch(App);
}
