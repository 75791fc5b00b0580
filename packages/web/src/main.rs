use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AdminDashboard, AdminLogin, Auth, Home, Pricing, SiteLayout, Tools};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/tools")]
        Tools {},
        #[route("/pricing")]
        Pricing {},
        #[route("/auth?:mode")]
        Auth { mode: String },
    #[end_layout]
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin")]
    AdminDashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
