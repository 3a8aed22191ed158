use dioxus::prelude::*;
use ui::{Footer, Navbar};

use crate::Route;

/// Page chrome shared by every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "flex flex-col min-h-screen",
            Navbar {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
