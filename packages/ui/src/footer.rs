use dioxus::prelude::*;
use store::models::current_year;

use crate::auth::use_site;

#[component]
pub fn Footer() -> Element {
    let site = use_site().site;
    let year = current_year();

    rsx! {
        footer {
            class: "bg-gray-800 text-white mt-16",
            div {
                class: "container mx-auto px-4 py-12",
                div {
                    class: "grid grid-responsive mb-8",
                    div {
                        h3 { class: "text-xl font-bold mb-4", "🌾 {site.name}" }
                        p {
                            class: "text-gray-400",
                            "A vibrant agricultural village in {site.mandal} Mandal, {site.district} District, {site.state}. "
                            "Celebrating our heritage, culture, and agricultural excellence."
                        }
                    }
                    div {
                        h3 { class: "text-xl font-bold mb-4", "Quick Links" }
                        ul {
                            class: "space-y-2 text-gray-400",
                            li { Link { to: "/", class: "hover:text-white transition", "Home" } }
                            li { Link { to: "/gallery", class: "hover:text-white transition", "Gallery" } }
                            li { Link { to: "/agriculture", class: "hover:text-white transition", "Agriculture" } }
                            li { Link { to: "/events", class: "hover:text-white transition", "Events" } }
                        }
                    }
                    div {
                        h3 { class: "text-xl font-bold mb-4", "Contact" }
                        ul {
                            class: "space-y-2 text-gray-400",
                            li { "📧 Email: {site.contact_email}" }
                            li { "📍 Location: {site.name}" }
                            li { "📱 {site.mandal} Mandal" }
                            li { "🏛️ {site.district} District, {site.state}" }
                        }
                    }
                }

                hr { class: "border-gray-700 my-8" }

                div {
                    class: "text-center text-gray-400",
                    p { "© {year} {site.name} Village. All rights reserved." }
                    p { class: "mt-2 text-sm", "Built with ❤️ for our community" }
                }
            }
        }
    }
}
