use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaUser};
use dioxus_free_icons::Icon;

use crate::auth::{logout, use_auth, use_client, use_site};

const PAGES: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/gallery", "Gallery"),
    ("/agriculture", "Agriculture"),
    ("/events", "Events"),
    ("/about", "About"),
];

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let client = use_client();
    let site = use_site();
    let nav = use_navigator();
    let mut mobile_open = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let state = auth();
    let user_name = state.user().map(|u| u.name.clone()).unwrap_or_default();
    let logged_in = state.is_logged_in();
    let is_admin = state.is_admin();

    let handle_logout = move |_: MouseEvent| {
        logout(&client, auth, nav);
        menu_open.set(false);
        mobile_open.set(false);
    };

    rsx! {
        nav {
            class: "bg-gradient-to-r from-green-700 to-green-600 text-white shadow-lg",
            div {
                class: "container mx-auto px-4",
                div {
                    class: "flex justify-between items-center h-16",
                    Link {
                        to: "/",
                        class: "text-2xl font-bold hover:text-green-100 transition",
                        "🌾 {site.site.name}"
                    }

                    div {
                        class: "hidden md:flex items-center gap-6",
                        for (to, label) in PAGES {
                            Link { key: "{to}", to, class: "hover:text-green-100 transition", "{label}" }
                        }

                        if logged_in {
                            if is_admin {
                                Link {
                                    to: "/admin",
                                    class: "bg-orange-500 hover:bg-orange-600 px-3 py-1 rounded transition",
                                    "Admin Dashboard"
                                }
                            }
                            div {
                                class: "relative",
                                button {
                                    class: "hover:text-green-100 transition flex items-center gap-2",
                                    onclick: move |_| menu_open.toggle(),
                                    Icon { icon: FaUser, width: 14, height: 14, fill: "currentColor" }
                                    "{user_name}"
                                }
                                if menu_open() {
                                    div {
                                        class: "absolute right-0 mt-2 w-48 bg-white text-gray-800 rounded-lg shadow-lg z-10",
                                        Link {
                                            to: "/profile",
                                            class: "block px-4 py-2 hover:bg-gray-100",
                                            onclick: move |_| menu_open.set(false),
                                            "Profile"
                                        }
                                        button {
                                            class: "w-full text-left px-4 py-2 hover:bg-gray-100",
                                            onclick: handle_logout.clone(),
                                            "Logout"
                                        }
                                    }
                                }
                            }
                        } else {
                            Link { to: "/login", class: "hover:text-green-100 transition", "Login" }
                            Link {
                                to: "/signup",
                                class: "bg-orange-500 hover:bg-orange-600 px-4 py-2 rounded transition",
                                "Sign Up"
                            }
                        }
                    }

                    button {
                        class: "md:hidden",
                        aria_label: "Toggle menu",
                        onclick: move |_| mobile_open.toggle(),
                        Icon { icon: FaBars, width: 20, height: 20, fill: "currentColor" }
                    }
                }

                if mobile_open() {
                    div {
                        class: "md:hidden bg-green-600 pb-4 space-y-2",
                        onclick: move |_| mobile_open.set(false),
                        for (to, label) in PAGES {
                            Link { key: "{to}", to, class: "block px-4 py-2 hover:bg-green-500 rounded", "{label}" }
                        }
                        if logged_in {
                            if is_admin {
                                Link {
                                    to: "/admin",
                                    class: "block px-4 py-2 bg-orange-500 hover:bg-orange-600 rounded",
                                    "Admin Dashboard"
                                }
                            }
                            Link { to: "/profile", class: "block px-4 py-2 hover:bg-green-500 rounded", "Profile" }
                            button {
                                class: "w-full text-left px-4 py-2 hover:bg-green-500 rounded",
                                onclick: handle_logout,
                                "Logout"
                            }
                        } else {
                            Link { to: "/login", class: "block px-4 py-2 hover:bg-green-500 rounded", "Login" }
                            Link {
                                to: "/signup",
                                class: "block px-4 py-2 bg-orange-500 hover:bg-orange-600 rounded",
                                "Sign Up"
                            }
                        }
                    }
                }
            }
        }
    }
}
