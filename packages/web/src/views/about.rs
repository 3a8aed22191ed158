use dioxus::prelude::*;
use store::VillageInfo;
use ui::{use_client, use_site, ErrorAlert, Spinner};

const CROPS: [(&str, &str); 4] = [
    ("Rice", "Our primary crop, benefiting from favorable monsoon patterns"),
    ("Sugarcane", "An important cash crop supporting local industries"),
    ("Vegetables", "Fresh produce for local and regional markets"),
    ("Pulses & Grains", "Essential food crops for nutrition"),
];

const FESTIVALS: [(&str, &str); 4] = [
    ("🪔 Diwali", "Festival of lights celebrated with great enthusiasm"),
    ("🌾 Pongal", "Harvest festival bringing thanksgiving and joy"),
    ("🎊 Holi", "Festival of colors celebrating unity and harmony"),
    ("🏛️ Local Festivities", "Temple festivals and community celebrations"),
];

const VALUES: [(&str, &str); 5] = [
    ("Shared Values", "Honesty, hard work, and respect"),
    ("Mutual Support", "Helping each other in times of need"),
    ("Cultural Pride", "Celebrating our traditions and heritage"),
    ("Environmental Care", "Protecting our natural resources"),
    ("Community Development", "Working together for progress"),
];

/// `5200` -> `5,200`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn About() -> Element {
    let client = use_client();
    let site = use_site().site;

    let info = use_resource(move || {
        let client = client.clone();
        async move { client.village_info().await }
    });

    let Some(result) = info.cloned() else {
        return rsx! { Spinner {} };
    };
    let (info, error) = match result {
        Ok(info) => (info.unwrap_or_default(), None),
        Err(e) => {
            tracing::warn!("failed to load village info: {e}");
            (VillageInfo::default(), Some(e.user_message("Failed to load village information")))
        }
    };

    let description = info.description.clone().unwrap_or_else(|| {
        format!(
            "{} is a thriving agricultural community in the heart of {}. Our village is known for \
             its fertile lands, rich cultural heritage, and hardworking farmers who sustain the \
             agricultural backbone of our region.",
            site.name, site.state
        )
    });
    let mandal = info.mandal.clone().unwrap_or_else(|| site.mandal.clone());
    let district = info.district.clone().unwrap_or_else(|| site.district.clone());
    let state = info.state.clone().unwrap_or_else(|| site.state.clone());

    rsx! {
        div {
            class: "bg-gray-50",
            div {
                class: "bg-gradient-to-r from-green-700 to-green-600 text-white py-16",
                div {
                    class: "container mx-auto px-4 text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold mb-4", "🌾 About {site.name}" }
                    p { class: "text-lg md:text-xl text-green-100", "Discover the heart and soul of our beautiful village" }
                }
            }

            div {
                class: "container mx-auto px-4 py-12",
                div {
                    class: "max-w-4xl",
                    ErrorAlert { message: error }

                    div {
                        class: "card p-8 mb-8 shadow-lg",
                        h2 { class: "text-3xl font-bold text-green-700 mb-4", "Welcome to Our Village" }
                        p { class: "text-gray-700 text-lg leading-relaxed mb-6", "{description}" }
                        div {
                            class: "grid grid-cols-2 md:grid-cols-3 gap-6 mt-8",
                            Fact { heading: "📍 Location", value: "{mandal} Mandal" }
                            Fact { heading: "🏛️ District", value: "{district} District" }
                            Fact { heading: "🗺️ State", value: "{state}" }
                            if let Some(population) = info.population {
                                Fact { heading: "👥 Population", value: group_thousands(population) }
                            }
                        }
                    }

                    div {
                        class: "card p-8 mb-8",
                        h2 { class: "text-2xl font-bold text-green-700 mb-4", "📚 Our Heritage" }
                        p {
                            class: "text-gray-700 mb-4",
                            "{site.name} has a long and rich history deeply rooted in agriculture and cultural traditions. "
                            "For generations, our farmers have cultivated the land with dedication and care, passing down "
                            "traditional farming practices to each new generation."
                        }
                        p {
                            class: "text-gray-700",
                            "The village is a testament to the importance of community, hard work, and cultural pride. "
                            "Our festivals and celebrations bring the entire community together, strengthening bonds and "
                            "preserving our unique cultural identity."
                        }
                    }

                    div {
                        class: "card p-8 mb-8",
                        h2 { class: "text-2xl font-bold text-green-700 mb-4", "🌾 Agriculture" }
                        p {
                            class: "text-gray-700 mb-4",
                            "Agriculture is the lifeblood of our village. Our farmers cultivate a variety of crops including:"
                        }
                        ul {
                            class: "list-disc list-inside text-gray-700 space-y-2 mb-4",
                            for (crop, note) in CROPS {
                                li { key: "{crop}", strong { "{crop}" } " - {note}" }
                            }
                        }
                        p {
                            class: "text-gray-700",
                            "We are committed to sustainable farming practices that protect our environment while "
                            "maintaining productivity for future generations."
                        }
                    }

                    div {
                        class: "card p-8 mb-8",
                        h2 { class: "text-2xl font-bold text-green-700 mb-4", "🎉 Culture & Traditions" }
                        p { class: "text-gray-700 mb-4", "Our village celebrates vibrant cultural traditions throughout the year:" }
                        div {
                            class: "grid grid-responsive",
                            for (name, note) in FESTIVALS {
                                div {
                                    key: "{name}",
                                    class: "bg-orange-50 p-4 rounded-lg",
                                    h3 { class: "font-bold text-orange-700 mb-2", "{name}" }
                                    p { class: "text-sm text-gray-700", "{note}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "card p-8 bg-gradient-to-r from-green-50 to-blue-50",
                        h2 { class: "text-2xl font-bold text-green-700 mb-4", "💚 Our Community" }
                        p {
                            class: "text-gray-700 mb-4",
                            "The strength of {site.name} lies in its people. We are a close-knit community bound by:"
                        }
                        ul {
                            class: "list-disc list-inside text-gray-700 space-y-2",
                            for (value, note) in VALUES {
                                li { key: "{value}", strong { "{value}" } " - {note}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "bg-green-700 text-white py-12 mt-12",
                div {
                    class: "container mx-auto px-4 text-center",
                    h2 { class: "text-3xl font-bold mb-4", "Get In Touch" }
                    p { class: "mb-6", "Have questions? We'd love to hear from you!" }
                    if let Some(email) = info.contact_email.as_deref() {
                        p {
                            class: "text-lg",
                            "📧 "
                            a { href: "mailto:{email}", class: "hover:text-green-200 underline", "{email}" }
                        }
                    }
                    if let Some(phone) = info.contact_phone.as_deref() {
                        p {
                            class: "text-lg",
                            "📱 "
                            a { href: "tel:{phone}", class: "hover:text-green-200 underline", "{phone}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Fact(heading: String, value: String) -> Element {
    rsx! {
        div {
            class: "bg-green-50 p-4 rounded-lg",
            h3 { class: "font-bold text-green-700 mb-2", "{heading}" }
            p { class: "text-sm text-gray-700", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(5200), "5,200");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
