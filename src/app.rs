use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::EffectsConfig;
use crate::core::effects_config::CONFIG_ELEMENT_ID;
use crate::ui::{LandingPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server; falls back to defaults when rendering without it
    let effects = use_context::<EffectsConfig>().unwrap_or_default();
    let effects_json = match effects.to_json() {
        // Keep a literal `</script>` out of the inline JSON
        Ok(json) => json.replace('<', "\\u003c"),
        Err(e) => {
            leptos::logging::warn!("effects config not serialized: {}", e);
            "{}".to_string()
        }
    };

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="https://cdn.tailwindcss.com"></script>
                <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=effects_json></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title text="Magic UI"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
