mod about;
mod contact;
mod document_embed;
mod homepage;
mod icons;
mod navbar;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use homepage::HomePage;
use navbar::NavBar;
use projects::{ProjectPage, ProjectsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-background text-foreground">
                <App />
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
        <Title formatter=|title| format!("TJ Shapiro - {title}") />

        <Router>
            <NavBar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:slug") view=ProjectPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Fallback page. Also rendered by the project detail route when a slug
/// doesn't resolve, so the status code logic lives in one place.
#[component]
pub fn NotFound() -> impl IntoView {
    // Only the initial server response can carry the status code; client-side
    // navigation to an unknown route has no response to set it on.
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
            <h1 class="text-4xl font-bold mb-2">"404"</h1>
            <p class="text-xl text-muted mb-8">"Page not found"</p>
            <A href="/" attr:class="text-primary hover:underline">
                "Back to home"
            </A>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-surface py-8 border-t border-base">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row justify-between gap-8">
                <p class="text-muted">{format!("© {} TJ Shapiro", env!("BUILD_YEAR"))}</p>
                <nav class="flex gap-6 underline-offset-4">
                    <a
                        href="https://github.com/TJ-Shapiro"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-primary"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/in/tj-shapiro"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-primary"
                    >
                        "LinkedIn"
                    </a>
                    <a href="mailto:tj.shapiro193@gmail.com" class="hover:text-primary">
                        "Email"
                    </a>
                </nav>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links_to_the_fixed_profiles() {
        let html = view! { <Footer /> }.to_html();
        assert!(html.contains("https://github.com/TJ-Shapiro"));
        assert!(html.contains("https://linkedin.com/in/tj-shapiro"));
        assert!(html.contains("mailto:tj.shapiro193@gmail.com"));
    }

    #[test]
    fn test_footer_copyright_year_comes_from_the_build() {
        let html = view! { <Footer /> }.to_html();
        assert!(html.contains(env!("BUILD_YEAR")));
    }
}
