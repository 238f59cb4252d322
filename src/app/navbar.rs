use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Projects", "/projects"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

// Exact match only: no prefix matching and no trailing-slash normalization,
// so "/projects/" does not light up the "/projects" link.
fn is_active(current: &str, target: &str) -> bool {
    current == target
}

fn link_class(current: &str, target: &str) -> &'static str {
    if is_active(current, target) {
        "transition-colors font-medium text-primary"
    } else {
        "transition-colors font-medium text-foreground hover:text-primary"
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 bg-background/80 backdrop-blur-md border-b border-base">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center">
                        <span class="text-xl font-bold text-primary-gradient">"TJ Shapiro"</span>
                    </A>
                    <div class="hidden md:flex items-center space-x-8">
                        {move || {
                            let current = use_location().pathname.get();
                            NAV_LINKS
                                .iter()
                                .map(|(label, target)| {
                                    view! {
                                        <A href=*target attr:class=link_class(&current, target)>
                                            {*label}
                                        </A>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <button class="md:hidden text-foreground hover:text-primary" aria-label="Menu">
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M4 6h16M4 12h16M4 18h16"
                            />
                        </svg>
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_requires_byte_for_byte_equality() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/projects/", "/projects"));
        assert!(!is_active("/projects", "/projects/"));
        assert!(!is_active("/Projects", "/projects"));
        assert!(!is_active("/projects/guitar", "/projects"));
        assert!(!is_active("", "/"));
    }

    #[test]
    fn test_active_and_inactive_treatments_differ() {
        let active = link_class("/about", "/about");
        let inactive = link_class("/", "/about");
        assert_ne!(active, inactive);
        assert!(!active.contains("hover:"));
        assert!(inactive.contains("hover:"));
    }

    #[test]
    fn test_exactly_one_destination_active_per_route() {
        for (_, route) in NAV_LINKS {
            let active = NAV_LINKS
                .iter()
                .filter(|(_, target)| is_active(route, target))
                .count();
            assert_eq!(active, 1, "route {route} should light up exactly one link");
        }
    }

    #[test]
    fn test_no_destination_active_on_project_pages() {
        let active = NAV_LINKS
            .iter()
            .filter(|(_, target)| is_active("/projects/guitar", target))
            .count();
        assert_eq!(active, 0);
    }

    #[test]
    fn test_nav_destinations_are_the_four_fixed_routes() {
        let targets = NAV_LINKS.map(|(_, target)| target);
        assert_eq!(targets, ["/", "/projects", "/about", "/contact"]);
    }
}
