use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="min-h-screen bg-background">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="text-center md:text-left">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">
                        "Hey, I'm " <span class="text-primary-gradient">"TJ Shapiro!"</span>
                    </h1>
                    <h2 class="text-xl md:text-2xl text-muted mb-8 max-w-2xl mx-auto md:mx-0">
                        "A passionate developer creating awesome interactive experiences with embedded systems."
                    </h2>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                        <A
                            href="/projects"
                            attr:class="px-8 py-3 bg-primary-gradient text-white rounded-lg font-medium hover:opacity-90 transition-opacity"
                        >
                            "View My Work"
                        </A>
                        <A
                            href="/contact"
                            attr:class="px-8 py-3 border border-base rounded-lg font-medium hover:bg-surface transition-colors"
                        >
                            "Contact Me"
                        </A>
                    </div>
                </div>

                <div class="mt-16 flex justify-center">
                    <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-base shadow-xl">
                        <img src="/profile.jpg" alt="Profile picture" class="w-full h-full object-cover" />
                    </div>
                </div>
            </div>
        </div>
    }
}
