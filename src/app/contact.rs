use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="min-h-screen bg-background">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <h1 class="text-4xl font-bold mb-2">"Contact Me"</h1>
                <p class="text-xl text-muted mb-12">
                    "Get in touch for collaborations or opportunities"
                </p>

                <div class="bg-surface rounded-xl p-8 shadow-md max-w-2xl mx-auto">
                    <a
                        href="mailto:tj.shapiro193@gmail.com"
                        class="inline-flex items-center px-6 py-3 bg-primary text-white rounded-lg font-medium hover:opacity-90 transition-opacity text-lg"
                    >
                        "Email Me Directly"
                    </a>

                    <div class="mt-8 text-muted">
                        <p class="mb-4">"Or connect with me on:"</p>
                        <div class="flex gap-4">
                            <a href="https://linkedin.com/in/tj-shapiro" class="hover:text-primary">
                                "LinkedIn"
                            </a>
                            <a href="https://github.com/TJ-Shapiro" class="hover:text-primary">
                                "GitHub"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
