use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::icons::{ArrowRightIcon, CodeBracketIcon, CpuChipIcon, MusicalNoteIcon};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <div class="min-h-screen bg-background">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="flex flex-col lg:flex-row gap-16 items-center">
                    <div class="relative lg:w-1/3">
                        <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-2xl overflow-hidden border-4 border-base shadow-xl mx-auto lg:mx-0">
                            <img src="/profile.jpg" alt="Profile picture" class="w-full h-full object-cover" />
                        </div>
                        <div class="hidden lg:block absolute -top-8 -left-8 w-32 h-32 rounded-full bg-primary opacity-10 -z-10"></div>
                        <div class="hidden lg:block absolute -bottom-4 -right-4 w-24 h-24 rounded-full bg-primary opacity-5 -z-10"></div>
                    </div>

                    <div class="lg:w-2/3">
                        <h1 class="text-4xl font-bold mb-6">
                            "About " <span class="text-primary-gradient">"Me"</span>
                        </h1>

                        <div class="max-w-none text-foreground/80 mb-8">
                            <p class="text-lg mb-4">
                                "I'm TJ Shapiro, a passionate developer specializing in embedded systems and interactive experiences. With a background in both hardware and software, I bridge the gap between digital and physical worlds."
                            </p>
                            <p class="text-lg mb-4">
                                "My journey in technology began when I first discovered the magic of making computers do things beyond their out-of-the-box capabilities. Since then, I've been obsessed with creating systems that are not just functional but delightful to interact with."
                            </p>
                            <p class="text-lg">
                                "When I'm not coding, you can find me playing guitar, experimenting with audio electronics, or exploring the latest in AR/VR technologies."
                            </p>
                        </div>

                        <div class="mb-12">
                            <h2 class="text-2xl font-bold mb-6">
                                "Skills & " <span class="text-primary-gradient">"Expertise"</span>
                            </h2>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <div class="bg-surface p-6 rounded-xl">
                                    <div class="flex items-center mb-4">
                                        <CpuChipIcon class="h-6 w-6 text-primary mr-2" />
                                        <h3 class="text-xl font-semibold">"Technical Skills"</h3>
                                    </div>
                                    <ul class="space-y-2">
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Embedded Systems Development (C/C++)"</span>
                                        </li>
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Digital Signal Processing"</span>
                                        </li>
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"RTOS & Bare Metal Programming"</span>
                                        </li>
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Web Development (Leptos, Rust)"</span>
                                        </li>
                                    </ul>
                                </div>

                                <div class="bg-surface p-6 rounded-xl">
                                    <div class="flex items-center mb-4">
                                        <MusicalNoteIcon class="h-6 w-6 text-primary mr-2" />
                                        <h3 class="text-xl font-semibold">"Interests"</h3>
                                    </div>
                                    <ul class="space-y-2">
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Audio Engineering & DSP"</span>
                                        </li>
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Augmented Reality Applications"</span>
                                        </li>
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Human-Computer Interaction"</span>
                                        </li>
                                        <li class="flex items-center">
                                            <span class="w-2 h-2 rounded-full bg-primary mr-2"></span>
                                            <span>"Open Source Hardware"</span>
                                        </li>
                                    </ul>
                                </div>
                            </div>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <A
                                href="/projects"
                                attr:class="flex items-center justify-center px-8 py-3 bg-primary-gradient text-white rounded-lg font-medium hover:opacity-90 transition-opacity"
                            >
                                <CodeBracketIcon class="h-5 w-5 mr-2" />
                                "View My Projects"
                            </A>
                            <A
                                href="/contact"
                                attr:class="flex items-center justify-center px-8 py-3 border border-base rounded-lg font-medium hover:bg-surface transition-colors"
                            >
                                "Get In Touch" <ArrowRightIcon class="h-5 w-5 ml-2" />
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
