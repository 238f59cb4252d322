use leptos::{either::*, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use crate::projects::{
    all, by_slug, Highlight, MediaItem, MediaKind, MediaLayout, ProjectDetail, ProjectError,
    ProjectSummary,
};

use super::document_embed::DocumentEmbed;
use super::icons::{
    ArrowLeftIcon, ArrowRightIcon, ArrowTopRightIcon, CodeBracketIcon, SparklesIcon,
};
use super::NotFound;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="min-h-screen bg-background">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <h1 class="text-4xl font-bold mb-2">"My Projects"</h1>
                <p class="text-xl text-muted mb-12">
                    "Things I've built to solve real-world problems:"
                </p>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {all()
                        .iter()
                        .map(|p| view! { <ProjectCard summary=p.summary() featured=p.featured /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(summary: ProjectSummary, featured: bool) -> impl IntoView {
    view! {
        <div class="bg-surface rounded-xl shadow-md overflow-hidden hover:shadow-lg transition-shadow duration-300">
            <div class="p-6">
                {featured
                    .then(|| {
                        view! {
                            <span class="inline-flex items-center text-sm font-medium bg-purple-900/30 text-purple-400 px-3 py-1 rounded-full mb-3">
                                <SparklesIcon class="h-4 w-4 mr-1" />
                                "Featured"
                            </span>
                        }
                    })}
                <h2 class="text-2xl font-bold mb-2">{summary.title}</h2>
                <p class="text-muted mb-4">{summary.summary}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {summary
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-background/50 text-sm rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <A href=summary.route attr:class="inline-flex items-center text-primary hover:underline">
                    "View project" <ArrowRightIcon class="h-4 w-4 ml-1" />
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    view! {
        {move || match by_slug(&slug()) {
            Ok(detail) => Either::Left(view! { <ProjectView detail=detail /> }),
            Err(ProjectError::NotFound) => Either::Right(view! { <NotFound /> }),
        }}
    }
}

#[component]
fn ProjectView(detail: &'static ProjectDetail) -> impl IntoView {
    view! {
        <Title text=detail.title />
        <div class="min-h-screen bg-background">
            <div class="sticky top-16 z-10 bg-background/80 backdrop-blur-md border-b border-base">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                    <A
                        href="/projects"
                        attr:class="inline-flex items-center text-primary hover:underline group"
                    >
                        <ArrowLeftIcon class="h-5 w-5 mr-2 transition-transform group-hover:-translate-x-1" />
                        "Back to Projects"
                    </A>
                </div>
            </div>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="mb-8">
                    {detail
                        .featured
                        .then(|| {
                            view! {
                                <div class="flex items-center mb-4">
                                    <SparklesIcon class="h-8 w-8 text-purple-400 mr-3 animate-pulse" />
                                    <span class="text-sm font-medium bg-purple-900/30 text-purple-400 px-3 py-1 rounded-full">
                                        "Featured Project"
                                    </span>
                                </div>
                            }
                        })}
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        {if detail.featured {
                            Either::Left(
                                view! { <span class="text-primary-gradient">{detail.title}</span> },
                            )
                        } else {
                            Either::Right(detail.title)
                        }}
                    </h1>
                    <p class="text-xl text-muted max-w-3xl leading-relaxed">{detail.description}</p>
                </div>

                <div class="flex flex-wrap items-center gap-4 mb-8">
                    <div class="flex flex-wrap gap-2">
                        {detail
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 bg-surface text-sm rounded-full hover:bg-primary hover:text-white transition-colors">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex gap-6 ml-auto">
                        {detail
                            .links
                            .iter()
                            .map(|link| {
                                let icon = if link.label == "Source Code" {
                                    Either::Left(view! { <CodeBracketIcon class="h-5 w-5 mr-2" /> })
                                } else {
                                    Either::Right(view! { <ArrowTopRightIcon class="h-5 w-5 mr-2" /> })
                                };
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center text-primary hover:underline group"
                                    >
                                        {icon}
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-20 space-y-20">
                <section class="scroll-mt-20" id="details">
                    <h2 class="text-2xl font-bold mb-6">
                        "Project " <span class="text-primary-gradient">"Details"</span>
                    </h2>
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <div class="lg:col-span-2 space-y-6">
                            {detail
                                .body
                                .iter()
                                .map(|paragraph| {
                                    view! {
                                        <p class="text-foreground/80 leading-relaxed">{*paragraph}</p>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {(!detail.features.is_empty())
                            .then(|| {
                                view! {
                                    <div class="lg:col-span-1">
                                        <FeatureBox
                                            title=detail.features_title
                                            features=detail.features
                                        />
                                    </div>
                                }
                            })}
                    </div>
                </section>

                {(!detail.media.is_empty())
                    .then(|| {
                        view! {
                            <section class="space-y-8">
                                <h2 class="text-2xl font-bold mb-6">
                                    "Project " <span class="text-primary-gradient">"Gallery"</span>
                                </h2>
                                <MediaGallery media=detail.media />
                            </section>
                        }
                    })}

                {detail
                    .document
                    .map(|path| {
                        view! {
                            <section class="scroll-mt-20" id="technical">
                                <h2 class="text-2xl font-bold mb-6">
                                    "Technical "
                                    <span class="text-primary-gradient">"Implementation"</span>
                                </h2>
                                <div class="bg-surface rounded-xl p-6">
                                    <h3 class="text-lg font-semibold mb-4">
                                        "Design Process and Research Documentation"
                                    </h3>
                                    <DocumentEmbed file_path=path class="my-8" />
                                </div>
                            </section>
                        }
                    })}

                {(!detail.highlights.is_empty())
                    .then(|| {
                        view! {
                            <section class="scroll-mt-20">
                                <HighlightList
                                    title=detail.highlights_title
                                    highlights=detail.highlights
                                />
                            </section>
                        }
                    })}
            </div>

            <section class="bg-surface border-t border-base py-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-2xl font-bold mb-4">"Want to know more?"</h2>
                    <p class="text-muted mb-8 max-w-2xl mx-auto">
                        "Interested in the technical details or have a similar project in mind?"
                    </p>
                    <div class="flex gap-6 justify-center">
                        {detail
                            .links
                            .first()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="inline-flex items-center px-6 py-3 bg-primary-gradient text-white rounded-lg font-medium hover:opacity-90 transition-opacity"
                                    >
                                        <CodeBracketIcon class="h-5 w-5 mr-2" />
                                        "View Source Code"
                                    </a>
                                }
                            })}
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center px-6 py-3 border border-base rounded-lg font-medium hover:bg-background transition-colors"
                        >
                            "Get in Touch!"
                        </A>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureBox(title: &'static str, features: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="bg-surface rounded-xl p-6 border border-base shadow-sm sticky top-40">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            <ul class="space-y-3">
                {features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-start">
                                <div class="flex-shrink-0 mt-1.5">
                                    <div class="h-2 w-2 bg-primary rounded-full"></div>
                                </div>
                                <span class="ml-3 text-foreground/80">{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn HighlightList(title: &'static str, highlights: &'static [Highlight]) -> impl IntoView {
    view! {
        <div class="bg-surface rounded-xl p-8 border border-base shadow-lg">
            <h3 class="text-lg font-semibold mb-6">{title}</h3>
            <ul class="space-y-4">
                {highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <li class="flex items-start">
                                <span class="text-primary mr-3 mt-1">"•"</span>
                                <div>
                                    <strong class="text-foreground">{h.lead}</strong>
                                    <span class="text-foreground/80">{h.text}</span>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn MediaGallery(media: &'static [MediaItem]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {media
                .iter()
                .map(|item| {
                    let span = match item.layout {
                        MediaLayout::Full => "md:col-span-2",
                        MediaLayout::Half => "",
                    };
                    match item.kind {
                        MediaKind::Image => {
                            Either::Left(
                                view! {
                                    <div class=format!(
                                        "rounded-xl overflow-hidden shadow-xl bg-surface {span}",
                                    )>
                                        <img
                                            src=item.src
                                            alt=item.caption
                                            class="w-full h-auto object-cover"
                                        />
                                        <p class="text-sm text-muted mt-2 px-4 py-2">{item.caption}</p>
                                    </div>
                                },
                            )
                        }
                        MediaKind::Video => {
                            Either::Right(
                                view! {
                                    <div class=format!(
                                        "relative pb-[56.25%] h-0 rounded-xl overflow-hidden shadow-xl {span}",
                                    )>
                                        <iframe
                                            src=item.src
                                            class="absolute top-0 left-0 w-full h-full"
                                            frameborder="0"
                                            allowfullscreen="true"
                                            title=item.caption
                                        ></iframe>
                                    </div>
                                },
                            )
                        }
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_renders_images_and_videos_by_layout() {
        static MEDIA: [MediaItem; 2] = [
            MediaItem::image("/projects/x.jpg", "Bench shot", MediaLayout::Half),
            MediaItem::video("https://youtube.com/embed/abc", "Demo reel", MediaLayout::Full),
        ];
        let html = view! { <MediaGallery media=&MEDIA /> }.to_html();
        assert!(html.contains(r#"src="/projects/x.jpg""#));
        assert!(html.contains("Bench shot"));
        assert!(html.contains("youtube.com/embed/abc"));
        assert!(html.contains("<iframe"));
        assert!(html.contains("md:col-span-2"));
    }

    #[test]
    fn test_feature_box_lists_every_feature_under_its_heading() {
        static FEATURES: [&str; 3] = ["One", "Two", "Three"];
        let html = view! { <FeatureBox title="Key Features" features=&FEATURES /> }.to_html();
        assert!(html.contains("Key Features"));
        for feature in FEATURES {
            assert!(html.contains(feature));
        }
    }

    #[test]
    fn test_highlight_list_renders_bold_leads() {
        static HIGHLIGHTS: [Highlight; 1] = [Highlight {
            lead: "Latency:",
            text: " under a millisecond",
        }];
        let html = view! { <HighlightList title="Wins" highlights=&HIGHLIGHTS /> }.to_html();
        assert!(html.contains("<strong"));
        assert!(html.contains("Latency:"));
        assert!(html.contains("under a millisecond"));
    }
}
