use leptos::{either::*, prelude::*};

use super::icons::ArrowTopRightIcon;

const DEFAULT_HEIGHT: &str = "800px";
const DEFAULT_WIDTH: &str = "100%";

fn embed_src(file_path: &str) -> String {
    // Fragment params hide the native PDF viewer toolbar and nav panes
    format!("{file_path}#toolbar=0&navpanes=0")
}

fn container_style(width: &str, height: &str) -> String {
    // Extra 40px leaves room for the download row under the frame
    format!("width: {width}; height: calc({height} + 40px)")
}

fn download_link(file_path: String) -> impl IntoView {
    view! {
        <a
            href=file_path
            download=""
            class="inline-flex items-center text-primary hover:underline text-sm"
        >
            <ArrowTopRightIcon class="h-4 w-4 mr-1" />
            "Download PDF"
        </a>
    }
}

fn placeholder_view() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-full">
            <div class="animate-pulse text-muted">"Loading document..."</div>
        </div>
    }
}

fn frame_view(file_path: String, on_error: impl Fn() + Send + 'static) -> impl IntoView {
    let src = embed_src(&file_path);
    view! {
        <div class="flex flex-col h-full">
            <div class="flex-grow">
                <iframe
                    src=src
                    class="w-full h-full min-h-[600px]"
                    frameborder="0"
                    on:error=move |_| on_error()
                ></iframe>
            </div>
            <div class="mt-2 text-right p-2">{download_link(file_path)}</div>
        </div>
    }
}

fn failure_view(file_path: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-full gap-2">
            <div class="text-muted">"The document couldn't be displayed here."</div>
            {download_link(file_path)}
        </div>
    }
}

// Placeholder until the client is ready, then the frame, unless the frame
// reported a load error in the meantime.
fn embed_body(
    ready: bool,
    failed: bool,
    file_path: &str,
    on_error: impl Fn() + Send + 'static,
) -> impl IntoView {
    if !ready {
        EitherOf3::A(placeholder_view())
    } else if failed {
        EitherOf3::B(failure_view(file_path.to_string()))
    } else {
        EitherOf3::C(frame_view(file_path.to_string(), on_error))
    }
}

/// Embeds a document (e.g. a PDF) in an inline frame with a download link
/// underneath. Shows a placeholder until the component has mounted on the
/// client, so the server render and the first client render agree.
#[component]
pub fn DocumentEmbed(
    #[prop(into)] file_path: String,
    #[prop(into, default = DEFAULT_HEIGHT.to_string())] height: String,
    #[prop(into, default = DEFAULT_WIDTH.to_string())] width: String,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    let (ready, set_ready) = signal(false);
    let (failed, set_failed) = signal(false);

    // Effects don't run during server rendering, so this fires once on the
    // client after hydration. Nothing ever writes `ready` back to false.
    Effect::new(move |_| set_ready(true));

    let style = container_style(&width, &height);

    view! {
        <div class=format!("bg-surface rounded-lg overflow-hidden mb-4 {class}") style=style>
            {move || embed_body(ready(), failed(), &file_path, move || set_failed(true))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_src_appends_viewer_chrome_suffix() {
        assert_eq!(
            embed_src("/docs/report.pdf"),
            "/docs/report.pdf#toolbar=0&navpanes=0"
        );
        assert_eq!(embed_src("/visionpro.pdf"), "/visionpro.pdf#toolbar=0&navpanes=0");
        assert_eq!(embed_src("a"), "a#toolbar=0&navpanes=0");
    }

    #[test]
    fn test_container_style_adds_fixed_height_offset() {
        assert_eq!(
            container_style("100%", "800px"),
            "width: 100%; height: calc(800px + 40px)"
        );
        assert_eq!(
            container_style("50rem", "60vh"),
            "width: 50rem; height: calc(60vh + 40px)"
        );
    }

    #[test]
    fn test_default_dimensions() {
        assert_eq!(DEFAULT_HEIGHT, "800px");
        assert_eq!(DEFAULT_WIDTH, "100%");
    }

    #[test]
    fn test_placeholder_shows_loading_text() {
        let html = placeholder_view().to_html();
        assert!(html.contains("Loading document..."));
    }

    #[test]
    fn test_frame_embeds_document_with_suppressed_chrome() {
        let html = frame_view("/docs/report.pdf".to_string(), || {}).to_html();
        assert!(html.contains("/docs/report.pdf#toolbar=0"));
        assert!(html.contains("navpanes=0"));
        assert!(!html.contains("Loading document..."));
    }

    #[test]
    fn test_body_shows_placeholder_until_ready() {
        let html = embed_body(false, false, "/visionpro.pdf", || {}).to_html();
        assert!(html.contains("Loading document..."));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_body_swaps_placeholder_for_frame_once_ready() {
        let html = embed_body(true, false, "/visionpro.pdf", || {}).to_html();
        assert!(html.contains("<iframe"));
        assert!(!html.contains("Loading document..."));
    }

    #[test]
    fn test_body_prefers_failure_notice_over_frame() {
        let html = embed_body(true, true, "/visionpro.pdf", || {}).to_html();
        assert!(html.contains("couldn't be displayed"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_download_target_is_the_bare_path() {
        let html = download_link("/docs/report.pdf".to_string()).to_html();
        assert!(html.contains(r#"href="/docs/report.pdf""#));
        assert!(!html.contains(r#"href="/docs/report.pdf#"#));
        assert!(html.contains("download"));
    }

    #[test]
    fn test_failure_notice_keeps_download_affordance() {
        let html = failure_view("/visionpro.pdf".to_string()).to_html();
        assert!(html.contains("couldn't be displayed"));
        assert!(html.contains(r#"href="/visionpro.pdf""#));
    }
}
