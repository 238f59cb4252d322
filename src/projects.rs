use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaLayout {
    Full,
    Half,
}

#[derive(Debug, Clone, Copy)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: &'static str,
    pub caption: &'static str,
    pub layout: MediaLayout,
}

impl MediaItem {
    pub const fn image(src: &'static str, caption: &'static str, layout: MediaLayout) -> Self {
        MediaItem {
            kind: MediaKind::Image,
            src,
            caption,
            layout,
        }
    }

    pub const fn video(src: &'static str, caption: &'static str, layout: MediaLayout) -> Self {
        MediaItem {
            kind: MediaKind::Video,
            src,
            caption,
            layout,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub lead: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Canonical per-project record. Everything the list cards and the detail
/// pages render is derived from these entries, so a card can never point at
/// a project page that doesn't exist.
#[derive(Debug)]
pub struct ProjectDetail {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub body: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub media: &'static [MediaItem],
    pub features_title: &'static str,
    pub features: &'static [&'static str],
    pub highlights_title: &'static str,
    pub highlights: &'static [Highlight],
    pub document: Option<&'static str>,
    pub links: &'static [ExternalLink],
    pub featured: bool,
}

/// Card-level view of a project, as shown on the projects list page.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub route: String,
}

impl ProjectDetail {
    pub fn route(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            slug: self.slug,
            title: self.title,
            summary: self.summary,
            tags: self.tags,
            route: self.route(),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
}

pub fn all() -> &'static [ProjectDetail] {
    &PROJECTS
}

pub fn by_slug(slug: &str) -> Result<&'static ProjectDetail, ProjectError> {
    PROJECTS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or(ProjectError::NotFound)
}

static PROJECTS: [ProjectDetail; 4] = [
    ProjectDetail {
        slug: "guitar",
        title: "STM32 Digital Guitar Effects Pedal",
        summary: "Project combining analog and digital signal processing techniques to create guitar effects in an embedded device.",
        description: "Project combining analog and digital signal processing techniques to create guitar effects in an embedded device.",
        body: &[
            "This project involved designing a digital guitar effects pedal using an STM32 microcontroller. The system processes audio signals in real-time with various effects including distortion, delay, and reverb.",
            "The hardware design includes analog input conditioning, digital signal processing, and analog output stages. The DSP algorithms were optimized for real-time performance on the STM32 platform.",
            "The final product achieved professional-grade audio quality with latency under 1ms, making it suitable for live performances.",
        ],
        tags: &["C", "I2C/I2S", "SPI", "RTOS", "DSP", "STM32"],
        media: &[
            MediaItem::image("/projects/pedal1.jpg", "Front panel design", MediaLayout::Half),
            MediaItem::image("/projects/pedal3.jpg", "Internal components", MediaLayout::Half),
            MediaItem::image("/projects/pedal2.jpg", "Hardware Design", MediaLayout::Full),
            MediaItem::image("/projects/pedal4.jpg", "Overview Block Diagram", MediaLayout::Full),
        ],
        features_title: "Audio Features",
        features: &[
            "Real-time audio processing with <1ms latency",
            "Multiple effect algorithms implemented in C",
            "Custom PCB design with proper grounding techniques",
            "I2S audio interface with 24-bit resolution",
            "USB configuration interface",
        ],
        highlights_title: "Key Audio Processing Innovations",
        highlights: &[
            Highlight {
                lead: "Optimized FIR filters:",
                text: " Implemented using ARM CMSIS-DSP library with 90% CPU utilization efficiency",
            },
            Highlight {
                lead: "Delay effects:",
                text: " Circular buffer implementation with interpolation for smooth delay transitions",
            },
            Highlight {
                lead: "Distortion algorithms:",
                text: " Wave shaping with adjustable hardness parameters",
            },
            Highlight {
                lead: "Real-time performance:",
                text: " Achieved consistent 0.8ms latency through DMA and double-buffering",
            },
        ],
        document: None,
        links: &[
            ExternalLink {
                label: "Source Code",
                href: "https://github.com/TJ-Shapiro/STM32-DSP-Guitar-pedal",
            },
            ExternalLink {
                label: "Audio Demo",
                href: "https://yourwebsite.com/demo",
            },
        ],
        featured: true,
    },
    ProjectDetail {
        slug: "led",
        title: "Raspberry Pi DJ Lighting System",
        summary: "Full-stack hardware/software solution for club-grade audio-reactive lighting synchronized with DJ software via Ableton Link",
        description: "Full-stack hardware/software solution for club-grade audio-reactive lighting synchronized with DJ software via Ableton Link",
        body: &[
            "This professional DJ lighting system combines Raspberry Pi hardware with advanced audio processing to create stunning visual synchronization for live performances. The system uses rpi_ws281x for microsecond-precision LED control and integrates with industry-standard DJ software via Ableton Link.",
            "The architecture features a custom UDP server with JSON protocol for low-latency communication between the audio analysis engine (running on a performance PC) and the Raspberry Pi LED controllers. This enables real-time visualization while keeping audio processing separate from lighting control.",
            "Deployed in multiple club installations, this system provides reliable, high-performance lighting that stays perfectly synchronized with the music while reacting dynamically to audio input. The hardware design includes custom power regulation and signal boosting for large LED installations.",
        ],
        tags: &[
            "Raspberry Pi",
            "Python",
            "Ableton Link",
            "rpi_ws281x",
            "I2C/PWM",
            "UDP Server",
            "Audio DSP",
        ],
        media: &[
            MediaItem::image("/projects/led1.jpg", "Club installation with 300-LED array", MediaLayout::Full),
            MediaItem::image("/projects/led2.jpg", "Raspberry Pi control unit with I2C interface", MediaLayout::Half),
            MediaItem::image("/projects/led3.jpg", "Custom power distribution board", MediaLayout::Half),
            MediaItem::video("https://youtube.com/embed/DbGv20EPAq0", "Simple LED Bedroom DJ Set Demo", MediaLayout::Full),
        ],
        features_title: "Technical Highlights",
        features: &[
            "Hardware-level LED control via rpi_ws281x library",
            "Microsecond-precision timing using Raspberry Pi PWM",
            "UDP server architecture with JSON protocol",
            "Ableton Link integration for DJ software sync",
            "Multi-zone control via I2C expanders",
            "Kick/snare detection with 10ms latency",
            "Automatic gain control for different venues",
        ],
        highlights_title: "",
        highlights: &[],
        document: None,
        links: &[
            ExternalLink {
                label: "Source Code",
                href: "https://github.com/TJ-Shapiro/DJReactiveLED",
            },
            ExternalLink {
                label: "Performance Demo",
                href: "https://youtube.com/watch?v=dj-light-demo",
            },
        ],
        featured: false,
    },
    ProjectDetail {
        slug: "vision",
        title: "Apple Vision Pro Tumor Detection System",
        summary: "Medical device that allows surgeons to identify tumors in augmented reality in realtime.",
        description: "Combining RGB and Near Infrared sensors with immersive 3D visualization to identify tumors in augmented reality in real-time. Created at the UIUC Electrical and Computer Engineering department.",
        body: &[
            "This tumor diagnostic system was created by myself and a dedicated team of engineers at the University of Illinois at Urbana-Champaign. It leverages the Apple Vision Pro's advanced sensors alongside a Nvidia Jetson Nano to detect tumors with unprecedented accuracy. By combining RGB and NIR imaging with machine learning algorithms, we can highlight potential tumor regions in real-time AR overlays.",
            "The system was developed in collaboration with leading oncologists to ensure clinical relevance. Our custom algorithms process the sensor data with sub-millisecond latency, enabling seamless AR visualization during surgical procedures.",
            "Initial clinical trials showed a 92% detection accuracy for tumors larger than 2mm, significantly improving on existing techniques. The system integrates with existing hospital DICOM systems for seamless workflow integration.",
        ],
        tags: &["SwiftUI", "ARKit", "Computer Vision", "CoreML", "HealthKit"],
        media: &[
            MediaItem::image("/projects/vision1.jpg", "Surgeon using Vision Pro in OR", MediaLayout::Full),
            MediaItem::image("/projects/vision2.jpg", "Sensor housing and components", MediaLayout::Half),
            MediaItem::image("/projects/vision3.jpg", "System block diagram", MediaLayout::Half),
        ],
        features_title: "Key Features",
        features: &[
            "Real-time tumor detection with <1ms latency",
            "Multi-spectral imaging combining RGB and NIR",
            "3D tumor visualization with depth mapping",
            "HIPAA-compliant data processing",
            "Surgical navigation integration",
        ],
        highlights_title: "Technical Challenges & Solutions",
        highlights: &[
            Highlight {
                lead: "Real-time processing:",
                text: " Developed custom Metal shaders for GPU acceleration of image processing pipelines",
            },
            Highlight {
                lead: "Sensor fusion:",
                text: " Created novel algorithms to combine RGB and NIR data with sub-millisecond synchronization",
            },
            Highlight {
                lead: "Privacy compliance:",
                text: " Implemented on-device processing with zero PHI data leaving the Vision Pro",
            },
        ],
        document: Some("/visionpro.pdf"),
        links: &[
            ExternalLink {
                label: "Source Code",
                href: "https://github.com/example/vision-pro-tumor-detection",
            },
            ExternalLink {
                label: "Live Demo",
                href: "https://demo.example.com/vision-pro",
            },
        ],
        featured: false,
    },
    ProjectDetail {
        slug: "portfolio",
        title: "Portfolio Website",
        summary: "A responsive portfolio built with Leptos and Tailwind CSS.",
        description: "A responsive portfolio built with Leptos and Tailwind CSS.",
        body: &[
            "This site is rendered on the server with Axum and hydrated in the browser from a single Rust codebase, so every page works with or without JavaScript enabled.",
            "The styling is plain Tailwind utilities over a small set of theme tokens, and the project pages you are browsing are generated from one in-source registry.",
        ],
        tags: &["Rust", "Leptos", "Axum", "Tailwind CSS"],
        media: &[],
        features_title: "",
        features: &[],
        highlights_title: "",
        highlights: &[],
        document: None,
        links: &[
            ExternalLink {
                label: "Source Code",
                href: "https://github.com/TJ-Shapiro",
            },
        ],
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_derive_from_slugs() {
        for p in all() {
            assert_eq!(p.route(), format!("/projects/{}", p.slug));
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in all() {
            assert!(seen.insert(p.slug), "duplicate slug: {}", p.slug);
        }
    }

    #[test]
    fn test_every_summary_resolves_back_to_its_detail() {
        for p in all() {
            let s = p.summary();
            let detail = by_slug(s.slug).unwrap();
            assert_eq!(detail.title, s.title);
            assert_eq!(detail.route(), s.route);
        }
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        assert!(matches!(by_slug("missing"), Err(ProjectError::NotFound)));
        assert!(matches!(by_slug(""), Err(ProjectError::NotFound)));
    }

    #[test]
    fn test_lookup_does_not_normalize_slugs() {
        // slugs are matched exactly, same as routes elsewhere on the site
        assert!(by_slug("guitar").is_ok());
        assert!(by_slug("guitar/").is_err());
        assert!(by_slug("Guitar").is_err());
    }

    #[test]
    fn test_media_and_document_paths_are_root_relative_or_absolute() {
        for p in all() {
            for m in p.media {
                assert!(
                    m.src.starts_with('/') || m.src.starts_with("https://"),
                    "unexpected media src: {}",
                    m.src
                );
            }
            if let Some(doc) = p.document {
                assert!(doc.starts_with('/'), "unexpected document path: {doc}");
            }
        }
    }

    #[test]
    fn test_highlights_pair_with_their_heading() {
        for p in all() {
            assert_eq!(
                p.highlights.is_empty(),
                p.highlights_title.is_empty(),
                "highlights and heading out of sync for {}",
                p.slug
            );
            assert_eq!(
                p.features.is_empty(),
                p.features_title.is_empty(),
                "features and heading out of sync for {}",
                p.slug
            );
        }
    }
}
