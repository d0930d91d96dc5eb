use maud::{html, Markup};

/// CSS-only carousel: each image is a scroll-snap slide, the dots jump between them.
pub fn image_gallery(id: &str, alt: &str, images: &[&str]) -> Markup {
    html! {
        div class="gallery" {
            div class="gallery-track" {
                @for (i, src) in images.iter().enumerate() {
                    img
                        id=(format!("{id}-{i}"))
                        src=(src)
                        alt=(format!("{alt} photo {}", i + 1))
                        loading=[(i > 0).then_some("lazy")]
                        onerror="console.error('Failed to load image:', this.src)";
                }
            }
            @if images.len() > 1 {
                div class="gallery-dots" {
                    @for i in 0..images.len() {
                        a href=(format!("#{id}-{i}")) aria-label=(format!("Show photo {}", i + 1)) {}
                    }
                }
            }
        }
    }
}
