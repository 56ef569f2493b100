//! Experience narrative - numbered steps with alternating image placement.

use leptos::prelude::*;

use crate::content::{Align, EXPERIENCE_STEPS, PageSection, step_image_src};

/// One numbered step: text block paired with a photo.
///
/// The text block always comes first in the markup. For [`Align::Right`]
/// the layout classes move it to the second column on wide screens.
#[component]
pub fn ExperienceStep(
    number: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] align: Align,
    /// URL prefix for step photos
    #[prop(into)]
    image_base: String,
) -> impl IntoView {
    let layout = align.layout();
    let src = step_image_src(&image_base, number);

    view! {
        <div class=layout.grid data-step=number data-align=align.as_str()>
            <div class=layout.text>
                <div class="step-number">{number}</div>
                <h3 class="step-title">{title}</h3>
                <p class="step-description">{description}</p>
            </div>
            <div class=layout.media>
                <img class="step-image" src=src alt=title loading="eager" />
            </div>
        </div>
    }
}

/// Experience section rendering every step in order.
#[component]
pub fn ExperienceSection(#[prop(into)] image_base: String) -> impl IntoView {
    view! {
        <section class="section section-bordered" data-section=PageSection::Experience.as_str()>
            <div class="container section-body">
                <div class="steps">
                    {EXPERIENCE_STEPS.iter().map(|step| view! {
                        <ExperienceStep
                            number=step.number
                            title=step.title
                            description=step.description
                            align=step.align
                            image_base=image_base.clone()
                        />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render_step(align: Option<Align>) -> String {
        match align {
            Some(align) => view! {
                <ExperienceStep number="02" title="T" description="D" align=align image_base="/images" />
            }
            .to_html(),
            None => view! {
                <ExperienceStep number="02" title="T" description="D" image_base="/images" />
            }
            .to_html(),
        }
    }

    #[test]
    fn omitted_alignment_renders_left_layout() {
        let html = render_step(None);

        assert!(html.contains("data-align=\"left\""));
        assert!(html.contains("step step-left"));
        assert!(!html.contains("order-first"));
        assert!(!html.contains("order-last"));
        assert_eq!(html, render_step(Some(Align::Left)));
    }

    #[test]
    fn right_alignment_swaps_columns_without_reordering_markup() {
        let html = render_step(Some(Align::Right));

        assert!(html.contains("step step-right"));
        let text = html.find("step-text order-last").expect("text column moved last");
        let media = html.find("step-media order-first").expect("media column moved first");
        assert!(text < media, "markup order must stay text then media");
    }

    #[test]
    fn image_is_derived_from_step_number() {
        let html = render_step(None);

        assert!(html.contains("src=\"/images/photo-02.png\""));
        assert!(html.contains("alt=\"T\""));
    }

    #[test]
    fn section_renders_steps_in_order_with_alternating_alignment() {
        let html = view! { <ExperienceSection image_base="/images" /> }.to_html();

        let mut seen = Vec::new();
        let mut rest = html.as_str();
        while let Some(idx) = rest.find("data-step=\"") {
            rest = &rest[idx + "data-step=\"".len()..];
            let number = &rest[..2];
            let align_at = rest.find("data-align=\"").expect("align attribute") + "data-align=\"".len();
            let align = if rest[align_at..].starts_with("right") { "right" } else { "left" };
            seen.push((number.to_string(), align));
        }

        assert_eq!(
            seen,
            vec![
                ("01".to_string(), "left"),
                ("02".to_string(), "right"),
                ("03".to_string(), "left"),
            ]
        );
    }
}
