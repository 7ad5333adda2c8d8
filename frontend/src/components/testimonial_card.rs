use newsroom_shared::{AvatarView, RatingView, Testimonial, TestimonialCardView};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::resolve_url,
    i18n::{current::testimonial_card as t, fill_one},
};

#[derive(Properties, PartialEq, Clone)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
    #[prop_or(false)]
    pub featured: bool,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let view = TestimonialCardView::new(&props.testimonial, props.featured);
    let testimonial = view.testimonial;

    let card_classes = if view.featured {
        classes!(
            "testimonial-card",
            "relative",
            "rounded-2xl",
            "border-2",
            "border-blue-500",
            "bg-blue-50",
            "p-8",
            "shadow-lg"
        )
    } else {
        classes!(
            "testimonial-card",
            "relative",
            "rounded-2xl",
            "border",
            "border-gray-200",
            "bg-white",
            "p-6",
            "shadow-sm"
        )
    };

    html! {
        <figure class={card_classes}>
            if view.featured {
                <span class={classes!(
                    "absolute",
                    "-top-3",
                    "right-6",
                    "rounded-full",
                    "bg-blue-600",
                    "px-3",
                    "py-1",
                    "text-xs",
                    "font-semibold",
                    "text-white"
                )}>
                    { t::FEATURED }
                </span>
            }
            <Icon name={IconName::Quote} size={28} class={classes!("mb-3", "text-blue-200")} />
            { render_rating(view.rating) }
            <blockquote class="mb-6 text-gray-700 italic leading-relaxed">
                { &testimonial.content }
            </blockquote>
            <figcaption class="flex items-center gap-3">
                { render_avatar(&view.avatar, &testimonial.name) }
                <div class="min-w-0 flex-1">
                    <div class="flex items-center gap-1">
                        <span class="truncate font-semibold text-gray-900">{ &testimonial.name }</span>
                        if view.verified {
                            <span
                                class="inline-flex items-center gap-1 text-xs font-medium text-green-700"
                                title={t::VERIFIED}
                            >
                                <Icon name={IconName::BadgeCheck} size={14} />
                                { t::VERIFIED }
                            </span>
                        }
                    </div>
                    if let Some(byline) = view.byline.clone() {
                        <p class="truncate text-sm text-gray-500">{ byline }</p>
                    }
                </div>
                if let Some(category) = testimonial.category.as_deref() {
                    <span class="rounded-full bg-gray-100 px-2 py-1 text-xs text-gray-600">
                        { category }
                    </span>
                }
            </figcaption>
        </figure>
    }
}

fn render_rating(rating: RatingView) -> Html {
    let units = match rating {
        RatingView::Absent => return Html::default(),
        RatingView::Units(units) => units,
    };

    html! {
        <div
            class="mb-3 flex gap-1"
            role="img"
            aria-label={fill_one(t::RATING_ARIA_TEMPLATE, rating.filled())}
        >
            { for units.iter().map(|filled| {
                let tone = if *filled { "text-yellow-400" } else { "text-gray-300" };
                html! { <Icon name={IconName::Star} size={18} filled={*filled} class={classes!(tone)} /> }
            }) }
        </div>
    }
}

fn render_avatar(avatar: &AvatarView<'_>, name: &str) -> Html {
    let frame = classes!(
        "flex",
        "h-12",
        "w-12",
        "shrink-0",
        "items-center",
        "justify-center",
        "overflow-hidden",
        "rounded-full"
    );

    match avatar {
        AvatarView::Image(src) => html! {
            <span class={frame}>
                <img
                    src={resolve_url(src)}
                    alt={name.to_string()}
                    class="h-full w-full object-cover"
                    loading="lazy"
                />
            </span>
        },
        AvatarView::Initials(initials) => html! {
            <span
                class={classes!(frame, "avatar-initials", "bg-blue-600", "font-semibold", "text-white")}
                aria-hidden="true"
            >
                { initials.clone() }
            </span>
        },
    }
}
