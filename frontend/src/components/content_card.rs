use newsroom_shared::{
    datetime::DATE_LOCALE, AttachmentsView, ContentCardView, ContentItem, Disclosure,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::resolve_url,
    hooks::use_share,
    i18n::{current::content_card as t, fill_one},
};

#[derive(Properties, PartialEq, Clone)]
pub struct ContentCardProps {
    pub item: ContentItem,
}

#[function_component(ContentCard)]
pub fn content_card(props: &ContentCardProps) -> Html {
    let disclosure = use_state(Disclosure::default);
    let share = use_share(props.item.clone());
    let view = ContentCardView::new(&props.item, *disclosure);
    let item = view.item;

    let on_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |_: MouseEvent| disclosure.set(disclosure.toggled()))
    };

    let expanded = view.disclosure.is_expanded();
    let body_id = format!("{}-body", item.id);

    let card_classes = classes!(
        "content-card",
        "overflow-hidden",
        "rounded-xl",
        "border",
        "bg-white",
        "shadow-sm",
        "transition-shadow",
        "duration-200",
        "hover:shadow-md",
        if view.featured { "border-blue-300" } else { "border-gray-200" }
    );

    html! {
        <article id={item.id.clone()} class={card_classes}>
            if view.featured {
                <div class={classes!(
                    "featured-band",
                    "bg-gradient-to-r",
                    "from-blue-700",
                    "to-blue-500",
                    "px-6",
                    "py-2",
                    "text-xs",
                    "font-semibold",
                    "tracking-widest",
                    "text-white"
                )}>
                    { t::FEATURED_BAND }
                </div>
            }
            <div class="p-6">
                <div class="mb-3 flex flex-wrap items-center justify-between gap-2">
                    <span class={classes!(
                        "inline-block",
                        "rounded-full",
                        "px-3",
                        "py-1",
                        "text-xs",
                        "font-semibold",
                        view.badge_class
                    )}>
                        { &view.category_label }
                    </span>
                    <time
                        class="text-sm text-gray-500"
                        lang={DATE_LOCALE}
                        datetime={item.created_at.clone()}
                    >
                        { view.published.clone().unwrap_or_else(|| t::DATE_UNAVAILABLE.to_string()) }
                    </time>
                </div>
                <h3 class="mb-2 text-xl font-bold text-gray-900">{ &item.title }</h3>
                <div id={body_id.clone()} class="content-body space-y-3 text-gray-700">
                    { for paragraphs(view.body).map(|para| html! { <p>{ para }</p> }) }
                </div>
                { render_attachments(view.attachments) }
                <div class="mt-5 flex items-center justify-between border-t border-gray-100 pt-4">
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "items-center",
                            "gap-1",
                            "text-sm",
                            "font-medium",
                            "text-blue-700",
                            "hover:text-blue-900"
                        )}
                        aria-expanded={expanded.to_string()}
                        aria-controls={body_id}
                        onclick={on_toggle}
                    >
                        { if expanded { t::READ_LESS } else { t::READ_MORE } }
                        <Icon
                            name={if expanded { IconName::ChevronUp } else { IconName::ChevronDown }}
                            size={16}
                        />
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "min-w-[6.5rem]",
                            "items-center",
                            "justify-center",
                            "gap-2",
                            "rounded-lg",
                            "bg-blue-600",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "font-medium",
                            "text-white",
                            "transition-colors",
                            "hover:bg-blue-700"
                        )}
                        aria-label={fill_one(t::SHARE_ARIA_TEMPLATE, &item.title)}
                        onclick={share.onclick.clone()}
                    >
                        {
                            if share.copied {
                                html! { <><Icon name={IconName::Check} size={16} />{ t::LINK_COPIED }</> }
                            } else {
                                html! { <><Icon name={IconName::Share} size={16} />{ t::SHARE }</> }
                            }
                        }
                    </button>
                </div>
            </div>
        </article>
    }
}

fn render_attachments(attachments: AttachmentsView<'_>) -> Html {
    let rows = match attachments {
        AttachmentsView::Listed(rows) => rows,
        AttachmentsView::Hidden | AttachmentsView::Absent | AttachmentsView::Empty => {
            return Html::default();
        },
    };

    html! {
        <div class="attachments mt-5 rounded-lg bg-gray-50 p-4">
            <h4 class="mb-2 flex items-center gap-2 text-sm font-semibold text-gray-800">
                <Icon name={IconName::Paperclip} size={16} />
                { t::ATTACHMENTS }
            </h4>
            <ul class="space-y-2">
                { for rows.iter().map(|attachment| html! {
                    <li>
                        <a
                            href={resolve_url(&attachment.url)}
                            download={attachment.name.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={fill_one(t::DOWNLOAD_ARIA_TEMPLATE, &attachment.name)}
                            class="group flex items-center gap-2 text-sm text-blue-700 hover:underline"
                        >
                            <Icon name={IconName::Download} size={16} />
                            <span class="attachment-name">{ &attachment.name }</span>
                            <span class="attachment-size text-gray-500">{ attachment.size_label() }</span>
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

/// Split a body on blank lines.
fn paragraphs(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split("\n\n")
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(str::to_string)
}
