use yew::prelude::*;

/// Lucide Icons - 清晰的线性 icon 系统
/// SVG 路径来自 https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Disclosure
    ChevronDown,
    ChevronUp,

    // Actions
    Share,
    Download,
    Check,
    X,

    // Content
    Paperclip,
    Quote,
    Star,
    BadgeCheck,
    AlertTriangle,
}

impl IconName {
    /// 获取 Lucide icon 的 SVG path 数据
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronDown => "m6 9 6 6 6-6",
            IconName::ChevronUp => "m18 15-6-6-6 6",

            IconName::Share => "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8M16 6l-4-4-4 4M12 2v13",
            IconName::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            IconName::Check => "M20 6 9 17l-5-5",
            IconName::X => "M18 6 6 18M6 6l12 12",

            IconName::Paperclip => {
                "m21.44 11.05-9.19 9.19a6 6 0 0 1-8.49-8.49l8.57-8.57A4 4 0 1 1 18 8.84l-8.59 \
                 8.57a2 2 0 0 1-2.83-2.83l8.49-8.48"
            },
            IconName::Quote => {
                "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 \
                 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1zM15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 \
                 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"
            },
            IconName::Star => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"
            },
            IconName::BadgeCheck => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3",
            IconName::AlertTriangle => {
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3zM12 \
                 9v4M12 17h.01"
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    /// 用描边颜色填充（实心星标等）
    #[prop_or(false)]
    pub filled: bool,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        filled,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };
    let fill = if *filled { color.as_str() } else { "none" };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill.to_string()}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}
