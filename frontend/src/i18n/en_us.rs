pub mod common {
    pub const BRAND_NAME: &str = "Newsroom";
}

pub mod header {
    pub const NAV_NEWS: &str = "News";
    pub const NAV_TESTIMONIALS: &str = "Testimonials";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
    pub const DEFAULT_MESSAGE: &str = "Loading...";
    pub const PAGE_MESSAGE: &str = "Loading newsroom...";
}

pub mod content_card {
    pub const FEATURED_BAND: &str = "FEATURED RELEASE";
    pub const READ_MORE: &str = "Read More";
    pub const READ_LESS: &str = "Read Less";
    pub const SHARE: &str = "Share";
    pub const LINK_COPIED: &str = "Link copied";
    pub const ATTACHMENTS: &str = "Attachments";
    pub const DATE_UNAVAILABLE: &str = "Date unavailable";
    pub const SHARE_ARIA_TEMPLATE: &str = "Share \"{}\"";
    pub const DOWNLOAD_ARIA_TEMPLATE: &str = "Download {}";
}

pub mod testimonial_card {
    pub const VERIFIED: &str = "Verified";
    pub const FEATURED: &str = "Featured";
    pub const RATING_ARIA_TEMPLATE: &str = "Rated {} out of 5";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod newsroom_page {
    pub const TITLE: &str = "Press & Announcements";
    pub const SUBTITLE: &str = "Official statements, releases and updates.";
    pub const EMPTY: &str = "No announcements yet.";
    pub const REFRESH: &str = "Refresh";
}

pub mod testimonials_page {
    pub const TITLE: &str = "What People Say";
    pub const SUBTITLE: &str = "Voices from the communities we serve.";
    pub const EMPTY: &str = "No testimonials yet.";
}

pub mod not_found_page {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "The page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to the newsroom";
}
