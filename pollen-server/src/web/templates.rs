//! Askama templates for the web frontend.

use askama::Template;

use super::views::{IndexView, RegionView, ZipView};

/// Home page: region list and postal-code form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: IndexView,
}

/// Three-day forecast for one region.
#[derive(Template)]
#[template(path = "region.html")]
pub struct RegionTemplate {
    pub view: RegionView,
}

/// Seven-day forecast for one postal code.
#[derive(Template)]
#[template(path = "zip.html")]
pub struct ZipTemplate {
    pub view: ZipView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
