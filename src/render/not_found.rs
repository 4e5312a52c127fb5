//! Standalone not-found page

use askama::Template;

use super::layout::{document, PageHead};
use super::SiteContext;
use crate::types::Result;

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

pub fn render_not_found(ctx: &SiteContext<'_>) -> Result<String> {
    document(
        ctx,
        &PageHead::new("Page Not Found", &ctx.content.meta_description),
        &NotFoundTemplate.render()?,
    )
}
