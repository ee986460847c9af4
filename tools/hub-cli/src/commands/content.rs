//! Blog and FAQ commands.

use anyhow::{bail, Result};

use super::BlogArgs;
use crate::context::Context;
use crate::render;

/// Run the blog command.
pub async fn blog(args: BlogArgs, ctx: &Context) -> Result<()> {
    let content = ctx.content()?;

    if args.list {
        if ctx.output.is_json() {
            ctx.output.json(&content.posts());
        } else {
            ctx.output.header("Affiliate playbook");
            render::blog_index(&ctx.output, content.posts());
        }
        return Ok(());
    }

    if let Some(slug) = &args.slug {
        if content.find_post(slug).is_none() {
            ctx.output
                .warn(&format!("No post named '{}', showing the first post instead", slug));
        }
    }

    let Some(post) = content.select_post(args.slug.as_deref()) else {
        bail!("No blog posts available");
    };

    if ctx.output.is_json() {
        ctx.output.json(post);
        return Ok(());
    }

    render::blog_post(&ctx.output, post);
    Ok(())
}

/// Run the faq command.
pub async fn faq(ctx: &Context) -> Result<()> {
    let content = ctx.content()?;

    if ctx.output.is_json() {
        ctx.output.json(&content.faqs());
        return Ok(());
    }

    ctx.output.header("Frequently asked questions");
    render::faq(&ctx.output, content.faqs());
    Ok(())
}
