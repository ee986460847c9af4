//! Profile and page rendering.

use anyhow::{bail, Result};
use hub_core::directory::FilterCriteria;
use hub_core::routing::Route;
use hub_core::CreatorStore;

use super::{OpenArgs, ShowArgs};
use crate::context::Context;
use crate::output::Output;
use crate::render;

const NOT_FOUND: &str = "Creator not found";

/// Run the show command.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let creator = store.get(&args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(creator);
        return Ok(());
    }

    render::creator_profile(&ctx.output, creator);
    Ok(())
}

/// Run the open command.
pub async fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let route = Route::parse(&args.path);
    ctx.output
        .debug(&format!("{} -> {} ({})", args.path, route, route.title()));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": route.path(),
            "title": route.title(),
        }));
        return Ok(());
    }

    let store = ctx.store()?;
    match &route {
        Route::Home => home(ctx, &store)?,
        Route::Directory => {
            let results = store.query(&FilterCriteria::new());
            ctx.output.header(route.title());
            render::creator_table(&ctx.output, &results.items);
            ctx.output.line("");
            ctx.output.info(&results.summary());
        }
        Route::CreatorProfile(_) => match route.resolve_creator(&store) {
            Some(creator) => render::creator_profile(&ctx.output, creator),
            None => bail!(NOT_FOUND),
        },
        Route::AffiliateOnboarding => {
            ctx.output.header(route.title());
            ctx.output
                .line("Tell us where you promote and we'll match you with creators.");
            ctx.output.list_item("hub onboard --name ... --email ...");
        }
        Route::Blog => {
            let content = ctx.content()?;
            ctx.output.header(route.title());
            render::blog_index(&ctx.output, content.posts());
        }
        Route::Contact => {
            ctx.output.header(route.title());
            ctx.output.list_item("hub contact --name ... --email ... --topic ...");
        }
        Route::PrivacyPolicy | Route::TermsOfService => {
            ctx.output.header(route.title());
            ctx.output.line(policy_text(&route));
        }
        Route::NotFound(path) => bail!("Page not found: {}", path),
    }

    Ok(())
}

fn home(ctx: &Context, store: &CreatorStore) -> Result<()> {
    let out: &Output = &ctx.output;
    out.header("Affiliate Hub");
    out.line("Vetted Etsy creators with transparent affiliate terms.");
    out.kv("Creators", &store.len().to_string());
    out.kv("Categories", &store.categories().len().to_string());

    out.header("Top creators");
    for creator in store.top_creators(ctx.config.directory.top_creators) {
        out.line("");
        render::creator_card(out, creator);
    }

    let content = ctx.content()?;
    out.header("FAQ");
    render::faq(out, content.faqs());
    Ok(())
}

fn policy_text(route: &Route) -> &'static str {
    match route {
        Route::PrivacyPolicy => {
            "We collect the details you submit through onboarding, affiliate and contact \
             forms, plus aggregated usage data. Outbound shop links may carry UTM tags. \
             Purchases happen on Etsy or affiliate networks under their own policies."
        }
        _ => {
            "The Service is an independent directory of Etsy creators and is not endorsed \
             by Etsy, Inc. We do not process payments or control product availability, \
             pricing or fulfillment."
        }
    }
}
