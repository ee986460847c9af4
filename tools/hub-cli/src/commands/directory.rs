//! Directory commands: creators, categories and top.

use std::time::Instant;

use anyhow::Result;
use hub_core::directory::{
    CategoryFilter, FilterCriteria, SortMode, VettingFilter, EMPTY_RESULTS_MESSAGE,
};

use super::{CreatorsArgs, TopArgs};
use crate::context::Context;
use crate::render;

/// Run the creators command.
pub async fn creators(args: CreatorsArgs, ctx: &Context) -> Result<()> {
    let criteria = criteria_from_args(&args, ctx.config.directory.default_sort)?;
    let store = ctx.store()?;

    let started = Instant::now();
    let results = store.query(&criteria);
    ctx.logger
        .for_component("directory")
        .debug_builder("query evaluated")
        .field_u64("matched", results.len() as u64)
        .field("sort", criteria.sort_by.as_str())
        .duration_ms("elapsed_ms", started.elapsed())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&results.items);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Creators \u{00b7} {} \u{00b7} {} \u{00b7} sorted by {}",
        criteria.category.display_name(),
        criteria.vetting.display_name(),
        criteria.sort_by.display_name()
    ));

    if results.is_empty() {
        ctx.output.info(EMPTY_RESULTS_MESSAGE);
        return Ok(());
    }

    if args.cards {
        for creator in results.iter() {
            ctx.output.line("");
            render::creator_card(&ctx.output, creator);
        }
    } else {
        render::creator_table(&ctx.output, &results.items);
    }

    ctx.output.line("");
    ctx.output.info(&results.summary());
    Ok(())
}

/// Run the categories command.
pub async fn categories(ctx: &Context) -> Result<()> {
    let store = ctx.store()?;

    if ctx.output.is_json() {
        ctx.output.json(&store.categories());
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in store.categories() {
        let count = store
            .all()
            .iter()
            .filter(|c| &c.primary_category == category)
            .count();
        ctx.output.list_item(&format!("{} ({})", category, count));
    }
    Ok(())
}

/// Run the top command.
pub async fn top(args: TopArgs, ctx: &Context) -> Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.directory.top_creators);
    let store = ctx.store()?;
    let top = store.top_creators(limit);

    if ctx.output.is_json() {
        ctx.output.json(&top);
        return Ok(());
    }

    ctx.output.header(&format!("Top {} creators by sales", top.len()));
    for creator in top {
        ctx.output.line("");
        render::creator_card(&ctx.output, creator);
    }
    Ok(())
}

/// Build criteria from flags. Unset flags keep the permissive defaults;
/// the sort falls back to the configured default.
fn criteria_from_args(args: &CreatorsArgs, default_sort: SortMode) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new().with_sort(default_sort);

    if let Some(search) = &args.search {
        criteria = criteria.with_search(search.as_str());
    }
    if let Some(category) = &args.category {
        criteria = criteria.with_category(category.parse::<CategoryFilter>().unwrap_or_default());
    }
    if let Some(min_rating) = args.min_rating {
        criteria = criteria.with_min_rating(min_rating);
    }
    if let Some(vetting) = &args.vetting {
        criteria = criteria.with_vetting(vetting.parse::<VettingFilter>()?);
    }
    if let Some(sort) = &args.sort {
        criteria = criteria.with_sort(sort.parse::<SortMode>()?);
    }

    Ok(criteria)
}
