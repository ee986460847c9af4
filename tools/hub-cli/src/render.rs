//! Page renderers shared by several commands.

use console::style;
use hub_core::catalog::CreatorRecord;
use hub_core::content::{BlogPost, FaqItem};
use hub_core::display::{format_count, format_rating};

use crate::output::{tone_badge, truncate, Output};

const TABLE_WIDTHS: [usize; 6] = [22, 18, 6, 11, 12, 18];

/// Creator list as a table, one row per creator.
pub fn creator_table(out: &Output, creators: &[&CreatorRecord]) {
    out.table_row(
        &["SHOP", "CATEGORY", "RATING", "SALES", "COMMISSION", "STATUS"],
        &TABLE_WIDTHS,
    );
    for creator in creators {
        let shop = truncate(&creator.shop_name, TABLE_WIDTHS[0]);
        let category = truncate(&creator.primary_category, TABLE_WIDTHS[1]);
        let rating = format_rating(creator.rating);
        let sales = format_count(creator.sales);
        let commission = creator.affiliate.base_commission_label();
        let status = tone_badge(
            creator.vetting_status.badge_label(),
            creator.vetting_status.tone(),
        );
        out.table_row(
            &[
                shop.as_str(),
                category.as_str(),
                rating.as_str(),
                sales.as_str(),
                commission.as_str(),
                status.as_str(),
            ],
            &TABLE_WIDTHS,
        );
    }
}

/// Compact card: name, headline numbers and the featured product.
pub fn creator_card(out: &Output, creator: &CreatorRecord) {
    out.line(&format!(
        "{}  {}",
        style(&creator.shop_name).bold(),
        tone_badge(
            creator.vetting_status.badge_label(),
            creator.vetting_status.tone()
        )
    ));
    out.line(&format!(
        "  {} \u{00b7} {} \u{00b7} {} reviews \u{00b7} {} sales",
        creator.primary_category,
        format_rating(creator.rating),
        format_count(creator.review_count),
        format_count(creator.sales)
    ));
    out.line(&format!("  {}", creator.short_description));
    if let Some(product) = creator.featured_product() {
        out.line(&format!(
            "  Featured: {} ({})",
            product.name,
            product.price().display_with_code()
        ));
    }
}

/// Full profile page.
pub fn creator_profile(out: &Output, creator: &CreatorRecord) {
    out.header(&creator.shop_name);
    out.kv("Owner", &creator.owner_name);
    out.kv("Location", &creator.location);
    out.kv("Category", &creator.primary_category);
    out.kv("Tags", &creator.tags.join(", "));
    out.kv(
        "Rating",
        &format!(
            "{} ({} reviews)",
            format_rating(creator.rating),
            format_count(creator.review_count)
        ),
    );
    out.kv("Sales", &format_count(creator.sales));
    out.kv(
        "Status",
        &tone_badge(
            creator.vetting_status.badge_label(),
            creator.vetting_status.tone(),
        ),
    );
    if !creator.badges.is_empty() {
        out.kv("Badges", &creator.badges.join(", "));
    }

    out.line("");
    out.line(&creator.bio);

    out.header("Vetting notes");
    out.line(&creator.vetting_notes);

    let terms = &creator.affiliate;
    out.header("Affiliate program");
    out.kv("Program", terms.program_type.as_str());
    out.kv("Commission", &terms.commission_range());
    out.kv("Cookie window", &terms.cookie_window_label());
    if let Some(clicks) = terms.min_clicks_label() {
        out.kv("Minimum traffic", &clicks);
    }
    if let Some(url) = &terms.application_url {
        out.kv("Apply", url);
    }
    out.line(&terms.notes);

    if !creator.top_products.is_empty() {
        out.header("Top products");
        for product in &creator.top_products {
            let marker = if product.is_best_seller {
                format!(" {}", style("Best seller").green())
            } else {
                String::new()
            };
            out.list_item(&format!(
                "{} \u{2014} {}{}",
                product.name,
                product.price().display_with_code(),
                marker
            ));
            out.kv("Link", &product.affiliate_url);
        }
    }

    let links = creator.social.links();
    if !links.is_empty() {
        out.header("Social");
        for (platform, url) in links {
            out.kv(platform, url);
        }
    }

    out.line("");
    out.kv("Visit shop", &creator.shop_cta_url());
}

pub fn blog_index(out: &Output, posts: &[BlogPost]) {
    for post in posts {
        out.list_item(&format!("{} ({})", style(&post.title).bold(), post.slug));
        out.line(&format!("    {}", style(post.byline()).dim()));
        out.line(&format!("    {}", post.excerpt));
    }
}

pub fn blog_post(out: &Output, post: &BlogPost) {
    out.header(&post.title);
    out.line(&style(post.byline()).dim().to_string());
    for paragraph in &post.content {
        out.line("");
        out.line(paragraph);
    }
    if !post.key_takeaways.is_empty() {
        out.header("Key takeaways");
        for takeaway in &post.key_takeaways {
            out.list_item(takeaway);
        }
    }
}

pub fn faq(out: &Output, items: &[FaqItem]) {
    for item in items {
        out.line("");
        out.line(&style(&item.question).bold().to_string());
        out.line(&item.answer);
    }
}
