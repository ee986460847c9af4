//! Form commands: onboard, contact and apply.

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Local};
use dialoguer::{Confirm, Input, Select};
use hub_core::forms::{
    ContactFields, ContactForm, ContactRole, CreatorApplicationFields, CreatorApplicationForm,
    FormState, OnboardingFields, OnboardingForm,
};
use hub_core::HubError;

use super::{ApplyArgs, ContactArgs, OnboardArgs};
use crate::context::Context;

/// Run the onboard command.
pub async fn onboard(args: OnboardArgs, ctx: &Context) -> Result<()> {
    let interactive = prompts_allowed(args.no_input, ctx);
    if interactive {
        ctx.output.header("Affiliate onboarding");
    }

    let fields = OnboardingFields {
        name: field(args.name, "Name or brand", interactive)?,
        email: field(args.email, "Email", interactive)?,
        primary_channel: field(args.channel, "Primary channel", interactive)?,
        monthly_reach: field(args.reach, "Monthly reach", interactive)?,
        niches: field(args.niches, "Niches you promote", interactive)?,
    };
    let mut form = OnboardingForm::with_fields(fields);
    form.validate()?;

    let endpoint = args
        .endpoint
        .unwrap_or_else(|| ctx.config.forms.onboarding_endpoint.clone());
    ctx.output.debug(&format!("Endpoint: {}", endpoint));

    if interactive {
        let confirmed = Confirm::new()
            .with_prompt("Submit these details?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Submission cancelled");
            return Ok(());
        }
    }

    let logger = ctx.logger.for_component("forms");
    let channel = form.fields.primary_channel.clone();
    let client = ctx.fetch_client()?;

    let spinner = ctx.output.spinner(FormState::Submitting.submit_label("Submit"));
    let outcome = form.submit(&client, &endpoint).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(reply) => {
            logger
                .info_builder("onboarding submitted")
                .field("channel", channel)
                .field_bool("ok", reply.ok)
                .emit();

            if ctx.output.is_json() {
                ctx.output.json(&reply);
            } else {
                if let Some(confirmation) = form.flow().confirmation() {
                    ctx.output.success(confirmation);
                }
                if let Some(at) = reply.submitted_at.as_deref().and_then(recorded_at) {
                    ctx.output.kv("Recorded", &at);
                }
            }
            Ok(())
        }
        // Already logged by the form; show the bare message.
        Err(HubError::Submission(message)) => bail!(message),
        Err(e) => Err(e.into()),
    }
}

/// Run the contact command.
pub async fn contact(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = prompts_allowed(args.no_input, ctx);
    if interactive {
        ctx.output.header("Contact & Support");
    }

    let name = field(args.name, "Name or organization", interactive)?;
    let email = field(args.email, "Email", interactive)?;
    let role = match args.role {
        Some(role) => role.parse::<ContactRole>()?,
        None if interactive => {
            let labels: Vec<&str> = ContactRole::ALL.iter().map(|r| r.display_name()).collect();
            let choice = Select::new()
                .with_prompt("I am a")
                .items(&labels)
                .default(0)
                .interact()?;
            ContactRole::ALL[choice]
        }
        None => ContactRole::default(),
    };
    let topic = field(args.topic, "Topic", interactive)?;
    let message = field(args.message, "Message", interactive)?;

    let mut form = ContactForm::with_fields(ContactFields {
        name,
        email,
        role,
        topic,
        message,
    });
    let submitted = form.submit()?;

    ctx.logger
        .for_component("forms")
        .info_builder("contact message recorded")
        .field("role", submitted.role.display_name())
        .field("topic", submitted.topic.as_str())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&submitted);
    } else if let Some(confirmation) = form.flow().confirmation() {
        ctx.output.success(confirmation);
    }
    Ok(())
}

/// Run the apply command.
pub async fn apply(args: ApplyArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let creator = store
        .get(&args.creator)
        .with_context(|| format!("Cannot apply to '{}'", args.creator))?;

    let interactive = prompts_allowed(args.no_input, ctx);
    if interactive {
        ctx.output
            .header(&format!("Apply to {}'s affiliate program", creator.shop_name));
        ctx.output
            .kv("Commission", &creator.affiliate.commission_range());
        ctx.output
            .kv("Cookie window", &creator.affiliate.cookie_window_label());
    }

    let fields = CreatorApplicationFields {
        name: optional_field(args.name, "Name (optional)", interactive)?,
        email: field(args.email, "Email", interactive)?,
        primary_channel: field(args.channel, "Primary channel", interactive)?,
        audience_summary: field(args.audience, "Audience summary", interactive)?,
    };
    let mut form = CreatorApplicationForm::with_fields(fields);
    let receipt = form.submit(creator)?;

    ctx.logger
        .for_component("forms")
        .info_builder("creator application recorded")
        .field("creator", creator.id.as_str())
        .field("reference", receipt.reference.as_str())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.success(&receipt.message);
    if let Some(url) = &creator.affiliate.application_url {
        ctx.output.kv("Program page", url);
    }
    Ok(())
}

/// Local-time rendering of the webhook's RFC 3339 timestamp.
fn recorded_at(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|at| at.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string())
}

fn prompts_allowed(no_input: bool, ctx: &Context) -> bool {
    !no_input && !ctx.output.is_json() && console::user_attended()
}

/// A required field: the flag value, or a prompt when prompting is allowed.
/// Left blank otherwise so validation names it.
fn field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

fn optional_field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}
