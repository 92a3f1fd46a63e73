//! Customer center commands.

use anyhow::Result;
use storefront_commerce::support::{faqs, notices, Inquiry};

use super::{SupportArgs, SupportCommand};
use crate::context::Context;

/// Run the support command.
pub fn run(args: SupportArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SupportCommand::Notices => show_notices(ctx),
        SupportCommand::Faq => show_faqs(ctx),
        SupportCommand::Inquiry { title, content } => submit_inquiry(&title, &content, ctx),
    }
}

fn show_notices(ctx: &Context) -> Result<()> {
    let notices = notices();
    if ctx.output.is_json() {
        ctx.output.json(&notices);
        return Ok(());
    }

    ctx.output.header("Notices");
    for notice in notices {
        ctx.output.list_item(&format!("{}  {}", notice.date, notice.title));
        ctx.output.info(&format!("    {}", notice.content));
    }
    Ok(())
}

fn show_faqs(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&faqs());
        return Ok(());
    }

    ctx.output.header("Frequently asked questions");
    for faq in faqs() {
        ctx.output.list_item(&format!("Q. {}", faq.question));
        ctx.output.info(&format!("    A. {}", faq.answer));
    }
    Ok(())
}

fn submit_inquiry(title: &str, content: &str, ctx: &Context) -> Result<()> {
    let inquiry = Inquiry::new(title, content)?;
    if ctx.output.is_json() {
        ctx.output.json(&inquiry);
        return Ok(());
    }

    ctx.output.success(&format!("Inquiry received: {}", inquiry.title));
    ctx.output
        .info("We will reply to your registered email address.");
    Ok(())
}
