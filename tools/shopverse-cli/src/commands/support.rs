//! Support bot command.

use anyhow::Result;
use serde_json::json;
use shopverse_commerce::support::SupportBot;

use super::SupportArgs;
use crate::context::Context;

/// Run the support command.
pub fn run(args: SupportArgs, ctx: &Context) -> Result<()> {
    let message = args.message.join(" ");
    let bot = SupportBot::default();
    let reply = bot.reply(&message);

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "message": message, "reply": reply }));
    } else {
        println!("{}", reply);
    }
    Ok(())
}
