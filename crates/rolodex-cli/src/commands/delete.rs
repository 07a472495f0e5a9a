use crate::commands::{Context, EMPTY_BOOK};
use anyhow::Result;
use tracing::debug;

pub fn delete(ctx: &mut Context<'_>) -> Result<()> {
    if ctx.store.contacts().count()? == 0 {
        ctx.say(EMPTY_BOOK)?;
        return ctx.say("");
    }

    let Some(name) =
        ctx.prompt("Enter the name of the person whose contact you want to delete: ")?
    else {
        return Ok(());
    };
    let name = name.trim().to_lowercase();
    if ctx.store.contacts().delete(&name)? {
        debug!(%name, "contact deleted");
        ctx.say(format!("Contact {name} deleted"))
    } else {
        ctx.say(format!("There is no contact named {name}"))
    }
}
