use crate::commands::{display_value, Context};
use anyhow::Result;
use rolodex_core::domain::Field;

pub fn search(ctx: &mut Context<'_>) -> Result<()> {
    let Some(name) = ctx.prompt("Enter the name of the person whose contact you want to find: ")?
    else {
        return Ok(());
    };
    let Some(contact) = ctx.store.contacts().get(&name)? else {
        return ctx.say("There is no such contact.");
    };

    for field in Field::ALL {
        ctx.say(format!(
            "{}: {}",
            field.label(),
            display_value(contact.get(field))
        ))?;
    }
    Ok(())
}
