use crate::commands::Context;
use anyhow::Result;
use rolodex_core::parse_record;
use tracing::debug;

const FORMAT_HELP: &str = "Omitted fields should be left blank. For example, to enter a contact with the address omitted you can enter it as:\nJon Carl,032566778,,joncarl@email.com";

pub fn add(ctx: &mut Context<'_>) -> Result<()> {
    let Some(raw) = ctx.prompt("How many contacts do you want to add > ")? else {
        return Ok(());
    };
    let count: i64 = match raw.trim().parse() {
        Ok(count) => count,
        Err(_) => return ctx.say("Enter a valid number"),
    };
    if count <= 0 {
        return ctx.say("Number should not be zero or less");
    }

    for index in 1..=count {
        let message = format!(
            "Enter contact details of contact {index} in the form \"name,number,address,email\": "
        );
        let Some(line) = ctx.prompt(&message)? else {
            debug!(index, "input closed during add");
            return Ok(());
        };
        add_entry(ctx, &line)?;
    }
    Ok(())
}

fn add_entry(ctx: &mut Context<'_>, line: &str) -> Result<()> {
    let record = match parse_record(line) {
        Ok(record) => record,
        Err(err) => {
            debug!(error = %err, "malformed contact entry");
            ctx.say(FORMAT_HELP)?;
            return ctx.say("");
        }
    };

    let created = ctx.store.contacts().create(record);
    match created {
        Ok(contact) => {
            debug!(name = %contact.name, "contact added");
            ctx.say(format!("Contact {} added", contact.name))
        }
        Err(err) => ctx.report_rejection(err),
    }
}
