use crate::commands::Context;
use anyhow::Result;
use rolodex_store::repo::ContactUpdate;
use tracing::debug;

pub fn edit(ctx: &mut Context<'_>) -> Result<()> {
    let Some(name) = ctx.prompt("Enter the name of the person whose contact you want to edit: ")?
    else {
        return Ok(());
    };
    let Some(current) = ctx.store.contacts().get(&name)? else {
        return ctx.say("Contact does not exist.");
    };

    let mut answers: [String; 4] = Default::default();
    for (answer, label) in answers.iter_mut().zip(["name", "number", "address", "email"]) {
        let Some(value) = ctx.prompt(&format!("Enter new {label}: "))? else {
            debug!(name = %current.name, "input closed during edit");
            return Ok(());
        };
        *answer = value;
    }
    let [name, number, address, email] = answers;

    let update = ContactUpdate {
        name: Some(name),
        number: Some(number),
        address: Some(address),
        email: Some(email),
    };
    if update.is_empty() {
        return ctx.say(format!("Contact {} unchanged", current.name));
    }

    let updated = ctx.store.contacts().update(&current.name, update);
    match updated {
        Ok(contact) => {
            debug!(from = %current.name, to = %contact.name, "contact updated");
            ctx.say(format!("Contact {} updated", contact.name))
        }
        Err(err) => ctx.report_rejection(err),
    }
}

#[cfg(test)]
mod tests {
    use super::edit;
    use crate::commands::testing::{run, seed, store};

    #[test]
    fn edit_unknown_contact_reports_missing() {
        let store = store();
        seed(&store, &["Ada,111,,"]);
        let output = run(&store, "grace\n", edit);
        assert!(output.contains("Contact does not exist."));
        assert!(!output.contains("Enter new name"));
    }

    #[test]
    fn edit_with_blank_answers_keeps_record() {
        let store = store();
        seed(&store, &["Ada,111,London,ada@email.com"]);
        let before = store.contacts().get("ada").expect("get").expect("exists");

        let output = run(&store, "ADA\n\n\n\n\n", edit);
        assert!(output.contains("Contact ada unchanged"));

        let after = store.contacts().get("ada").expect("get").expect("exists");
        assert_eq!(after, before);
    }

    #[test]
    fn edit_replaces_only_answered_fields() {
        let store = store();
        seed(&store, &["Ada,111,London,"]);

        let output = run(&store, "ada\nAda Lovelace\n\n\nada@byron.org\n", edit);
        assert!(output.contains("Contact ada lovelace updated"));

        let contact = store
            .contacts()
            .get("Ada Lovelace")
            .expect("get")
            .expect("exists");
        assert_eq!(contact.number, "111");
        assert_eq!(contact.address.as_deref(), Some("London"));
        assert_eq!(contact.email.as_deref(), Some("ada@byron.org"));
        assert!(store.contacts().get("ada").expect("get").is_none());
    }

    #[test]
    fn edit_rejects_taking_another_contacts_number() {
        let store = store();
        seed(&store, &["Ada,111,,", "Grace,222,,"]);

        let output = run(&store, "grace\n\n111\n\n\n", edit);
        assert!(output.contains("Number already exists"));

        let grace = store.contacts().get("grace").expect("get").expect("exists");
        assert_eq!(grace.number, "222");
    }
}
