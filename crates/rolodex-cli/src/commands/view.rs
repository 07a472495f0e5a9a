use crate::commands::{format_contact_line, Context, EMPTY_BOOK};
use anyhow::Result;

pub fn view(ctx: &mut Context<'_>) -> Result<()> {
    let contacts = ctx.store.contacts().list_all()?;
    if contacts.is_empty() {
        ctx.say(EMPTY_BOOK)?;
        return ctx.say("");
    }

    for (index, contact) in contacts.iter().enumerate() {
        ctx.say(format!("{}. {}", index + 1, format_contact_line(contact)))?;
    }
    ctx.say(format!("Number of contacts: {}", contacts.len()))?;
    ctx.say("")
}

#[cfg(test)]
mod tests {
    use super::view;
    use crate::commands::testing::{run, seed, store};

    #[test]
    fn view_reports_empty_book() {
        let store = store();
        let output = run(&store, "", view);
        assert!(output.contains("Contact book is empty"));
        assert!(!output.contains("Number of contacts"));
    }

    #[test]
    fn view_lists_every_contact_once_in_order() {
        let store = store();
        seed(&store, &["Zed,3,,", "Ada,1,London,ada@email.com", "Mia,2,,"]);

        let output = run(&store, "", view);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "1. NAME: zed, NUMBER: 3, ADDRESS: None, EMAIL: None"
        );
        assert_eq!(
            lines[1],
            "2. NAME: ada, NUMBER: 1, ADDRESS: London, EMAIL: ada@email.com"
        );
        assert_eq!(
            lines[2],
            "3. NAME: mia, NUMBER: 2, ADDRESS: None, EMAIL: None"
        );
        assert_eq!(lines[3], "Number of contacts: 3");
    }
}
