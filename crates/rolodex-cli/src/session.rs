use crate::commands::{add, delete, edit, search, view, Command, Context};
use crate::console::Console;
use anyhow::Result;
use rolodex_store::Store;
use tracing::debug;

const INTRO: &str = "Enter \"add\" to add a contact
Enter \"edit\" to edit a contact
Enter \"search\" to find a contact
Enter \"view\" to view contacts
Enter \"delete\" to delete a contact
Enter \"exit\" to quit
";

pub struct Session<'a> {
    ctx: Context<'a>,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a Store, console: &'a mut dyn Console) -> Self {
        Self {
            ctx: Context { store, console },
        }
    }

    /// Reads and runs commands until `exit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        self.ctx.say(INTRO)?;
        loop {
            let Some(line) = self.ctx.prompt("Enter a command > ")? else {
                debug!("input closed");
                return Ok(());
            };
            let Some(command) = Command::from_input(&line) else {
                self.ctx.say("Enter a valid command")?;
                continue;
            };
            debug!(?command, "dispatching command");
            match command {
                Command::Add => add::add(&mut self.ctx)?,
                Command::Edit => edit::edit(&mut self.ctx)?,
                Command::Search => search::search(&mut self.ctx)?,
                Command::View => view::view(&mut self.ctx)?,
                Command::Delete => delete::delete(&mut self.ctx)?,
                Command::Exit => return Ok(()),
            }
        }
    }
}
