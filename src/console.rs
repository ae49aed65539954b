use std::io::{self, Stdout, Write};

use crate::db::models::User;

pub const NO_USERS_FOUND: &str = "No users found.";

pub trait OutputInfo {
    fn show_message(&mut self, msg: &str, line_break: bool) -> io::Result<()>;

    /// Prints `caption` followed by a numbered, tab-indented line per user.
    fn show(&mut self, users: &[User], caption: &str) -> io::Result<()> {
        if users.is_empty() {
            return self.show_message(NO_USERS_FOUND, true);
        }

        self.show_message(caption, true)?;
        for (index, user) in users.iter().enumerate() {
            self.show_message(&format!("\t{}: {}", index + 1, user), true)?;
        }
        Ok(())
    }
}

pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputInfo for Console<W> {
    fn show_message(&mut self, msg: &str, line_break: bool) -> io::Result<()> {
        if line_break {
            writeln!(self.out, "{}", msg)?;
        } else {
            write!(self.out, "{}", msg)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_show_message_line_break() {
        let mut console = Console::new(Vec::new());
        console.show_message("Created user: ", false).unwrap();
        console.show_message("None", true).unwrap();
        assert_eq!(rendered(console), "Created user: None\n");
    }

    #[test]
    fn test_show_numbers_users() {
        let john = User::new("John Doe", "johndoe@example.com");
        let eduardo = User::new("Eduardo Fernandez", "eferoli@gmail.com");

        let mut console = Console::new(Vec::new());
        console.show(&[john.clone(), eduardo.clone()], "All users:").unwrap();

        assert_eq!(
            rendered(console),
            format!("All users:\n\t1: {}\n\t2: {}\n", john, eduardo)
        );
    }

    #[test]
    fn test_show_empty() {
        let mut console = Console::new(Vec::new());
        console.show(&[], "All users:").unwrap();
        assert_eq!(rendered(console), "No users found.\n");
    }
}
