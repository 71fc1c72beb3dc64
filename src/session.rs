//! Line-oriented interactive session: parsing input lines into actions.
//!
//! Plain text is a search. Lines starting with `:` are commands.

/// One action requested by a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Search for the given text (may be blank; the controller rejects it).
    Search(String),
    /// Go to the next page of the current results.
    NextPage,
    /// Go to the previous page of the current results.
    PreviousPage,
    /// Jump to a specific page.
    Page(u32),
    /// Clear the results.
    Clear,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Help text listing the session commands.
pub const HELP: &str = "\
Type a query and press Enter to search.
  :next, :n        next page
  :prev, :p        previous page
  :page N          jump to page N
  :clear           clear results
  :help, :h        show this help
  :quit, :q        exit";

/// Parse one input line.
///
/// # Errors
///
/// Returns a message for unknown commands and malformed `:page` arguments.
pub fn parse_line(line: &str) -> Result<SessionCommand, String> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return Ok(SessionCommand::Search(trimmed.to_owned()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments for :{name}"));
    }

    match (name, arg) {
        ("next" | "n", None) => Ok(SessionCommand::NextPage),
        ("prev" | "p", None) => Ok(SessionCommand::PreviousPage),
        ("page", Some(n)) => match n.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(SessionCommand::Page(page)),
            _ => Err(format!("invalid page number: {n}")),
        },
        ("page", None) => Err(":page needs a page number".to_owned()),
        ("clear", None) => Ok(SessionCommand::Clear),
        ("help" | "h", None) => Ok(SessionCommand::Help),
        ("quit" | "q", None) => Ok(SessionCommand::Quit),
        (other, _) => Err(format!("unknown command :{other} (try :help)")),
    }
}
