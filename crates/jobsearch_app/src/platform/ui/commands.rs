use jobsearch_core::{AppViewModel, ApplicationCell, Msg, SortKey};

pub const HELP: &str = "\
Type words and press Enter to search. Commands:
  :next | :n            next page
  :prev | :p            previous page
  :page N               go to page N
  :sort                 toggle publication date order
  :open N               show the description of row N
  :close                hide the description
  :copy N [C]           copy the application email of row N, or its contact email C
  :clear                clear the search
  :help                 show this text
  :quit | :q            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search(String),
    Next,
    Previous,
    Page(u32),
    Sort,
    Open(usize),
    Close,
    /// Row, then an optional contact index; both 1-based.
    Copy(usize, Option<usize>),
    Clear,
    Help,
    Quit,
}

/// Parses one input line. Anything not starting with `:` is a search.
pub fn parse(line: &str) -> Result<UiCommand, String> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Ok(UiCommand::Search(line.to_string()));
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match (name, args.as_slice()) {
        ("next" | "n", []) => UiCommand::Next,
        ("prev" | "p", []) => UiCommand::Previous,
        ("page", [n]) => UiCommand::Page(number(n)?),
        ("sort", []) => UiCommand::Sort,
        ("open", [n]) => UiCommand::Open(number(n)?),
        ("close", []) => UiCommand::Close,
        ("copy", [n]) => UiCommand::Copy(number(n)?, None),
        ("copy", [n, c]) => UiCommand::Copy(number(n)?, Some(number(c)?)),
        ("clear", []) => UiCommand::Clear,
        ("help" | "h" | "?", []) => UiCommand::Help,
        ("quit" | "q", []) => UiCommand::Quit,
        _ => return Err(format!("Unknown command `:{command}`. Type :help")),
    };
    Ok(command)
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, String> {
    word.parse().map_err(|_| format!("`{word}` is not a number"))
}

/// Turns a command into core messages, checked against what is on screen.
///
/// `Help` and `Quit` are handled by the caller and map to nothing here.
pub fn to_msgs(command: UiCommand, view: &AppViewModel) -> Result<Vec<Msg>, String> {
    let msgs = match command {
        UiCommand::Search(query) => vec![Msg::InputChanged(query), Msg::SearchSubmitted],
        UiCommand::Clear => vec![Msg::SearchCleared],
        UiCommand::Sort => vec![Msg::SortToggled(SortKey::PublicationDate)],
        UiCommand::Next => {
            let pages = pagination(view)?;
            if !pages.has_next {
                return Err("Already on the last page".to_string());
            }
            vec![Msg::PageChanged(pages.current_page + 1)]
        }
        UiCommand::Previous => {
            let pages = pagination(view)?;
            if !pages.has_previous {
                return Err("Already on the first page".to_string());
            }
            vec![Msg::PageChanged(pages.current_page - 1)]
        }
        UiCommand::Page(page) => {
            let pages = pagination(view)?;
            if page == 0 || page > pages.total_pages {
                return Err(format!("Pick a page from 1 to {}", pages.total_pages));
            }
            vec![Msg::PageChanged(page)]
        }
        UiCommand::Open(row) => {
            let job_id = row_at(view, row)?.job_id.clone();
            vec![Msg::DetailOpened { job_id }]
        }
        UiCommand::Close => {
            if view.detail.is_none() {
                return Err("No description is open".to_string());
            }
            vec![Msg::DetailClosed]
        }
        UiCommand::Copy(row, contact) => {
            let row = row_at(view, row)?;
            let email = match contact {
                None => match &row.application {
                    ApplicationCell::Email { email, .. } => email.clone(),
                    _ => return Err("This job has no application email".to_string()),
                },
                Some(index) => index
                    .checked_sub(1)
                    .and_then(|i| row.contact_emails.get(i))
                    .map(|contact| contact.email.clone())
                    .ok_or_else(|| {
                        format!("Pick a contact email from 1 to {}", row.contact_emails.len())
                    })?,
            };
            vec![Msg::CopyRequested { email }]
        }
        UiCommand::Help | UiCommand::Quit => Vec::new(),
    };
    Ok(msgs)
}

fn pagination(view: &AppViewModel) -> Result<jobsearch_core::PaginationView, String> {
    view.pagination
        .ok_or_else(|| "There are no results to page through".to_string())
}

fn row_at(view: &AppViewModel, row: usize) -> Result<&jobsearch_core::JobRowView, String> {
    row.checked_sub(1)
        .and_then(|i| view.rows.get(i))
        .ok_or_else(|| match view.rows.len() {
            0 => "There are no rows on this page".to_string(),
            n => format!("Pick a row from 1 to {n}"),
        })
}
