//! Terminal commands and how they drive the board view.

use board_client::{BoardApi, BoardView, Mode};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  post [text]        set the draft to <text> and submit it (no text: resubmit the draft)
  clear              clear the draft
  edit <n> <text>    replace the text of post #n on this page
  cancel             leave edit mode
  delete <n>         delete post #n on this page
  page <n>           go to page n
  size <n>           show n posts per page
  reload             fetch the list again
  help               show this help
  quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Post(Option<String>),
    Clear,
    Edit { index: usize, text: String },
    Cancel,
    Delete(usize),
    Page(usize),
    Size(usize),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a number")]
    MissingNumber(&'static str),

    #[error("`{0}` needs text")]
    MissingText(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim_start();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim_start();

        match name.trim() {
            "post" => Ok(Command::Post(Some(rest).filter(|r| !r.is_empty()).map(String::from))),
            "clear" => Ok(Command::Clear),
            "edit" => {
                let (index, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let index = number(index, "edit")?;
                if text.is_empty() {
                    return Err(ParseError::MissingText("edit"));
                }
                Ok(Command::Edit {
                    index,
                    text: text.to_string(),
                })
            }
            "cancel" => Ok(Command::Cancel),
            "delete" => Ok(Command::Delete(number(rest, "delete")?)),
            "page" => Ok(Command::Page(number(rest, "page")?)),
            "size" => Ok(Command::Size(number(rest, "size")?)),
            "reload" => Ok(Command::Reload),
            "help" | "" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn number(raw: &str, command: &'static str) -> Result<usize, ParseError> {
    raw.trim()
        .parse()
        .map_err(|_| ParseError::MissingNumber(command))
}

/// Apply `command` to the view. Returns a notice for the user, if any.
pub async fn apply<A: BoardApi>(view: &mut BoardView<A>, command: Command) -> Option<String> {
    match command {
        Command::Post(text) => {
            if let Some(text) = text {
                view.set_draft(text);
            }
            view.submit().await.then(|| "posted".to_string())
        }
        Command::Clear => {
            view.clear_draft();
            None
        }
        Command::Edit { index, text } => {
            let Some(id) = visible_id(view, index) else {
                return Some(format!("no post #{index} on this page"));
            };
            view.begin_edit(&id);
            view.set_edit_buffer(text);
            view.save_edit().await.then(|| "saved".to_string())
        }
        Command::Cancel => {
            if matches!(view.mode(), Mode::Idle) {
                return Some("not editing".to_string());
            }
            view.cancel_edit();
            None
        }
        Command::Delete(index) => {
            let Some(id) = visible_id(view, index) else {
                return Some(format!("no post #{index} on this page"));
            };
            view.delete(&id).await.then(|| "deleted".to_string())
        }
        Command::Page(page) => {
            view.set_page(page);
            None
        }
        Command::Size(size) => {
            view.set_page_size(size);
            None
        }
        Command::Reload => {
            view.mount().await;
            None
        }
        Command::Help => Some(HELP.to_string()),
        Command::Quit => None,
    }
}

/// Id of the `index`-th (1-based) post on the current page.
fn visible_id<A: BoardApi>(view: &BoardView<A>, index: usize) -> Option<String> {
    index
        .checked_sub(1)
        .and_then(|i| view.visible_posts().get(i))
        .map(|p| p.id.to_string())
}
