pub const TITLE: &str = "URL Shortener";
pub const EMPTY_STATE: &str = "No URLs yet. Shorten your first URL above!";
pub const INPUT_PLACEHOLDER: &str = "Enter a long URL...";
pub const CONFIRM_HINT: &str = "[y/N]";
pub const SYNCING_HINT: &str = "(syncing with server...)";

pub const HELP: &str = "\
Commands:
  shorten <url>   shorten a URL (a bare http(s) URL works too)
  input <text>    edit the URL input without submitting
  submit          submit the current input
  copy <n>        copy the short URL of row n
  delete <n>      delete row n (asks for confirmation)
  show            redraw the list
  help            show this help
  quit            exit";
