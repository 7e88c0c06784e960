//! Console output for a deployment run.
//!
//! `formatter` builds the observable lines; the `display_*` helpers print them.

pub mod formatter;

pub use formatter::{
    display_error, display_message, display_new_tag, display_previous_tag, display_status,
    display_success, new_tag_line, previous_tag_line,
};
