//! Integration tests driving the `retype` binary over stdin/stdout.

mod basic_pipe;
mod config_custom;
mod format_check;
