//! # CLI Module
//!
//! This module provides the command-line interface layer for genrelist. It
//! implements the user-facing commands and coordinates between the token
//! provider, the filtering pipeline, and the playlist publisher.
//!
//! ## Commands
//!
//! - [`run`] - Executes the full pipeline: acquire a token, fetch the source
//!   playlist's tracks, classify artists by genre, filter, create the target
//!   playlist, and append the matching tracks in batches.
//! - [`preview`] - Runs fetch, classify, and filter only, then prints a
//!   table of the matching artists and the would-be track total. Makes no
//!   playlist writes.
//!
//! ## Error Handling Philosophy
//!
//! Fatal stage failures (token exchange, playlist creation, track append)
//! are reported through the `error!` macro, which exits with a non-zero
//! code. Degradable failures (a tracks page, a single artist lookup) are
//! absorbed inside their stages with `warning!` output, and the pipeline
//! continues on partial data.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod preview;
mod run;

pub use preview::preview;
pub use run::run;

pub(crate) fn progress_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
