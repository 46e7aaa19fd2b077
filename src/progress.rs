use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner style used while a workflow step is running.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.yellow} {wide_msg}")
        .unwrap()
        .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"])
}

/// Style used when a step finishes successfully.
pub fn ok_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.green} {wide_msg}").unwrap()
}

/// Style used when a step fails.
pub fn err_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.red} {wide_msg}").unwrap()
}

/// Start a spinner for one workflow step.
pub fn step(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg.to_string());
    pb
}

/// Finish a step spinner with a green check and the given message.
pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    pb.set_style(ok_style());
    pb.set_prefix("✔");
    pb.finish_with_message(msg.to_string());
}

/// Finish a step spinner with a red cross and the given message.
pub fn finish_err(pb: &ProgressBar, msg: &str) {
    pb.set_style(err_style());
    pb.set_prefix("✘");
    pb.finish_with_message(msg.to_string());
}
