//! Output macros over [`Message`](super::Message).
//!
//! User-facing text goes to stdout (stderr for errors and warnings) with a
//! status prefix. Diagnostics belong to `tracing`, not to these macros.
//!
//! Each macro accepts an optional `true` second argument that surrounds the
//! message with blank lines.

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        println!("{}", $msg)
    };
    ($msg:expr, true) => {
        println!("\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        println!("✅ {}", $msg)
    };
    ($msg:expr, true) => {
        println!("\n✅ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        eprintln!("❌ {}", $msg)
    };
    ($msg:expr, true) => {
        eprintln!("\n❌ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        eprintln!("⚠️  {}", $msg)
    };
    ($msg:expr, true) => {
        eprintln!("\n⚠️  {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        println!("ℹ️  {}", $msg)
    };
    ($msg:expr, true) => {
        println!("\nℹ️  {}\n", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
