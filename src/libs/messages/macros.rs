//! Convenient macros for application messaging and logging.
//!
//! Every user-facing line goes through one of these macros. In normal mode
//! they print to the terminal; in debug mode (`TASKDECK_DEBUG` or `RUST_LOG`
//! set) they are routed to `tracing` so output interleaves with the
//! structured log of fetches, cache hits and toggles.
//!
//! ## Output Routing
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Macro Call    │    │   Debug Mode    │    │   Output        │
//! │   msg_info!()   │───▶│   Detection     │───▶│   Routing       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          │                       │                       │
//!          ▼                       ▼                       ▼
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Message Content │    │ TASKDECK_DEBUG  │    │ tracing::info!  │
//! │ + Level Info    │    │ or RUST_LOG?    │    │ OR println!     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_error!`**: Error messages with ❌ prefix
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//!
//! ## Usage Examples
//!
//! ```rust,ignore
//! use taskdeck::{msg_error, msg_success};
//! use taskdeck::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_error!(Message::NoTasksFound, true);
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should be routed to `tracing`.
///
/// Enabled when either `TASKDECK_DEBUG` or `RUST_LOG` is set. The check runs
/// once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDECK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message. With `true`, the message is padded by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
///
/// ```text
/// ✅ Configuration saved successfully
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Emits a debug message; silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
