//! Extraction Module
//!
//! Applies the fixed access-log line grammar and produces one
//! [`LogRecord`](crate::record::LogRecord) per matching line.
//!
//! ## Line Grammar
//!
//! ```text
//! 127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 512
//! └───┬───┘     └───────────┬────────────┘   └┬┘ └────┬─────┘ └──┬───┘  └┬┘ └┬┘
//!     ip                  date             method    url      protocol status size
//! ```
//!
//! Field by field, the whole line must match:
//! - ip:       one or more characters from {digit, `.`}
//! - literal   ` - - [`
//! - date:     one or more characters excluding `]`
//! - literal   `] "`
//! - method:   one or more non-space characters, then a space
//! - url:      one or more characters excluding `"`, up to the last
//!             space inside the quotes; the token after that space
//!             (`HTTP/1.1` and friends) is required but discarded
//! - literal   `" `
//! - status:   one or more ASCII digits, then a space
//! - size:     one or more ASCII digits, then end of line
//!
//! A line that fails any step yields no record: misses are skipped
//! silently, never reported as errors. The grammar is implemented as an
//! explicit scanner rather than a regex, so each step above maps to one
//! call in [`parse_line`].

mod line;
mod scanner;

pub use line::{extract, parse_line};
