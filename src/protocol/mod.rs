//! Editor protocol
//!
//! One JSON array per line in, one JSON array per line out:
//!
//! ```text
//! ["version"]                               → ["version", "0.4.0"]
//! ["syntax", lang, source]                  → ["syntax", [[{row, col, length, color}, ...], ...]]
//! ["textobj", lang, source, col, row]       → ["textobj", {type, start, end}] | ["textobj", "not found"]
//! anything else                             → ["error", "invalid command"]
//! ```

mod request;
mod response;
mod server;

pub use request::Request;
pub use response::{encode_lines, Response, WireNode, WirePoint, WireRun, FILL_TO_LINE_END};
pub use server::Server;
