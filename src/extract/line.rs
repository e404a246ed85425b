//! Line extraction
//!
//! One function per grammar region, composed by [`parse_line`].

use crate::record::LogRecord;

use super::scanner::Scanner;

/// Extract all matching records from raw log text
///
/// Splits on newlines and applies the grammar to each line in order.
/// Output order equals input line order. Lines that fail the grammar
/// (including the empty tail after a trailing newline) contribute
/// nothing.
pub fn extract(raw: &str) -> Vec<LogRecord> {
    let mut records = Vec::new();

    for (number, line) in raw.lines().enumerate() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                if !line.is_empty() {
                    tracing::trace!("line {} does not match the grammar, skipped", number + 1);
                }
            }
        }
    }

    records
}

/// Parse a single line against the full grammar
///
/// Returns `None` unless the entire line matches. Steps mirror the
/// grammar in the module docs:
/// 1. ip run, then ` - - [`
/// 2. date up to `]`, then `] "`
/// 3. quoted request, split into method / url / discarded protocol
/// 4. `" `, status digits, space, size digits, end of line
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let mut scanner = Scanner::new(line);

    let ip = scanner.take_while1(|c| c.is_ascii_digit() || c == '.')?;
    scanner.literal(" - - [")?;

    let date = scanner.take_until1(']')?;
    scanner.literal("] \"")?;

    let request = scanner.take_until1('"')?;
    let (method, url) = split_request(request)?;
    scanner.literal("\" ")?;

    let status = scanner.take_while1(|c| c.is_ascii_digit())?;
    scanner.literal(" ")?;
    let size = scanner.take_while1(|c| c.is_ascii_digit())?;

    if !scanner.at_end() {
        return None;
    }

    Some(LogRecord {
        ip: ip.to_string(),
        date: date.to_string(),
        method: method.to_string(),
        url: url.to_string(),
        status: status.to_string(),
        size: size.to_string(),
    })
}

/// Split the quoted request region into method and url
///
/// The method is the token before the first space. The url is
/// everything after it up to the last space; it may itself contain
/// spaces. The token after the last space (the protocol, `HTTP/1.1`
/// in practice) must be present and is discarded.
fn split_request(request: &str) -> Option<(&str, &str)> {
    let (method, rest) = request.split_once(' ')?;
    if method.is_empty() {
        return None;
    }

    let (url, protocol) = rest.rsplit_once(' ')?;
    if url.is_empty() || protocol.is_empty() {
        return None;
    }

    Some((method, url))
}
