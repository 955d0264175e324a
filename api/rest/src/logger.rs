// Access-log line: peer, request line, status, body size, duration in ms.
pub fn logger_format() -> &'static str {
    "%a \"%r\" %s %b %Dms"
}
