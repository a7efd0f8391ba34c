//! Static HTTP status code → reason phrase table
//!
//! The list follows the IANA Hypertext Transfer Protocol (HTTP) Status Code
//! Registry. Unless otherwise noted, a code is defined in RFC 2616.

use crate::defaults::UNKNOWN_STATUS_TITLE;

/// Every known status code with its canonical reason phrase, sorted by code.
pub static STATUS_TEXTS: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"), // RFC 2518
    (103, "Early Hints"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"),     // RFC 4918
    (208, "Already Reported"), // RFC 5842
    (226, "IM Used"),          // RFC 3229
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"), // RFC 7238
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"),         // RFC 2324
    (421, "Misdirected Request"),  // RFC 7540
    (422, "Unprocessable Entity"), // RFC 4918
    (423, "Locked"),               // RFC 4918
    (424, "Failed Dependency"),    // RFC 4918
    (425, "Reserved for WebDAV advanced collections expired proposal"), // RFC 2817
    (426, "Upgrade Required"),                // RFC 2817
    (428, "Precondition Required"),           // RFC 6585
    (429, "Too Many Requests"),               // RFC 6585
    (431, "Request Header Fields Too Large"), // RFC 6585
    (451, "Unavailable For Legal Reasons"),   // RFC 7725
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),         // RFC 2295
    (507, "Insufficient Storage"),            // RFC 4918
    (508, "Loop Detected"),                   // RFC 5842
    (510, "Not Extended"),                    // RFC 2774
    (511, "Network Authentication Required"), // RFC 6585
];

/// Look up the canonical reason phrase for `status`.
///
/// Returns `None` for codes that are not in the registry.
#[must_use]
pub fn reason_phrase(status: u16) -> Option<&'static str> {
    STATUS_TEXTS
        .binary_search_by_key(&status, |&(code, _)| code)
        .ok()
        .map(|idx| STATUS_TEXTS[idx].1)
}

/// Like [`reason_phrase`], but unknown codes resolve to [`UNKNOWN_STATUS_TITLE`].
#[must_use]
pub fn reason_phrase_or_unknown(status: u16) -> &'static str {
    reason_phrase(status).unwrap_or(UNKNOWN_STATUS_TITLE)
}

#[must_use]
pub fn is_known(status: u16) -> bool {
    reason_phrase(status).is_some()
}
