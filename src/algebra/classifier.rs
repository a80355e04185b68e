use crate::domain::{ActionResult, CallOutcome, ConnectorError, Payload};
use scraper::Html;
use serde_json::{json, Map, Value};

pub const UNPARSEABLE_DETAILS: &str = "Cannot parse error details";

/// A fully read HTTP response, detached from the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpReply {
    pub status: u16,
    /// Value of the `Content-Type` header, empty when absent.
    pub content_type: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            headers: vec![],
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Stores status, body and headers on the result so the host can dump them if the action fails.
    pub fn record(&self, sink: &mut ActionResult) {
        let headers: Map<String, Value> = self
            .headers
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        sink.add_debug_data(json!({ "r_status_code": self.status }));
        sink.add_debug_data(json!({ "r_text": self.text() }));
        sink.add_debug_data(json!({ "r_headers": headers }));
    }
}

/// Classifies a reply by body presence first, then content type, then status code.
///
/// Proxies in front of the device answer with HTML error pages even for
/// JSON endpoints, so the declared content type decides how the body is read.
pub fn classify(reply: &HttpReply) -> CallOutcome {
    if reply.body.is_empty() {
        return empty_body(reply);
    }

    if reply.content_type.contains("json") {
        return json_body(reply);
    }

    if reply.content_type.contains("html") {
        return html_body(reply);
    }

    Err(ConnectorError::Unprocessable {
        status: reply.status,
        data: escape_braces(&reply.text()),
    })
}

fn empty_body(reply: &HttpReply) -> CallOutcome {
    if reply.status == 200 {
        Ok(Payload::empty())
    } else {
        Err(ConnectorError::EmptyResponse)
    }
}

fn json_body(reply: &HttpReply) -> CallOutcome {
    let value: Value = serde_json::from_slice(&reply.body)
        .map_err(|e| ConnectorError::InvalidJson(e.to_string()))?;

    if (200..399).contains(&reply.status) {
        Ok(Payload::Json(value))
    } else {
        Err(ConnectorError::Server {
            status: reply.status,
            data: escape_braces(&reply.text()),
        })
    }
}

fn html_body(reply: &HttpReply) -> CallOutcome {
    if reply.status == 200 {
        return Ok(Payload::Text(reply.text()));
    }

    let details = visible_text(&reply.body).unwrap_or_else(|| UNPARSEABLE_DETAILS.to_string());

    Err(ConnectorError::Html {
        status: reply.status,
        details: escape_braces(&details),
    })
}

/// Text content of an HTML document, one trimmed non-blank line per line.
///
/// Returns `None` when the body is not valid UTF-8.
pub fn visible_text(body: &[u8]) -> Option<String> {
    let source = std::str::from_utf8(body).ok()?;
    let document = Html::parse_document(source);
    let text = document.root_element().text().collect::<String>();

    Some(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Doubles every brace so the text passes through one round of template substitution intact.
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}
