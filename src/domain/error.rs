use thiserror::Error;

/// Every way an action can fail.
///
/// The `Display` output is the message reported back to the host, and the
/// host only distinguishes failures by that text. Variants carrying server
/// data hold it with `{` and `}` already doubled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    #[error("Error Connecting to server. Details: {0}")]
    Connection(String),
    #[error("Invalid method: {0}")]
    InvalidMethod(String),
    #[error("Empty response and no information in the header")]
    EmptyResponse,
    #[error("Unable to parse JSON response. Error: {0}")]
    InvalidJson(String),
    #[error("Error from server. Status Code: {status} Data from server: {data}")]
    Server { status: u16, data: String },
    #[error("Status Code: {status}. Data from server:\n{details}\n")]
    Html { status: u16, details: String },
    #[error("Can't process response from server. Status Code: {status} Data from server: {data}")]
    Unprocessable { status: u16, data: String },
    #[error("Invalid action parameters: {0}")]
    InvalidParameter(String),
    #[error("Response from server is missing field: {0}")]
    MissingField(String),
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),
}
