use super::{classify, HttpReply};
use crate::{
    domain::{ActionResult, CallOutcome, ConnectorError},
    AssetConfig,
};
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder};
use serde_json::Value;
use std::{fmt, str::FromStr};
use tracing::{debug, warn};

/// HTTP verbs the connector may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
            Method::Head => "head",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "patch" => Ok(Method::Patch),
            "delete" => Ok(Method::Delete),
            "head" => Ok(Method::Head),
            _ => Err(ConnectorError::InvalidMethod(s.to_string())),
        }
    }
}

/// Optional query string and JSON body of a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: Option<Vec<(String, String)>>,
    pub json: Option<Value>,
}

impl RequestOptions {
    pub fn json(body: Value) -> Self {
        Self {
            query: None,
            json: Some(body),
        }
    }
}

/// Issues single, non-retried calls against the LTM management API.
#[derive(Clone)]
pub struct LtmClient {
    base_url: String,
    username: String,
    password: String,
    client: Client,
}

impl fmt::Debug for LtmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LtmClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl LtmClient {
    pub fn new(config: &AssetConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.verify_server_cert())
            .build()?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            username: config.username().to_string(),
            password: config.password().to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Like [`LtmClient::execute`], with the verb given by name.
    ///
    /// An unknown verb fails without touching the network.
    pub async fn call(
        &self,
        endpoint: &str,
        method: &str,
        options: RequestOptions,
        sink: &mut ActionResult,
    ) -> CallOutcome {
        let method = method.parse::<Method>()?;
        self.execute(endpoint, method, options, sink).await
    }

    /// Sends one request to `base_url + endpoint` and classifies the reply.
    #[tracing::instrument(name = "LtmClient execute", skip(self, options, sink))]
    pub async fn execute(
        &self,
        endpoint: &str,
        method: Method,
        options: RequestOptions,
        sink: &mut ActionResult,
    ) -> CallOutcome {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self.request(method, &url, options);

        let reply = fetch(request).await.map_err(|e| {
            warn!("Failed to reach {}: {}", url, e);
            ConnectorError::Connection(e.to_string())
        })?;

        debug!("{} {} returned {}", method, url, reply.status);
        reply.record(sink);

        classify(&reply)
    }

    fn request(&self, method: Method, url: &str, options: RequestOptions) -> RequestBuilder {
        let request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Patch => self.client.patch(url),
            Method::Delete => self.client.delete(url),
            Method::Head => self.client.head(url),
        }
        .basic_auth(&self.username, Some(&self.password));

        let request = match options.query {
            Some(query) => request.query(&query),
            None => request,
        };

        match options.json {
            Some(body) => request.json(&body),
            None => request,
        }
    }
}

async fn fetch(request: RequestBuilder) -> Result<HttpReply, reqwest::Error> {
    let response = request.send().await?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.bytes().await?.to_vec();

    Ok(HttpReply {
        status,
        content_type,
        headers,
        body,
    })
}
