use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

const GITHUB_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("steambox/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub files: BTreeMap<String, SnippetFile>,
}

impl Snippet {
    pub fn file_content(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).and_then(|f| f.content.as_deref())
    }
}

#[derive(Debug, Serialize)]
struct SnippetUpdate<'a> {
    files: &'a BTreeMap<String, SnippetFile>,
}

pub trait PasteSink {
    fn fetch_snippet(&self, id: &str) -> Result<Snippet>;
    fn update_snippet(&self, id: &str, files: &BTreeMap<String, SnippetFile>) -> Result<()>;
}

pub struct GistClient {
    client: Client,
    username: String,
    token: String,
}

impl GistClient {
    pub fn new(username: &str, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("failed to create github http client")?;
        Ok(Self {
            client,
            username: username.trim().to_string(),
            token: token.trim().to_string(),
        })
    }

    fn gist_url(&self, id: &str) -> String {
        format!("{GITHUB_API_BASE}/gists/{}", id.trim())
    }
}

impl PasteSink for GistClient {
    fn fetch_snippet(&self, id: &str) -> Result<Snippet> {
        let url = self.gist_url(id);
        let snippet = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .with_context(|| format!("send gist request: {url}"))?
            .error_for_status()
            .with_context(|| format!("gist HTTP status: {url}"))?
            .json::<Snippet>()
            .with_context(|| format!("decode gist {id}"))?;
        tracing::debug!(gist = id, files = snippet.files.len(), "fetched gist");
        Ok(snippet)
    }

    fn update_snippet(&self, id: &str, files: &BTreeMap<String, SnippetFile>) -> Result<()> {
        let url = self.gist_url(id);
        self.client
            .patch(&url)
            .basic_auth(&self.username, Some(&self.token))
            .json(&SnippetUpdate { files })
            .send()
            .with_context(|| format!("send gist update: {url}"))?
            .error_for_status()
            .with_context(|| format!("gist update HTTP status: {url}"))?;
        Ok(())
    }
}
