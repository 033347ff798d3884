//! Optional study-strategy summary from a hosted summarization model.
//!
//! Best effort: callers get `None` on any failure and carry on with the run.

use anyhow::{bail, Context, Result};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SummarizerSection;

#[derive(Debug, Serialize)]
struct Req<'a> {
    inputs: &'a str,
    parameters: Params,
}

#[derive(Debug, Serialize)]
struct Params {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Resp {
    Summaries(Vec<Summary>),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct Summary {
    summary_text: String,
}

/// Summarize `text`, logging and swallowing any failure.
pub fn summarize(cfg: &SummarizerSection, text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    match summarize_blocking(cfg, text) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("summarizer unavailable: {e:#}");
            None
        }
    }
}

fn summarize_blocking(cfg: &SummarizerSection, text: &str) -> Result<String> {
    // main runs inside a tokio runtime; nesting block_on there would panic.
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        tokio::task::block_in_place(|| handle.block_on(summarize_async(cfg, text)))
    } else {
        let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
        rt.block_on(summarize_async(cfg, text))
    }
}

async fn summarize_async(cfg: &SummarizerSection, text: &str) -> Result<String> {
    let url = endpoint(cfg);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .context("build http client")?;

    let mut req = client.post(&url).json(&request_body(cfg, text));
    if let Some(token) = api_token(cfg) {
        req = req.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    log::debug!("requesting summary from {url}");
    let resp = req.send().await.context("summarizer request")?;

    let status = resp.status();
    if !status.is_success() {
        let txt = resp.text().await.unwrap_or_default();
        bail!("summarizer error: {status} {txt}");
    }

    let body: serde_json::Value = resp.json().await.context("parse summarizer response")?;
    parse_response(body)
}

fn endpoint(cfg: &SummarizerSection) -> String {
    format!("{}/models/{}", cfg.base_url.trim_end_matches('/'), cfg.model)
}

fn api_token(cfg: &SummarizerSection) -> Option<String> {
    cfg.api_token
        .clone()
        .or_else(|| std::env::var("HF_TOKEN").ok())
        .filter(|t| !t.trim().is_empty())
}

fn request_body<'a>(cfg: &SummarizerSection, text: &'a str) -> Req<'a> {
    Req {
        inputs: text,
        parameters: Params {
            max_length: cfg.max_length,
            min_length: cfg.min_length,
            do_sample: false,
        },
    }
}

fn parse_response(body: serde_json::Value) -> Result<String> {
    match serde_json::from_value::<Resp>(body).context("unexpected summarizer payload")? {
        Resp::Summaries(items) => match items.into_iter().next() {
            Some(s) => Ok(s.summary_text.trim().to_string()),
            None => bail!("summarizer returned no summaries"),
        },
        Resp::Error { error } => bail!("summarizer error: {error}"),
    }
}
