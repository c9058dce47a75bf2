//! HTML panel presenter
//!
//! Writes every opened panel to `<output_dir>/<slug>.html`. The write
//! finishing is the render-complete point: item links are read back from
//! the written markup only after that.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::application::dto::{ItemLink, PanelRequest, RenderedPanel};
use crate::application::ports::outbound::PanelPort;
use crate::application::services::escape_html;

static ITEM_LINK_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a\b[^>]*\bclass="item-link"[^>]*>"#).expect("Invalid item link regex")
});

static ITEM_ID_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bdata-item-id="([^"]*)""#).expect("Invalid item id regex"));

static ACTOR_ID_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bdata-actor-id="([^"]*)""#).expect("Invalid actor id regex"));

static HTML_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp|lt|gt|quot|#39);").expect("Invalid entity regex"));

pub struct HtmlPanelPresenter {
    output_dir: PathBuf,
}

impl HtmlPanelPresenter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn document(request: &PanelRequest) -> String {
        let resize = if request.resizable { " resize: both; overflow: auto;" } else { "" };
        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<div class="app window-app dialog {classes}" style="width: {width}px; height: {height}px;{resize}">
  <header class="window-header"><h4 class="window-title">{title}</h4></header>
  <section class="window-content">
{content}
  </section>
  <footer class="dialog-buttons"><button class="dialog-button close" type="button">Close</button></footer>
</div>
</body>
</html>
"#,
            title = escape_html(&request.title),
            classes = escape_html(&request.classes.join(" ")),
            width = request.size.width,
            height = request.size.height,
            resize = resize,
            content = request.content,
        )
    }
}

#[async_trait]
impl PanelPort for HtmlPanelPresenter {
    async fn open(&self, request: PanelRequest) -> Result<RenderedPanel> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("Failed to create {}", self.output_dir.display()))?;

        let path = self.output_dir.join(format!("{}.html", slug(&request.title)));
        let html = Self::document(&request);
        tokio::fs::write(&path, &html)
            .await
            .with_context(|| format!("Failed to write panel {}", path.display()))?;

        let item_links = extract_item_links(&html);
        debug!(path = %path.display(), links = item_links.len(), "Panel rendered");

        Ok(RenderedPanel {
            location: path.display().to_string(),
            item_links,
        })
    }
}

/// Item links in `html`, in document order, without duplicates
pub fn extract_item_links(html: &str) -> Vec<ItemLink> {
    let mut links: Vec<ItemLink> = Vec::new();
    for tag in ITEM_LINK_TAG.find_iter(html) {
        let tag = tag.as_str();
        let item_id = ITEM_ID_ATTR.captures(tag).map(|c| unescape_html(&c[1]));
        let actor_id = ACTOR_ID_ATTR.captures(tag).map(|c| unescape_html(&c[1]));
        if let (Some(item_id), Some(actor_id)) = (item_id, actor_id) {
            let link = ItemLink::new(item_id, actor_id);
            if !links.contains(&link) {
                links.push(link);
            }
        }
    }
    links
}

/// Reverse of `escape_html` for attribute values
fn unescape_html(text: &str) -> String {
    HTML_ENTITY
        .replace_all(text, |caps: &regex::Captures| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        })
        .into_owned()
}

/// File-name-safe version of a panel title
fn slug(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "panel".to_string()
    } else {
        slug
    }
}
