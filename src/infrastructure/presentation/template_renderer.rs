//! Summary template rendering
//!
//! The frame template is plain HTML with two placeholders:
//! `{{columns_class}}` for the layout token and `{{cards}}` for the
//! character cards, which are rendered here.

use std::fmt::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::application::dto::{CharacterSummaryDto, SummaryViewModel, TraitEntryDto};
use crate::application::ports::outbound::TemplateRendererPort;
use crate::application::services::escape_html;
use crate::domain::value_objects::ActorId;

const COLUMNS_PLACEHOLDER: &str = "{{columns_class}}";
const CARDS_PLACEHOLDER: &str = "{{cards}}";

pub struct FileTemplateRenderer {
    template_path: PathBuf,
}

impl FileTemplateRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }
}

#[async_trait]
impl TemplateRendererPort for FileTemplateRenderer {
    async fn render(&self, view: &SummaryViewModel) -> Result<String> {
        let template = tokio::fs::read_to_string(&self.template_path)
            .await
            .with_context(|| format!("Failed to read template {}", self.template_path.display()))?;
        render_template(&template, view)
    }
}

/// Fill the frame `template` with the cards of `view`
pub fn render_template(template: &str, view: &SummaryViewModel) -> Result<String> {
    if !template.contains(CARDS_PLACEHOLDER) {
        bail!("Template has no {} placeholder", CARDS_PLACEHOLDER);
    }

    let cards = view
        .characters
        .iter()
        .map(render_card)
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    Ok(template
        .replace(COLUMNS_PLACEHOLDER, &escape_html(&view.columns_class))
        .replace(CARDS_PLACEHOLDER, &cards))
}

fn render_card(character: &CharacterSummaryDto) -> Result<String, fmt::Error> {
    let mut card = String::new();
    writeln!(
        card,
        r#"    <div class="character-card" data-actor-id="{}">"#,
        escape_html(character.id.as_str())
    )?;
    writeln!(
        card,
        r#"      <h2 class="character-name">{}</h2>"#,
        escape_html(&character.name)
    )?;
    render_section(&mut card, "edges", "Edges", &character.id, character.edges.as_deref())?;
    render_section(
        &mut card,
        "hindrances",
        "Hindrances",
        &character.id,
        character.hindrances.as_deref(),
    )?;
    card.push_str("    </div>");
    Ok(card)
}

fn render_section(
    out: &mut String,
    class: &str,
    heading: &str,
    actor_id: &ActorId,
    entries: Option<&[TraitEntryDto]>,
) -> fmt::Result {
    writeln!(out, r#"      <section class="{}"><h3>{}</h3>"#, class, heading)?;
    match entries {
        Some(entries) => {
            out.push_str("        <ul>\n");
            for entry in entries {
                writeln!(
                    out,
                    r#"          <li><a class="item-link" data-item-id="{}" data-actor-id="{}">{}</a></li>"#,
                    escape_html(entry.id.as_str()),
                    escape_html(actor_id.as_str()),
                    escape_html(&entry.name)
                )?;
            }
            out.push_str("        </ul>\n");
        }
        None => out.push_str("        <p class=\"none\">None</p>\n"),
    }
    out.push_str("      </section>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ItemId;

    const FRAME: &str = r#"<div class="swade-summary {{columns_class}}">{{cards}}</div>"#;

    fn view() -> SummaryViewModel {
        SummaryViewModel {
            characters: vec![CharacterSummaryDto {
                name: "Red <the Bold>".to_string(),
                id: ActorId::from("a1"),
                edges: Some(vec![TraitEntryDto {
                    name: "Quick".to_string(),
                    id: ItemId::from("e1"),
                }]),
                hindrances: None,
            }],
            columns_class: "cols-3".to_string(),
        }
    }

    #[test]
    fn test_render_cards() {
        let html = render_template(FRAME, &view()).unwrap();
        assert!(html.starts_with(r#"<div class="swade-summary cols-3">"#));
        assert!(html.contains("Red &lt;the Bold&gt;"));
        assert!(html.contains(r#"<a class="item-link" data-item-id="e1" data-actor-id="a1">Quick</a>"#));
        assert!(html.contains(r#"<section class="hindrances"><h3>Hindrances</h3>"#));
        assert!(html.contains(r#"<p class="none">None</p>"#));
    }

    #[test]
    fn test_empty_roster() {
        let empty = SummaryViewModel {
            characters: vec![],
            columns_class: "cols-1".to_string(),
        };
        let html = render_template(FRAME, &empty).unwrap();
        assert_eq!(html, r#"<div class="swade-summary cols-1"></div>"#);
    }

    #[test]
    fn test_template_without_cards_placeholder() {
        assert!(render_template("<div></div>", &view()).is_err());
    }

    #[tokio::test]
    async fn test_render_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.html");
        std::fs::write(&path, FRAME).unwrap();

        let html = FileTemplateRenderer::new(&path).render(&view()).await.unwrap();
        assert!(html.contains("data-item-id=\"e1\""));

        let missing = FileTemplateRenderer::new(dir.path().join("nope.html"));
        assert!(missing.render(&view()).await.is_err());
    }
}
