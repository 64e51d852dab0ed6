//! What the presentation layer receives: trimmed card data for the grid and
//! the present-only sections of a project's write-up.

use crate::content::{Link, Project, ProjectId};

#[derive(Debug, PartialEq)]
pub struct CardView<'a> {
    pub id: ProjectId,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub tags: &'a [String],
    pub hidden_tags: usize,
}

impl CardView<'_> {
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_tags > 0).then(|| format!("+{}", self.hidden_tags))
    }
}

pub fn card_view(project: &Project, tag_limit: usize) -> CardView<'_> {
    let shown = project.tech.len().min(tag_limit);
    CardView {
        id: project.id,
        title: &project.title,
        subtitle: &project.subtitle,
        tags: &project.tech[..shown],
        hidden_tags: project.tech.len() - shown,
    }
}

#[derive(Debug, PartialEq)]
pub enum DetailBlock<'a> {
    Text { heading: &'static str, body: &'a str },
    List { heading: &'static str, items: &'a [String] },
    Links(&'a [Link]),
}

impl DetailBlock<'_> {
    pub fn heading(&self) -> &'static str {
        match self {
            DetailBlock::Text { heading, .. } | DetailBlock::List { heading, .. } => *heading,
            DetailBlock::Links(_) => "Links",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct DetailView<'a> {
    pub tags: &'a [String],
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub blocks: Vec<DetailBlock<'a>>,
}

impl<'a> DetailView<'a> {
    pub fn links(&self) -> &'a [Link] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                DetailBlock::Links(links) => Some(*links),
                _ => None,
            })
            .unwrap_or_default()
    }
}

fn text_block<'a>(heading: &'static str, body: &'a Option<String>) -> Option<DetailBlock<'a>> {
    body.as_deref()
        .filter(|body| !body.is_empty())
        .map(|body| DetailBlock::Text { heading, body })
}

pub fn detail_view(project: &Project) -> DetailView<'_> {
    let details = &project.details;
    let mut blocks = Vec::new();

    blocks.extend(text_block("Overview", &details.overview));
    if let Some(items) = details.abilities.as_deref().filter(|items| !items.is_empty()) {
        blocks.push(DetailBlock::List {
            heading: "Abilities",
            items,
        });
    }
    blocks.extend(text_block("Setup", &details.setup));
    blocks.extend(text_block("Architecture", &details.architecture));
    blocks.extend(text_block("Notes", &details.notes));
    if let Some(links) = details.links.as_deref().filter(|links| !links.is_empty()) {
        blocks.push(DetailBlock::Links(links));
    }

    DetailView {
        tags: &project.tech,
        title: &project.title,
        subtitle: Some(project.subtitle.as_str()).filter(|subtitle| !subtitle.is_empty()),
        blocks,
    }
}
