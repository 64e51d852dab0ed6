use std::collections::{HashMap, HashSet, hash_map::Entry};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

mod catalog;

pub use catalog::builtin_catalog;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: &str) -> Self {
        CategoryId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

/// Symbolic icon reference; painting it is up to the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Workflow,
    Brain,
    MessageSquare,
    Globe,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub display_name: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub subtitle: String,
    pub category: CategoryId,
    pub tech: Vec<String>,
    #[serde(default)]
    pub details: ProjectDetails,
}

/// Serialized shape of a content file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub projects: Vec<Project>,
}

/// A category paired with the projects filed under it, in catalog order.
#[derive(Debug)]
pub struct Section<'a> {
    pub category: &'a Category,
    pub projects: Vec<&'a Project>,
}

/// Read-only view over a catalog with the category grouping computed once.
pub struct ContentStore {
    categories: Vec<Category>,
    projects: Vec<Project>,
    by_category: HashMap<CategoryId, Vec<usize>>,
    by_id: HashMap<ProjectId, usize>,
}

impl ContentStore {
    pub fn new(catalog: Catalog) -> Self {
        let Catalog {
            categories,
            projects,
        } = catalog;

        let known_categories: HashSet<&CategoryId> =
            categories.iter().map(|category| &category.id).collect();
        for project in &projects {
            if !known_categories.contains(&project.category) {
                tracing::warn!(
                    project = project.id.0,
                    category = project.category.as_str(),
                    "project references an unknown category and will not be displayed"
                );
            }
        }

        let mut by_id = HashMap::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            match by_id.entry(project.id) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        project = project.id.0,
                        "duplicate project id in catalog, keeping the first entry"
                    );
                }
            }
        }

        let by_category = projects
            .iter()
            .enumerate()
            .map(|(index, project)| (project.category.clone(), index))
            .into_group_map();

        Self {
            categories,
            projects,
            by_category,
            by_id,
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_catalog())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.by_id.get(&id).map(|&index| &self.projects[index])
    }

    pub fn projects_in(&self, category: &CategoryId) -> Vec<&Project> {
        self.by_category
            .get(category)
            .map(|indices| indices.iter().map(|&index| &self.projects[index]).collect())
            .unwrap_or_default()
    }

    /// Categories that have at least one project, in declaration order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.categories
            .iter()
            .filter_map(|category| {
                let projects = self.projects_in(&category.id);
                if projects.is_empty() {
                    None
                } else {
                    Some(Section { category, projects })
                }
            })
            .collect()
    }

    pub fn to_catalog(&self) -> Catalog {
        Catalog {
            categories: self.categories.clone(),
            projects: self.projects.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: u32, category: &str, tech: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {}", id),
            subtitle: format!("Subtitle {}", id),
            category: CategoryId::new(category),
            tech: tech.iter().map(|tag| tag.to_string()).collect(),
            details: ProjectDetails::default(),
        }
    }

    /// Four categories, only `web-apps` populated.
    pub(crate) fn web_apps_only() -> ContentStore {
        let mut catalog = builtin_catalog();
        catalog.projects = vec![
            project(403, "web-apps", &["JavaScript", "LLM", "Netlify"]),
            project(404, "web-apps", &["JavaScript"]),
        ];
        ContentStore::new(catalog)
    }

    #[test]
    fn test_builtin_catalog_references_known_categories() {
        let store = ContentStore::builtin();
        assert_eq!(store.categories().len(), 4);
        for project in store.projects() {
            assert!(
                store
                    .categories()
                    .iter()
                    .any(|category| category.id == project.category),
                "project {} has unknown category",
                project.id.0
            );
        }
    }

    #[test]
    fn test_builtin_project_ids_are_unique() {
        let store = ContentStore::builtin();
        let ids: HashSet<ProjectId> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), store.projects().len());
    }

    #[test]
    fn test_projects_in_preserves_insertion_order() {
        let store = ContentStore::builtin();
        let ids: Vec<u32> = store
            .projects_in(&CategoryId::new("automations"))
            .iter()
            .map(|project| project.id.0)
            .collect();
        assert_eq!(ids, vec![101, 103, 104]);
    }

    #[test]
    fn test_sections_skip_empty_categories() {
        let store = web_apps_only();
        let sections = store.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].category.id, CategoryId::new("web-apps"));
        assert_eq!(sections[0].projects.len(), 2);
        assert!(store.projects_in(&CategoryId::new("ai-integrations")).is_empty());
    }

    #[test]
    fn test_orphan_project_is_not_displayed() {
        let mut catalog = builtin_catalog();
        catalog.projects = vec![
            project(1, "web-apps", &[]),
            project(2, "retired-category", &[]),
        ];
        let store = ContentStore::new(catalog);

        let displayed: Vec<u32> = store
            .sections()
            .iter()
            .flat_map(|section| section.projects.iter().map(|p| p.id.0))
            .collect();
        assert_eq!(displayed, vec![1]);
        assert!(store.project(ProjectId(2)).is_some());
    }

    #[test]
    fn test_duplicate_id_keeps_first_entry() {
        let mut catalog = builtin_catalog();
        let mut first = project(7, "web-apps", &[]);
        first.title = "first".to_string();
        let mut second = project(7, "web-apps", &[]);
        second.title = "second".to_string();
        catalog.projects = vec![first, second];

        let store = ContentStore::new(catalog);
        assert_eq!(store.project(ProjectId(7)).unwrap().title, "first");
    }

    #[test]
    fn test_details_deserialize_with_missing_fields() {
        let json = r#"{
            "id": 7,
            "title": "Bot",
            "subtitle": "",
            "category": "telegram-bots",
            "tech": ["Python"],
            "details": { "overview": "Hello" }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.details.overview.as_deref(), Some("Hello"));
        assert!(project.details.abilities.is_none());
        assert!(project.details.links.is_none());
    }
}
