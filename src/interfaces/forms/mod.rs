//! Admin form declarations.
//!
//! Each entity has a fixed field-to-widget mapping. Markdown fields use
//! [`MarkdownTextArea`]; everything else a plain widget.

pub mod widgets;

use serde::Serialize;

pub use widgets::{MarkdownTextArea, ToolbarAction, Widget, MARKDOWN_TOOLBAR};

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub required: bool,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Fieldset {
    pub title: &'static str,
    pub collapsed: bool,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityForm {
    pub entity: &'static str,
    pub fieldsets: Vec<Fieldset>,
    pub list_display: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub list_editable: &'static [&'static str],
}

impl EntityForm {
    pub const ENTITIES: &'static [&'static str] =
        &["about", "skills", "projects", "social-settings", "blog-posts"];

    pub fn for_entity(entity: &str) -> Option<EntityForm> {
        match entity {
            "about" => Some(about_form()),
            "skills" => Some(skill_form()),
            "projects" => Some(project_form()),
            "social-settings" => Some(social_settings_form()),
            "blog-posts" => Some(blog_post_form()),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fieldsets
            .iter()
            .flat_map(|set| set.fields.iter())
            .find(|field| field.name == name)
    }

    pub fn markdown_fields(&self) -> impl Iterator<Item = (&FormField, &MarkdownTextArea)> {
        self.fieldsets
            .iter()
            .flat_map(|set| set.fields.iter())
            .filter_map(|field| field.widget.as_markdown().map(|area| (field, area)))
    }
}

fn text(name: &'static str, label: &'static str, max_length: u32) -> FormField {
    FormField {
        name,
        label,
        widget: Widget::TextInput { max_length: Some(max_length) },
        required: true,
        read_only: false,
        help_text: None,
    }
}

fn markdown(name: &'static str, label: &'static str, area: MarkdownTextArea) -> FormField {
    FormField {
        name,
        label,
        widget: Widget::MarkdownTextArea(area),
        required: true,
        read_only: false,
        help_text: None,
    }
}

fn url(name: &'static str, label: &'static str) -> FormField {
    FormField {
        name,
        label,
        widget: Widget::UrlInput,
        required: false,
        read_only: false,
        help_text: None,
    }
}

fn checkbox(name: &'static str, label: &'static str) -> FormField {
    FormField {
        name,
        label,
        widget: Widget::Checkbox,
        required: false,
        read_only: false,
        help_text: None,
    }
}

fn timestamp(name: &'static str, label: &'static str) -> FormField {
    FormField {
        name,
        label,
        widget: Widget::DateTime,
        required: false,
        read_only: true,
        help_text: None,
    }
}

fn optional(field: FormField) -> FormField {
    FormField { required: false, ..field }
}

fn metadata(created: bool, updated: bool) -> Fieldset {
    let mut fields = Vec::new();
    if created {
        fields.push(timestamp("created_at", "Created at"));
    }
    if updated {
        fields.push(timestamp("updated_at", "Updated at"));
    }
    Fieldset { title: "Metadata", collapsed: true, fields }
}

pub fn blog_post_form() -> EntityForm {
    EntityForm {
        entity: "blog-posts",
        fieldsets: vec![
            Fieldset {
                title: "Post Content",
                collapsed: false,
                fields: vec![
                    text("title", "Title", 200),
                    FormField {
                        help_text: Some("Leave empty to derive it from the title"),
                        ..optional(text("slug", "Slug", 50))
                    },
                    FormField {
                        help_text: Some("Use the markdown toolbar above or keyboard shortcuts (Ctrl+B for bold, etc.)"),
                        ..markdown(
                            "content",
                            "Content",
                            MarkdownTextArea {
                                rows: 20,
                                cols: 80,
                                placeholder: "Write your post content here using Markdown...",
                            },
                        )
                    },
                    FormField {
                        help_text: Some("Short summary of the post (optional)"),
                        ..optional(markdown(
                            "excerpt",
                            "Excerpt",
                            MarkdownTextArea {
                                rows: 5,
                                cols: 80,
                                placeholder: "Optional excerpt/summary...",
                            },
                        ))
                    },
                    optional(text("featured_image", "Featured image", 100)),
                ],
            },
            Fieldset {
                title: "Publishing",
                collapsed: true,
                fields: vec![checkbox("published", "Published"), timestamp("published_at", "Published at")],
            },
            metadata(true, true),
        ],
        list_display: &["title", "published", "published_at", "created_at"],
        list_filter: &["published", "created_at", "published_at"],
        search_fields: &["title", "content", "excerpt"],
        list_editable: &["published"],
    }
}

pub fn about_form() -> EntityForm {
    EntityForm {
        entity: "about",
        fieldsets: vec![
            Fieldset {
                title: "Content",
                collapsed: false,
                fields: vec![
                    text("title", "Title", 100),
                    markdown(
                        "content",
                        "Content",
                        MarkdownTextArea {
                            rows: 15,
                            cols: 80,
                            placeholder: "Tell visitors about yourself using Markdown...",
                        },
                    ),
                    optional(text("profile_image", "Profile image", 100)),
                ],
            },
            metadata(true, true),
        ],
        list_display: &["title", "created_at", "updated_at"],
        list_filter: &["created_at", "updated_at"],
        search_fields: &["title", "content"],
        list_editable: &[],
    }
}

pub fn skill_form() -> EntityForm {
    EntityForm {
        entity: "skills",
        fieldsets: vec![
            Fieldset {
                title: "Skill",
                collapsed: false,
                fields: vec![
                    text("name", "Name", 100),
                    text("category", "Category", 50),
                    FormField {
                        name: "years_of_experience",
                        label: "Years of experience",
                        widget: Widget::NumberInput { min: 0, max: 80 },
                        required: false,
                        read_only: false,
                        help_text: None,
                    },
                ],
            },
            metadata(true, false),
        ],
        list_display: &["name", "category", "years_of_experience", "created_at"],
        list_filter: &["category", "years_of_experience"],
        search_fields: &["name", "category"],
        list_editable: &["years_of_experience"],
    }
}

pub fn project_form() -> EntityForm {
    EntityForm {
        entity: "projects",
        fieldsets: vec![
            Fieldset {
                title: "Project Information",
                collapsed: false,
                fields: vec![
                    text("title", "Title", 200),
                    markdown(
                        "description",
                        "Description",
                        MarkdownTextArea {
                            rows: 15,
                            cols: 80,
                            placeholder: "Describe the project using Markdown...",
                        },
                    ),
                    optional(text("image", "Image", 100)),
                    FormField {
                        help_text: Some("Comma-separated, e.g. Rust, PostgreSQL"),
                        ..text("technologies", "Technologies", 500)
                    },
                ],
            },
            Fieldset {
                title: "Links",
                collapsed: true,
                fields: vec![url("github_url", "GitHub URL"), url("live_url", "Live URL")],
            },
            Fieldset {
                title: "Settings",
                collapsed: false,
                fields: vec![checkbox("featured", "Featured")],
            },
            metadata(true, true),
        ],
        list_display: &["title", "featured", "created_at", "updated_at"],
        list_filter: &["featured", "created_at", "updated_at"],
        search_fields: &["title", "description", "technologies"],
        list_editable: &["featured"],
    }
}

pub fn social_settings_form() -> EntityForm {
    EntityForm {
        entity: "social-settings",
        fieldsets: vec![
            Fieldset {
                title: "Social Links",
                collapsed: false,
                fields: vec![
                    url("linkedin_url", "LinkedIn URL"),
                    url("twitter_url", "Twitter URL"),
                    url("facebook_url", "Facebook URL"),
                    url("github_url", "GitHub URL"),
                ],
            },
            metadata(true, true),
        ],
        list_display: &["linkedin_url", "twitter_url", "facebook_url", "github_url"],
        list_filter: &[],
        search_fields: &[],
        list_editable: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_has_a_form() {
        for entity in EntityForm::ENTITIES {
            let form = EntityForm::for_entity(entity).unwrap();
            assert_eq!(form.entity, *entity);
        }
        assert!(EntityForm::for_entity("users").is_none());
    }

    #[test]
    fn blog_post_uses_markdown_for_content_and_excerpt() {
        let form = blog_post_form();
        let markdown: Vec<(&str, u32, u32)> = form
            .markdown_fields()
            .map(|(field, area)| (field.name, area.rows, area.cols))
            .collect();
        assert_eq!(markdown, vec![("content", 20, 80), ("excerpt", 5, 80)]);

        assert!(form.field("content").unwrap().required);
        assert!(!form.field("excerpt").unwrap().required);
    }

    #[test]
    fn blog_post_fieldsets_follow_the_editor_layout() {
        let form = blog_post_form();
        let layout: Vec<(&str, Vec<&str>)> = form
            .fieldsets
            .iter()
            .map(|set| (set.title, set.fields.iter().map(|f| f.name).collect()))
            .collect();

        assert_eq!(
            layout,
            vec![
                ("Post Content", vec!["title", "slug", "content", "excerpt", "featured_image"]),
                ("Publishing", vec!["published", "published_at"]),
                ("Metadata", vec!["created_at", "updated_at"]),
            ]
        );
        assert!(form.field("published_at").unwrap().read_only);
    }

    #[test]
    fn plain_fields_keep_plain_widgets() {
        let form = project_form();
        assert!(form.field("title").unwrap().widget.as_markdown().is_none());
        assert_eq!(form.field("github_url").unwrap().widget, Widget::UrlInput);
        assert!(form.field("description").unwrap().widget.as_markdown().is_some());
    }
}
