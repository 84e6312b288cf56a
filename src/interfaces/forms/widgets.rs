use serde::Serialize;

/// Help block appended after every markdown textarea.
pub const MARKDOWN_HELP_HTML: &str = r#"<div class="field-help"><strong>Markdown Help:</strong><br><code>**bold**</code> • <code>*italic*</code> • <code># heading</code> • <code>[link](url)</code> • <code>![image](url)</code> • <code>`code`</code> • <code>&gt; quote</code><br><small>Use toolbar buttons or keyboard shortcuts (Ctrl+B for bold, etc.)</small></div>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolbarAction {
    pub action: &'static str,
    pub title: &'static str,
    pub shortcut: &'static str,
}

const fn tool(action: &'static str, title: &'static str, shortcut: &'static str) -> ToolbarAction {
    ToolbarAction { action, title, shortcut }
}

/// Editor toolbar, in display order.
pub const MARKDOWN_TOOLBAR: &[ToolbarAction] = &[
    tool("bold", "Bold", "Ctrl+B"),
    tool("italic", "Italic", "Ctrl+I"),
    tool("heading", "Heading", "Ctrl+H"),
    tool("center", "Center", "Ctrl+E"),
    tool("link", "Link", "Ctrl+L"),
    tool("image", "Image", "Ctrl+Shift+I"),
    tool("code", "Code", "Ctrl+Shift+C"),
    tool("codeblock", "Code Block", "Ctrl+Shift+B"),
    tool("quote", "Quote", "Ctrl+Q"),
    tool("ul", "Unordered List", "Ctrl+U"),
    tool("ol", "Ordered List", "Ctrl+Shift+O"),
    tool("hr", "Horizontal Rule", "Ctrl+R"),
];

/// Textarea that the admin editor script enhances with a markdown toolbar.
///
/// The widget only produces markup; it never parses or validates the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkdownTextArea {
    pub rows: u32,
    pub cols: u32,
    pub placeholder: &'static str,
}

impl MarkdownTextArea {
    pub const CSS_CLASS: &'static str = "markdown-editor-textarea";

    pub fn render(&self, name: &str, value: Option<&str>) -> String {
        let name = html_escape(name);
        format!(
            r#"<textarea name="{name}" cols="{cols}" rows="{rows}" class="{class}" data-markdown-editor="true" placeholder="{placeholder}" id="id_{name}">
{value}</textarea>{help}"#,
            cols = self.cols,
            rows = self.rows,
            class = Self::CSS_CLASS,
            placeholder = html_escape(self.placeholder),
            value = html_escape(value.unwrap_or_default()),
            help = MARKDOWN_HELP_HTML,
        )
    }

    pub fn toolbar(&self) -> &'static [ToolbarAction] {
        MARKDOWN_TOOLBAR
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    TextInput { max_length: Option<u32> },
    UrlInput,
    NumberInput { min: i64, max: i64 },
    Checkbox,
    DateTime,
    MarkdownTextArea(MarkdownTextArea),
}

impl Widget {
    pub fn as_markdown(&self) -> Option<&MarkdownTextArea> {
        match self {
            Widget::MarkdownTextArea(area) => Some(area),
            _ => None,
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
