use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::SyntaxSet,
    util::LinesWithEndings,
};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Optional markdown extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownFeatures {
    pub tables: bool,
    pub footnotes: bool,
    pub code_highlighting: bool,
}

impl Default for MarkdownFeatures {
    fn default() -> Self {
        MarkdownFeatures {
            tables: true,
            footnotes: true,
            code_highlighting: true,
        }
    }
}

impl MarkdownFeatures {
    fn parser_options(&self) -> Options {
        let mut options = Options::ENABLE_DEFINITION_LIST;
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

/// Converts Markdown content to sanitized HTML with every feature enabled.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    render_markdown(markdown, &MarkdownFeatures::default())
}

/// Converts Markdown content to sanitized HTML.
///
/// Never fails: syntax the parser does not recognise is emitted as text.
pub fn render_markdown(markdown: &str, features: &MarkdownFeatures) -> String {
    let parser = Parser::new_ext(markdown, features.parser_options());

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    if features.code_highlighting {
        html::push_html(&mut raw_html, highlight_code_blocks(parser).into_iter());
    } else {
        html::push_html(&mut raw_html, parser);
    }

    sanitize_html(&raw_html)
}

/// Removes scripts, event handlers and unknown tags from rendered HTML.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .add_generic_attributes(&["class"])
        .add_tag_attributes("div", &["id"])
        .clean(content)
        .to_string()
}

fn highlight_code_blocks<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // Some(lang) while inside a code block
    let mut code_lang: Option<Option<String>> = None;
    let mut code = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                code_lang = Some(lang);
                code.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                let lang = code_lang.take().flatten();
                events.push(Event::Html(CowStr::from(highlight_code(&code, lang.as_deref()))));
            }
            Event::Text(text) if code_lang.is_some() => code.push_str(&text),
            other => events.push(other),
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let lang_class = lang
        .map(|l| {
            l.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#'))
                .collect::<String>()
        })
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| "text".to_string());

    let syntax = lang
        .and_then(|l| SYNTAX_SET.find_syntax_by_token(l))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    let mut body = None;
    for line in LinesWithEndings::from(code) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!("Code highlighting failed for '{}': {}", lang_class, e);
            body = Some(ammonia::clean_text(code));
            break;
        }
    }
    let body = body.unwrap_or_else(|| generator.finalize());

    format!(
        r#"<div class="codehilite"><pre><code class="language-{}">{}</code></pre></div>"#,
        lang_class, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_becomes_strong() {
        let html = safe_markdown_to_html("**bold**");
        assert!(html.contains("<strong>bold</strong>"), "{html}");
    }

    #[test]
    fn tables_render_when_enabled() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert!(safe_markdown_to_html(md).contains("<table>"));

        let plain = MarkdownFeatures { tables: false, ..Default::default() };
        assert!(!render_markdown(md, &plain).contains("<table>"));
    }

    #[test]
    fn footnotes_render() {
        let html = safe_markdown_to_html("Claim[^1]\n\n[^1]: Source\n");
        assert!(html.contains("footnote-definition"), "{html}");
    }

    #[test]
    fn fenced_code_is_highlighted_with_classes() {
        let html = safe_markdown_to_html("```rust\nfn main() {}\n```\n");
        assert!(html.contains(r#"<div class="codehilite">"#), "{html}");
        assert!(html.contains("language-rust"), "{html}");
        assert!(html.contains("<span class="), "{html}");
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let html = safe_markdown_to_html("```nosuchlang\nx < y\n```\n");
        assert!(html.contains("language-nosuchlang"));
        assert!(html.contains("x &lt; y"), "{html}");
    }

    #[test]
    fn highlighting_can_be_disabled() {
        let plain = MarkdownFeatures { code_highlighting: false, ..Default::default() };
        let html = render_markdown("```rust\nlet x = 1;\n```\n", &plain);
        assert!(!html.contains("codehilite"));
        assert!(html.contains("<pre><code"));
    }

    #[test]
    fn scripts_are_stripped() {
        let html = safe_markdown_to_html("Hi <script>alert(1)</script> <a href=\"https://x.dev\" onclick=\"evil()\">x</a>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("rel=\"nofollow noopener noreferrer\""));
    }

    #[test]
    fn malformed_markdown_passes_through_as_text() {
        let html = safe_markdown_to_html("**unclosed and [broken](link");
        assert!(html.contains("**unclosed and [broken](link"), "{html}");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(safe_markdown_to_html(""), "");
    }
}
