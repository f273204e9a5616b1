//! Page templates: `<head>`/`<body>` section parsing, master/part merging,
//! `${{ ... }}` placeholder expansion and final document layout.

use pacsite_types::SiteConfig;

use crate::applet::{render_applet_script, render_deploy_java_loader};
use crate::error::{Result, SiteError};
use crate::navbar::render_nav_bar;

const PLACEHOLDER_OPEN: &str = "${{";
const PLACEHOLDER_CLOSE: &str = "}}";

/// The head and body lines of a page, without their enclosing tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTemplate {
    pub head: Vec<String>,
    pub body: Vec<String>,
}

impl PageTemplate {
    /// Reads the `<head>` and `<body>` sections of `source`.
    ///
    /// Each tag must sit on its own line. Anything outside the two sections is
    /// ignored, and the head must come before the body.
    pub fn parse(source: &str) -> Result<Self> {
        let mut lines = source.lines();
        let head = take_section(&mut lines, "<head>", "</head>")?;
        let body = take_section(&mut lines, "<body>", "</body>")?;
        Ok(Self { head, body })
    }

    /// Expands every placeholder in the head and body for `current_page`.
    pub fn expand(&self, site: &SiteConfig, current_page: &str) -> Result<Self> {
        let context = RenderContext { site, current_page };
        let expand_all = |lines: &[String]| -> Result<Vec<String>> {
            lines.iter().map(|line| context.expand_line(line)).collect()
        };
        Ok(Self {
            head: expand_all(&self.head)?,
            body: expand_all(&self.body)?,
        })
    }

    /// Full HTML document for this page.
    pub fn to_html(&self) -> String {
        write_html(&self.head, &self.body)
    }
}

/// Collects the lines between `start` and `end`.
///
/// Tags are matched after trimming and ignoring ASCII case.
pub fn parse_section(source: &str, start: &str, end: &str) -> Result<Vec<String>> {
    take_section(&mut source.lines(), start, end)
}

fn take_section<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    start: &str,
    end: &str,
) -> Result<Vec<String>> {
    let is_tag = |line: &str, tag: &str| line.trim().eq_ignore_ascii_case(tag);

    if !lines.by_ref().any(|line| is_tag(line, start)) {
        return Err(SiteError::MissingSection { tag: start.to_string() });
    }
    let mut section = Vec::new();
    for line in lines {
        if is_tag(line, end) {
            return Ok(section);
        }
        section.push(line.to_string());
    }
    Err(SiteError::MissingSection { tag: end.to_string() })
}

/// Merges the shared master page with one part page.
///
/// Master lines come first in both sections.
pub fn assemble_page(master: &PageTemplate, part: &PageTemplate) -> PageTemplate {
    PageTemplate {
        head: master.head.iter().chain(&part.head).cloned().collect(),
        body: master.body.iter().chain(&part.body).cloned().collect(),
    }
}

/// Lays out a complete HTML document, one line per entry.
pub fn write_html(head: &[String], body: &[String]) -> String {
    let mut out = String::new();
    let mut line = |text: &str| {
        out.push_str(text);
        out.push('\n');
    };
    line("<!DOCTYPE html>");
    line("<html>");
    line("");
    line("<head>");
    head.iter().for_each(|text| line(text.as_str()));
    line("</head>");
    line("");
    line("<body>");
    body.iter().for_each(|text| line(text.as_str()));
    line("</body>");
    line("");
    line("</html>");
    line("");
    out
}

struct RenderContext<'a> {
    site: &'a SiteConfig,
    current_page: &'a str,
}

impl RenderContext<'_> {
    fn expand_line(&self, line: &str) -> Result<String> {
        let mut out = String::with_capacity(line.len());
        let mut remainder = line;

        while let Some(start) = remainder.find(PLACEHOLDER_OPEN) {
            let open_end = start + PLACEHOLDER_OPEN.len();
            let after_open = &remainder[open_end..];
            let Some(end) = after_open.find(PLACEHOLDER_CLOSE) else {
                break;
            };
            let expression = &after_open[..end];
            // The innermost `${{` owns the `}}`; earlier openers are literal.
            if let Some(inner) = expression.rfind(PLACEHOLDER_OPEN) {
                let literal_end = open_end + inner;
                out.push_str(&remainder[..literal_end]);
                remainder = &remainder[literal_end..];
                continue;
            }
            out.push_str(&remainder[..start]);
            out.push_str(&self.render_expression(expression.trim())?);
            remainder = &after_open[end + PLACEHOLDER_CLOSE.len()..];
        }

        out.push_str(remainder);
        Ok(out)
    }

    fn render_expression(&self, expression: &str) -> Result<String> {
        match expression {
            "navbar" => Ok(render_nav_bar(&self.site.navbar, self.current_page)),
            "applet" => Ok(render_applet_script(&self.site.applet, false, false)),
            "applet.debug" => Ok(render_applet_script(&self.site.applet, true, false)),
            "deploy_java" => Ok(render_deploy_java_loader()),
            other => Err(SiteError::UnknownPlaceholder {
                expression: other.to_string(),
            }),
        }
    }
}
