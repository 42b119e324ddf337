//! Builder for test documents.

/// Builder for a Markdown document with optional frontmatter.
#[derive(Debug, Clone)]
pub struct TestDoc {
    name: String,
    frontmatter: Vec<(String, String)>,
    body: String,
}

impl TestDoc {
    /// Creates a document stored at `name` inside the vault.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frontmatter: Vec::new(),
            body: String::new(),
        }
    }

    /// Adds a frontmatter field. The value is written verbatim as YAML.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.frontmatter.push((key.into(), value.into()));
        self
    }

    /// Sets the body content.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Path of the document relative to the vault.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full file contents.
    pub fn render(&self) -> String {
        if self.frontmatter.is_empty() {
            return self.body.clone();
        }
        let mut out = String::from("---\n");
        for (key, value) in &self.frontmatter {
            out.push_str(&format!("{}: {}\n", key, value));
        }
        out.push_str("---\n");
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_frontmatter() {
        let doc = TestDoc::new("a.md").body("Hello");
        assert_eq!(doc.render(), "Hello");
    }

    #[test]
    fn render_with_frontmatter() {
        let doc = TestDoc::new("a.md").field("title", "Plan").body("Hello");
        assert_eq!(doc.render(), "---\ntitle: Plan\n---\nHello");
    }
}
