//! Stylesheet generation.
//!
//! Rules are collected as records first and rendered to text in one pass, so
//! the output depends only on the name list and the config.

use std::fmt::Write as _;

use crate::atomic::write_atomic;
use crate::config::Config;
use crate::error::Result;

/// One `selector { property: value; }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    fn render_into(&self, out: &mut String) {
        let _ = writeln!(out, "{} {{", self.selector);
        for (property, value) in &self.declarations {
            let _ = writeln!(out, "  {}: {};", property, value);
        }
        out.push_str("}\n\n");
    }
}

/// Builder for the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    title: String,
    preamble: Rule,
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Start a stylesheet with the shared display class for `tile` sized icons.
    pub fn new(title: impl Into<String>, class_name: &str, tile: u32) -> Self {
        let preamble = Rule::new(format!(".{}", class_name))
            .declare("width", format!("{}px", tile))
            .declare("height", format!("{}px", tile))
            .declare("background-repeat", "no-repeat")
            .declare("background-size", "contain")
            .declare("display", "inline-block")
            .declare("image-rendering", "pixelated");

        Self {
            title: title.into(),
            preamble,
            rules: Vec::new(),
        }
    }

    /// Build the full stylesheet for a config, one rule per name in list order.
    ///
    /// Names are used as selectors verbatim; they come from configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut sheet = Self::new(&config.title, &config.class_name, config.tile_size);
        for name in &config.names {
            sheet.push_image(name, &config.public_url(name));
        }
        sheet
    }

    /// Add a rule binding `.name` to a background image URL.
    pub fn push_image(&mut self, name: &str, url: &str) {
        self.rules.push(
            Rule::new(format!(".{}", name)).declare("background-image", format!("url('{}')", url)),
        );
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Render the document.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(128 + self.rules.len() * 96);
        let _ = writeln!(out, "/* {} */", self.title);
        self.preamble.render_into(&mut out);
        for rule in &self.rules {
            rule.render_into(&mut out);
        }
        out
    }
}

/// Render the stylesheet for `config` and write it to `config.stylesheet`.
///
/// Returns the written text.
pub fn generate(config: &Config) -> Result<String> {
    let text = Stylesheet::from_config(config).render();
    write_atomic(&config.stylesheet, &text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn abc_config(dir: &Path) -> Config {
        Config {
            stylesheet: dir.join("icons.css"),
            ..Config::with_names(["a", "b", "c"])
        }
    }

    #[test]
    fn test_render_abc() {
        let css = Stylesheet::from_config(&Config::with_names(["a", "b", "c"])).render();

        let expected = "\
/* Stars! Tech Atlas - Individual Images */
.tech-icon {
  width: 64px;
  height: 64px;
  background-repeat: no-repeat;
  background-size: contain;
  display: inline-block;
  image-rendering: pixelated;
}

.a {
  background-image: url('/assets/tech-icons/a.png');
}

.b {
  background-image: url('/assets/tech-icons/b.png');
}

.c {
  background-image: url('/assets/tech-icons/c.png');
}

";
        assert_eq!(css, expected);
    }

    #[test]
    fn test_rules_follow_name_order() {
        let config = Config::with_names(["zeta", "alpha", "mid"]);
        let sheet = Stylesheet::from_config(&config);

        let selectors: Vec<&str> = sheet.rules().iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".zeta", ".alpha", ".mid"]);

        for (rule, name) in sheet.rules().iter().zip(&config.names) {
            assert!(rule.declarations[0].1.contains(&format!("{}.png", name)));
        }
    }

    #[test]
    fn test_one_rule_per_name_for_default_list() {
        let config = Config::default();
        let css = Stylesheet::from_config(&config).render();

        assert_eq!(css.matches("background-image:").count(), config.names.len());
        let first = css.find(".eng-quick-jump-5 {").unwrap();
        let last = css.find(".hull-death-star {").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_preamble_uses_tile_and_class() {
        let css = Stylesheet::new("Icons", "icon", 32).render();
        assert!(css.starts_with("/* Icons */\n.icon {\n  width: 32px;\n  height: 32px;\n"));
    }

    #[test]
    fn test_selector_passed_through_unescaped() {
        let mut sheet = Stylesheet::new("t", "c", 8);
        sheet.push_image("weird.name", "/x/weird.name.png");
        assert!(sheet.render().contains(".weird.name {\n"));
    }

    #[test]
    fn test_generate_writes_and_overwrites() {
        let dir = tempdir().unwrap();
        let config = abc_config(dir.path());
        fs::write(&config.stylesheet, "stale").unwrap();

        let first = generate(&config).unwrap();
        let on_disk = fs::read_to_string(&config.stylesheet).unwrap();
        assert_eq!(first, on_disk);

        let second = generate(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(fs::read(&config.stylesheet).unwrap(), second.into_bytes());

        // No temp files left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_generate_missing_parent_is_io_error() {
        let dir = tempdir().unwrap();
        let config = Config {
            stylesheet: dir.path().join("missing").join("icons.css"),
            ..Config::with_names(["a"])
        };

        let err = generate(&config).unwrap_err();
        assert!(matches!(err, SplitError::Io { .. }));
    }
}
