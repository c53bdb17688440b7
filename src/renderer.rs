//! Template renderer for skeleton.
//! Wraps MiniJinja with strict variable handling so a template that reads a
//! key the context does not provide fails instead of rendering empty text.
use crate::error::Result;
use crate::settings::Logger;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { env }
    }

    /// Creates a renderer whose templates can call `log(receiver, level, msg)`
    /// to emit a logging statement in the chosen logger's dialect.
    pub fn with_logger(logger: Logger) -> Self {
        let mut renderer = Self::new();
        renderer.env.add_function("log", move |receiver: String, level: String, msg: String| {
            log_statement(logger, &receiver, &level, &msg)
        });
        renderer
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if:
    ///   - The template has a syntax error (unclosed block, bad expression)
    ///   - The template references a variable missing from the context
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Formats a single logging call for the given logger.
///
/// ```ignore
/// log_statement(Logger::GoKit, "logger", "info", "started")
///     == r#"level.Info(logger).Log("msg", "started")"#
/// log_statement(Logger::Zap, "logger", "info", "started")
///     == r#"logger.Info("started")"#
/// ```
pub fn log_statement(logger: Logger, receiver: &str, level: &str, msg: &str) -> String {
    let level = title_case(level);
    match logger {
        Logger::GoKit => format!("level.{level}({receiver}).Log(\"msg\", \"{msg}\")"),
        Logger::Zap => format!("{receiver}.{level}(\"{msg}\")"),
    }
}

fn title_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ERROR"), "Error");
        assert_eq!(title_case("debug"), "Debug");
        assert_eq!(title_case(""), "");
    }
}
