use serde_json::{Map, Value};

use crate::data::error::{ConfigError, json_type_name};
use crate::runner::CommandRunner;

/// A block of renderable text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// Menu label.
    pub key: String,
    /// Lines in source array order.
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Parse a text block from a JSON array.
    ///
    /// String and object elements may be mixed freely within one array.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTextBlockData`] when `value` is not an array
    /// or any element has a shape [`TextLine`] rejects.
    pub fn from_value(key: &str, value: &Value) -> Result<Self, ConfigError> {
        let Value::Array(entries) = value else {
            return Err(ConfigError::InvalidTextBlockData {
                key: key.to_string(),
                actual: json_type_name(value),
            });
        };
        let mut lines = Vec::with_capacity(entries.len());
        for entry in entries {
            lines.push(TextLine::from_value(key, entry)?);
        }
        Ok(Self {
            key: key.to_string(),
            lines,
        })
    }

    /// Render every line and join them with newlines.
    ///
    /// Command-origin lines run their commands again on every call.
    pub fn render(&self, runner: &dyn CommandRunner) -> String {
        self.lines
            .iter()
            .map(|line| line.render(runner))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of lines a render produces.
    ///
    /// Counted on a fresh render, so command-origin lines are executed and
    /// multi-line command output counts per line.
    pub fn line_count(&self, runner: &dyn CommandRunner) -> usize {
        self.render(runner).split('\n').count()
    }

    /// Serialize back to a JSON array of each line's origin.
    pub fn as_json(&self) -> Value {
        Value::Array(self.lines.iter().map(TextLine::as_json).collect())
    }
}

/// Source of one text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOrigin {
    /// Printed verbatim.
    Literal(String),
    /// `(command, arguments)` pairs in source order; each pair is executed
    /// and its captured output becomes the text.
    Commands(Vec<(String, String)>),
}

/// One line within a text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    origin: LineOrigin,
}

impl TextLine {
    /// Parse a line spec: a string, or an object mapping command names to
    /// argument strings.
    pub fn from_value(block_key: &str, value: &Value) -> Result<Self, ConfigError> {
        let origin = match value {
            Value::String(text) => LineOrigin::Literal(text.clone()),
            Value::Object(entries) => {
                let mut commands = Vec::with_capacity(entries.len());
                for (name, args) in entries {
                    let Value::String(args) = args else {
                        return Err(ConfigError::InvalidTextBlockData {
                            key: block_key.to_string(),
                            actual: json_type_name(args),
                        });
                    };
                    commands.push((name.clone(), args.clone()));
                }
                LineOrigin::Commands(commands)
            }
            other => {
                return Err(ConfigError::InvalidTextBlockData {
                    key: block_key.to_string(),
                    actual: json_type_name(other),
                });
            }
        };
        Ok(Self { origin })
    }

    /// The line's source value.
    pub fn origin(&self) -> &LineOrigin {
        &self.origin
    }

    /// Produce the line's text.
    ///
    /// Literal lines return their text verbatim with no side effect.
    /// Command lines invoke the runner with `"<command> <arguments>"` for
    /// each pair, in order, joining the captured outputs with newlines. The
    /// command line is passed as-is with no quoting or escaping. Nothing is
    /// cached: every call runs the commands again, and whatever text they
    /// emit, including error messages, becomes the line. Callers needing
    /// stable text must keep the returned string.
    pub fn render(&self, runner: &dyn CommandRunner) -> String {
        match &self.origin {
            LineOrigin::Literal(text) => text.clone(),
            LineOrigin::Commands(commands) => commands
                .iter()
                .map(|(name, args)| runner.run(&format!("{name} {args}")))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Serialize back to the line's origin value, never the rendered text.
    pub fn as_json(&self) -> Value {
        match &self.origin {
            LineOrigin::Literal(text) => Value::String(text.clone()),
            LineOrigin::Commands(commands) => {
                let mut content = Map::new();
                for (name, args) in commands {
                    content.insert(name.clone(), Value::String(args.clone()));
                }
                Value::Object(content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use serde_json::json;

    /// Runner double returning scripted outputs and recording every call.
    struct ScriptedRunner {
        calls: RefCell<Vec<String>>,
        outputs: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn new(outputs: &[&str]) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outputs: RefCell::new(outputs.iter().map(|s| s.to_string()).collect()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, command_line: &str) -> String {
            self.calls.borrow_mut().push(command_line.to_string());
            self.outputs.borrow_mut().remove(0)
        }
    }

    #[test]
    fn literal_lines_render_verbatim_without_running_anything() {
        let runner = ScriptedRunner::new(&[]);
        let line = TextLine::from_value("T", &json!("hello")).unwrap();
        assert_eq!(line.render(&runner), "hello");
        assert_eq!(line.render(&runner), "hello");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn mixed_block_preserves_line_order() {
        let runner = ScriptedRunner::new(&["world"]);
        let block = TextBlock::from_value("T", &json!(["hello", {"echo": "world"}])).unwrap();
        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.render(&runner), "hello\nworld");
        assert_eq!(runner.calls(), ["echo world"]);
    }

    #[test]
    fn command_pairs_run_in_insertion_order() {
        let runner = ScriptedRunner::new(&["out1", "out2"]);
        let line = TextLine::from_value("T", &json!({"echo": "a", "date": "/t"})).unwrap();
        assert_eq!(line.render(&runner), "out1\nout2");
        assert_eq!(runner.calls(), ["echo a", "date /t"]);
    }

    #[test]
    fn rerender_reflects_changed_command_output() {
        let runner = ScriptedRunner::new(&["10:00", "10:01"]);
        let line = TextLine::from_value("T", &json!({"date": ""})).unwrap();
        assert_eq!(line.render(&runner), "10:00");
        assert_eq!(line.render(&runner), "10:01");
        assert_eq!(runner.calls().len(), 2);
    }

    #[test]
    fn origin_is_serialized_not_rendered_output() {
        let runner = ScriptedRunner::new(&["resolved"]);
        let spec = json!({"uname": "-a"});
        let line = TextLine::from_value("T", &spec).unwrap();
        line.render(&runner);
        assert_eq!(line.as_json(), spec);
    }

    #[test]
    fn non_array_block_data_is_rejected() {
        let err = TextBlock::from_value("T", &json!({"not": "an array"})).unwrap_err();
        match err {
            ConfigError::InvalidTextBlockData { key, actual } => {
                assert_eq!(key, "T");
                assert_eq!(actual, "object");
            }
            other => panic!("expected InvalidTextBlockData, got {other:?}"),
        }
    }

    #[test]
    fn bad_line_shapes_are_rejected() {
        let numeric_line = TextBlock::from_value("T", &json!(["ok", 5])).unwrap_err();
        assert!(matches!(
            numeric_line,
            ConfigError::InvalidTextBlockData { actual: "number", .. }
        ));

        let numeric_args = TextBlock::from_value("T", &json!([{"echo": 1}])).unwrap_err();
        assert!(matches!(
            numeric_args,
            ConfigError::InvalidTextBlockData { actual: "number", .. }
        ));
    }

    #[test]
    fn line_count_follows_rendered_newlines() {
        let runner = ScriptedRunner::new(&["one\ntwo"]);
        let block = TextBlock::from_value("T", &json!(["head", {"tail": "-n2 log"}])).unwrap();
        assert_eq!(block.line_count(&runner), 3);
    }
}
