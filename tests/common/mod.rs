#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use skeleton::error::{Error, Result};
use skeleton::filesystem::{Filesystem, LocalFilesystem};
use skeleton::finalizer::{ProcessRunner, ShellCommand};
use skeleton::formatter::Formatter;
use skeleton::prompt::Prompter;
use skeleton::settings::{Database, Logger, Router, Settings};
use skeleton::templates::{TemplateRepository, BUNDLED};

/// Settings from the Zap/Postgresql/GIN scenario with every optional feature off.
pub fn zap_postgres_gin(root: &Path) -> Settings {
    Settings {
        logger: Logger::Zap,
        database: Database::Postgresql,
        router: Router::Gin,
        ..Settings::new("svc", root)
    }
}

/// Template store that starts from the bundled templates and allows overrides.
pub struct MemoryTemplates {
    templates: HashMap<String, String>,
}

impl MemoryTemplates {
    pub fn bundled() -> Self {
        let templates =
            BUNDLED.iter().map(|(name, text)| (name.to_string(), text.to_string())).collect();
        Self { templates }
    }

    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.templates.insert(name.to_string(), text.to_string());
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.templates.remove(name);
        self
    }
}

impl TemplateRepository for MemoryTemplates {
    fn lookup(&self, name: &str) -> Result<&str> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::TemplateNotFound { name: name.to_string() })
    }
}

/// Formatter that prefixes its input with a marker line.
pub struct MarkingFormatter;

pub const FORMAT_MARKER: &str = "// formatted\n";

impl Formatter for MarkingFormatter {
    fn format(&self, source: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = FORMAT_MARKER.as_bytes().to_vec();
        out.extend_from_slice(source);
        Ok(out)
    }
}

/// Formatter that rejects every input.
pub struct FailingFormatter;

impl Formatter for FailingFormatter {
    fn format(&self, _source: &[u8]) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::InvalidData, "expected 'package', found 'EOF'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    CreateDir(PathBuf),
    WriteFile(PathBuf),
}

/// Local filesystem that records every operation in order.
#[derive(Default)]
pub struct RecordingFilesystem {
    pub ops: RefCell<Vec<FsOp>>,
}

impl Filesystem for RecordingFilesystem {
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.ops.borrow_mut().push(FsOp::CreateDir(path.to_path_buf()));
        LocalFilesystem.create_dir(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.ops.borrow_mut().push(FsOp::WriteFile(path.to_path_buf()));
        LocalFilesystem.write_file(path, content)
    }
}

/// Process runner that records calls instead of spawning processes.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<(ShellCommand, PathBuf)>>,
    /// Whether go.mod existed in the working directory at call time.
    pub saw_go_mod: RefCell<bool>,
    pub fail_with: Option<String>,
}

impl RecordingRunner {
    pub fn failing(reason: &str) -> Self {
        Self { fail_with: Some(reason.to_string()), ..Default::default() }
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &ShellCommand, workdir: &Path) -> Result<()> {
        self.calls.borrow_mut().push((command.clone(), workdir.to_path_buf()));
        *self.saw_go_mod.borrow_mut() = workdir.join("go.mod").is_file();
        match &self.fail_with {
            Some(reason) => {
                Err(Error::FinalizeError { command: command.to_string(), reason: reason.clone() })
            }
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
}

/// Prompter that replays scripted answers and records the questions asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub questions: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[Answer]) -> Self {
        Self { answers: RefCell::new(answers.iter().copied().collect()), ..Default::default() }
    }

    fn next(&self, question: &str) -> Answer {
        self.questions.borrow_mut().push(question.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected question: {question}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str, _default: bool) -> Result<bool> {
        match self.next(question) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected a confirm answer for '{question}', got {other:?}"),
        }
    }

    fn select(&self, question: &str, _items: &[String], _default: usize) -> Result<usize> {
        match self.next(question) {
            Answer::Select(index) => Ok(index),
            other => panic!("expected a select answer for '{question}', got {other:?}"),
        }
    }
}

/// Relative paths of all files under `root`, sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}
