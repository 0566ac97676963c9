use crate::domain::ports::StatusSink;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Writes each status line to stdout and flushes right away.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        handle.flush()
    }
}

/// Keeps status lines in memory. Clones share one buffer, so a handle kept
/// by the caller still sees lines emitted after the owner is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|l| *l == line).count()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl StatusSink for MemorySink {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}
