use std::io;

/// Destination for the human-readable status lines a service emits.
pub trait StatusSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }
}
