use std::{fs::File, io::{ErrorKind, Read}, path::Path};


pub const DEFAULT_STORY_PATH: &str = "text/example.txt";
/// Only `STORY_BUFFER_SIZE - 1` bytes of the story file are displayed.
pub const STORY_BUFFER_SIZE: usize = 1024;

pub const BANNER: [&str; 2] = [
    "You are in Debt of a Million dollars and you need to figure something out.",
    "GAME START!",
];


pub struct Story {
    contents: Option<Vec<u8>>,
}

impl Story {
    /// A story with no file content. Displays the banner only.
    pub fn banner_only() -> Story {
        return Story { contents: None };
    }

    /// Loads the story file, falling back to the banner alone when it cannot
    /// be opened. Content is kept as raw bytes.
    pub fn load(path: &Path) -> Story {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                match e.kind() {
                    ErrorKind::NotFound => tracing::debug!(path = %path.display(), "No story file, showing banner only"),
                    _ => tracing::warn!(path = %path.display(), error = %e, "Could not open story file, showing banner only"),
                };
                return Story::banner_only();
            }
        };
        let mut buffer: Vec<u8> = Vec::with_capacity(STORY_BUFFER_SIZE);
        match file.take((STORY_BUFFER_SIZE - 1) as u64).read_to_end(&mut buffer) {
            Ok(_) => {
                if let Some(end) = buffer.iter().position(|b| *b == 0) {
                    buffer.truncate(end);
                }
                tracing::debug!(path = %path.display(), size = %bytefmt::format(buffer.len() as u64), "Loaded story file");
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read story file");
                buffer.clear();
            }
        };
        return Story { contents: Some(buffer) };
    }

    pub fn contents(&self) -> Option<&[u8]> {
        return self.contents.as_deref();
    }

    /// Every line to display, in order. File content is one entry, verbatim.
    pub fn lines(&self) -> Vec<&[u8]> {
        let mut lines: Vec<&[u8]> = BANNER.iter().map(|line| line.as_bytes()).collect();
        if let Some(contents) = self.contents() {
            lines.push(contents);
        }
        return lines;
    }
}
