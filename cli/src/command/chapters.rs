use crate::CliResult;
use clap::Args;
use quire::Book;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct ChaptersCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,
}

impl ChaptersCommand {
    pub fn run(&self) -> CliResult<ExitCode> {
        let book = Book::open(&self.ebook_path)?;

        for chapter in &book.chapters {
            println!(
                "{:>4} {:>4}  {}  {} ({} ids)",
                chapter.index,
                chapter.spine_index + 1,
                chapter.path,
                chapter.title,
                chapter.id_map.len(),
            );
        }
        Ok(ExitCode::SUCCESS)
    }
}
