use crate::CliResult;
use clap::Args;
use quire::Book;
use quire::epub::TocRange;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct TocCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,
}

impl TocCommand {
    pub fn run(&self) -> CliResult<ExitCode> {
        let book = Book::open(&self.ebook_path)?;

        println!("{} ({})", book.title, book.toc.source);
        print_ranges(&book.chapter_ranges(), 1);
        Ok(ExitCode::SUCCESS)
    }
}

fn print_ranges(ranges: &[TocRange], depth: usize) {
    for range in ranges {
        let chapter = range
            .chapter
            .map_or_else(|| "-".to_owned(), |position| (position + 1).to_string());
        let span = if range.chapters.is_empty() {
            "(empty)".to_owned()
        } else {
            format!("[{}..={}]", range.chapters.start + 1, range.chapters.end)
        };

        println!("{:indent$}{} -> {chapter} {span}", "", range.title, indent = depth * 2);
        print_ranges(&range.children, depth + 1);
    }
}
