use clap::Subcommand;

mod audit;
mod chapters;
mod toc;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize everything that could not be resolved in a book.
    Audit(audit::AuditCommand),
    /// Print the table of contents with the chapters each entry spans.
    Toc(toc::TocCommand),
    /// List the rendered chapters.
    Chapters(chapters::ChaptersCommand),
}
