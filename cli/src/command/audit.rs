use crate::CliResult;
use clap::Args;
use quire::Book;
use quire::epub::AuditSummary;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct AuditCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Print the full audit report as JSON
    #[arg(long)]
    json: bool,

    /// Exit with a failure status if anything could not be resolved
    #[arg(long)]
    strict: bool,
}

impl AuditCommand {
    pub fn run(&self) -> CliResult<ExitCode> {
        let book = Book::open(&self.ebook_path)?;
        let summary = &book.audit.summary;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&book.audit)?);
        } else {
            println!("{}", book.title);
            print_summary(summary);
        }

        Ok(if self.strict && summary.has_failures() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }
}

fn print_summary(summary: &AuditSummary) {
    #[rustfmt::skip]
    let rows = [
        ("spine items", summary.spine_total),
        ("rendered chapters", summary.rendered_chapters),
        ("spine failures", summary.spine_failures),
        ("missing spine items", summary.missing_spine_items),
        ("toc targets", summary.toc_targets),
        ("missing toc targets", summary.missing_toc_targets),
        ("resource references", summary.resource_references),
        ("missing resources", summary.missing_resources),
        ("remote resources", summary.remote_resources),
        ("file-scheme resources", summary.file_scheme_resources),
        ("out-of-container resources", summary.out_of_container_resources),
        ("unsupported-scheme resources", summary.unsupported_scheme_resources),
        ("orphaned resources", summary.orphaned_resources),
        ("encrypted resources", summary.encrypted_resources),
        ("unsupported encrypted resources", summary.unsupported_encrypted_resources),
    ];

    for (label, count) in rows {
        println!("  {label:<32}{count}");
    }
}
