//! seqcommit — batch uncommitted numbered file variants into individual git
//! commits.
//!
//! Working trees accumulate numbered drafts (`report.1.txt`, `report.2.txt`)
//! that should land in history one commit at a time, in sequence order, under
//! their canonical unnumbered name. seqcommit classifies the uncommitted
//! paths, warns about holes in a numbered run, and commits each file as its
//! own transaction, renaming it to `report.txt` first when needed.
//!
//! Processing is strictly sequential: one repository, one batch, one commit
//! at a time. A batch interrupted partway leaves earlier commits intact and
//! later files untouched; re-running picks up whatever is still uncommitted.

pub mod batch;
pub mod classify;
pub mod glob;
pub mod vcs;

// Re-export commonly used items
pub use batch::{collect_items, run, sequence_gaps, Config};
pub use classify::ClassifiedItem;
pub use glob::ExcludeMatcher;
pub use vcs::{ChangeEntry, GitCli, Vcs};
