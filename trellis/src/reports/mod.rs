//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod info;
mod list;
mod new;
mod output;

pub use info::{FeatureInfo, InfoReport};
pub use list::{ListReport, TemplateSummary};
pub use new::{GenerationResult, NewReport, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
