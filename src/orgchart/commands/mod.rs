//! Pure tree logic. Nothing here touches the filesystem, a terminal, or a process.
//!
//! The pipeline runs in this order, each stage a full rebuild of its input:
//!
//! ```text
//! Vec<Employee> --reports::build--> ReportsMap --extract::run--> OrgTree
//!     --locate::run (optional)--> OrgTree --filter::only_managers (optional)--> OrgTree
//! ```
//!
//! [`orgsize::run`] summarizes any tree into per-manager rows.

pub mod extract;
pub mod filter;
pub mod locate;
pub mod orgsize;
pub mod reports;
