//! UI Components for the ReCore upload page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV selection (picker, drag & drop), submission, completion card
//! - [`NoticeStack`] - Transient user notifications

mod hero;
mod upload;
mod notices;
mod footer;

pub use hero::*;
pub use upload::*;
pub use notices::*;
pub use footer::*;
