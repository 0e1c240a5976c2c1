//! ReCore - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading GPU telemetry CSV files to the
//! ReCore prediction service and handing over to the lifecycle dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection ── UploadFlow ── services                │
//! │  │     (picker, drop zone,          (prediction client,     │
//! │  │      completion card)             localStorage,          │
//! │  │                                   dashboard window)      │
//! │  └── NoticeStack (notifications)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadState, Notice, AppError, etc.)
//! - [`flow`] - Upload flow state machine, independent of the UI
//! - [`components`] - UI components (Hero, UploadSection, NoticeStack, Footer)
//! - [`services`] - Host environment access (HTTP upload, storage, dashboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod flow;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Upload
    UploadState,
    // Notices
    Notice, NoticeKind,
    // Results
    ClassificationSummary,
    // Errors
    AppError, AppResult,
};

// Flow
pub use flow::{classify, UploadFlow};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ReCore · Upload GPU Data"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let notices = create_rw_signal(Vec::<NoticeEntry>::new());

    view! {
        <div class="container">
            <Hero/>
            <UploadSection notices=notices/>
        </div>

        <NoticeStack notices=notices/>

        <Footer/>
    }
}
