//! PrepFoundry - Frontend Rust/Leptos Application
//!
//! A WebAssembly site for students: a landing page, a product roadmap, and
//! the resume checker demo.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (links, mobile menu)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /                  HomePage                             │
//! │  ├── /resume-checker    ResumeCheckerPage                    │
//! │  │     Upload → SelectedFile → Analyzing → Results           │
//! │  └── /future-features   FutureFeaturesPage                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster (notices)                                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Notices, result tabs, roadmap badges, errors
//! - [`components`] - UI components (Navbar, UploadZone, ResultsView, etc.)
//! - [`pages`] - Routed pages
//! - [`services`] - Browser services (analyzer timer, clipboard, files, notices)

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod pages;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notices
    Notice, NoticeLevel,
    // Results
    ResultTab,
    // Roadmap
    FeatureStatus,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Pages
pub use pages::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    services::NoticeBoard::provide();

    view! {
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=CHECKER_PATH view=ResumeCheckerPage/>
                    <Route path=FUTURE_FEATURES_PATH view=FutureFeaturesPage/>
                </Routes>
            </main>
            <Footer/>
            <Toaster/>
        </Router>
    }
}
