//! Screen lifecycle framework.
//!
//! Every screen of the application runs inside a [`ScreenController`],
//! which owns the parts of screen lifetime that must behave identically
//! everywhere:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 ScreenController                      │
//! │                                                       │
//! │  create(saved):                                       │
//! │    autofill off → theme → system bar → window →       │
//! │    layout → on_view_model_ready → bus subscribe       │
//! │                                                       │
//! │  destroy():                                           │
//! │    host teardown → cancel TaskScope (unconditional)   │
//! │                                                       │
//! │  ┌──────────────┐   ┌───────────┐   ┌─────────────┐   │
//! │  │ Screen impl  │   │ TaskScope │   │ HostWindow  │   │
//! │  │ (hooks + VM) │   │ (cancel)  │   │ (adapter)   │   │
//! │  └──────────────┘   └───────────┘   └─────────────┘   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The controller's entry points are inherent methods rather than trait
//! methods: the tint pass on menu creation, the back-interception on menu
//! selection, and the input dismissal on finish always run.

pub mod controller;
pub mod lifecycle;
pub mod scope;
pub mod screen_trait;

pub use controller::ScreenController;
pub use lifecycle::Lifecycle;
pub use scope::{ScopeToken, TaskScope};
pub use screen_trait::{SavedState, Screen, ScreenContext};
