//! Documentation navigation-tree index.
//!
//! A static, authored outline of section titles and links; lazy
//! materialization of runtime nodes on first expansion; breadcrumb-path
//! resolution for the current page; and a view trait through which a host
//! renders rows, child containers and the selected trail.
//!
//! ```
//! use navtree::{NavCommand, NavController, Outline, OutlineEntry, RecordingView, TreeIndex};
//!
//! let outline = Outline::new(vec![
//!     OutlineEntry::page("Overview", "index.html"),
//!     OutlineEntry::group("Manual", vec![OutlineEntry::page("Start", "start.html")]),
//! ]);
//!
//! let mut controller = NavController::new(TreeIndex::new(outline));
//! let mut view = RecordingView::new();
//! controller
//!     .apply(NavCommand::Select { target: "start.html".to_string() }, &mut view)
//!     .unwrap();
//! assert!(!view.events.is_empty());
//! ```

pub mod arena;
pub mod controller;
pub mod display;
pub mod errors;
pub mod index;
pub mod outline;
pub mod util;
pub mod view;

pub use arena::{NavArena, NavNode};
pub use controller::{NavCommand, NavController};
pub use display::TreeConvert;
pub use errors::{NavError, NavResult};
pub use index::{IndexConfig, TreeIndex};
pub use outline::{find_path, Outline, OutlineEntry};
pub use view::{NavView, RecordingView, RowIndicator, RowSpec, ViewEvent};
