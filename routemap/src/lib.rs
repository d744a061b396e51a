//! Organize a web framework's route export into a per-resource endpoint report.
//!
//! The pipeline is load, filter, group, render:
//!
//! ```
//! use routemap::{RouteRegistry, organize, render_markdown};
//!
//! let registry = RouteRegistry::from_json_str(
//!     r#"[{"uri": "api/users", "method": "GET|POST", "action": "UserController@handle", "middleware": ["api"]}]"#,
//! )?;
//! let report = organize(registry.routes());
//!
//! assert_eq!(report.total_endpoints(), 2);
//! assert!(render_markdown(&report).contains("### users"));
//! # Ok::<(), routemap::Error>(())
//! ```

pub mod error;
pub mod extract;
pub mod filter;
pub mod introspection;
pub mod middleware;
pub mod render;
pub mod report;

pub use error::{Error, ErrorKind, Result};
pub use extract::{extract_resource, parse_method};
pub use filter::{Exclusion, classify, is_included};
pub use introspection::{EndpointInfo, RouteRecord, RouteRegistry};
pub use middleware::{extract_roles, is_auth_required};
pub use render::{render_markdown, write_markdown};
pub use report::{MethodGroups, Report, organize};
