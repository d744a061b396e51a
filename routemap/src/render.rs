//! Markdown rendering of a [`Report`].

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::report::Report;

/// Renders the human-readable endpoint listing.
///
/// Resources and methods appear in lexicographic order, endpoints in the
/// order they were exported. The roles line is omitted for endpoints
/// without role middleware.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::from("# API Endpoints Summary\n\n");
    out.push_str(&format!(
        "Total API Endpoints: {}\n\n",
        report.total_endpoints()
    ));
    out.push_str("## Resources\n\n");

    for (resource, groups) in report.resources() {
        out.push_str(&format!("### {resource}\n\n"));

        for (method, endpoints) in groups {
            out.push_str(&format!("#### {method}\n\n"));

            for endpoint in endpoints {
                out.push_str(&format!("- `{}`\n", endpoint.uri));
                out.push_str(&format!("  - Action: `{}`\n", endpoint.action));
                if !endpoint.roles.is_empty() {
                    out.push_str(&format!("  - Roles: {}\n", endpoint.roles.join(", ")));
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Writes the Markdown listing to `path`, replacing any existing file.
pub fn write_markdown(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_markdown(report)).map_err(|e| Error::from_write(path, e))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::introspection::RouteRecord;
    use crate::report::organize;

    #[test]
    fn test_empty_report() {
        assert_eq!(
            render_markdown(&Report::new()),
            "# API Endpoints Summary\n\nTotal API Endpoints: 0\n\n## Resources\n\n"
        );
    }

    #[test]
    fn test_sections_sorted_with_roles() {
        let routes = vec![
            RouteRecord::new(
                "api/users",
                "POST",
                "UserController@store",
                ["api", "RoleMiddleware:admin,faculty"],
            ),
            RouteRecord::new("api/users", "GET|HEAD", "UserController@index", ["api"]),
            RouteRecord::new("api/announcements", "GET", "AnnouncementController@index", ["api"]),
        ];
        let markdown = render_markdown(&organize(&routes));

        let expected = "\
# API Endpoints Summary

Total API Endpoints: 4

## Resources

### announcements

#### GET

- `api/announcements`
  - Action: `AnnouncementController@index`

### users

#### GET

- `api/users`
  - Action: `UserController@index`

#### HEAD

- `api/users`
  - Action: `UserController@index`

#### POST

- `api/users`
  - Action: `UserController@store`
  - Roles: admin, faculty

";
        assert_eq!(markdown, expected);
    }
}
