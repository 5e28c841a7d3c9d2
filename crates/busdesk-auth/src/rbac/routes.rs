//! Static role → route-prefix access table.

use busdesk_entity::Role;

/// Route prefixes each role may open. Compiled in, never persisted.
///
/// An entry authorizes the route itself and everything nested under it
/// at a path-segment boundary.
const ROUTE_TABLE: &[(Role, &[&str])] = &[
    (
        Role::Admin,
        &[
            "/dashboard",
            "/tickets",
            "/shipments",
            "/voyages",
            "/expenses",
            "/vehicles",
            "/fuel",
            "/maintenance",
            "/staff",
            "/payroll",
            "/counters",
            "/reports",
            "/accounting",
            "/settings",
        ],
    ),
    (
        Role::OperationsManager,
        &[
            "/dashboard",
            "/voyages",
            "/vehicles",
            "/fuel",
            "/maintenance",
            "/staff",
            "/reports",
        ],
    ),
    (
        Role::PosOperator,
        &["/dashboard", "/tickets", "/shipments", "/counters"],
    ),
    (
        Role::FinanceOperator,
        &[
            "/dashboard",
            "/expenses",
            "/payroll",
            "/accounting",
            "/reports",
        ],
    ),
    (
        Role::TechnicalOperator,
        &["/dashboard", "/vehicles", "/fuel", "/maintenance"],
    ),
];

/// Returns the route prefixes the given role may open.
pub fn allowed_routes(role: Role) -> &'static [&'static str] {
    ROUTE_TABLE
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, prefixes)| *prefixes)
        .unwrap_or(&[])
}

/// Decides whether a role may navigate to the given route.
///
/// `None` (unauthenticated or still loading) never has access. A prefix
/// matches the route itself or any path nested under it; a prefix never
/// matches mid-segment, so `/tickets` does not authorize `/ticketsomething`.
/// Any matching prefix authorizes; there are no most-specific-match
/// semantics.
pub fn has_route_access(role: Option<Role>, route: &str) -> bool {
    let Some(role) = role else {
        return false;
    };

    allowed_routes(role)
        .iter()
        .any(|p| route == *p || (route.starts_with(p) && route[p.len()..].starts_with('/')))
}
