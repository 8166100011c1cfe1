//! Static route table: path -> name -> page

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Charts,
    Reports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub route: AppRoute,
}

impl RouteDef {
    /// Path without the leading `/`, as the router matches it
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub static ROUTES: [RouteDef; 3] = [
    RouteDef {
        path: "/",
        name: "Home",
        route: AppRoute::Home,
    },
    RouteDef {
        path: "/charts",
        name: "Charts",
        route: AppRoute::Charts,
    },
    RouteDef {
        path: "/reports",
        name: "Reports",
        route: AppRoute::Reports,
    },
];

impl AppRoute {
    pub fn def(self) -> &'static RouteDef {
        match self {
            Self::Home => &ROUTES[0],
            Self::Charts => &ROUTES[1],
            Self::Reports => &ROUTES[2],
        }
    }
}

/// Look up a path; one trailing `/` is ignored
pub fn resolve(path: &str) -> Option<&'static RouteDef> {
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    ROUTES.iter().find(|def| def.path == path)
}

pub fn find_by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|def| def.name == name)
}
