//! Header breadcrumb labels derived from the current path.

#[cfg(test)]
#[path = "breadcrumbs_test.rs"]
mod breadcrumbs_test;

/// Labels for the path below the portal root:
/// `/customer/create-account` becomes `["Create Account"]`.
pub fn breadcrumbs(path: &str) -> Vec<String> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .skip(1)
        .map(title_case)
        .collect()
}

fn title_case(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
