use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn classify_public_only_entry_pages() {
    assert_eq!(classify("/"), RouteKind::PublicOnly);
    assert_eq!(classify("/login"), RouteKind::PublicOnly);
    assert_eq!(classify("/register/"), RouteKind::PublicOnly);
}

#[test]
fn classify_dashboard_tree_is_protected() {
    for path in [
        "/dashboard",
        "/dashboard/",
        "/dashboard/overview",
        "/dashboard/weather",
        "/dashboard/news",
        "/dashboard/finance",
        "/dashboard/settings",
        "/dashboard/help",
    ] {
        assert_eq!(classify(path), RouteKind::Protected, "{path}");
    }
}

#[test]
fn classify_unknown_is_public() {
    assert_eq!(classify("/pricing"), RouteKind::Public);
    assert_eq!(classify("/dashboard/unknown"), RouteKind::Public);
}

#[test]
fn empty_path_is_home() {
    assert_eq!(classify(""), RouteKind::PublicOnly);
}

// =============================================================
// login_with_return / from_query
// =============================================================

#[test]
fn login_with_return_encodes_location() {
    assert_eq!(login_with_return("/dashboard/news"), "/login?from=%2Fdashboard%2Fnews");
}

#[test]
fn with_return_carries_location_between_auth_pages() {
    assert_eq!(with_return(REGISTER, Some("/dashboard/news")), "/register?from=%2Fdashboard%2Fnews");
    assert_eq!(with_return(REGISTER, None), "/register");
    assert_eq!(with_return(LOGIN, Some("")), "/login");
}

#[test]
fn from_query_decodes_value() {
    assert_eq!(from_query("?from=%2Fdashboard%2Fnews").as_deref(), Some("/dashboard/news"));
    assert_eq!(from_query("x=1&from=%2Fdashboard").as_deref(), Some("/dashboard"));
}

#[test]
fn from_query_round_trips_query_strings() {
    let url = login_with_return("/dashboard/finance?ticker=AAPL&range=1d");
    let search = url.split_once('?').map(|(_, q)| q).unwrap();
    assert_eq!(from_query(search).as_deref(), Some("/dashboard/finance?ticker=AAPL&range=1d"));
}

#[test]
fn from_query_missing_or_empty_is_none() {
    assert_eq!(from_query(""), None);
    assert_eq!(from_query("?next=%2Fdashboard"), None);
    assert_eq!(from_query("?from="), None);
}

// =============================================================
// return_target
// =============================================================

#[test]
fn return_target_defaults_to_dashboard() {
    assert_eq!(return_target(None), DASHBOARD);
}

#[test]
fn return_target_keeps_protected_location() {
    assert_eq!(return_target(Some("/dashboard/weather")), "/dashboard/weather");
    assert_eq!(return_target(Some("/dashboard/news?q=rust")), "/dashboard/news?q=rust");
}

#[test]
fn return_target_rejects_external_and_public() {
    for from in ["https://evil.test/", "//evil.test", "/\\evil.test", "dashboard", "/login", "/", "/pricing"] {
        assert_eq!(return_target(Some(from)), DASHBOARD, "{from}");
    }
}

// =============================================================
// DashboardSection
// =============================================================

#[test]
fn dashboard_sections_have_distinct_paths() {
    for (i, a) in DashboardSection::ALL.iter().enumerate() {
        for (j, b) in DashboardSection::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
