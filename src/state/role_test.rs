use super::*;

fn user_with_roles(roles: &[&str]) -> UserRecord {
    UserRecord {
        roles: roles.iter().map(|role| (*role).to_owned()).collect(),
        ..UserRecord::default()
    }
}

#[test]
fn from_claim_maps_backend_roles() {
    assert_eq!(Role::from_claim("ROLE_USER"), Some(Role::Customer));
    assert_eq!(Role::from_claim("ROLE_EMPLOYEE"), Some(Role::Employee));
    assert_eq!(Role::from_claim("ROLE_ADMIN"), Some(Role::Admin));
    assert_eq!(Role::from_claim("ROLE_AUDITOR"), None);
    assert_eq!(Role::from_claim("role_admin"), None);
}

#[test]
fn resolve_without_user_is_anonymous() {
    assert_eq!(Role::resolve(None), Role::Anonymous);
}

#[test]
fn resolve_uses_first_claim_only() {
    let user = user_with_roles(&["ROLE_EMPLOYEE", "ROLE_ADMIN"]);
    assert_eq!(Role::resolve(Some(&user)), Role::Employee);
}

#[test]
fn resolve_unknown_or_missing_claim_is_anonymous() {
    assert_eq!(Role::resolve(Some(&user_with_roles(&["ROLE_AUDITOR"]))), Role::Anonymous);
    assert_eq!(Role::resolve(Some(&user_with_roles(&[]))), Role::Anonymous);
}

#[test]
fn home_routes_by_role() {
    assert_eq!(Role::Admin.home(), "/admin");
    assert_eq!(Role::Employee.home(), "/employee");
    assert_eq!(Role::Customer.home(), "/customer");
    assert_eq!(Role::Anonymous.home(), "/");
}

#[test]
fn section_role_round_trips() {
    for section in Section::ALL {
        assert_eq!(section.role().section(), Some(section));
    }
    assert_eq!(Role::Anonymous.section(), None);
}

#[test]
fn for_path_matches_whole_segments() {
    assert_eq!(Section::for_path("/customer"), Some(Section::Customer));
    assert_eq!(Section::for_path("/customer/create-account"), Some(Section::Customer));
    assert_eq!(Section::for_path("/employee/loans"), Some(Section::Employee));
    assert_eq!(Section::for_path("/admin"), Some(Section::Admin));
    assert_eq!(Section::for_path("/administrator"), None);
    assert_eq!(Section::for_path("/login"), None);
    assert_eq!(Section::for_path("/"), None);
}
