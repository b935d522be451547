use super::*;

fn employee_form() -> EmployeeForm {
    EmployeeForm {
        name: "Sam Ortiz".to_owned(),
        email: "sam@bankabc.com".to_owned(),
        password: "welcome-1".to_owned(),
        phone: "555-0101".to_owned(),
        date_of_birth: "1985-02-11".to_owned(),
        branch_id: "3".to_owned(),
    }
}

#[test]
fn valid_employee_form() {
    let request = validate_employee(&employee_form()).expect("valid");
    assert_eq!(request.employee_name, "Sam Ortiz");
    assert_eq!(request.branch_id, 3);
}

#[test]
fn employee_needs_branch() {
    let form = EmployeeForm { branch_id: String::new(), ..employee_form() };
    assert_eq!(validate_employee(&form), Err("Choose a branch."));
}

#[test]
fn employee_needs_strong_enough_password() {
    let form = EmployeeForm { password: "short".to_owned(), ..employee_form() };
    assert_eq!(validate_employee(&form), Err("Password must be at least 8 characters."));
}

#[test]
fn employee_needs_valid_email_and_dob() {
    let form = EmployeeForm { email: "sam".to_owned(), ..employee_form() };
    assert_eq!(validate_employee(&form), Err("Enter a valid email address."));
    let form = EmployeeForm { date_of_birth: "yesterday".to_owned(), ..employee_form() };
    assert_eq!(validate_employee(&form), Err("Enter the date of birth as YYYY-MM-DD."));
}

#[test]
fn branch_needs_name_and_address() {
    let branch = validate_branch(" Harbor ", " 9 Dock Rd ").expect("valid");
    assert_eq!(branch, BranchDto { branch_id: None, branch_name: "Harbor".to_owned(), branch_addr: "9 Dock Rd".to_owned() });
    assert_eq!(validate_branch("Harbor", "  "), Err("Enter the branch name and address."));
}
