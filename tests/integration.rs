use dayflow_credentials::{
    AppContext, CredentialConfig, CredentialError, Field, FixedClock, LoginId, LoginIdGenerator,
    Role, SerialRegistry, SessionError, SignInForm, SignUpForm, generate_login_id,
    generate_password, is_valid_email, is_valid_phone, validate_password,
};

fn sign_up_form(first: &str, last: &str, password: &str) -> SignUpForm {
    SignUpForm {
        company_name: "Dayflow".to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@dayflow.io", first.to_lowercase()),
        phone: "(555) 010-2030".to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
    }
}

#[test]
fn test_login_id_layout() {
    let id = generate_login_id("Dayflow Inc.", "John", "Harris", 2024, 1);
    let s = id.as_str();
    assert_eq!(s, "DAJOHA20240001");
    assert_eq!(s.len(), 14);
    assert!(s[..6].chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(&s[6..10], "2024");
    assert_eq!(&s[10..], "0001");
}

#[test]
fn test_field_validators() {
    assert!(is_valid_email("a@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a.com"));

    assert!(is_valid_phone("123-456-7890"));
    assert!(!is_valid_phone("12345"));

    let weak = validate_password("abc");
    assert!(!weak.is_valid);
    assert!(weak.message.contains("8 characters"));
    assert!(validate_password("Abcdefg1").is_valid);
}

#[test]
fn test_generated_password_satisfies_sign_up() {
    let password = generate_password();
    let form = sign_up_form("Maria", "Lopez", &password);
    assert!(form.validate().is_ok());
}

#[test]
fn test_registration_continues_existing_directory() {
    let config = CredentialConfig::default();
    let mut registry = SerialRegistry::with_max_serial(config.max_serial);
    registry.observe(&LoginId::parse("DAJOHA20240004").unwrap());

    let mut generator = LoginIdGenerator::new(&mut registry, FixedClock(2024));
    let john = sign_up_form("John", "Harris", "Abcdefg1")
        .register(&mut generator, &config)
        .unwrap();
    let maria = sign_up_form("Maria", "Lopez", "Abcdefg1")
        .register(&mut generator, &config)
        .unwrap();

    assert_eq!(john.as_str(), "DAJOHA20240005");
    assert_eq!(maria.as_str(), "DAMALO20240001");
    assert_eq!(registry.last_serial("DAJOHA2024"), Some(5));
}

#[test]
fn test_registration_reports_form_errors() {
    let config = CredentialConfig::default();
    let mut generator = LoginIdGenerator::new(SerialRegistry::new(), FixedClock(2024));
    let mut form = sign_up_form("John", "Harris", "abcdefgh");
    form.confirm_password = "something else".to_string();

    match form.register(&mut generator, &config) {
        Err(CredentialError::Form(errors)) => {
            assert_eq!(
                errors.get(Field::Password),
                Some("Password must contain an uppercase letter")
            );
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Passwords do not match")
            );
        }
        other => panic!("expected form errors, got {other:?}"),
    }
}

#[test]
fn test_sign_up_then_session_lifecycle() {
    let config = CredentialConfig::default();
    let mut generator = LoginIdGenerator::new(SerialRegistry::new(), FixedClock(2024));
    let password = generate_password();
    let login_id = sign_up_form("John", "Harris", &password)
        .register(&mut generator, &config)
        .unwrap();

    let mut ctx = AppContext::new(config);
    let form = SignInForm::new(login_id.as_str(), password);
    let session = ctx
        .sign_in(&form, "John Harris", "john@dayflow.io")
        .unwrap();
    assert_eq!(session.login_id(), login_id.as_str());
    assert_eq!(session.role(), Role::Employee);
    assert_eq!(
        ctx.require_privileged().unwrap_err(),
        SessionError::Forbidden(login_id.to_string())
    );

    let closed = ctx.sign_out().unwrap();
    assert_eq!(closed.email(), "john@dayflow.io");
    assert_eq!(ctx.require_session().unwrap_err(), SessionError::NotSignedIn);
}

#[test]
fn test_admin_sign_in() {
    let mut ctx = AppContext::default();
    ctx.sign_in(&SignInForm::new("Admin", "pw"), "Admin", "admin@dayflow.io")
        .unwrap();
    assert_eq!(ctx.require_privileged().unwrap().role(), Role::Admin);
}

#[test]
fn test_registered_id_spelling_hr_signs_in_as_employee() {
    let config = CredentialConfig::default();
    let mut generator = LoginIdGenerator::new(SerialRegistry::new(), FixedClock(2024));
    let login_id = sign_up_form("Chris", "Ross", "Abcdefg1")
        .register(&mut generator, &config)
        .unwrap();
    assert_eq!(login_id.as_str(), "DACHRO20240001");

    let mut ctx = AppContext::new(config);
    let form = SignInForm::new(login_id.as_str(), "Abcdefg1");
    let session = ctx.sign_in(&form, "Chris Ross", "chris@dayflow.io").unwrap();
    assert_eq!(session.role(), Role::Employee);
    assert!(ctx.require_privileged().is_err());
}
