use super::*;

#[tokio::test]
async fn simulated_login_builds_user_from_email() {
    let provider = SimulatedAuthProvider::new(Duration::from_millis(1000));
    let creds = Credentials::Login { email: "a@b.com".to_owned(), password: "x".to_owned() };
    let user = provider.authenticate(&creds).await.unwrap();
    assert_eq!(user, User::new("a@b.com"));
}

#[tokio::test]
async fn simulated_register_includes_name() {
    let provider = SimulatedAuthProvider::new(Duration::ZERO);
    let creds = Credentials::Register {
        name: "Ada".to_owned(),
        email: "ada@b.com".to_owned(),
        password: "x".to_owned(),
    };
    let user = provider.authenticate(&creds).await.unwrap();
    assert_eq!(user, User::new("ada@b.com").with_name("Ada"));
}

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials::Login { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn credentials_email_accessor() {
    let creds = Credentials::Register { name: "n".to_owned(), email: "e@x.io".to_owned(), password: "p".to_owned() };
    assert_eq!(creds.email(), "e@x.io");
}
