use hnf_email_contracts::{Email, EmailService};
use hnf_email_impl::EmailServiceImpl;

#[tokio::test]
async fn log_transport_records_email() {
    let sut = EmailServiceImpl::log("website@example.com".parse().unwrap());

    let result = sut
        .send(Email {
            recipient: "contact@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            body: "Hello World!".into(),
            reply_to: Some("jane@example.com".parse().unwrap()),
        })
        .await
        .unwrap();

    assert!(result);
    sut.ping().await.unwrap();
}

#[tokio::test]
async fn smtp_transport_unreachable() {
    let sut = EmailServiceImpl::smtp(
        "smtp://127.0.0.1:1",
        "website@example.com".parse().unwrap(),
    )
    .unwrap();

    assert!(sut.ping().await.is_err());
}
