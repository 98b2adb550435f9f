use folio_email::{
    lettre::message::Mailbox, service::SEND_FAILURE, ContactService, RawSubmission,
};
use folio_error::ErrorType;
use folio_test::{
    assert_display_eq, contact_service, RecordingTransport, FROM_ADDRESS, TO_ADDRESS,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn raw(name: &str, email: &str, message: &str) -> RawSubmission {
    RawSubmission {
        name: Some(name.into()),
        email: Some(email.into()),
        message: Some(message.into()),
    }
}

#[tokio::test]
async fn sends_exactly_once() {
    let transport = RecordingTransport::new();
    let service = contact_service(transport.clone());

    service.submit(raw("Jane", "jane@x.com", "Hi")).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "jane@x.com");
    assert_display_eq!(sent[0].to, TO_ADDRESS);
    assert!(sent[0].subject.contains("Jane"));
}

#[tokio::test]
async fn invalid_submission_never_sends() {
    let transport = RecordingTransport::new();
    let service = contact_service(transport.clone());

    let error = service
        .submit(raw("", "jane@x.com", "Hi"))
        .await
        .unwrap_err();

    assert_eq!(
        *error.error_type(),
        ErrorType::BadRequest(Some("Missing required fields.".into()))
    );
    assert_eq!(transport.attempts(), 0);
    assert_eq!(transport.verifications(), 0);
}

#[tokio::test]
async fn transport_failure_is_generic() {
    let transport = RecordingTransport::failing("535 5.7.8 Username and Password not accepted");
    let service = contact_service(transport.clone());

    let error = service
        .submit(raw("Jane", "jane@x.com", "Hi"))
        .await
        .unwrap_err();

    assert_eq!(
        *error.error_type(),
        ErrorType::Other(Some(SEND_FAILURE.into()))
    );
    assert!(error.to_string().contains("535"));
    assert_eq!(transport.attempts(), 1);
}

#[tokio::test]
async fn verifies_once() {
    let transport = RecordingTransport::new();
    let service = contact_service(transport.clone());

    for _ in 0..3 {
        service.submit(raw("Jane", "jane@x.com", "Hi")).await.unwrap();
    }

    assert_eq!(transport.verifications(), 1);
    assert_eq!(transport.sent().len(), 3);
}

#[tokio::test]
async fn failed_verification_still_sends() {
    let transport = RecordingTransport::new().with_verify_failure("connection refused");
    let service = contact_service(transport.clone());

    service.submit(raw("Jane", "jane@x.com", "Hi")).await.unwrap();

    assert_eq!(transport.verifications(), 1);
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn slow_transport_times_out() {
    let transport = RecordingTransport::new().with_delay(Duration::from_secs(5));
    let service = ContactService::builder()
        .transport(transport.clone())
        .from_mailbox(FROM_ADDRESS.parse::<Mailbox>().unwrap())
        .to_mailbox(TO_ADDRESS.parse::<Mailbox>().unwrap())
        .send_timeout(Duration::from_millis(50))
        .build();

    let error = service
        .submit(raw("Jane", "jane@x.com", "Hi"))
        .await
        .unwrap_err();

    assert_eq!(
        *error.error_type(),
        ErrorType::Other(Some(SEND_FAILURE.into()))
    );
    assert_eq!(transport.attempts(), 1);
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn dropped_request_does_not_cancel_send() {
    let transport = RecordingTransport::new().with_delay(Duration::from_millis(100));
    let service = contact_service(transport.clone());

    let submit = service.submit(raw("Jane", "jane@x.com", "Hi"));
    let _ = tokio::time::timeout(Duration::from_millis(20), submit).await;

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(transport.sent().len(), 1);
}
