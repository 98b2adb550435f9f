use core::convert::Infallible;
use folio_email::{
    transport::SendgridTransport, ContactSubmission, MailTransport, OutboundMessage,
    RawSubmission,
};
use folio_http_client::{Body, Client};
use folio_test::{build_json_response, FROM_ADDRESS, TO_ADDRESS};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use tower::service_fn;

fn outbound() -> OutboundMessage {
    let submission = ContactSubmission::validate(RawSubmission {
        name: Some("Jane".into()),
        email: Some("jane@x.com".into()),
        message: Some("Hello\nthere".into()),
    })
    .unwrap();

    OutboundMessage::compose(
        &submission,
        &FROM_ADDRESS.parse().unwrap(),
        &TO_ADDRESS.parse().unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn posts_mail_send() {
    let client = service_fn(|req: Request<Body>| async move {
        assert_eq!(req.method(), "POST");
        assert_eq!(
            req.uri().to_string(),
            "https://api.sendgrid.test/v3/mail/send"
        );
        assert_eq!(req.headers()["Authorization"], "Bearer SG.secret");

        let body = req.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains(r#""reply_to":{"email":"jane@x.com"}"#));
        assert!(body.contains(r#""to":[{"email":"owner@example.com"}]"#));
        assert!(body.contains(r#""from":{"email":"mailer@example.com","name":"Portfolio Contact"}"#));
        assert!(body.contains(r#""subject":"New Contact Form Submission from Jane (jane@x.com)""#));
        assert!(body.contains(r#""type":"text/plain""#));
        assert!(body.contains("Hello<br>there"));

        Ok::<_, Infallible>(build_json_response(StatusCode::ACCEPTED, ""))
    });

    let transport = SendgridTransport::builder()
        .api_key("SG.secret")
        .api_url("https://api.sendgrid.test/")
        .client(Client::builder().service(client))
        .build();

    transport.send(&outbound()).await.unwrap();
}

#[tokio::test]
async fn provider_error_is_surfaced() {
    let client = service_fn(|_req: Request<Body>| async move {
        Ok::<_, Infallible>(build_json_response(
            StatusCode::UNAUTHORIZED,
            r#"{"errors":[{"message":"The provided authorization grant is invalid"}]}"#,
        ))
    });

    let transport = SendgridTransport::builder()
        .api_key("SG.wrong")
        .api_url("https://api.sendgrid.test")
        .client(Client::builder().service(client))
        .build();

    let error = transport.send(&outbound()).await.unwrap_err();
    let (status, body) = match error {
        folio_email::Error::Api { status, body } => (status, body),
        other => panic!("expected a provider error, got {other:?}"),
    };

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("authorization grant is invalid"));
}

#[tokio::test]
async fn verify_checks_scopes() {
    let client = service_fn(|req: Request<Body>| async move {
        assert_eq!(req.method(), "GET");
        assert_eq!(req.uri().path(), "/v3/scopes");
        assert_eq!(req.headers()["Authorization"], "Bearer SG.secret");

        Ok::<_, Infallible>(build_json_response(
            StatusCode::OK,
            r#"{"scopes":["mail.send"]}"#,
        ))
    });

    let transport = SendgridTransport::builder()
        .api_key("SG.secret")
        .api_url("https://api.sendgrid.test")
        .client(Client::builder().service(client))
        .build();

    transport.verify().await.unwrap();
}
