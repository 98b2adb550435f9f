use bytes::Bytes;
use core::convert::Infallible;
use folio_http_client::{Body, Client};
use http::{
    header::{CONTENT_TYPE, USER_AGENT},
    Request, Response, StatusCode,
};
use http_body_util::{BodyExt, Empty};
use pretty_assertions::assert_eq;
use serde::Serialize;
use tower::service_fn;

#[derive(Serialize)]
struct Submission<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[tokio::test]
async fn post_json_serialises_the_body() {
    let client = service_fn(|req: Request<Body>| async move {
        assert_eq!(req.method(), "POST");
        assert_eq!(req.uri().path(), "/api/contact");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert!(req.headers()[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("folio/"));

        let body = req.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            &body[..],
            br#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#
        );

        Ok::<_, Infallible>(Response::new(Empty::<Bytes>::new()))
    });
    let client = Client::builder().service(client);

    let response = client
        .post_json(
            "https://portfolio.example/api/contact",
            &Submission {
                name: "Ada",
                email: "ada@example.com",
                message: "Hi",
            },
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn request_user_agent_is_kept() {
    let client = service_fn(|req: Request<Body>| async move {
        assert_eq!(req.headers()[USER_AGENT], "portfolio-frontend");
        Ok::<_, Infallible>(Response::new(Empty::<Bytes>::new()))
    });
    let client = Client::builder().service(client);

    let req = Request::get("https://portfolio.example/")
        .header(USER_AGENT, "portfolio-frontend")
        .body(Body::empty())
        .unwrap();

    assert!(client.execute(req).await.unwrap().status().is_success());
}
