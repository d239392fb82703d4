use client::http::{ReqwestTransport, TokioTimer};
use client::{
    ClientConfig, ErrorKind, PredictError, SelectedImage, SubmitOutcome, UploadPredictController,
    check_backend,
};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Reads one HTTP/1.1 request (headers plus body) off `stream`.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok());

    match content_length {
        Some(len) => {
            while buf.len() < header_end + len {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
        }
        None if head.contains("transfer-encoding: chunked") => {
            while !buf.ends_with(b"0\r\n\r\n") {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
        }
        None => {}
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// Single-shot backend: answers the first request with `status_line` and
/// `body`, then hands back the raw request it received.
async fn serve_once(status_line: &'static str, content_type: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });

    (format!("http://{addr}"), handle)
}

fn cow_png() -> SelectedImage {
    SelectedImage::new("cow.png", "image/png", b"PNGDATA-0123456789".to_vec())
}

#[tokio::test]
async fn posts_image_as_multipart_and_parses_prediction() {
    let (base, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"result":"Infected","probability":0.81}"#,
    )
    .await;
    let config = ClientConfig::new(&format!("{base}/predict")).unwrap();
    let mut controller = UploadPredictController::new(config);
    controller.select_image(cow_png());

    let outcome = controller.submit(&ReqwestTransport::new(), &TokioTimer).await;
    assert!(matches!(outcome, SubmitOutcome::Settled(Ok(_))), "{outcome:?}");

    let request = server.await.unwrap();
    let lowered = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /predict HTTP/1.1"), "{request}");
    assert!(lowered.contains("content-type: multipart/form-data; boundary="));
    assert!(lowered.contains(r#"name="image""#));
    assert!(lowered.contains(r#"filename="cow.png""#));
    assert!(lowered.contains("content-type: image/png"));
    assert!(request.contains("PNGDATA-0123456789"));
}

#[tokio::test]
async fn server_error_keeps_status_text_and_body() {
    let (base, server) = serve_once("500 Internal Server Error", "text/plain", "model unavailable").await;
    let config = ClientConfig::new(&format!("{base}/predict")).unwrap();
    let mut controller = UploadPredictController::new(config);
    controller.select_image(cow_png());

    controller.submit(&ReqwestTransport::new(), &TokioTimer).await;
    server.await.unwrap();

    assert_eq!(
        controller.error(),
        Some(&PredictError::Server {
            status: 500,
            status_text: "Internal Server Error".into(),
            body: "model unavailable".into(),
        })
    );
}

#[tokio::test]
async fn closed_port_is_reported_as_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(&format!("http://{addr}/predict")).unwrap();
    let mut controller = UploadPredictController::new(config);
    controller.select_image(cow_png());
    controller.submit(&ReqwestTransport::new(), &TokioTimer).await;

    let err = controller.error().expect("error stored");
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().contains(&addr.to_string()));
}

#[tokio::test]
async fn silent_backend_is_aborted_at_the_deadline() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let config = ClientConfig::new(&format!("http://{addr}/predict"))
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let mut controller = UploadPredictController::new(config);
    controller.select_image(cow_png());

    let outcome = controller.submit(&ReqwestTransport::new(), &TokioTimer).await;
    assert_eq!(outcome, SubmitOutcome::Settled(Err(PredictError::Timeout)));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn health_check_hits_backend_root() {
    let (base, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"status":"success","message":"Cow Lumpy Disease Prediction API is running!","model_path":"/srv/lumpy_disease_cnn.h5"}"#,
    )
    .await;
    let config = ClientConfig::new(&format!("{base}/predict")).unwrap();

    let health = check_backend(&config, &ReqwestTransport::new(), &TokioTimer)
        .await
        .unwrap();
    assert!(health.is_ok());
    assert_eq!(health.model_path.as_deref(), Some("/srv/lumpy_disease_cnn.h5"));

    let request = server.await.unwrap();
    assert!(request.starts_with("GET / HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn malformed_media_type_still_uploads() {
    let (base, server) = serve_once(
        "200 OK",
        "application/json",
        r#"{"result":"Healthy","probability":0.7}"#,
    )
    .await;
    let config = ClientConfig::new(&format!("{base}/predict")).unwrap();
    let mut controller = UploadPredictController::new(config);
    controller.select_image(SelectedImage::new("cow.png", "not a mime", b"PNGDATA".to_vec()));

    let outcome = controller.submit(&ReqwestTransport::new(), &TokioTimer).await;
    assert!(matches!(outcome, SubmitOutcome::Settled(Ok(_))), "{outcome:?}");

    let request = server.await.unwrap().to_ascii_lowercase();
    assert!(request.contains("content-type: application/octet-stream"), "{request}");
}

#[tokio::test]
async fn non_standard_status_gets_placeholder_text() {
    let (base, server) = serve_once("599 Whatever", "text/plain", "proxy gave up").await;
    let config = ClientConfig::new(&format!("{base}/predict")).unwrap();
    let mut controller = UploadPredictController::new(config);
    controller.select_image(cow_png());

    controller.submit(&ReqwestTransport::new(), &TokioTimer).await;
    server.await.unwrap();

    let message = controller.error().expect("error stored").to_string();
    assert_eq!(message, "Server responded with error: 599 Unknown Status. proxy gave up");
}
