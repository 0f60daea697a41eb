use super::*;
use crate::form::{ConfirmationForm, NoCelebration, SubmissionState};
use crate::validation::FormField;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use shared::{domain::ConfirmationType, protocol::GuestEntry};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<InviteHttpRequest>>>>,
}

async fn handle_invite(
    State(state): State<ServerState>,
    Json(payload): Json<InviteHttpRequest>,
) -> StatusCode {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(payload);
    }
    StatusCode::CREATED
}

async fn spawn_invite_server(
    route: &str,
) -> std::io::Result<(String, oneshot::Receiver<InviteHttpRequest>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route(route, post(handle_invite))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

async fn handle_rejected_invite(State(hits): State<Arc<AtomicUsize>>) -> StatusCode {
    hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::SERVICE_UNAVAILABLE
}

async fn spawn_rejecting_server() -> std::io::Result<(String, Arc<AtomicUsize>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/invites", post(handle_rejected_invite))
        .with_state(hits.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), hits))
}

fn request() -> ConfirmationRequest {
    ConfirmationRequest {
        confirmation_type: ConfirmationType::Friends,
        phone: "(11) 98888-7777".into(),
        people: vec![GuestEntry::new("Maria Silva"), GuestEntry::new("João")],
    }
}

fn client_for(base: &str) -> HttpSubmissionClient {
    HttpSubmissionClient::new(&Url::parse(base).expect("base url"))
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    assert_eq!(
        client_for("https://rsvp.example.com/v1/").endpoint(),
        "https://rsvp.example.com/v1/invites"
    );
    assert_eq!(
        client_for("https://rsvp.example.com").endpoint(),
        "https://rsvp.example.com/invites"
    );
}

#[tokio::test]
async fn posts_flattened_confirmation_body() {
    let (server_url, payload_rx) = spawn_invite_server("/invites").await.expect("spawn server");

    client_for(&server_url)
        .send_confirmation(&request())
        .await
        .expect("send confirmation");

    let payload = payload_rx.await.expect("payload");
    assert_eq!(
        payload,
        InviteHttpRequest {
            confirmation_type: ConfirmationType::Friends,
            phone: "(11) 98888-7777".into(),
            people: vec!["Maria Silva".into(), "João".into()],
        }
    );
}

#[tokio::test]
async fn non_success_status_is_rejected_without_retry() {
    let (server_url, hits) = spawn_rejecting_server().await.expect("spawn server");

    let err = client_for(&server_url)
        .send_confirmation(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Rejected { status: 503 }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client_for(&format!("http://{addr}"))
        .send_confirmation(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Transport(_)));
}

#[tokio::test]
async fn form_submission_reaches_prefixed_endpoint() {
    let (server_url, payload_rx) = spawn_invite_server("/api/invites")
        .await
        .expect("spawn server");
    let client = client_for(&format!("{server_url}/api"));

    let mut form = ConfirmationForm::new(ConfirmationType::Family);
    form.set_phone("(11) 98888-7777").expect("set phone");
    form.update_field(FormField::Person(0), "Maria Silva")
        .expect("update");

    let state = form.submit(&client, &NoCelebration).await.expect("submit");

    assert_eq!(state, SubmissionState::Succeeded);
    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload.confirmation_type, ConfirmationType::Family);
    assert_eq!(payload.people, vec!["Maria Silva".to_string()]);
}
