//! Coordinator tests: a real cart actor driven through `CartClient` with
//! scripted order backends.
//!
//! Pattern: real actor + controllable collaborators. The gated backend lets
//! a test hold a submission open while it probes the cart from the side.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use guest_orders::backend::{BackendError, OrderBackend, StaticIdentity};
use guest_orders::cart_actor::CartError;
use guest_orders::clients::CartClient;
use guest_orders::model::{
    ActorId, DraftState, MenuItem, Order, OrderDraft, OrderStatus, OrderType, PaymentStatus,
};
use guest_orders::pricing::PricingConfig;
use rust_decimal_macros::dec;
use tokio::sync::{mpsc, Mutex};

/// Backend that signals when `create_order` is entered and then waits for
/// the test to release a scripted result.
struct GatedBackend {
    entered: mpsc::UnboundedSender<()>,
    release: Mutex<mpsc::UnboundedReceiver<Result<Order, BackendError>>>,
}

#[async_trait]
impl OrderBackend for GatedBackend {
    async fn create_order(&self, _draft: OrderDraft) -> Result<Order, BackendError> {
        let _ = self.entered.send(());
        let mut release = self.release.lock().await;
        release
            .recv()
            .await
            .unwrap_or(Err(BackendError::Unavailable("script exhausted".into())))
    }
}

/// Backend that always refuses the order.
struct RejectingBackend;

#[async_trait]
impl OrderBackend for RejectingBackend {
    async fn create_order(&self, _draft: OrderDraft) -> Result<Order, BackendError> {
        Err(BackendError::Rejected("kitchen closed".into()))
    }
}

fn sample_order() -> Order {
    Order {
        id: "order_1".into(),
        order_number: "ORD-TEST".into(),
        placed_by: ActorId::new("guest_7"),
        items: Vec::new(),
        order_type: OrderType::RoomService,
        delivery_address: Some("Room 412".into()),
        total: dec!(21.50),
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        created_at: Utc::now(),
    }
}

fn burger() -> MenuItem {
    MenuItem::new("item_1", "Club Burger", dec!(15.00), "mains")
}

fn spawn_cart_system(
    backend: Arc<dyn OrderBackend>,
    identity: Arc<StaticIdentity>,
) -> (CartClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = guest_orders::cart_actor::new(backend, identity);
    let handle = tokio::spawn(actor.run(PricingConfig::default()));
    (client, handle)
}

fn gated_backend() -> (
    Arc<GatedBackend>,
    mpsc::UnboundedReceiver<()>,
    mpsc::UnboundedSender<Result<Order, BackendError>>,
) {
    let (entered_tx, entered_rx) = mpsc::unbounded_channel();
    let (release_tx, release_rx) = mpsc::unbounded_channel();
    let backend = Arc::new(GatedBackend {
        entered: entered_tx,
        release: Mutex::new(release_rx),
    });
    (backend, entered_rx, release_tx)
}

async fn filled_room_service_cart(client: &CartClient) -> String {
    let cart_id = client.open_cart(OrderType::RoomService).await.unwrap();
    client.set_quantity(&cart_id, burger(), 1).await.unwrap();
    client
        .set_delivery_address(&cart_id, Some("Room 412".into()))
        .await
        .unwrap();
    cart_id
}

#[tokio::test]
async fn concurrent_submission_is_rejected_while_reads_stay_available() {
    let (backend, mut entered_rx, release_tx) = gated_backend();
    let identity = Arc::new(StaticIdentity::signed_in("guest_7"));
    let (client, _handle) = spawn_cart_system(backend, identity);

    let cart_id = filled_room_service_cart(&client).await;

    // First submission: parks inside the gated backend.
    let submit_client = client.clone();
    let submit_cart = cart_id.clone();
    let first = tokio::spawn(async move { submit_client.submit(&submit_cart).await });
    entered_rx.recv().await.expect("backend never entered");

    // Second submission and mutations are rejected...
    let err = client.submit(&cart_id).await.unwrap_err();
    assert_eq!(err, CartError::SubmissionInProgress);
    let err = client.set_quantity(&cart_id, burger(), 3).await.unwrap_err();
    assert_eq!(err, CartError::SubmissionInProgress);

    // ...but reads are not blocked by the in-flight remote call.
    assert_eq!(client.items(&cart_id).await.unwrap().len(), 1);
    let breakdown = client.breakdown(&cart_id).await.unwrap();
    assert_eq!(breakdown.total, dec!(21.50));
    assert_eq!(client.state(&cart_id).await.unwrap(), DraftState::Submitting);

    // Release the backend; the first submission is unaffected.
    release_tx.send(Ok(sample_order())).unwrap();
    let order = first.await.unwrap().unwrap();
    assert_eq!(order.order_number, "ORD-TEST");

    // Confirmed submissions clear the cart.
    assert!(client.items(&cart_id).await.unwrap().is_empty());
    assert_eq!(client.state(&cart_id).await.unwrap(), DraftState::Confirmed);
}

#[tokio::test]
async fn backend_failure_keeps_the_cart_and_allows_resubmission() {
    let identity = Arc::new(StaticIdentity::signed_in("guest_7"));
    let (client, _handle) = spawn_cart_system(Arc::new(RejectingBackend), identity);

    let cart_id = filled_room_service_cart(&client).await;

    let err = client.submit(&cart_id).await.unwrap_err();
    let reason = match err {
        CartError::Remote(reason) => reason,
        other => panic!("expected Remote error, got {:?}", other),
    };
    assert!(reason.contains("kitchen closed"));

    // The cart retains its line items and records the failure.
    assert_eq!(client.items(&cart_id).await.unwrap().len(), 1);
    assert_eq!(
        client.state(&cart_id).await.unwrap(),
        DraftState::Failed(reason)
    );

    // Resubmitting the unmodified cart re-runs validation and reaches the
    // backend again (which still refuses).
    let err = client.submit(&cart_id).await.unwrap_err();
    assert!(matches!(err, CartError::Remote(_)));
    assert_eq!(client.items(&cart_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn cancelling_a_pending_submission_reverts_to_editing() {
    let (backend, mut entered_rx, release_tx) = gated_backend();
    let identity = Arc::new(StaticIdentity::signed_in("guest_7"));
    let (client, _handle) = spawn_cart_system(backend, identity);

    let cart_id = filled_room_service_cart(&client).await;

    let submit_client = client.clone();
    let submit_cart = cart_id.clone();
    let pending = tokio::spawn(async move { submit_client.submit(&submit_cart).await });
    entered_rx.recv().await.expect("backend never entered");

    // Cancel while the backend call is in flight.
    assert!(client.cancel(&cart_id).await.unwrap());
    assert_eq!(client.state(&cart_id).await.unwrap(), DraftState::Editing);

    // The late backend success is discarded: no cart clear, no order.
    release_tx.send(Ok(sample_order())).unwrap();
    let err = pending.await.unwrap().unwrap_err();
    assert_eq!(err, CartError::Cancelled);
    assert_eq!(client.items(&cart_id).await.unwrap().len(), 1);

    // Cancelling with nothing pending reports false.
    assert!(!client.cancel(&cart_id).await.unwrap());

    // The cart is editable again.
    client.set_quantity(&cart_id, burger(), 2).await.unwrap();
}

#[tokio::test]
async fn stale_completion_after_cancel_and_resubmit_is_discarded() {
    let (backend, mut entered_rx, release_tx) = gated_backend();
    let identity = Arc::new(StaticIdentity::signed_in("guest_7"));
    let (client, _handle) = spawn_cart_system(backend, identity);

    let cart_id = filled_room_service_cart(&client).await;

    // First submission parks in the backend.
    let first_client = client.clone();
    let first_cart = cart_id.clone();
    let first = tokio::spawn(async move { first_client.submit(&first_cart).await });
    entered_rx.recv().await.expect("backend never entered");

    // Cancel it, edit, and submit again: the cart is Submitting once more,
    // but for a different attempt.
    assert!(client.cancel(&cart_id).await.unwrap());
    client.set_quantity(&cart_id, burger(), 2).await.unwrap();
    let second_client = client.clone();
    let second_cart = cart_id.clone();
    let second = tokio::spawn(async move { second_client.submit(&second_cart).await });
    entered_rx.recv().await.expect("backend never re-entered");

    // The cancelled attempt's backend call completes first. Its stale order
    // must not confirm the live draft or clear the cart.
    let mut stale = sample_order();
    stale.order_number = "ORD-STALE".into();
    release_tx.send(Ok(stale)).unwrap();
    let err = first.await.unwrap().unwrap_err();
    assert_eq!(err, CartError::Cancelled);
    assert_eq!(client.items(&cart_id).await.unwrap().len(), 1);
    assert_eq!(client.items(&cart_id).await.unwrap()[0].quantity, 2);
    assert_eq!(client.state(&cart_id).await.unwrap(), DraftState::Submitting);

    // The live attempt still confirms normally.
    let mut live = sample_order();
    live.order_number = "ORD-LIVE".into();
    release_tx.send(Ok(live)).unwrap();
    let order = second.await.unwrap().unwrap();
    assert_eq!(order.order_number, "ORD-LIVE");
    assert!(client.items(&cart_id).await.unwrap().is_empty());
    assert_eq!(client.state(&cart_id).await.unwrap(), DraftState::Confirmed);
}

#[tokio::test]
async fn validation_failures_never_reach_the_backend() {
    let (backend, mut entered_rx, _release_tx) = gated_backend();

    // Not authenticated.
    let (client, _handle) = spawn_cart_system(backend.clone(), Arc::new(StaticIdentity::anonymous()));
    let cart_id = filled_room_service_cart(&client).await;
    assert_eq!(
        client.submit(&cart_id).await.unwrap_err(),
        CartError::NotAuthenticated
    );

    // Empty cart.
    let identity = Arc::new(StaticIdentity::signed_in("guest_7"));
    let (client, _handle) = spawn_cart_system(backend.clone(), identity.clone());
    let cart_id = client.open_cart(OrderType::Restaurant).await.unwrap();
    assert_eq!(client.submit(&cart_id).await.unwrap_err(), CartError::EmptyCart);

    // Room service with a blank delivery address.
    let (client, _handle) = spawn_cart_system(backend, identity);
    let cart_id = client.open_cart(OrderType::RoomService).await.unwrap();
    client.set_quantity(&cart_id, burger(), 1).await.unwrap();
    client
        .set_delivery_address(&cart_id, Some("   ".into()))
        .await
        .unwrap();
    assert_eq!(
        client.submit(&cart_id).await.unwrap_err(),
        CartError::MissingDeliveryAddress
    );
    // The cart is untouched and still editable.
    assert_eq!(client.items(&cart_id).await.unwrap().len(), 1);
    assert_eq!(client.state(&cart_id).await.unwrap(), DraftState::Editing);

    // No validation failure ever entered the backend.
    assert!(entered_rx.try_recv().is_err());
}
