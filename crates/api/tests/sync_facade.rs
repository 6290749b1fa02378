//! Synchronization facade: gate, persistence and fan-out working together.

mod common;

use assert_matches::assert_matches;
use drawboard_core::authorization::Identity;
use drawboard_core::error::CoreError;
use drawboard_core::roles::UserRole;
use drawboard_core::shape::ShapeKind;
use drawboard_db::models::shape::{CreateShape, UpdateShape};
use drawboard_db::store::Store;
use drawboard_events::{BoardEvent, EventKind};
use futures::FutureExt;

fn rect(board_id: i64, layer_id: i64) -> CreateShape {
    CreateShape {
        board_id,
        layer_id,
        kind: ShapeKind::Rectangle,
        x: 10.0,
        y: 20.0,
        width: Some(100.0),
        height: Some(50.0),
        rotation: None,
        z_index: None,
        props: None,
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymous_add_shape_is_rejected_without_side_effects() {
    let app = common::build_test_app().await;
    let mut sub = app.sync().subscribe(None, EventKind::ShapeAdded, app.board_id()).unwrap();

    let result = app.sync().add_shape(None, rect(app.board_id(), app.layer_id())).await;

    assert_matches!(result, Err(CoreError::Unauthenticated(_)));
    assert!(app.store.list_shapes_by_board(app.board_id()).await.unwrap().is_empty());
    assert!(sub.recv().now_or_never().is_none(), "no event may be published");
}

#[tokio::test]
async fn anonymous_mutations_are_all_rejected() {
    let app = common::build_test_app().await;
    let shape = app
        .sync()
        .add_shape(Some(&app.identity), rect(app.board_id(), app.layer_id()))
        .await
        .unwrap();

    assert_matches!(
        app.sync().create_board(None, "Nope").await,
        Err(CoreError::Unauthenticated(_))
    );
    assert_matches!(
        app.sync().update_shape(None, shape.id, UpdateShape::default()).await,
        Err(CoreError::Unauthenticated(_))
    );
    assert_matches!(
        app.sync().delete_shape(None, shape.id).await,
        Err(CoreError::Unauthenticated(_))
    );
    assert_matches!(
        app.sync().add_comment(None, app.board_id(), "hi").await,
        Err(CoreError::Unauthenticated(_))
    );
    assert!(app.store.find_shape(shape.id).await.unwrap().is_some());
}

#[tokio::test]
async fn anonymous_reads_are_allowed() {
    let app = common::build_test_app().await;

    let board = app.sync().board(None, app.board_id()).await.unwrap();
    assert_eq!(board.board.name, "Test Board");

    let page = app.sync().comments(None, app.board_id(), None, None).await.unwrap();
    assert!(page.is_empty());

    assert_eq!(app.sync().me(None).await.unwrap(), None);
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_returns_the_callers_record() {
    let app = common::build_test_app().await;

    let me = app.sync().me(Some(&app.identity)).await.unwrap();

    assert_eq!(me, Some(app.user.clone()));
}

#[tokio::test]
async fn board_query_for_missing_board_is_not_found() {
    let app = common::build_test_app().await;

    assert_matches!(
        app.sync().board(None, 9_999).await,
        Err(CoreError::NotFound { entity: "Board", id: 9_999 })
    );
}

#[tokio::test]
async fn create_board_adds_default_layer_and_owner_membership() {
    let app = common::build_test_app().await;

    let board = app.sync().create_board(Some(&app.identity), "  Sketches ").await.unwrap();

    assert_eq!(board.board.name, "Sketches");
    assert_eq!(board.layers.len(), 1);
    assert_eq!(board.layers[0].name, "Layer 1");
    assert_eq!(board.layers[0].order, 1);

    let members = app.store.list_members(board.board.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, app.user.id);
}

#[tokio::test]
async fn create_board_rejects_blank_name() {
    let app = common::build_test_app().await;

    assert_matches!(
        app.sync().create_board(Some(&app.identity), "   ").await,
        Err(CoreError::Validation(_))
    );
}

#[tokio::test]
async fn comments_embed_their_authors() {
    let app = common::build_test_app().await;
    let bob = app.other_user("bob@draw.app").await;

    app.sync().add_comment(Some(&app.identity), app.board_id(), "first").await.unwrap();
    app.sync().add_comment(Some(&bob), app.board_id(), "second").await.unwrap();

    let page = app.sync().comments(None, app.board_id(), Some(10), None).await.unwrap();

    let rendered: Vec<(&str, &str)> = page
        .edges
        .iter()
        .map(|e| {
            let author = e.node.author.as_ref().unwrap();
            (e.node.comment.body.as_str(), author.email.as_str())
        })
        .collect();
    assert_eq!(
        rendered,
        vec![("second", "bob@draw.app"), ("first", "alice@draw.app")]
    );
    assert!(!page.page_info.has_next_page);
}

#[tokio::test]
async fn comment_from_unknown_user_is_rejected() {
    let app = common::build_test_app().await;
    let stranger = Identity::new(424_242, UserRole::User);

    assert_matches!(
        app.sync().add_comment(Some(&stranger), app.board_id(), "who am i").await,
        Err(CoreError::Store(_))
    );
    let page = app.sync().comments(None, app.board_id(), None, None).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn add_comment_to_missing_board_is_not_found() {
    let app = common::build_test_app().await;

    assert_matches!(
        app.sync().add_comment(Some(&app.identity), 9_999, "hello").await,
        Err(CoreError::NotFound { entity: "Board", .. })
    );
}

// ---------------------------------------------------------------------------
// Fan-out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shape_added_reaches_only_its_own_board_topic() {
    let app = common::build_test_app().await;
    let other = app.sync().create_board(Some(&app.identity), "Other").await.unwrap();

    let mut added_here = app.sync().subscribe(None, EventKind::ShapeAdded, app.board_id()).unwrap();
    let mut added_there = app
        .sync()
        .subscribe(None, EventKind::ShapeAdded, other.board.id)
        .unwrap();
    let mut comments_here = app
        .sync()
        .subscribe(None, EventKind::CommentAdded, app.board_id())
        .unwrap();

    let shape = app
        .sync()
        .add_shape(Some(&app.identity), rect(app.board_id(), app.layer_id()))
        .await
        .unwrap();

    assert_matches!(added_here.recv().await, Some(BoardEvent::ShapeAdded(s)) if s == shape);
    assert!(added_there.recv().now_or_never().is_none());
    assert!(comments_here.recv().now_or_never().is_none());
}

#[tokio::test]
async fn update_publishes_the_merged_record() {
    let app = common::build_test_app().await;
    let shape = app
        .sync()
        .add_shape(Some(&app.identity), rect(app.board_id(), app.layer_id()))
        .await
        .unwrap();
    let mut updates = app
        .sync()
        .subscribe(None, EventKind::ShapeUpdated, app.board_id())
        .unwrap();

    let changes: UpdateShape = serde_json::from_value(serde_json::json!({
        "x": 42.0,
        "props": { "fill": "#ff0000" }
    }))
    .unwrap();
    let updated = app
        .sync()
        .update_shape(Some(&app.identity), shape.id, changes)
        .await
        .unwrap();

    assert_eq!(updated.x, 42.0);
    assert_eq!(updated.props.fill.as_deref(), Some("#ff0000"));
    assert_matches!(updates.recv().await, Some(BoardEvent::ShapeUpdated(s)) if s == updated);
}

#[tokio::test]
async fn delete_fans_out_only_the_id() {
    let app = common::build_test_app().await;
    let shape = app
        .sync()
        .add_shape(Some(&app.identity), rect(app.board_id(), app.layer_id()))
        .await
        .unwrap();
    let mut deletions = app
        .sync()
        .subscribe(None, EventKind::ShapeDeleted, app.board_id())
        .unwrap();

    let id = app.sync().delete_shape(Some(&app.identity), shape.id).await.unwrap();

    assert_eq!(id, shape.id);
    let event = deletions.recv().await.unwrap();
    assert_eq!(event, BoardEvent::ShapeDeleted(shape.id));
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        serde_json::json!({ "event": "shape-deleted", "data": shape.id })
    );
}

#[tokio::test]
async fn failed_mutation_publishes_nothing() {
    let app = common::build_test_app().await;
    let mut added = app.sync().subscribe(None, EventKind::ShapeAdded, app.board_id()).unwrap();

    let mut bad = rect(app.board_id(), app.layer_id());
    bad.width = Some(-1.0);
    assert_matches!(
        app.sync().add_shape(Some(&app.identity), bad).await,
        Err(CoreError::Validation(_))
    );

    let missing_layer = rect(app.board_id(), 9_999);
    assert_matches!(
        app.sync().add_shape(Some(&app.identity), missing_layer).await,
        Err(CoreError::NotFound { entity: "Layer", .. })
    );

    assert!(added.recv().now_or_never().is_none());
}

#[tokio::test]
async fn comment_added_is_published_to_board_subscribers() {
    let app = common::build_test_app().await;
    let mut comments = app
        .sync()
        .subscribe(None, EventKind::CommentAdded, app.board_id())
        .unwrap();

    let comment = app
        .sync()
        .add_comment(Some(&app.identity), app.board_id(), "looks good")
        .await
        .unwrap();

    assert_eq!(comment.author_id, app.user.id);
    assert_matches!(comments.recv().await, Some(BoardEvent::CommentAdded(c)) if c == comment);
}

#[tokio::test]
async fn strict_mode_rejects_foreign_layer() {
    let mut config = common::test_config();
    config.strict_layer_check = true;
    let app = common::build_test_app_with(config).await;
    let other = app.sync().create_board(Some(&app.identity), "Other").await.unwrap();

    let cross = rect(app.board_id(), other.layers[0].id);

    assert_matches!(
        app.sync().add_shape(Some(&app.identity), cross).await,
        Err(CoreError::Validation(_))
    );
}
