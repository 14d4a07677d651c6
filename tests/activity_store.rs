mod common;

use common::{default_store, store_with, CHESS_CLUB};
use mergington::database::seed;

#[tokio::test]
async fn list_all_returns_seeded_activities_in_storage_order() {
    let store = default_store().await;
    let listed = store.list_all().await.unwrap();

    let seeded = seed::default_activities();
    assert_eq!(listed.len(), seeded.len());
    for (stored, input) in listed.iter().zip(seeded) {
        assert_eq!(stored.name, input.name);
        assert_eq!(stored.description, input.description);
        assert_eq!(stored.schedule, input.schedule);
        assert_eq!(stored.max_participants, input.max_participants);
        assert_eq!(stored.participants, input.participants);
    }
}

#[tokio::test]
async fn find_by_name_is_exact() {
    let store = default_store().await;

    let chess = store.find_by_name("Chess Club").await.unwrap().unwrap();
    assert_eq!(chess.max_participants, 12);
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );

    assert!(store.find_by_name("chess club").await.unwrap().is_none());
    assert!(store.find_by_name("Nonexistent Club").await.unwrap().is_none());
}

#[tokio::test]
async fn add_participant_only_changes_once() {
    let store = store_with(&[CHESS_CLUB]).await;

    assert!(store
        .add_participant("Chess Club", "newkid@mergington.edu")
        .await
        .unwrap());
    assert!(!store
        .add_participant("Chess Club", "newkid@mergington.edu")
        .await
        .unwrap());

    let chess = store.find_by_name("Chess Club").await.unwrap().unwrap();
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "newkid@mergington.edu"]
    );
}

#[tokio::test]
async fn add_participant_to_missing_activity_is_a_no_op() {
    let store = store_with(&[CHESS_CLUB]).await;

    assert!(!store
        .add_participant("Nonexistent Club", "newkid@mergington.edu")
        .await
        .unwrap());
    assert!(store.find_by_name("Nonexistent Club").await.unwrap().is_none());
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn remove_participant_reports_whether_a_row_went_away() {
    let store = store_with(&[CHESS_CLUB]).await;

    assert!(store
        .remove_participant("Chess Club", "michael@mergington.edu")
        .await
        .unwrap());
    assert!(!store
        .remove_participant("Chess Club", "michael@mergington.edu")
        .await
        .unwrap());
    assert!(!store
        .remove_participant("Nonexistent Club", "michael@mergington.edu")
        .await
        .unwrap());

    let chess = store.find_by_name("Chess Club").await.unwrap().unwrap();
    assert!(chess.participants.is_empty());
}

#[tokio::test]
async fn concurrent_adds_for_the_same_student_succeed_once() {
    let store = store_with(&[CHESS_CLUB]).await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .add_participant("Chess Club", "racer@mergington.edu")
                .await
                .unwrap()
        }));
    }

    let mut wins = 0;
    for h in handles {
        if h.await.unwrap() {
            wins += 1;
        }
    }
    assert_eq!(wins, 1);

    let chess = store.find_by_name("Chess Club").await.unwrap().unwrap();
    let racers = chess
        .participants
        .iter()
        .filter(|p| p.as_str() == "racer@mergington.edu")
        .count();
    assert_eq!(racers, 1);
}

#[tokio::test]
async fn reset_replaces_previous_contents() {
    let store = default_store().await;
    store
        .add_participant("Drama Club", "extra@mergington.edu")
        .await
        .unwrap();

    store.reset(&[CHESS_CLUB]).await.unwrap();

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Chess Club");
    assert_eq!(listed[0].participants, vec!["michael@mergington.edu"]);
    assert!(store.find_by_name("Drama Club").await.unwrap().is_none());
}

#[tokio::test]
async fn closed_store_returns_errors() {
    let store = store_with(&[CHESS_CLUB]).await;
    store.close().await;

    assert!(store.list_all().await.is_err());
    assert!(store
        .add_participant("Chess Club", "late@mergington.edu")
        .await
        .is_err());
}
