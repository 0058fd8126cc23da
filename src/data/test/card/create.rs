use super::*;

/// Tests creating a card with only the required fields.
///
/// Verifies defaults: no description, not completed, no due date.
///
/// Expected: Ok with card created
#[tokio::test]
async fn creates_card_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::list::create_list(db).await?;

    let repo = CardRepository::new(db);
    let card = repo
        .create(
            CreateCardParams {
                title: "Fix login flow".to_string(),
                description: None,
                due_date: None,
                list_id: list.id,
            },
            0,
        )
        .await?;

    assert_eq!(card.title, "Fix login flow");
    assert_eq!(card.position, 0);
    assert_eq!(card.list_id, list.id);
    assert_eq!(card.description, None);
    assert!(!card.completed);
    assert_eq!(card.due_date, None);

    let stored = entity::prelude::Card::find_by_id(card.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests creating a card with description and due date.
///
/// Expected: Ok with optional fields persisted
#[tokio::test]
async fn creates_card_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::list::create_list(db).await?;
    let due = chrono::Utc::now() + chrono::Duration::days(3);

    let repo = CardRepository::new(db);
    let card = repo
        .create(
            CreateCardParams {
                title: "Release notes".to_string(),
                description: Some("Draft and review".to_string()),
                due_date: Some(due),
                list_id: list.id,
            },
            2,
        )
        .await?;

    assert_eq!(card.description.as_deref(), Some("Draft and review"));
    assert_eq!(card.due_date, Some(due));
    assert_eq!(card.position, 2);

    Ok(())
}

/// Tests that a card referencing a missing list is rejected by the foreign
/// key rather than silently inserted.
///
/// Expected: Err
#[tokio::test]
async fn rejects_unknown_list_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let result = repo
        .create(
            CreateCardParams {
                title: "Orphan".to_string(),
                description: None,
                due_date: None,
                list_id: 12345,
            },
            0,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
