use super::*;

/// Tests creating a list at an explicit position.
///
/// Verifies that the repository inserts the record with the given title and
/// position and that it is readable afterwards.
///
/// Expected: Ok with list created
#[tokio::test]
async fn creates_list_with_given_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListRepository::new(db);
    let list = repo.create("Backlog".to_string(), 4).await?;

    assert_eq!(list.title, "Backlog");
    assert_eq!(list.position, 4);

    let stored = entity::prelude::List::find_by_id(list.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().position, 4);

    Ok(())
}

/// Tests that timestamps are assigned by the repository on insert.
///
/// Expected: created_at and updated_at set to the same instant
#[tokio::test]
async fn sets_timestamps_on_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListRepository::new(db);
    let list = repo.create("Todo".to_string(), 0).await?;

    assert_eq!(list.created_at, list.updated_at);

    Ok(())
}
