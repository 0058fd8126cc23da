use super::*;

/// Tests that a bulk save overwrites position and title for each submitted
/// record and returns exactly the submitted IDs.
///
/// Expected: Ok with both records rewritten, untouched list absent from result
#[tokio::test]
async fn overwrites_submitted_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::list::create_list_at(db, 0).await?;
    let b = factory::list::create_list_at(db, 1).await?;
    let untouched = factory::list::create_list_at(db, 2).await?;

    let repo = ListRepository::new(db);
    let saved = repo
        .save_many(vec![
            UpsertListParams {
                id: a.id,
                title: "A moved".to_string(),
                position: 5,
            },
            UpsertListParams {
                id: b.id,
                title: "B moved".to_string(),
                position: 3,
            },
        ])
        .await?;

    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|list| list.id != untouched.id));

    let stored_a = saved.iter().find(|list| list.id == a.id).unwrap();
    assert_eq!(stored_a.position, 5);
    assert_eq!(stored_a.title, "A moved");

    let stored_b = saved.iter().find(|list| list.id == b.id).unwrap();
    assert_eq!(stored_b.position, 3);

    Ok(())
}

/// Tests that the overwrite changes subsequent board order.
///
/// Submitting positions 5 and 3 for lists created at 0 and 1 must sort the
/// second list before the first afterwards.
#[tokio::test]
async fn reorder_changes_board_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::list::create_list_at(db, 0).await?;
    let b = factory::list::create_list_at(db, 1).await?;

    let repo = ListRepository::new(db);
    repo.save_many(vec![
        UpsertListParams {
            id: a.id,
            title: a.title.clone(),
            position: 5,
        },
        UpsertListParams {
            id: b.id,
            title: b.title.clone(),
            position: 3,
        },
    ])
    .await?;

    let ids: Vec<i32> = repo.get_all().await?.iter().map(|list| list.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    Ok(())
}

/// Tests that an ID with no stored record is inserted rather than rejected.
///
/// Expected: Ok with the new record present afterwards
#[tokio::test]
async fn inserts_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListRepository::new(db);
    let saved = repo
        .save_many(vec![UpsertListParams {
            id: 42,
            title: "Resurrected".to_string(),
            position: 0,
        }])
        .await?;

    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, 42);

    let stored = entity::prelude::List::find_by_id(42).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that creation timestamps survive an overwrite while updated_at moves.
#[tokio::test]
async fn preserves_created_at_on_overwrite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let list = factory::list::create_list(db).await?;

    let repo = ListRepository::new(db);
    let saved = repo
        .save_many(vec![UpsertListParams {
            id: list.id,
            title: list.title.clone(),
            position: 9,
        }])
        .await?;

    assert_eq!(saved[0].created_at, list.created_at);
    assert!(saved[0].updated_at >= list.updated_at);

    Ok(())
}
