use super::*;

/// Tests that lists come back sorted ascending by position regardless of
/// insertion order.
///
/// Expected: Ok with board order independent of creation order
#[tokio::test]
async fn returns_lists_sorted_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let middle = factory::list::create_list_at(db, 2).await?;
    let first = factory::list::create_list_at(db, 0).await?;
    let last = factory::list::create_list_at(db, 7).await?;

    let repo = ListRepository::new(db);
    let lists = repo.get_all().await?;

    let ids: Vec<i32> = lists.iter().map(|list| list.id).collect();
    assert_eq!(ids, vec![first.id, middle.id, last.id]);

    Ok(())
}

/// Tests that an empty board returns an empty vector rather than an error.
#[tokio::test]
async fn returns_empty_for_empty_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListRepository::new(db);
    let lists = repo.get_all().await?;

    assert!(lists.is_empty());

    Ok(())
}
