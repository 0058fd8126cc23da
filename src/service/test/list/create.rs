use super::*;

/// Tests the append base case: the first list on an empty board gets
/// position 0.
#[tokio::test]
async fn first_list_gets_position_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let list = service.create("Todo".to_string()).await.unwrap();

    assert_eq!(list.position, 0);

    Ok(())
}

/// Tests that each appended list gets one more than the previous maximum.
#[tokio::test]
async fn appends_one_past_current_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let first = service.create("Todo".to_string()).await.unwrap();
    let second = service.create("Doing".to_string()).await.unwrap();
    let third = service.create("Done".to_string()).await.unwrap();

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_eq!(third.position, 2);

    Ok(())
}

/// Tests that appending after a reorder left gaps still lands one past the
/// highest position, not in a gap.
#[tokio::test]
async fn appends_after_position_gap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::list::create_list_at(db, 7).await?;

    let service = ListService::new(db);
    let list = service.create("Next".to_string()).await.unwrap();

    assert_eq!(list.position, 8);

    Ok(())
}

/// Tests that appending past a list parked at the maximum position saturates
/// instead of wrapping negative.
#[tokio::test]
async fn append_saturates_at_position_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::list::create_list_at(db, i32::MAX).await?;

    let service = ListService::new(db);
    let list = service.create("At the edge".to_string()).await.unwrap();

    assert_eq!(list.position, i32::MAX);

    Ok(())
}

/// Tests that duplicate positions, as racing appends can produce, do not
/// break a subsequent append or listing.
#[tokio::test]
async fn tolerates_duplicate_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // Two lists at the same position, as if two appends raced.
    factory::list::create_list_at(db, 2).await?;
    factory::list::create_list_at(db, 2).await?;

    let service = ListService::new(db);
    let appended = service.create("After the race".to_string()).await.unwrap();

    assert_eq!(appended.position, 3);

    let lists = service.get_all().await.unwrap();
    assert_eq!(lists.len(), 3);
    let positions: Vec<i32> = lists.iter().map(|list| list.position).collect();
    assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));

    Ok(())
}
