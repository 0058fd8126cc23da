use super::*;

/// Tests the reorder contract end to end: submitted positions are persisted
/// verbatim and a subsequent listing reflects the new order.
#[tokio::test]
async fn persists_positions_and_changes_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let a = service.create("A".to_string()).await.unwrap();
    let b = service.create("B".to_string()).await.unwrap();

    service
        .reorder(vec![
            UpsertListParams {
                id: a.id,
                title: "A".to_string(),
                position: 5,
            },
            UpsertListParams {
                id: b.id,
                title: "B".to_string(),
                position: 3,
            },
        ])
        .await
        .unwrap();

    let lists = service.get_all().await.unwrap();
    let ids: Vec<i32> = lists.iter().map(|list| list.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert_eq!(lists[0].position, 3);
    assert_eq!(lists[1].position, 5);

    Ok(())
}

/// Tests that lists outside the submitted set are left untouched.
#[tokio::test]
async fn leaves_unsubmitted_lists_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ListService::new(db);
    let moved = service.create("Moved".to_string()).await.unwrap();
    let bystander = service.create("Bystander".to_string()).await.unwrap();

    service
        .reorder(vec![UpsertListParams {
            id: moved.id,
            title: "Moved".to_string(),
            position: 10,
        }])
        .await
        .unwrap();

    let stored = entity::prelude::List::find_by_id(bystander.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.position, bystander.position);
    assert_eq!(stored.updated_at, bystander.updated_at);

    Ok(())
}
