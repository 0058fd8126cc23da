use super::*;

/// Tests that cards come back sorted ascending by position regardless of
/// insertion order or owning list.
///
/// Expected: Ok with global position order
#[tokio::test]
async fn returns_cards_sorted_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let todo = factory::list::create_list(db).await?;
    let doing = factory::list::create_list(db).await?;

    let third = factory::card::create_card_at(db, todo.id, 4).await?;
    let first = factory::card::create_card_at(db, doing.id, 0).await?;
    let second = factory::card::create_card_at(db, todo.id, 1).await?;

    let repo = CardRepository::new(db);
    let cards = repo.get_all().await?;

    let ids: Vec<i32> = cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that an empty store returns an empty vector.
#[tokio::test]
async fn returns_empty_when_no_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
