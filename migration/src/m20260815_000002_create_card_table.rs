use sea_orm_migration::{prelude::*, schema::*};

use super::m20260815_000001_create_list_table::List;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(string(Card::Title))
                    .col(text_null(Card::Description))
                    .col(integer(Card::Position))
                    .col(boolean(Card::Completed).default(false))
                    .col(timestamp_null(Card::DueDate))
                    .col(integer(Card::ListId))
                    .col(
                        timestamp(Card::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Card::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_list_id")
                            .from(Card::Table, Card::ListId)
                            .to(List::Table, List::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    Title,
    Description,
    Position,
    Completed,
    DueDate,
    ListId,
    CreatedAt,
    UpdatedAt,
}
