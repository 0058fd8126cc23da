use crate::model::card::{CreateCardParams, UpsertCardParams};
use crate::service::card::CardService;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};


/// Minimal create parameters for a card in the given list.
fn new_card(title: &str, list_id: i32) -> CreateCardParams {
    CreateCardParams {
        title: title.to_string(),
        description: None,
        due_date: None,
        list_id,
    }
}
