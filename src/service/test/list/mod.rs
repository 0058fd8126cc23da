use crate::model::list::UpsertListParams;
use crate::service::list::ListService;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod reorder;
