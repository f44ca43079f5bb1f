use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub create_date: DateTimeWithTimeZone,
    pub update_date: DateTimeWithTimeZone,
    pub last_donation_date: Option<DateTimeWithTimeZone>,
    pub date_of_birth: DateTimeWithTimeZone,
    pub user_type: String,
    pub blood_type: String,
    pub password_hash: String,
    pub session_token_hash: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
