use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blood_inventories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type_id: i32,
    pub available_units: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hospitals::Entity",
        from = "Column::HospitalId",
        to = "super::hospitals::Column::Id"
    )]
    Hospitals,
    #[sea_orm(
        belongs_to = "super::blood_types::Entity",
        from = "Column::BloodTypeId",
        to = "super::blood_types::Column::Id"
    )]
    BloodTypes,
}

impl Related<super::hospitals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hospitals.def()
    }
}

impl Related<super::blood_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BloodTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
